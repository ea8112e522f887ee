use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::domain::client::ClientContext;
use crate::domain::module::PricingKind;
use crate::domain::plan::{BillingCycle, Plan};
use crate::domain::quote::LineItem;
use crate::domain::selection::Selection;

/// Resolve each selected module into a line item, in catalog display order.
///
/// Modules without a price under the requested plan/cycle are excluded
/// from the result rather than charged at zero; the selection itself is
/// left untouched so the modules reappear if the plan changes back.
///
/// Assumes a validated context: the validator rejects bad headcounts
/// before aggregation runs.
pub fn line_items(
    catalog: &Catalog,
    selection: &Selection,
    ctx: &ClientContext,
    plan: Plan,
    cycle: BillingCycle,
) -> Vec<LineItem> {
    let mut items = Vec::new();

    for module in catalog.modules() {
        if !selection.contains(&module.id) {
            continue;
        }
        let Some(unit_price) = catalog.resolve_price(plan, cycle, &module.id) else {
            continue;
        };

        let cost = match module.pricing_kind {
            PricingKind::Fixed => unit_price,
            PricingKind::PerSeat => unit_price * Decimal::from(ctx.employee_count),
        };

        items.push(LineItem {
            module_id: module.id.clone(),
            name: module.name.clone(),
            unit_price,
            cost,
        });
    }

    items
}

/// Exact sum of line item costs. No rounding happens before the discount
/// step.
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items.iter().map(|item| item.cost).sum()
}
