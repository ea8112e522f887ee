pub mod aggregate;
pub mod discount;

pub use aggregate::{line_items, subtotal};
pub use discount::{apply_discount, monthly_equivalent, CycleComparison};

use crate::catalog::Catalog;
use crate::domain::client::ClientContext;
use crate::domain::plan::{BillingCycle, Plan};
use crate::domain::quote::Quote;
use crate::domain::selection::Selection;

/// Derive the complete quote for one selection under one plan and cycle.
///
/// The derivation is deterministic and free of side effects: identical
/// inputs always produce an identical quote, so callers may recompute on
/// every input change.
pub fn compute_quote(
    catalog: &Catalog,
    selection: &Selection,
    ctx: &ClientContext,
    plan: Plan,
    cycle: BillingCycle,
) -> Quote {
    let items = aggregate::line_items(catalog, selection, ctx, plan, cycle);
    let subtotal = aggregate::subtotal(&items);
    let total = discount::apply_discount(subtotal, ctx.discount_percent);
    let discount_amount = subtotal - total;
    let monthly_equivalent = discount::monthly_equivalent(total, cycle);

    // The yearly-over-monthly comparison only makes sense while billing
    // monthly; a yearly subscriber is already on the cheaper cycle.
    let yearly_savings = match cycle {
        BillingCycle::Monthly => {
            Some(CycleComparison::for_selection(catalog, selection, ctx, plan).savings())
        }
        BillingCycle::Yearly => None,
    };

    Quote { line_items: items, subtotal, discount_amount, total, monthly_equivalent, yearly_savings }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::compute_quote;
    use crate::catalog::Catalog;
    use crate::domain::client::ClientContext;
    use crate::domain::module::ModuleId;
    use crate::domain::plan::{BillingCycle, Plan};
    use crate::domain::selection::Selection;

    fn ctx(employee_count: u32, discount_percent: Decimal) -> ClientContext {
        ClientContext {
            company_name: "Acme Ltda".to_owned(),
            employee_count,
            discount_percent,
            ..ClientContext::default()
        }
    }

    fn base_selection() -> Selection {
        Selection::new(ModuleId::new("base-factorial"))
    }

    #[test]
    fn business_yearly_base_only_for_fifty_seats() {
        let catalog = Catalog::standard().expect("catalog");
        let quote = compute_quote(
            &catalog,
            &base_selection(),
            &ctx(50, Decimal::ZERO),
            Plan::Business,
            BillingCycle::Yearly,
        );

        assert_eq!(quote.line_items.len(), 1);
        assert_eq!(quote.line_items[0].unit_price, Decimal::new(950, 2));
        assert_eq!(quote.subtotal, Decimal::new(47500, 2));
        assert_eq!(quote.total, Decimal::new(47500, 2));
        assert_eq!(quote.yearly_savings, None);
    }

    #[test]
    fn adding_time_tracking_adds_its_per_seat_cost() {
        let catalog = Catalog::standard().expect("catalog");
        let selection = base_selection().toggle(&ModuleId::new("controle-ponto"));
        let quote = compute_quote(
            &catalog,
            &selection,
            &ctx(50, Decimal::ZERO),
            Plan::Business,
            BillingCycle::Yearly,
        );

        // 475.00 base + 2.55 * 50 = 602.50
        assert_eq!(quote.line_items.len(), 2);
        assert_eq!(quote.line_items[1].cost, Decimal::new(12750, 2));
        assert_eq!(quote.subtotal, Decimal::new(60250, 2));
    }

    #[test]
    fn ten_percent_discount_applies_to_subtotal() {
        let catalog = Catalog::standard().expect("catalog");
        let selection = base_selection().toggle(&ModuleId::new("controle-ponto"));
        let quote = compute_quote(
            &catalog,
            &selection,
            &ctx(50, Decimal::from(10)),
            Plan::Business,
            BillingCycle::Yearly,
        );

        assert_eq!(quote.subtotal, Decimal::new(60250, 2));
        assert_eq!(quote.total, Decimal::new(542250, 3));
        assert_eq!(quote.discount_amount, quote.subtotal - quote.total);
    }

    #[test]
    fn enterprise_monthly_mixes_per_seat_and_fixed_pricing() {
        let catalog = Catalog::standard().expect("catalog");
        let selection = base_selection().toggle(&ModuleId::new("recrutamento"));
        let quote = compute_quote(
            &catalog,
            &selection,
            &ctx(50, Decimal::ZERO),
            Plan::Enterprise,
            BillingCycle::Monthly,
        );

        // base 9.00 * 50 = 450.00, recruitment fixed 650.00
        assert_eq!(quote.subtotal, Decimal::new(110000, 2));
        assert_eq!(quote.monthly_equivalent, quote.total);
        assert!(quote.yearly_savings.is_some());
    }

    #[test]
    fn monthly_cycle_reports_yearly_savings() {
        let catalog = Catalog::standard().expect("catalog");
        let quote = compute_quote(
            &catalog,
            &base_selection(),
            &ctx(50, Decimal::ZERO),
            Plan::Business,
            BillingCycle::Monthly,
        );

        // 10.30 * 50 * 12 - 9.50 * 50 = 5705.00
        assert_eq!(quote.yearly_savings, Some(Decimal::new(570500, 2)));
    }

    #[test]
    fn recomputation_with_identical_inputs_is_identical() {
        let catalog = Catalog::standard().expect("catalog");
        let selection = base_selection().toggle(&ModuleId::new("desempenho"));
        let context = ctx(120, Decimal::from(5));

        let first =
            compute_quote(&catalog, &selection, &context, Plan::Business, BillingCycle::Monthly);
        let second =
            compute_quote(&catalog, &selection, &context, Plan::Business, BillingCycle::Monthly);

        assert_eq!(first, second);
    }

    #[test]
    fn yearly_monthly_equivalent_divides_discounted_total() {
        let catalog = Catalog::standard().expect("catalog");
        let quote = compute_quote(
            &catalog,
            &base_selection(),
            &ctx(50, Decimal::ZERO),
            Plan::Business,
            BillingCycle::Yearly,
        );

        assert_eq!(quote.monthly_equivalent, quote.total / Decimal::from(12));
    }
}
