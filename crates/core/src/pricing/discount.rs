use rust_decimal::Decimal;

use super::aggregate;
use crate::catalog::Catalog;
use crate::domain::client::ClientContext;
use crate::domain::plan::{BillingCycle, Plan};
use crate::domain::selection::Selection;

/// Apply a percentage discount to an amount.
///
/// The percentage is clamped to [0, 100] before use; the validator rejects
/// out-of-range values before a quote is finalized.
pub fn apply_discount(amount: Decimal, percent: Decimal) -> Decimal {
    let percent = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    amount * (Decimal::ONE - percent / Decimal::ONE_HUNDRED)
}

/// Reduce a cycle total to its monthly equivalent.
pub fn monthly_equivalent(total: Decimal, cycle: BillingCycle) -> Decimal {
    match cycle {
        BillingCycle::Monthly => total,
        BillingCycle::Yearly => total / Decimal::from(12),
    }
}

/// Twelve months of monthly billing versus the yearly price of the same
/// selection and headcount.
///
/// Under sane catalog data the yearly price never exceeds annualized
/// monthly billing, so `savings()` is non-negative. A negative value
/// indicates a catalog data error; it is reported as-is for diagnostics
/// instead of being clamped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleComparison {
    pub annualized_monthly: Decimal,
    pub yearly_total: Decimal,
}

impl CycleComparison {
    /// Re-runs aggregation under both cycles against the same selection.
    pub fn for_selection(
        catalog: &Catalog,
        selection: &Selection,
        ctx: &ClientContext,
        plan: Plan,
    ) -> Self {
        let monthly = aggregate::subtotal(&aggregate::line_items(
            catalog,
            selection,
            ctx,
            plan,
            BillingCycle::Monthly,
        ));
        let yearly = aggregate::subtotal(&aggregate::line_items(
            catalog,
            selection,
            ctx,
            plan,
            BillingCycle::Yearly,
        ));

        Self { annualized_monthly: monthly * Decimal::from(12), yearly_total: yearly }
    }

    pub fn savings(&self) -> Decimal {
        self.annualized_monthly - self.yearly_total
    }

    pub fn is_anomalous(&self) -> bool {
        self.savings() < Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{apply_discount, monthly_equivalent, CycleComparison};
    use crate::catalog::Catalog;
    use crate::domain::client::ClientContext;
    use crate::domain::module::ModuleId;
    use crate::domain::plan::{BillingCycle, Plan};
    use crate::domain::selection::Selection;

    #[test]
    fn zero_discount_is_identity() {
        let amount = Decimal::new(60250, 2);
        assert_eq!(apply_discount(amount, Decimal::ZERO), amount);
    }

    #[test]
    fn full_discount_reaches_zero() {
        let amount = Decimal::new(60250, 2);
        assert_eq!(apply_discount(amount, Decimal::ONE_HUNDRED), Decimal::ZERO);
    }

    #[test]
    fn out_of_range_percentages_are_clamped() {
        let amount = Decimal::new(10000, 2);
        assert_eq!(apply_discount(amount, Decimal::from(150)), Decimal::ZERO);
        assert_eq!(apply_discount(amount, Decimal::from(-10)), amount);
    }

    #[test]
    fn monthly_equivalent_is_identity_under_monthly() {
        let total = Decimal::new(110000, 2);
        assert_eq!(monthly_equivalent(total, BillingCycle::Monthly), total);
    }

    #[test]
    fn monthly_equivalent_divides_yearly_by_twelve() {
        let total = Decimal::from(1200);
        assert_eq!(monthly_equivalent(total, BillingCycle::Yearly), Decimal::from(100));
    }

    #[test]
    fn standard_catalog_savings_are_non_negative() {
        let catalog = Catalog::standard().expect("catalog");
        let selection = Selection::new(ModuleId::new("base-factorial"))
            .toggle(&ModuleId::new("controle-ponto"))
            .toggle(&ModuleId::new("recrutamento"));
        let ctx = ClientContext {
            company_name: "Acme".to_owned(),
            employee_count: 50,
            ..ClientContext::default()
        };

        for plan in Plan::ALL {
            let comparison = CycleComparison::for_selection(&catalog, &selection, &ctx, plan);
            assert!(!comparison.is_anomalous(), "standard rate card must favor yearly billing");
            assert!(comparison.savings() >= Decimal::ZERO);
        }
    }

    #[test]
    fn base_only_savings_match_rate_card_delta() {
        let catalog = Catalog::standard().expect("catalog");
        let selection = Selection::new(ModuleId::new("base-factorial"));
        let ctx = ClientContext {
            company_name: "Acme".to_owned(),
            employee_count: 50,
            ..ClientContext::default()
        };

        let comparison =
            CycleComparison::for_selection(&catalog, &selection, &ctx, Plan::Business);

        // 10.30 * 50 * 12 - 9.50 * 50 = 6180.00 - 475.00
        assert_eq!(comparison.annualized_monthly, Decimal::new(618000, 2));
        assert_eq!(comparison.yearly_total, Decimal::new(47500, 2));
        assert_eq!(comparison.savings(), Decimal::new(570500, 2));
    }
}
