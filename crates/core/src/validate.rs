use rust_decimal::Decimal;

use crate::domain::client::ClientContext;
use crate::domain::selection::Selection;
use crate::errors::{ValidationFailure, ValidationReport};

/// Check that a quote request is complete and well-formed before the quote
/// is finalized.
///
/// Rules are evaluated independently so the caller can surface every
/// problem at once instead of fixing them one round-trip at a time.
pub fn validate(selection: &Selection, ctx: &ClientContext) -> ValidationReport {
    let mut failures = Vec::new();

    if ctx.company_name.trim().is_empty() {
        failures.push(ValidationFailure::MissingCompanyName);
    }

    if ctx.employee_count == 0 {
        failures.push(ValidationFailure::InvalidEmployeeCount);
    }

    if selection.is_empty() {
        failures.push(ValidationFailure::EmptySelection);
    }

    if ctx.discount_percent < Decimal::ZERO || ctx.discount_percent > Decimal::ONE_HUNDRED {
        failures.push(ValidationFailure::DiscountOutOfRange);
    }

    ValidationReport { failures }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::validate;
    use crate::domain::client::ClientContext;
    use crate::domain::module::ModuleId;
    use crate::domain::selection::Selection;
    use crate::errors::ValidationFailure;

    fn valid_ctx() -> ClientContext {
        ClientContext {
            company_name: "Acme Ltda".to_owned(),
            employee_count: 50,
            ..ClientContext::default()
        }
    }

    fn base_selection() -> Selection {
        Selection::new(ModuleId::new("base-factorial"))
    }

    #[test]
    fn valid_request_passes() {
        let report = validate(&base_selection(), &valid_ctx());
        assert!(report.is_ok());
    }

    #[test]
    fn base_only_selection_counts_as_non_empty() {
        let ctx = ClientContext { company_name: "   ".to_owned(), ..valid_ctx() };
        let report = validate(&base_selection(), &ctx);

        assert!(report.contains(ValidationFailure::MissingCompanyName));
        assert!(!report.contains(ValidationFailure::EmptySelection));
        assert_eq!(report.failures.len(), 1);
    }

    #[test]
    fn all_failures_are_collected_in_one_pass() {
        let ctx = ClientContext {
            company_name: String::new(),
            employee_count: 0,
            discount_percent: Decimal::from(120),
            ..ClientContext::default()
        };
        let report = validate(&base_selection(), &ctx);

        assert!(report.contains(ValidationFailure::MissingCompanyName));
        assert!(report.contains(ValidationFailure::InvalidEmployeeCount));
        assert!(report.contains(ValidationFailure::DiscountOutOfRange));
        assert_eq!(report.failures.len(), 3);
    }

    #[test]
    fn zero_headcount_is_rejected() {
        let ctx = ClientContext { employee_count: 0, ..valid_ctx() };
        let report = validate(&base_selection(), &ctx);

        assert_eq!(report.failures, vec![ValidationFailure::InvalidEmployeeCount]);
    }

    #[test]
    fn boundary_discounts_are_accepted() {
        for percent in [Decimal::ZERO, Decimal::ONE_HUNDRED] {
            let ctx = ClientContext { discount_percent: percent, ..valid_ctx() };
            assert!(validate(&base_selection(), &ctx).is_ok(), "{percent}% must validate");
        }

        let ctx = ClientContext { discount_percent: Decimal::new(-1, 0), ..valid_ctx() };
        assert!(validate(&base_selection(), &ctx).contains(ValidationFailure::DiscountOutOfRange));
    }
}
