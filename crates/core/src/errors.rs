use serde::Serialize;
use thiserror::Error;

use crate::domain::module::ModuleId;
use crate::domain::plan::{BillingCycle, Plan};

/// Load-time catalog integrity failures. Fatal: a malformed catalog must
/// prevent the engine from starting.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate module id `{0}` in catalog")]
    DuplicateModuleId(ModuleId),
    #[error("price table references unknown module `{module}` under {plan:?}/{cycle:?}")]
    UnknownModuleInPriceTable { module: ModuleId, plan: Plan, cycle: BillingCycle },
    #[error("base module `{0}` is not declared in any category")]
    MissingBaseModule(ModuleId),
    #[error("base module `{base}` has no price under {plan:?}/{cycle:?}")]
    BaseModuleMissingPrice { base: ModuleId, plan: Plan, cycle: BillingCycle },
    #[error("negative price for module `{module}` under {plan:?}/{cycle:?}")]
    NegativePrice { module: ModuleId, plan: Plan, cycle: BillingCycle },
}

/// A single user-correctable problem with a quote request.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationFailure {
    #[error("company name must not be empty")]
    MissingCompanyName,
    #[error("employee count must be greater than zero")]
    InvalidEmployeeCount,
    #[error("at least one module must be selected")]
    EmptySelection,
    #[error("discount must be between 0 and 100 percent")]
    DiscountOutOfRange,
}

/// Every failure found in one validation pass. Returned as data, never
/// raised as control flow, so the caller can report all problems at once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn contains(&self, failure: ValidationFailure) -> bool {
        self.failures.contains(&failure)
    }
}
