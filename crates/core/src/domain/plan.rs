use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commercial tier determining which modules are offered and at what price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Business,
    Enterprise,
}

impl Plan {
    pub const ALL: [Plan; 2] = [Plan::Business, Plan::Enterprise];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 2] = [BillingCycle::Monthly, BillingCycle::Yearly];
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported plan `{0}` (expected business|enterprise)")]
pub struct ParsePlanError(String);

impl std::str::FromStr for Plan {
    type Err = ParsePlanError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "business" => Ok(Self::Business),
            "enterprise" => Ok(Self::Enterprise),
            other => Err(ParsePlanError(other.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unsupported billing cycle `{0}` (expected monthly|yearly)")]
pub struct ParseBillingCycleError(String);

impl std::str::FromStr for BillingCycle {
    type Err = ParseBillingCycleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(ParseBillingCycleError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BillingCycle, Plan};

    #[test]
    fn plan_parses_case_insensitively() {
        assert_eq!(" Business ".parse::<Plan>(), Ok(Plan::Business));
        assert_eq!("ENTERPRISE".parse::<Plan>(), Ok(Plan::Enterprise));
        assert!("starter".parse::<Plan>().is_err());
    }

    #[test]
    fn billing_cycle_parses_case_insensitively() {
        assert_eq!("monthly".parse::<BillingCycle>(), Ok(BillingCycle::Monthly));
        assert_eq!("Yearly".parse::<BillingCycle>(), Ok(BillingCycle::Yearly));
        assert!("weekly".parse::<BillingCycle>().is_err());
    }
}
