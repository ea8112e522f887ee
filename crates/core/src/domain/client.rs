use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Prospect details captured while a proposal is being assembled.
///
/// `employee_count` is an unsigned integer, so negative or fractional
/// headcounts are unrepresentable; the validator still rejects zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientContext {
    pub company_name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_role: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    pub employee_count: u32,
    #[serde(default)]
    pub discount_percent: Decimal,
}
