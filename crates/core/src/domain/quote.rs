use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::module::ModuleId;

/// One module's resolved cost contribution within a quote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub module_id: ModuleId,
    pub name: String,
    pub unit_price: Decimal,
    pub cost: Decimal,
}

/// Fully derived pricing output for one context/selection pair.
///
/// A quote is recomputed from scratch on every input change and never
/// mutated in place. `yearly_savings` is present only when the current
/// billing cycle is monthly; it may be negative on malformed catalog data
/// and is reported as-is rather than clamped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub line_items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
    pub monthly_equivalent: Decimal,
    pub yearly_savings: Option<Decimal>,
}
