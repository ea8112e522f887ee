pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod pricing;
pub mod session;
pub mod validate;

pub use catalog::{Catalog, PriceTable};
pub use domain::client::ClientContext;
pub use domain::module::{Module, ModuleCategory, ModuleId, PricingKind};
pub use domain::plan::{BillingCycle, Plan};
pub use domain::quote::{LineItem, Quote};
pub use domain::selection::Selection;
pub use errors::{CatalogError, ValidationFailure, ValidationReport};
pub use pricing::{compute_quote, CycleComparison};
pub use session::ProposalState;
pub use validate::validate;
