pub mod client;
pub mod module;
pub mod plan;
pub mod quote;
pub mod selection;
