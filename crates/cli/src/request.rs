use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;

use proposta_core::{BillingCycle, ClientContext, ModuleId, Plan, Selection};

/// Quote request file as accepted by `proposta quote` and `proposta
/// propose`. Plan and cycle default to a fresh session (Business, yearly);
/// the base module never needs to be listed.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub company_name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_role: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub employee_count: u32,
    #[serde(default)]
    pub discount_percent: Decimal,
    #[serde(default = "default_plan")]
    pub plan: Plan,
    #[serde(default = "default_cycle")]
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub modules: Vec<String>,
}

fn default_plan() -> Plan {
    Plan::Business
}

fn default_cycle() -> BillingCycle {
    BillingCycle::Yearly
}

pub fn load(path: &Path) -> Result<QuoteRequest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read request file `{}`", path.display()))?;
    let request = toml::from_str(&raw)
        .with_context(|| format!("could not parse request file `{}`", path.display()))?;
    Ok(request)
}

impl QuoteRequest {
    pub fn client_context(&self) -> ClientContext {
        ClientContext {
            company_name: self.company_name.clone(),
            contact_name: self.contact_name.clone(),
            contact_role: self.contact_role.clone(),
            region: self.region.clone(),
            employee_count: self.employee_count,
            discount_percent: self.discount_percent,
        }
    }

    pub fn selection(&self, base: &ModuleId) -> Selection {
        Selection::with_modules(base.clone(), self.modules.iter().map(|id| ModuleId::new(id.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use proposta_core::{BillingCycle, ModuleId, Plan};

    use super::QuoteRequest;

    #[test]
    fn minimal_request_uses_session_defaults() {
        let request: QuoteRequest = toml::from_str(
            r#"
company_name = "Acme Ltda"
employee_count = 50
"#,
        )
        .expect("parse");

        assert_eq!(request.plan, Plan::Business);
        assert_eq!(request.billing_cycle, BillingCycle::Yearly);
        assert!(request.modules.is_empty());

        let selection = request.selection(&ModuleId::new("base-factorial"));
        assert_eq!(selection.len(), 1, "base module is always present");
    }

    #[test]
    fn duplicate_base_module_entry_is_harmless() {
        let request: QuoteRequest = toml::from_str(
            r#"
company_name = "Acme Ltda"
employee_count = 50
modules = ["base-factorial", "controle-ponto"]
"#,
        )
        .expect("parse");

        let selection = request.selection(&ModuleId::new("base-factorial"));
        assert_eq!(selection.len(), 2);
    }
}
