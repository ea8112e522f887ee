use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::client::ClientContext;
use crate::domain::module::ModuleId;
use crate::domain::plan::{BillingCycle, Plan};
use crate::domain::quote::Quote;
use crate::domain::selection::Selection;
use crate::errors::ValidationReport;
use crate::pricing::compute_quote;
use crate::validate::validate;

/// Caller-owned proposal state with functional update entry points.
///
/// Every setter consumes the state and returns a new snapshot; nothing is
/// mutated in place. A reactive caller recomputes the quote after each
/// change and can replay any sequence of edits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalState {
    pub client: ClientContext,
    pub plan: Plan,
    pub cycle: BillingCycle,
    pub selection: Selection,
}

impl ProposalState {
    /// Fresh state: empty client fields, Business plan billed yearly, only
    /// the base module selected.
    pub fn new(base_module: ModuleId) -> Self {
        Self {
            client: ClientContext::default(),
            plan: Plan::Business,
            cycle: BillingCycle::Yearly,
            selection: Selection::new(base_module),
        }
    }

    pub fn set_company_name(mut self, name: impl Into<String>) -> Self {
        self.client.company_name = name.into();
        self
    }

    pub fn set_contact_name(mut self, name: impl Into<String>) -> Self {
        self.client.contact_name = Some(name.into());
        self
    }

    pub fn set_contact_role(mut self, role: impl Into<String>) -> Self {
        self.client.contact_role = Some(role.into());
        self
    }

    pub fn set_region(mut self, region: impl Into<String>) -> Self {
        self.client.region = Some(region.into());
        self
    }

    pub fn set_employee_count(mut self, count: u32) -> Self {
        self.client.employee_count = count;
        self
    }

    pub fn set_discount(mut self, percent: Decimal) -> Self {
        self.client.discount_percent = percent;
        self
    }

    /// Changing plan never prunes the selection; modules unavailable under
    /// the new plan simply drop out of the line items until the plan
    /// changes back.
    pub fn set_plan(mut self, plan: Plan) -> Self {
        self.plan = plan;
        self
    }

    pub fn set_billing_cycle(mut self, cycle: BillingCycle) -> Self {
        self.cycle = cycle;
        self
    }

    pub fn toggle_module(mut self, id: &ModuleId) -> Self {
        self.selection = self.selection.toggle(id);
        self
    }

    pub fn quote(&self, catalog: &Catalog) -> Quote {
        compute_quote(catalog, &self.selection, &self.client, self.plan, self.cycle)
    }

    pub fn validate(&self) -> ValidationReport {
        validate(&self.selection, &self.client)
    }
}
