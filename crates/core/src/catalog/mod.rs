mod standard;

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::domain::module::{Module, ModuleCategory, ModuleId};
use crate::domain::plan::{BillingCycle, Plan};
use crate::errors::CatalogError;

/// Unit prices keyed by plan, cycle, and module.
///
/// A missing entry means the module is not offered under that plan/cycle
/// combination; a zero price is a valid economic value and stays distinct
/// from absence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceTable {
    entries: HashMap<(Plan, BillingCycle, ModuleId), Decimal>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, plan: Plan, cycle: BillingCycle, module: ModuleId, price: Decimal) {
        self.entries.insert((plan, cycle, module), price);
    }

    pub fn get(&self, plan: Plan, cycle: BillingCycle, module: &ModuleId) -> Option<Decimal> {
        self.entries.get(&(plan, cycle, module.clone())).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(Plan, BillingCycle, ModuleId), &Decimal)> {
        self.entries.iter()
    }
}

/// Immutable module and price registry, checked for integrity at load time
/// and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct Catalog {
    categories: Vec<ModuleCategory>,
    prices: PriceTable,
    base_module: ModuleId,
}

impl Catalog {
    /// Build a catalog from caller-supplied data, enforcing the load-time
    /// invariants: unique module ids, every priced module declared, the
    /// base module priced under every plan/cycle pair, no negative prices.
    pub fn new(
        categories: Vec<ModuleCategory>,
        prices: PriceTable,
        base_module: ModuleId,
    ) -> Result<Self, CatalogError> {
        let mut known = HashSet::new();
        for module in categories.iter().flat_map(|category| category.modules.iter()) {
            if !known.insert(module.id.clone()) {
                return Err(CatalogError::DuplicateModuleId(module.id.clone()));
            }
        }

        if !known.contains(&base_module) {
            return Err(CatalogError::MissingBaseModule(base_module));
        }

        for (&(plan, cycle, ref module), &price) in prices.iter() {
            if !known.contains(module) {
                return Err(CatalogError::UnknownModuleInPriceTable {
                    module: module.clone(),
                    plan,
                    cycle,
                });
            }
            if price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice { module: module.clone(), plan, cycle });
            }
        }

        for plan in Plan::ALL {
            for cycle in BillingCycle::ALL {
                if prices.get(plan, cycle, &base_module).is_none() {
                    return Err(CatalogError::BaseModuleMissingPrice {
                        base: base_module.clone(),
                        plan,
                        cycle,
                    });
                }
            }
        }

        Ok(Self { categories, prices, base_module })
    }

    /// The embedded production catalog.
    pub fn standard() -> Result<Self, CatalogError> {
        standard::build()
    }

    pub fn categories(&self) -> &[ModuleCategory] {
        &self.categories
    }

    /// All modules in catalog display order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.categories.iter().flat_map(|category| category.modules.iter())
    }

    pub fn find_module(&self, id: &ModuleId) -> Option<&Module> {
        self.modules().find(|module| &module.id == id)
    }

    pub fn base_module(&self) -> &ModuleId {
        &self.base_module
    }

    /// Look up the unit price for a module under a plan/cycle pair.
    ///
    /// `None` means the module cannot be purchased under that combination;
    /// it is not an error and not a zero price.
    pub fn resolve_price(&self, plan: Plan, cycle: BillingCycle, module: &ModuleId) -> Option<Decimal> {
        self.prices.get(plan, cycle, module)
    }
}
