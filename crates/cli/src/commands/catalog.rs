use proposta_core::{BillingCycle, Catalog, Plan, PricingKind};

use super::CommandResult;

pub fn run(plan: Plan, cycle: BillingCycle) -> CommandResult {
    let catalog = match Catalog::standard() {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("catalog", "catalog_integrity", error.to_string(), 2)
        }
    };

    let mut lines = vec![format!("catalog for {plan:?} / {cycle:?}:")];
    for category in catalog.categories() {
        lines.push(format!("{} {}", category.icon, category.name));
        for module in &category.modules {
            let price = match catalog.resolve_price(plan, cycle, &module.id) {
                Some(price) => match module.pricing_kind {
                    PricingKind::PerSeat => format!("R$ {} por funcionário", price.round_dp(2)),
                    PricingKind::Fixed => format!("R$ {} fixo", price.round_dp(2)),
                },
                None => "indisponível".to_string(),
            };
            lines.push(format!("  {:<22} {:<38} {}", module.id.to_string(), module.name, price));
        }
    }

    CommandResult::ok(lines.join("\n"))
}
