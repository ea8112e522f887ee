use std::path::Path;

use rust_decimal::Decimal;

use proposta_core::{compute_quote, validate, Catalog, Quote, ValidationReport};

use super::CommandResult;
use crate::request::{self, QuoteRequest};

pub fn run(path: &Path, json: bool) -> CommandResult {
    let request = match request::load(path) {
        Ok(request) => request,
        Err(error) => return CommandResult::failure("quote", "request", format!("{error:#}"), 2),
    };

    let catalog = match Catalog::standard() {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("quote", "catalog_integrity", error.to_string(), 2)
        }
    };

    let ctx = request.client_context();
    let selection = request.selection(catalog.base_module());

    let report = validate(&selection, &ctx);
    if !report.is_ok() {
        return CommandResult { exit_code: 1, output: render_failures(&report, json) };
    }

    let quote = compute_quote(&catalog, &selection, &ctx, request.plan, request.billing_cycle);

    if let Some(savings) = quote.yearly_savings {
        if savings < Decimal::ZERO {
            tracing::warn!(%savings, "yearly savings are negative; check the catalog rate card");
        }
    }

    if json {
        match serde_json::to_string_pretty(&quote) {
            Ok(output) => CommandResult::ok(output),
            Err(error) => CommandResult::failure("quote", "serialization", error.to_string(), 2),
        }
    } else {
        CommandResult::ok(render_breakdown(&request, &quote))
    }
}

fn render_failures(report: &ValidationReport, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(report)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"));
    }

    let mut lines = vec!["quote request is incomplete:".to_string()];
    for failure in &report.failures {
        lines.push(format!("  - {failure}"));
    }
    lines.join("\n")
}

fn render_breakdown(request: &QuoteRequest, quote: &Quote) -> String {
    let mut lines = vec![format!(
        "quote for {} ({:?} / {:?}, {} funcionários):",
        request.company_name, request.plan, request.billing_cycle, request.employee_count
    )];

    for item in &quote.line_items {
        lines.push(format!("  {:<38} R$ {:>10}", item.name, item.cost.round_dp(2)));
    }
    lines.push(format!("  {:<38} R$ {:>10}", "subtotal", quote.subtotal.round_dp(2)));
    if quote.discount_amount > Decimal::ZERO {
        lines.push(format!(
            "  {:<38} -R$ {:>9}",
            format!("desconto ({}%)", request.discount_percent),
            quote.discount_amount.round_dp(2)
        ));
    }
    lines.push(format!("  {:<38} R$ {:>10}", "total", quote.total.round_dp(2)));
    lines.push(format!(
        "  {:<38} R$ {:>10}",
        "equivalente mensal",
        quote.monthly_equivalent.round_dp(2)
    ));
    if let Some(savings) = quote.yearly_savings {
        lines.push(format!(
            "  {:<38} R$ {:>10}",
            "economia no plano anual",
            savings.round_dp(2)
        ));
    }

    lines.join("\n")
}
