//! Proposal document assembly.
//!
//! Turns a finalized quote into a shareable HTML proposal using Tera
//! templates. All currency and date formatting happens here; the engine
//! hands over raw amounts and never formats strings itself.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use proposta_core::{BillingCycle, ClientContext, Plan, Quote};

const TEMPLATE_NAME: &str = "proposal.html";
const DEFAULT_TEMPLATE: &str = include_str!("../templates/proposal.html");

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Register custom Tera filters used by proposal templates.
///
/// - `format`: printf-style formatting, e.g. `"%.2f" | format(value=price)`
/// - `money`:  alias for 2-decimal rounding, e.g. `amount | money`
pub fn register_template_filters(tera: &mut Tera) {
    tera.register_filter("format", tera_format_filter);
    tera.register_filter("money", tera_money_filter);
}

fn numeric_value(value: &tera::Value) -> f64 {
    match value {
        tera::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        tera::Value::String(s) => s.parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Implements printf-style `format` filter for Tera.
/// Usage: `"%.2f" | format(value=some_number)`
fn tera_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let format_str = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("format filter expects a string input"))?;

    let val = args
        .get("value")
        .ok_or_else(|| tera::Error::msg("format filter requires a 'value' argument"))?;
    let num = numeric_value(val);

    // Parse %.<N>f patterns
    let result = if let Some(rest) = format_str.strip_prefix("%.") {
        if let Some(precision_str) = rest.strip_suffix('f') {
            let precision: usize = precision_str.parse().unwrap_or(2);
            format!("{:.*}", precision, num)
        } else {
            format!("{}", num)
        }
    } else {
        format!("{}", num)
    };

    Ok(tera::Value::String(result))
}

/// Simple money filter: formats a number to 2 decimal places.
/// Usage: `amount | money`
fn tera_money_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    Ok(tera::Value::String(format!("{:.2}", numeric_value(value))))
}

/// Name the output artifact: `<prefix>_<Company_Name>_<ISO date>.html`,
/// with whitespace runs in the company name collapsed to underscores.
pub fn artifact_filename(prefix: &str, company_name: &str, date: NaiveDate) -> String {
    let company = company_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{prefix}_{company}_{}.html", date.format("%Y-%m-%d"))
}

#[derive(Debug, Serialize)]
struct LineItemView {
    name: String,
    unit_price: f64,
    cost: f64,
}

/// Display model handed to the template. Amounts are plain numbers; the
/// `money` filter applies the 2-decimal currency format.
#[derive(Debug, Serialize)]
pub struct ProposalView {
    pub company_name: String,
    pub contact_name: Option<String>,
    pub contact_role: Option<String>,
    pub region: Option<String>,
    pub employee_count: u32,
    pub plan_label: String,
    pub cycle_label: String,
    pub is_yearly: bool,
    line_items: Vec<LineItemView>,
    pub subtotal: f64,
    pub discount_percent: f64,
    pub discount_amount: f64,
    pub total: f64,
    pub monthly_equivalent: f64,
    pub yearly_savings: Option<f64>,
    pub pain_points: Option<String>,
    pub generated_on: String,
}

impl ProposalView {
    pub fn new(
        client: &ClientContext,
        plan: Plan,
        cycle: BillingCycle,
        quote: &Quote,
        pain_points: Option<String>,
        date: NaiveDate,
    ) -> Self {
        let plan_label = match plan {
            Plan::Business => "Business",
            Plan::Enterprise => "Enterprise",
        };
        let cycle_label = match cycle {
            BillingCycle::Monthly => "Mensal",
            BillingCycle::Yearly => "Anual",
        };

        Self {
            company_name: client.company_name.clone(),
            contact_name: client.contact_name.clone(),
            contact_role: client.contact_role.clone(),
            region: client.region.clone(),
            employee_count: client.employee_count,
            plan_label: plan_label.to_owned(),
            cycle_label: cycle_label.to_owned(),
            is_yearly: cycle == BillingCycle::Yearly,
            line_items: quote
                .line_items
                .iter()
                .map(|item| LineItemView {
                    name: item.name.clone(),
                    unit_price: decimal_to_f64(item.unit_price),
                    cost: decimal_to_f64(item.cost),
                })
                .collect(),
            subtotal: decimal_to_f64(quote.subtotal),
            discount_percent: decimal_to_f64(client.discount_percent),
            discount_amount: decimal_to_f64(quote.discount_amount),
            total: decimal_to_f64(quote.total),
            monthly_equivalent: decimal_to_f64(quote.monthly_equivalent),
            // A non-positive savings figure is a diagnostic concern, not a
            // selling point; the document suppresses it.
            yearly_savings: quote
                .yearly_savings
                .filter(|savings| *savings > Decimal::ZERO)
                .map(decimal_to_f64),
            pain_points,
            generated_on: date.format("%d/%m/%Y").to_string(),
        }
    }
}

fn decimal_to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Proposal renderer backed by Tera templates.
#[derive(Clone, Debug)]
pub struct ProposalRenderer {
    tera: Tera,
}

impl ProposalRenderer {
    /// Renderer using the embedded default template.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, DEFAULT_TEMPLATE)
            .map_err(|e| RenderError::Template(e.to_string()))?;
        register_template_filters(&mut tera);
        Ok(Self { tera })
    }

    /// Renderer loading `proposal.html` (and any partials) from a
    /// directory, for deployments that customize the document.
    pub fn from_dir(template_dir: &Path) -> Result<Self, RenderError> {
        let glob = format!("{}/**/*", template_dir.display());
        let mut tera = Tera::new(&glob).map_err(|e| RenderError::Template(e.to_string()))?;
        register_template_filters(&mut tera);
        Ok(Self { tera })
    }

    pub fn render(&self, view: &ProposalView) -> Result<String, RenderError> {
        let context =
            Context::from_serialize(view).map_err(|e| RenderError::Template(e.to_string()))?;
        self.tera
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| RenderError::Template(e.to_string()))
    }

    /// Render and write the artifact into `output_dir`, returning the full
    /// path of the written file.
    pub fn write_artifact(
        &self,
        view: &ProposalView,
        output_dir: &Path,
        filename_prefix: &str,
        date: NaiveDate,
    ) -> Result<PathBuf, RenderError> {
        let html = self.render(view)?;
        let path = output_dir.join(artifact_filename(filename_prefix, &view.company_name, date));
        fs::write(&path, html)?;
        Ok(path)
    }
}
