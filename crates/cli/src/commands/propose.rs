use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use rust_decimal::Decimal;

use proposta_analysis::{HttpTranscriptAnalyzer, TranscriptAnalyzer};
use proposta_core::config::AppConfig;
use proposta_core::{compute_quote, validate, Catalog};
use proposta_render::{ProposalRenderer, ProposalView};

use super::CommandResult;
use crate::request;

pub fn run(
    config: &AppConfig,
    path: &Path,
    out: Option<&Path>,
    transcript: Option<&Path>,
) -> CommandResult {
    let request = match request::load(path) {
        Ok(request) => request,
        Err(error) => return CommandResult::failure("propose", "request", format!("{error:#}"), 2),
    };

    let catalog = match Catalog::standard() {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("propose", "catalog_integrity", error.to_string(), 2)
        }
    };

    let ctx = request.client_context();
    let selection = request.selection(catalog.base_module());

    let report = validate(&selection, &ctx);
    if !report.is_ok() {
        let mut lines = vec!["proposal request is incomplete:".to_string()];
        for failure in &report.failures {
            lines.push(format!("  - {failure}"));
        }
        return CommandResult { exit_code: 1, output: lines.join("\n") };
    }

    let quote = compute_quote(&catalog, &selection, &ctx, request.plan, request.billing_cycle);

    if let Some(savings) = quote.yearly_savings {
        if savings < Decimal::ZERO {
            tracing::warn!(%savings, "yearly savings are negative; check the catalog rate card");
        }
    }

    let pain_points = transcript.and_then(|transcript_path| analyze(config, transcript_path));

    let renderer = match &config.proposal.template_dir {
        Some(dir) => ProposalRenderer::from_dir(dir),
        None => ProposalRenderer::new(),
    };
    let renderer = match renderer {
        Ok(renderer) => renderer,
        Err(error) => return CommandResult::failure("propose", "template", error.to_string(), 2),
    };

    let date = Utc::now().date_naive();
    let view =
        ProposalView::new(&ctx, request.plan, request.billing_cycle, &quote, pain_points, date);
    let output_dir = out.unwrap_or(&config.proposal.output_dir);

    match renderer.write_artifact(&view, output_dir, &config.proposal.filename_prefix, date) {
        Ok(artifact_path) => {
            tracing::info!(path = %artifact_path.display(), "proposal artifact written");
            CommandResult::ok(format!("proposal written to {}", artifact_path.display()))
        }
        Err(error) => CommandResult::failure("propose", "render", error.to_string(), 2),
    }
}

/// Best-effort pain-point extraction. Failures are reported and swallowed;
/// the proposal is rendered either way because analysis output is advisory
/// and never feeds pricing.
fn analyze(config: &AppConfig, path: &Path) -> Option<String> {
    if !config.analysis.enabled {
        tracing::warn!("transcript provided but analysis is disabled in config");
        return None;
    }
    let endpoint = config.analysis.endpoint.clone()?;

    let transcript = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(error = %error, "could not read transcript file");
            return None;
        }
    };

    let analyzer = match HttpTranscriptAnalyzer::new(
        endpoint,
        config.analysis.api_key.clone(),
        Duration::from_secs(config.analysis.timeout_secs),
    ) {
        Ok(analyzer) => analyzer,
        Err(error) => {
            tracing::warn!(error = %error, "could not build analysis client");
            return None;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(error) => {
            tracing::warn!(error = %error, "could not start async runtime for analysis");
            return None;
        }
    };

    match runtime.block_on(analyzer.extract_pain_points(&transcript)) {
        Ok(text) => Some(text),
        Err(error) => {
            tracing::warn!(error = %error, "{}", error.user_message());
            None
        }
    }
}
