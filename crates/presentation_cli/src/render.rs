//! Text and JSON output for retrieve results

use application::{ApplicationError, RetrieveOutcome};
use clap::ValueEnum;
use serde_json::json;

/// Heading printed above the departure blocks
pub const HEADING: &str = "Public Transport Retrieve Options:";

/// Printed when a transit route contains no transit steps
pub const NO_TRANSIT_MESSAGE: &str = "No public transport steps found in the recommended route.";

/// Printed below a provider failure
pub const PROVIDER_HINT: &str = "Check that the destination is a valid address, postcode or \
                                 \"lat,lon\" pair and that the directions API key is valid.";

/// Output format for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable blocks
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Render a retrieve outcome
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_outcome(
    outcome: &RetrieveOutcome,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome)),
        OutputFormat::Json => render_json(outcome),
    }
}

fn render_text(outcome: &RetrieveOutcome) -> String {
    match outcome {
        RetrieveOutcome::Departures(departures) => {
            let blocks = departures
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n\n");
            format!("{HEADING}\n\n{blocks}")
        },
        RetrieveOutcome::NoTransit => NO_TRANSIT_MESSAGE.to_string(),
        RetrieveOutcome::NonTransit { mode, step_count } => format!(
            "Route found for {} ({step_count} steps); step details are only shown for transit routes.",
            mode.label()
        ),
    }
}

fn render_json(outcome: &RetrieveOutcome) -> Result<String, serde_json::Error> {
    match outcome {
        RetrieveOutcome::Departures(departures) => serde_json::to_string_pretty(departures),
        RetrieveOutcome::NoTransit => serde_json::to_string_pretty(&json!([])),
        RetrieveOutcome::NonTransit { mode, step_count } => serde_json::to_string_pretty(&json!({
            "mode": mode,
            "step_count": step_count,
        })),
    }
}

/// Render a failure for stderr
///
/// Provider failures get the route-not-found message and a hint; anything
/// else is printed with its context chain.
pub fn render_error(error: &anyhow::Error) -> String {
    match error
        .downcast_ref::<ApplicationError>()
        .and_then(ApplicationError::provider_status)
    {
        Some(status) => format!("Error: Could not find a route. Status: {status}\n{PROVIDER_HINT}"),
        None => format!("Error: {error:#}"),
    }
}
