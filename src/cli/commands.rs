use serde::Serialize;

use crate::collector::collector::{collect_autofill_ids, collect_text_values, CollectMode};
use crate::error::AutofillError;
use crate::service::autofill_service::{AutofillService, DatasetConfig};
use crate::service::service_model::{ClientState, FillOutcome, FillRequest, SaveRequest};
use crate::structure::structure_model::AssistStructure;
use crate::trace::sink::DiagnosticSink;

// ============================================================================
// fill subcommand
// ============================================================================

/// Answer a fill request and return whether suggestions were offered.
pub fn cmd_fill(
    structure_path: &str,
    client_state: Option<&str>,
    dataset: &DatasetConfig,
    sink: &dyn DiagnosticSink,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut request = FillRequest::for_structure(load_structure(structure_path)?);
    if let Some(state) = parse_client_state(client_state)? {
        request = request.with_client_state(state);
    }

    let outcome = AutofillService::new(dataset.clone(), sink).on_fill_request(&request)?;
    println!("{}", to_pretty_json(&outcome, "fill outcome")?);

    Ok(matches!(outcome, FillOutcome::Success(_)))
}

// ============================================================================
// save subcommand
// ============================================================================

pub fn cmd_save(
    structure_path: &str,
    client_state: Option<&str>,
    sink: &dyn DiagnosticSink,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut request = SaveRequest::for_structure(load_structure(structure_path)?);
    if let Some(state) = parse_client_state(client_state)? {
        request = request.with_client_state(state);
    }

    // Dataset values are only used when filling.
    let outcome = AutofillService::new(DatasetConfig::default(), sink).on_save_request(&request)?;
    println!("{}", to_pretty_json(&outcome, "save outcome")?);

    Ok(())
}

// ============================================================================
// inspect subcommand
// ============================================================================

pub fn cmd_inspect(
    structure_path: &str,
    mode: &str,
    sink: &dyn DiagnosticSink,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = CollectMode::parse(mode)
        .ok_or_else(|| format!("unknown mode '{}', expected ids or text", mode))?;
    let structure = load_structure(structure_path)?;

    let json = match mode {
        CollectMode::Identifiers => {
            to_pretty_json(&collect_autofill_ids(&structure, sink), "field map")?
        }
        CollectMode::Text => to_pretty_json(&collect_text_values(&structure, sink), "field map")?,
    };
    println!("{}", json);

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

pub fn load_structure(path: &str) -> Result<AssistStructure, AutofillError> {
    let content = std::fs::read_to_string(path).map_err(|source| AutofillError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AutofillError::JsonParse {
        context: format!("structure {}", path),
        source,
    })
}

pub fn parse_client_state(raw: Option<&str>) -> Result<Option<ClientState>, AutofillError> {
    raw.map(|json| {
        serde_json::from_str(json).map_err(|source| AutofillError::JsonParse {
            context: "client state".to_string(),
            source,
        })
    })
    .transpose()
}

fn to_pretty_json<T: Serialize>(value: &T, context: &str) -> Result<String, AutofillError> {
    serde_json::to_string_pretty(value).map_err(|source| AutofillError::JsonSerialize {
        context: context.to_string(),
        source,
    })
}
