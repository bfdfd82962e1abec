use serde::{Deserialize, Serialize};

use crate::classifier::classifier_model::Classification;
use crate::error::AutofillError;
use crate::service::service_model::{
    ClientState, Dataset, FillContext, FillOutcome, FillRequest, FillResponse, SaveInfo,
    SaveOutcome, SaveRequest,
};
use crate::structure::structure_model::AssistStructure;
use crate::trace::{
    sink::DiagnosticSink,
    trace::{TraceEvent, TraceKind, TraceStage},
};
use crate::{parse_structure, traverse_structure};

/// Values offered in the single suggestion dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,

    #[serde(default = "default_username_label")]
    pub username_label: String,

    #[serde(default = "default_password_label")]
    pub password_label: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
            username_label: default_username_label(),
            password_label: default_password_label(),
        }
    }
}

fn default_username() -> String { "abc@def.com".to_string() }
fn default_password() -> String { "abc".to_string() }
fn default_username_label() -> String { "my_username".to_string() }
fn default_password_label() -> String { "Password for my_username".to_string() }

/// Answers fill and save requests for one screen at a time.
pub struct AutofillService<'a> {
    dataset: DatasetConfig,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> AutofillService<'a> {
    pub fn new(dataset: DatasetConfig, sink: &'a dyn DiagnosticSink) -> Self {
        Self { dataset, sink }
    }

    /// Suggests the configured credentials for the screen's identity and
    /// password fields, or declines when the screen has no such pair.
    pub fn on_fill_request(&self, request: &FillRequest) -> Result<FillOutcome, AutofillError> {
        let structure = latest_structure(&request.fill_contexts, "fill")?;

        let parsed = match parse_structure(structure, self.sink) {
            Classification::Usable(parsed) => parsed,
            Classification::Unusable(reason) => {
                return Ok(FillOutcome::Failure {
                    reason: reason.to_string(),
                });
            }
        };

        let mut client_state = request.client_state.clone().unwrap_or_default();
        let previous = client_state.save_type();
        client_state.set_save_type(parsed.save_type);

        let dataset = Dataset::default()
            .set_value(
                parsed.identity_field_id,
                &self.dataset.username,
                &self.dataset.username_label,
            )
            .set_value(
                parsed.password_field_id,
                &self.dataset.password,
                &self.dataset.password_label,
            );

        self.sink.record(
            TraceEvent::now(TraceStage::Fill, TraceKind::FillResponded)
                .with_field(parsed.identity_field_id)
                .with_detail(format!("save_type {} -> {}", previous, parsed.save_type)),
        );

        Ok(FillOutcome::Success(FillResponse {
            datasets: vec![dataset],
            client_state,
            save_info: SaveInfo {
                save_type: parsed.save_type,
                required_ids: vec![parsed.identity_field_id, parsed.password_field_id],
            },
        }))
    }

    /// Captures the submitted credential values. Storing them, encrypted, is
    /// left to whoever receives the outcome.
    pub fn on_save_request(&self, request: &SaveRequest) -> Result<SaveOutcome, AutofillError> {
        let structure = latest_structure(&request.fill_contexts, "save")?;
        let save_type = request
            .client_state
            .as_ref()
            .map(ClientState::save_type)
            .unwrap_or_default();

        let outcome = match traverse_structure(structure, self.sink) {
            Some(fields) => {
                self.sink.record(
                    TraceEvent::now(TraceStage::Save, TraceKind::SaveCaptured)
                        .with_detail(format!("{} fields, save_type={}", fields.len(), save_type)),
                );
                SaveOutcome::Captured {
                    package_name: structure.package_name.clone(),
                    fields,
                    save_type,
                }
            }
            None => {
                self.sink
                    .record(TraceEvent::now(TraceStage::Save, TraceKind::NothingToSave));
                SaveOutcome::NothingToSave
            }
        };

        Ok(outcome)
    }
}

/// The platform appends one context per fill round; the last one is current.
fn latest_structure<'c>(
    contexts: &'c [FillContext],
    request: &'static str,
) -> Result<&'c AssistStructure, AutofillError> {
    contexts
        .last()
        .map(|c| &c.structure)
        .ok_or(AutofillError::EmptyFillContexts { request })
}
