use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Pipeline stage that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceStage {
    Collect,
    Classify,
    Fill,
    Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    /// First node carrying a hint claimed it
    HintRecorded,
    /// Hint already claimed by an earlier node
    HintIgnored,
    /// Hinted node had nothing to capture
    MissingPayload,
    Classified,
    Declined,
    FillResponded,
    SaveCaptured,
    NothingToSave,
}

/// One diagnostic record. Field payloads appear only as
/// [`FieldPayload::diagnostic_label`](crate::collector::field_map::FieldPayload)
/// output, never as raw text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub stage: TraceStage,
    pub kind: TraceKind,

    pub hint: Option<String>,
    pub field: Option<String>,
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(stage: TraceStage, kind: TraceKind) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            stage,
            kind,
            hint: None,
            field: None,
            detail: None,
        }
    }

    pub fn with_hint(mut self, hint: impl ToString) -> Self {
        self.hint = Some(hint.to_string());
        self
    }

    pub fn with_field(mut self, field: impl ToString) -> Self {
        self.field = Some(field.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
