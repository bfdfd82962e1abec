use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classifier::save_type::SaveTypeMask;
use crate::collector::field_map::FieldMap;
use crate::structure::structure_model::{AssistStructure, AutofillId};

// ============================================================================
// Request state carried between the fill and save phases
// ============================================================================

pub const SAVE_TYPE_KEY: &str = "saveType";

/// Integer bag echoed back by the platform on the next request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientState(BTreeMap<String, i64>);

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.0.get(key).copied().unwrap_or(default)
    }

    pub fn put_int(&mut self, key: &str, value: i64) {
        self.0.insert(key.to_string(), value);
    }

    pub fn save_type(&self) -> SaveTypeMask {
        let bits = self.get_int(SAVE_TYPE_KEY, SaveTypeMask::GENERIC.bits() as i64);
        u32::try_from(bits)
            .map(SaveTypeMask::from_bits)
            .unwrap_or(SaveTypeMask::GENERIC)
    }

    pub fn set_save_type(&mut self, save_type: SaveTypeMask) {
        self.put_int(SAVE_TYPE_KEY, save_type.bits() as i64);
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillContext {
    pub structure: AssistStructure,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillRequest {
    pub fill_contexts: Vec<FillContext>,

    #[serde(default)]
    pub client_state: Option<ClientState>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub fill_contexts: Vec<FillContext>,

    #[serde(default)]
    pub client_state: Option<ClientState>,
}

impl FillRequest {
    pub fn for_structure(structure: AssistStructure) -> Self {
        Self {
            fill_contexts: vec![FillContext { structure }],
            client_state: None,
        }
    }

    pub fn with_client_state(mut self, client_state: ClientState) -> Self {
        self.client_state = Some(client_state);
        self
    }
}

impl SaveRequest {
    pub fn for_structure(structure: AssistStructure) -> Self {
        Self {
            fill_contexts: vec![FillContext { structure }],
            client_state: None,
        }
    }

    pub fn with_client_state(mut self, client_state: ClientState) -> Self {
        self.client_state = Some(client_state);
        self
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetValue {
    pub id: AutofillId,
    pub value: String,
    pub presentation: String,
}

/// One suggestion the user can pick, filling several fields at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub values: Vec<DatasetValue>,
}

impl Dataset {
    pub fn set_value(mut self, id: AutofillId, value: &str, presentation: &str) -> Self {
        self.values.push(DatasetValue {
            id,
            value: value.to_string(),
            presentation: presentation.to_string(),
        });
        self
    }
}

/// Tells the platform which fields to watch for a later save request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveInfo {
    pub save_type: SaveTypeMask,
    pub required_ids: Vec<AutofillId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillResponse {
    pub datasets: Vec<Dataset>,
    pub client_state: ClientState,
    pub save_info: SaveInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FillOutcome {
    Success(FillResponse),
    /// Decline to offer suggestions for this screen
    Failure { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaveOutcome {
    /// Values worth handing to a credential store. Never persisted here.
    Captured {
        package_name: Option<String>,
        fields: FieldMap<String>,
        save_type: SaveTypeMask,
    },
    NothingToSave,
}
