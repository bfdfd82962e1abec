use serde::{Serialize, Serializer};

use crate::structure::{hints::normalize_hint, structure_model::AutofillId};

/// Something a traversal can capture for a hinted field.
pub trait FieldPayload: Clone {
    /// How the payload is shown in diagnostics.
    fn diagnostic_label(&self) -> String;
}

impl FieldPayload for AutofillId {
    fn diagnostic_label(&self) -> String {
        self.to_string()
    }
}

/// Text values may be credentials, so only a short fingerprint is ever logged.
impl FieldPayload for String {
    fn diagnostic_label(&self) -> String {
        format!("sha1:{}", &text_fingerprint(self)[..12])
    }
}

pub fn text_fingerprint(text: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Normalized hint → payload of the first field that carried it.
///
/// Keeps insertion order, which is traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap<P> {
    entries: Vec<(String, P)>,
}

impl<P> Default for FieldMap<P> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<P> FieldMap<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts unless the hint is already present. Returns whether it was inserted.
    pub fn insert_first(&mut self, hint: &str, payload: P) -> bool {
        let key = normalize_hint(hint);
        if self.contains(&key) {
            return false;
        }
        self.entries.push((key, payload));
        true
    }

    pub fn get(&self, hint: &str) -> Option<&P> {
        let key = normalize_hint(hint);
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, p)| p)
    }

    pub fn contains(&self, hint: &str) -> bool {
        self.get(hint).is_some()
    }

    pub fn hints(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &P)> {
        self.entries.iter().map(|(k, p)| (k.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: Serialize> Serialize for FieldMap<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, p)| (k, p)))
    }
}
