use std::fmt;

#[derive(Debug)]
pub enum AutofillError {
    /// Reading an input file failed
    Io { path: String, source: std::io::Error },

    /// Structure, request or client state JSON could not be parsed
    JsonParse { context: String, source: serde_json::Error },

    /// Response or field map could not be serialized
    JsonSerialize { context: String, source: serde_json::Error },

    /// Request carried no fill contexts, so there is no structure to read
    EmptyFillContexts { request: &'static str },
}

impl fmt::Display for AutofillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutofillError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path, source)
            }
            AutofillError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            AutofillError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            AutofillError::EmptyFillContexts { request } => {
                write!(f, "{} request has no fill contexts", request)
            }
        }
    }
}

impl std::error::Error for AutofillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AutofillError::Io { source, .. } => Some(source),
            AutofillError::JsonParse { source, .. } => Some(source),
            AutofillError::JsonSerialize { source, .. } => Some(source),
            AutofillError::EmptyFillContexts { .. } => None,
        }
    }
}
