use std::fmt;

use serde::Serialize;

use crate::classifier::save_type::SaveTypeMask;
use crate::structure::structure_model::AutofillId;

/// A usable credential pair found on screen.
///
/// `P` is whatever the traversal captured: autofill ids when suggesting,
/// text when saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedStructure<P = AutofillId> {
    /// Email field if present, username field otherwise
    pub identity_field_id: P,
    pub password_field_id: P,
    pub save_type: SaveTypeMask,
}

/// Why a field map holds no usable credential pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnusableReason {
    EmptyFieldSet,
    MissingPassword,
    MissingIdentity,
}

impl fmt::Display for UnusableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnusableReason::EmptyFieldSet => write!(f, "no hinted fields on screen"),
            UnusableReason::MissingPassword => write!(f, "no password field"),
            UnusableReason::MissingIdentity => write!(f, "no email or username field"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<P = AutofillId> {
    Usable(ParsedStructure<P>),
    Unusable(UnusableReason),
}

impl<P> Classification<P> {
    pub fn is_usable(&self) -> bool {
        matches!(self, Classification::Usable(_))
    }

    pub fn into_parsed(self) -> Option<ParsedStructure<P>> {
        match self {
            Classification::Usable(parsed) => Some(parsed),
            Classification::Unusable(_) => None,
        }
    }

    pub fn unusable_reason(&self) -> Option<UnusableReason> {
        match self {
            Classification::Usable(_) => None,
            Classification::Unusable(reason) => Some(*reason),
        }
    }
}
