use crate::classifier::classifier_model::{Classification, ParsedStructure, UnusableReason};
use crate::classifier::save_type::SaveTypeMask;
use crate::collector::field_map::{FieldMap, FieldPayload};
use crate::structure::hints::{HINT_EMAIL_ADDRESS, HINT_PASSWORD, HINT_USERNAME, normalize_hint};
use crate::trace::{
    sink::DiagnosticSink,
    trace::{TraceEvent, TraceKind, TraceStage},
};

/// Gate: a password plus an email or a username, nothing else qualifies.
pub fn check_credential_pair<P>(fields: &FieldMap<P>) -> Result<(), UnusableReason> {
    if fields.is_empty() {
        return Err(UnusableReason::EmptyFieldSet);
    }
    if !fields.contains(HINT_PASSWORD) {
        return Err(UnusableReason::MissingPassword);
    }
    if !fields.contains(HINT_EMAIL_ADDRESS) && !fields.contains(HINT_USERNAME) {
        return Err(UnusableReason::MissingIdentity);
    }
    Ok(())
}

pub fn has_credential_pair<P>(fields: &FieldMap<P>) -> bool {
    check_credential_pair(fields).is_ok()
}

/// Email wins over username whenever both are present.
pub fn identity_field<P>(fields: &FieldMap<P>) -> Option<&P> {
    fields
        .get(HINT_EMAIL_ADDRESS)
        .or_else(|| fields.get(HINT_USERNAME))
}

/// Each credential hint contributes its like-named flag on top of GENERIC.
pub fn save_type_for<P>(fields: &FieldMap<P>) -> SaveTypeMask {
    let mut save_type = SaveTypeMask::GENERIC;

    for (hint, _) in fields.iter() {
        if hint == normalize_hint(HINT_EMAIL_ADDRESS) {
            save_type |= SaveTypeMask::EMAIL_ADDRESS;
        } else if hint == normalize_hint(HINT_USERNAME) {
            save_type |= SaveTypeMask::USERNAME;
        } else if hint == normalize_hint(HINT_PASSWORD) {
            save_type |= SaveTypeMask::PASSWORD;
        }
    }

    save_type
}

pub fn classify<P: FieldPayload>(
    fields: &FieldMap<P>,
    sink: &dyn DiagnosticSink,
) -> Classification<P> {
    if let Err(reason) = check_credential_pair(fields) {
        sink.record(
            TraceEvent::now(TraceStage::Classify, TraceKind::Declined).with_detail(reason),
        );
        return Classification::Unusable(reason);
    }

    // Both lookups are guaranteed by the gate above.
    let (Some(identity), Some(password)) = (identity_field(fields), fields.get(HINT_PASSWORD))
    else {
        return Classification::Unusable(UnusableReason::MissingIdentity);
    };

    let parsed = ParsedStructure {
        identity_field_id: identity.clone(),
        password_field_id: password.clone(),
        save_type: save_type_for(fields),
    };

    sink.record(
        TraceEvent::now(TraceStage::Classify, TraceKind::Classified)
            .with_field(parsed.identity_field_id.diagnostic_label())
            .with_detail(format!("save_type={}", parsed.save_type)),
    );

    Classification::Usable(parsed)
}
