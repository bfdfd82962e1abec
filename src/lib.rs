use crate::{
    classifier::{
        classifier::{check_credential_pair, classify},
        classifier_model::Classification,
    },
    collector::{
        collector::{collect_autofill_ids, collect_text_values},
        field_map::FieldMap,
    },
    structure::structure_model::{AutofillId, ViewStructure},
    trace::{
        sink::DiagnosticSink,
        trace::{TraceEvent, TraceKind, TraceStage},
    },
};

pub mod classifier;
pub mod cli;
pub mod collector;
pub mod error;
pub mod service;
pub mod structure;
pub mod trace;

/// Collect fillable fields by autofill id and look for a credential pair.
pub fn parse_structure<S: ViewStructure>(
    structure: &S,
    sink: &dyn DiagnosticSink,
) -> Classification<AutofillId> {
    let fields = collect_autofill_ids(structure, sink);
    classify(&fields, sink)
}

/// Collect the text the user entered, keeping it only when it holds a
/// credential pair worth saving.
pub fn traverse_structure<S: ViewStructure>(
    structure: &S,
    sink: &dyn DiagnosticSink,
) -> Option<FieldMap<String>> {
    let fields = collect_text_values(structure, sink);

    match check_credential_pair(&fields) {
        Ok(()) => Some(fields),
        Err(reason) => {
            sink.record(
                TraceEvent::now(TraceStage::Save, TraceKind::Declined).with_detail(reason),
            );
            None
        }
    }
}
