use crate::collector::field_map::{FieldMap, FieldPayload};
use crate::structure::{
    hints::first_hint,
    structure_model::{AutofillId, ViewNode, ViewStructure},
};
use crate::trace::{
    sink::DiagnosticSink,
    trace::{TraceEvent, TraceKind, TraceStage},
};

/// What a traversal captures for each hinted node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectMode {
    /// Autofill ids, used when preparing suggestions
    Identifiers,
    /// Current text, used when capturing values to save
    Text,
}

impl CollectMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "ids" | "id" | "identifiers" => Some(CollectMode::Identifiers),
            "text" | "values" => Some(CollectMode::Text),
            _ => None,
        }
    }
}

/// Walks every window root depth-first, pre-order, and maps each node's first
/// hint to whatever `extract` yields for it. The first node to claim a hint wins.
///
/// A hinted node for which `extract` returns `None` is skipped without claiming
/// its hint, so a later node with the same hint can still be recorded.
pub fn collect<S, P, F>(structure: &S, extract: F, sink: &dyn DiagnosticSink) -> FieldMap<P>
where
    S: ViewStructure,
    P: FieldPayload,
    F: Fn(&S::Node) -> Option<P>,
{
    let mut fields = FieldMap::new();

    for i in 0..structure.window_count() {
        if let Some(root) = structure.window_root(i) {
            add_fields(&mut fields, root, &extract, sink);
        }
    }

    fields
}

fn add_fields<N, P, F>(fields: &mut FieldMap<P>, node: &N, extract: &F, sink: &dyn DiagnosticSink)
where
    N: ViewNode,
    P: FieldPayload,
    F: Fn(&N) -> Option<P>,
{
    if let Some(hint) = first_hint(node.autofill_hints()) {
        match extract(node) {
            Some(payload) => {
                let label = payload.diagnostic_label();
                let kind = if fields.insert_first(&hint, payload) {
                    TraceKind::HintRecorded
                } else {
                    TraceKind::HintIgnored
                };
                sink.record(
                    TraceEvent::now(TraceStage::Collect, kind)
                        .with_hint(&hint)
                        .with_field(label),
                );
            }
            None => sink.record(
                TraceEvent::now(TraceStage::Collect, TraceKind::MissingPayload).with_hint(&hint),
            ),
        }
    }

    for i in 0..node.child_count() {
        if let Some(child) = node.child_at(i) {
            add_fields(fields, child, extract, sink);
        }
    }
}

/// Hint → autofill id of every fillable field.
pub fn collect_autofill_ids<S: ViewStructure>(
    structure: &S,
    sink: &dyn DiagnosticSink,
) -> FieldMap<AutofillId> {
    collect(structure, |node| node.autofill_id(), sink)
}

/// Hint → current text. Fields without text are captured as empty strings.
pub fn collect_text_values<S: ViewStructure>(
    structure: &S,
    sink: &dyn DiagnosticSink,
) -> FieldMap<String> {
    collect(
        structure,
        |node| Some(node.text().unwrap_or_default().to_string()),
        sink,
    )
}
