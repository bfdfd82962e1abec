use autofill_detection::structure::structure_model::{AssistNode, AssistStructure};

/// Hinted node carrying an autofill id.
pub fn field(hint: &str, id: u32) -> AssistNode {
    AssistNode::new().with_hint(hint).with_id(id)
}

/// Hinted node carrying entered text.
pub fn text_field(hint: &str, id: u32, text: &str) -> AssistNode {
    field(hint, id).with_text(text)
}

/// Unhinted node wrapping `children`.
pub fn container(children: Vec<AssistNode>) -> AssistNode {
    children
        .into_iter()
        .fold(AssistNode::new(), |node, child| node.with_child(child))
}

/// One window whose root holds `children`.
pub fn screen(children: Vec<AssistNode>) -> AssistStructure {
    AssistStructure::from_roots(vec![container(children)])
}

pub fn fixture(name: &str) -> String {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}
