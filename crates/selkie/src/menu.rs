//! Context menu entries supplied by the host.

/// One entry: a label and the callback invoked with the node key when the
/// entry is selected.
pub struct ContextMenuEntry {
    pub label: String,
    pub(crate) action: Box<dyn FnMut(&str)>,
}

impl ContextMenuEntry {
    pub fn new(label: impl Into<String>, action: impl FnMut(&str) + 'static) -> Self {
        Self {
            label: label.into(),
            action: Box::new(action),
        }
    }
}

impl std::fmt::Debug for ContextMenuEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextMenuEntry")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
