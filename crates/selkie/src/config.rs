//! Widget construction options.

use rustc_hash::FxHashMap;

use crate::attrs::{AppMode, NodeType};
use crate::highlight::HighlightRules;
use crate::menu::ContextMenuEntry;

pub struct WidgetOptions {
    /// Record mutations into an undo/redo log. The log itself only exists
    /// while the widget is rendered.
    pub history_enabled: bool,
    pub highlight_rules: HighlightRules,
    pub default_node_type: NodeType,
    pub app_mode: AppMode,
    /// Cluster id -> backdrop color, consumed by backdrop rendering.
    pub cluster_colors: FxHashMap<String, String>,
    /// Entries offered on node right-click; an empty list disables the menu.
    pub context_menu: Vec<ContextMenuEntry>,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            history_enabled: true,
            highlight_rules: HighlightRules::default(),
            default_node_type: NodeType::default(),
            app_mode: AppMode::default(),
            cluster_colors: FxHashMap::default(),
            context_menu: Vec::new(),
        }
    }
}

impl WidgetOptions {
    pub fn with_history(mut self, enabled: bool) -> Self {
        self.history_enabled = enabled;
        self
    }

    pub fn with_highlight_rules(mut self, rules: HighlightRules) -> Self {
        self.highlight_rules = rules;
        self
    }

    pub fn with_default_node_type(mut self, node_type: NodeType) -> Self {
        self.default_node_type = node_type;
        self
    }

    pub fn with_app_mode(mut self, app_mode: AppMode) -> Self {
        self.app_mode = app_mode;
        self
    }

    pub fn with_cluster_colors(mut self, colors: FxHashMap<String, String>) -> Self {
        self.cluster_colors = colors;
        self
    }

    pub fn with_context_menu(mut self, entries: Vec<ContextMenuEntry>) -> Self {
        self.context_menu = entries;
        self
    }
}
