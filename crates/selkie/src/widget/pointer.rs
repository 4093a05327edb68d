//! Pointer interaction: hover highlighting, click vs. drag resolution, the
//! context menu, node info boxes and timed highlights.

use std::time::{Duration, Instant};

use tracing::warn;

use super::{DragState, GraphWidget};
use crate::attrs::{AppMode, Z_BASELINE, Z_RAISED};
use crate::error::Result;
use crate::events::Event;
use crate::info::{InfoToken, NodeInfoContent, OpenInfoBox, PendingInfo};

impl GraphWidget {
    /// Hover entered a node: rebuild the highlight sets and repaint.
    pub fn pointer_enter_node(&mut self, key: &str) -> Result<()> {
        self.require_active()?;
        let settings = self.renderer_mut()?.settings().clone();
        {
            let mut graph = self.graph.borrow_mut();
            self.highlight
                .enter(&mut graph, &settings, self.options.highlight_rules, key);
        }
        self.renderer_mut()?.refresh();
        self.emit(Event::EnterNode {
            key: key.to_string(),
        });
        Ok(())
    }

    /// Hover left a node: reset z-order, empty the highlight sets, repaint.
    pub fn pointer_leave_node(&mut self, key: &str) -> Result<()> {
        self.require_active()?;
        {
            let mut graph = self.graph.borrow_mut();
            self.highlight.leave(&mut graph);
        }
        self.renderer_mut()?.refresh();
        self.emit(Event::LeaveNode {
            key: key.to_string(),
        });
        Ok(())
    }

    /// Primary button pressed on a node; arms a potential drag or click.
    pub fn pointer_down_node(&mut self, key: &str) -> Result<()> {
        self.require_active()?;
        if !self.graph.borrow().has_node(key) {
            return Ok(());
        }
        self.drag = Some(DragState {
            node: key.to_string(),
            moved: false,
        });
        Ok(())
    }

    /// Pointer moved with the button held. Moves the armed node when the
    /// widget is in dynamic mode; static mode ignores the movement.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<()> {
        self.require_active()?;
        if self.app_mode != AppMode::Dynamic {
            return Ok(());
        }
        let Some(drag) = self.drag.as_mut() else {
            return Ok(());
        };
        drag.moved = true;
        let node = drag.node.clone();
        {
            let mut graph = self.graph.borrow_mut();
            if let Some(attrs) = graph.node_mut(&node) {
                attrs.x = x;
                attrs.y = y;
            }
        }
        self.renderer_mut()?.refresh();
        self.emit(Event::DragNode { key: node, x, y });
        Ok(())
    }

    /// Button released: `DraggedNode` after a drag, `ClickNode` for a plain
    /// press/release pair.
    pub fn pointer_up(&mut self) -> Result<()> {
        self.require_active()?;
        let Some(drag) = self.drag.take() else {
            return Ok(());
        };
        if drag.moved {
            self.emit(Event::DraggedNode { key: drag.node });
        } else {
            self.emit(Event::ClickNode { key: drag.node });
        }
        Ok(())
    }

    /// Right-click on a node: reports the event and opens the context menu
    /// when entries are configured.
    pub fn pointer_right_click_node(&mut self, key: &str) -> Result<()> {
        self.require_active()?;
        if !self.graph.borrow().has_node(key) {
            return Ok(());
        }
        self.emit(Event::RightClickNode {
            key: key.to_string(),
        });
        if !self.options.context_menu.is_empty() {
            self.open_menu = Some(key.to_string());
            self.emit(Event::ContextMenuOpened {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    pub fn context_menu_labels(&self) -> Vec<&str> {
        self.options
            .context_menu
            .iter()
            .map(|entry| entry.label.as_str())
            .collect()
    }

    /// Runs the selected entry's callback against the menu's node and closes
    /// the menu. `Ok(false)` when no menu is open or the index is out of
    /// range.
    pub fn select_context_menu_entry(&mut self, index: usize) -> Result<bool> {
        self.require_active()?;
        let Some(node) = self.open_menu.clone() else {
            return Ok(false);
        };
        let Some(entry) = self.options.context_menu.get_mut(index) else {
            return Ok(false);
        };
        (entry.action)(&node);
        self.open_menu = None;
        self.emit(Event::ContextMenuClosed { key: node });
        Ok(true)
    }

    pub fn close_context_menu(&mut self) {
        if let Some(node) = self.open_menu.take() {
            self.emit(Event::ContextMenuClosed { key: node });
        }
    }

    /// Starts a node-info request. The host resolves the returned token once
    /// its (typically asynchronous) lookup finishes; a newer request
    /// supersedes any pending one. `Ok(None)` for unknown nodes.
    pub fn open_node_info(&mut self, key: &str) -> Result<Option<InfoToken>> {
        self.require_active()?;
        if !self.graph.borrow().has_node(key) {
            return Ok(None);
        }
        let token = InfoToken(self.next_info_token);
        self.next_info_token += 1;
        self.pending_info = Some(PendingInfo {
            token,
            node: key.to_string(),
        });
        Ok(Some(token))
    }

    /// Completes a node-info request. Stale completions (widget destroyed, or
    /// a newer request issued since) are dropped. A failed lookup falls back
    /// to content derived from the node's own attributes.
    pub fn resolve_node_info(
        &mut self,
        token: InfoToken,
        outcome: std::result::Result<NodeInfoContent, String>,
    ) -> bool {
        if !self.is_rendered() {
            warn!("dropping node-info completion: widget is no longer rendered");
            return false;
        }
        let Some(pending) = self
            .pending_info
            .take_if(|pending| pending.token == token)
        else {
            warn!("dropping node-info completion: request was superseded");
            return false;
        };

        let content = match outcome {
            Ok(content) => content,
            Err(error) => {
                warn!(%error, "node-info lookup failed, using attribute fallback");
                let graph = self.graph.borrow();
                match graph.node(&pending.node) {
                    Some(attrs) => NodeInfoContent::fallback(&pending.node, attrs),
                    None => NodeInfoContent::default(),
                }
            }
        };

        let node = pending.node.clone();
        self.open_info = Some(OpenInfoBox {
            node: pending.node,
            content,
        });
        self.emit(Event::NodeInfoBoxOpened { key: node });
        true
    }

    /// Closes the info box if one is open.
    pub fn close_node_info(&mut self) -> bool {
        match self.open_info.take() {
            Some(open) => {
                self.emit(Event::NodeInfoBoxClosed { key: open.node });
                true
            }
            None => false,
        }
    }

    /// Raises a node's z-order for `duration`; the revert fires from
    /// [`process_due_unhighlights`](Self::process_due_unhighlights). Repeated
    /// calls on the same node reset the pending revert. Unknown keys are
    /// ignored.
    pub fn highlight_node(&mut self, key: &str, duration: Duration) -> Result<()> {
        self.require_active()?;
        {
            let mut graph = self.graph.borrow_mut();
            let Some(attrs) = graph.node_mut(key) else {
                return Ok(());
            };
            attrs.z = Z_RAISED;
        }
        self.renderer_mut()?.refresh();
        self.unhighlight.schedule(key, Instant::now() + duration);
        Ok(())
    }

    /// Cancels a pending timed un-highlight without touching the node.
    pub fn cancel_unhighlight(&mut self, key: &str) -> bool {
        self.unhighlight.cancel(key)
    }

    /// Fires expired un-highlight deadlines. Returns how many fired. The host
    /// drives this from its own clock or frame loop.
    pub fn process_due_unhighlights(&mut self, now: Instant) -> usize {
        if !self.is_rendered() {
            return 0;
        }
        let due = self.unhighlight.due(now);
        if due.is_empty() {
            return 0;
        }
        {
            let mut graph = self.graph.borrow_mut();
            for key in &due {
                if let Some(attrs) = graph.node_mut(key) {
                    attrs.z = Z_BASELINE;
                }
            }
        }
        if let Ok(renderer) = self.renderer_mut() {
            renderer.refresh();
        }
        due.len()
    }
}
