//! Events emitted to the host application.
//!
//! Subscription is an explicit observer registration rather than an inherited
//! emitter base: the host gets a [`SubscriptionId`] back and can drop its
//! callback at any time.

/// Everything the widget reports back to its host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Rendered,
    SyncLayoutCompleted,
    ClickNode { key: String },
    RightClickNode { key: String },
    DragNode { key: String, x: f64, y: f64 },
    DraggedNode { key: String },
    EnterNode { key: String },
    LeaveNode { key: String },
    NodeInfoBoxOpened { key: String },
    NodeInfoBoxClosed { key: String },
    ContextMenuOpened { key: String },
    ContextMenuClosed { key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Emitter {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&Event)>)>,
}

impl Emitter {
    pub(crate) fn subscribe(&mut self, callback: Box<dyn FnMut(&Event)>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub(crate) fn emit(&mut self, event: &Event) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }
}
