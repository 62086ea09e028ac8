// crates/ports/src/focus.rs
use crossbeam_channel::Receiver;

/// How an element received focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusOrigin {
    Touch,
    Mouse,
    Keyboard,
    Program,
}

/// Stream of focus changes for one element; `None` means focus was lost.
pub type FocusEvents = Receiver<Option<FocusOrigin>>;

/// Watches focus on host elements.
pub trait FocusMonitor {
    /// Starts watching `element_id` (and its descendants when `check_children`).
    fn monitor(&self, element_id: &str, check_children: bool) -> FocusEvents;

    /// Stops watching `element_id`; its stream disconnects.
    fn stop_monitoring(&self, element_id: &str);
}
