// crates/infra/src/focus.rs
use std::{cell::RefCell, collections::HashMap};

use crossbeam_channel::{Sender, unbounded};
use file_input_ports::{FocusEvents, FocusMonitor, FocusOrigin};
use log::{debug, warn};

/// Focus monitor driven by explicit calls instead of platform events.
///
/// Each `monitor` call opens a fresh channel; `stop_monitoring` drops the
/// senders so the receivers observe a disconnect.
#[derive(Debug, Default)]
pub struct ManualFocusMonitor {
    channels: RefCell<HashMap<String, Vec<Sender<Option<FocusOrigin>>>>>,
}

impl ManualFocusMonitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports that `element_id` gained focus; returns whether anyone was listening.
    pub fn focus_via(&self, element_id: &str, origin: FocusOrigin) -> bool {
        self.emit(element_id, Some(origin))
    }

    /// Reports that `element_id` lost focus.
    pub fn blur(&self, element_id: &str) -> bool {
        self.emit(element_id, None)
    }

    #[must_use]
    pub fn is_monitored(&self, element_id: &str) -> bool {
        self.channels.borrow().contains_key(element_id)
    }

    fn emit(&self, element_id: &str, origin: Option<FocusOrigin>) -> bool {
        let mut channels = self.channels.borrow_mut();
        let Some(senders) = channels.get_mut(element_id) else {
            debug!("focus event for unmonitored element {element_id} dropped");
            return false;
        };
        senders.retain(|tx| tx.send(origin).is_ok());
        if senders.is_empty() {
            warn!("every receiver for {element_id} is gone; forgetting it");
            channels.remove(element_id);
            return false;
        }
        true
    }
}

impl FocusMonitor for ManualFocusMonitor {
    fn monitor(&self, element_id: &str, _check_children: bool) -> FocusEvents {
        let (tx, rx) = unbounded();
        self.channels.borrow_mut().entry(element_id.to_owned()).or_default().push(tx);
        rx
    }

    fn stop_monitoring(&self, element_id: &str) {
        if self.channels.borrow_mut().remove(element_id).is_none() {
            debug!("stop_monitoring({element_id}) without a matching monitor()");
        }
    }
}
