// crates/ports/src/field.rs
use file_input_shared_kernel::FileSet;

use crate::native::ClickTarget;

/// Handle returned when subscribing to state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(pub u64);

/// What labels, hints and error messages observe about a form field control.
pub trait FormFieldControl {
    fn id(&self) -> &str;

    /// Current selection; `None` while nothing is selected.
    fn value(&self) -> Option<&FileSet>;

    fn placeholder(&self) -> &str;

    fn is_empty(&self) -> bool;

    fn required(&self) -> bool;

    fn disabled(&self) -> bool;

    fn focused(&self) -> bool;

    fn error_state(&self) -> bool;

    fn autofilled(&self) -> bool;

    fn should_label_float(&self) -> bool;

    fn control_type(&self) -> &'static str;

    /// Space-joined ids of the elements describing this control.
    fn described_by(&self) -> &str;

    fn set_described_by_ids(&mut self, ids: &[&str]);

    fn on_container_click(&mut self, target: ClickTarget<'_>);

    /// Registers a callback run after every state change.
    fn subscribe_state_changes(&self, callback: Box<dyn FnMut()>) -> SubscriptionId;

    fn unsubscribe_state_changes(&self, id: SubscriptionId) -> bool;
}
