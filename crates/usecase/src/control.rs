// crates/usecase/src/control.rs
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use file_input_domain::{DefaultErrorStateMatcher, ErrorStateMatcher};
use file_input_ports::{
    ClearEvent, ClickTarget, ControlValueAccessor, FocusEvents, FocusMonitor, FormBinding,
    FormFieldControl, NativeFileElement, OnChange, OnTouched, SubscriptionId,
};
use file_input_shared_kernel::{FileHandle, FileSet};
use log::{debug, trace};

use crate::base::FormControlBase;
use crate::state_changes::StateChanges;

/// Tag reported through [`FormFieldControl::control_type`].
pub const CONTROL_TYPE: &str = "file-input";

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> String {
    format!("{CONTROL_TYPE}-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Form field control wrapping a native multi-file picker.
///
/// The disabled flag lives on the native element; everything else is owned
/// here. Every accepted transition publishes through [`Self::state_changes`].
/// Teardown happens once, through [`Self::destroy`] or on drop.
pub struct FileInputControl {
    id: String,
    element: Box<dyn NativeFileElement>,
    focus_monitor: Rc<dyn FocusMonitor>,
    focus_events: FocusEvents,
    base: FormControlBase,
    value: Option<FileSet>,
    placeholder: String,
    value_placeholder: Option<String>,
    required: bool,
    multiple: bool,
    accept: Option<String>,
    autofilled: bool,
    focused: bool,
    described_by: String,
    destroyed: bool,
}

impl FileInputControl {
    /// Creates a control using [`DefaultErrorStateMatcher`] as the ambient policy.
    pub fn new(element: Box<dyn NativeFileElement>, focus_monitor: Rc<dyn FocusMonitor>) -> Self {
        Self::with_matcher(element, focus_monitor, Rc::new(DefaultErrorStateMatcher))
    }

    /// Creates a control and starts monitoring focus on its host element.
    pub fn with_matcher(
        element: Box<dyn NativeFileElement>,
        focus_monitor: Rc<dyn FocusMonitor>,
        default_matcher: Rc<dyn ErrorStateMatcher>,
    ) -> Self {
        let id = next_id();
        let focus_events = focus_monitor.monitor(&id, true);
        trace!("{id}: created");
        Self {
            id,
            element,
            focus_monitor,
            focus_events,
            base: FormControlBase::new(default_matcher),
            value: None,
            placeholder: String::new(),
            value_placeholder: Some(String::new()),
            required: false,
            multiple: false,
            accept: None,
            autofilled: false,
            focused: false,
            described_by: String::new(),
            destroyed: false,
        }
    }

    #[must_use]
    pub fn state_changes(&self) -> &StateChanges {
        self.base.state_changes()
    }

    /// Programmatic assignment. `None` is ignored; use [`Self::clear`] to empty the control.
    pub fn set_value(&mut self, value: Option<FileSet>) {
        let Some(files) = value else {
            debug!("{}: set_value(None) ignored", self.id);
            return;
        };
        self.select(files);
    }

    /// Selection reported by the native chooser.
    pub fn on_native_change(&mut self, files: Vec<FileHandle>) {
        self.select(FileSet::new(files));
    }

    fn select(&mut self, files: FileSet) {
        trace!("{}: selected {} file(s)", self.id, files.len());
        self.store(Some(files));
        self.base.state_changes().next();
        self.report_change();
    }

    /// Removes every file from the control.
    pub fn clear(&mut self) {
        trace!("{}: cleared", self.id);
        self.store(Some(FileSet::empty()));
        self.base.state_changes().next();
        self.element.clear_value();
        self.report_change();
    }

    /// Clears in response to a UI event, keeping the event from reaching other handlers.
    pub fn clear_event(&mut self, event: &mut dyn ClearEvent) {
        event.prevent_default();
        event.stop_propagation();
        self.clear();
    }

    /// Opens the native file chooser unless the control is disabled.
    pub fn open(&mut self) {
        if self.disabled() {
            debug!("{}: open ignored while disabled", self.id);
            return;
        }
        self.element.open_chooser();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.set_disabled_state(disabled);
    }

    /// Focus left the host element.
    pub fn blur(&mut self) {
        let was_focused = std::mem::replace(&mut self.focused, false);
        self.base.notify_touched();
        if was_focused {
            self.base.state_changes().next();
        }
    }

    /// Applies the focus changes reported by the monitor so far.
    pub fn handle_focus_events(&mut self) {
        if self.destroyed {
            return;
        }
        while let Ok(origin) = self.focus_events.try_recv() {
            trace!("{}: focus origin {origin:?}", self.id);
            self.focused = origin.is_some();
            self.base.state_changes().next();
        }
    }

    /// Inspection cycle: drains focus events, then recomputes the error state.
    pub fn do_check(&mut self) {
        self.handle_focus_events();
        self.base.update_error_state();
    }

    /// Closes the change stream and stops focus monitoring. Idempotent.
    pub fn destroy(&mut self) {
        if std::mem::replace(&mut self.destroyed, true) {
            return;
        }
        trace!("{}: destroyed", self.id);
        self.base.state_changes().complete();
        self.focus_monitor.stop_monitoring(&self.id);
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn set_binding(&mut self, binding: Option<Rc<dyn FormBinding>>) {
        self.base.set_binding(binding);
    }

    pub fn set_error_state_matcher(&mut self, matcher: Option<Rc<dyn ErrorStateMatcher>>) {
        self.base.set_error_state_matcher(matcher);
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
        self.base.state_changes().next();
    }

    #[must_use]
    pub fn value_placeholder(&self) -> Option<&str> {
        self.value_placeholder.as_deref()
    }

    /// Text shown instead of file names while nothing is selected.
    pub fn set_value_placeholder(&mut self, placeholder: Option<String>) {
        self.value_placeholder = placeholder;
        self.base.state_changes().next();
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
        self.base.state_changes().next();
    }

    #[must_use]
    pub fn multiple(&self) -> bool {
        self.multiple
    }

    pub fn set_multiple(&mut self, multiple: bool) {
        self.multiple = multiple;
        self.element.set_multiple(multiple);
        self.base.state_changes().next();
    }

    #[must_use]
    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    pub fn set_accept(&mut self, accept: Option<String>) {
        self.element.set_accept(accept.as_deref());
        self.accept = accept;
        self.base.state_changes().next();
    }

    pub fn set_autofilled(&mut self, autofilled: bool) {
        self.autofilled = autofilled;
        self.base.state_changes().next();
    }

    /// Display string: the selected names, else the value placeholder.
    #[must_use]
    pub fn file_names(&self) -> String {
        match self.value() {
            Some(files) => files.file_names(),
            None => self.value_placeholder.clone().unwrap_or_default(),
        }
    }

    fn store(&mut self, value: Option<FileSet>) {
        self.element.set_files(value.as_ref());
        self.value = value;
    }

    fn report_change(&mut self) {
        let value = self.value.clone().filter(|files| !files.is_empty());
        self.base.notify_change(value.as_ref());
    }
}

impl ControlValueAccessor for FileInputControl {
    fn write_value(&mut self, value: Option<FileSet>) {
        trace!("{}: model wrote {:?} file(s)", self.id, value.as_ref().map(FileSet::len));
        self.store(value);
        self.base.state_changes().next();
    }

    fn register_on_change(&mut self, callback: OnChange) {
        self.base.register_on_change(callback);
    }

    fn register_on_touched(&mut self, callback: OnTouched) {
        self.base.register_on_touched(callback);
    }

    fn set_disabled_state(&mut self, disabled: bool) {
        trace!("{}: disabled = {disabled}", self.id);
        self.element.set_disabled(disabled);
        self.base.state_changes().next();
    }
}

impl FormFieldControl for FileInputControl {
    fn id(&self) -> &str {
        &self.id
    }

    fn value(&self) -> Option<&FileSet> {
        self.value.as_ref().filter(|files| !files.is_empty())
    }

    fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn is_empty(&self) -> bool {
        self.value.as_ref().is_none_or(FileSet::is_empty)
    }

    fn required(&self) -> bool {
        self.required
    }

    fn disabled(&self) -> bool {
        self.element.is_disabled()
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn error_state(&self) -> bool {
        self.base.error_state()
    }

    fn autofilled(&self) -> bool {
        self.autofilled
    }

    fn should_label_float(&self) -> bool {
        self.focused || !self.is_empty() || self.value_placeholder.is_some()
    }

    fn control_type(&self) -> &'static str {
        CONTROL_TYPE
    }

    fn described_by(&self) -> &str {
        &self.described_by
    }

    fn set_described_by_ids(&mut self, ids: &[&str]) {
        self.described_by = ids.join(" ");
    }

    fn on_container_click(&mut self, target: ClickTarget<'_>) {
        if target.is_native_input() || self.disabled() {
            return;
        }
        self.element.focus();
        self.focused = true;
        self.open();
    }

    fn subscribe_state_changes(&self, callback: Box<dyn FnMut()>) -> SubscriptionId {
        self.base.state_changes().subscribe(callback)
    }

    fn unsubscribe_state_changes(&self, id: SubscriptionId) -> bool {
        self.base.state_changes().unsubscribe(id)
    }
}

impl Drop for FileInputControl {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl std::fmt::Debug for FileInputControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileInputControl")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("focused", &self.focused)
            .field("disabled", &self.element.is_disabled())
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}
