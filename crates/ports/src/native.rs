// crates/ports/src/native.rs
use file_input_shared_kernel::FileSet;

/// The platform `<input type="file">` element wrapped by the control.
///
/// The element owns the disabled flag; the control only mirrors it. Opening
/// the chooser is fire-and-forget: a selection, if any, comes back through
/// the control's change handler.
pub trait NativeFileElement {
    /// Records the files currently shown by the element; `None` resets it.
    fn set_files(&mut self, files: Option<&FileSet>);

    /// Resets the element's value to its cleared sentinel.
    fn clear_value(&mut self);

    fn is_disabled(&self) -> bool;

    fn set_disabled(&mut self, disabled: bool);

    fn set_multiple(&mut self, multiple: bool);

    /// File-type filter offered by the dialog, passed through verbatim.
    fn set_accept(&mut self, accept: Option<&str>);

    fn focus(&mut self);

    /// Shows the platform file chooser.
    fn open_chooser(&mut self);
}

/// Element that received a click inside the control's container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickTarget<'a> {
    pub tag_name: &'a str,
}

impl<'a> ClickTarget<'a> {
    #[must_use]
    pub fn new(tag_name: &'a str) -> Self {
        Self { tag_name }
    }

    /// Whether the click landed on the native input itself.
    #[must_use]
    pub fn is_native_input(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case("input")
    }
}

/// UI event that triggered a clear (e.g. a click on a reset button).
pub trait ClearEvent {
    fn prevent_default(&mut self);
    fn stop_propagation(&mut self);
}
