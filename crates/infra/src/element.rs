// crates/infra/src/element.rs
use std::{cell::RefCell, rc::Rc};

use file_input_ports::NativeFileElement;
use file_input_shared_kernel::FileSet;
use log::trace;

#[derive(Debug, Default)]
struct ElementState {
    files: Option<FileSet>,
    disabled: bool,
    multiple: bool,
    accept: Option<String>,
    focus_count: usize,
    open_count: usize,
    clear_count: usize,
}

/// Headless stand-in for the platform file element.
///
/// Clones share state, so a host can hand one clone to the control and keep
/// another to observe what the control wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileElement {
    state: Rc<RefCell<ElementState>>,
}

impl InMemoryFileElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files last written by the control; `None` after a reset or clear.
    #[must_use]
    pub fn files(&self) -> Option<FileSet> {
        self.state.borrow().files.clone()
    }

    #[must_use]
    pub fn multiple(&self) -> bool {
        self.state.borrow().multiple
    }

    #[must_use]
    pub fn accept(&self) -> Option<String> {
        self.state.borrow().accept.clone()
    }

    #[must_use]
    pub fn focus_count(&self) -> usize {
        self.state.borrow().focus_count
    }

    /// Number of times the chooser dialog was requested.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.state.borrow().open_count
    }

    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.state.borrow().clear_count
    }
}

impl NativeFileElement for InMemoryFileElement {
    fn set_files(&mut self, files: Option<&FileSet>) {
        self.state.borrow_mut().files = files.cloned();
    }

    fn clear_value(&mut self) {
        let mut state = self.state.borrow_mut();
        state.files = None;
        state.clear_count += 1;
    }

    fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }

    fn set_multiple(&mut self, multiple: bool) {
        self.state.borrow_mut().multiple = multiple;
    }

    fn set_accept(&mut self, accept: Option<&str>) {
        self.state.borrow_mut().accept = accept.map(str::to_owned);
    }

    fn focus(&mut self) {
        self.state.borrow_mut().focus_count += 1;
    }

    fn open_chooser(&mut self) {
        let mut state = self.state.borrow_mut();
        state.open_count += 1;
        trace!("chooser requested (multiple: {}, accept: {:?})", state.multiple, state.accept);
    }
}
