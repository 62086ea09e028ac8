#![allow(dead_code)]
// tests/common/mod.rs
//! Shared fixtures for the integration suites.

use std::{cell::Cell, rc::Rc};

use file_input::prelude::*;
use file_input::Validator;

/// A control wired to headless collaborators and a form model.
pub struct Harness {
    pub control: FileInputControl,
    pub element: InMemoryFileElement,
    pub monitor: Rc<ManualFocusMonitor>,
    pub form: FormControl,
    pub parent: ParentForm,
    pub emissions: Rc<Cell<usize>>,
}

impl Harness {
    pub fn new(validators: Vec<Box<dyn Validator>>) -> Self {
        let element = InMemoryFileElement::new();
        let monitor = Rc::new(ManualFocusMonitor::new());
        let mut control = FileInputControl::new(Box::new(element.clone()), monitor.clone());
        let parent = ParentForm::new();
        let form = FormControl::new(validators).with_parent(parent.clone());
        bind(&mut control, &form);

        let emissions = Rc::new(Cell::new(0));
        let counter = Rc::clone(&emissions);
        control.subscribe_state_changes(Box::new(move || counter.set(counter.get() + 1)));

        Self { control, element, monitor, form, parent, emissions }
    }

    pub fn unbound() -> Self {
        Self::new(Vec::new())
    }

    pub fn id(&self) -> String {
        self.control.id().to_owned()
    }
}

pub fn file(name: &str, size: u64) -> FileHandle {
    FileHandle::new(name, size)
}

pub fn selection(sizes: &[u64]) -> FileSet {
    sizes.iter().enumerate().map(|(i, size)| file(&format!("file{i}.bin"), *size)).collect()
}
