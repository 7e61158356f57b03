use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swatch_grid::IndexDiff;

use crate::host::HostView;

/// What a [`Button`] does to the host when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append this many random swatches.
    AddRandom(usize),
    /// Put back the cells taken out by the last removal.
    RestoreRemoved,
}

/// A control that acts on a [`HostView`] it does not own.
///
/// The button only holds a weak handle; pressing it after the host is gone is
/// a logged no-op.
pub struct Button {
    label: String,
    action: Action,
    host: Weak<RefCell<HostView>>,
}

impl Button {
    pub fn new(label: impl Into<String>, action: Action, host: &Rc<RefCell<HostView>>) -> Self {
        Self { label: label.into(), action, host: Rc::downgrade(host) }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the action; `None` when the host has been dropped.
    pub fn press(&self) -> Option<IndexDiff> {
        let Some(host) = self.host.upgrade() else {
            log::warn!("`{}` pressed after its host view was dropped", self.label);
            return None;
        };
        let mut host = host.borrow_mut();
        let diff = match self.action {
            Action::AddRandom(count) => host.add_random(count),
            Action::RestoreRemoved => host.restore_removed(),
        };
        Some(diff)
    }
}

#[cfg(test)]
mod tests {
    use swatch_grid::{FlowLayout, GeometricParams, Swatch};

    use super::*;

    fn shared_host() -> Rc<RefCell<HostView>> {
        Rc::new(RefCell::new(HostView::new(
            GeometricParams::default(),
            FlowLayout::new(400.0, 600.0),
            Some(1),
        )))
    }

    #[test]
    fn add_button_appends_batch() {
        let host = shared_host();
        let add = Button::new("Add", Action::AddRandom(3), &host);
        let diff = add.press().unwrap();
        assert_eq!(diff.inserted, vec![0, 1, 2]);
        assert_eq!(host.borrow().cells().len(), 3);
    }

    #[test]
    fn restore_button_without_history_is_empty() {
        let host = shared_host();
        let restore = Button::new("Add removed", Action::RestoreRemoved, &host);
        assert!(restore.press().unwrap().is_empty());
    }

    #[test]
    fn restore_button_puts_cells_back() {
        let host = shared_host();
        host.borrow_mut().append(vec![Swatch::Red, Swatch::Blue]);
        host.borrow_mut().remove_swatch(Swatch::Red);
        let restore = Button::new("Add removed", Action::RestoreRemoved, &host);
        assert_eq!(restore.press().unwrap().inserted, vec![1]);
    }

    #[test]
    fn press_after_host_dropped_is_none() {
        let host = shared_host();
        let add = Button::new("Add", Action::AddRandom(1), &host);
        drop(host);
        assert!(add.press().is_none());
        assert_eq!(add.label(), "Add");
    }

    #[test]
    fn button_does_not_keep_host_alive() {
        let host = shared_host();
        let _add = Button::new("Add", Action::AddRandom(1), &host);
        assert_eq!(Rc::strong_count(&host), 1);
    }
}
