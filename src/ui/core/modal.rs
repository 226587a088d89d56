//! Process-wide modal state.
//!
//! One modal at most is logically open at any instant. That invariant is
//! carried by a single `Option<DialogType>` rather than per-dialog boolean
//! flags, so two dialogs can never independently believe they are open.
//! Because the dialog type and its payload live in one enum value, there is
//! no "open without a type" state and no stale payload after close.

use super::actions::{DialogKind, DialogType};

/// Holder of the currently open dialog, if any.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    current: Option<DialogType>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a dialog. If another dialog is open it is replaced:
    /// last-open-wins, no stacking, no queuing.
    pub fn open(&mut self, dialog: DialogType) {
        self.current = Some(dialog);
    }

    /// Close whatever is open. Idempotent; also drops the payload, so
    /// nothing stale can be rendered afterwards.
    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the open dialog is of the given kind. Each dialog family uses
    /// this to decide whether it is the one being shown.
    pub fn is_open_for(&self, kind: DialogKind) -> bool {
        self.current.as_ref().is_some_and(|d| d.kind() == kind)
    }

    pub fn current(&self) -> Option<&DialogType> {
        self.current.as_ref()
    }
}
