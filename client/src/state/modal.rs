//! Open/closed state for create/edit modals.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Which form a modal is showing, if any.
#[derive(Clone, Debug, PartialEq)]
pub enum ModalState<T> {
    Closed,
    Create,
    /// Editing an existing record, carried so the form can prefill.
    Edit(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> ModalState<T> {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn editing(&self) -> Option<&T> {
        match self {
            Self::Edit(record) => Some(record),
            _ => None,
        }
    }

    /// Dialog heading, e.g. "New exam" or "Edit exam".
    #[must_use]
    pub fn title(&self, noun: &str) -> String {
        match self {
            Self::Edit(_) => format!("Edit {noun}"),
            _ => format!("New {noun}"),
        }
    }
}
