//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome, feed cards, record lists and the
//! create/edit dialogs. Shared state comes from `App` context providers;
//! anything a component changes is reported back through callbacks.

pub mod confirm_dialog;
pub mod exam_modal;
pub mod hospitalization_modal;
pub mod modal;
pub mod navbar;
pub mod pagination;
pub mod patient_card;
pub mod patient_modal;
pub mod record_item;
pub mod record_modal;
pub mod search_bar;
pub mod surgery_modal;
pub mod tag_input;
pub mod toast;
pub mod vaccine_modal;
