pub mod core;
pub mod dom;
pub mod input;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use core::config;
pub use core::error;
pub use core::field;
pub use core::form;
pub use core::form_event;
pub use core::form_guard;
pub use core::submission;

pub use input::validators;

pub use core::config::GuardConfig;
pub use core::field::{FieldId, FieldStatus};
pub use core::form_guard::FormGuard;
pub use core::submission::FormSubmission;
