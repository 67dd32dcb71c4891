pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod form_event;
pub mod form_guard;
pub mod submission;
