pub mod field_input;
pub mod validators;

pub use field_input::FieldInput;
pub use validators::Validator;
