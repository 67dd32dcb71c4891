use crate::core::field::{FieldError, FieldId, FieldState};
use crate::input::validators::{self, Validator};
use std::fmt;

pub struct FieldInput {
    state: FieldState,
    validators: Vec<Validator>,
}

impl FieldInput {
    pub fn new(id: FieldId) -> Self {
        Self {
            state: FieldState::new(id),
            validators: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn id(&self) -> FieldId {
        self.state.id()
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.state.set_value(value);
    }

    pub fn clear_error(&mut self) -> bool {
        self.state.clear_error()
    }

    /// Runs the validators against the current value and flags the field on
    /// the first failure. Does not clear an existing error on success.
    pub fn validate(&mut self) -> Result<(), FieldError> {
        match validators::run_validators(&self.validators, self.state.value()) {
            Ok(()) => Ok(()),
            Err(message) => {
                let err = FieldError::missing(self.id(), message);
                self.state.flag(err.clone());
                Err(err)
            }
        }
    }
}

impl fmt::Debug for FieldInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldInput")
            .field("state", &self.state)
            .field("validators", &self.validators.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::FieldInput;
    use crate::core::field::{FieldId, FieldStatus};
    use crate::input::validators::required;

    #[test]
    fn validate_flags_on_failure() {
        let mut input = FieldInput::new(FieldId::Secret).with_validator(required("empty"));
        let err = input.validate().expect_err("empty value must fail");
        assert_eq!(err.field, FieldId::Secret);
        assert_eq!(err.message, "empty");
        assert_eq!(input.state().status(), FieldStatus::Flagged);
    }

    #[test]
    fn validate_without_validators_passes() {
        let mut input = FieldInput::new(FieldId::Identifier);
        assert!(input.validate().is_ok());
        assert_eq!(input.state().status(), FieldStatus::Clean);
    }
}
