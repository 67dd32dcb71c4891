use crate::core::config::GuardConfig;
use crate::core::field::{FieldId, FieldState, FieldStatus};
use crate::core::form_event::FormEvent;
use crate::core::submission::FormSubmission;
use crate::input::FieldInput;
use crate::input::validators;
use indexmap::IndexMap;
use serde::Serialize;

/// The two-field login model, independent of any page.
#[derive(Debug)]
pub struct LoginForm {
    fields: IndexMap<FieldId, FieldInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub fields: IndexMap<FieldId, FieldState>,
}

impl LoginForm {
    pub fn new(config: &GuardConfig) -> Self {
        let identifier = FieldInput::new(FieldId::Identifier).with_validator(
            validators::required_trimmed(config.identifier.required_message.clone()),
        );
        let secret = FieldInput::new(FieldId::Secret)
            .with_validator(validators::required(config.secret.required_message.clone()));

        let mut fields = IndexMap::new();
        fields.insert(FieldId::Identifier, identifier);
        fields.insert(FieldId::Secret, secret);
        Self { fields }
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldState> {
        self.fields.get(&id).map(FieldInput::state)
    }

    pub fn status(&self, id: FieldId) -> FieldStatus {
        self.field(id).map_or(FieldStatus::Clean, FieldState::status)
    }

    pub fn error_message(&self, id: FieldId) -> &str {
        self.field(id).map_or("", FieldState::error_message)
    }

    /// Copies a value in without touching error state. Used right before a
    /// submit so the checks see what the page currently holds.
    pub fn sync_value(&mut self, id: FieldId, value: impl Into<String>) {
        if let Some(input) = self.fields.get_mut(&id) {
            input.set_value(value);
        }
    }

    /// An edit to one field. Its error is dropped whatever the new value is;
    /// the other field is left alone.
    pub fn edit(&mut self, id: FieldId, value: impl Into<String>) -> Vec<FormEvent> {
        let Some(input) = self.fields.get_mut(&id) else {
            return vec![];
        };

        let value = value.into();
        let mut events = Vec::new();

        if input.value() != value {
            events.push(FormEvent::InputChanged {
                id,
                value: value.clone(),
            });
            input.set_value(value);
        }

        if input.clear_error() {
            events.push(FormEvent::ErrorCancelled { id });
        }

        events
    }

    pub fn clear_errors(&mut self) -> Vec<FormEvent> {
        self.fields
            .iter_mut()
            .filter_map(|(id, input)| {
                input
                    .clear_error()
                    .then_some(FormEvent::ErrorCancelled { id: *id })
            })
            .collect()
    }

    /// Resets every field, then checks each one. All checks run even after a
    /// failure so every empty field ends up flagged.
    pub fn validate(&mut self, submission: &mut FormSubmission) -> Vec<FormEvent> {
        self.validate_where(submission, |_| true)
    }

    /// Like [`LoginForm::validate`], but only fields accepted by `include`
    /// are checked. Every field is still reset.
    pub fn validate_where<F>(&mut self, submission: &mut FormSubmission, include: F) -> Vec<FormEvent>
    where
        F: Fn(FieldId) -> bool,
    {
        let mut events = self.clear_errors();

        for input in self.fields.values_mut().filter(|input| include(input.id())) {
            if let Err(err) = input.validate() {
                events.push(FormEvent::ErrorScheduled {
                    id: err.field,
                    message: err.message.clone(),
                });
                submission.reject(err);
            }
        }

        if !submission.errors().is_empty() {
            submission.cancel();
        }

        if submission.is_cancelled() {
            events.push(FormEvent::SubmitCancelled);
        } else {
            events.push(FormEvent::SubmitAllowed);
        }

        events
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            fields: self
                .fields
                .iter()
                .map(|(id, input)| (*id, input.state().clone()))
                .collect(),
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new(&GuardConfig::default())
    }
}
