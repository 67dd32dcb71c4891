use crate::core::config::GuardConfig;
use crate::core::field::FieldId;
use crate::core::form::LoginForm;
use crate::core::form_event::FormEvent;
use crate::core::submission::FormSubmission;
use crate::dom::{Element, FormBinding, Page};
use tracing::{debug, trace};

/// Watches the login form's two fields. Built once per page load; every
/// element it touches was looked up in [`FormGuard::install`].
#[derive(Debug)]
pub struct FormGuard<E> {
    binding: FormBinding<E>,
    form: LoginForm,
    invalid_class: String,
}

impl<E: Element> FormGuard<E> {
    pub fn install<P>(page: &P, config: &GuardConfig) -> Self
    where
        P: Page<Element = E>,
    {
        let binding = FormBinding::bind(page, config);
        debug!(intercepts_submit = binding.has_form(), "form guard installed");
        Self {
            binding,
            form: LoginForm::new(config),
            invalid_class: config.invalid_class.clone(),
        }
    }

    pub fn binding(&self) -> &FormBinding<E> {
        &self.binding
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// False when the page has no form element. Submit handling is then
    /// never wired up and [`FormGuard::on_submit`] does nothing.
    pub fn intercepts_submit(&self) -> bool {
        self.binding.has_form()
    }

    /// An edit to `field`. Its message and invalid marker are cleared on the
    /// page whatever the new value is.
    pub fn on_field_edited(&mut self, field: FieldId) -> Vec<FormEvent> {
        let binding = self.binding.field(field);
        let value = binding.read_value().unwrap_or_default();
        let events = self.form.edit(field, value);

        if let Some(state) = self.form.field(field) {
            binding.render(state, &self.invalid_class);
        }

        trace!(%field, events = events.len(), "field edited");
        events
    }

    /// Checks both fields and cancels `submission` if either is empty. Both
    /// checks always run. A field whose input element is missing from the
    /// page is not checked.
    pub fn on_submit(&mut self, submission: &mut FormSubmission) -> Vec<FormEvent> {
        if !self.intercepts_submit() {
            return vec![];
        }

        for field in FieldId::ALL {
            if let Some(value) = self.binding.field(field).read_value() {
                self.form.sync_value(field, value);
            }
        }

        let binding = &self.binding;
        let events = self
            .form
            .validate_where(submission, |field| binding.field(field).input.is_some());

        self.render();

        debug!(
            cancelled = submission.is_cancelled(),
            errors = submission.errors().len(),
            "submit checked"
        );
        events
    }

    fn render(&self) {
        for field in FieldId::ALL {
            if let Some(state) = self.form.field(field) {
                self.binding.field(field).render(state, &self.invalid_class);
            }
        }
    }
}
