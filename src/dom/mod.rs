pub mod memory;

use crate::core::config::GuardConfig;
use crate::core::field::{FieldId, FieldState};
use tracing::debug;

/// True while `document.readyState` says the markup is still being parsed,
/// meaning element lookup has to wait for `DOMContentLoaded`.
pub fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Element lookup on a rendered page.
pub trait Page {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}

/// The handful of element operations the guard needs. Handles are cheap to
/// clone and refer to the same underlying element.
pub trait Element: Clone {
    fn value(&self) -> String;
    fn set_text_content(&self, text: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// One field's input element and its error container. Either may be absent,
/// in which case the operations touching it do nothing.
#[derive(Debug, Clone)]
pub struct FieldBinding<E> {
    pub input: Option<E>,
    pub error: Option<E>,
}

impl<E: Element> FieldBinding<E> {
    pub fn bind<P>(page: &P, field: FieldId, config: &GuardConfig) -> Self
    where
        P: Page<Element = E>,
    {
        let ids = config.field(field);
        let input = page.element_by_id(&ids.input_id);
        let error = page.element_by_id(&ids.error_id);
        debug!(
            %field,
            input_id = %ids.input_id,
            error_id = %ids.error_id,
            input_found = input.is_some(),
            error_found = error.is_some(),
            "bound field"
        );
        Self { input, error }
    }

    pub fn read_value(&self) -> Option<String> {
        self.input.as_ref().map(|input| input.value())
    }

    /// Writes the field's error state to the page: message text into the
    /// error container and the invalid class on the input.
    pub fn render(&self, state: &FieldState, invalid_class: &str) {
        if let Some(error) = &self.error {
            error.set_text_content(state.error_message());
        }
        if let Some(input) = &self.input {
            if state.is_invalid() {
                input.add_class(invalid_class);
            } else {
                input.remove_class(invalid_class);
            }
        }
    }
}

/// Every element the guard needs, resolved once at initialization.
#[derive(Debug, Clone)]
pub struct FormBinding<E> {
    pub form: Option<E>,
    pub identifier: FieldBinding<E>,
    pub secret: FieldBinding<E>,
}

impl<E: Element> FormBinding<E> {
    pub fn bind<P>(page: &P, config: &GuardConfig) -> Self
    where
        P: Page<Element = E>,
    {
        let form = page.element_by_id(&config.form_id);
        if form.is_none() {
            debug!(form_id = %config.form_id, "form not found, submit will not be intercepted");
        }

        Self {
            form,
            identifier: FieldBinding::bind(page, FieldId::Identifier, config),
            secret: FieldBinding::bind(page, FieldId::Secret, config),
        }
    }

    pub fn has_form(&self) -> bool {
        self.form.is_some()
    }

    pub fn field(&self, field: FieldId) -> &FieldBinding<E> {
        match field {
            FieldId::Identifier => &self.identifier,
            FieldId::Secret => &self.secret,
        }
    }
}
