use crate::core::config::GuardConfig;
use crate::core::field::FieldId;
use crate::core::form_guard::FormGuard;
use crate::core::submission::FormSubmission;
use crate::dom::{self, Element, Page};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlInputElement};

type GuardSlot = Rc<RefCell<Option<FormGuard<DomElement>>>>;

#[derive(Debug, Clone)]
pub struct DomElement(web_sys::Element);

impl Element for DomElement {
    fn value(&self) -> String {
        self.0
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            debug!(class, ?err, "add class failed");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            debug!(class, ?err, "remove class failed");
        }
    }
}

pub struct DomPage(Document);

impl Page for DomPage {
    type Element = DomElement;

    fn element_by_id(&self, id: &str) -> Option<DomElement> {
        self.0.get_element_by_id(id).map(DomElement)
    }
}

/// Returned to JavaScript by the install functions. The guard itself is
/// created once the document is ready.
#[wasm_bindgen]
pub struct LoginGuardHandle {
    slot: GuardSlot,
}

#[wasm_bindgen]
impl LoginGuardHandle {
    #[wasm_bindgen(js_name = isInstalled)]
    pub fn is_installed(&self) -> bool {
        self.slot.borrow().is_some()
    }

    #[wasm_bindgen(js_name = interceptsSubmit)]
    pub fn intercepts_submit(&self) -> bool {
        self.slot
            .borrow()
            .as_ref()
            .is_some_and(FormGuard::intercepts_submit)
    }

    /// Current field states as JSON. Field values are never included.
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        let slot = self.slot.borrow();
        let Some(guard) = slot.as_ref() else {
            return Ok("null".to_string());
        };
        serde_json::to_string(&guard.form().snapshot())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

#[wasm_bindgen]
pub fn install() -> LoginGuardHandle {
    install_config(GuardConfig::default())
}

/// Like [`install`] with element ids and messages taken from a JSON
/// document. An invalid document falls back to the defaults.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(json: &str) -> LoginGuardHandle {
    let config = GuardConfig::from_json_str(json).unwrap_or_else(|err| {
        warn!(%err, "invalid guard config, using defaults");
        GuardConfig::default()
    });
    install_config(config)
}

fn install_config(config: GuardConfig) -> LoginGuardHandle {
    let slot: GuardSlot = Rc::new(RefCell::new(None));
    let handle = LoginGuardHandle {
        slot: Rc::clone(&slot),
    };

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        debug!("no document, guard not installed");
        return handle;
    };

    if dom::is_loading(&document.ready_state()) {
        let target = document.clone();
        let on_ready = Closure::once(move |_event: Event| attach(&target, &config, &slot));
        match document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            Ok(()) => on_ready.forget(),
            Err(err) => warn!(?err, "could not wait for DOMContentLoaded"),
        }
    } else {
        attach(&document, &config, &slot);
    }

    handle
}

fn attach(document: &Document, config: &GuardConfig, slot: &GuardSlot) {
    let page = DomPage(document.clone());
    let guard = FormGuard::install(&page, config);
    let binding = guard.binding().clone();
    *slot.borrow_mut() = Some(guard);

    for field in FieldId::ALL {
        if let Some(input) = &binding.field(field).input {
            let slot = Rc::clone(slot);
            listen(input, "input", move |_event: Event| {
                if let Some(guard) = slot.borrow_mut().as_mut() {
                    guard.on_field_edited(field);
                }
            });
        }
    }

    if let Some(form) = &binding.form {
        let slot = Rc::clone(slot);
        listen(form, "submit", move |event: Event| {
            let mut submission = FormSubmission::new();
            if let Some(guard) = slot.borrow_mut().as_mut() {
                guard.on_submit(&mut submission);
            }
            if submission.is_cancelled() {
                event.prevent_default();
            }
        });
    }
}

fn listen<F>(element: &DomElement, event_type: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    match element
        .0
        .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
    {
        Ok(()) => closure.forget(),
        Err(err) => warn!(event_type, ?err, "could not attach listener"),
    }
}
