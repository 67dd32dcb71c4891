use loginguard::config::{IDENTIFIER_REQUIRED, SECRET_REQUIRED};
use loginguard::dom::Element;
use loginguard::dom::memory::{MemoryElement, MemoryPage};
use loginguard::form_event::FormEvent;
use loginguard::{FieldId, FieldStatus, FormGuard, FormSubmission, GuardConfig};

struct Harness {
    page: MemoryPage,
    guard: FormGuard<MemoryElement>,
}

impl Harness {
    fn new() -> Self {
        Self::with_page(MemoryPage::login_page())
    }

    fn with_page(page: MemoryPage) -> Self {
        let guard = FormGuard::install(&page, &GuardConfig::default());
        Self { page, guard }
    }

    fn element(&self, id: &str) -> MemoryElement {
        self.page.get(id).cloned().unwrap_or_default()
    }

    fn fill(&self, identifier: &str, secret: &str) {
        self.element("user-name").set_value(identifier);
        self.element("password").set_value(secret);
    }

    fn type_into(&mut self, field: FieldId, value: &str) -> Vec<FormEvent> {
        let id = match field {
            FieldId::Identifier => "user-name",
            FieldId::Secret => "password",
        };
        self.element(id).set_value(value);
        self.guard.on_field_edited(field)
    }

    fn submit(&mut self) -> FormSubmission {
        let mut submission = FormSubmission::new();
        self.guard.on_submit(&mut submission);
        submission
    }

    fn identifier_error(&self) -> String {
        self.element("user-name-error").text_content()
    }

    fn secret_error(&self) -> String {
        self.element("password-error").text_content()
    }

    fn identifier_marked(&self) -> bool {
        self.element("user-name").has_class("is-invalid")
    }

    fn secret_marked(&self) -> bool {
        self.element("password").has_class("is-invalid")
    }
}

#[test]
fn whitespace_identifier_is_rejected() {
    let mut h = Harness::new();
    h.fill("  ", "abc");

    let submission = h.submit();
    assert!(submission.is_cancelled());
    assert_eq!(h.identifier_error(), IDENTIFIER_REQUIRED);
    assert_eq!(h.secret_error(), "");
    assert!(h.identifier_marked());
    assert!(!h.secret_marked());
}

#[test]
fn empty_secret_is_rejected() {
    let mut h = Harness::new();
    h.fill("alice", "");

    let submission = h.submit();
    assert!(submission.is_cancelled());
    assert_eq!(h.secret_error(), SECRET_REQUIRED);
    assert_eq!(h.identifier_error(), "");
    assert!(h.secret_marked());
    assert!(!h.identifier_marked());
}

#[test]
fn single_space_secret_is_accepted() {
    let mut h = Harness::new();
    h.fill("alice", " ");

    let submission = h.submit();
    assert!(submission.should_proceed());
    assert!(submission.errors().is_empty());
    assert_eq!(h.identifier_error(), "");
    assert_eq!(h.secret_error(), "");
    assert!(!h.identifier_marked());
    assert!(!h.secret_marked());
}

#[test]
fn both_empty_shows_both_errors() {
    let mut h = Harness::new();

    let submission = h.submit();
    assert!(submission.is_cancelled());
    assert_eq!(h.identifier_error(), IDENTIFIER_REQUIRED);
    assert_eq!(h.secret_error(), SECRET_REQUIRED);
    assert!(h.identifier_marked());
    assert!(h.secret_marked());
}

#[test]
fn repeated_submit_gives_same_outcome() {
    let mut h = Harness::new();
    h.fill("", "");

    let first = h.submit();
    let first_errors = (h.identifier_error(), h.secret_error());
    let second = h.submit();
    let second_errors = (h.identifier_error(), h.secret_error());

    assert!(first.is_cancelled());
    assert!(second.is_cancelled());
    assert_eq!(first.errors(), second.errors());
    assert_eq!(first_errors, second_errors);
    assert_eq!(h.element("user-name").classes(), vec!["is-invalid".to_string()]);
}

#[test]
fn editing_clears_only_the_edited_field() {
    let mut h = Harness::new();
    h.submit();

    let events = h.type_into(FieldId::Identifier, "a");
    assert!(events.contains(&FormEvent::ErrorCancelled {
        id: FieldId::Identifier
    }));
    assert_eq!(h.identifier_error(), "");
    assert!(!h.identifier_marked());
    assert_eq!(h.secret_error(), SECRET_REQUIRED);
    assert!(h.secret_marked());
    assert_eq!(h.guard.form().status(FieldId::Secret), FieldStatus::Flagged);
}

#[test]
fn editing_to_empty_still_clears() {
    let mut h = Harness::new();
    h.fill("", "pw");
    h.submit();
    assert!(h.identifier_marked());

    h.type_into(FieldId::Identifier, "   ");
    assert_eq!(h.identifier_error(), "");
    assert!(!h.identifier_marked());
}

#[test]
fn fixing_fields_lets_submit_through() {
    let mut h = Harness::new();
    h.submit();

    h.type_into(FieldId::Identifier, "alice");
    h.type_into(FieldId::Secret, "hunter2");
    let submission = h.submit();

    assert!(submission.should_proceed());
    assert_eq!(h.identifier_error(), "");
    assert_eq!(h.secret_error(), "");
}

#[test]
fn submit_clears_stale_errors_before_checking() {
    let mut h = Harness::new();
    h.fill("", "");
    h.submit();

    // Values change without an edit event reaching the guard.
    h.fill("alice", "pw");
    let submission = h.submit();
    assert!(submission.should_proceed());
    assert!(!h.identifier_marked());
    assert!(!h.secret_marked());
}

#[test]
fn byte_order_mark_identifier_is_rejected() {
    let mut h = Harness::new();
    h.fill("\u{FEFF}", "pw");

    assert!(h.submit().is_cancelled());
    assert_eq!(h.identifier_error(), IDENTIFIER_REQUIRED);
}

#[test]
fn next_line_identifier_is_accepted() {
    let mut h = Harness::new();
    h.fill("\u{85}", "pw");

    assert!(h.submit().should_proceed());
    assert_eq!(h.identifier_error(), "");
}

#[test]
fn secret_is_not_trimmed() {
    let mut h = Harness::new();
    h.fill("alice", "\t\n");
    assert!(h.submit().should_proceed());
}

#[test]
fn page_without_form_never_cancels() {
    let mut page = MemoryPage::login_page();
    page.remove("loginForm");
    let mut h = Harness::with_page(page);

    let submission = h.submit();
    assert!(submission.should_proceed());
    assert_eq!(h.identifier_error(), "");

    h.element("user-name-error").set_text_content("old");
    h.type_into(FieldId::Identifier, "x");
    assert_eq!(h.identifier_error(), "");
}

#[test]
fn missing_error_container_still_marks_input() {
    let mut page = MemoryPage::login_page();
    page.remove("password-error");
    let mut h = Harness::with_page(page);

    let submission = h.submit();
    assert!(submission.is_cancelled());
    assert!(h.secret_marked());
    assert_eq!(
        h.guard.form().error_message(FieldId::Secret),
        SECRET_REQUIRED
    );
}

#[test]
fn missing_input_is_not_checked() {
    let mut page = MemoryPage::login_page();
    page.remove("password");
    let mut h = Harness::with_page(page);
    h.element("user-name").set_value("alice");

    let submission = h.submit();
    assert!(submission.should_proceed());
    assert_eq!(h.secret_error(), "");

    let events = h.guard.on_field_edited(FieldId::Secret);
    assert!(events.is_empty());
}

#[test]
fn configured_ids_and_messages_are_used() {
    let config = GuardConfig::from_yaml_str(
        "form_id: signin\nidentifier:\n  input_id: email\n  error_id: email-error\n  required_message: Email required\n",
    )
    .expect("config");

    let mut page = MemoryPage::new();
    for id in ["signin", "email", "email-error", "password", "password-error"] {
        page.insert(id, MemoryElement::new());
    }
    let mut guard = FormGuard::install(&page, &config);

    let mut submission = FormSubmission::new();
    guard.on_submit(&mut submission);
    assert!(submission.is_cancelled());
    assert_eq!(
        page.get("email-error").map(MemoryElement::text_content).as_deref(),
        Some("Email required")
    );
    assert_eq!(
        page.get("password-error").map(MemoryElement::text_content).as_deref(),
        Some(SECRET_REQUIRED)
    );
}
