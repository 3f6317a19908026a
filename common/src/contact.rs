use std::{fmt, sync::LazyLock};

use regex::Regex;
use tracing::{debug, error};

use crate::Transient;

// simulated delivery time and how long the result banner stays up
pub const SUBMIT_DELAY_MS: u32 = 1500;
pub const STATUS_RESET_MS: u32 = 5000;

pub const MIN_MESSAGE_CHARS: usize = 10;

// deliberately permissive: something@something.something
pub const EMAIL_REGEX: &str = r"\S+@\S+\.\S+";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("email pattern is a valid regex"));

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
        }
    }

    // form control name and id
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Your Message",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
    NameRequired,
    EmailRequired,
    EmailInvalid,
    SubjectRequired,
    MessageRequired,
    MessageTooShort,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NameRequired => write!(f, "Name is required"),
            ValidationError::EmailRequired => write!(f, "Email is required"),
            ValidationError::EmailInvalid => write!(f, "Email address is invalid"),
            ValidationError::SubjectRequired => write!(f, "Subject is required"),
            ValidationError::MessageRequired => write!(f, "Message is required"),
            ValidationError::MessageTooShort => write!(
                f,
                "Message must be at least {MIN_MESSAGE_CHARS} characters"
            ),
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    // every field is checked so that all problems show at once
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.set(Field::Name, ValidationError::NameRequired);
        }

        // note that the emptiness check is on the raw value, while the pattern
        // rejects whitespace-only input on its own
        if self.email.is_empty() {
            errors.set(Field::Email, ValidationError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.set(Field::Email, ValidationError::EmailInvalid);
        }

        if self.subject.trim().is_empty() {
            errors.set(Field::Subject, ValidationError::SubjectRequired);
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.set(Field::Message, ValidationError::MessageRequired);
        } else if message.chars().count() < MIN_MESSAGE_CHARS {
            errors.set(Field::Message, ValidationError::MessageTooShort);
        }

        errors
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors([Option<ValidationError>; 4]);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.0[field.index()]
    }

    pub fn set(&mut self, field: Field, err: ValidationError) {
        self.0[field.index()] = Some(err);
    }

    pub fn clear(&mut self, field: Field) {
        self.0[field.index()] = None;
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

// ContactDraft
//
// the complete state behind the contact form.  the webapp owns one of these in a
// signal and drives the timers; everything that decides what the form shows
// lives here
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    form: ContactForm,
    errors: FieldErrors,
    status: Transient<SubmitStatus>,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        self.form.get(field)
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(field)
    }

    pub fn status(&self) -> SubmitStatus {
        *self.status.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.status() == SubmitStatus::Submitting
    }

    // editing a field clears its error, but leaves the others alone
    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    pub fn validate(&mut self) -> bool {
        self.errors = self.form.validate();
        self.errors.is_empty()
    }

    // returns the form to deliver, or None if submission is blocked
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.is_submitting() {
            debug!("ignoring submit while a submission is in flight");
            return None;
        }

        if !self.validate() {
            debug!("contact form failed validation");
            return None;
        }

        self.status.set(SubmitStatus::Submitting);
        Some(self.form.clone())
    }

    // records the delivery result and returns the ticket to hand to clear_status()
    // once STATUS_RESET_MS has elapsed
    pub fn finish_submit<E: fmt::Display>(&mut self, result: Result<(), E>) -> u64 {
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.errors = FieldErrors::default();
                self.status.set(SubmitStatus::Success)
            }
            Err(err) => {
                error!("error submitting contact form: {err}");
                self.status.set(SubmitStatus::Error)
            }
        }
    }

    pub fn clear_status(&mut self, ticket: u64) {
        self.status.expire(ticket);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        let mut draft = ContactDraft::new();
        draft.set_field(Field::Name, "Ada".into());
        draft.set_field(Field::Email, "ada@example.com".into());
        draft.set_field(Field::Subject, "Hello".into());
        draft.set_field(Field::Message, "I would like to chat.".into());
        draft
    }

    #[test]
    fn empty_form_reports_every_field() {
        let mut draft = ContactDraft::new();

        assert!(draft.begin_submit().is_none());
        assert_eq!(draft.error(Field::Name), Some(ValidationError::NameRequired));
        assert_eq!(draft.error(Field::Email), Some(ValidationError::EmailRequired));
        assert_eq!(
            draft.error(Field::Subject),
            Some(ValidationError::SubjectRequired)
        );
        assert_eq!(
            draft.error(Field::Message),
            Some(ValidationError::MessageRequired)
        );
        assert_eq!(draft.status(), SubmitStatus::Idle);
    }

    #[test]
    fn whitespace_only_fields_are_empty() {
        let mut draft = filled();
        draft.set_field(Field::Name, "   ".into());
        draft.set_field(Field::Subject, "\t".into());
        draft.set_field(Field::Message, "  \n ".into());

        assert!(draft.begin_submit().is_none());
        assert_eq!(draft.error(Field::Name), Some(ValidationError::NameRequired));
        assert_eq!(
            draft.error(Field::Subject),
            Some(ValidationError::SubjectRequired)
        );
        assert_eq!(
            draft.error(Field::Message),
            Some(ValidationError::MessageRequired)
        );
        assert_eq!(draft.error(Field::Email), None);
    }

    #[test]
    fn email_pattern() {
        for ok in ["a@b.c", "first.last@example.co.uk", "x@y.z trailing", "@@a@b.c"] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }

        for bad in ["plainaddress", "a@b", "@b.c", "a@.c", "a @b.c", "a@b.", " "] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }

        let mut draft = filled();
        draft.set_field(Field::Email, "not-an-email".into());
        assert!(!draft.validate());
        assert_eq!(draft.error(Field::Email), Some(ValidationError::EmailInvalid));

        draft.set_field(Field::Email, "   ".into());
        assert!(!draft.validate());
        assert_eq!(draft.error(Field::Email), Some(ValidationError::EmailInvalid));
    }

    #[test]
    fn short_messages_are_rejected_after_trimming() {
        let mut draft = filled();

        draft.set_field(Field::Message, "   123456789   ".into());
        assert!(!draft.validate());
        assert_eq!(
            draft.error(Field::Message),
            Some(ValidationError::MessageTooShort)
        );
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );

        draft.set_field(Field::Message, "  1234567890  ".into());
        assert!(draft.validate());
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut draft = ContactDraft::new();
        draft.validate();

        draft.set_field(Field::Name, "A".into());
        assert_eq!(draft.error(Field::Name), None);
        assert_eq!(draft.error(Field::Email), Some(ValidationError::EmailRequired));
    }

    #[test]
    fn successful_submission_resets_form() {
        let mut draft = filled();

        let form = draft.begin_submit().expect("valid form should submit");
        assert_eq!(form.name, "Ada");
        assert!(draft.is_submitting());

        // a second click while in flight is ignored
        assert!(draft.begin_submit().is_none());

        let ticket = draft.finish_submit::<String>(Ok(()));
        assert_eq!(draft.status(), SubmitStatus::Success);
        for field in Field::ALL {
            assert_eq!(draft.field(field), "");
            assert_eq!(draft.error(field), None);
        }

        draft.clear_status(ticket);
        assert_eq!(draft.status(), SubmitStatus::Idle);
    }

    #[test]
    fn failed_submission_keeps_form() {
        let mut draft = filled();
        draft.begin_submit().unwrap();

        let ticket = draft.finish_submit(Err("delivery failed"));
        assert_eq!(draft.status(), SubmitStatus::Error);
        assert_eq!(draft.field(Field::Name), "Ada");

        draft.clear_status(ticket);
        assert_eq!(draft.status(), SubmitStatus::Idle);
    }

    #[test]
    fn stale_reset_does_not_clear_new_submission() {
        let mut draft = filled();
        draft.begin_submit().unwrap();
        let stale = draft.finish_submit::<String>(Ok(()));

        for field in Field::ALL {
            draft.set_field(field, filled().field(field).to_owned());
        }
        draft.begin_submit().unwrap();

        draft.clear_status(stale);
        assert!(draft.is_submitting());
    }
}
