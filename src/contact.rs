use crate::content::SERVICE_OPTIONS;
use chrono::{DateTime, Local};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("name is required")]
    NameRequired,
    #[error("email is required")]
    EmailRequired,
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("unknown service option: {0}")]
    UnknownService(String),
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

impl FormError {
    /// Dictionary key of the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            FormError::NameRequired => "form.error.name_required",
            FormError::EmailRequired => "form.error.email_required",
            FormError::InvalidEmail(_) => "form.error.email_invalid",
            FormError::UnknownService(_) => "form.error.service_unknown",
            FormError::UnknownField(_) => "form.error.unknown_field",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Service,
        Field::Message,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Service => "service",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn label_key(self) -> String {
        format!("cta.form.{}_label", self.name())
    }

    pub fn placeholder_key(self) -> String {
        format!("cta.form.{}_placeholder", self.name())
    }

    pub fn next(self) -> Field {
        let i = Field::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Field::ALL[(i + 1) % Field::ALL.len()]
    }

    pub fn prev(self) -> Field {
        let i = Field::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Field::ALL[(i + Field::ALL.len() - 1) % Field::ALL.len()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    /// One of `content::SERVICE_OPTIONS`, or empty.
    pub service: String,
    pub message: String,
}

impl ContactDetails {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::NameRequired);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::EmailRequired);
        }
        if !email_pattern().is_match(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }
        let service = self.service.trim();
        if !service.is_empty() && !SERVICE_OPTIONS.contains(&service) {
            return Err(FormError::UnknownService(service.to_string()));
        }
        Ok(())
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting { since: Instant },
    Submitted { at: Instant },
}

/// Contact form with a simulated submission.
///
/// Nothing leaves the process: `submit` starts a timer and `poll` walks
/// `Submitting -> Submitted -> Idle`, clearing the fields on the way back.
/// Dropping the form mid-flight discards the pending completion.
#[derive(Debug, Clone)]
pub struct ContactForm {
    details: ContactDetails,
    state: SubmitState,
    submit_delay: Duration,
    reset_delay: Duration,
    last_submitted: Option<DateTime<Local>>,
}

impl ContactForm {
    pub fn new(submit_delay: Duration, reset_delay: Duration) -> Self {
        Self {
            details: ContactDetails::default(),
            state: SubmitState::Idle,
            submit_delay,
            reset_delay,
            last_submitted: None,
        }
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Wall-clock time of the last completed submission.
    pub fn last_submitted(&self) -> Option<DateTime<Local>> {
        self.last_submitted
    }

    /// Edits are only taken while the form is idle.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        if self.state == SubmitState::Idle {
            *self.details.slot(field) = value.into();
        }
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = Field::from_name(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.set(field, value);
        Ok(())
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        if self.state == SubmitState::Idle {
            self.details.slot(field).push(c);
        }
    }

    pub fn pop_char(&mut self, field: Field) {
        if self.state == SubmitState::Idle {
            self.details.slot(field).pop();
        }
    }

    /// Start the simulated submission. Returns `Ok(false)` when a submission
    /// is already in flight or just finished.
    pub fn submit(&mut self, now: Instant) -> Result<bool, FormError> {
        if self.state != SubmitState::Idle {
            return Ok(false);
        }
        self.details.validate()?;
        tracing::info!(service = %self.details.service, "contact form submitting");
        self.state = SubmitState::Submitting { since: now };
        Ok(true)
    }

    /// Advance the timers; returns the state after the update.
    pub fn poll(&mut self, now: Instant) -> SubmitState {
        match self.state {
            SubmitState::Submitting { since } if now.duration_since(since) >= self.submit_delay => {
                let at = since + self.submit_delay;
                self.state = SubmitState::Submitted { at };
                self.last_submitted = Some(Local::now());
                tracing::info!("contact form submitted");
                self.poll(now)
            }
            SubmitState::Submitted { at } if now.duration_since(at) >= self.reset_delay => {
                self.state = SubmitState::Idle;
                self.details = ContactDetails::default();
                tracing::debug!("contact form reset");
                self.state
            }
            state => state,
        }
    }

    /// Block until an in-flight submission completes and return its time.
    ///
    /// The form may already be back to `Idle` when this returns (a zero
    /// reset delay), so callers report success from the returned value
    /// rather than from `status_key`.
    pub fn wait_for_completion(&mut self) -> Option<DateTime<Local>> {
        let SubmitState::Submitting { since } = self.state else {
            return None;
        };
        let deadline = since + self.submit_delay;
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        self.poll(Instant::now().max(deadline));
        self.last_submitted
    }

    /// Dictionary key of the status line to show, if any.
    pub fn status_key(&self) -> Option<&'static str> {
        match self.state {
            SubmitState::Idle => None,
            SubmitState::Submitting { .. } => Some("cta.form.submitting_text"),
            SubmitState::Submitted { .. } => Some("cta.form.success_title"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new(Duration::from_millis(2000), Duration::from_millis(3000));
        form.set(Field::Name, "Trần Thị Bình");
        form.set(Field::Email, "binh@example.vn");
        form.set(Field::Service, "seo");
        form
    }

    #[test]
    fn validation_errors() {
        let mut form = ContactForm::new(Duration::ZERO, Duration::ZERO);
        assert_eq!(form.details().validate(), Err(FormError::NameRequired));
        form.set(Field::Name, "An");
        assert_eq!(form.details().validate(), Err(FormError::EmailRequired));
        form.set(Field::Email, "an@");
        assert_eq!(form.details().validate(), Err(FormError::InvalidEmail("an@".into())));
        form.set(Field::Email, "an@techviet.vn");
        form.set(Field::Service, "billboards");
        assert_eq!(form.details().validate(), Err(FormError::UnknownService("billboards".into())));
        form.set(Field::Service, "");
        assert!(form.details().validate().is_ok());
    }

    #[test]
    fn set_field_by_name() {
        let mut form = ContactForm::new(Duration::ZERO, Duration::ZERO);
        form.set_field("company", "HealthCare Plus").unwrap();
        assert_eq!(form.details().company, "HealthCare Plus");
        let err = form.set_field("fax", "1").unwrap_err();
        assert_eq!(err, FormError::UnknownField("fax".into()));
        assert_eq!(err.message_key(), "form.error.unknown_field");
    }

    #[test]
    fn submission_lifecycle() {
        let mut form = filled();
        let start = Instant::now();
        assert!(form.submit(start).unwrap());
        assert_eq!(form.status_key(), Some("cta.form.submitting_text"));

        assert!(matches!(form.poll(start + Duration::from_millis(1999)), SubmitState::Submitting { .. }));
        assert!(matches!(form.poll(start + Duration::from_millis(2000)), SubmitState::Submitted { .. }));
        assert!(form.last_submitted().is_some());
        assert_eq!(form.details().name, "Trần Thị Bình");

        assert_eq!(form.poll(start + Duration::from_millis(5000)), SubmitState::Idle);
        assert_eq!(form.details(), &ContactDetails::default());
    }

    #[test]
    fn zero_delays_still_report_completion() {
        let mut form = ContactForm::new(Duration::ZERO, Duration::ZERO);
        form.set(Field::Name, "An");
        form.set(Field::Email, "an@techviet.vn");
        assert!(form.submit(Instant::now()).unwrap());

        let at = form.wait_for_completion();
        assert!(at.is_some());
        assert_eq!(form.state(), SubmitState::Idle);
        assert_eq!(form.status_key(), None);
        assert_eq!(form.details(), &ContactDetails::default());
    }

    #[test]
    fn wait_sleeps_through_the_submit_delay() {
        let mut form = ContactForm::new(Duration::from_millis(5), Duration::ZERO);
        form.set(Field::Name, "An");
        form.set(Field::Email, "an@techviet.vn");
        let start = Instant::now();
        form.submit(start).unwrap();

        assert!(form.wait_for_completion().is_some());
        assert!(start.elapsed() >= Duration::from_millis(5));
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn wait_without_submission_is_none() {
        let mut form = filled();
        assert_eq!(form.wait_for_completion(), None);
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn long_gap_completes_both_steps() {
        let mut form = filled();
        let start = Instant::now();
        form.submit(start).unwrap();
        assert_eq!(form.poll(start + Duration::from_secs(60)), SubmitState::Idle);
    }

    #[test]
    fn second_submit_is_ignored_and_edits_are_frozen() {
        let mut form = filled();
        let start = Instant::now();
        assert!(form.submit(start).unwrap());
        assert!(!form.submit(start + Duration::from_millis(10)).unwrap());
        form.set(Field::Name, "someone else");
        form.push_char(Field::Name, '!');
        assert_eq!(form.details().name, "Trần Thị Bình");
    }

    #[test]
    fn invalid_form_stays_idle() {
        let mut form = ContactForm::new(Duration::ZERO, Duration::ZERO);
        assert!(form.submit(Instant::now()).is_err());
        assert_eq!(form.state(), SubmitState::Idle);
    }

    #[test]
    fn field_cycle_and_keys() {
        assert_eq!(Field::Message.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::Message);
        assert_eq!(Field::Email.label_key(), "cta.form.email_label");
        assert_eq!(Field::from_name("phone"), Some(Field::Phone));
    }
}
