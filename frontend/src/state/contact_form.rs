use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use yew::Reducible;

/// Body of `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStatus {
    Idle,
    InFlight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitRejected {
    AlreadySending,
    MissingField(Field),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
    pub notification: Option<Notification>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: SubmitStatus::Idle,
            notification: None,
        }
    }
}

impl ContactForm {
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.status == SubmitStatus::InFlight
    }

    fn first_missing(&self) -> Option<Field> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    /// Builds the request to send, or says why nothing should be sent.
    pub fn request(&self) -> Result<ContactRequest, SubmitRejected> {
        if self.is_in_flight() {
            return Err(SubmitRejected::AlreadySending);
        }
        if let Some(field) = self.first_missing() {
            return Err(SubmitRejected::MissingField(field));
        }
        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    pub fn begin_submit(&mut self) -> Result<ContactRequest, SubmitRejected> {
        let request = self.request()?;
        self.status = SubmitStatus::InFlight;
        self.notification = None;
        Ok(request)
    }

    /// Applies the delivery outcome. Success clears the fields; failure keeps
    /// them so the visitor can retry.
    pub fn finish(&mut self, outcome: Result<(), String>) {
        self.status = SubmitStatus::Idle;
        self.notification = Some(match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                Notification {
                    kind: NotificationKind::Success,
                    text: "Thanks! Your message has been sent. We'll get back to you soon.".to_string(),
                }
            }
            Err(reason) => Notification {
                kind: NotificationKind::Failure,
                text: format!("Sorry, your message could not be sent ({}). Please try again.", reason),
            },
        });
    }
}

/// Synchronous in-flight flag for the submit handler.
///
/// Reducer state only changes on the next render, so two quick submits can
/// both see an idle form. The guard is checked and set in one step before
/// any request is spawned. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct SubmitGuard {
    busy: Rc<Cell<bool>>,
}

impl SubmitGuard {
    /// Returns a ticket if nothing is in flight. The flag stays set until the
    /// ticket is dropped.
    pub fn try_begin(&self) -> Option<SubmitTicket> {
        if self.busy.replace(true) {
            return None;
        }
        Some(SubmitTicket {
            busy: self.busy.clone(),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

pub struct SubmitTicket {
    busy: Rc<Cell<bool>>,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

pub enum ContactAction {
    Edit(Field, String),
    Begin,
    Finish(Result<(), String>),
    Dismiss,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.set_field(field, value),
            ContactAction::Begin => {
                if next.begin_submit().is_err() {
                    return self;
                }
            }
            ContactAction::Finish(outcome) => next.finish(outcome),
            ContactAction::Dismiss => next.notification = None,
        }
        Rc::new(next)
    }
}
