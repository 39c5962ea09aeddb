use std::collections::BTreeMap;
use std::rc::Rc;

use serde_json::Value;
use yew::prelude::*;

use crate::analytics::{Analytics, AnalyticsEvent};
use crate::components::notification::{Notice, NoticeKind};
use crate::consultation::client::{ConsultationClient, ConsultationRequest, SubmitError};
use crate::consultation::validation::{validate, FieldKind, ValidationError};

pub const SUBMIT_LABEL: &str = "Request Consultation";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUCCESS_MESSAGE: &str =
    "Success! We'll contact you within 24 hours with a detailed proposal.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Organization,
    ProjectType,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Organization,
        Field::ProjectType,
        Field::Message,
    ];

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Email => FieldKind::Email,
            Field::Phone => FieldKind::Tel,
            Field::ProjectType => FieldKind::Select,
            Field::Message => FieldKind::TextArea,
            Field::Name | Field::Organization => FieldKind::Text,
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Field::Phone | Field::Organization)
    }

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Organization => "organization",
            Field::ProjectType => "project-type",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Organization => "Organization",
            Field::ProjectType => "Project Type",
            Field::Message => "Project Details",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub disabled: bool,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    values: ConsultationRequest,
    errors: BTreeMap<Field, ValidationError>,
    phase: SubmitPhase,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            values: ConsultationRequest::default(),
            errors: BTreeMap::new(),
            phase: SubmitPhase::Idle,
        }
    }
}

impl FormState {
    pub fn value(&self, field: Field) -> &str {
        let values = &self.values;
        match field {
            Field::Name => &values.name,
            Field::Email => &values.email,
            Field::Phone => &values.phone,
            Field::Organization => &values.organization,
            Field::ProjectType => &values.project_type,
            Field::Message => &values.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let values = &mut self.values;
        let slot = match field {
            Field::Name => &mut values.name,
            Field::Email => &mut values.email,
            Field::Phone => &mut values.phone,
            Field::Organization => &mut values.organization,
            Field::ProjectType => &mut values.project_type,
            Field::Message => &mut values.message,
        };
        *slot = value;
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Re-checks one field, replacing whatever error it showed before.
    pub fn blur(&mut self, field: Field) -> Result<(), ValidationError> {
        let result = validate(field.kind(), field.required(), self.value(field));
        match result {
            Ok(()) => self.errors.remove(&field),
            Err(e) => self.errors.insert(field, e),
        };
        result
    }

    pub fn validate_all(&mut self) -> bool {
        Field::ALL.iter().fold(true, |ok, field| self.blur(*field).is_ok() && ok)
    }

    /// Moves to `Submitting` and hands back the request to send, unless a
    /// submission is already running or a field is invalid.
    pub fn begin_submit(&mut self) -> Option<ConsultationRequest> {
        if self.phase == SubmitPhase::Submitting || !self.validate_all() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        Some(self.values.clone())
    }

    /// A successful send clears the form; a failed one keeps what the
    /// visitor typed so they can retry.
    pub fn finish(&mut self, succeeded: bool) {
        if succeeded {
            self.values = ConsultationRequest::default();
            self.errors.clear();
        }
        self.phase = SubmitPhase::Idle;
    }

    pub fn button(&self) -> SubmitButton {
        match self.phase {
            SubmitPhase::Idle => SubmitButton { disabled: false, label: SUBMIT_LABEL },
            SubmitPhase::Submitting => SubmitButton { disabled: true, label: SUBMITTING_LABEL },
        }
    }
}

pub enum FormAction {
    Set(Field, String),
    Blur(Field),
    ValidateAll,
    BeginSubmit,
    Finish { succeeded: bool },
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Set(field, value) => next.set(field, value),
            FormAction::Blur(field) => {
                let _ = next.blur(field);
            }
            FormAction::ValidateAll => {
                next.validate_all();
            }
            FormAction::BeginSubmit => {
                next.begin_submit();
            }
            FormAction::Finish { succeeded } => next.finish(succeeded),
        }
        Rc::new(next)
    }
}

/// Sends the request and records the conversion when it goes through.
pub async fn send_consultation(
    client: Rc<dyn ConsultationClient>,
    analytics: Analytics,
    request: ConsultationRequest,
) -> Result<(), SubmitError> {
    let data = serde_json::to_value(&request).unwrap_or(Value::Null);
    let outcome = client.submit(request).await;
    match &outcome {
        Ok(()) => analytics.track(AnalyticsEvent::form_submission(data)),
        Err(e) => log::warn!("consultation submission failed: {}", e),
    }
    outcome
}

pub fn outcome_notice(outcome: &Result<(), SubmitError>) -> Notice {
    match outcome {
        Ok(()) => Notice::new(NoticeKind::Success, SUCCESS_MESSAGE),
        Err(e) => Notice::new(NoticeKind::Error, e.user_message()),
    }
}
