//! Field validation run by use cases before anything reaches a repository.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::types::{FilmDraft, UserDraft};

pub const MAX_DESCRIPTION_LEN: usize = 200;

/// The first public film screening; no release date may precede it.
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).unwrap_or(NaiveDate::MIN)
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

/// Every field that failed validation for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", join_fields(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn single(field: impl Into<String>, reason: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, reason);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            reason: reason.into(),
        });
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|e| format!("{}: {}", e.field, e.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn validate_film(draft: &FilmDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if draft.name.trim().is_empty() {
        errors.push("name", "must not be blank");
    }
    if draft.description.chars().count() > MAX_DESCRIPTION_LEN {
        errors.push(
            "description",
            format!("must be at most {MAX_DESCRIPTION_LEN} characters"),
        );
    }
    if draft.release_date < earliest_release_date() {
        errors.push("releaseDate", "must not be before 1895-12-28");
    }
    if draft.duration <= 0 {
        errors.push("duration", "must be positive");
    }
    errors.into_result()
}

/// `today` is passed in so birthdays can be checked against a fixed date in tests.
pub fn validate_user(draft: &UserDraft, today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if !is_valid_email(&draft.email) {
        errors.push("email", "must be a well-formed email address");
    }
    if draft.login.is_empty() || draft.login.chars().any(char::is_whitespace) {
        errors.push("login", "must not be blank or contain whitespace");
    }
    if draft.birthday >= today {
        errors.push("birthday", "must be in the past");
    }
    errors.into_result()
}

/// Top-N size for the popularity ranking.
pub fn validate_count(count: i64) -> Result<u64, ValidationErrors> {
    u64::try_from(count).map_err(|_| ValidationErrors::single("count", "must not be negative"))
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
