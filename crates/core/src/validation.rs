//! Request DTOs accepted by the record service, with their validation rules.

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::types::DbId;

/// Body of a create request. Names are 2..=55 characters long.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateRecordRequest {
    #[validate(length(min = 2, max = 55, message = "must be between 2 and 55 characters"))]
    pub name: String,
}

/// A single record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate)]
pub struct IdRequest {
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub id: DbId,
}

/// A set of record ids. An empty set is valid and means "nothing".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct IdsRequest {
    #[validate(custom(function = "all_positive"))]
    pub ids: Vec<DbId>,
}

fn all_positive(ids: &[DbId]) -> Result<(), ValidationError> {
    if ids.iter().all(|id| *id > 0) {
        Ok(())
    } else {
        Err(ValidationError::new("positive_ids").with_message("every id must be positive".into()))
    }
}

/// Flatten validator output into a single stable message.
///
/// Fields are sorted so the message does not depend on hash map order,
/// e.g. `"name: must be between 2 and 55 characters"`.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
