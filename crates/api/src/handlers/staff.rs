//! Handler for staff record validation.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use sipay_core::staff::StaffPerson;
use sipay_core::validation::evaluator::validate_staff_person;

use crate::error::{AppError, AppResult};

/// POST /api/v1/staff/validate
///
/// Validate a staff record and echo it back on success. On failure the
/// response is a 400 whose body lists every violated rule, one per line.
/// Missing or mistyped fields are not rejected at parse time; they fall
/// through to the `required` rules.
pub async fn validate(
    payload: Result<Json<StaffPerson>, JsonRejection>,
) -> AppResult<Json<StaffPerson>> {
    let Json(person) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let result = validate_staff_person(&person);
    if !result.is_valid {
        tracing::debug!(
            violations = result.violations.len(),
            "Rejected staff record"
        );
    }
    result.into_result()?;

    tracing::info!(access_level = person.access_level, "Accepted staff record");
    Ok(Json(person))
}
