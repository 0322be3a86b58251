//! Optional checks on exercise input.
//!
//! By default fitlog accepts any value that parses as a number. The strict
//! policy adds the checks below.

use crate::error::{FitlogError, Result};
use crate::model::Exercise;

/// Maximum allowed length for an exercise name.
pub const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Accept whatever parses.
    #[default]
    Permissive,
    /// Reject blank names, non-positive sets/reps and negative weight.
    Strict,
}

impl ValidationPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::Permissive }
    }

    pub fn check_name(self, name: &str) -> Result<()> {
        match self {
            Self::Permissive => Ok(()),
            Self::Strict => validate_name(name),
        }
    }

    pub fn check_exercise(self, exercise: &Exercise) -> Result<()> {
        match self {
            Self::Permissive => Ok(()),
            Self::Strict => validate_exercise(exercise),
        }
    }
}

pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(FitlogError::Validation(
            "Exercise name cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(FitlogError::Validation(format!(
            "Exercise name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

pub fn validate_exercise(exercise: &Exercise) -> Result<()> {
    validate_name(&exercise.name)?;
    if exercise.sets <= 0 {
        return Err(FitlogError::Validation("Sets must be positive".to_string()));
    }
    if exercise.reps <= 0 {
        return Err(FitlogError::Validation("Reps must be positive".to_string()));
    }
    if !exercise.weight.is_finite() || exercise.weight < 0.0 {
        return Err(FitlogError::Validation(
            "Weight must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}
