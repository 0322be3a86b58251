//! Data models for fitlog.
//!
//! - [`Exercise`]: one strength-training entry (name, sets, reps, weight)
//! - [`Workout`]: a dated session that owns its exercises in entry order
//! - [`Volumetric`]: anything that reports a training volume and flattens to a log row
//! - [`ExerciseRecord`]: the flat row persisted to the workout log

mod exercise;
mod record;
mod workout;

pub use exercise::Exercise;
pub use record::{ExerciseRecord, Volumetric};
pub use workout::Workout;
