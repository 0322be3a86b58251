use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the workout log.
///
/// Field order matches the column order of the log file. `total_volume` is the
/// whole session's total, repeated on every row of that session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub date: NaiveDate,
    pub exercise: String,
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
    pub total_volume: f64,
}

/// An entry that can be added to a [`Workout`](super::Workout).
pub trait Volumetric {
    /// Training volume of this entry.
    fn volume(&self) -> f64;

    /// Flatten this entry into a log row for a session on `date` whose grand
    /// total is `total_volume`.
    fn to_record(&self, date: NaiveDate, total_volume: f64) -> ExerciseRecord;
}
