use super::record::{ExerciseRecord, Volumetric};
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub sets: i64,
    pub reps: i64,
    /// Load in pounds.
    pub weight: f64,
}

impl Exercise {
    pub fn new(name: impl Into<String>, sets: i64, reps: i64, weight: f64) -> Self {
        Self {
            name: name.into(),
            sets,
            reps,
            weight,
        }
    }

    /// `sets * reps * weight`. Zero or negative inputs are not rejected here.
    pub fn volume(&self) -> f64 {
        self.sets as f64 * self.reps as f64 * self.weight
    }

    pub fn to_record(&self, date: NaiveDate, total_volume: f64) -> ExerciseRecord {
        ExerciseRecord {
            date,
            exercise: self.name.clone(),
            sets: self.sets,
            reps: self.reps,
            weight: self.weight,
            total_volume,
        }
    }
}

impl Volumetric for Exercise {
    fn volume(&self) -> f64 {
        Exercise::volume(self)
    }

    fn to_record(&self, date: NaiveDate, total_volume: f64) -> ExerciseRecord {
        Exercise::to_record(self, date, total_volume)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} sets x {} reps @ {:?} lbs",
            self.name, self.sets, self.reps, self.weight
        )
    }
}
