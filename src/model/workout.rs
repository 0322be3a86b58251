use super::exercise::Exercise;
use super::record::{ExerciseRecord, Volumetric};
use chrono::NaiveDate;

/// A single logged session.
///
/// Exercises are kept in the order they were added. The workout is filled
/// once, saved once, then dropped; nothing reloads it from the log.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout<E = Exercise> {
    date: NaiveDate,
    exercises: Vec<E>,
}

impl<E: Volumetric> Workout<E> {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            exercises: Vec::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn exercises(&self) -> &[E] {
        &self.exercises
    }

    pub fn add_exercise(&mut self, exercise: E) {
        self.exercises.push(exercise);
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn total_volume(&self) -> f64 {
        self.exercises.iter().fold(0.0, |acc, e| acc + e.volume())
    }

    /// Log rows for every exercise, in entry order, each stamped with the
    /// session date and the session total.
    pub fn records(&self) -> Vec<ExerciseRecord> {
        let total = self.total_volume();
        self.exercises
            .iter()
            .map(|e| e.to_record(self.date, total))
            .collect()
    }
}
