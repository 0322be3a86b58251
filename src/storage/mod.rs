//! File-based storage layer for fitlog.
//!
//! Workouts are appended to a single CSV file (`data/workout_log.csv` by
//! default). The header row is written once, when the file is first created.
//!
//! ```text
//! date,exercise,sets,reps,weight,total_volume
//! 2024-03-09,Squat,3,5,225.0,6225.0
//! 2024-03-09,Row,3,10,95.0,6225.0
//! ```

mod workout_log;

pub use workout_log::{LOG_COLUMNS, SaveSummary, WorkoutLog};
