use crate::config::FitlogConfig;
use crate::error::Result;
use crate::model::{ExerciseRecord, Volumetric, Workout};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Column names of the workout log, in file order.
pub const LOG_COLUMNS: [&str; 6] = ["date", "exercise", "sets", "reps", "weight", "total_volume"];

/// What a successful [`WorkoutLog::append`] wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveSummary {
    pub path: PathBuf,
    pub total_volume: f64,
    pub rows: usize,
    pub wrote_header: bool,
}

/// Append-only CSV log of every saved workout.
///
/// The log assumes a single writer; there is no locking and a crash
/// mid-append leaves the rows written so far in place.
#[derive(Debug, Clone)]
pub struct WorkoutLog {
    path: PathBuf,
}

impl WorkoutLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &FitlogConfig, project_root: &Path) -> Self {
        Self::new(config.log_path(project_root))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log's parent directory if it is missing.
    pub fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// A header is needed when the log is missing or has no content yet.
    pub fn needs_header(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }

    /// Append one row per exercise, writing the header first on a fresh log.
    pub fn append<E: Volumetric>(&self, workout: &Workout<E>) -> Result<SaveSummary> {
        let wrote_header = self.needs_header()?;
        let records = workout.records();
        let total_volume = records.first().map_or(0.0, |r| r.total_volume);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if wrote_header {
            writer.write_record(LOG_COLUMNS)?;
        }

        for record in &records {
            debug!(exercise = %record.exercise, "appending row");
            writer.serialize(record)?;
        }
        writer.flush()?;

        info!(
            path = %self.path.display(),
            rows = records.len(),
            total_volume,
            "workout saved"
        );

        Ok(SaveSummary {
            path: self.path.clone(),
            total_volume,
            rows: records.len(),
            wrote_header,
        })
    }

    /// Parse every data row back out of the log.
    pub fn read_records(&self) -> Result<Vec<ExerciseRecord>> {
        if self.needs_header()? {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_path(&self.path)?;
        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<ExerciseRecord>, csv::Error>>()?;
        Ok(records)
    }
}
