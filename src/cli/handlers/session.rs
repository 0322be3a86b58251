use crate::date::today;
use crate::input::collect_workout;
use crate::model::Workout;
use crate::storage::SaveSummary;
use crate::validation::ValidationPolicy;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use super::CommandContext;

pub fn handle_log(ctx: &CommandContext, date: Option<NaiveDate>, strict: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        ctx,
        date.unwrap_or_else(today),
        strict,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;
    Ok(())
}

/// Greet, collect a workout, append it to the log and print a summary.
///
/// Returns `None` when no exercises were entered; the log is left untouched.
pub fn run_session<R: BufRead, W: Write>(
    ctx: &CommandContext,
    date: NaiveDate,
    strict: bool,
    input: &mut R,
    output: &mut W,
) -> Result<Option<SaveSummary>> {
    ctx.log.ensure_dir().with_context(|| {
        format!(
            "Failed to create data directory for {}",
            ctx.log.path().display()
        )
    })?;

    greeting(output, date)?;

    let policy = ValidationPolicy::from_strict(strict || ctx.config.log.strict);
    let workout = collect_workout(input, output, date, policy)?;

    if workout.is_empty() {
        writeln!(output, "No exercises logged. Exiting.")?;
        return Ok(None);
    }

    let summary = ctx
        .log
        .append(&workout)
        .with_context(|| format!("Failed to write {}", ctx.log.path().display()))?;
    writeln!(
        output,
        "Workout saved to {}! Total Volume: {:?} lbs",
        summary.path.display(),
        summary.total_volume
    )?;

    print_summary(output, &workout)?;
    Ok(Some(summary))
}

fn greeting<W: Write>(output: &mut W, date: NaiveDate) -> io::Result<()> {
    writeln!(
        output,
        "Welcome to fitlog v{}!",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(output, "Track your workouts and stay fit!")?;
    writeln!(output, "{}", "-".repeat(40))?;
    writeln!(output, "Date: {}", date)
}

fn print_summary<W: Write>(output: &mut W, workout: &Workout) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", "Workout Summary:".bold())?;
    writeln!(output, "Total Volume: {:?} lbs", workout.total_volume())?;
    for exercise in workout.exercises() {
        writeln!(output, "- {}", exercise)?;
    }
    Ok(())
}
