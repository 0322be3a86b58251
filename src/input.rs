//! Interactive collection of a workout from a line-oriented reader.
//!
//! The reader and writer are generic so the same loop drives a terminal in
//! the binary and in-memory buffers in tests.

use crate::error::Result;
use crate::model::{Exercise, Workout};
use crate::validation::ValidationPolicy;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

/// Typing exactly this as an exercise name (any case) ends the session.
pub const SENTINEL: &str = "done";

pub const NAME_PROMPT: &str = "Enter exercise name (or 'done' to finish): ";
pub const SETS_PROMPT: &str = "Sets: ";
pub const REPS_PROMPT: &str = "Reps per set: ";
pub const WEIGHT_PROMPT: &str = "Weight (lbs): ";
pub const INVALID_NUMBER: &str = "Invalid input. Enter numeric values.";
pub const EXERCISE_ADDED: &str = "Exercise added. Add another or type 'done' to finish.";

/// Prompt for exercises until the sentinel (or end of input) and return the
/// filled workout. It may be empty.
///
/// A numeric answer that fails to parse restarts the sets/reps/weight round
/// from the first prompt. There is no retry limit.
pub fn collect_workout<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    date: NaiveDate,
    policy: ValidationPolicy,
) -> Result<Workout> {
    let mut workout = Workout::new(date);

    loop {
        let Some(name) = prompt(input, output, NAME_PROMPT)? else {
            break;
        };
        if name.to_lowercase() == SENTINEL {
            break;
        }
        if let Err(e) = policy.check_name(&name) {
            writeln!(output, "{}", e)?;
            continue;
        }

        let Some(exercise) = read_numbers(input, output, &name, policy)? else {
            break;
        };
        debug!(%exercise, "exercise collected");
        workout.add_exercise(exercise);
        writeln!(output, "{}", EXERCISE_ADDED)?;
    }

    Ok(workout)
}

/// Read sets, reps and weight until all three parse (and pass `policy`).
/// `None` means the input ran out mid-round.
fn read_numbers<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: &str,
    policy: ValidationPolicy,
) -> Result<Option<Exercise>> {
    loop {
        let sets = match prompt_number::<i64, _, _>(input, output, SETS_PROMPT)? {
            Answer::Value(v) => v,
            Answer::Invalid => continue,
            Answer::Eof => return Ok(None),
        };
        let reps = match prompt_number::<i64, _, _>(input, output, REPS_PROMPT)? {
            Answer::Value(v) => v,
            Answer::Invalid => continue,
            Answer::Eof => return Ok(None),
        };
        let weight = match prompt_number::<f64, _, _>(input, output, WEIGHT_PROMPT)? {
            Answer::Value(v) => v,
            Answer::Invalid => continue,
            Answer::Eof => return Ok(None),
        };

        let exercise = Exercise::new(name, sets, reps, weight);
        match policy.check_exercise(&exercise) {
            Ok(()) => return Ok(Some(exercise)),
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
}

enum Answer<T> {
    Value(T),
    Invalid,
    Eof,
}

fn prompt_number<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Answer<T>> {
    let Some(line) = prompt(input, output, text)? else {
        return Ok(Answer::Eof);
    };
    match line.trim().parse() {
        Ok(v) => Ok(Answer::Value(v)),
        Err(_) => {
            writeln!(output, "{}", INVALID_NUMBER)?;
            Ok(Answer::Invalid)
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    fn run(script: &str, policy: ValidationPolicy) -> (Workout, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let workout = collect_workout(&mut input, &mut output, date(), policy).unwrap();
        (workout, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_sentinel_immediately_gives_empty_workout() {
        let (workout, output) = run("done\n", ValidationPolicy::Permissive);
        assert!(workout.is_empty());
        assert_eq!(workout.date(), date());
        assert!(output.starts_with(NAME_PROMPT));
        assert!(!output.contains(SETS_PROMPT));
    }

    #[test]
    fn test_sentinel_is_case_insensitive() {
        let (workout, _) = run("Squat\n3\n5\n225\nDONE\n", ValidationPolicy::Permissive);
        assert_eq!(workout.len(), 1);
    }

    #[test]
    fn test_padded_sentinel_is_an_exercise_name() {
        let (workout, _) = run(
            " done\n3\n5\n225\n  Squat \n3\n5\n225\ndone\n",
            ValidationPolicy::Permissive,
        );
        assert_eq!(
            workout.exercises(),
            [
                Exercise::new(" done", 3, 5, 225.0),
                Exercise::new("  Squat ", 3, 5, 225.0)
            ]
        );
    }

    #[test]
    fn test_collects_exercises_in_order() {
        let (workout, output) = run(
            "Squat\n3\n5\n225\nRow\n3\n10\n95\ndone\n",
            ValidationPolicy::Permissive,
        );
        assert_eq!(
            workout.exercises(),
            [
                Exercise::new("Squat", 3, 5, 225.0),
                Exercise::new("Row", 3, 10, 95.0)
            ]
        );
        assert_eq!(workout.total_volume(), 6225.0);
        assert_eq!(output.matches(EXERCISE_ADDED).count(), 2);
    }

    #[test]
    fn test_parse_failure_restarts_numeric_round() {
        let (workout, output) = run(
            "Bench Press\nthree\n3\nten\n3\n10\n135\ndone\n",
            ValidationPolicy::Permissive,
        );
        assert_eq!(workout.exercises(), [Exercise::new("Bench Press", 3, 10, 135.0)]);
        assert_eq!(output.matches(INVALID_NUMBER).count(), 2);
        assert_eq!(output.matches(SETS_PROMPT).count(), 3);
        assert_eq!(output.matches(NAME_PROMPT).count(), 2);
    }

    #[test]
    fn test_sets_and_reps_must_be_integers() {
        let (workout, output) = run("Curl\n2.5\n2\n12\n22.5\ndone\n", ValidationPolicy::Permissive);
        assert_eq!(workout.exercises(), [Exercise::new("Curl", 2, 12, 22.5)]);
        assert_eq!(output.matches(INVALID_NUMBER).count(), 1);
    }

    #[test]
    fn test_permissive_accepts_negative_values() {
        let (workout, _) = run("Odd\n-1\n0\n-5\ndone\n", ValidationPolicy::Permissive);
        assert_eq!(workout.exercises(), [Exercise::new("Odd", -1, 0, -5.0)]);
    }

    #[test]
    fn test_strict_rejects_out_of_range_values() {
        let (workout, output) = run(
            "Squat\n0\n5\n225\n3\n5\n225\ndone\n",
            ValidationPolicy::Strict,
        );
        assert_eq!(workout.exercises(), [Exercise::new("Squat", 3, 5, 225.0)]);
        assert!(output.contains("Sets must be positive"));
    }

    #[test]
    fn test_strict_rejects_blank_name() {
        let (workout, output) = run("   \nSquat\n3\n5\n225\ndone\n", ValidationPolicy::Strict);
        assert_eq!(workout.len(), 1);
        assert!(output.contains("name cannot be empty"));
    }

    #[test]
    fn test_end_of_input_finishes_session() {
        let (workout, _) = run("Squat\n3\n5\n225\n", ValidationPolicy::Permissive);
        assert_eq!(workout.len(), 1);

        let (workout, _) = run("Squat\n3\n", ValidationPolicy::Permissive);
        assert!(workout.is_empty());

        let (workout, _) = run("", ValidationPolicy::Permissive);
        assert!(workout.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let (workout, _) = run("Row\r\n3\r\n10\r\n95\r\ndone\r\n", ValidationPolicy::Permissive);
        assert_eq!(workout.exercises(), [Exercise::new("Row", 3, 10, 95.0)]);
    }
}
