/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Foldwise.

Foldwise is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Foldwise is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Foldwise. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! Foldwise prints the puzzles of the day in JSON format, so that they can be stored or served by
//! another program.
//!
//! # Examples
//!
//! Generate the puzzles for today (the day changes at midnight in Los Angeles):
//!
//! ```
//! $ foldwise
//! ```
//!
//! Generate the hard puzzle of a given day, and verify that its solution is the shortest one:
//!
//! ```
//! $ foldwise --date 2024-01-01 -f hard --verify
//! {
//!   "id": "hard-2024-01-01",
//!   "title": "Press Hard",
//!   "difficulty": "hard",
//!   ...
//! }
//! ```

use chrono::{DateTime, Utc};
use clap::Parser;
use log::{debug, error};
use std::env;
use std::time::Instant;

use crate::config::{COPYRIGHT_NOTICE, DailyConfig};
use crate::daily;
use crate::generator::difficulty::Difficulty;
use crate::generator::puzzles::Puzzle;
use crate::generator::verify;

/// Generate the daily grid-folding puzzles.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Day to generate the puzzles for, in the YYYY-MM-DD format
    #[arg(short = 'D', long, conflicts_with = "at")]
    date: Option<String>,

    /// Generate the puzzles for the day of this RFC 3339 timestamp (default: now)
    #[arg(short, long)]
    at: Option<String>,

    /// Only print the puzzle for this difficulty level
    #[arg(value_enum, short = 'f', long)]
    difficulty: Option<Difficulty>,

    /// Verify that the solutions are valid and that no shorter solution exists
    #[arg(short, long, default_value_t = false)]
    verify: bool,

    /// Print some statistics after generating the puzzles
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Day selected by the options.
#[derive(Debug, PartialEq)]
enum Day {
    /// Day key given with `--date`.
    Key(String),

    /// Instant given with `--at`, or None for now.
    At(Option<DateTime<Utc>>),
}

/// Return the day selected by the options.
fn resolve_day(args: &Args) -> Result<Day, daily::DayKeyError> {
    if let Some(date) = &args.date {
        return Ok(Day::Key(daily::parse_day_key(date)?));
    }
    match &args.at {
        Some(at) => Ok(Day::At(Some(daily::parse_instant(at)?))),
        None => Ok(Day::At(None)),
    }
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let config: DailyConfig = DailyConfig::default();
    let day: Day = match resolve_day(&args) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    debug!("Day = {day:?}");

    let start: Instant = Instant::now();
    let set: [Option<Puzzle>; 3] = match &day {
        Day::Key(key) => daily::generate_daily_set_for_key(key, &config),
        Day::At(instant) => daily::generate_daily_set(instant.as_ref(), &config),
    };
    let duration: f32 = start.elapsed().as_secs_f32();

    let mut ret: u8 = 0;
    if args.verify {
        for puzzle in set.iter().flatten() {
            if let Err(e) = verify::verify_puzzle(&config.board, puzzle) {
                error!("{}: {e}", puzzle.id);
                eprintln!("Verification failed for {}: {e}", puzzle.id);
                ret = 1;
            }
        }
    }

    //
    // Print the puzzles
    //
    let json = match args.difficulty {
        Some(difficulty) => {
            let entry: Option<&Puzzle> = config
                .tiers
                .iter()
                .position(|meta| meta.difficulty == difficulty)
                .and_then(|i| set[i].as_ref());
            serde_json::to_string_pretty(&entry)
        }
        None => serde_json::to_string_pretty(&set),
    };
    match json {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Error: cannot serialize the puzzles: {e}");
            return 1;
        }
    }

    // Print some stats
    if args.summary {
        eprintln!("     time = {duration}s");
        for (meta, puzzle) in config.tiers.iter().zip(set.iter()) {
            let status: &str = puzzle.as_ref().map_or("none", |p| p.id.as_str());
            eprintln!("{:>9} = {status}", meta.difficulty.as_ref());
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_option() {
        let args = Args::try_parse_from(["foldwise", "--date", "2024-01-01"]).unwrap();
        assert_eq!(resolve_day(&args), Ok(Day::Key("2024-01-01".to_string())));
    }

    #[test]
    fn at_option_uses_los_angeles_day() {
        let args = Args::try_parse_from(["foldwise", "-a", "2024-01-02T03:00:00Z"]).unwrap();
        let Ok(Day::At(Some(instant))) = resolve_day(&args) else {
            panic!("--at must select an instant");
        };
        let config = DailyConfig::default();
        assert_eq!(daily::day_key(&instant, &config.timezone), "2024-01-01");
    }

    #[test]
    fn now_by_default() {
        let args = Args::try_parse_from(["foldwise"]).unwrap();
        assert_eq!(resolve_day(&args), Ok(Day::At(None)));
    }

    #[test]
    fn date_and_at_conflict() {
        assert!(
            Args::try_parse_from(["foldwise", "-D", "2024-01-01", "-a", "2024-01-01T00:00:00Z"])
                .is_err()
        );
    }

    #[test]
    fn bad_date() {
        let args = Args::try_parse_from(["foldwise", "--date", "01/02/2024"]).unwrap();
        assert_eq!(
            resolve_day(&args),
            Err(daily::DayKeyError::InvalidDate("01/02/2024".to_string()))
        );
    }

    #[test]
    fn difficulty_filter() {
        let args = Args::try_parse_from(["foldwise", "-f", "medium", "-v", "-s"]).unwrap();
        assert_eq!(args.difficulty, Some(Difficulty::Medium));
        assert!(args.verify && args.summary && !args.debug);
        assert!(Args::try_parse_from(["foldwise", "-f", "extreme"]).is_err());
    }
}
