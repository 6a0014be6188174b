/*
daily.rs

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

//! Generate the set of puzzles of the day.
//!
//! Everybody gets the same puzzles on the same day: all the random draws derive from the day
//! key, which is the date in the [`crate::config::TIMEZONE`] timezone (`YYYY-MM-DD`).
//!
//! For each difficulty level, up to [`DailyConfig::local_tries`] generators are tried, each one
//! seeded from `<day key>-<difficulty>-<i>`.
//! If none of them produces a valid puzzle, then a last attempt is made with a generator seeded
//! from the day key alone.
//! That generator is shared by the three levels, so its state carries over from one level to the
//! next.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt;

use crate::config::DailyConfig;
use crate::generator::puzzles::{Puzzle, generate_puzzle, puzzle_matches_meta};
use crate::generator::rng::Mulberry32;

/// Format of the day key.
const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum DayKeyError {
    /// The string is not a `YYYY-MM-DD` date.
    InvalidDate(String),

    /// The string is not an RFC 3339 timestamp.
    InvalidInstant(String),
}

impl fmt::Display for DayKeyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DayKeyError::InvalidDate(s) => write!(f, "invalid date {s:?} (expected YYYY-MM-DD)"),
            DayKeyError::InvalidInstant(s) => {
                write!(f, "invalid timestamp {s:?} (expected RFC 3339)")
            }
        }
    }
}

impl Error for DayKeyError {}

/// Return the day key of the given instant in the given timezone.
pub fn day_key(instant: &DateTime<Utc>, timezone: &Tz) -> String {
    instant
        .with_timezone(timezone)
        .format(DAY_KEY_FORMAT)
        .to_string()
}

/// Validate and normalize a `YYYY-MM-DD` day key.
pub fn parse_day_key(s: &str) -> Result<String, DayKeyError> {
    let date: NaiveDate = NaiveDate::parse_from_str(s.trim(), DAY_KEY_FORMAT)
        .map_err(|_| DayKeyError::InvalidDate(s.to_string()))?;
    Ok(date.format(DAY_KEY_FORMAT).to_string())
}

/// Parse an RFC 3339 timestamp, such as `2024-01-01T20:00:00Z`.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>, DayKeyError> {
    DateTime::parse_from_rfc3339(s.trim())
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| DayKeyError::InvalidInstant(s.to_string()))
}

/// Generate the puzzles for the day of the given instant, or of the current instant if None.
///
/// Return the easy, medium, and hard puzzles, in that order.
/// An entry is None when no puzzle could be generated for that level.
pub fn generate_daily_set(
    instant: Option<&DateTime<Utc>>,
    config: &DailyConfig,
) -> [Option<Puzzle>; 3] {
    let instant: DateTime<Utc> = instant.copied().unwrap_or_else(Utc::now);
    let key: String = day_key(&instant, &config.timezone);
    generate_daily_set_for_key(&key, config)
}

/// Generate the puzzles for the given day key.
pub fn generate_daily_set_for_key(day_key: &str, config: &DailyConfig) -> [Option<Puzzle>; 3] {
    info!("Generating the puzzles for {day_key}");
    let mut day_rng: Mulberry32 = Mulberry32::from_key(day_key);

    config.tiers.each_ref().map(|meta| {
        for i in 0..config.local_tries {
            let mut rng: Mulberry32 =
                Mulberry32::from_key(&format!("{day_key}-{}-{i}", meta.difficulty));
            if let Some(puzzle) =
                generate_puzzle(&mut rng, &config.board, meta, day_key, config.themes)
            {
                if puzzle_matches_meta(&puzzle, meta) {
                    debug!("{}: puzzle found with seed {i}", meta.difficulty);
                    return Some(puzzle);
                }
            }
        }

        info!(
            "{}: no puzzle after {} seeds, using the day seed",
            meta.difficulty, config.local_tries
        );
        match generate_puzzle(&mut day_rng, &config.board, meta, day_key, config.themes) {
            Some(puzzle) if puzzle_matches_meta(&puzzle, meta) => Some(puzzle),
            _ => {
                warn!("{}: no puzzle for {day_key}", meta.difficulty);
                None
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TIMEZONE;
    use crate::generator::difficulty::{Difficulty, DifficultyMeta};
    use crate::generator::fold::{Crease, Direction, Point};
    use crate::generator::verify::verify_puzzle;

    fn at(s: &str) -> DateTime<Utc> {
        parse_instant(s).unwrap()
    }

    #[test]
    fn day_key_uses_los_angeles_time() {
        // 05:00 UTC is still the previous evening in Los Angeles (UTC-8 in winter)
        assert_eq!(day_key(&at("2024-01-02T05:00:00Z"), &TIMEZONE), "2024-01-01");
        assert_eq!(day_key(&at("2024-01-02T08:00:00Z"), &TIMEZONE), "2024-01-02");
        // UTC-7 in summer
        assert_eq!(day_key(&at("2024-07-01T06:59:00Z"), &TIMEZONE), "2024-06-30");
        assert_eq!(day_key(&at("2024-07-01T07:00:00Z"), &TIMEZONE), "2024-07-01");
        // Offsets in the input do not matter
        assert_eq!(day_key(&at("2024-01-02T06:00:00+01:00"), &TIMEZONE), "2024-01-01");
    }

    #[test]
    fn parse_keys() {
        assert_eq!(parse_day_key("2024-03-09"), Ok("2024-03-09".to_string()));
        assert_eq!(
            parse_day_key("2024-02-30"),
            Err(DayKeyError::InvalidDate("2024-02-30".to_string()))
        );
        assert!(parse_day_key("tomorrow").is_err());
        assert!(parse_instant("2024-01-01").is_err());
    }

    #[test]
    fn golden_set() {
        let config = DailyConfig::default();
        let set = generate_daily_set(Some(&at("2024-01-01T20:00:00Z")), &config);

        let easy = set[0].as_ref().unwrap();
        assert_eq!(easy.id, "easy-2024-01-01");
        assert_eq!(easy.title, "Press Easy");
        assert_eq!(easy.start, vec![Point::new(1, 4), Point::new(2, 4)]);
        assert_eq!(easy.target, vec![Point::new(4, 2), Point::new(3, 2)]);
        assert_eq!(
            easy.solution,
            vec![
                Crease::horizontal(2, Direction::Up),
                Crease::horizontal(1, Direction::Down),
                Crease::vertical(2, Direction::Right),
            ]
        );

        let medium = set[1].as_ref().unwrap();
        assert_eq!(medium.id, "medium-2024-01-01");
        assert_eq!(
            medium.start,
            vec![Point::new(1, 2), Point::new(2, 1), Point::new(1, 1)]
        );

        let hard = set[2].as_ref().unwrap();
        assert_eq!(hard.title, "Press Hard");
        assert_eq!(hard.difficulty, Difficulty::Hard);
        assert_eq!(
            hard.target,
            vec![
                Point::new(4, 2),
                Point::new(5, 1),
                Point::new(4, 1),
                Point::new(5, 2)
            ]
        );
        assert_eq!(hard.solution.len(), 5);
    }

    #[test]
    fn same_day_same_puzzles() {
        let config = DailyConfig::default();
        let a = generate_daily_set_for_key("2025-11-20", &config);
        let b = generate_daily_set(Some(&at("2025-11-20T12:00:00-08:00")), &config);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn generated_puzzles_are_valid() {
        let config = DailyConfig::default();
        for key in ["2025-01-15", "2025-11-20"] {
            let set = generate_daily_set_for_key(key, &config);
            for (puzzle, meta) in set.iter().zip(DifficultyMeta::all().iter()) {
                let puzzle = puzzle.as_ref().unwrap();
                assert_eq!(puzzle.difficulty, meta.difficulty);
                assert!(puzzle_matches_meta(puzzle, meta));
                assert_eq!(verify_puzzle(&config.board, puzzle), Ok(()));
            }
        }
    }

    #[test]
    fn exhausted_levels_are_none() {
        let mut config = DailyConfig::default();
        for meta in config.tiers.iter_mut() {
            meta.max_attempts = 0;
            meta.alt_attempts = 0;
        }
        assert_eq!(generate_daily_set_for_key("2024-01-01", &config), [None, None, None]);
    }

    #[test]
    fn fallback_rng_is_shared_by_levels() {
        let mut config = DailyConfig::default();
        config.local_tries = 0;
        let set = generate_daily_set_for_key("2024-01-01", &config);

        let easy = set[0].as_ref().unwrap();
        assert_eq!(easy.start, vec![Point::new(5, 1), Point::new(6, 1)]);
        assert_eq!(easy.target, vec![Point::new(2, 5), Point::new(1, 5)]);
        assert_eq!(
            easy.solution,
            vec![
                Crease::horizontal(1, Direction::Down),
                Crease::horizontal(3, Direction::Down),
                Crease::vertical(3, Direction::Left),
            ]
        );
        assert_eq!(set[1], None);
        assert_eq!(set[2], None);

        // The hard level would succeed with a generator of its own
        let mut rng = Mulberry32::from_key("2024-01-01");
        let fresh = generate_puzzle(
            &mut rng,
            &config.board,
            &config.tiers[2],
            "2024-01-01",
            config.themes,
        );
        assert_eq!(
            fresh.unwrap().start,
            vec![Point::new(5, 1), Point::new(1, 3), Point::new(3, 6), Point::new(6, 6)]
        );
    }

    #[test]
    fn fallback_state_carries_over() {
        let mut config = DailyConfig::default();
        config.local_tries = 0;
        let key = "2024-01-14";
        let set = generate_daily_set_for_key(key, &config);

        let mut rng = Mulberry32::from_key(key);
        let threaded: Vec<Option<Puzzle>> = config
            .tiers
            .iter()
            .map(|meta| generate_puzzle(&mut rng, &config.board, meta, key, config.themes))
            .collect();
        assert_eq!(set.to_vec(), threaded);

        let hard = set[2].as_ref().unwrap();
        assert_eq!(
            hard.start,
            vec![Point::new(4, 2), Point::new(2, 2), Point::new(6, 5), Point::new(4, 6)]
        );
        let mut rng = Mulberry32::from_key(key);
        let fresh =
            generate_puzzle(&mut rng, &config.board, &config.tiers[2], key, config.themes);
        assert_eq!(
            fresh.unwrap().start,
            vec![Point::new(1, 3), Point::new(1, 6), Point::new(4, 1), Point::new(6, 1)]
        );
    }

    #[test]
    fn current_day_by_default() {
        let mut config = DailyConfig::default();
        for meta in config.tiers[1..].iter_mut() {
            meta.max_attempts = 0;
            meta.alt_attempts = 0;
        }
        let before = day_key(&Utc::now(), &config.timezone);
        let set = generate_daily_set(None, &config);
        let after = day_key(&Utc::now(), &config.timezone);

        let easy = set[0].as_ref().unwrap();
        assert!(easy.id == format!("easy-{before}") || easy.id == format!("easy-{after}"));
        assert_eq!(set[1], None);
        assert_eq!(set[2], None);
    }

    #[test]
    fn set_json_shape() {
        let mut config = DailyConfig::default();
        config.tiers[2].max_attempts = 0;
        config.tiers[2].alt_attempts = 0;
        let set = generate_daily_set_for_key("2024-01-01", &config);
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[0]["difficulty"], "easy");
        assert_eq!(value[1]["id"], "medium-2024-01-01");
        assert!(value[2].is_null());
    }
}
