/*
config.rs

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

//! Generation settings.
//!
//! Nothing is read from files or from the environment: the daily puzzles only depend on the day
//! key and on these values.

use chrono_tz::Tz;

use crate::generator::difficulty::DifficultyMeta;
use crate::generator::fold::Board;

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPL-3.0-or-later <https://www.gnu.org/licenses/gpl-3.0.html>"
);

/// Number of rows and columns of the grid.
pub const GRID_SIZE: i32 = 6;

/// Number of seeds tried per difficulty level before using the day RNG.
pub const LOCAL_TRIES: usize = 10;

/// Timezone that decides when the day changes.
pub const TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

/// Words used to build the puzzle titles.
pub const THEMES: &[&str] = &[
    "Headlines",
    "Ticker",
    "Dateline",
    "Byline",
    "Front Page",
    "Crossword",
    "Edition",
    "Press",
    "Column",
    "Deadline",
    "Dispatch",
    "Scoop",
    "Journal",
    "Gazette",
    "Courier",
    "Ledger",
    "Bulletin",
    "Notebook",
    "Newsroom",
    "Spotlight",
];

/// Settings for generating a daily set.
#[derive(Debug, Clone)]
pub struct DailyConfig {
    pub board: Board,

    /// Difficulty levels, in the order of the generated set.
    pub tiers: [DifficultyMeta; 3],

    pub themes: &'static [&'static str],

    /// See [`LOCAL_TRIES`].
    pub local_tries: usize,

    pub timezone: Tz,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            board: Board::new(GRID_SIZE),
            tiers: DifficultyMeta::all(),
            themes: THEMES,
            local_tries: LOCAL_TRIES,
            timezone: TIMEZONE,
        }
    }
}
