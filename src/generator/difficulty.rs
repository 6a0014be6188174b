/*
difficulty.rs

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

//! Difficulty tiers and their generation parameters.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::AsRefStr;

/// Default number of fold-constructed attempts.
const DEFAULT_MAX_ATTEMPTS: usize = 1600;

/// Puzzle difficulty level.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// Generation parameters for a difficulty level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyMeta {
    pub difficulty: Difficulty,

    /// Label used in the puzzle title.
    pub label: &'static str,

    /// Exact number of folds of the shortest solution.
    pub par: usize,

    /// Number of dots.
    pub dots: usize,

    /// Whether several dots can share the same cell.
    pub allow_stack: bool,

    /// Attempts where the start configuration is built by folding the target.
    pub max_attempts: usize,

    /// Attempts where the start and target configurations are drawn independently, once the
    /// [`DifficultyMeta::max_attempts`] attempts are exhausted.
    pub alt_attempts: usize,
}

impl DifficultyMeta {
    /// Return the parameters for the given difficulty level.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                label: "Easy",
                par: 3,
                dots: 2,
                allow_stack: true,
                max_attempts: DEFAULT_MAX_ATTEMPTS,
                alt_attempts: 0,
            },
            Difficulty::Medium => Self {
                difficulty,
                label: "Medium",
                par: 4,
                dots: 3,
                allow_stack: true,
                max_attempts: DEFAULT_MAX_ATTEMPTS,
                alt_attempts: 0,
            },
            Difficulty::Hard => Self {
                difficulty,
                label: "Hard",
                par: 5,
                dots: 4,
                allow_stack: false,
                max_attempts: 8000,
                alt_attempts: 4000,
            },
        }
    }

    /// Return the parameters of the three levels, from easy to hard.
    pub fn all() -> [Self; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard].map(Self::for_difficulty)
    }
}
