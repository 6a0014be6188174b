/*
verify.rs

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

//! Check a generated puzzle independently of the way it was produced.

use std::error::Error;
use std::fmt;

use super::fold;
use super::fold::{Board, Point};
use super::puzzles::Puzzle;
use super::search;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum VerifyError {
    /// A dot of the start or target configuration is off the grid.
    OutOfBounds(Point),

    /// The fold at the given step (starting at 0) has no effect or pushes a dot off the grid.
    InvalidFold { step: usize },

    /// Applying the solution does not produce the target configuration.
    TargetMismatch,

    /// A solution with fewer folds exists.
    ShorterSolution { length: usize },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VerifyError::OutOfBounds(p) => write!(f, "dot ({}, {}) is off the grid", p.x, p.y),
            VerifyError::InvalidFold { step } => write!(f, "fold {step} is not valid"),
            VerifyError::TargetMismatch => write!(f, "the solution does not reach the target"),
            VerifyError::ShorterSolution { length } => {
                write!(f, "a solution with {length} folds exists")
            }
        }
    }
}

impl Error for VerifyError {}

/// Verify that the solution of the puzzle is valid and that no shorter solution exists.
pub fn verify_puzzle(board: &Board, puzzle: &Puzzle) -> Result<(), VerifyError> {
    if let Some(p) = puzzle
        .start
        .iter()
        .chain(puzzle.target.iter())
        .find(|p| !board.contains(p))
    {
        return Err(VerifyError::OutOfBounds(*p));
    }

    let mut points: Vec<Point> = puzzle.start.clone();
    for (step, crease) in puzzle.solution.iter().enumerate() {
        points = board
            .apply_fold(&points, crease)
            .ok_or(VerifyError::InvalidFold { step })?;
    }
    if !fold::same_points(&points, &puzzle.target) {
        return Err(VerifyError::TargetMismatch);
    }

    if let Some(max_depth) = puzzle.solution.len().checked_sub(1) {
        if let Some(shorter) =
            search::find_shortest_path(board, &puzzle.start, &puzzle.target, max_depth)
        {
            return Err(VerifyError::ShorterSolution {
                length: shorter.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::difficulty::Difficulty;
    use crate::generator::fold::{Crease, Direction};

    fn puzzle() -> Puzzle {
        Puzzle {
            id: "medium-2024-01-01".to_string(),
            title: "Press Medium".to_string(),
            difficulty: Difficulty::Medium,
            start: vec![Point::new(1, 2), Point::new(2, 1), Point::new(1, 1)],
            target: vec![Point::new(3, 6), Point::new(4, 5), Point::new(3, 5)],
            solution: vec![
                Crease::horizontal(2, Direction::Down),
                Crease::vertical(3, Direction::Right),
                Crease::horizontal(4, Direction::Down),
                Crease::vertical(4, Direction::Left),
            ],
        }
    }

    #[test]
    fn valid_puzzle() {
        assert_eq!(verify_puzzle(&Board::new(6), &puzzle()), Ok(()));
    }

    #[test]
    fn dot_off_the_grid() {
        let mut p = puzzle();
        p.target[1] = Point::new(7, 5);
        assert_eq!(
            verify_puzzle(&Board::new(6), &p),
            Err(VerifyError::OutOfBounds(Point::new(7, 5)))
        );
    }

    #[test]
    fn invalid_fold() {
        let mut p = puzzle();
        // No dot right of column 5 at the start
        p.solution.insert(0, Crease::vertical(5, Direction::Left));
        assert_eq!(
            verify_puzzle(&Board::new(6), &p),
            Err(VerifyError::InvalidFold { step: 0 })
        );
    }

    #[test]
    fn wrong_target() {
        let mut p = puzzle();
        p.solution.pop();
        assert_eq!(
            verify_puzzle(&Board::new(6), &p),
            Err(VerifyError::TargetMismatch)
        );
    }

    #[test]
    fn detour_is_reported() {
        // One fold is enough, three are provided
        let p = Puzzle {
            start: vec![Point::new(1, 1)],
            target: vec![Point::new(2, 1)],
            solution: vec![
                Crease::vertical(1, Direction::Right),
                Crease::horizontal(1, Direction::Down),
                Crease::horizontal(1, Direction::Up),
            ],
            ..puzzle()
        };
        assert_eq!(
            verify_puzzle(&Board::new(6), &p),
            Err(VerifyError::ShorterSolution { length: 1 })
        );
    }
}
