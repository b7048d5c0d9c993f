// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Calculation failures.
//!
//! None of these ever leave the engine as an error value: the engine commits
//! them to the display as the error marker. They exist so that a failed
//! computation is carried as a tagged result up to that single point.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub(crate) enum CalcError {
    #[error("square root of negative operand {0}")]
    NegativeSquareRoot(f64),

    #[error("logarithm of non-positive operand {0}")]
    NonPositiveLogarithm(f64),

    #[error("reciprocal of zero")]
    ZeroReciprocal,

    #[error("result is not a finite number ({0})")]
    NonFinite(f64),
}
