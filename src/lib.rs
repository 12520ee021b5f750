
/* Copyright (C) 2024 Philipp Benner
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <http://www.gnu.org/licenses/>.
 */

/* -------------------------------------------------------------------------- */

pub mod datafile;
pub mod error;
pub mod infologger;
pub mod iub;
pub mod iub_codes;
pub mod melt;
pub mod seqtype;
pub mod seqtype_charset;
pub mod seqtype_classify;
pub mod seqtype_gap;
pub mod seqtype_pattern;
pub mod seqtype_table;

// Private crates
mod utility;

// Macros
extern crate approx;
