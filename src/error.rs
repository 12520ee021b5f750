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

use std::fmt;
use std::io;

/* -------------------------------------------------------------------------- */

/// Unrecoverable conditions: configuration mistakes and broken data files.
///
/// A sequence that merely fails validation is not an error, see
/// [`crate::seqtype::Verdict`].
#[derive(Debug)]
pub enum Error {
    Generic(String),
    IO(io::Error),
    UnknownSeqType(String),
    DataFileNotFound(String),
    Parse { file: String, line: usize, msg: String },
}

/* -------------------------------------------------------------------------- */

impl Error {
    pub fn parse<S: Into<String>>(file: &str, line: usize, msg: S) -> Self {
        Error::Parse {
            file: file.to_string(),
            line,
            msg : msg.into(),
        }
    }
}

/* -------------------------------------------------------------------------- */

impl From<String> for Error {
    fn from(str : String) -> Self {
        Error::Generic(str)
    }
}

/* -------------------------------------------------------------------------- */

impl From<io::Error> for Error {
    fn from(e : io::Error) -> Self {
        Error::IO(e)
    }
}

/* -------------------------------------------------------------------------- */

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Generic(v)          => f.pad(&format!("{}", v)),
            Error::IO(v)               => f.pad(&format!("{}", v)),
            Error::UnknownSeqType(v)   => f.pad(&format!("unknown sequence type `{}`", v)),
            Error::DataFileNotFound(v) => f.pad(&format!("data file `{}` not found", v)),
            Error::Parse { file, line, msg } => {
                f.pad(&format!("parsing `{}` failed at line `{}`: {}", file, line, msg))
            }
        }
    }
}

/* -------------------------------------------------------------------------- */

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IO(e) => Some(e),
            _            => None,
        }
    }
}
