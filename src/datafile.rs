// Copyright (C) 2024 Philipp Benner
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the “Software”), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/* -------------------------------------------------------------------------- */

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::Error;
use crate::utility::is_gzip;

/* -------------------------------------------------------------------------- */

pub const DATA_ENV_VAR : &str = "SEQTYPES_DATA";

pub const BASES_FILE    : &str = "Ebases.iub";
pub const RESIDUES_FILE : &str = "Eresidues.iub";
pub const MELT_FILE     : &str = "Emelt.dat";

// Copies of `data/` compiled into the crate
static BUNDLED: [(&str, &str); 3] = [
    (BASES_FILE,    include_str!("../data/Ebases.iub")),
    (RESIDUES_FILE, include_str!("../data/Eresidues.iub")),
    (MELT_FILE,     include_str!("../data/Emelt.dat")),
];

/// Compiled-in contents of a bundled definition file.
pub fn bundled(name: &str) -> Option<&'static str> {
    BUNDLED.iter().find(|(n, _)| *n == name).map(|(_, content)| *content)
}

/* -------------------------------------------------------------------------- */

/// Finds definition files by logical name.
///
/// Directories are searched in the order they were added, followed by the
/// directory named by `SEQTYPES_DATA`. A compressed `<name>.gz` is accepted
/// wherever `<name>` is. If no file is found, [`DataFileLocator::open`] falls
/// back to the copies of `Ebases.iub`, `Eresidues.iub` and `Emelt.dat`
/// compiled into the crate, so installed binaries work without a data
/// directory.
#[derive(Clone, Debug, Default)]
pub struct DataFileLocator {
    dirs: Vec<PathBuf>,
}

/* -------------------------------------------------------------------------- */

impl DataFileLocator {

    pub fn new() -> Self {
        DataFileLocator::default()
    }

    pub fn add_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.dirs.push(dir.as_ref().to_path_buf());
        self
    }

    fn search_path(&self) -> Vec<PathBuf> {
        let mut dirs = self.dirs.clone();
        if let Ok(dir) = env::var(DATA_ENV_VAR) {
            if !dir.is_empty() {
                dirs.push(PathBuf::from(dir));
            }
        }
        dirs
    }

    /// Full path of the first matching file on disk, if any.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        for dir in self.search_path() {
            for candidate in [dir.join(name), dir.join(format!("{}.gz", name))] {
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
        None
    }

    /// Open a data file for line-oriented reading. Files on disk take
    /// precedence over the bundled copies, anything else missing is an error.
    pub fn open(&self, name: &str) -> Result<Box<dyn BufRead>, Error> {
        if let Some(path) = self.locate(name) {
            return open_path(&path);
        }
        match bundled(name) {
            Some(content) => Ok(Box::new(Cursor::new(content.as_bytes()))),
            None          => Err(Error::DataFileNotFound(name.to_string())),
        }
    }

}

/* -------------------------------------------------------------------------- */

pub(crate) fn open_path(path: &Path) -> Result<Box<dyn BufRead>, Error> {
    let file = File::open(path)?;
    if is_gzip(path) {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {

    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;

    #[test]
    fn test_open_bundled() {
        let locator = DataFileLocator::new().add_dir(env::temp_dir().join("seqtypes-no-such-dir"));
        for name in [BASES_FILE, RESIDUES_FILE, MELT_FILE] {
            let mut reader = locator.open(name).unwrap();
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            assert!(line.starts_with('#'), "{}", name);
        }
        assert!(bundled("Edoes-not-exist.iub").is_none());
    }

    #[test]
    fn test_disk_overrides_bundled() {
        let dir = env::temp_dir().join(format!("seqtypes-override-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(BASES_FILE), "A 1 A Adenine\n").unwrap();

        let locator = DataFileLocator::new().add_dir(&dir);
        let mut reader = locator.open(BASES_FILE).unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();

        assert_eq!(line, "A 1 A Adenine\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let locator = DataFileLocator::new();
        match locator.open("Edoes-not-exist.iub") {
            Err(Error::DataFileNotFound(name)) => assert_eq!(name, "Edoes-not-exist.iub"),
            _ => panic!("expected DataFileNotFound"),
        }
    }

    #[test]
    fn test_gzip_file() {
        let dir = env::temp_dir().join(format!("seqtypes-datafile-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let file = File::create(dir.join("Etest.dat.gz")).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b"AA TT 1 2 3\n").unwrap();
        encoder.finish().unwrap();

        let locator = DataFileLocator::new().add_dir(&dir);
        let mut reader = locator.open("Etest.dat").unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();

        assert_eq!(line, "AA TT 1 2 3\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
