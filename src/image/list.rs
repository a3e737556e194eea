//! Image list files
//!
//! A list file holds one image name per line. Line endings (`\n` or `\r\n`,
//! and a lone `\r` before end of file) are stripped; nothing else is trimmed
//! and blank lines are kept as empty names. Lines that are not valid UTF-8
//! are decoded lossily so the runtime rejects that one image rather than the
//! whole list.

use crate::error::{Result, RetagError};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Ordered list of image names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageList {
    names: Vec<String>,
}

impl ImageList {
    /// Read an image list from a file
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| RetagError::ListRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            RetagError::Io(source) => RetagError::ListRead {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Read an image list from any buffered reader
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut names = Vec::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if line.last() == Some(&b'\n') {
                line.pop();
            }
            if line.last() == Some(&b'\r') {
                line.pop();
            }

            let name = match std::str::from_utf8(&line) {
                Ok(name) => name.to_string(),
                Err(_) => {
                    tracing::warn!(line = names.len() + 1, "Image list entry is not valid UTF-8");
                    String::from_utf8_lossy(&line).into_owned()
                }
            };
            names.push(name);
        }

        Ok(Self { names })
    }

    /// Image names in file order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over the image names
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    /// Number of entries, blank lines included
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> IntoIterator for &'a ImageList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<String>> for ImageList {
    fn from(names: Vec<String>) -> Self {
        Self { names }
    }
}
