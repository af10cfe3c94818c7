// TaskFreq - GPL-3.0-or-later
// This file is part of TaskFreq.
//
// TaskFreq is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// TaskFreq is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with TaskFreq.  If not, see <https://www.gnu.org/licenses/>.

//! Log input sourcing: a named file, or stdin/multi-file concatenation.

use anyhow::Context;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Read a whole log file into lines.
///
/// Worker logs occasionally contain stray non-UTF-8 bytes; reading raw and
/// converting lossily keeps one bad byte from aborting the run.
pub fn read_file_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let mut file =
        File::open(path).with_context(|| format!("cannot open log file {}", path.display()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .with_context(|| format!("cannot read log file {}", path.display()))?;
    log::debug!("read {} bytes from {}", buffer.len(), path.display());

    let content = String::from_utf8_lossy(&buffer);
    Ok(content.lines().map(ToString::to_string).collect())
}

/// Concatenate the named files in order, or read stdin when none are given.
pub fn read_stream_lines(files: &[PathBuf]) -> anyhow::Result<Vec<String>> {
    if files.is_empty() {
        log::debug!("no files named, reading standard input");
        let mut buffer = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .context("cannot read standard input")?;
        let content = String::from_utf8_lossy(&buffer);
        return Ok(content.lines().map(ToString::to_string).collect());
    }

    let mut lines = Vec::new();
    for path in files {
        lines.extend(read_file_lines(path)?);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_file_lines() {
        let mut file = NamedTempFile::new().expect("create temp file");
        writeln!(file, "first line").expect("write temp file");
        writeln!(file, "second line").expect("write temp file");
        let lines = read_file_lines(file.path()).expect("read temp file");
        assert_eq!(lines, vec!["first line", "second line"]);
    }

    #[test]
    fn test_read_file_lines_lossy_utf8() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(b"ok line\n\xff\xfe broken\n")
            .expect("write temp file");
        let lines = read_file_lines(file.path()).expect("read temp file");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "ok line");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_file_lines(Path::new("/nonexistent/worker.log"))
            .expect_err("missing file must fail");
        assert!(err.to_string().contains("cannot open log file"));
    }

    #[test]
    fn test_stream_concatenates_files_in_order() {
        let mut first = NamedTempFile::new().expect("create temp file");
        writeln!(first, "a").expect("write temp file");
        let mut second = NamedTempFile::new().expect("create temp file");
        writeln!(second, "b").expect("write temp file");

        let paths = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let lines = read_stream_lines(&paths).expect("read temp files");
        assert_eq!(lines, vec!["a", "b"]);
    }
}
