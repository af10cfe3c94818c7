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

//! Task-name filtering over raw log lines.

/// Selects the log lines that belong to one task type.
///
/// Matching is exact, case-sensitive substring containment. Worker task
/// names are stable identifiers, so no pattern syntax is involved.
#[derive(Clone, Debug)]
pub struct TaskFilter {
    needle: String,
}

impl TaskFilter {
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        line.contains(&self.needle)
    }
}
