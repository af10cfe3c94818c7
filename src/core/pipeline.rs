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

//! The filter → parse → render pipeline.

use crate::core::filter::TaskFilter;
use crate::core::histogram::{self, HistogramStyle};
use crate::parser::{self, TaskRecord};
use std::io::Write;

/// Everything one pipeline run needs, passed explicitly rather than held
/// as process-global state.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Substring selecting the task's log lines.
    pub task_name: String,
    /// Histogram verbosity.
    pub style: HistogramStyle,
}

/// Run the whole pipeline over `lines`, writing the histogram to `out`.
///
/// Lines are consumed once, in order; the histogram assumes the log was
/// written sequentially and is therefore already time-ordered.
pub fn run_pipeline<I, S, W>(lines: I, config: &PipelineConfig, out: &mut W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let filter = TaskFilter::new(config.task_name.clone());
    let records: Vec<TaskRecord> = lines
        .into_iter()
        .filter(|line| filter.matches(line.as_ref()))
        .map(|line| parser::parse_record(line.as_ref().trim()))
        .collect();
    log::info!(
        "{} line(s) matched task {:?}",
        records.len(),
        config.task_name
    );

    histogram::render(&records, config.style, out)?;
    Ok(())
}
