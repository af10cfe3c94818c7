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

//! Hour-run aggregation and ASCII histogram rendering.
//!
//! Records are grouped by maximal contiguous runs sharing one hour-of-day
//! value, in input order. Runs are never merged across gaps: a log that
//! wraps past midnight and comes back to an earlier hour shows that hour
//! again on its own line.

use crate::parser::TaskRecord;
use chrono::Timelike;
use std::io::{self, Write};

/// Output verbosity of the rendered histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistogramStyle {
    /// Date header plus an explicit count after each run of markers.
    Dated,
    /// Hour labels and markers only.
    Plain,
}

/// A maximal contiguous run of records sharing one hour-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRun {
    pub hour: u32,
    pub count: usize,
}

/// Group records into contiguous hour-runs.
///
/// Records without a parsed timestamp are dropped before grouping; there
/// is no hour to compare them against.
pub fn hour_runs(records: &[TaskRecord]) -> Vec<HourRun> {
    let mut runs: Vec<HourRun> = Vec::new();
    for ts in records.iter().filter_map(|record| record.timestamp) {
        let hour = ts.hour();
        match runs.last_mut() {
            Some(run) if run.hour == hour => run.count += 1,
            _ => runs.push(HourRun { hour, count: 1 }),
        }
    }
    runs
}

/// Render the histogram for a sequence of records.
///
/// Grouping is delegated to [`hour_runs`]; one output line per run, one `#`
/// marker per record. `Dated` style prefixes a `Date:` header taken from
/// the first timestamped record and appends the run count to each line.
pub fn render<W: Write>(
    records: &[TaskRecord],
    style: HistogramStyle,
    out: &mut W,
) -> io::Result<()> {
    let dropped = records
        .iter()
        .filter(|record| record.timestamp.is_none())
        .count();
    if dropped > 0 {
        log::warn!("skipping {dropped} record(s) without a parsable timestamp");
    }

    let Some(first_ts) = records.iter().find_map(|record| record.timestamp) else {
        return Ok(());
    };
    if style == HistogramStyle::Dated {
        writeln!(out, "Date: {}", first_ts.format("%m/%d/%y"))?;
    }

    for run in hour_runs(records) {
        let markers = "#".repeat(run.count);
        match style {
            HistogramStyle::Dated => writeln!(out, "{:02}: {markers} {}", run.hour, run.count)?,
            HistogramStyle::Plain => writeln!(out, "{:02}: {markers}", run.hour)?,
        }
    }
    Ok(())
}
