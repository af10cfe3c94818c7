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

//! Hourly task-frequency histograms for worker-process logs.
//!
//! The pipeline is a single pass over raw log lines: keep the lines that
//! mention a task name, extract a timestamp and a duration from each, then
//! render one line of `#` markers per contiguous hour-of-day run.

pub mod core;
pub mod parser;

pub use crate::core::histogram::HistogramStyle;
pub use crate::core::pipeline::{run_pipeline, PipelineConfig};
