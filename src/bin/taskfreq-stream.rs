// TaskFreq stream variant - reads worker log lines from stdin or from
// files named on the command line, in the usual concatenation sense.
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

use clap::Parser;
use std::path::PathBuf;
use taskfreq::core::log_file;
use taskfreq::{run_pipeline, HistogramStyle, PipelineConfig};

/// Task selected when no override is given; the background job this tool
/// was originally built to watch.
const DEFAULT_TASK: &str = "update_annonce_profile";

#[derive(Parser, Debug)]
#[command(name = "taskfreq-stream")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
#[command(about = "Stream worker log lines and render an hourly task histogram", long_about = None)]
struct Args {
    /// Log files to concatenate in order; stdin when none are given
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Task name to select (exact substring match)
    #[arg(long, default_value = DEFAULT_TASK)]
    task: String,
}

fn main() -> anyhow::Result<()> {
    // Initialize logger with millisecond precision timestamps
    // Set RUST_LOG environment variable to override (e.g., RUST_LOG=debug)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let lines = log_file::read_stream_lines(&args.files)?;

    let config = PipelineConfig {
        task_name: args.task,
        style: HistogramStyle::Plain,
    };
    let stdout = std::io::stdout();
    run_pipeline(lines, &config, &mut stdout.lock())?;
    Ok(())
}
