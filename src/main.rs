// TaskFreq - hourly task-frequency histograms for worker logs
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

#[derive(Parser, Debug)]
#[command(name = "taskfreq")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
#[command(about = "Render an hourly frequency histogram for one task from a worker log", long_about = None)]
struct Args {
    /// Path to the worker log file
    #[arg(value_name = "LOG_PATH")]
    log_path: Option<PathBuf>,

    /// Task name to select (exact substring match)
    #[arg(value_name = "TASK_NAME")]
    task_name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logger with millisecond precision timestamps
    // Set RUST_LOG environment variable to override (e.g., RUST_LOG=debug)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let (Some(log_path), Some(task_name)) = (args.log_path, args.task_name) else {
        // Both positionals are required; the usage contract is exit code 1
        // with the usage line on stdout.
        println!("Usage: taskfreq <log_path> <task_name>");
        std::process::exit(1);
    };

    log::info!("reading worker log {}", log_path.display());
    let lines = log_file::read_file_lines(&log_path)?;

    let config = PipelineConfig {
        task_name,
        style: HistogramStyle::Dated,
    };
    let stdout = std::io::stdout();
    run_pipeline(lines, &config, &mut stdout.lock())?;
    Ok(())
}
