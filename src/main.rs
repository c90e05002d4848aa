/*!
 * Command-line interface for repo2txt
 */

use std::fs;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use repo2txt::config::{Args, Config};
use repo2txt::report::{Reporter, RunReport};
use repo2txt::writer::DumpWriter;

const BANNER: &str = r"
     ____              ____  __       __
    / _  |__ ___  ___ |__  |/ /___ __/ /_
   / , _/ -_) _ \/ _ \/ __// __/\ \ / __/
  /_/|_|\__/ ,__/\___/____/\__//_\_\\__/
          /_/    for llms & text-mining
";

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "repo2txt", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    eprintln!("{}", BANNER);
    setup_tracing(args.verbose, args.quiet);

    // Create and validate configuration
    let config = Config::from_args(args);
    if let Err(e) = config.validate() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    eprintln!("\n{}", Reporter::options_table(&config));

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {pos} files {wide_msg:.dim.white}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.set_prefix("Dumping");
    progress.enable_steady_tick(Duration::from_millis(100));

    let start_time = Instant::now();
    let writer = DumpWriter::new(config.clone(), Arc::new(progress.clone()));
    let result = writer.write_to_file();
    progress.finish_and_clear();

    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let output_bytes = fs::metadata(&config.output_file)
        .map(|m| m.len())
        .unwrap_or_default();

    let report = RunReport {
        output_file: config.output_file.display().to_string(),
        output_bytes,
        duration: start_time.elapsed(),
        stats,
    };
    eprintln!("\n{}", Reporter::summary(&report));

    info!(
        "Dumped {} bytes to {}. Bye!",
        output_bytes,
        config.output_file.display()
    );
    ExitCode::SUCCESS
}

fn setup_tracing(verbosity: u8, quiet: bool) {
    let default_filter = match (quiet, verbosity) {
        (true, _) => "repo2txt=warn",
        (false, 0) => "repo2txt=info",
        (false, 1) => "repo2txt=debug",
        (false, _) => "repo2txt=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .init();
}
