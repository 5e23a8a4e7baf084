use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use linediff::{diff_files, DiffOptions, DEFAULT_CONTEXT_LINES};

#[derive(Debug, Parser)]
#[command(
    name = "linediff",
    version,
    about = "Compare two files line by line in unified diff format"
)]
struct Cli {
    /// Number of unchanged lines shown around each change
    #[arg(
        short = 'U',
        long = "unified",
        value_name = "NUM",
        default_value_t = DEFAULT_CONTEXT_LINES,
        env = "LINEDIFF_CONTEXT"
    )]
    context: usize,

    /// Prepend the ---/+++ header so the output can be fed to patch(1)
    #[arg(long)]
    header: bool,

    /// Name for the original file in the header
    #[arg(long, value_name = "LABEL")]
    old_label: Option<String>,

    /// Name for the new file in the header
    #[arg(long, value_name = "LABEL")]
    new_label: Option<String>,

    old: PathBuf,
    new: PathBuf,
}

// Same exit status convention as diff(1): 0 identical, 1 different, 2 trouble.
fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let options = DiffOptions::new()
        .with_context_lines(cli.context)
        .with_patch_header(cli.header)
        .with_labels(cli.old_label, cli.new_label);

    let lines = diff_files(&cli.old, &cli.new, &options).with_context(|| {
        format!("Failed to diff {} against {}", cli.old.display(), cli.new.display())
    })?;

    let mut stdout = io::stdout().lock();
    for line in &lines {
        writeln!(stdout, "{line}").context("Failed to write diff output")?;
    }

    Ok(!lines.is_empty())
}
