//! The `watch` command: replay a recording, report verdict transitions.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::warn;

use formtrack_analysis::PostureAnalyzer;
use formtrack_core::{Assessment, FormStatus, LandmarkSource};
use formtrack_store::{bootstrap_store, ReportOutcome, StateReporter};

use crate::source::JsonlFrameSource;

/// Arguments for the watch command
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// JSON-Lines recording of pose frames to play back
    #[arg(long)]
    pub frames: PathBuf,

    /// Delay between frames in milliseconds
    #[arg(long, default_value = "0")]
    pub interval_ms: u64,

    /// Path checked between frames; create it to stop the loop
    #[arg(long, default_value = "STOP_FORMTRACK.txt")]
    pub stop_file: PathBuf,
}

/// Runs the playback loop until the recording ends or the stop file
/// appears.
pub async fn execute(args: WatchArgs) -> Result<()> {
    // A stop file left behind by a previous run must not kill this one.
    if args.stop_file.exists() {
        remove_stop_file(&args.stop_file)?;
        println!("{} Removed stale stop file.", "[WATCH]".yellow().bold());
    }

    let mut source = JsonlFrameSource::open(&args.frames)
        .with_context(|| format!("opening {}", args.frames.display()))?;
    let store = bootstrap_store()?;
    let analyzer = PostureAnalyzer::new();
    let mut reporter = StateReporter::new(store);

    println!(
        "{} Watching {} (stop with {})",
        "[WATCH]".bright_cyan().bold(),
        args.frames.display(),
        args.stop_file.display()
    );

    let mut frames = 0u64;
    loop {
        if args.stop_file.exists() {
            remove_stop_file(&args.stop_file)?;
            println!("{} Stop file found, shutting down.", "[WATCH]".yellow().bold());
            break;
        }

        let frame = match source.next_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                println!("{} End of recording.", "[WATCH]".bright_cyan().bold());
                break;
            }
            // A bad frame is never fatal; the recording keeps playing.
            Err(err) => {
                warn!(error = %err, "skipping unreadable frame");
                continue;
            }
        };

        frames += 1;
        let assessment = analyzer.analyze(&frame);
        match reporter.report(&assessment).await {
            Ok(ReportOutcome::Written) => println!("{}", format_transition(frames, &assessment)),
            Ok(ReportOutcome::Skipped) => {}
            Err(err) => warn!(error = %err, "store write failed"),
        }

        if args.interval_ms > 0 {
            tokio::time::sleep(Duration::from_millis(args.interval_ms)).await;
        }
    }

    println!(
        "{} {frames} frames analyzed.",
        "[WATCH]".bright_cyan().bold()
    );
    Ok(())
}

fn remove_stop_file(path: &Path) -> Result<()> {
    std::fs::remove_file(path).with_context(|| format!("removing stop file {}", path.display()))
}

/// Renders one verdict transition as a console line.
fn format_transition(frame: u64, assessment: &Assessment) -> String {
    let status = match assessment.status {
        FormStatus::Correct => assessment.status.label().green().bold(),
        FormStatus::Wrong => assessment.status.label().red().bold(),
    };
    format!(
        "  frame {frame:>5}  {status}  {}  {}",
        assessment.exercise,
        assessment.issue_label()
    )
}
