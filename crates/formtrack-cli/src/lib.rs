//! FormTrack CLI
//!
//! Command-line playback and inspection for recorded pose landmark
//! sessions.
//!
//! # Usage
//!
//! ```bash
//! # Replay a recording, reporting verdict transitions to the store
//! formtrack watch --frames session.jsonl --interval-ms 33
//!
//! # Stop a running watch loop from another terminal
//! touch STOP_FORMTRACK.txt
//!
//! # Inspect a single captured frame
//! formtrack check --input frame.json
//! ```

#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

pub mod check;
pub mod source;
pub mod watch;

pub use source::JsonlFrameSource;

/// FormTrack command line interface
#[derive(Parser, Debug)]
#[command(name = "formtrack")]
#[command(author, version, about = "Exercise form tracking over recorded pose landmarks")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a landmark recording and report verdict transitions
    Watch(watch::WatchArgs),

    /// Analyze a single captured frame
    Check(check::CheckArgs),

    /// Display version information
    Version,
}
