//! The `check` command: analyze one captured frame, no store involved.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use formtrack_analysis::PostureAnalyzer;
use formtrack_core::{Assessment, FormStatus};

use crate::source::RecordedFrame;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON file holding one recorded frame
    #[arg(long)]
    pub input: PathBuf,

    /// Print the raw assessment as JSON
    #[arg(long)]
    pub json: bool,
}

/// Analyzes the frame in the input file and prints the assessment.
pub fn execute(args: CheckArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let recorded: RecordedFrame = serde_json::from_str(&contents)
        .with_context(|| format!("parsing {}", args.input.display()))?;

    let Some(frame) = recorded.into_frame()? else {
        bail!("no person detected in {}", args.input.display());
    };

    let assessment = PostureAnalyzer::new().analyze(&frame);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!("{}", render_assessment(&assessment));
    }
    Ok(())
}

/// Renders the assessment as aligned console lines.
fn render_assessment(assessment: &Assessment) -> String {
    let status = match assessment.status {
        FormStatus::Correct => assessment.status.label().green().bold(),
        FormStatus::Wrong => assessment.status.label().red().bold(),
    };
    format!(
        "{} {}\n{}   {status}\n{}    {}\n",
        "Exercise:".dimmed(),
        assessment.exercise,
        "Status:".dimmed(),
        "Issue:".dimmed(),
        assessment.issue_label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use formtrack_core::Exercise;

    #[test]
    fn test_rendering_lists_all_three_fields() {
        let text = render_assessment(&Assessment::wrong(
            Exercise::ShoulderPress,
            "Leaning too much while pressing",
        ));
        assert!(text.contains("Shoulder Press"));
        assert!(text.contains("wrong"));
        assert!(text.contains("Leaning too much while pressing"));
    }

    #[test]
    fn test_correct_form_renders_sentinel() {
        let text = render_assessment(&Assessment::correct(Exercise::BicepCurl));
        assert!(text.contains("Bicep Curl"));
        assert!(text.contains("—"));
    }
}
