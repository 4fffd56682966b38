//! Landmark playback from recorded JSON-Lines files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use formtrack_core::{CoreError, CoreResult, Landmark, LandmarkFrame, LandmarkSource};
use serde::Deserialize;

/// One recorded frame: the wire shape the pose sidecar emits, `null` or an
/// empty array when no person was visible.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordedFrame {
    pub(crate) landmarks: Option<Vec<Landmark>>,
}

impl RecordedFrame {
    /// Converts the recorded points into a frame, `None` when no person
    /// was in shot.
    pub(crate) fn into_frame(self) -> CoreResult<Option<LandmarkFrame>> {
        let Some(points) = self.landmarks else {
            return Ok(None);
        };
        if points.is_empty() {
            return Ok(None);
        }
        LandmarkFrame::from_pose_points(&points).map(Some)
    }
}

/// [`LandmarkSource`] that replays a JSON-Lines recording.
///
/// Blank lines and frames without a person are skipped, so the source only
/// yields frames the analysis can act on. A line that fails to parse is an
/// error for that call; the next call resumes on the following line.
#[derive(Debug)]
pub struct JsonlFrameSource<R> {
    reader: R,
    line: u64,
    buf: String,
}

impl JsonlFrameSource<BufReader<File>> {
    /// Opens a recording file for playback.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened.
    pub fn open(path: &Path) -> CoreResult<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonlFrameSource<R> {
    /// Creates a source over any buffered reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }

    /// Returns the number of lines consumed so far.
    #[must_use]
    pub fn lines_read(&self) -> u64 {
        self.line
    }
}

impl<R: BufRead> LandmarkSource for JsonlFrameSource<R> {
    fn next_frame(&mut self) -> CoreResult<Option<LandmarkFrame>> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let trimmed = self.buf.trim();
            if trimmed.is_empty() {
                continue;
            }

            let recorded: RecordedFrame = serde_json::from_str(trimmed).map_err(|e| {
                CoreError::validation(format!("line {}: {e}", self.line))
            })?;
            match recorded.into_frame()? {
                Some(frame) => return Ok(Some(frame)),
                // No person in shot, move on to the next line.
                None => continue,
            }
        }
    }
}
