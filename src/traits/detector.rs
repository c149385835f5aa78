use anyhow::Result;

use crate::classifier::ExpressionScores;

use super::FrameId;

/// Abstraction over face-expression classifiers.
/// Implementations: ml model wrapper (production), ScriptedDetector
/// (testing/demo).
///
/// `Ok(None)` means no face was found in the frame. Errors are recoverable:
/// the caller logs and re-issues the next request.
pub trait ExpressionDetector {
    fn detect(&mut self, frame: FrameId) -> Result<Option<ExpressionScores>>;
}

/// Detector that replays a fixed script of results.
pub struct ScriptedDetector {
    script: Vec<Option<ExpressionScores>>,
    cursor: usize,
    repeat: bool,
}

impl ScriptedDetector {
    /// Replay the script once, then report no face.
    pub fn new(script: Vec<Option<ExpressionScores>>) -> Self {
        Self {
            script,
            cursor: 0,
            repeat: false,
        }
    }

    /// Replay the script forever.
    pub fn cycling(script: Vec<Option<ExpressionScores>>) -> Self {
        Self {
            script,
            cursor: 0,
            repeat: true,
        }
    }
}

impl ExpressionDetector for ScriptedDetector {
    fn detect(&mut self, _frame: FrameId) -> Result<Option<ExpressionScores>> {
        if self.script.is_empty() {
            return Ok(None);
        }
        if self.cursor >= self.script.len() {
            if !self.repeat {
                return Ok(None);
            }
            self.cursor = 0;
        }
        let result = self.script[self.cursor].clone();
        self.cursor += 1;
        Ok(result)
    }
}
