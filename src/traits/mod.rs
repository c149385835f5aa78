mod detector;
mod video;

pub use detector::{ExpressionDetector, ScriptedDetector};
pub use video::{CountingFrames, FrameId, FrameSource};
