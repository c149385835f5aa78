use tokio::sync::watch;
use tracing::{debug, warn};

use crate::traits::{ExpressionDetector, FrameSource};

use super::Expression;

/// Owns the background detection loop and the single-slot mailbox holding
/// the most recent label.
///
/// The loop runs request -> publish -> re-request for the life of the feed,
/// fully decoupled from the game tick; the tick side just reads `latest()`
/// without blocking. Detection failures are logged and retried immediately,
/// leaving the last label in place.
pub struct ExpressionFeed {
    label_rx: watch::Receiver<Expression>,
    shutdown_tx: Option<watch::Sender<bool>>,
}

impl ExpressionFeed {
    /// Spawn the detection loop on the current tokio runtime.
    pub fn spawn<D, V>(detector: D, video: V) -> Self
    where
        D: ExpressionDetector + Send + 'static,
        V: FrameSource + Send + 'static,
    {
        let (label_tx, label_rx) = watch::channel(Expression::Neutral);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        tokio::spawn(run_detection_loop(detector, video, label_tx, shutdown_rx));

        Self {
            label_rx,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Most recently published label. Never blocks; stale values are the
    /// intended semantics.
    pub fn latest(&self) -> Expression {
        *self.label_rx.borrow()
    }

    /// Receiver for hosts that want change notifications instead of polling.
    pub fn subscribe(&self) -> watch::Receiver<Expression> {
        self.label_rx.clone()
    }

    /// Stop the detection loop.
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(true);
            debug!("expression feed stop signal sent");
        }
    }
}

async fn run_detection_loop<D, V>(
    mut detector: D,
    mut video: V,
    label_tx: watch::Sender<Expression>,
    shutdown_rx: watch::Receiver<bool>,
) where
    D: ExpressionDetector,
    V: FrameSource,
{
    loop {
        if *shutdown_rx.borrow() {
            break;
        }

        let Some(frame) = video.latest_frame() else {
            tokio::task::yield_now().await;
            continue;
        };

        let published = match detector.detect(frame) {
            Ok(Some(scores)) => label_tx.send(scores.dominant()),
            // No face in frame.
            Ok(None) => label_tx.send(Expression::Neutral),
            Err(e) => {
                warn!("expression detection failed: {}", e);
                Ok(())
            }
        };
        if published.is_err() {
            // Every receiver is gone; the feed was dropped.
            break;
        }

        tokio::task::yield_now().await;
    }
    debug!("detection loop stopped");
}
