//! Frame-driven code scanner.
//!
//! The camera and decoder are a black box behind [`FrameDecoder`]. The scan
//! loop polls it at a fixed rate, ignores per-frame misses, and emits one
//! [`ScanEvent::Navigate`] for the first payload that yields an asset
//! identifier. Stopping the handle releases the capture resource; a decode
//! arriving after teardown is a no-op.

use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::error::{AppError, AppResult};
use crate::scan;

/// Outcome of one frame capture attempt.
#[derive(Debug, Clone)]
pub enum DecodeOutcome {
    /// A code was decoded in this frame.
    Decoded(String),
    /// No code in this frame. Expected on most frames; never surfaced.
    Miss,
    /// The capture source is gone (device unplugged, stream ended).
    Closed,
}

/// Camera/decoder integration point.
#[async_trait::async_trait]
pub trait FrameDecoder: Send {
    /// Open the capture device with the requested rate and decode region.
    fn open(&mut self, config: &ScannerConfig) -> AppResult<()>;

    /// Capture one frame and attempt a decode.
    async fn decode_frame(&mut self) -> DecodeOutcome;

    /// Release the underlying capture resource. Idempotent.
    fn release(&mut self);
}

#[derive(Debug, Clone)]
pub struct ScannerConfig {
    /// Frames per second to poll the decoder at.
    pub fps: u32,
    /// Decode region in pixels, handed to the decoder as-is.
    pub decode_box: (u32, u32),
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            fps: 10,
            decode_box: (250, 250),
        }
    }
}

/// Event emitted by the scan loop.
#[derive(Debug)]
pub enum ScanEvent {
    /// A payload resolved to a candidate identifier; the loop has stopped
    /// and the decoder has been released.
    Navigate(String),
    /// A decoded payload failed validation; scanning continues.
    Rejected(AppError),
}

/// Handle to a running scan loop. Dropping it tears the loop down.
pub struct ScannerHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ScannerHandle {
    /// Stop the loop and wait for the decoder to be released.
    pub async fn stop(mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        let _ = (&mut self.task).await;
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for ScannerHandle {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
    }
}

/// Start the scan loop on a background task.
///
/// Events arrive on the returned receiver; the loop ends after the first
/// successful extraction, on stop, or when the decoder closes.
pub fn start<D: FrameDecoder + 'static>(
    mut decoder: D,
    config: ScannerConfig,
) -> AppResult<(ScannerHandle, mpsc::Receiver<ScanEvent>)> {
    decoder.open(&config)?;

    let (event_tx, event_rx) = mpsc::channel(8);
    let (stop_tx, mut stop_rx) = oneshot::channel();

    let frame_interval = Duration::from_millis((1_000 / u64::from(config.fps.max(1))).max(1));

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(frame_interval);

        loop {
            tokio::select! {
                _ = &mut stop_rx => {
                    decoder.release();
                    break;
                }
                _ = ticker.tick() => {
                    let text = match decoder.decode_frame().await {
                        DecodeOutcome::Decoded(text) => text,
                        DecodeOutcome::Miss => continue,
                        DecodeOutcome::Closed => {
                            decoder.release();
                            break;
                        }
                    };

                    match scan::extract_identifier(&text) {
                        Ok(id) => {
                            // Release before navigating, mirroring the
                            // scanner.clear() contract of the UI flow.
                            decoder.release();
                            let _ = event_tx.send(ScanEvent::Navigate(id)).await;
                            break;
                        }
                        Err(err) => {
                            tracing::debug!(%err, "rejected scan payload");
                            let _ = event_tx.send(ScanEvent::Rejected(err)).await;
                        }
                    }
                }
            }
        }
    });

    Ok((
        ScannerHandle {
            stop_tx: Some(stop_tx),
            task,
        },
        event_rx,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Feeds a fixed sequence of outcomes, then reports `Closed`.
    struct ScriptedDecoder {
        frames: Vec<DecodeOutcome>,
        released: Arc<AtomicBool>,
    }

    impl ScriptedDecoder {
        fn new(frames: Vec<DecodeOutcome>) -> (Self, Arc<AtomicBool>) {
            let released = Arc::new(AtomicBool::new(false));
            (
                Self {
                    frames,
                    released: released.clone(),
                },
                released,
            )
        }
    }

    #[async_trait::async_trait]
    impl FrameDecoder for ScriptedDecoder {
        fn open(&mut self, _config: &ScannerConfig) -> AppResult<()> {
            Ok(())
        }

        async fn decode_frame(&mut self) -> DecodeOutcome {
            if self.frames.is_empty() {
                DecodeOutcome::Closed
            } else {
                self.frames.remove(0)
            }
        }

        fn release(&mut self) {
            self.released.store(true, Ordering::SeqCst);
        }
    }

    fn fast_config() -> ScannerConfig {
        ScannerConfig {
            fps: 1_000,
            ..ScannerConfig::default()
        }
    }

    #[tokio::test]
    async fn first_valid_payload_navigates_and_releases() {
        let (decoder, released) = ScriptedDecoder::new(vec![
            DecodeOutcome::Miss,
            DecodeOutcome::Miss,
            DecodeOutcome::Decoded("Link: http://host/path/42".to_string()),
        ]);
        let (handle, mut events) = start(decoder, fast_config()).unwrap();

        match events.recv().await {
            Some(ScanEvent::Navigate(id)) => assert_eq!(id, "42"),
            other => panic!("expected Navigate, got {:?}", other),
        }
        handle.stop().await;
        assert!(released.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected_and_scanning_continues() {
        let (decoder, _released) = ScriptedDecoder::new(vec![
            DecodeOutcome::Decoded("WIFI:T:WPA;S:guest;;".to_string()),
            DecodeOutcome::Decoded("http://host/user/asset/7".to_string()),
        ]);
        let (handle, mut events) = start(decoder, fast_config()).unwrap();

        match events.recv().await {
            Some(ScanEvent::Rejected(err)) => assert_eq!(err, AppError::UnrecognizedPayload),
            other => panic!("expected Rejected, got {:?}", other),
        }
        match events.recv().await {
            Some(ScanEvent::Navigate(id)) => assert_eq!(id, "7"),
            other => panic!("expected Navigate, got {:?}", other),
        }
        handle.stop().await;
    }

    #[tokio::test]
    async fn stopping_releases_decoder_without_events() {
        // A decoder that only ever misses; the loop runs until stopped.
        let (decoder, released) = ScriptedDecoder::new(vec![DecodeOutcome::Miss; 10_000]);
        let (handle, mut events) = start(decoder, fast_config()).unwrap();

        handle.stop().await;
        assert!(released.load(Ordering::SeqCst));
        // Teardown produces no events; the channel just closes.
        assert!(events.recv().await.is_none());
    }

    #[tokio::test]
    async fn closed_decoder_ends_loop() {
        let (decoder, released) = ScriptedDecoder::new(vec![]);
        let (handle, mut events) = start(decoder, fast_config()).unwrap();

        assert!(events.recv().await.is_none());
        handle.stop().await;
        assert!(released.load(Ordering::SeqCst));
    }
}
