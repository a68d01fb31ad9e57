use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::playback::{NarrationRequest, NarrationToken};

/// Sender half of the narration completion channel; held by the device.
pub type NarrationFinishedTx = mpsc::UnboundedSender<NarrationToken>;

/// Receiver half; consumed by whoever executes playback actions.
pub type NarrationFinishedRx = mpsc::UnboundedReceiver<NarrationToken>;

/// Narration device port (text-to-speech stand-in).
///
/// `speak` is fire-and-forget: completion is reported out-of-band by
/// sending the request's token on the [`NarrationFinishedTx`] the
/// implementation was constructed with. The playback machine
/// matches tokens, so completions that arrive after the slide or the
/// recipe changed are safely ignored.
///
/// Implementations must honor "at most one outstanding utterance":
/// a new `speak` implicitly cancels any prior unfinished one.
#[async_trait]
pub trait NarratorPort: Send + Sync {
    async fn speak(&self, request: &NarrationRequest, token: NarrationToken) -> Result<()>;

    /// Cancel any in-flight utterance without reporting completion.
    async fn cancel_all(&self) -> Result<()>;
}
