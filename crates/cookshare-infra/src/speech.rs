use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::info;

use cookshare_core::playback::{NarrationRequest, NarrationToken};
use cookshare_core::ports::{NarrationFinishedRx, NarrationFinishedTx, NarratorPort};

/// Narration device stand-in: logs every utterance and reports
/// completion immediately on the channel it was built with.
///
/// Real speech synthesis is out of scope; this adapter keeps the
/// playback pipeline honest end to end (requests flow out, completion
/// tokens flow back) for demos and tests.
pub struct LoggingNarrator {
    finished_tx: NarrationFinishedTx,
}

impl LoggingNarrator {
    /// Build the narrator together with the completion channel the
    /// playback controller consumes.
    pub fn new() -> (Self, NarrationFinishedRx) {
        let (finished_tx, finished_rx) = mpsc::unbounded_channel();
        (Self { finished_tx }, finished_rx)
    }
}

#[async_trait]
impl NarratorPort for LoggingNarrator {
    async fn speak(&self, request: &NarrationRequest, token: NarrationToken) -> Result<()> {
        info!(
            token = token.0,
            language = %request.language,
            rate = request.rate,
            text = %request.text,
            "narration"
        );
        // Zero-length "synthesis": report done right away. The machine
        // drops the token if the slide changed in the meantime.
        let _ = self.finished_tx.send(token);
        Ok(())
    }

    async fn cancel_all(&self) -> Result<()> {
        info!("narration cancelled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookshare_core::NarrationConfig;

    #[tokio::test]
    async fn speak_reports_completion_with_the_same_token() {
        let (narrator, mut finished_rx) = LoggingNarrator::new();
        let request = NarrationRequest::new("第一步,热锅。", &NarrationConfig::default());

        narrator
            .speak(&request, NarrationToken(7))
            .await
            .expect("speak");

        assert_eq!(finished_rx.recv().await, Some(NarrationToken(7)));
    }

    #[tokio::test]
    async fn cancel_all_reports_nothing() {
        let (narrator, mut finished_rx) = LoggingNarrator::new();

        narrator.cancel_all().await.expect("cancel");

        assert!(finished_rx.try_recv().is_err());
    }
}
