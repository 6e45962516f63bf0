use crate::domain::Pacer;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// Sleeps on the tokio timer.
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}
