use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::domain::video::{EventPublisher, VideoEvent};

pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// In-process fan-out of video events to any number of subscribers.
///
/// Publishing never blocks and never fails: with no subscriber attached the
/// event is dropped, and slow subscribers observe `Lagged` on receive.
#[derive(Debug, Clone)]
pub struct InProcEventBus {
    sender: broadcast::Sender<VideoEvent>,
}

impl InProcEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<VideoEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for InProcEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

#[async_trait]
impl EventPublisher for InProcEventBus {
    async fn publish(&self, event: VideoEvent) -> anyhow::Result<()> {
        let _ = self.sender.send(event);
        Ok(())
    }
}

/// Subscription handle for consumers that only need the receiving side.
pub trait VideoEventStream {
    fn subscribe_videos(&self) -> broadcast::Receiver<VideoEvent>;
}

impl VideoEventStream for InProcEventBus {
    fn subscribe_videos(&self) -> broadcast::Receiver<VideoEvent> {
        self.subscribe()
    }
}
