use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher records published events so tests can inspect them
#[derive(Debug, Default)]
pub(crate) struct MemoryPublisher {
    events: RwLock<Vec<(String, String)>>,
}

impl MemoryPublisher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // (group, key) of every published event in publish order
    pub(crate) async fn published(&self) -> Vec<(String, String)> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.write().await.push((event.group.to_string(), event.key.to_string()));
        Ok(())
    }
}
