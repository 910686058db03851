use std::sync::Arc;
use crate::gateway::events::EventPublisher;
use crate::gateway::logs::LogPublisher;

pub(crate) fn create_publisher() -> Arc<dyn EventPublisher> {
    Arc::new(LogPublisher::new())
}
