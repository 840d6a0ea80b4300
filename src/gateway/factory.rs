use std::rc::Rc;
use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::memory::publisher::MemoryPublisher;

pub(crate) fn create_publisher(via: GatewayPublisherVia) -> Rc<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Rc::new(LogPublisher::new())
        }
        GatewayPublisherVia::Memory => {
            Rc::new(MemoryPublisher::default())
        }
    }
}
