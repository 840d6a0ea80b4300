use std::cell::RefCell;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in order so they can be inspected.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    events: RefCell<Vec<DomainEvent>>,
}

impl MemoryPublisher {
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}
