use std::cell::RefCell;
use std::rc::Rc;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::users::domain::model::UserEntity;
use crate::users::repository::UserRepository;

pub trait Repository<Entity> {
    // create an entity
    fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity, the version must match the stored one
    fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity by record key
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // first entity in insertion order accepted by the predicate
    fn find_first(&self, predicate: &dyn Fn(&Entity) -> bool) -> Option<Entity>;

    // all entities in insertion order
    fn query(&self) -> Vec<Entity>;
}

// MemoryRepository keeps records in insertion order; nothing is ever deleted.
#[derive(Debug)]
pub(crate) struct MemoryRepository<Entity> {
    records: RefCell<Vec<Entity>>,
}

impl<Entity> Default for MemoryRepository<Entity> {
    fn default() -> Self {
        Self {
            records: RefCell::new(vec![]),
        }
    }
}

impl<Entity: Identifiable + Clone> Repository<Entity> for MemoryRepository<Entity> {
    fn create(&self, entity: &Entity) -> LibraryResult<usize> {
        let mut records = self.records.borrow_mut();
        let id = entity.id();
        if records.iter().any(|r| r.id() == id) {
            return Err(LibraryError::duplicate_key(format!("record {} already exists", id).as_str()));
        }
        records.push(entity.clone());
        Ok(1)
    }

    fn update(&self, entity: &Entity) -> LibraryResult<usize> {
        let mut records = self.records.borrow_mut();
        let id = entity.id();
        let existing = records.iter_mut().find(|r| r.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("record {} not found", id).as_str()))?;
        if existing.version() != entity.version() {
            return Err(LibraryError::validation(
                format!("record {} version {} is stale, stored version {}",
                        id, entity.version(), existing.version()).as_str(), Some("version".to_string())));
        }
        let mut updated = entity.clone();
        updated.set_version(entity.version() + 1);
        *existing = updated;
        Ok(1)
    }

    fn get(&self, id: &str) -> LibraryResult<Entity> {
        self.records.borrow().iter().find(|r| r.id() == id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("record {} not found", id).as_str()))
    }

    fn find_first(&self, predicate: &dyn Fn(&Entity) -> bool) -> Option<Entity> {
        self.records.borrow().iter().find(|r| predicate(*r)).cloned()
    }

    fn query(&self) -> Vec<Entity> {
        self.records.borrow().clone()
    }
}

// RepositoryStore is the catalogue store: the single owner of the book and user
// tables. Services receive shared handles to it from their factories.
#[derive(Clone)]
pub struct RepositoryStore {
    pub(crate) books: Rc<dyn BookRepository>,
    pub(crate) users: Rc<dyn UserRepository>,
    pub(crate) publisher: Rc<dyn EventPublisher>,
}

impl RepositoryStore {
    pub fn new(via: GatewayPublisherVia) -> Self {
        Self::with_publisher(create_publisher(via))
    }

    pub fn with_publisher(publisher: Rc<dyn EventPublisher>) -> Self {
        Self {
            books: Rc::new(MemoryRepository::<BookEntity>::default()),
            users: Rc::new(MemoryRepository::<UserEntity>::default()),
            publisher,
        }
    }
}
