use std::rc::Rc;
use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::{branch_metadata, DomainEvent};
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Rc<dyn BookRepository>,
    events_publisher: Rc<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Rc<dyn BookRepository>,
                      events_publisher: Rc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&self, book: &BookEntity) -> LibraryResult<BookEntity> {
        self.book_repository.create(book)?;
        self.events_publisher.publish(&DomainEvent::added(
            "book_added", "books", book.record_id.as_str(), &branch_metadata(&self.branch_id), book)?)?;
        Ok(book.clone())
    }

    fn update_book(&self, book: &BookEntity) -> LibraryResult<BookEntity> {
        self.book_repository.update(book)?;
        self.book_repository.get(book.record_id.as_str())
    }

    fn find_book_by_id(&self, id: &str) -> Option<BookEntity> {
        let book = self.book_repository.find_by_book_id(id);
        debug!(book_id = id, found = book.is_some(), "book lookup");
        book
    }

    fn list_books(&self) -> Vec<BookEntity> {
        self.book_repository.query()
    }
}
