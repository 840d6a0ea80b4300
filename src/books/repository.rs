use crate::books::domain::model::BookEntity;
use crate::core::lookup::matches_id;
use crate::core::repository::{MemoryRepository, Repository};

pub(crate) trait BookRepository: Repository<BookEntity> {
    // first book in insertion order whose identifier matches, ignoring case
    fn find_by_book_id(&self, book_id: &str) -> Option<BookEntity>;
}

impl BookRepository for MemoryRepository<BookEntity> {
    fn find_by_book_id(&self, book_id: &str) -> Option<BookEntity> {
        self.find_first(&|b: &BookEntity| matches_id(b.book_id.as_str(), book_id))
    }
}
