pub mod service;

use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;

pub(crate) trait CatalogService {
    fn add_book(&self, book: &BookEntity) -> LibraryResult<BookEntity>;
    fn update_book(&self, book: &BookEntity) -> LibraryResult<BookEntity>;
    fn find_book_by_id(&self, id: &str) -> Option<BookEntity>;
    fn list_books(&self) -> Vec<BookEntity>;
}
