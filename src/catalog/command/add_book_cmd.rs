use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    pub(crate) book_id: String,
    pub(crate) title: String,
    pub(crate) author: String,
}

impl AddBookCommandRequest {
    pub fn new(book_id: &str, title: &str, author: &str) -> Self {
        Self {
            book_id: book_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn build_book(&self) -> BookEntity {
        BookEntity::new(self.book_id.as_str(), self.title.as_str(), self.author.as_str())
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookEntity,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity) -> Self {
        Self {
            book,
        }
    }
}

impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
