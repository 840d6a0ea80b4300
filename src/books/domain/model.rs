use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookEntity abstracts a single copy in the catalogue. The book_id is the identifier
// typed by the librarian and need not be unique; record_id is assigned on creation
// and is what borrowed lists refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub record_id: String,
    pub version: i64,
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(book_id: &str, title: &str, author: &str) -> Self {
        Self {
            record_id: Uuid::new_v4().to_string(),
            version: 0,
            book_id: book_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.record_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn set_version(&mut self, version: i64) {
        self.version = version;
    }
}

impl Book for BookEntity {
    fn status(&self) -> BookStatus {
        self.book_status
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} - {} by {} [{}]", self.book_id, self.title, self.author, self.book_status)
    }
}
