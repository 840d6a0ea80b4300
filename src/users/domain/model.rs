use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::users::domain::Borrower;
use crate::utils::date::serializer;

// UserEntity abstracts a library member. borrowed_books holds the record keys of
// the books currently issued to the member, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntity {
    pub record_id: String,
    pub version: i64,
    pub user_id: String,
    pub name: String,
    pub borrowed_books: Vec<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl UserEntity {
    pub fn new(user_id: &str, name: &str) -> Self {
        Self {
            record_id: Uuid::new_v4().to_string(),
            version: 0,
            user_id: user_id.to_string(),
            name: name.to_string(),
            borrowed_books: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub(crate) fn borrow_book(&mut self, book_record_id: &str) {
        self.borrowed_books.push(book_record_id.to_string());
        self.updated_at = Utc::now().naive_utc();
    }

    // removes the first occurrence only
    pub(crate) fn return_book(&mut self, book_record_id: &str) -> bool {
        match self.borrowed_books.iter().position(|id| id == book_record_id) {
            Some(pos) => {
                self.borrowed_books.remove(pos);
                self.updated_at = Utc::now().naive_utc();
                true
            }
            None => false,
        }
    }
}

impl Identifiable for UserEntity {
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

impl Borrower for UserEntity {
    fn has_borrowed(&self, book_record_id: &str) -> bool {
        self.borrowed_books.iter().any(|id| id == book_record_id)
    }

    fn borrowed_count(&self) -> usize {
        self.borrowed_books.len()
    }
}

impl Display for UserEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} - {} (Borrowed: {})", self.user_id, self.name, self.borrowed_count())
    }
}
