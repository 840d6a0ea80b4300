pub mod model;
pub mod service;

use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;
use crate::users::domain::model::UserEntity;

pub(crate) trait UserService {
    fn add_user(&self, user: &UserEntity) -> LibraryResult<UserEntity>;
    fn update_user(&self, user: &UserEntity) -> LibraryResult<UserEntity>;
    fn find_user_by_id(&self, id: &str) -> Option<UserEntity>;
    fn list_users(&self) -> Vec<UserEntity>;
}

// Borrower is the view of a user the checkout workflow needs
pub(crate) trait Borrower: Identifiable {
    fn has_borrowed(&self, book_record_id: &str) -> bool;
    fn borrowed_count(&self) -> usize;
}
