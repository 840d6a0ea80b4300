use crate::checkout::dto::CheckoutDto;
use crate::core::library::LibraryResult;

pub mod service;

pub(crate) const INVALID_BOOK_OR_USER: &str = "Invalid book or user ID.";
pub(crate) const ALREADY_ISSUED: &str = "Book is already issued.";
pub(crate) const NOT_BORROWED: &str = "User has not borrowed this book.";

pub(crate) trait CheckoutService {
    // Available -> Issued, recording the book against the user
    fn issue(&self, book_id: &str, user_id: &str) -> LibraryResult<CheckoutDto>;
    // Issued -> Available, only for the user the book is recorded against
    fn returned(&self, book_id: &str, user_id: &str) -> LibraryResult<CheckoutDto>;
}
