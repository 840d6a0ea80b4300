use crate::books::domain::model::BookEntity;
use crate::console::menu::{MenuChoice, MENU_TITLE};
use crate::users::domain::model::UserEntity;

pub(crate) fn menu_lines() -> Vec<String> {
    let mut lines = vec![String::new(), MENU_TITLE.to_string()];
    lines.extend(MenuChoice::ALL.iter().map(|c| format!("{}. {}", c.number(), c)));
    lines
}

pub(crate) fn book_lines(books: &[BookEntity]) -> Vec<String> {
    listing("No books available.", "--- Book List ---", books)
}

pub(crate) fn user_lines(users: &[UserEntity]) -> Vec<String> {
    listing("No users available.", "--- User List ---", users)
}

fn listing<T: ToString>(empty: &str, title: &str, entries: &[T]) -> Vec<String> {
    if entries.is_empty() {
        return vec![empty.to_string()];
    }
    let mut lines = vec![String::new(), title.to_string()];
    lines.extend(entries.iter().map(T::to_string));
    lines
}
