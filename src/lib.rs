//! In-memory library catalogue: books, users and a borrow/return workflow
//! driven from an interactive console menu.

pub mod core;
pub mod books;
pub mod users;
pub mod catalog;
pub mod checkout;
pub mod gateway;
pub mod console;
pub mod utils;
