use std::io::{BufRead, Write};
use tracing::debug;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::factory::create_catalog_service;
use crate::checkout::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::checkout::factory::create_checkout_service;
use crate::console::io::Console;
use crate::console::menu::{CHOICE_PROMPT, MenuChoice, MenuInput, SessionState};
use crate::console::view::{book_lines, menu_lines, user_lines};
use crate::core::command::{Command, CommandError};
use crate::core::controller::AppState;
use crate::core::library::{LibraryError, LibraryResult};
use crate::users::command::add_user_cmd::{AddUserCommand, AddUserCommandRequest};
use crate::users::command::list_users_cmd::{ListUsersCommand, ListUsersCommandRequest};
use crate::users::factory::create_user_service;

const INVALID_INPUT: &str = "Invalid input. Please enter a number.";
const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const FAREWELL: &str = "Exiting the system. Goodbye!";

// Reads one answer; a closed input ends the session.
macro_rules! answer {
    ($self:ident, $prompt:expr) => {
        match $self.console.prompt($prompt)? {
            Some(line) => line,
            None => return Ok(SessionState::Terminated),
        }
    };
}

/// Dispatcher drives the menu loop: every `step` shows the menu, reads one choice
/// and runs the matching command against the application state.
pub struct Dispatcher<R, W> {
    state: AppState,
    console: Console<R, W>,
    session: SessionState,
}

impl<R: BufRead, W: Write> Dispatcher<R, W> {
    pub fn new(state: AppState, console: Console<R, W>) -> Self {
        Self {
            state,
            console,
            session: SessionState::Running,
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn run(&mut self) -> LibraryResult<()> {
        while self.session == SessionState::Running {
            self.step()?;
        }
        Ok(())
    }

    pub fn step(&mut self) -> LibraryResult<SessionState> {
        if self.session == SessionState::Terminated {
            return Ok(self.session);
        }
        self.session = self.menu_iteration()?;
        Ok(self.session)
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn menu_iteration(&mut self) -> LibraryResult<SessionState> {
        for line in menu_lines() {
            self.console.println(line.as_str())?;
        }
        let line = answer!(self, CHOICE_PROMPT);
        let input = MenuInput::parse(line.as_str());
        debug!(?input, "menu input");
        match input {
            MenuInput::Choice(choice) => self.dispatch(choice),
            MenuInput::OutOfRange(_) => {
                self.console.println(INVALID_CHOICE)?;
                Ok(SessionState::after(&input))
            }
            MenuInput::NotANumber => {
                self.console.println(INVALID_INPUT)?;
                Ok(SessionState::after(&input))
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> LibraryResult<SessionState> {
        match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::AddUser => self.add_user(),
            MenuChoice::IssueBook => self.issue_book(),
            MenuChoice::ReturnBook => self.return_book(),
            MenuChoice::ListBooks => self.list_books(),
            MenuChoice::ListUsers => self.list_users(),
            MenuChoice::Exit => {
                self.console.println(FAREWELL)?;
                Ok(SessionState::after(&MenuInput::Choice(choice)))
            }
        }
    }

    fn add_book(&mut self) -> LibraryResult<SessionState> {
        let book_id = answer!(self, "Enter Book ID: ");
        let title = answer!(self, "Enter Book Title: ");
        let author = answer!(self, "Enter Book Author: ");
        let svc = create_catalog_service(&self.state.config, &self.state.store);
        let res = AddBookCommand::new(svc).execute(AddBookCommandRequest::new(&book_id, &title, &author));
        self.report(res, "Book added successfully.")
    }

    fn add_user(&mut self) -> LibraryResult<SessionState> {
        let user_id = answer!(self, "Enter User ID: ");
        let name = answer!(self, "Enter User Name: ");
        let svc = create_user_service(&self.state.config, &self.state.store);
        let res = AddUserCommand::new(svc).execute(AddUserCommandRequest::new(&user_id, &name));
        self.report(res, "User added successfully.")
    }

    fn issue_book(&mut self) -> LibraryResult<SessionState> {
        let book_id = answer!(self, "Enter Book ID to issue: ");
        let user_id = answer!(self, "Enter User ID to issue to: ");
        let svc = create_checkout_service(&self.state.config, &self.state.store);
        let res = IssueBookCommand::new(svc).execute(IssueBookCommandRequest::new(book_id, user_id));
        self.report(res, "Book issued successfully.")
    }

    fn return_book(&mut self) -> LibraryResult<SessionState> {
        let book_id = answer!(self, "Enter Book ID to return: ");
        let user_id = answer!(self, "Enter User ID: ");
        let svc = create_checkout_service(&self.state.config, &self.state.store);
        let res = ReturnBookCommand::new(svc).execute(ReturnBookCommandRequest::new(book_id, user_id));
        self.report(res, "Book returned successfully.")
    }

    fn list_books(&mut self) -> LibraryResult<SessionState> {
        let svc = create_catalog_service(&self.state.config, &self.state.store);
        let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::default())?;
        self.print_lines(book_lines(&res.books))
    }

    fn list_users(&mut self) -> LibraryResult<SessionState> {
        let svc = create_user_service(&self.state.config, &self.state.store);
        let res = ListUsersCommand::new(svc).execute(ListUsersCommandRequest::default())?;
        self.print_lines(user_lines(&res.users))
    }

    fn print_lines(&mut self, lines: Vec<String>) -> LibraryResult<SessionState> {
        for line in lines {
            self.console.println(line.as_str())?;
        }
        Ok(SessionState::Running)
    }

    // Lookup and precondition failures are reported and the menu continues;
    // anything else ends the session with an error.
    fn report<T>(&mut self, res: Result<T, CommandError>, success: &str) -> LibraryResult<SessionState> {
        match res {
            Ok(_) => self.console.println(success)?,
            Err(err) if err.is_recoverable() => self.console.println(err.to_string().as_str())?,
            Err(err) => return Err(LibraryError::from(err)),
        }
        Ok(SessionState::Running)
    }
}
