use std::fmt;
use std::fmt::{Display, Formatter};

pub(crate) const MENU_TITLE: &str = "--- Library Management System Menu ---";
pub(crate) const CHOICE_PROMPT: &str = "Enter your choice: ";

// Operations offered by the menu, numbered as shown to the operator.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    AddBook,
    AddUser,
    IssueBook,
    ReturnBook,
    ListBooks,
    ListUsers,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddBook,
        MenuChoice::AddUser,
        MenuChoice::IssueBook,
        MenuChoice::ReturnBook,
        MenuChoice::ListBooks,
        MenuChoice::ListUsers,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> i32 {
        match self {
            MenuChoice::AddBook => 1,
            MenuChoice::AddUser => 2,
            MenuChoice::IssueBook => 3,
            MenuChoice::ReturnBook => 4,
            MenuChoice::ListBooks => 5,
            MenuChoice::ListUsers => 6,
            MenuChoice::Exit => 7,
        }
    }

    pub fn from_number(number: i32) -> Option<MenuChoice> {
        MenuChoice::ALL.into_iter().find(|c| c.number() == number)
    }
}

impl Display for MenuChoice {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MenuChoice::AddBook => write!(f, "Add Book"),
            MenuChoice::AddUser => write!(f, "Add User"),
            MenuChoice::IssueBook => write!(f, "Issue Book"),
            MenuChoice::ReturnBook => write!(f, "Return Book"),
            MenuChoice::ListBooks => write!(f, "List All Books"),
            MenuChoice::ListUsers => write!(f, "List All Users"),
            MenuChoice::Exit => write!(f, "Exit"),
        }
    }
}

// What a single line typed at the choice prompt means.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuInput {
    Choice(MenuChoice),
    OutOfRange(i32),
    NotANumber,
}

impl MenuInput {
    // The line is taken as typed, so surrounding whitespace makes it invalid.
    pub fn parse(line: &str) -> MenuInput {
        match line.parse::<i32>() {
            Ok(number) => match MenuChoice::from_number(number) {
                Some(choice) => MenuInput::Choice(choice),
                None => MenuInput::OutOfRange(number),
            },
            Err(_) => MenuInput::NotANumber,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SessionState {
    Running,
    Terminated,
}

impl SessionState {
    // only Exit leaves the menu loop
    pub fn after(input: &MenuInput) -> SessionState {
        match input {
            MenuInput::Choice(MenuChoice::Exit) => SessionState::Terminated,
            _ => SessionState::Running,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::console::menu::{MenuChoice, MenuInput, SessionState};

    #[test]
    fn test_should_parse_choices() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuInput::Choice(choice), MenuInput::parse(choice.number().to_string().as_str()));
        }
        assert_eq!(MenuInput::Choice(MenuChoice::AddBook), MenuInput::parse("+1"));
        assert_eq!(MenuInput::Choice(MenuChoice::Exit), MenuInput::parse("007"));
    }

    #[test]
    fn test_should_parse_out_of_range() {
        assert_eq!(MenuInput::OutOfRange(0), MenuInput::parse("0"));
        assert_eq!(MenuInput::OutOfRange(8), MenuInput::parse("8"));
        assert_eq!(MenuInput::OutOfRange(-3), MenuInput::parse("-3"));
    }

    #[test]
    fn test_should_parse_invalid_numbers() {
        for line in ["abc", "", " 1", "1 ", "1.0", "2147483648", "one"] {
            assert_eq!(MenuInput::NotANumber, MenuInput::parse(line), "{:?}", line);
        }
    }

    #[test]
    fn test_should_only_terminate_on_exit() {
        assert_eq!(SessionState::Terminated, SessionState::after(&MenuInput::Choice(MenuChoice::Exit)));
        assert_eq!(SessionState::Running, SessionState::after(&MenuInput::Choice(MenuChoice::ListBooks)));
        assert_eq!(SessionState::Running, SessionState::after(&MenuInput::OutOfRange(7000)));
        assert_eq!(SessionState::Running, SessionState::after(&MenuInput::NotANumber));
    }

    #[test]
    fn test_should_label_choices() {
        assert_eq!("List All Books", MenuChoice::ListBooks.to_string());
        assert_eq!(Some(MenuChoice::ReturnBook), MenuChoice::from_number(4));
        assert_eq!(None, MenuChoice::from_number(9));
    }
}
