use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct IssueBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl IssueBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueBookCommandRequest {
    book_id: String,
    user_id: String,
}

impl IssueBookCommandRequest {
    pub fn new(book_id: String, user_id: String) -> Self {
        Self {
            book_id,
            user_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct IssueBookCommandResponse {
    pub(crate) checkout: CheckoutDto,
}

impl IssueBookCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }
}

impl Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand {
    fn execute(&self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        self.checkout_service.issue(req.book_id.as_str(), req.user_id.as_str())
            .map_err(CommandError::from).map(IssueBookCommandResponse::new)
    }
}
