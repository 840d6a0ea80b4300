use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CheckoutDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    book_id: String,
    user_id: String,
}

impl ReturnBookCommandRequest {
    pub fn new(book_id: String, user_id: String) -> Self {
        Self {
            book_id,
            user_id,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub(crate) checkout: CheckoutDto,
}

impl ReturnBookCommandResponse {
    pub fn new(checkout: CheckoutDto) -> Self {
        Self {
            checkout,
        }
    }
}

impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        self.checkout_service.returned(req.book_id.as_str(), req.user_id.as_str())
            .map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}
