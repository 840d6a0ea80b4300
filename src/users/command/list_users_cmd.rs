use serde::Serialize;
use crate::core::command::{Command, CommandError};
use crate::users::domain::UserService;
use crate::users::domain::model::UserEntity;

pub(crate) struct ListUsersCommand {
    user_service: Box<dyn UserService>,
}

impl ListUsersCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>) -> Self {
        Self {
            user_service,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ListUsersCommandRequest {}

#[derive(Debug, Serialize)]
pub(crate) struct ListUsersCommandResponse {
    pub users: Vec<UserEntity>,
}

impl Command<ListUsersCommandRequest, ListUsersCommandResponse> for ListUsersCommand {
    fn execute(&self, _req: ListUsersCommandRequest) -> Result<ListUsersCommandResponse, CommandError> {
        Ok(ListUsersCommandResponse { users: self.user_service.list_users() })
    }
}
