use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::users::domain::UserService;
use crate::users::domain::model::UserEntity;

pub(crate) struct AddUserCommand {
    user_service: Box<dyn UserService>,
}

impl AddUserCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>) -> Self {
        Self {
            user_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddUserCommandRequest {
    pub(crate) user_id: String,
    pub(crate) name: String,
}

impl AddUserCommandRequest {
    pub fn new(user_id: &str, name: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: name.to_string(),
        }
    }

    pub fn build_user(&self) -> UserEntity {
        UserEntity::new(self.user_id.as_str(), self.name.as_str())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddUserCommandResponse {
    pub user: UserEntity,
}

impl AddUserCommandResponse {
    pub fn new(user: UserEntity) -> Self {
        Self {
            user,
        }
    }
}

impl Command<AddUserCommandRequest, AddUserCommandResponse> for AddUserCommand {
    fn execute(&self, req: AddUserCommandRequest) -> Result<AddUserCommandResponse, CommandError> {
        let user = req.build_user();
        self.user_service.add_user(&user).map_err(CommandError::from).map(AddUserCommandResponse::new)
    }
}
