use std::rc::Rc;
use tracing::debug;
use crate::core::domain::Configuration;
use crate::core::events::{branch_metadata, DomainEvent};
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::users::domain::UserService;
use crate::users::domain::model::UserEntity;
use crate::users::repository::UserRepository;

pub(crate) struct UserServiceImpl {
    branch_id: String,
    user_repository: Rc<dyn UserRepository>,
    events_publisher: Rc<dyn EventPublisher>,
}

impl UserServiceImpl {
    pub(crate) fn new(config: &Configuration, user_repository: Rc<dyn UserRepository>,
                      events_publisher: Rc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            user_repository,
            events_publisher,
        }
    }
}

impl UserService for UserServiceImpl {
    fn add_user(&self, user: &UserEntity) -> LibraryResult<UserEntity> {
        self.user_repository.create(user)?;
        self.events_publisher.publish(&DomainEvent::added(
            "user_added", "users", user.record_id.as_str(), &branch_metadata(&self.branch_id), user)?)?;
        Ok(user.clone())
    }

    fn update_user(&self, user: &UserEntity) -> LibraryResult<UserEntity> {
        self.user_repository.update(user)?;
        self.user_repository.get(user.record_id.as_str())
    }

    fn find_user_by_id(&self, id: &str) -> Option<UserEntity> {
        let user = self.user_repository.find_by_user_id(id);
        debug!(user_id = id, found = user.is_some(), "user lookup");
        user
    }

    fn list_users(&self) -> Vec<UserEntity> {
        self.user_repository.query()
    }
}
