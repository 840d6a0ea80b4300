use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::users::domain::UserService;
use crate::users::domain::service::UserServiceImpl;

pub(crate) fn create_user_service(config: &Configuration, store: &RepositoryStore) -> Box<dyn UserService> {
    Box::new(UserServiceImpl::new(config, store.users.clone(), store.publisher.clone()))
}
