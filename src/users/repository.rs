use crate::core::lookup::matches_id;
use crate::core::repository::{MemoryRepository, Repository};
use crate::users::domain::model::UserEntity;

pub(crate) trait UserRepository: Repository<UserEntity> {
    // first user in insertion order whose identifier matches, ignoring case
    fn find_by_user_id(&self, user_id: &str) -> Option<UserEntity>;
}

impl UserRepository for MemoryRepository<UserEntity> {
    fn find_by_user_id(&self, user_id: &str) -> Option<UserEntity> {
        self.find_first(&|u: &UserEntity| matches_id(u.user_id.as_str(), user_id))
    }
}
