use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::books::domain::model::BookEntity;
use crate::core::library::CheckoutStatus;
use crate::users::domain::model::UserEntity;
use crate::utils::date::serializer;

// CheckoutDto is the receipt of an issue or return, holding both sides as stored
// after the transition.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct CheckoutDto {
    pub checkout_id: String,
    pub branch_id: String,
    pub checkout_status: CheckoutStatus,
    pub book: BookEntity,
    pub user: UserEntity,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl CheckoutDto {
    pub fn new(branch_id: &str, status: CheckoutStatus, book: BookEntity, user: UserEntity) -> Self {
        Self {
            checkout_id: Uuid::new_v4().to_string(),
            branch_id: branch_id.to_string(),
            checkout_status: status,
            book,
            user,
            created_at: Utc::now().naive_utc(),
        }
    }
}
