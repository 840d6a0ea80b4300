pub mod add_user_cmd;
pub mod list_users_cmd;
