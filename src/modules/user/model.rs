use serde::Deserialize;
use validator::Validate;

use crate::modules::user::schema::UserRole;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpModel {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignInModel {
    pub email: String,
    pub password: String,
}
