use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub admin: bool,
}

/// The logged-in user together with the authorities granted to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUserDto {
    pub user: UserDto,
    pub roles: Vec<String>,
}
