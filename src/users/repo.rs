use serde::{Deserialize, Serialize};

/// The stored shape of a user. `user_id` is assigned at creation and never
/// changes; the optional fields are always present, defaulting to "".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub lastname: String,
    pub dob: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub gender: String,
    pub email: String,
    pub phone_number: String,
}
