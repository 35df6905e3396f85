use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// The hardcoded demo account every conversation belongs to
    pub fn demo() -> Self {
        Self {
            id: byda_types::DEMO_USER_ID.to_string(),
            username: "demo".to_string(),
            password: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn into_user(self) -> User {
        User {
            id: uuid::Uuid::new_v4().to_string(),
            username: self.username,
            password: self.password,
        }
    }
}
