use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Поля пользователя из формы, без id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub email: String,
}

impl UserDraft {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    /// Копия с обрезанными строковыми полями.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }

    pub(crate) fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            username: self.username,
            email: self.email,
        }
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserField {
    Name,
    Username,
    Email,
}

impl UserField {
    pub const ALL: [UserField; 3] = [UserField::Name, UserField::Username, UserField::Email];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Username => "username",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserField {
    type Err = DashboardError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            _ => Err(DashboardError::UnknownField(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_trims_every_field() {
        let draft = UserDraft::new("  Leanne Graham ", "\tBret ", " sincere@april.biz\n");
        let normalized = draft.normalized();

        assert_eq!(normalized.name, "Leanne Graham");
        assert_eq!(normalized.username, "Bret");
        assert_eq!(normalized.email, "sincere@april.biz");
    }

    #[test]
    fn user_field_parses_case_insensitively() {
        assert_eq!("Email".parse::<UserField>().expect("known field"), UserField::Email);
        assert!(matches!(
            "phone".parse::<UserField>(),
            Err(DashboardError::UnknownField(field)) if field == "phone"
        ));
    }

    #[test]
    fn user_ignores_unknown_api_fields() {
        let raw = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "address": {"city": "Gwenborough"}
        }"#;

        let user: User = serde_json::from_str(raw).expect("user should parse");
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "Bret");
    }
}
