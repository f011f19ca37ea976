use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// id автора, означающий «пользователь не выбран».
pub const NO_AUTHOR: i64 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub user_id: i64,
    pub title: String,
}

impl PostDraft {
    pub fn new(user_id: i64, title: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
        }
    }

    pub fn normalized(&self) -> Self {
        Self {
            user_id: self.user_id,
            title: self.title.trim().to_string(),
        }
    }

    pub(crate) fn into_post(self, id: i64) -> Post {
        Post {
            id,
            user_id: self.user_id,
            title: self.title,
        }
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            user_id: post.user_id,
            title: post.title.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PostField {
    Title,
    UserId,
}

impl PostField {
    pub const ALL: [PostField; 2] = [PostField::UserId, PostField::Title];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::UserId => "userId",
        }
    }
}

impl fmt::Display for PostField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostField {
    type Err = DashboardError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "userid" | "user_id" | "author" => Ok(Self::UserId),
            _ => Err(DashboardError::UnknownField(raw.to_string())),
        }
    }
}

/// Разбирает ввод автора; всё, что не целое число, становится [`NO_AUTHOR`].
pub fn parse_author_id(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(NO_AUTHOR)
}
