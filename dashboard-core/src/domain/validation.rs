use std::collections::BTreeMap;
use std::fmt;

use super::post::{NO_AUTHOR, PostDraft, PostField};
use super::user::{UserDraft, UserField};

/// Поле → сообщение, по записи на каждое неверное поле. Пусто значит валидно.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, &'static str>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.fields.get(field).copied()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.fields.iter().map(|(field, message)| (*field, *message))
    }

    pub(crate) fn insert(&mut self, field: &'static str, message: &'static str) {
        self.fields.insert(field, message);
    }

    pub(crate) fn clear_field(&mut self, field: &str) {
        self.fields.remove(field);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

pub fn validate_user(draft: &UserDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    require(&mut errors, UserField::Name.as_str(), &draft.name, "Name is required");
    require(
        &mut errors,
        UserField::Username.as_str(),
        &draft.username,
        "Username is required",
    );
    // Только наличие, формат адреса не проверяется.
    require(&mut errors, UserField::Email.as_str(), &draft.email, "Email is required");

    errors
}

pub fn validate_post(draft: &PostDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    require(&mut errors, PostField::Title.as_str(), &draft.title, "Title is required");
    if draft.user_id == NO_AUTHOR {
        errors.insert(PostField::UserId.as_str(), "Please select a user");
    }

    errors
}

fn require(errors: &mut ValidationErrors, field: &'static str, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errors.insert(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_user_draft_is_valid() {
        let draft = UserDraft::new("Leanne Graham", "Bret", "Sincere@april.biz");
        assert!(validate_user(&draft).is_empty());
    }

    #[test]
    fn user_draft_reports_exactly_the_missing_fields() {
        let draft = UserDraft::new("Leanne", "   ", "");
        let errors = validate_user(&draft);

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email", "username"]);
        assert_eq!(errors.get("username"), Some("Username is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn email_format_is_not_checked() {
        let draft = UserDraft::new("Leanne", "Bret", "not-an-address");
        assert!(validate_user(&draft).is_empty());
    }

    #[test]
    fn post_draft_without_author_or_title_reports_both() {
        let errors = validate_post(&PostDraft::new(NO_AUTHOR, "  "));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("userId"), Some("Please select a user"));
    }

    #[test]
    fn post_draft_with_author_and_title_is_valid() {
        assert!(validate_post(&PostDraft::new(3, "Hello")).is_empty());
    }

    #[test]
    fn display_joins_fields_in_order() {
        let errors = validate_post(&PostDraft::new(NO_AUTHOR, ""));
        assert_eq!(
            errors.to_string(),
            "title: Title is required; userId: Please select a user"
        );
    }
}
