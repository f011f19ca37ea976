//! Состояние форм пользователя и поста.
//!
//! Форма остаётся в режиме редактирования, пока отправка не пройдёт
//! валидацию; тогда она отдаёт нормализованный черновик, а закрывает её
//! вызывающий код. Флаг `is_loading` принадлежит вызывающему и влияет только
//! на подписи и доступность полей.

use crate::domain::post::{NO_AUTHOR, Post, PostDraft, PostField, parse_author_id};
use crate::domain::user::{User, UserDraft, UserField};
use crate::domain::validation::{ValidationErrors, validate_post, validate_user};

/// Создание новой записи или редактирование записи с данным id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn editing_id(self) -> Option<i64> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id),
        }
    }

    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit(_))
    }
}

pub const SAVING_LABEL: &str = "Saving...";
pub const CANCEL_LABEL: &str = "Cancel";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    mode: FormMode,
    draft: UserDraft,
    errors: ValidationErrors,
}

impl UserForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: UserDraft::default(),
            errors: ValidationErrors::new(),
        }
    }

    pub fn edit(user: &User) -> Self {
        Self {
            mode: FormMode::Edit(user.id),
            draft: UserDraft::from(user),
            errors: ValidationErrors::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn value(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.draft.name,
            UserField::Username => &self.draft.username,
            UserField::Email => &self.draft.email,
        }
    }

    /// Меняет одно поле и снимает его ошибку.
    pub fn set_field(&mut self, field: UserField, value: impl Into<String>) {
        let value = value.into();
        match field {
            UserField::Name => self.draft.name = value,
            UserField::Username => self.draft.username = value,
            UserField::Email => self.draft.email = value,
        }
        self.errors.clear_field(field.as_str());
    }

    /// Проверяет черновик. При успехе возвращает обрезанные значения, иначе
    /// оставляет ошибки на форме и возвращает их.
    pub fn submit(&mut self) -> Result<UserDraft, ValidationErrors> {
        let errors = validate_user(&self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors = ValidationErrors::new();
        Ok(self.draft.normalized())
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            "Edit User"
        } else {
            "Add New User"
        }
    }

    pub fn controls_enabled(&self, is_loading: bool) -> bool {
        !is_loading
    }

    pub fn submit_label(&self, is_loading: bool) -> &'static str {
        match (is_loading, self.mode) {
            (true, _) => SAVING_LABEL,
            (false, FormMode::Edit(_)) => "Update User",
            (false, FormMode::Create) => "Create User",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    mode: FormMode,
    draft: PostDraft,
    errors: ValidationErrors,
}

impl PostForm {
    /// Новый пост; автор по умолчанию первый пользователь из списка.
    pub fn create(users: &[User]) -> Self {
        let user_id = users.first().map_or(NO_AUTHOR, |user| user.id);
        Self {
            mode: FormMode::Create,
            draft: PostDraft::new(user_id, String::new()),
            errors: ValidationErrors::new(),
        }
    }

    pub fn edit(post: &Post) -> Self {
        Self {
            mode: FormMode::Edit(post.id),
            draft: PostDraft::from(post),
            errors: ValidationErrors::new(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
        self.errors.clear_field(PostField::Title.as_str());
    }

    pub fn set_user_id(&mut self, user_id: i64) {
        self.draft.user_id = user_id;
        self.errors.clear_field(PostField::UserId.as_str());
    }

    /// Задаёт поле из сырого текста, как его отдаёт select или input.
    pub fn set_field(&mut self, field: PostField, raw: &str) {
        match field {
            PostField::Title => self.set_title(raw),
            PostField::UserId => self.set_user_id(parse_author_id(raw)),
        }
    }

    pub fn submit(&mut self) -> Result<PostDraft, ValidationErrors> {
        let errors = validate_post(&self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors = ValidationErrors::new();
        Ok(self.draft.normalized())
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            "Edit Post"
        } else {
            "Add New Post"
        }
    }

    pub fn controls_enabled(&self, is_loading: bool) -> bool {
        !is_loading
    }

    pub fn submit_label(&self, is_loading: bool) -> &'static str {
        match (is_loading, self.mode) {
            (true, _) => SAVING_LABEL,
            (false, FormMode::Edit(_)) => "Update Post",
            (false, FormMode::Create) => "Create Post",
        }
    }
}

/// Пункт выбора автора: `Name (@username)`.
pub fn author_option_label(user: &User) -> String {
    format!("{} (@{})", user.name, user.username)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leanne() -> User {
        User {
            id: 1,
            name: "Leanne Graham".to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
        }
    }

    #[test]
    fn edit_form_starts_from_existing_user() {
        let form = UserForm::edit(&leanne());

        assert_eq!(form.mode(), FormMode::Edit(1));
        assert_eq!(form.value(UserField::Username), "Bret");
        assert_eq!(form.title(), "Edit User");
        assert_eq!(form.submit_label(false), "Update User");
    }

    #[test]
    fn invalid_submit_keeps_errors_until_field_is_edited() {
        let mut form = UserForm::create();
        form.set_field(UserField::Name, "Leanne");

        let errors = form.submit().expect_err("username and email are missing");
        assert_eq!(errors.len(), 2);
        assert!(form.errors().contains("email"));

        form.set_field(UserField::Email, "a@b.c");
        assert!(!form.errors().contains("email"));
        assert!(form.errors().contains("username"));
    }

    #[test]
    fn valid_submit_returns_trimmed_payload() {
        let mut form = UserForm::create();
        form.set_field(UserField::Name, "  Leanne ");
        form.set_field(UserField::Username, " Bret");
        form.set_field(UserField::Email, "Sincere@april.biz  ");

        let payload = form.submit().expect("form is valid");
        assert_eq!(payload, UserDraft::new("Leanne", "Bret", "Sincere@april.biz"));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn loading_relabels_submit_for_both_modes() {
        assert_eq!(UserForm::create().submit_label(true), "Saving...");
        assert_eq!(UserForm::create().submit_label(false), "Create User");
        assert_eq!(PostForm::create(&[]).submit_label(true), "Saving...");
    }

    #[test]
    fn create_post_form_defaults_author_to_first_user() {
        let form = PostForm::create(&[leanne()]);
        assert_eq!(form.draft().user_id, 1);
        assert_eq!(form.title(), "Add New Post");

        let empty = PostForm::create(&[]);
        assert_eq!(empty.draft().user_id, NO_AUTHOR);
    }

    #[test]
    fn post_form_rejects_unparsable_author() {
        let mut form = PostForm::create(&[leanne()]);
        form.set_field(PostField::Title, "Hello");
        form.set_field(PostField::UserId, "nobody");

        let errors = form.submit().expect_err("author was cleared");
        assert_eq!(errors.get("userId"), Some("Please select a user"));

        form.set_field(PostField::UserId, "1");
        let payload = form.submit().expect("form is valid now");
        assert_eq!(payload, PostDraft::new(1, "Hello"));
    }

    #[test]
    fn editing_title_clears_only_its_error() {
        let mut form = PostForm::create(&[]);

        let errors = form.submit().expect_err("title and author are missing");
        assert_eq!(errors.len(), 2);

        form.set_title("x");
        assert!(!form.errors().contains("title"));
        assert_eq!(form.errors().get("userId"), Some("Please select a user"));
    }

    #[test]
    fn loading_disables_form_controls() {
        let form = PostForm::create(&[leanne()]);
        assert!(form.controls_enabled(false));
        assert!(!form.controls_enabled(true));
        assert!(!UserForm::create().controls_enabled(true));
    }

    #[test]
    fn edit_post_form_keeps_author() {
        let post = Post {
            id: 9,
            user_id: 4,
            title: "qui est esse".to_string(),
        };
        let form = PostForm::edit(&post);
        assert_eq!(form.mode().editing_id(), Some(9));
        assert_eq!(form.draft().user_id, 4);
        assert_eq!(form.submit_label(false), "Update Post");
    }

    #[test]
    fn author_option_label_shows_handle() {
        assert_eq!(author_option_label(&leanne()), "Leanne Graham (@Bret)");
    }
}
