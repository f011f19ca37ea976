//! Состояние дашборда: статус загрузки, вкладка, поиск и единственное
//! открытое окно.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, error, info, warn};

use crate::domain::EntityKind;
use crate::domain::post::Post;
use crate::domain::user::User;
use crate::error::DashboardError;
use crate::forms::{FormMode, PostForm, UserForm};
use crate::modal::{ConfirmDialog, Modal, Severity};
use crate::source::{DataSource, fetch_all};
use crate::store::{DeletedUser, EntityStore};
use crate::views::{PostCard, UserCard};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Ready,
    Failed { message: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Users,
    Posts,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Posts => "posts",
        }
    }

    pub fn kind(self) -> EntityKind {
        match self {
            Self::Users => EntityKind::User,
            Self::Posts => EntityKind::Post,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "users" | "user" => Ok(Self::Users),
            "posts" | "post" => Ok(Self::Posts),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

/// Что удалит открытый диалог подтверждения.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTarget {
    pub kind: EntityKind,
    pub id: i64,
}

impl DeleteTarget {
    pub fn dialog(&self) -> ConfirmDialog {
        let (title, message) = match self.kind {
            EntityKind::User => (
                "Delete User",
                "Are you sure you want to delete this user? This will also delete all posts by this user. This action cannot be undone.",
            ),
            EntityKind::Post => (
                "Delete Post",
                "Are you sure you want to delete this post? This action cannot be undone.",
            ),
        };
        ConfirmDialog::new(title, message)
            .with_confirm_text("Delete")
            .with_cancel_text("Cancel")
            .with_severity(Severity::Danger)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveModal {
    UserForm(UserForm),
    PostForm(PostForm),
    ConfirmDelete(DeleteTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deleted {
    User(DeletedUser),
    Post(Post),
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    status: FetchStatus,
    store: EntityStore,
    modal: Option<ActiveModal>,
    tab: Tab,
    search: String,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            status: FetchStatus::Loading,
            store: EntityStore::new(),
            modal: None,
            tab: Tab::default(),
            search: String::new(),
        }
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == FetchStatus::Ready
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Загружает обе коллекции и применяет результат.
    pub async fn load<S>(&mut self, source: &S)
    where
        S: DataSource + ?Sized,
    {
        self.status = FetchStatus::Loading;
        let result = fetch_all(source).await;
        self.finish_load(result);
    }

    /// Применяет результат загрузки. При ошибке хранилище пустое, а исходная
    /// ошибка уходит только в лог.
    pub fn finish_load<E: fmt::Display>(&mut self, result: Result<(Vec<User>, Vec<Post>), E>) {
        match result {
            Ok((users, posts)) => {
                self.store.load(users, posts);
                self.status = FetchStatus::Ready;
                info!("dashboard ready");
            }
            Err(err) => {
                error!(error = %err, "error fetching data");
                self.store = EntityStore::new();
                self.status = FetchStatus::Failed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                };
            }
        }
    }

    /// Сбрасывает локальное состояние в `Loading`; загрузку повторяет вызывающий.
    pub fn reload(&mut self) {
        info!("dashboard reset for reload");
        *self = Self::new();
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search_placeholder(&self) -> String {
        format!("Search {}...", self.tab)
    }

    pub fn visible_users(&self) -> Vec<&User> {
        self.store.filtered_users(&self.search)
    }

    pub fn visible_posts(&self) -> Vec<&Post> {
        self.store.filtered_posts(&self.search)
    }

    pub fn user_cards(&self) -> Vec<UserCard> {
        self.visible_users()
            .into_iter()
            .map(|user| UserCard::from_user(user, &self.store))
            .collect()
    }

    pub fn post_cards(&self) -> Vec<PostCard> {
        self.visible_posts()
            .into_iter()
            .map(|post| PostCard::from_post(post, &self.store))
            .collect()
    }

    /// Подпись вкладки с числом найденных записей, например `Users (10)`.
    pub fn tab_label(&self, tab: Tab) -> String {
        match tab {
            Tab::Users => format!("Users ({})", self.visible_users().len()),
            Tab::Posts => format!("Posts ({})", self.visible_posts().len()),
        }
    }

    pub fn active_modal(&self) -> Option<&ActiveModal> {
        self.modal.as_ref()
    }

    pub fn is_user_modal_open(&self) -> bool {
        matches!(self.modal, Some(ActiveModal::UserForm(_)))
    }

    pub fn is_post_modal_open(&self) -> bool {
        matches!(self.modal, Some(ActiveModal::PostForm(_)))
    }

    pub fn is_confirm_dialog_open(&self) -> bool {
        matches!(self.modal, Some(ActiveModal::ConfirmDelete(_)))
    }

    /// Редактируемый пользователь; `None`, если форма закрыта или создаёт нового.
    pub fn editing_user(&self) -> Option<&User> {
        let id = self.user_form()?.mode().editing_id()?;
        self.store.user(id)
    }

    pub fn editing_post(&self) -> Option<&Post> {
        let id = self.post_form()?.mode().editing_id()?;
        self.store.post(id)
    }

    pub fn delete_target(&self) -> Option<DeleteTarget> {
        match self.modal {
            Some(ActiveModal::ConfirmDelete(target)) => Some(target),
            _ => None,
        }
    }

    pub fn user_form(&self) -> Option<&UserForm> {
        match &self.modal {
            Some(ActiveModal::UserForm(form)) => Some(form),
            _ => None,
        }
    }

    pub fn user_form_mut(&mut self) -> Option<&mut UserForm> {
        match &mut self.modal {
            Some(ActiveModal::UserForm(form)) => Some(form),
            _ => None,
        }
    }

    pub fn post_form(&self) -> Option<&PostForm> {
        match &self.modal {
            Some(ActiveModal::PostForm(form)) => Some(form),
            _ => None,
        }
    }

    pub fn post_form_mut(&mut self) -> Option<&mut PostForm> {
        match &mut self.modal {
            Some(ActiveModal::PostForm(form)) => Some(form),
            _ => None,
        }
    }

    pub fn user_modal(&self) -> Option<Modal<&UserForm>> {
        let form = self.user_form()?;
        Modal::when_open(self.is_user_modal_open(), form.title(), || form)
    }

    pub fn post_modal(&self) -> Option<Modal<&PostForm>> {
        let form = self.post_form()?;
        Modal::when_open(self.is_post_modal_open(), form.title(), || form)
    }

    pub fn confirm_dialog(&self) -> Option<ConfirmDialog> {
        self.delete_target().map(|target| target.dialog())
    }

    /// Открывает форму пользователя: `None` создаёт, `Some(id)` редактирует.
    /// Заменяет любое открытое окно.
    pub fn open_user_form(&mut self, id: Option<i64>) -> Result<(), DashboardError> {
        self.require_ready()?;
        let form = match id {
            None => UserForm::create(),
            Some(id) => UserForm::edit(self.store.user(id).ok_or(DashboardError::NotFound {
                kind: EntityKind::User,
                id,
            })?),
        };
        debug!(mode = ?form.mode(), "user form opened");
        self.modal = Some(ActiveModal::UserForm(form));
        Ok(())
    }

    pub fn open_post_form(&mut self, id: Option<i64>) -> Result<(), DashboardError> {
        self.require_ready()?;
        let form = match id {
            None => PostForm::create(self.store.users()),
            Some(id) => PostForm::edit(self.store.post(id).ok_or(DashboardError::NotFound {
                kind: EntityKind::Post,
                id,
            })?),
        };
        debug!(mode = ?form.mode(), "post form opened");
        self.modal = Some(ActiveModal::PostForm(form));
        Ok(())
    }

    pub fn open_delete_dialog(&mut self, kind: EntityKind, id: i64) -> Result<(), DashboardError> {
        self.require_ready()?;
        let exists = match kind {
            EntityKind::User => self.store.user(id).is_some(),
            EntityKind::Post => self.store.post(id).is_some(),
        };
        if !exists {
            return Err(DashboardError::NotFound { kind, id });
        }
        debug!(%kind, id, "delete dialog opened");
        self.modal = Some(ActiveModal::ConfirmDelete(DeleteTarget { kind, id }));
        Ok(())
    }

    /// Проверяет и применяет открытую форму пользователя. При ошибках форма
    /// остаётся открытой, при успехе закрываются все окна.
    pub fn submit_user_form(&mut self) -> Result<User, DashboardError> {
        let Some(form) = self.user_form_mut() else {
            warn!("submit without an open user form");
            return Err(DashboardError::NoActiveForm(EntityKind::User));
        };
        let payload = form.submit().map_err(DashboardError::Validation)?;
        let mode = form.mode();

        let result = match mode {
            FormMode::Create => Ok(self.store.create_user(payload)),
            FormMode::Edit(id) => self.store.update_user(id, payload).ok_or(DashboardError::NotFound {
                kind: EntityKind::User,
                id,
            }),
        };
        self.close_all();
        result
    }

    pub fn submit_post_form(&mut self) -> Result<Post, DashboardError> {
        let Some(form) = self.post_form_mut() else {
            warn!("submit without an open post form");
            return Err(DashboardError::NoActiveForm(EntityKind::Post));
        };
        let payload = form.submit().map_err(DashboardError::Validation)?;
        let mode = form.mode();

        let result = match mode {
            FormMode::Create => Ok(self.store.create_post(payload)),
            FormMode::Edit(id) => self.store.update_post(id, payload).ok_or(DashboardError::NotFound {
                kind: EntityKind::Post,
                id,
            }),
        };
        self.close_all();
        result
    }

    /// Выполняет удаление, для которого открыт диалог, и закрывает его.
    pub fn confirm_delete(&mut self) -> Result<Deleted, DashboardError> {
        let Some(target) = self.delete_target() else {
            warn!("confirm without an open dialog");
            return Err(DashboardError::NoActiveDialog);
        };

        let store = &mut self.store;
        let deleted = target.dialog().confirm(|| match target.kind {
            EntityKind::User => store.delete_user(target.id).map(Deleted::User),
            EntityKind::Post => store.delete_post(target.id).map(Deleted::Post),
        });

        self.close_all();
        deleted.ok_or(DashboardError::NotFound {
            kind: target.kind,
            id: target.id,
        })
    }

    /// Единственный способ закрыть окна: сбрасывает окно, незавершённое
    /// редактирование и выбор для удаления разом.
    pub fn close_all(&mut self) {
        if self.modal.take().is_some() {
            debug!("modals closed");
        }
    }

    fn require_ready(&self) -> Result<(), DashboardError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(DashboardError::NotReady)
        }
    }
}
