//! Логика дашборда пользователей и постов.
//!
//! Хранит коллекции, загруженные из [`DataSource`] (только чтение), проверяет
//! черновики форм, локально создаёт, меняет и удаляет записи (удаление
//! пользователя удаляет и его посты) и следит за открытым окном. Обратно в
//! источник ничего не пишется.

pub mod controller;
pub mod domain;
pub mod error;
pub mod forms;
pub mod modal;
pub mod source;
pub mod store;
pub mod views;

pub use controller::{
    ActiveModal, Dashboard, DeleteTarget, Deleted, FetchStatus, LOAD_FAILED_MESSAGE, Tab,
};
pub use domain::EntityKind;
pub use domain::post::{NO_AUTHOR, Post, PostDraft, PostField};
pub use domain::user::{User, UserDraft, UserField};
pub use domain::validation::{ValidationErrors, validate_post, validate_user};
pub use error::DashboardError;
pub use forms::{FormMode, PostForm, UserForm, author_option_label};
pub use modal::{ConfirmDialog, Modal, Severity};
pub use source::{DataSource, fetch_all};
pub use store::{DeletedUser, EntityStore};
pub use views::{PostCard, UserCard};
