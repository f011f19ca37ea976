//! Источник данных дашборда поверх публичного placeholder REST API.
//!
//! Реализует [`dashboard_core::DataSource`] через `reqwest`: только чтение
//! коллекций пользователей и постов. Все изменения остаются локальными в
//! `dashboard-core`, обратно на сервер ничего не отправляется.
#![warn(missing_docs)]

mod error;
mod http_client;

pub use error::{ClientError, ClientResult};
pub use http_client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT, HttpClient};

/// Адрес API по умолчанию.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
