use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `dashboard-client`.
pub enum ClientError {
    /// Ошибка HTTP-транспорта или декодирования ответа (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Запрошенная коллекция не найдена.
    #[error("not found")]
    NotFound,

    /// Сервер ответил неуспешным статусом.
    #[error("unexpected status {status}: {message}")]
    Status {
        /// HTTP-статус ответа.
        status: u16,
        /// Тело ответа или описание статуса.
        message: String,
    },

    /// Некорректный базовый URL источника данных.
    #[error("invalid base url: {0:?}")]
    InvalidBaseUrl(String),
}

/// Результат операций `dashboard-client`.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            _ => {
                let message = message.unwrap_or_else(|| format!("http status {status}"));
                Self::Status {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}
