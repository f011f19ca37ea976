use dashboard_core::{Dashboard, DashboardError};
use leptos::prelude::*;

/// Всё состояние страницы живёт в одном `Dashboard`; компоненты читают
/// его через `with` и меняют через `update`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) dashboard: RwSignal<Dashboard>,
    pub(crate) error: RwSignal<Option<String>>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            dashboard: RwSignal::new(Dashboard::new()),
            error: RwSignal::new(None),
        }
    }

    pub(crate) fn set_error(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    pub(crate) fn clear_error(&self) {
        self.error.set(None);
    }

    /// Применяет действие к дашборду. Ошибку валидации форма показывает
    /// сама, остальные попадают в баннер.
    pub(crate) fn apply<T>(&self, action: impl FnOnce(&mut Dashboard) -> Result<T, DashboardError>) {
        let result = self.dashboard.try_update(action);
        match result {
            Some(Ok(_)) | Some(Err(DashboardError::Validation(_))) => self.clear_error(),
            Some(Err(err)) => self.set_error(err.to_string()),
            None => {}
        }
    }
}
