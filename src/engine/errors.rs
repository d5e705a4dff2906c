use thiserror::Error;

use crate::domain::ConfigError;

/// Фатальные ошибки реплея. Возникают только при создании сессии,
/// во время шагов реплей не падает.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Ошибка конфигурации: {0}")]
    Configuration(#[from] ConfigError),
}

/// Почему токен не удалось разобрать.
///
/// Не фатально: `ActionLogParser::parse` превращает любую такую ошибку
/// в `Action::Unrecognized`, а в описании шага показывается исходный токен.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Нераспознанный токен: {0}")]
    Unrecognized(String),

    #[error("Некорректная ссылка на игрока в токене: {0}")]
    MalformedPlayerReference(String),
}
