use thiserror::Error;

/// Локальные ошибки библиотеки.
///
/// Сетевые сбои сюда не попадают: неудачный GET/WALK возвращается как `None`
/// (или пустой вектор), чтобы один недоступный принтер не обрывал пакет опросов.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrinterError {
    /// Неверное использование: не задан адрес, нулевой таймаут, кривой OID
    #[error("Ошибка конфигурации: {0}")]
    Configuration(String),

    /// Параллельные walk'и таблицы sub-unit вернули разное число строк
    #[error(
        "Несовпадение длины walk: names={names}, max={max_values}, actual={actual_values}"
    )]
    Aggregation {
        names: usize,
        max_values: usize,
        actual_values: usize,
    },
}

impl PrinterError {
    pub fn config(msg: impl Into<String>) -> Self {
        PrinterError::Configuration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PrinterError>;
