//! Модуль обработки ошибок библиотеки.

use thiserror::Error as ThisError;

use crate::types::RecordType;

/// Ошибка извлечения отдельного поля из строки.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum FieldError {
    /// Смещение вышло за пределы строки.
    #[error("смещение {offset} за пределами строки длины {len}")]
    OffsetPastEnd {
        /// Смещение начала поля.
        offset: usize,
        /// Длина строки.
        len: usize,
    },
    /// Ни разделителя, ни терминатора до конца строки.
    #[error("нет разделителя после смещения {offset}")]
    MissingDelimiter {
        /// Смещение начала поля.
        offset: usize,
    },
    /// Непустое значение не является целым числом.
    #[error("ожидалось целое число, получено '{value}'")]
    InvalidInteger {
        /// Исходный текст поля.
        value: String,
    },
    /// Запись короче минимально допустимой.
    #[error("запись слишком короткая: {len} символов")]
    TooShort {
        /// Длина записи.
        len: usize,
    },
}

/// Нарушение правила предметной области для корректно разобранного поля.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{record}: недопустимое значение поля {field}")]
pub struct ValidationError {
    /// Тип записи.
    pub record: RecordType,
    /// Имя поля.
    pub field: &'static str,
}

impl ValidationError {
    pub(crate) fn new(record: RecordType, field: &'static str) -> Self {
        Self { record, field }
    }
}

/// Основной тип ошибки библиотеки.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Поле не удалось извлечь из строки.
    #[error("{record}: не удалось разобрать поле {field}: {source}")]
    MalformedField {
        /// Тип записи.
        record: RecordType,
        /// Имя поля.
        field: &'static str,
        /// Причина.
        source: FieldError,
    },

    /// Префикс строки не совпадает с ожидаемым кодом записи.
    #[error("{record}: неверный код записи: ожидался '{expected}', получен '{found}'")]
    RecordCodeMismatch {
        /// Тип записи.
        record: RecordType,
        /// Ожидаемый код.
        expected: &'static str,
        /// Фактический префикс.
        found: String,
    },

    /// Ошибка валидации поля.
    #[error("Ошибка валидации: {0}")]
    Validation(#[from] ValidationError),

    /// Строка-продолжение без предшествующей записи.
    #[error("Строка-продолжение {line} не относится ни к одной записи")]
    OrphanContinuation {
        /// Номер строки (с 1).
        line: usize,
    },

    /// Неизвестный код записи.
    #[error("Неизвестный код записи: '{0}'")]
    UnknownRecordCode(String),

    /// Ошибка ввода/вывода
    #[error("Ошибка ввода/вывода: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Имя поля, на котором произошла ошибка, если оно известно.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Error::MalformedField { field, .. } => Some(*field),
            Error::Validation(err) => Some(err.field),
            Error::RecordCodeMismatch { .. } => Some("RecordCode"),
            _ => None,
        }
    }

    /// Тип записи, при разборе которой произошла ошибка.
    pub fn record(&self) -> Option<RecordType> {
        match self {
            Error::MalformedField { record, .. } | Error::RecordCodeMismatch { record, .. } => {
                Some(*record)
            }
            Error::Validation(err) => Some(err.record),
            _ => None,
        }
    }
}

/// Тип Result с ошибкой библиотеки.
pub type Result<T> = std::result::Result<T, Error>;
