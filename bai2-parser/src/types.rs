//! Базовые константы и типы формата BAI2.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Коды записей
// =============================================================================

/// Код записи заголовка группы.
pub const GROUP_HEADER_CODE: &str = "02";
/// Код записи детали транзакции.
pub const TRANSACTION_DETAIL_CODE: &str = "16";
/// Код строки-продолжения.
pub const CONTINUATION_CODE: &str = "88";

// =============================================================================
// Разделители
// =============================================================================

/// Разделитель полей.
pub const DELIMITER: char = ',';
/// Терминатор записи.
pub const TERMINATOR: char = '/';

/// Длина кода записи вместе с разделителем после него.
pub const RECORD_CODE_WIDTH: usize = 3;

/// Стандартная ширина физической строки BAI2.
pub const DEFAULT_PHYSICAL_RECORD_LENGTH: usize = 80;

// =============================================================================
// Типы записей
// =============================================================================

/// Тип записи, которую умеет разбирать кодек.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// Заголовок группы (02)
    GroupHeader,
    /// Деталь транзакции (16)
    TransactionDetail,
}

impl RecordType {
    /// Двухсимвольный код записи.
    pub fn code(self) -> &'static str {
        match self {
            RecordType::GroupHeader => GROUP_HEADER_CODE,
            RecordType::TransactionDetail => TRANSACTION_DETAIL_CODE,
        }
    }

    /// Определяет тип записи по коду.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            GROUP_HEADER_CODE => Some(RecordType::GroupHeader),
            TRANSACTION_DETAIL_CODE => Some(RecordType::TransactionDetail),
            _ => None,
        }
    }

    /// Имя типа для диагностики.
    pub fn name(self) -> &'static str {
        match self {
            RecordType::GroupHeader => "GroupHeader",
            RecordType::TransactionDetail => "TransactionDetail",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_code(s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_lookup() {
        assert_eq!(RecordType::from_code("02"), Some(RecordType::GroupHeader));
        assert_eq!(RecordType::from_code("16"), Some(RecordType::TransactionDetail));
        assert_eq!(RecordType::from_code("88"), None);
        assert_eq!("16".parse::<RecordType>(), Ok(RecordType::TransactionDetail));
    }

    #[test]
    fn test_code_roundtrip() {
        for record in [RecordType::GroupHeader, RecordType::TransactionDetail] {
            assert_eq!(RecordType::from_code(record.code()), Some(record));
        }
    }
}
