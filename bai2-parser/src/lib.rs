//! # BAI2 Parser
//!
//! Кодек записей банковских выписок в формате BAI2: разбор строки с полями,
//! разделенными запятыми, в типизированную запись и обратная сериализация,
//! включая перенос длинных записей на строки-продолжения.
//!
//! ## Поддерживаемые записи
//!
//! - **02** - заголовок группы ([`GroupHeader`])
//! - **16** - деталь транзакции ([`TransactionDetail`])
//! - **88** - строка-продолжение (при записи и через [`join_continuations`])
//!
//! Разбор файла целиком (заголовок и итоги файла, счета) остается за
//! вызывающим кодом: он передает текст, начинающийся с записи, и получает
//! запись вместе с числом прочитанных символов.
//!
//! ## Пример использования
//!
//! ```
//! use bai2_parser::{GroupHeader, TransactionDetail};
//!
//! let (header, read) = GroupHeader::parse("02,RECV,ORIG,1,220101,,,/").unwrap();
//! assert_eq!(header.originator, "ORIG");
//! assert_eq!(read, 25);
//!
//! let (detail, _) = TransactionDetail::parse("16,,,Cr,memo1,memo2/").unwrap();
//! assert_eq!(detail.composite, vec!["memo1", "memo2"]);
//! assert_eq!(detail.serialize(Some(15)), "16,,,Cr,memo1/\n88,memo2/");
//! ```

pub mod continuation;
pub mod error;
pub mod field;
pub mod group_header;
pub mod transaction_detail;
pub mod types;
pub mod validate;

pub use continuation::join_continuations;
pub use error::{Error, FieldError, Result, ValidationError};
pub use group_header::{GroupHeader, GroupHeaderWriter};
pub use transaction_detail::{TransactionDetail, TransactionDetailWriter};
pub use types::*;

/// Любая запись, которую умеет разбирать кодек.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Заголовок группы (02)
    GroupHeader(GroupHeader),
    /// Деталь транзакции (16)
    TransactionDetail(TransactionDetail),
}

impl Record {
    /// Тип записи.
    pub fn record_type(&self) -> RecordType {
        match self {
            Record::GroupHeader(_) => RecordType::GroupHeader,
            Record::TransactionDetail(_) => RecordType::TransactionDetail,
        }
    }

    /// Проверяет запись повторно.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        match self {
            Record::GroupHeader(header) => header.validate(),
            Record::TransactionDetail(detail) => detail.validate(),
        }
    }

    /// Сериализует запись. Лимит длины строки влияет только на деталь транзакции.
    pub fn serialize(&self, max_line_length: Option<usize>) -> String {
        match self {
            Record::GroupHeader(header) => header.serialize(),
            Record::TransactionDetail(detail) => detail.serialize(max_line_length),
        }
    }
}

impl From<GroupHeader> for Record {
    fn from(header: GroupHeader) -> Self {
        Record::GroupHeader(header)
    }
}

impl From<TransactionDetail> for Record {
    fn from(detail: TransactionDetail) -> Self {
        Record::TransactionDetail(detail)
    }
}

/// Разбирает запись, тип которой определяется по коду в начале строки.
pub fn parse_record(data: &str) -> Result<(Record, usize)> {
    let code = data.get(..2).unwrap_or(data);

    match RecordType::from_code(code) {
        Some(RecordType::GroupHeader) => {
            let (header, read) = GroupHeader::parse(data)?;
            Ok((header.into(), read))
        }
        Some(RecordType::TransactionDetail) => {
            let (detail, read) = TransactionDetail::parse(data)?;
            Ok((detail.into(), read))
        }
        None => Err(Error::UnknownRecordCode(code.to_string())),
    }
}
