//! Модуль разбора и сериализации детали транзакции (запись 16).
//!
//! Хвост записи состоит из произвольного числа составных полей, поэтому при
//! записи длинная логическая запись переносится на строки-продолжения `88`.

pub mod parser;
pub mod writer;

pub use parser::TransactionDetail;
pub use writer::TransactionDetailWriter;
