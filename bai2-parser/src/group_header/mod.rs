//! Модуль разбора и сериализации заголовка группы (запись 02).
//!
//! Заголовок открывает группу счетов одного отправителя и задает общую
//! для группы дату, время и валюту.

pub mod parser;
pub mod writer;

pub use parser::GroupHeader;
pub use writer::GroupHeaderWriter;
