//! Сериализация заголовка группы.

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::group_header::parser::GroupHeader;
use crate::types::{DELIMITER, GROUP_HEADER_CODE, TERMINATOR};

/// Writer для заголовка группы.
pub struct GroupHeaderWriter;

impl GroupHeaderWriter {
    /// Записывает заголовок в любой приемник, реализующий трейт Write.
    pub fn write_to<W: Write>(header: &GroupHeader, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", header)?;
        Ok(())
    }

    fn format_modifier(modifier: i64) -> String {
        if modifier > 0 {
            modifier.to_string()
        } else {
            String::new()
        }
    }
}

impl fmt::Display for GroupHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = DELIMITER;
        write!(
            f,
            "{GROUP_HEADER_CODE}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{TERMINATOR}",
            self.receiver,
            self.originator,
            self.group_status,
            self.as_of_date,
            self.as_of_time,
            self.currency_code,
            GroupHeaderWriter::format_modifier(self.as_of_date_modifier),
        )
    }
}

impl GroupHeader {
    /// Одна строка записи без перевода строки.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Записывает заголовок в любой приемник, реализующий трейт Write.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        GroupHeaderWriter::write_to(self, writer)
    }
}
