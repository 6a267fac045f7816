//! Сериализация детали транзакции с переносом на строки-продолжения.

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::transaction_detail::parser::TransactionDetail;
use crate::types::{CONTINUATION_CODE, DELIMITER, TERMINATOR, TRANSACTION_DETAIL_CODE};

/// Writer для детали транзакции.
pub struct TransactionDetailWriter;

impl TransactionDetailWriter {
    /// Записывает деталь транзакции в любой приемник, реализующий трейт Write.
    ///
    /// При `max_line_length` каждая физическая строка, кроме строк с одним
    /// слишком длинным составным полем, не длиннее лимита.
    pub fn write_to<W: Write>(
        detail: &TransactionDetail,
        writer: &mut W,
        max_line_length: Option<usize>,
    ) -> Result<()> {
        for line in Self::wrap_lines(detail, max_line_length) {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Разбивает запись на физические строки, каждая заканчивается терминатором.
    ///
    /// `None` и `Some(0)` отключают перенос. Поле переносится на новую строку
    /// `88`, если вместе с разделителем и терминатором не помещается в
    /// текущую; строка-продолжение всегда получает хотя бы одно поле.
    pub fn wrap_lines(detail: &TransactionDetail, max_line_length: Option<usize>) -> Vec<String> {
        let limit = max_line_length.filter(|&max| max > 0);
        let head = Self::head(detail);

        let (mut lines, mut current) = detail.composite.iter().fold(
            (Vec::new(), head),
            |(mut lines, mut current), field| {
                if let Some(max) = limit {
                    let has_fields = current != CONTINUATION_CODE;
                    if has_fields && current.len() + field.len() + 2 > max {
                        current.push(TERMINATOR);
                        tracing::trace!(len = current.len(), "перенос детали транзакции");
                        lines.push(current);
                        current = CONTINUATION_CODE.to_string();
                    }
                }

                current.push(DELIMITER);
                current.push_str(field);
                (lines, current)
            },
        );

        current.push(TERMINATOR);
        lines.push(current);
        lines
    }

    fn head(detail: &TransactionDetail) -> String {
        let d = DELIMITER;
        format!(
            "{TRANSACTION_DETAIL_CODE}{d}{}{d}{}{d}{}",
            detail.type_code, detail.amount, detail.funds_type
        )
    }
}

impl fmt::Display for TransactionDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(None))
    }
}

impl TransactionDetail {
    /// Текст записи; при заданном лимите строки разделены `\n`.
    pub fn serialize(&self, max_line_length: Option<usize>) -> String {
        self.wrap_lines(max_line_length).join("\n")
    }

    /// Физические строки записи при заданном лимите длины.
    pub fn wrap_lines(&self, max_line_length: Option<usize>) -> Vec<String> {
        TransactionDetailWriter::wrap_lines(self, max_line_length)
    }

    /// Записывает деталь транзакции в любой приемник, реализующий трейт Write.
    pub fn write_to<W: Write>(&self, writer: &mut W, max_line_length: Option<usize>) -> Result<()> {
        TransactionDetailWriter::write_to(self, writer, max_line_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(composite: &[&str]) -> TransactionDetail {
        TransactionDetail {
            type_code: "165".into(),
            amount: "1000".into(),
            funds_type: "Z".into(),
            composite: composite.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_serialize_unwrapped() {
        let record = detail(&["a", "b"]);
        assert_eq!(record.serialize(None), "16,165,1000,Z,a,b/");
        assert_eq!(record.serialize(Some(0)), "16,165,1000,Z,a,b/");
        assert_eq!(record.to_string(), "16,165,1000,Z,a,b/");
    }

    #[test]
    fn test_serialize_no_composite() {
        assert_eq!(detail(&[]).serialize(Some(10)), "16,165,1000,Z/");
        assert_eq!(TransactionDetail::new().serialize(None), "16,,,/");
    }

    #[test]
    fn test_wrap() {
        // "16,165,1000,Z" занимает 13 символов
        let record = detail(&["aaaa", "bbbb", "cccc"]);
        assert_eq!(
            record.wrap_lines(Some(20)),
            vec!["16,165,1000,Z,aaaa/", "88,bbbb,cccc/"]
        );
        assert_eq!(record.serialize(Some(20)), "16,165,1000,Z,aaaa/\n88,bbbb,cccc/");
    }

    #[test]
    fn test_wrap_exact_fit() {
        let record = detail(&["aaaaa"]);
        assert_eq!(record.wrap_lines(Some(20)), vec!["16,165,1000,Z,aaaaa/"]);
        assert_eq!(record.wrap_lines(Some(19)), vec!["16,165,1000,Z/", "88,aaaaa/"]);
    }

    #[test]
    fn test_oversized_field_gets_own_line() {
        let record = detail(&["a", "0123456789012345", "b"]);
        assert_eq!(
            record.wrap_lines(Some(16)),
            vec!["16,165,1000,Z,a/", "88,0123456789012345/", "88,b/"]
        );
    }

    #[test]
    fn test_lines_within_limit() {
        let record = detail(&["alpha", "beta", "gamma", "delta", "epsilon", ""]);
        let lines = record.wrap_lines(Some(18));
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 18, "{line}");
            assert!(line.ends_with(TERMINATOR));
        }
        assert!(lines[0].starts_with("16,"));
        assert!(lines[1..].iter().all(|l| l.starts_with("88,")));
    }

    #[test]
    fn test_write_to() {
        let mut out = Vec::new();
        detail(&["aaaa", "bbbb"]).write_to(&mut out, Some(20)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "16,165,1000,Z,aaaa/\n88,bbbb/\n");
    }
}
