//! Парсер детали транзакции.

use crate::error::{Result, ValidationError};
use crate::field::FieldReader;
use crate::types::RecordType;
use crate::validate::{validate_amount, validate_funds_type, validate_type_code};

/// Деталь транзакции.
///
/// Формат: `16,<TypeCode>,<Amount>,<FundsType>[,<Composite>...]/`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionDetail {
    /// Код типа транзакции (необязательно).
    pub type_code: String,
    /// Сумма в минимальных единицах (необязательно).
    pub amount: String,
    /// Тип доступности средств (необязательно).
    pub funds_type: String,
    /// Составные поля в порядке чтения.
    pub composite: Vec<String>,
}

impl TransactionDetail {
    /// Создает пустую деталь транзакции.
    pub fn new() -> Self {
        Self::default()
    }

    /// Разбирает деталь транзакции в начале `data`.
    ///
    /// После трех фиксированных полей все оставшиеся до терминатора поля
    /// попадают в `composite`. Запись без терминатора, оборванная сразу после
    /// разделителя, считается усеченной. Возвращает запись и число
    /// прочитанных символов.
    pub fn parse(data: &str) -> Result<(Self, usize)> {
        let mut reader = FieldReader::new(data, RecordType::TransactionDetail)?;

        let mut detail = TransactionDetail {
            type_code: reader.string("TypeCode")?,
            amount: reader.string("Amount")?,
            funds_type: reader.string("FundsType")?,
            composite: Vec::new(),
        };

        while reader.has_pending_field() {
            detail.composite.push(reader.string("Composite")?);
        }

        if let Err(err) = detail.validate() {
            tracing::debug!(record = %err.record, field = err.field, "деталь транзакции не прошла проверку");
            return Err(err.into());
        }

        tracing::debug!(
            consumed = reader.consumed(),
            composite = detail.composite.len(),
            "разобрана деталь транзакции"
        );
        Ok((detail, reader.consumed()))
    }

    /// Проверяет непустые фиксированные поля. Составные поля не проверяются.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let checks: [(&'static str, &str, fn(&str) -> bool); 3] = [
            ("TypeCode", self.type_code.as_str(), validate_type_code),
            ("Amount", self.amount.as_str(), validate_amount),
            ("FundsType", self.funds_type.as_str(), validate_funds_type),
        ];

        for (field, value, is_valid) in checks {
            if !value.is_empty() && !is_valid(value) {
                return Err(ValidationError::new(RecordType::TransactionDetail, field));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, FieldError};

    #[test]
    fn test_parse_fixed_fields() {
        let line = "16,165,150000,Z/";
        let (detail, read) = TransactionDetail::parse(line).unwrap();
        assert_eq!(detail.type_code, "165");
        assert_eq!(detail.amount, "150000");
        assert_eq!(detail.funds_type, "Z");
        assert!(detail.composite.is_empty());
        assert_eq!(read, line.len());
    }

    #[test]
    fn test_parse_composite_in_order() {
        let (detail, read) = TransactionDetail::parse("16,,,Cr,memo1,memo2/").unwrap();
        assert_eq!(detail.composite, vec!["memo1", "memo2"]);
        assert_eq!(read, 20);
    }

    #[test]
    fn test_parse_empty_composite() {
        let (detail, _) = TransactionDetail::parse("16,165,1,Z,,x,/").unwrap();
        assert_eq!(detail.composite, vec!["", "x", ""]);
    }

    #[test]
    fn test_parse_stops_at_terminator() {
        let data = "16,165,1,Z,a/\n88,b/";
        let (detail, read) = TransactionDetail::parse(data).unwrap();
        assert_eq!(detail.composite, vec!["a"]);
        assert_eq!(&data[read..], "\n88,b/");
    }

    #[test]
    fn test_parse_truncated() {
        let err = TransactionDetail::parse("16,165,1").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedField { field: "Amount", source: FieldError::MissingDelimiter { .. }, .. }
        ));

        let err = TransactionDetail::parse("16,165,1,Z,abc").unwrap_err();
        assert_eq!(err.field(), Some("Composite"));
    }

    #[test]
    fn test_parse_dangling_delimiter() {
        let err = TransactionDetail::parse("16,,,Cr,").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedField { field: "Composite", source: FieldError::OffsetPastEnd { .. }, .. }
        ));

        let (detail, read) = TransactionDetail::parse("16,,,Cr,/").unwrap();
        assert_eq!(detail.composite, vec![""]);
        assert_eq!(read, 9);
    }

    #[test]
    fn test_parse_invalid_amount() {
        let err = TransactionDetail::parse("16,165,12.5,Z/").unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError { field: "Amount", .. })));
    }

    #[test]
    fn test_validate() {
        let mut detail = TransactionDetail::new();
        assert!(detail.validate().is_ok());

        detail.type_code = "16".into();
        assert_eq!(detail.validate().unwrap_err().field, "TypeCode");

        detail.type_code = "165".into();
        detail.funds_type = "ZZZ".into();
        assert_eq!(detail.validate().unwrap_err().field, "FundsType");

        detail.funds_type = "Z".into();
        detail.composite = vec!["anything, at all".into()];
        assert!(detail.validate().is_ok());
    }
}
