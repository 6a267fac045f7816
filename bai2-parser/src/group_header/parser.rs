//! Парсер заголовка группы.

use std::ops::RangeInclusive;

use crate::error::{Result, ValidationError};
use crate::field::FieldReader;
use crate::types::RecordType;
use crate::validate::{validate_currency_code, validate_date, validate_time};

/// Допустимые значения статуса группы: 1 обновление, 2 удаление,
/// 3 исправление, 4 тестовая группа (0 допускается как "не указан").
pub const GROUP_STATUS_RANGE: RangeInclusive<i64> = 0..=4;

/// Допустимые значения модификатора даты: 1-4 промежуточные и итоговые
/// данные за предыдущий или текущий день, 0 означает "не указан".
pub const AS_OF_DATE_MODIFIER_RANGE: RangeInclusive<i64> = 0..=4;

/// Заголовок группы.
///
/// Формат: `02,<Receiver>,<Originator>,<GroupStatus>,<AsOfDate>,<AsOfTime>,<CurrencyCode>,[<AsOfDateModifier>]/`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupHeader {
    /// Получатель (необязательно).
    pub receiver: String,
    /// Отправитель.
    pub originator: String,
    /// Статус группы.
    pub group_status: i64,
    /// Дата данных.
    pub as_of_date: String,
    /// Время данных (необязательно).
    pub as_of_time: String,
    /// Код валюты (необязательно).
    pub currency_code: String,
    /// Модификатор даты; `0` означает "не указан".
    pub as_of_date_modifier: i64,
}

impl GroupHeader {
    /// Разбирает заголовок группы в начале `data`.
    ///
    /// Возвращает запись и число символов, которые она заняла, включая
    /// терминатор. Лишние поля после модификатора даты пропускаются, но
    /// входят в число прочитанных символов. Все, что идет после терминатора,
    /// не читается.
    pub fn parse(data: &str) -> Result<(Self, usize)> {
        let mut reader = FieldReader::new(data, RecordType::GroupHeader)?;

        let header = GroupHeader {
            receiver: reader.string("Receiver")?,
            originator: reader.string("Originator")?,
            group_status: reader.integer("GroupStatus")?,
            as_of_date: reader.string("AsOfDate")?,
            as_of_time: reader.string("AsOfTime")?,
            currency_code: reader.string("CurrencyCode")?,
            as_of_date_modifier: reader.integer("AsOfDateModifier")?,
        };
        reader.skip_rest();

        if let Err(err) = header.validate() {
            tracing::debug!(record = %err.record, field = err.field, "заголовок группы не прошел проверку");
            return Err(err.into());
        }

        tracing::debug!(consumed = reader.consumed(), originator = %header.originator, "разобран заголовок группы");
        Ok((header, reader.consumed()))
    }

    /// Проверяет поля в порядке их следования и возвращает первое нарушение.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let invalid = |field: &'static str| -> std::result::Result<(), ValidationError> {
            Err(ValidationError::new(RecordType::GroupHeader, field))
        };

        if self.originator.is_empty() {
            return invalid("Originator");
        }
        if !GROUP_STATUS_RANGE.contains(&self.group_status) {
            return invalid("GroupStatus");
        }
        if self.as_of_date.is_empty() || !validate_date(&self.as_of_date) {
            return invalid("AsOfDate");
        }
        if !self.as_of_time.is_empty() && !validate_time(&self.as_of_time) {
            return invalid("AsOfTime");
        }
        if !self.currency_code.is_empty() && !validate_currency_code(&self.currency_code) {
            return invalid("CurrencyCode");
        }
        if !AS_OF_DATE_MODIFIER_RANGE.contains(&self.as_of_date_modifier) {
            return invalid("AsOfDateModifier");
        }

        Ok(())
    }
}
