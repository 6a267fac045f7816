//! Извлечение полей из строки записи BAI2.
//!
//! Поле заканчивается разделителем `,` либо терминатором `/`, смотря что
//! встретится раньше. Размер прочитанного поля включает этот символ, так что
//! сумма размеров всех полей равна числу символов, занятых записью.

use crate::error::{Error, FieldError, Result};
use crate::types::{RecordType, DELIMITER, RECORD_CODE_WIDTH, TERMINATOR};

/// Длина логической записи в начале `data`: до терминатора включительно,
/// либо вся строка, если терминатора нет.
pub fn record_size(data: &str) -> usize {
    data.find(TERMINATOR).map(|pos| pos + 1).unwrap_or(data.len())
}

/// Читает строковое поле, начинающееся со смещения `start`.
///
/// Возвращает текст поля без разделителя и число прочитанных символов.
/// Пустое поле (`,,`) корректно и дает пустую строку.
pub fn read_field(line: &str, start: usize) -> std::result::Result<(&str, usize), FieldError> {
    let data = line
        .get(start..)
        .filter(|rest| !rest.is_empty())
        .ok_or(FieldError::OffsetPastEnd {
            offset: start,
            len: line.len(),
        })?;

    let end = data
        .find(|c: char| c == DELIMITER || c == TERMINATOR)
        .ok_or(FieldError::MissingDelimiter { offset: start })?;

    Ok((&data[..end], end + 1))
}

/// Читает поле как десятичное целое со знаком. Пустое поле дает `0`.
pub fn read_field_as_int(line: &str, start: usize) -> std::result::Result<(i64, usize), FieldError> {
    let (value, size) = read_field(line, start)?;

    if value.is_empty() {
        return Ok((0, size));
    }

    let number = value.parse::<i64>().map_err(|_| FieldError::InvalidInteger {
        value: value.to_string(),
    })?;

    Ok((number, size))
}

/// Курсор по полям одной записи.
///
/// Каждая запись описывает свою грамматику как последовательность вызовов
/// [`FieldReader::string`] и [`FieldReader::integer`] в фиксированном порядке;
/// ошибки автоматически получают тип записи и имя поля.
#[derive(Debug)]
pub struct FieldReader<'a> {
    line: &'a str,
    record: RecordType,
    read: usize,
}

impl<'a> FieldReader<'a> {
    /// Ограничивает `data` первой логической записью, проверяет код записи
    /// и ставит курсор за код и разделитель.
    pub fn new(data: &'a str, record: RecordType) -> Result<Self> {
        let size = record_size(data);
        if size < RECORD_CODE_WIDTH {
            tracing::debug!(%record, field = "record", len = size, "запись слишком короткая");
            return Err(Error::MalformedField {
                record,
                field: "record",
                source: FieldError::TooShort { len: size },
            });
        }

        let line = &data[..size];
        if line.get(..2) != Some(record.code()) {
            let found: String = line.chars().take(2).collect();
            tracing::debug!(%record, field = "RecordCode", found = %found, "неверный код записи");
            return Err(Error::RecordCodeMismatch {
                record,
                expected: record.code(),
                found,
            });
        }

        Ok(Self {
            line,
            record,
            read: RECORD_CODE_WIDTH,
        })
    }

    /// Следующее строковое поле.
    pub fn string(&mut self, field: &'static str) -> Result<String> {
        let (value, size) = read_field(self.line, self.read).map_err(|e| self.malformed(field, e))?;
        self.read += size;
        Ok(value.to_string())
    }

    /// Следующее целочисленное поле.
    pub fn integer(&mut self, field: &'static str) -> Result<i64> {
        let (value, size) =
            read_field_as_int(self.line, self.read).map_err(|e| self.malformed(field, e))?;
        self.read += size;
        Ok(value)
    }

    /// Остались ли непрочитанные символы в записи.
    pub fn has_remaining(&self) -> bool {
        self.read < self.line.len()
    }

    /// Ждет ли запись еще одно поле: остались символы, либо запись без
    /// терминатора оборвалась сразу после разделителя.
    pub fn has_pending_field(&self) -> bool {
        self.has_remaining() || (self.line.ends_with(DELIMITER) && !self.line.ends_with(TERMINATOR))
    }

    /// Пропускает поля после последнего известного до конца записи и
    /// возвращает число пропущенных символов.
    pub fn skip_rest(&mut self) -> usize {
        let skipped = self.line.len().saturating_sub(self.read);
        if skipped > 0 {
            tracing::debug!(record = %self.record, skipped, "лишние поля в конце записи пропущены");
        }
        self.read = self.line.len();
        skipped
    }

    /// Сколько символов прочитано с начала записи.
    pub fn consumed(&self) -> usize {
        self.read
    }

    fn malformed(&self, field: &'static str, source: FieldError) -> Error {
        tracing::debug!(record = %self.record, field, offset = self.read, "не удалось прочитать поле");
        Error::MalformedField {
            record: self.record,
            field,
            source,
        }
    }
}
