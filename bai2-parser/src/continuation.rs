//! Склейка строк-продолжения `88` в логические записи.

use crate::error::{Error, Result};
use crate::types::{CONTINUATION_CODE, TERMINATOR};

/// Присоединяет каждую строку `88` к предыдущей записи.
///
/// Терминатор предыдущей строки отбрасывается, а содержимое строки-продолжения
/// после кода дописывается в конец. Пробелы, которыми физические строки
/// дополняются до фиксированной ширины, отбрасываются до склейки, иначе
/// терминатор оказался бы посреди записи. Пустые строки пропускаются. В результате
/// каждая логическая запись занимает ровно одну строку.
pub fn join_continuations(text: &str) -> Result<String> {
    let mut records: Vec<String> = Vec::new();
    let mut joined = 0usize;

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        match line.strip_prefix(CONTINUATION_CODE) {
            Some(rest) => {
                let previous = records
                    .last_mut()
                    .ok_or(Error::OrphanContinuation { line: idx + 1 })?;
                if previous.ends_with(TERMINATOR) {
                    previous.pop();
                }
                previous.push_str(rest);
                joined += 1;
            }
            None => records.push(line.to_string()),
        }
    }

    tracing::debug!(records = records.len(), joined, "склеены строки-продолжения");
    Ok(records.join("\n"))
}
