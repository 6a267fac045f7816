//! Проверки формата полей BAI2.
//!
//! Все функции тотальны: возвращают `true`, если строка соответствует
//! формату, и никогда не завершаются ошибкой. Решение о том, считать ли
//! пустое значение допустимым, принимает запись.

use chrono::{NaiveDate, NaiveTime};

/// Время "не указано".
pub const TIME_UNSPECIFIED: &str = "9999";
/// Время "конец дня".
pub const TIME_END_OF_DAY: &str = "2400";

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Дата `YYMMDD` или `YYYYMMDD`, существующая в календаре.
pub fn validate_date(input: &str) -> bool {
    if !all_digits(input) {
        return false;
    }

    let format = match input.len() {
        6 => "%y%m%d",
        8 => "%Y%m%d",
        _ => return false,
    };

    NaiveDate::parse_from_str(input, format).is_ok()
}

/// Время `HHMM`, либо `2400`, либо `9999`.
pub fn validate_time(input: &str) -> bool {
    if input == TIME_UNSPECIFIED || input == TIME_END_OF_DAY {
        return true;
    }

    input.len() == 4 && all_digits(input) && NaiveTime::parse_from_str(input, "%H%M").is_ok()
}

/// Код валюты из трех заглавных латинских букв (EUR, USD, RUB).
pub fn validate_currency_code(input: &str) -> bool {
    input.len() == 3 && input.bytes().all(|b| b.is_ascii_uppercase())
}

/// Сумма в минимальных единицах: необязательный знак и цифры.
pub fn validate_amount(input: &str) -> bool {
    let digits = input
        .strip_prefix('+')
        .or_else(|| input.strip_prefix('-'))
        .unwrap_or(input);

    all_digits(digits)
}

/// Код типа транзакции из трех цифр.
pub fn validate_type_code(input: &str) -> bool {
    input.len() == 3 && all_digits(input)
}

/// Тип доступности средств: один-два латинских символа или цифры.
pub fn validate_funds_type(input: &str) -> bool {
    (1..=2).contains(&input.len()) && input.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("220101"));
        assert!(validate_date("20220101"));
        assert!(validate_date("20240229"));
        assert!(!validate_date("20230229"));
        assert!(!validate_date("221301"));
        assert!(!validate_date("2022011"));
        assert!(!validate_date("+2022011"));
        assert!(!validate_date("2022-01-01"));
        assert!(!validate_date(""));
    }

    #[test]
    fn test_validate_time() {
        assert!(validate_time("0000"));
        assert!(validate_time("2359"));
        assert!(validate_time("2400"));
        assert!(validate_time("9999"));
        assert!(!validate_time("2500"));
        assert!(!validate_time("1260"));
        assert!(!validate_time("120"));
        assert!(!validate_time("12:00"));
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("USD"));
        assert!(validate_currency_code("RUB"));
        assert!(!validate_currency_code("usd"));
        assert!(!validate_currency_code("US"));
        assert!(!validate_currency_code("US1"));
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("44429"));
        assert!(validate_amount("+100"));
        assert!(validate_amount("-100"));
        assert!(validate_amount("0"));
        assert!(!validate_amount("-"));
        assert!(!validate_amount("12.50"));
        assert!(!validate_amount("1e5"));
    }

    #[test]
    fn test_validate_codes() {
        assert!(validate_type_code("165"));
        assert!(!validate_type_code("16"));
        assert!(!validate_type_code("16A"));

        assert!(validate_funds_type("Z"));
        assert!(validate_funds_type("0"));
        assert!(validate_funds_type("Cr"));
        assert!(!validate_funds_type("ABC"));
        assert!(!validate_funds_type("$"));
    }
}
