use async_trait::async_trait;
use serde::Serialize;
use std::fmt;

use crate::error::Result;

pub mod device;
#[cfg(test)]
pub mod mock;
pub mod oid;
pub mod v2c;

pub use device::{DEFAULT_COMMUNITY, DEFAULT_TIMEOUT_MICROS, DeviceHandle, SnmpDevice};
pub use oid::parse_oid;
pub use v2c::Snmp2Transport;

/// Значение, полученное от агента.
///
/// Неудачный запрос сюда не попадает: он выражается через `None`,
/// поэтому `Integer(0)` и `Text("")` всегда настоящие данные устройства.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Text(String),
}

impl RawValue {
    /// Приводит значение к целому так же нестрого, как это делают SNMP-утилиты:
    /// берётся ведущее целое из строки, если его нет — 0.
    pub fn as_integer(&self) -> i64 {
        match self {
            RawValue::Integer(v) => *v,
            RawValue::Text(s) => leading_integer(s),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            RawValue::Integer(v) => *v as f64,
            RawValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .unwrap_or_else(|_| leading_integer(s) as f64),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Integer(v) => write!(f, "{}", v),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Integer(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Integer(i64::from(v))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end]
        .parse::<i64>()
        .map(|v| sign * v)
        .unwrap_or(0)
}

/// Транспорт SNMP: одиночный GET и WALK таблицы с ограничением по времени.
///
/// Сбой на стороне сети (таймаут, отказ агента, отсутствующий объект)
/// возвращается как `Ok(None)`. `Err` только для локально неверного ввода.
#[async_trait]
pub trait SnmpTransport: Send + Sync {
    async fn get(
        &self,
        target: &str,
        community: &str,
        oid: &str,
        timeout_micros: u64,
    ) -> Result<Option<RawValue>>;

    /// Строки таблицы в порядке ответа агента; `None` внутри — исключение
    /// varbind'а (noSuchInstance и т.п.) для конкретной строки.
    async fn walk(
        &self,
        target: &str,
        community: &str,
        oid: &str,
        timeout_micros: u64,
    ) -> Result<Option<Vec<Option<RawValue>>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_integer_lenient() {
        assert_eq!(RawValue::from("300").as_integer(), 300);
        assert_eq!(RawValue::from(" -3").as_integer(), -3);
        assert_eq!(RawValue::from("42 pages").as_integer(), 42);
        assert_eq!(RawValue::from("black").as_integer(), 0);
        assert_eq!(RawValue::from(-2).as_integer(), -2);
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(RawValue::from("1000").as_f64(), 1000.0);
        assert_eq!(RawValue::from("12.5").as_f64(), 12.5);
        assert_eq!(RawValue::from("7 units").as_f64(), 7.0);
    }

    #[test]
    fn test_display_keeps_text() {
        assert_eq!(RawValue::from("\"HP\"").to_string(), "\"HP\"");
        assert_eq!(RawValue::from(15).to_string(), "15");
    }
}
