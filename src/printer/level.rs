use serde::{Serialize, Serializer};

use super::mib;
use crate::snmp::RawValue;

/// Состояние расходника, которое агент сообщает вместо уровня
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSupplyState {
    Unavailable,
    Unknown,
    /// Что-то осталось, но сколько именно, неизвестно
    SomeRemaining,
}

impl MarkerSupplyState {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            mib::MARKER_SUPPLIES_UNAVAILABLE => Some(MarkerSupplyState::Unavailable),
            mib::MARKER_SUPPLIES_UNKNOWN => Some(MarkerSupplyState::Unknown),
            mib::MARKER_SUPPLIES_SOME_REMAINING => Some(MarkerSupplyState::SomeRemaining),
            _ => None,
        }
    }
}

/// Уровень расходника
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SupplyLevel {
    /// Процент от максимальной ёмкости; не обрезается сверху
    Percent(f64),
    /// Значение prtMarkerSuppliesLevel <= 0 как есть: -1, -2, -3 или 0
    Code(i64),
}

impl SupplyLevel {
    pub fn percent(&self) -> Option<f64> {
        match self {
            SupplyLevel::Percent(p) => Some(*p),
            SupplyLevel::Code(_) => None,
        }
    }

    /// Состояние для кодов -1/-2/-3. Для 0 состояния нет: пустой картридж
    /// и "ноль без пояснений" агент никак не различает.
    pub fn state(&self) -> Option<MarkerSupplyState> {
        match self {
            SupplyLevel::Percent(_) => None,
            SupplyLevel::Code(code) => MarkerSupplyState::from_code(*code),
        }
    }

    /// Число для вывода: процент, округлённый до двух знаков, или код как есть
    pub fn rounded(&self) -> f64 {
        match self {
            SupplyLevel::Percent(p) => (p * 100.0).round() / 100.0,
            SupplyLevel::Code(code) => *code as f64,
        }
    }
}

impl Serialize for SupplyLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SupplyLevel::Percent(_) => serializer.serialize_f64(self.rounded()),
            SupplyLevel::Code(code) => serializer.serialize_i64(*code),
        }
    }
}

/// Уровень расходника из пары (max, actual).
///
/// `actual <= 0` возвращается как код без деления. Иначе процент
/// `actual / (max / 100)`. Если `max` равен нулю, посчитать нечего: `None`.
pub fn supply_level(max: &RawValue, actual: &RawValue) -> Option<SupplyLevel> {
    let actual_int = actual.as_integer();
    if actual_int <= 0 {
        return Some(SupplyLevel::Code(actual_int));
    }

    let max = max.as_f64();
    if max == 0.0 {
        return None;
    }

    Some(SupplyLevel::Percent(actual.as_f64() / (max / 100.0)))
}

/// Процент для строки таблицы sub-unit.
///
/// Порог здесь `actual >= 0`, а не `<= 0` как в [`supply_level`]: ноль
/// считается делением и даёт 0.0, отрицательные коды дают `None`.
pub fn sub_unit_percentage(max: Option<&RawValue>, actual: Option<&RawValue>) -> Option<f64> {
    let (max, actual) = (max?, actual?);
    if actual.as_integer() < 0 {
        return None;
    }

    let max = max.as_f64();
    if max == 0.0 {
        return None;
    }

    Some(actual.as_f64() / (max / 100.0))
}
