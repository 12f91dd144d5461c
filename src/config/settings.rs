use serde::{Deserialize, Serialize};

use crate::snmp::{DEFAULT_COMMUNITY, DEFAULT_TIMEOUT_MICROS};

/// Базовые настройки приложения
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Настройки опроса принтера
    pub printer: PrinterSettings,
    /// Настройки HTTP сервера
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterSettings {
    /// Адрес принтера, порт 161 подставляется, если не указан
    pub target: String,
    /// Таймаут одного SNMP вызова (микросекунды)
    pub timeout_micros: u64,
    /// Community string SNMPv2c
    pub community: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Адрес, на котором слушает HTTP сервер
    pub listen: String,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            target: "127.0.0.1".to_string(),
            timeout_micros: DEFAULT_TIMEOUT_MICROS,
            community: DEFAULT_COMMUNITY.to_string(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:3000".to_string(),
        }
    }
}
