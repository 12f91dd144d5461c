use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::{RawValue, SnmpTransport};
use crate::error::{PrinterError, Result};

/// Таймаут одного SNMP вызова по умолчанию: 0.1 секунды
pub const DEFAULT_TIMEOUT_MICROS: u64 = 100_000;
/// Community для SNMPv2c по умолчанию
pub const DEFAULT_COMMUNITY: &str = "public";

/// Адрес устройства и параметры каждого запроса к нему
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceHandle {
    address: Option<String>,
    timeout_micros: u64,
    community: String,
}

impl Default for DeviceHandle {
    fn default() -> Self {
        Self {
            address: None,
            timeout_micros: DEFAULT_TIMEOUT_MICROS,
            community: DEFAULT_COMMUNITY.to_string(),
        }
    }
}

impl DeviceHandle {
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn timeout_micros(&self) -> u64 {
        self.timeout_micros
    }

    pub fn community(&self) -> &str {
        &self.community
    }
}

/// Фасад над транспортом: хранит адрес, таймаут и community устройства
/// и отдаёт одиночные значения и таблицы.
pub struct SnmpDevice {
    handle: DeviceHandle,
    transport: Arc<dyn SnmpTransport>,
}

impl SnmpDevice {
    /// Создаёт фасад без адреса; до `set_address` любой запрос вернёт ошибку конфигурации
    pub fn new(transport: Arc<dyn SnmpTransport>) -> Self {
        Self {
            handle: DeviceHandle::default(),
            transport,
        }
    }

    pub fn with_address(transport: Arc<dyn SnmpTransport>, address: &str) -> Result<Self> {
        let mut device = Self::new(transport);
        device.set_address(address)?;
        Ok(device)
    }

    pub fn handle(&self) -> &DeviceHandle {
        &self.handle
    }

    pub fn set_address(&mut self, address: &str) -> Result<()> {
        if address.is_empty() {
            return Err(PrinterError::config("Адрес устройства пустой"));
        }

        self.handle.address = Some(address.to_string());
        Ok(())
    }

    pub fn set_timeout(&mut self, micros: u64) -> Result<()> {
        if micros == 0 {
            return Err(PrinterError::config("Таймаут должен быть больше нуля"));
        }

        self.handle.timeout_micros = micros;
        Ok(())
    }

    pub fn set_community(&mut self, community: &str) -> Result<()> {
        if community.is_empty() {
            return Err(PrinterError::config("Community пустое"));
        }

        self.handle.community = community.to_string();
        Ok(())
    }

    /// Адрес устройства; ошибка, если он ещё не задан
    pub fn address(&self) -> Result<&str> {
        self.handle
            .address()
            .ok_or_else(|| PrinterError::config("Адрес устройства не задан"))
    }

    /// Получает значение OID; `None`, если запрос не удался
    pub async fn fetch_scalar(&self, oid: &str) -> Result<Option<RawValue>> {
        let address = self.address()?;
        let value = self
            .transport
            .get(address, &self.handle.community, oid, self.handle.timeout_micros)
            .await?;

        debug!(addr = address, oid, found = value.is_some(), "scalar");
        Ok(value)
    }

    /// Получает строку OID без кавычек, которые агент иногда добавляет к OCTET STRING
    pub async fn fetch_scalar_string(&self, oid: &str) -> Result<Option<String>> {
        let value = self.fetch_scalar(oid).await?;
        Ok(value.map(|v| strip_quotes(&v.to_string())))
    }

    /// WALK таблицы.
    ///
    /// Неудачный walk даёт пустой вектор, так что "таблица пуста" и
    /// "запрос не удался" здесь не различаются.
    pub async fn fetch_table(&self, oid: &str) -> Result<Vec<Option<RawValue>>> {
        let address = self.address()?;
        let rows = self
            .transport
            .walk(address, &self.handle.community, oid, self.handle.timeout_micros)
            .await?
            .unwrap_or_default();

        debug!(addr = address, oid, rows = rows.len(), "table");
        Ok(rows)
    }
}

impl fmt::Display for SnmpDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.handle.address().unwrap_or_default())
    }
}

impl fmt::Debug for SnmpDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnmpDevice")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

/// Удаляет все символы `"` из строки SNMP
pub fn strip_quotes(s: &str) -> String {
    s.replace('"', "")
}
