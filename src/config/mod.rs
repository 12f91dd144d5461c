use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

pub mod settings;

pub use settings::{PrinterSettings, ServerSettings, Settings};

/// Главная конфигурация приложения
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub settings: Settings,
}

impl AppConfig {
    /// Загружает конфигурацию из YAML файла; если файла нет, берутся значения по умолчанию
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "Файл конфигурации не найден, используются значения по умолчанию");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .context(format!("Не удалось прочитать файл: {}", path.display()))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings =
            serde_yml::from_str(content).context("Не удалось распарсить YAML")?;

        if settings.printer.timeout_micros == 0 {
            anyhow::bail!("timeout_micros должен быть больше нуля");
        }

        Ok(Self { settings })
    }

    /// Получает target из переменной окружения или из настроек
    pub fn get_target(&self) -> String {
        env::var("PRINTER_TARGET").unwrap_or_else(|_| self.settings.printer.target.clone())
    }

    /// Получает timeout (микросекунды) из переменной окружения или из настроек
    pub fn get_timeout(&self) -> u64 {
        env::var("SNMP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|t| *t > 0)
            .unwrap_or(self.settings.printer.timeout_micros)
    }

    /// Получает community для SNMPv2c
    pub fn get_community(&self) -> String {
        env::var("SNMP_COMMUNITY").unwrap_or_else(|_| self.settings.printer.community.clone())
    }

    /// Получает адрес HTTP сервера
    pub fn get_listen(&self) -> String {
        env::var("LISTEN_ADDR").unwrap_or_else(|_| self.settings.server.listen.clone())
    }

    pub fn log_config(&self) {
        info!(
            target_addr = %self.get_target(),
            timeout_micros = self.get_timeout(),
            listen = %self.get_listen(),
            "Конфигурация загружена"
        );
    }
}
