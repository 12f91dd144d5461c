use serde::Serialize;

use crate::collector::PrinterReport;
use crate::printer::{MarkerSupplyState, PrinterType, SubUnitRecord, SupplyLevel};

/// JSON структура отчёта по принтеру
#[derive(Debug, Clone, Serialize)]
pub struct PrinterReportJson {
    pub address: String,
    pub printer_type: PrinterType,
    pub timestamp: String,
    pub identity: IdentityJson,
    pub supplies: Vec<SupplyJson>,
    pub sub_units: Vec<SubUnitRecord>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IdentityJson {
    pub factory_id: Option<String>,
    pub vendor_name: Option<String>,
    pub serial_number: Option<String>,
    pub printed_pages: Option<i64>,
    pub running_time: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplyJson {
    pub name: String,
    /// Процент с двумя знаками после запятой или код -1/-2/-3/0 как есть
    pub level: Option<SupplyLevel>,
    pub state: Option<MarkerSupplyState>,
    pub cartridge: Option<String>,
}

/// JSON форматтер для отчётов
pub struct JsonFormatter;

impl JsonFormatter {
    /// Конвертирует отчёт в JSON структуру
    pub fn format_report(report: &PrinterReport) -> PrinterReportJson {
        let timestamp = chrono::Utc::now().to_rfc3339();

        let identity = IdentityJson {
            factory_id: report.factory_id.clone(),
            vendor_name: report.vendor_name.clone(),
            serial_number: report.serial_number.clone(),
            printed_pages: report.printed_pages,
            running_time: report.running_time,
        };

        let levels = &report.levels;
        let cartridges = &report.cartridges;
        let supplies = [
            ("black", levels.black, cartridges.black.clone()),
            ("cyan", levels.cyan, cartridges.cyan.clone()),
            ("magenta", levels.magenta, cartridges.magenta.clone()),
            ("yellow", levels.yellow, cartridges.yellow.clone()),
            ("drum", levels.drum, None),
        ]
        .into_iter()
        // У монохромного принтера цветных расходников нет совсем
        .filter(|(_, level, cartridge)| level.is_some() || cartridge.is_some())
        .map(|(name, level, cartridge)| SupplyJson {
            name: name.to_string(),
            state: level.and_then(|l| l.state()),
            level,
            cartridge,
        })
        .collect();

        let sub_units = report
            .sub_units
            .iter()
            .map(|record| SubUnitRecord {
                percentage_level: record.percentage_level.map(round2),
                ..record.clone()
            })
            .collect();

        PrinterReportJson {
            address: report.address.clone(),
            printer_type: report.printer_type,
            timestamp,
            identity,
            supplies,
            sub_units,
            errors: report.errors.clone(),
        }
    }

    /// Сериализует отчёт в JSON строку
    pub fn to_json_string(report: &PrinterReport) -> anyhow::Result<String> {
        let json_report = Self::format_report(report);
        serde_json::to_string_pretty(&json_report)
            .map_err(|e| anyhow::anyhow!("Ошибка сериализации в JSON: {}", e))
    }

    /// Сериализует отчёт в компактный JSON
    pub fn to_json_compact(report: &PrinterReport) -> anyhow::Result<String> {
        let json_report = Self::format_report(report);
        serde_json::to_string(&json_report)
            .map_err(|e| anyhow::anyhow!("Ошибка сериализации в JSON: {}", e))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
