use tracing::{info, warn};

pub mod types;

pub use types::{CartridgeTypes, PrinterReport, SupplyLevels};

use crate::error::{PrinterError, Result};
use crate::printer::Printer;

/// Коллектор: опрашивает все геттеры принтера и собирает отчёт
pub struct PrinterCollector;

impl PrinterCollector {
    /// Собирает все данные с принтера.
    ///
    /// Ошибка конфигурации прерывает сбор, несовпадение длины walk'ов
    /// попадает в `errors`, а остальной отчёт заполняется как обычно.
    pub async fn collect_all(printer: &Printer) -> Result<PrinterReport> {
        let address = printer.device().address()?.to_string();
        let printer_type = printer.classify().await?;

        let levels = SupplyLevels {
            black: printer.black_toner_level().await?,
            cyan: printer.cyan_toner_level().await?,
            magenta: printer.magenta_toner_level().await?,
            yellow: printer.yellow_toner_level().await?,
            drum: printer.drum_level().await?,
        };

        let cartridges = CartridgeTypes {
            black: printer.black_cartridge_type().await?,
            cyan: printer.cyan_cartridge_type().await?,
            magenta: printer.magenta_cartridge_type().await?,
            yellow: printer.yellow_cartridge_type().await?,
        };

        let mut errors = Vec::new();
        let sub_units = match printer.all_sub_unit_data().await {
            Ok(records) => records,
            Err(e @ PrinterError::Aggregation { .. }) => {
                warn!(addr = %address, "Таблица sub-unit пропущена: {}", e);
                errors.push(e.to_string());
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let report = PrinterReport {
            address,
            printer_type,
            factory_id: printer.factory_id().await?,
            vendor_name: printer.vendor_name().await?,
            serial_number: printer.serial_number().await?,
            printed_pages: printer.printed_pages().await?,
            running_time: printer.running_time().await?,
            levels,
            cartridges,
            sub_units,
            errors,
        };

        info!(
            addr = %report.address,
            printer_type = %report.printer_type,
            sub_units = report.sub_units.len(),
            "Опрос принтера завершён"
        );
        Ok(report)
    }
}
