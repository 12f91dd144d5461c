use crate::printer::{PrinterType, SubUnitRecord, SupplyLevel};

/// Уровни расходников; `None` там, где у принтера нет такого расходника
/// или запрос не удался
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplyLevels {
    pub black: Option<SupplyLevel>,
    pub cyan: Option<SupplyLevel>,
    pub magenta: Option<SupplyLevel>,
    pub yellow: Option<SupplyLevel>,
    pub drum: Option<SupplyLevel>,
}

/// Описания картриджей
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartridgeTypes {
    pub black: Option<String>,
    pub cyan: Option<String>,
    pub magenta: Option<String>,
    pub yellow: Option<String>,
}

/// Полный результат опроса принтера
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterReport {
    pub address: String,
    pub printer_type: PrinterType,
    pub factory_id: Option<String>,
    pub vendor_name: Option<String>,
    pub serial_number: Option<String>,
    pub printed_pages: Option<i64>,
    pub running_time: Option<i64>,
    pub levels: SupplyLevels,
    pub cartridges: CartridgeTypes,
    pub sub_units: Vec<SubUnitRecord>,
    /// Ошибки, которые не помешали собрать остальную часть отчёта
    pub errors: Vec<String>,
}
