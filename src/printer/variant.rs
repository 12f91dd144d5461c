use serde::{Deserialize, Serialize};
use std::fmt;

use super::mib;

/// Тип принтера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterType {
    Monochrome,
    Color,
    /// Первый слот не ответил, тип определить нельзя
    Unknown,
}

impl fmt::Display for PrinterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrinterType::Monochrome => "mono printer",
            PrinterType::Color => "color printer",
            PrinterType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Расходник, уровень или тип которого можно запросить
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Consumable {
    Black,
    Cyan,
    Magenta,
    Yellow,
    Drum,
}

/// Где лежит расходник в таблицах prtMarkerSupplies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplySlot {
    /// Номер строки в prtMarkerSuppliesMaxCapacity / prtMarkerSuppliesLevel
    pub level_slot: usize,
    /// Номер строки в prtMarkerSuppliesDescription; у барабана описания нет
    pub type_slot: Option<usize>,
}

impl SupplySlot {
    const fn new(level_slot: usize, type_slot: Option<usize>) -> Self {
        Self { level_slot, type_slot }
    }

    pub fn max_capacity_oid(&self) -> &'static str {
        mib::MARKER_SUPPLIES_MAX_CAPACITY_SLOT[self.level_slot - 1]
    }

    pub fn actual_capacity_oid(&self) -> &'static str {
        mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOT[self.level_slot - 1]
    }

    pub fn sub_unit_type_oid(&self) -> Option<&'static str> {
        self.type_slot.map(|slot| mib::SUB_UNIT_TYPE_SLOT[slot - 1])
    }
}

const MONOCHROME_SLOTS: &[(Consumable, SupplySlot)] = &[
    (Consumable::Black, SupplySlot::new(1, Some(1))),
    (Consumable::Drum, SupplySlot::new(2, None)),
];

const COLOR_SLOTS: &[(Consumable, SupplySlot)] = &[
    (Consumable::Cyan, SupplySlot::new(1, Some(1))),
    (Consumable::Magenta, SupplySlot::new(2, Some(2))),
    (Consumable::Yellow, SupplySlot::new(3, Some(3))),
    (Consumable::Black, SupplySlot::new(4, Some(4))),
    (Consumable::Drum, SupplySlot::new(5, None)),
];

/// Слот расходника для данного типа принтера; `None`, если такого
/// расходника у этого типа нет или тип неизвестен
pub fn supply_slot(printer_type: PrinterType, consumable: Consumable) -> Option<SupplySlot> {
    let table = match printer_type {
        PrinterType::Monochrome => MONOCHROME_SLOTS,
        PrinterType::Color => COLOR_SLOTS,
        PrinterType::Unknown => return None,
    };

    table
        .iter()
        .find(|(c, _)| *c == consumable)
        .map(|(_, slot)| *slot)
}

/// Детектор типа принтера
pub struct PrinterTypeDetector;

impl PrinterTypeDetector {
    /// Определяет тип по красителю в первом слоте prtMarkerColorant.
    ///
    /// Это эвристика, а не поле протокола: у цветных принтеров первым идёт
    /// голубой картридж, у монохромных там чёрный или что-то другое.
    /// Строка должна прийти уже без кавычек.
    pub fn detect(first_colorant: Option<&str>) -> PrinterType {
        match first_colorant {
            None => PrinterType::Unknown,
            Some(colorant) if colorant.eq_ignore_ascii_case("cyan") => PrinterType::Color,
            Some(_) => PrinterType::Monochrome,
        }
    }
}
