//! OID из Printer-MIB (RFC 3805) и MIB-II, которые понимает поллер.
//!
//! Слоты нумеруются с 1, как индексы в таблицах MIB: `*_SLOT[0]` это слот 1.

/// sysDescr
pub const FACTORY_ID: &str = ".1.3.6.1.2.1.1.1.0";
/// sysUpTime, в сотых долях секунды
pub const RUNNING_TIME: &str = ".1.3.6.1.2.1.1.3.0";
/// prtGeneralSerialNumber
pub const SERIAL_NUMBER: &str = ".1.3.6.1.2.1.43.5.1.1.17.1";
/// prtOutputVendorName
pub const VENDOR_NAME: &str = ".1.3.6.1.2.1.43.9.2.1.8.1.1";
/// prtMarkerLifeCount
pub const PRINTED_PAGES: &str = ".1.3.6.1.2.1.43.10.2.1.4.1.1";

/// prtMarkerSuppliesMaxCapacity
pub const MARKER_SUPPLIES_MAX_CAPACITY_SLOTS: &str = ".1.3.6.1.2.1.43.11.1.1.8.1";
pub const MARKER_SUPPLIES_MAX_CAPACITY_SLOT: [&str; 5] = [
    ".1.3.6.1.2.1.43.11.1.1.8.1.1",
    ".1.3.6.1.2.1.43.11.1.1.8.1.2",
    ".1.3.6.1.2.1.43.11.1.1.8.1.3",
    ".1.3.6.1.2.1.43.11.1.1.8.1.4",
    ".1.3.6.1.2.1.43.11.1.1.8.1.5",
];

/// prtMarkerSuppliesLevel
pub const MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOTS: &str = ".1.3.6.1.2.1.43.11.1.1.9.1";
pub const MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOT: [&str; 5] = [
    ".1.3.6.1.2.1.43.11.1.1.9.1.1",
    ".1.3.6.1.2.1.43.11.1.1.9.1.2",
    ".1.3.6.1.2.1.43.11.1.1.9.1.3",
    ".1.3.6.1.2.1.43.11.1.1.9.1.4",
    ".1.3.6.1.2.1.43.11.1.1.9.1.5",
];

/// prtMarkerSuppliesDescription (тип картриджа)
pub const SUB_UNIT_TYPE_SLOTS: &str = ".1.3.6.1.2.1.43.11.1.1.6.1";
pub const SUB_UNIT_TYPE_SLOT: [&str; 4] = [
    ".1.3.6.1.2.1.43.11.1.1.6.1.1",
    ".1.3.6.1.2.1.43.11.1.1.6.1.2",
    ".1.3.6.1.2.1.43.11.1.1.6.1.3",
    ".1.3.6.1.2.1.43.11.1.1.6.1.4",
];

/// prtMarkerColorantValue
pub const CARTRIDGE_COLOR_SLOT: [&str; 4] = [
    ".1.3.6.1.2.1.43.12.1.1.4.1.1",
    ".1.3.6.1.2.1.43.12.1.1.4.1.2",
    ".1.3.6.1.2.1.43.12.1.1.4.1.3",
    ".1.3.6.1.2.1.43.12.1.1.4.1.4",
];

/// Значения prtMarkerSuppliesLevel, которые означают не уровень, а состояние
pub const MARKER_SUPPLIES_UNAVAILABLE: i64 = -1;
pub const MARKER_SUPPLIES_UNKNOWN: i64 = -2;
pub const MARKER_SUPPLIES_SOME_REMAINING: i64 = -3;
