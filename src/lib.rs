//! SNMP поллер принтеров.
//!
//! Определяет тип принтера (монохромный или цветной), читает уровни тонера и
//! барабана, описания картриджей, счётчик страниц и таблицу расходников
//! Printer-MIB. Сетевые сбои возвращаются как `None`, а не как ошибка, чтобы
//! один недоступный принтер не обрывал опрос остальных.

pub mod collector;
pub mod config;
pub mod error;
pub mod formatter;
pub mod handlers;
pub mod models;
pub mod printer;
pub mod routes;
pub mod snmp;

pub use collector::{PrinterCollector, PrinterReport};
pub use error::PrinterError;
pub use formatter::JsonFormatter;
pub use printer::{Consumable, Printer, PrinterType, SubUnitRecord, SupplyLevel};
pub use snmp::{RawValue, Snmp2Transport, SnmpDevice, SnmpTransport};
