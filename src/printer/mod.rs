use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{PrinterError, Result};
use crate::snmp::{RawValue, SnmpDevice, SnmpTransport};
use crate::snmp::device::strip_quotes;

pub mod level;
pub mod mib;
pub mod variant;

pub use level::{MarkerSupplyState, SupplyLevel, sub_unit_percentage, supply_level};
pub use variant::{Consumable, PrinterType, PrinterTypeDetector, SupplySlot, supply_slot};

/// Строка таблицы prtMarkerSupplies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubUnitRecord {
    pub name: String,
    pub max_capacity: Option<RawValue>,
    pub actual_capacity: Option<RawValue>,
    pub percentage_level: Option<f64>,
}

/// Принтер, опрашиваемый по SNMP.
///
/// Тип принтера не кэшируется: каждый геттер расходника заново читает первый
/// слот, потому что картридж могут заменить между вызовами.
pub struct Printer {
    device: SnmpDevice,
}

impl Printer {
    pub fn new(device: SnmpDevice) -> Self {
        Self { device }
    }

    pub fn connect(transport: Arc<dyn SnmpTransport>, address: &str) -> Result<Self> {
        Ok(Self::new(SnmpDevice::with_address(transport, address)?))
    }

    pub fn device(&self) -> &SnmpDevice {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut SnmpDevice {
        &mut self.device
    }

    /// Определяет тип принтера по первому слоту красителя
    pub async fn classify(&self) -> Result<PrinterType> {
        let colorant = self
            .device
            .fetch_scalar_string(mib::CARTRIDGE_COLOR_SLOT[0])
            .await?;
        let printer_type = PrinterTypeDetector::detect(colorant.as_deref());

        debug!(addr = %self.device, %printer_type, "classified");
        Ok(printer_type)
    }

    pub async fn is_color(&self) -> Result<bool> {
        Ok(self.classify().await? == PrinterType::Color)
    }

    /// `false` и для цветного, и для неопределённого принтера
    pub async fn is_monochrome(&self) -> Result<bool> {
        Ok(self.classify().await? == PrinterType::Monochrome)
    }

    pub async fn factory_id(&self) -> Result<Option<String>> {
        self.device.fetch_scalar_string(mib::FACTORY_ID).await
    }

    pub async fn vendor_name(&self) -> Result<Option<String>> {
        self.device.fetch_scalar_string(mib::VENDOR_NAME).await
    }

    pub async fn serial_number(&self) -> Result<Option<String>> {
        self.device.fetch_scalar_string(mib::SERIAL_NUMBER).await
    }

    pub async fn printed_pages(&self) -> Result<Option<i64>> {
        let value = self.device.fetch_scalar(mib::PRINTED_PAGES).await?;
        Ok(value.map(|v| v.as_integer()))
    }

    /// Время работы с момента включения, в сотых долях секунды
    pub async fn running_time(&self) -> Result<Option<i64>> {
        let value = self.device.fetch_scalar(mib::RUNNING_TIME).await?;
        Ok(value.map(|v| v.as_integer()))
    }

    pub async fn black_toner_level(&self) -> Result<Option<SupplyLevel>> {
        self.consumable_level(Consumable::Black).await
    }

    pub async fn cyan_toner_level(&self) -> Result<Option<SupplyLevel>> {
        self.consumable_level(Consumable::Cyan).await
    }

    pub async fn magenta_toner_level(&self) -> Result<Option<SupplyLevel>> {
        self.consumable_level(Consumable::Magenta).await
    }

    pub async fn yellow_toner_level(&self) -> Result<Option<SupplyLevel>> {
        self.consumable_level(Consumable::Yellow).await
    }

    pub async fn drum_level(&self) -> Result<Option<SupplyLevel>> {
        self.consumable_level(Consumable::Drum).await
    }

    pub async fn black_cartridge_type(&self) -> Result<Option<String>> {
        self.cartridge_type(Consumable::Black).await
    }

    pub async fn cyan_cartridge_type(&self) -> Result<Option<String>> {
        self.cartridge_type(Consumable::Cyan).await
    }

    pub async fn magenta_cartridge_type(&self) -> Result<Option<String>> {
        self.cartridge_type(Consumable::Magenta).await
    }

    pub async fn yellow_cartridge_type(&self) -> Result<Option<String>> {
        self.cartridge_type(Consumable::Yellow).await
    }

    /// Уровень расходника с учётом типа принтера.
    /// `None`, если тип неизвестен, у этого типа нет такого расходника или запрос не удался.
    pub async fn consumable_level(&self, consumable: Consumable) -> Result<Option<SupplyLevel>> {
        let printer_type = self.classify().await?;
        let Some(slot) = supply_slot(printer_type, consumable) else {
            return Ok(None);
        };

        self.compute_level(slot.max_capacity_oid(), slot.actual_capacity_oid())
            .await
    }

    /// Описание картриджа с учётом типа принтера
    pub async fn cartridge_type(&self, consumable: Consumable) -> Result<Option<String>> {
        let printer_type = self.classify().await?;
        let Some(oid) = supply_slot(printer_type, consumable).and_then(|s| s.sub_unit_type_oid())
        else {
            return Ok(None);
        };

        self.device.fetch_scalar_string(oid).await
    }

    /// Читает пару (max, actual) и считает уровень, см. [`supply_level`]
    pub async fn compute_level(&self, max_oid: &str, actual_oid: &str) -> Result<Option<SupplyLevel>> {
        let max = self.device.fetch_scalar(max_oid).await?;
        let actual = self.device.fetch_scalar(actual_oid).await?;

        let (Some(max), Some(actual)) = (max, actual) else {
            return Ok(None);
        };

        Ok(supply_level(&max, &actual))
    }

    /// Собирает таблицу sub-unit из трёх параллельных walk'ов.
    ///
    /// Строки сопоставляются по позиции, не по индексу OID. Если walk
    /// ёмкостей короче walk'а имён, возвращается [`PrinterError::Aggregation`]
    /// вместо частичного результата.
    pub async fn all_sub_unit_data(&self) -> Result<Vec<SubUnitRecord>> {
        let names = self.device.fetch_table(mib::SUB_UNIT_TYPE_SLOTS).await?;
        let max_values = self
            .device
            .fetch_table(mib::MARKER_SUPPLIES_MAX_CAPACITY_SLOTS)
            .await?;
        let actual_values = self
            .device
            .fetch_table(mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOTS)
            .await?;

        if max_values.len() < names.len() || actual_values.len() < names.len() {
            warn!(
                addr = %self.device,
                names = names.len(),
                max = max_values.len(),
                actual = actual_values.len(),
                "walk length mismatch"
            );
            return Err(PrinterError::Aggregation {
                names: names.len(),
                max_values: max_values.len(),
                actual_values: actual_values.len(),
            });
        }

        let records = names
            .into_iter()
            .zip(max_values)
            .zip(actual_values)
            .map(|((name, max), actual)| SubUnitRecord {
                name: name.map(|n| strip_quotes(&n.to_string())).unwrap_or_default(),
                percentage_level: sub_unit_percentage(max.as_ref(), actual.as_ref()),
                max_capacity: max,
                actual_capacity: actual,
            })
            .collect();

        Ok(records)
    }
}

impl fmt::Display for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.device, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snmp::mock::MockTransport;

    const ADDR: &str = "192.168.0.2";

    fn mono() -> MockTransport {
        MockTransport::new()
            .with_scalar(mib::CARTRIDGE_COLOR_SLOT[0], "\"black\"")
            .with_scalar(mib::MARKER_SUPPLIES_MAX_CAPACITY_SLOT[0], 2000)
            .with_scalar(mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOT[0], 500)
            .with_scalar(mib::MARKER_SUPPLIES_MAX_CAPACITY_SLOT[1], 10000)
            .with_scalar(mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOT[1], -3)
            .with_scalar(mib::SUB_UNIT_TYPE_SLOT[0], "\"Black Toner Cartridge\"")
    }

    fn color() -> MockTransport {
        MockTransport::new()
            .with_scalar(mib::CARTRIDGE_COLOR_SLOT[0], "\"Cyan\"")
            .with_scalar(mib::MARKER_SUPPLIES_MAX_CAPACITY_SLOT[0], 1000)
            .with_scalar(mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOT[0], 300)
            .with_scalar(mib::MARKER_SUPPLIES_MAX_CAPACITY_SLOT[1], 1000)
            .with_scalar(mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOT[1], 500)
            .with_scalar(mib::MARKER_SUPPLIES_MAX_CAPACITY_SLOT[2], 1000)
            .with_scalar(mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOT[2], -2)
            .with_scalar(mib::MARKER_SUPPLIES_MAX_CAPACITY_SLOT[3], 4000)
            .with_scalar(mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOT[3], 1000)
            .with_scalar(mib::MARKER_SUPPLIES_MAX_CAPACITY_SLOT[4], 50000)
            .with_scalar(mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOT[4], 0)
            .with_scalar(mib::SUB_UNIT_TYPE_SLOT[0], "Cyan Cartridge 407C")
            .with_scalar(mib::SUB_UNIT_TYPE_SLOT[1], "Magenta Cartridge 407M")
            .with_scalar(mib::SUB_UNIT_TYPE_SLOT[2], "Yellow Cartridge 407Y")
            .with_scalar(mib::SUB_UNIT_TYPE_SLOT[3], "Black Cartridge 407K")
    }

    fn printer(transport: MockTransport) -> (Printer, Arc<MockTransport>) {
        let transport = Arc::new(transport);
        let printer = Printer::connect(transport.clone(), ADDR).unwrap();
        (printer, transport)
    }

    #[tokio::test]
    async fn test_classify() {
        let (p, _) = printer(color());
        assert_eq!(p.classify().await.unwrap(), PrinterType::Color);
        assert!(p.is_color().await.unwrap());
        assert!(!p.is_monochrome().await.unwrap());

        let (p, _) = printer(mono());
        assert_eq!(p.classify().await.unwrap(), PrinterType::Monochrome);
        assert!(!p.is_color().await.unwrap());
        assert!(p.is_monochrome().await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_type_is_neither() {
        let (p, _) = printer(MockTransport::new());
        assert_eq!(p.classify().await.unwrap(), PrinterType::Unknown);
        assert!(!p.is_color().await.unwrap());
        assert!(!p.is_monochrome().await.unwrap());

        assert_eq!(p.black_toner_level().await.unwrap(), None);
        assert_eq!(p.drum_level().await.unwrap(), None);
        assert_eq!(p.black_cartridge_type().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_classification_not_cached() {
        let (p, transport) = printer(color());
        p.classify().await.unwrap();
        p.classify().await.unwrap();

        let colorant_reads = transport
            .oids_called()
            .iter()
            .filter(|oid| oid.as_str() == mib::CARTRIDGE_COLOR_SLOT[0])
            .count();
        assert_eq!(colorant_reads, 2);
    }

    #[tokio::test]
    async fn test_mono_levels() {
        let (p, _) = printer(mono());

        assert_eq!(p.black_toner_level().await.unwrap(), Some(SupplyLevel::Percent(25.0)));
        assert_eq!(p.drum_level().await.unwrap(), Some(SupplyLevel::Code(-3)));
        assert_eq!(p.cyan_toner_level().await.unwrap(), None);
        assert_eq!(p.magenta_toner_level().await.unwrap(), None);
        assert_eq!(p.yellow_toner_level().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_color_levels() {
        let (p, _) = printer(color());

        assert_eq!(p.cyan_toner_level().await.unwrap(), Some(SupplyLevel::Percent(30.0)));
        assert_eq!(p.magenta_toner_level().await.unwrap(), Some(SupplyLevel::Percent(50.0)));
        assert_eq!(p.yellow_toner_level().await.unwrap(), Some(SupplyLevel::Code(-2)));
        assert_eq!(p.black_toner_level().await.unwrap(), Some(SupplyLevel::Percent(25.0)));
        assert_eq!(p.drum_level().await.unwrap(), Some(SupplyLevel::Code(0)));
    }

    #[tokio::test]
    async fn test_black_uses_slot_four_on_color() {
        let (p, transport) = printer(color());
        p.black_toner_level().await.unwrap();

        let oids = transport.oids_called();
        assert!(oids.contains(&mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOT[3].to_string()));
        assert!(!oids.contains(&mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOT[0].to_string()));
    }

    #[tokio::test]
    async fn test_cartridge_types() {
        let (p, _) = printer(color());
        assert_eq!(p.black_cartridge_type().await.unwrap().as_deref(), Some("Black Cartridge 407K"));
        assert_eq!(p.cyan_cartridge_type().await.unwrap().as_deref(), Some("Cyan Cartridge 407C"));
        assert_eq!(p.magenta_cartridge_type().await.unwrap().as_deref(), Some("Magenta Cartridge 407M"));
        assert_eq!(p.yellow_cartridge_type().await.unwrap().as_deref(), Some("Yellow Cartridge 407Y"));

        let (p, _) = printer(mono());
        assert_eq!(p.black_cartridge_type().await.unwrap().as_deref(), Some("Black Toner Cartridge"));
        assert_eq!(p.cyan_cartridge_type().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_compute_level_failure() {
        let (p, _) = printer(
            MockTransport::new().with_scalar(mib::MARKER_SUPPLIES_MAX_CAPACITY_SLOT[0], 1000),
        );
        let level = p
            .compute_level(
                mib::MARKER_SUPPLIES_MAX_CAPACITY_SLOT[0],
                mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOT[0],
            )
            .await
            .unwrap();
        assert_eq!(level, None);
    }

    #[tokio::test]
    async fn test_identity() {
        let (p, _) = printer(
            MockTransport::new()
                .with_scalar(mib::FACTORY_ID, "\"HP LaserJet P2055dn\"")
                .with_scalar(mib::VENDOR_NAME, "\"Hewlett-Packard\"")
                .with_scalar(mib::SERIAL_NUMBER, "CNB1234567")
                .with_scalar(mib::PRINTED_PAGES, "48213")
                .with_scalar(mib::RUNNING_TIME, 123456),
        );

        assert_eq!(p.factory_id().await.unwrap().as_deref(), Some("HP LaserJet P2055dn"));
        assert_eq!(p.vendor_name().await.unwrap().as_deref(), Some("Hewlett-Packard"));
        assert_eq!(p.serial_number().await.unwrap().as_deref(), Some("CNB1234567"));
        assert_eq!(p.printed_pages().await.unwrap(), Some(48213));
        assert_eq!(p.running_time().await.unwrap(), Some(123456));
    }

    #[tokio::test]
    async fn test_identity_failure_is_none() {
        let (p, _) = printer(MockTransport::new());
        assert_eq!(p.factory_id().await.unwrap(), None);
        assert_eq!(p.printed_pages().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unset_address_before_io() {
        let transport = Arc::new(color());
        let p = Printer::new(SnmpDevice::new(transport.clone()));

        assert!(matches!(p.classify().await, Err(PrinterError::Configuration(_))));
        assert!(matches!(p.cyan_toner_level().await, Err(PrinterError::Configuration(_))));
        assert!(matches!(p.all_sub_unit_data().await, Err(PrinterError::Configuration(_))));
        assert_eq!(transport.call_count(), 0);
    }

    fn sub_unit_tables(names: usize, max: usize, actual: usize) -> MockTransport {
        let name_rows = ["\"Black Toner\"", "\"Drum Unit\"", "\"Waste Toner\""];
        let max_rows = [RawValue::from(1000), RawValue::from(20000), RawValue::from(100)];
        let actual_rows = [RawValue::from(0), RawValue::from(5000), RawValue::from(-3)];

        MockTransport::new()
            .with_table(
                mib::SUB_UNIT_TYPE_SLOTS,
                name_rows[..names].iter().map(|n| RawValue::from(*n)).collect(),
            )
            .with_table(mib::MARKER_SUPPLIES_MAX_CAPACITY_SLOTS, max_rows[..max].to_vec())
            .with_table(
                mib::MARKER_SUPPLIES_ACTUAL_CAPACITY_SLOTS,
                actual_rows[..actual].to_vec(),
            )
    }

    #[tokio::test]
    async fn test_all_sub_unit_data() {
        let (p, _) = printer(sub_unit_tables(3, 3, 3));
        let records = p.all_sub_unit_data().await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Black Toner");
        // Здесь порог >= 0: ноль даёт 0.0, а не код
        assert_eq!(records[0].percentage_level, Some(0.0));
        assert_eq!(records[1].name, "Drum Unit");
        assert_eq!(records[1].max_capacity, Some(RawValue::from(20000)));
        assert_eq!(records[1].percentage_level, Some(25.0));
        assert_eq!(records[2].actual_capacity, Some(RawValue::from(-3)));
        assert_eq!(records[2].percentage_level, None);
    }

    #[tokio::test]
    async fn test_all_sub_unit_data_length_mismatch() {
        let (p, _) = printer(sub_unit_tables(3, 2, 3));
        let err = p.all_sub_unit_data().await.unwrap_err();

        assert_eq!(
            err,
            PrinterError::Aggregation {
                names: 3,
                max_values: 2,
                actual_values: 3,
            }
        );
    }

    #[tokio::test]
    async fn test_all_sub_unit_data_longer_capacity_walks() {
        let (p, _) = printer(sub_unit_tables(2, 3, 3));
        let records = p.all_sub_unit_data().await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_all_sub_unit_data_failed_walks() {
        let (p, _) = printer(MockTransport::new());
        assert!(p.all_sub_unit_data().await.unwrap().is_empty());

        // Имена пришли, а ёмкости нет: это тоже несовпадение длины
        let (p, _) = printer(MockTransport::new().with_table(
            mib::SUB_UNIT_TYPE_SLOTS,
            vec![RawValue::from("Black Toner")],
        ));
        assert!(matches!(
            p.all_sub_unit_data().await,
            Err(PrinterError::Aggregation { names: 1, .. })
        ));
    }
}
