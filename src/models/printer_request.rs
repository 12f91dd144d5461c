use serde::Deserialize;

/// Тело запроса POST /printer
#[derive(Debug, Deserialize)]
pub struct PrinterRequest {
    pub ip: String,
    pub community: Option<String>,
    pub timeout_micros: Option<u64>,
}
