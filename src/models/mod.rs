pub mod printer_request;

pub use printer_request::PrinterRequest;
