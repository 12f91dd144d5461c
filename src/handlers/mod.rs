pub mod health;
pub mod printer;

pub use health::health;
pub use printer::handle_printer;
