use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::handlers::{handle_printer, health};
use crate::snmp::SnmpTransport;

/// Общее состояние обработчиков: транспорт и параметры опроса по умолчанию
#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<dyn SnmpTransport>,
    pub timeout_micros: u64,
    pub community: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/printer", post(handle_printer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
