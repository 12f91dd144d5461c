use axum::extract::State;
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::collector::PrinterCollector;
use crate::error::PrinterError;
use crate::formatter::{JsonFormatter, PrinterReportJson};
use crate::models::PrinterRequest;
use crate::printer::Printer;
use crate::routes::AppState;

pub async fn handle_printer(
    State(state): State<AppState>,
    Json(params): Json<PrinterRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let report = collect(&state, &params).await.map_err(|e| {
        let status = match e {
            PrinterError::Configuration(_) => StatusCode::BAD_REQUEST,
            PrinterError::Aggregation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, e.to_string())
    })?;

    Ok(Json(report))
}

async fn collect(state: &AppState, params: &PrinterRequest) -> Result<PrinterReportJson, PrinterError> {
    let mut printer = Printer::connect(state.transport.clone(), &params.ip)?;

    let device = printer.device_mut();
    device.set_timeout(params.timeout_micros.unwrap_or(state.timeout_micros))?;
    device.set_community(params.community.as_deref().unwrap_or(&state.community))?;

    let report = PrinterCollector::collect_all(&printer).await?;
    Ok(JsonFormatter::format_report(&report))
}
