//! Expected-move calculation endpoint
//!
//! Marshals a form submission into the calculation kernel: validate the
//! symbol and expiry, fetch one snapshot through the market data provider,
//! compute, and render the result or a structured error.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use adapter_market::FeedError;
use emove_core::{ExpectedMove, ExpectedMoveError, ExpiryDate, Severity, Symbol};

use super::AppState;

/// Calculation request: raw form fields, validated by the handler so each
/// failure kind gets its own error code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcRequest {
    /// Stock symbol, free text (case-insensitive)
    pub symbol: String,
    /// Expiration date, ISO 8601 `YYYY-MM-DD`
    pub expiration: String,
}

/// Successful calculation response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalcResponse {
    /// Normalised symbol the result is for
    pub symbol: Symbol,
    /// Expiration date the chain was fetched for
    pub expiration: ExpiryDate,
    /// The expected-move estimate and its intermediate values
    #[serde(flatten)]
    pub result: ExpectedMove,
}

/// Structured error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,
    /// "warning" for data-availability conditions, "error" otherwise
    pub severity: String,
    /// Human-readable description
    pub message: String,
}

/// Build the calculation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/expected-move", post(expected_move_handler))
}

/// POST /api/v1/expected-move - Compute the expected move for a symbol and expiry
async fn expected_move_handler(
    State(state): State<AppState>,
    Json(request): Json<CalcRequest>,
) -> Response {
    // Input validation happens before any fetch is attempted.
    let symbol = match Symbol::new(&request.symbol) {
        Ok(symbol) => symbol,
        Err(err) => return invalid_input("invalid_symbol", &err.to_string()),
    };
    let expiry = match ExpiryDate::parse(&request.expiration) {
        Ok(expiry) => expiry,
        Err(err) => return invalid_input("invalid_date_format", &err.to_string()),
    };

    let spot = match state.provider.spot_price(&symbol).await {
        Ok(spot) => spot,
        Err(err) => return fetch_failure(&symbol, err),
    };
    let chain = match state.provider.option_chain(&symbol, expiry).await {
        Ok(chain) => chain,
        Err(err) => return fetch_failure(&symbol, err),
    };

    match emove_core::expected_move(spot, &chain) {
        Ok(result) => {
            tracing::info!(
                %symbol,
                %expiry,
                spot,
                atm_strike = result.atm_strike,
                expected_move = result.expected_move,
                "Expected move computed"
            );
            (
                StatusCode::OK,
                Json(CalcResponse {
                    symbol,
                    expiration: expiry,
                    result,
                }),
            )
                .into_response()
        }
        Err(err) => calculation_failure(&symbol, err),
    }
}

fn invalid_input(code: &str, message: &str) -> Response {
    tracing::warn!(error = code, message, "Rejected calculation input");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: code.to_string(),
            severity: Severity::Error.to_string(),
            message: message.to_string(),
        }),
    )
        .into_response()
}

fn fetch_failure(symbol: &Symbol, err: FeedError) -> Response {
    tracing::warn!(%symbol, error = %err, "Market data fetch failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: "data_fetch_failure".to_string(),
            severity: Severity::Error.to_string(),
            message: err.to_string(),
        }),
    )
        .into_response()
}

fn calculation_failure(symbol: &Symbol, err: ExpectedMoveError) -> Response {
    let code = match &err {
        ExpectedMoveError::InvalidSpot { .. } => "invalid_spot",
        ExpectedMoveError::EmptyChain => "empty_chain",
        ExpectedMoveError::MissingQuote { .. } => "missing_quote",
        ExpectedMoveError::InsufficientOtmStrikes { .. } => "insufficient_otm_strikes",
    };
    match err.severity() {
        Severity::Warning => tracing::warn!(%symbol, error = %err, "Calculation not possible"),
        Severity::Error => tracing::error!(%symbol, error = %err, "Calculation failed"),
    }
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: code.to_string(),
            severity: err.severity().to_string(),
            message: err.to_string(),
        }),
    )
        .into_response()
}
