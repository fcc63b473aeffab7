//! Consolidated database models
//!
//! Entity structs mirror the journal tables one to one; every entity
//! carries a generated integer id. Patch structs describe partial
//! updates: a `None` field is left untouched, a set field is written
//! as-is (including writing NULL for the nullable columns).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::types::IndicatorRow;

// =============================================================================
// ENTITIES
// =============================================================================

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    pub hash_password: String,
    pub last_login_date: DateTime<Utc>,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct TradeType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct TradeCode {
    pub id: i64,
    pub exchange_id: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct Trade {
    pub id: i64,
    pub date_open: DateTime<Utc>,
    pub date_close: Option<DateTime<Utc>>,
    pub trade_open: f64,
    pub trade_close: Option<f64>,
    pub net_income: Option<f64>,
    pub count: i64,
    pub trade_type_id: i64,
    pub trade_code_id: i64,
    pub user_id: i64,
}

// =============================================================================
// UPDATE PATCHES
// =============================================================================

#[derive(Debug, Default)]
pub struct UserPatch {
    pub login: Option<String>,
    pub hash_password: Option<String>,
    pub last_login_date: Option<DateTime<Utc>>,
    pub refresh_token: Option<Option<String>>,
}

#[derive(Debug, Default)]
pub struct TradeTypePatch {
    pub name: Option<String>,
}

#[derive(Debug, Default)]
pub struct TradeCodePatch {
    pub exchange_id: Option<String>,
    pub description: Option<Option<String>>,
}

#[derive(Debug, Default)]
pub struct TradePatch {
    pub date_open: Option<DateTime<Utc>>,
    pub date_close: Option<Option<DateTime<Utc>>>,
    pub trade_open: Option<f64>,
    pub trade_close: Option<Option<f64>>,
    pub net_income: Option<Option<f64>>,
    pub count: Option<i64>,
    pub trade_type_id: Option<i64>,
    pub trade_code_id: Option<i64>,
    pub user_id: Option<i64>,
}

// =============================================================================
// DISPLAY / REPORT TYPES
// =============================================================================

/// One row of the dashboard trades table: a trade joined with its
/// type name and exchange code.
#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct TradeView {
    pub id: i64,
    pub date_open: DateTime<Utc>,
    pub date_close: Option<DateTime<Utc>>,
    pub trade_open: f64,
    pub trade_close: Option<f64>,
    pub net_income: Option<f64>,
    pub count: i64,
    pub trade_type: String,
    pub trade_code: String,
}

/// Cached snapshot of the signal panel data, refreshed by the
/// background task and served as-is by the controller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SignalsReport {
    pub loaded_at: DateTime<Utc>,
    pub instruments: Vec<String>,
    pub buy: Vec<String>,
    pub sell: Vec<String>,
    pub recent: HashMap<String, Vec<IndicatorRow>>,
}
