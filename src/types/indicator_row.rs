use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of an instrument's indicator table as returned by the
/// analytics service. Early rows may miss indicator values while the
/// lookback window is still warming up.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndicatorRow {
    #[serde(rename = "TRADEDATE")]
    pub trade_date: NaiveDate,
    #[serde(rename = "CLOSE")]
    pub close: f64,
    #[serde(rename = "RSI")]
    pub rsi: Option<f64>,
    #[serde(rename = "MACD")]
    pub macd: Option<f64>,
    #[serde(rename = "EMA_12")]
    pub ema_12: Option<f64>,
    #[serde(rename = "EMA_26")]
    pub ema_26: Option<f64>,
    #[serde(rename = "ADX")]
    pub adx: Option<f64>,
    #[serde(rename = "Stoch_K")]
    pub stoch_k: Option<f64>,
    #[serde(rename = "Stoch_D")]
    pub stoch_d: Option<f64>,
    #[serde(rename = "ATR")]
    pub atr: Option<f64>,
    #[serde(rename = "Signal")]
    pub signal: String,
}
