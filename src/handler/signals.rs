//! Signal panel loading and background refresh
//!
//! The analytics service is queried for the configured lookback
//! window, the latest-row labels are folded into buy/sell lists and
//! the whole report is cached in state. Controllers serve the cache;
//! the task below keeps it warm.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{Duration as Days, Utc};
use tokio::time::interval;
use tracing::{error, info};

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::SignalsReport,
    types::IndicatorRow,
};

pub async fn fetch(app_state: &AppState<State>) -> Result<SignalsReport, Error> {
    let analytics = &app_state.analytics;
    let ids = analytics.load_invest_ids().await?;

    let end_date = Utc::now().date_naive();
    let start_date = end_date - Days::days(app_state.config.signal_lookback_days);

    let results = analytics
        .run_parallel_processing(
            &ids,
            &start_date.format("%Y-%m-%d").to_string(),
            &end_date.format("%Y-%m-%d").to_string(),
        )
        .await?;

    let (buy, sell) = today_signals(&results);
    let recent = analytics
        .get_recent_data(&ids, app_state.config.recent_days)
        .await?;

    Ok(SignalsReport {
        loaded_at: Utc::now(),
        instruments: ids,
        buy,
        sell,
        recent,
    })
}

pub async fn refresh(
    app_state: AppState<State>,
) -> Result<SignalsReport, Error> {
    let report = fetch(&app_state).await?;

    let mut cache = app_state
        .cache
        .lock()
        .map_err(|_| Error::ServerError(String::from("signal cache lock")))?;
    cache.signals = Some(report.clone());

    Ok(report)
}

/// Instruments whose latest row is labelled Buy or Sell, sorted for a
/// stable display order.
pub fn today_signals(
    results: &HashMap<String, Vec<IndicatorRow>>,
) -> (Vec<String>, Vec<String>) {
    let mut buy = Vec::new();
    let mut sell = Vec::new();

    for (id, rows) in results {
        let Some(last) = rows.last() else {
            continue;
        };

        if last.signal.eq_ignore_ascii_case("buy") {
            buy.push(id.to_owned());
        } else if last.signal.eq_ignore_ascii_case("sell") {
            sell.push(id.to_owned());
        }
    }

    buy.sort();
    sell.sort();

    (buy, sell)
}

pub async fn signals_task(app_state: AppState<State>) -> Result<(), Error> {
    if !app_state.config.enable_signal_task {
        return Ok(());
    }

    let interval_value = app_state.config.signal_refresh_interval * 60;
    let mut interval = interval(Duration::from_secs(interval_value));
    // The first tick fires immediately; the startup fetch already ran.
    interval.tick().await;

    loop {
        interval.tick().await;

        match refresh(app_state.clone()).await {
            Ok(report) => info!(
                "signal cache refreshed: {} instruments, {} buy, {} sell",
                report.instruments.len(),
                report.buy.len(),
                report.sell.len()
            ),
            Err(err) => error!("signal refresh failed: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn row(signal: &str) -> IndicatorRow {
        IndicatorRow {
            trade_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            close: 100.0,
            rsi: Some(50.0),
            macd: None,
            ema_12: None,
            ema_26: None,
            adx: None,
            stoch_k: None,
            stoch_d: None,
            atr: None,
            signal: signal.to_owned(),
        }
    }

    #[test]
    fn today_signals_uses_latest_row_only() {
        let mut results = HashMap::new();
        results.insert(String::from("SBER"), vec![row("Sell"), row("Buy")]);
        results.insert(String::from("GAZP"), vec![row("Buy"), row("sell")]);
        results.insert(String::from("LKOH"), vec![row("Hold")]);
        results.insert(String::from("NVTK"), vec![]);

        let (buy, sell) = today_signals(&results);

        assert_eq!(buy, vec![String::from("SBER")]);
        assert_eq!(sell, vec![String::from("GAZP")]);
    }

    #[test]
    fn today_signals_sorts_for_stable_output() {
        let mut results = HashMap::new();
        for id in ["C", "A", "B"] {
            results.insert(id.to_owned(), vec![row("Buy")]);
        }

        let (buy, sell) = today_signals(&results);

        assert_eq!(buy, vec!["A", "B", "C"]);
        assert!(sell.is_empty());
    }
}
