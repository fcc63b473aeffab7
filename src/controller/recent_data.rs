use actix_web::{get, web, Responder, Result};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
};

const MAX_DAYS: i64 = 30;

/// Live most-recent-rows fetch per instrument.
#[get("/signals/recent")]
async fn index(
    state: web::Data<AppState<State>>,
    data: web::Query<Query>,
) -> Result<impl Responder, Error> {
    let mut days = data.days.unwrap_or(state.config.recent_days);
    if days < 1 {
        days = 1;
    }
    if days > MAX_DAYS {
        days = MAX_DAYS;
    }

    let cached_ids = {
        let cache = state.cache.lock().map_err(|_| {
            Error::ServerError(String::from("signal cache lock"))
        })?;
        cache.signals.as_ref().map(|report| report.instruments.clone())
    };

    let ids = match cached_ids {
        Some(ids) => ids,
        None => state.analytics.load_invest_ids().await?,
    };

    let recent = state.analytics.get_recent_data(&ids, days).await?;

    Ok(web::Json(recent))
}

#[derive(Debug, Deserialize)]
pub struct Query {
    days: Option<i64>,
}
