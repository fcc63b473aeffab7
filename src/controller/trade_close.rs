use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::net_income,
    model::TradePatch,
};

/// Close a position: derive the net income from the trade's type and
/// stamp the close date and price. Read, compute, update; the three
/// store round trips are not atomic, which is fine for a single user.
#[post("/trades/close")]
async fn index(
    state: web::Data<AppState<State>>,
    form: web::Json<Form>,
) -> Result<impl Responder, Error> {
    let trade = state
        .database
        .trades
        .get_by_id(form.id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("trade {}", form.id)))?;

    if trade.date_close.is_some() {
        return Err(Error::Validation(format!(
            "trade {} is already closed",
            trade.id
        )));
    }
    if trade.trade_open <= 0.0 {
        return Err(Error::Validation(format!(
            "trade {} has no usable open price",
            trade.id
        )));
    }

    let trade_type = state
        .database
        .trade_types
        .get_by_id(trade.trade_type_id)
        .await?
        .ok_or_else(|| {
            Error::NotFound(format!("trade type {}", trade.trade_type_id))
        })?;

    let income = net_income(&trade_type.name, trade.trade_open, form.trade_close);

    let patch = TradePatch {
        date_close: Some(Some(Utc::now())),
        trade_close: Some(Some(form.trade_close)),
        net_income: Some(Some(income)),
        ..TradePatch::default()
    };

    let updated = state
        .database
        .trades
        .update(trade.id, patch)
        .await?
        .ok_or_else(|| Error::NotFound(format!("trade {}", trade.id)))?;

    Ok(web::Json(updated))
}

#[derive(Debug, Deserialize)]
pub struct Form {
    pub id: i64,
    pub trade_close: f64,
}
