use actix_web::{post, web, Responder, Result};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{check_close_fields, parse_date, parse_optional_date, parse_optional_f64},
    model::TradePatch,
};

/// Full-row edit from the dashboard form. Empty close fields clear the
/// columns back to NULL.
#[post("/trades/update")]
async fn index(
    state: web::Data<AppState<State>>,
    form: web::Json<Form>,
) -> Result<impl Responder, Error> {
    if form.count < 1 {
        return Err(Error::Validation(String::from("count must be positive")));
    }
    if form.trade_open < 0.0 {
        return Err(Error::Validation(String::from(
            "trade_open must not be negative",
        )));
    }

    let date_open = parse_date(&form.date_open)?;
    let date_close = parse_optional_date(form.date_close.as_deref())?;
    let trade_close = parse_optional_f64(form.trade_close.as_deref())?;
    let net_income = parse_optional_f64(form.net_income.as_deref())?;
    check_close_fields(&date_close, &trade_close, &net_income)?;

    let patch = TradePatch {
        date_open: Some(date_open),
        date_close: Some(date_close),
        trade_open: Some(form.trade_open),
        trade_close: Some(trade_close),
        net_income: Some(net_income),
        count: Some(form.count),
        trade_type_id: Some(form.trade_type_id),
        trade_code_id: Some(form.trade_code_id),
        ..TradePatch::default()
    };

    let updated = state
        .database
        .trades
        .update(form.id, patch)
        .await?
        .ok_or_else(|| Error::NotFound(format!("trade {}", form.id)))?;

    Ok(web::Json(updated))
}

#[derive(Debug, Deserialize)]
pub struct Form {
    pub id: i64,
    pub date_open: String,
    pub date_close: Option<String>,
    pub trade_open: f64,
    pub trade_close: Option<String>,
    pub net_income: Option<String>,
    pub count: i64,
    pub trade_type_id: i64,
    pub trade_code_id: i64,
}
