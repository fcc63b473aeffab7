use actix_web::{get, post, web, Responder, Result};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{check_close_fields, parse_date, parse_optional_date, parse_optional_f64},
    model::Trade,
};

#[get("/trades")]
async fn get_index(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let data = state.database.trades.get_all_with_refs().await?;

    Ok(web::Json(data))
}

/// Manual add with free-text close fields, as on the dashboard form.
#[post("/trades")]
async fn post_index(
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

    let user = super::default_user(&state).await?;

    let trade = Trade {
        id: 0,
        date_open,
        date_close,
        trade_open: form.trade_open,
        trade_close,
        net_income,
        count: form.count,
        trade_type_id: form.trade_type_id,
        trade_code_id: form.trade_code_id,
        user_id: user.id,
    };

    let created = state.database.trades.add(trade).await?;

    Ok(web::Json(created))
}

#[derive(Debug, Deserialize)]
pub struct Form {
    pub date_open: String,
    pub date_close: Option<String>,
    pub trade_open: f64,
    pub trade_close: Option<String>,
    pub net_income: Option<String>,
    pub count: i64,
    pub trade_type_id: i64,
    pub trade_code_id: i64,
}
