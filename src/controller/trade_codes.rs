use actix_web::{get, post, web, Responder, Result};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::TradeCode,
};

#[get("/trade-codes")]
async fn get_index(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let data = state.database.trade_codes.get_all().await?;

    Ok(web::Json(data))
}

#[post("/trade-codes")]
async fn post_index(
    state: web::Data<AppState<State>>,
    form: web::Json<Form>,
) -> Result<impl Responder, Error> {
    let exchange_id = form.exchange_id.trim().to_owned();
    if exchange_id.is_empty() {
        return Err(Error::Validation(String::from(
            "exchange_id must not be empty",
        )));
    }

    let created = state
        .database
        .trade_codes
        .add(TradeCode {
            id: 0,
            exchange_id,
            description: form.description.to_owned(),
        })
        .await?;

    Ok(web::Json(created))
}

#[derive(Debug, Deserialize)]
pub struct Form {
    pub exchange_id: String,
    pub description: Option<String>,
}
