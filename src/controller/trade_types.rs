use actix_web::{get, post, web, Responder, Result};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::TradeType,
};

#[get("/trade-types")]
async fn get_index(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let data = state.database.trade_types.get_all().await?;

    Ok(web::Json(data))
}

/// A duplicate name surfaces the store's unique violation (409).
#[post("/trade-types")]
async fn post_index(
    state: web::Data<AppState<State>>,
    form: web::Json<Form>,
) -> Result<impl Responder, Error> {
    let name = form.name.trim().to_owned();
    if name.is_empty() {
        return Err(Error::Validation(String::from("name must not be empty")));
    }

    let created = state
        .database
        .trade_types
        .add(TradeType { id: 0, name })
        .await?;

    Ok(web::Json(created))
}

#[derive(Debug, Deserialize)]
pub struct Form {
    pub name: String,
}
