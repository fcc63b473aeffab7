use actix_web::{post, web, Responder, Result};
use serde::{Deserialize, Serialize};

use crate::{
    configuration::{AppState, State},
    error::Error,
};

/// Hard delete; deleting an id that is already gone is a no-op.
#[post("/trades/delete")]
async fn index(
    state: web::Data<AppState<State>>,
    form: web::Json<Form>,
) -> Result<impl Responder, Error> {
    state.database.trades.delete(form.id).await?;

    Ok(web::Json(Response { result: true }))
}

#[derive(Debug, Deserialize)]
pub struct Form {
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub result: bool,
}
