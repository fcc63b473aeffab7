use actix_web::{get, post, web, Responder, Result};
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::parse_date,
    model::Trade,
};

/// Open positions, for the close-form selector.
#[get("/trades/open")]
async fn get_index(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let data = state.database.trades.get_open().await?;

    Ok(web::Json(data))
}

/// "Start investment": creates an open position, close fields all null.
#[post("/trades/open")]
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
    let user = super::default_user(&state).await?;

    let trade = Trade {
        id: 0,
        date_open,
        date_close: None,
        trade_open: form.trade_open,
        trade_close: None,
        net_income: None,
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
    pub trade_open: f64,
    pub count: i64,
    pub trade_type_id: i64,
    pub trade_code_id: i64,
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use super::*;
    use crate::{
        configuration::Config,
        model::TradeCode,
        provider::{Analytics, DatabasePool},
    };

    fn config() -> Config {
        Config {
            database_url: String::from("sqlite::memory:"),
            server_host: String::from("127.0.0.1"),
            port: 0,
            allowed_origins: vec![String::from("*")],
            static_dir: String::new(),
            analytics_host: String::from("http://127.0.0.1:9"),
            signal_lookback_days: 30,
            recent_days: 5,
            signal_refresh_interval: 60,
            enable_signal_task: false,
            default_login: String::from("trader"),
            default_password: String::from("changeme"),
            trade_types: vec![String::from("buy"), String::from("sell")],
        }
    }

    async fn test_state() -> AppState<State> {
        let database = DatabasePool::connect("sqlite::memory:", 1)
            .await
            .unwrap();
        let state = State::new(config(), database, Analytics::new(config()))
            .await
            .unwrap();

        AppState::new(state)
    }

    #[actix_web::test]
    async fn open_listing_serves_only_open_positions() {
        let app_state = test_state().await;

        let code = app_state
            .database
            .trade_codes
            .add(TradeCode {
                id: 0,
                exchange_id: String::from("SBER"),
                description: None,
            })
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state.clone()))
                .service(get_index)
                .service(post_index),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/trades/open")
            .set_json(serde_json::json!({
                "date_open": "2024-03-01",
                "trade_open": 100.0,
                "count": 10,
                "trade_type_id": 1,
                "trade_code_id": code.id,
            }))
            .to_request();
        let created: Trade = test::call_and_read_body_json(&app, request).await;

        let request = test::TestRequest::get()
            .uri("/trades/open")
            .to_request();
        let open: Vec<Trade> = test::call_and_read_body_json(&app, request).await;

        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, created.id);
        assert_eq!(open[0].date_close, None);
    }
}
