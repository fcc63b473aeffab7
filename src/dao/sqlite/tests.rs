use chrono::{DateTime, TimeZone, Utc};

use crate::{
    configuration::State,
    model::{
        Trade, TradeCode, TradeCodePatch, TradePatch, TradeType,
        TradeTypePatch, User,
    },
    provider::DatabasePool,
};

async fn test_db() -> DatabasePool {
    // One connection keeps every statement on the same in-memory db.
    let database = DatabasePool::connect("sqlite::memory:", 1).await.unwrap();
    State::init_migrations(&database).await.unwrap();
    database
}

fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn user(login: &str) -> User {
    User {
        id: 0,
        login: login.to_owned(),
        hash_password: String::from("hash"),
        last_login_date: ts(2024, 3, 1),
        refresh_token: None,
    }
}

fn trade(user_id: i64, trade_type_id: i64, trade_code_id: i64) -> Trade {
    Trade {
        id: 0,
        date_open: ts(2024, 3, 1),
        date_close: None,
        trade_open: 100.0,
        trade_close: None,
        net_income: None,
        count: 10,
        trade_type_id,
        trade_code_id,
        user_id,
    }
}

async fn seed_refs(database: &DatabasePool) -> (i64, i64, i64) {
    let user = database.users.add(user("trader")).await.unwrap();
    let trade_type = database
        .trade_types
        .add(TradeType {
            id: 0,
            name: String::from("buy"),
        })
        .await
        .unwrap();
    let trade_code = database
        .trade_codes
        .add(TradeCode {
            id: 0,
            exchange_id: String::from("SBER"),
            description: Some(String::from("Sberbank")),
        })
        .await
        .unwrap();

    (user.id, trade_type.id, trade_code.id)
}

#[tokio::test]
async fn get_all_on_empty_table_returns_empty_vec() {
    let database = test_db().await;

    let trades = database.trades.get_all().await.unwrap();

    assert!(trades.is_empty());
}

#[tokio::test]
async fn add_returns_record_with_generated_id() {
    let database = test_db().await;

    let created = database
        .trade_codes
        .add(TradeCode {
            id: 0,
            exchange_id: String::from("GAZP"),
            description: None,
        })
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.exchange_id, "GAZP");
    assert_eq!(created.description, None);
}

#[tokio::test]
async fn add_then_get_by_id_round_trips_all_fields() {
    let database = test_db().await;
    let (user_id, trade_type_id, trade_code_id) = seed_refs(&database).await;

    let created = database
        .trades
        .add(trade(user_id, trade_type_id, trade_code_id))
        .await
        .unwrap();
    let fetched = database
        .trades
        .get_by_id(created.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.date_open, ts(2024, 3, 1));
    assert_eq!(fetched.date_close, None);
    assert_eq!(fetched.trade_open, 100.0);
    assert_eq!(fetched.trade_close, None);
    assert_eq!(fetched.net_income, None);
    assert_eq!(fetched.count, 10);
    assert_eq!(fetched.trade_type_id, trade_type_id);
    assert_eq!(fetched.trade_code_id, trade_code_id);
    assert_eq!(fetched.user_id, user_id);
}

#[tokio::test]
async fn get_by_id_missing_returns_none_without_error() {
    let database = test_db().await;

    let missing = database.users.get_by_id(42).await.unwrap();

    assert!(missing.is_none());
}

#[tokio::test]
async fn update_reflects_exactly_the_patched_fields() {
    let database = test_db().await;
    let (user_id, trade_type_id, trade_code_id) = seed_refs(&database).await;
    let created = database
        .trades
        .add(trade(user_id, trade_type_id, trade_code_id))
        .await
        .unwrap();

    let patch = TradePatch {
        date_close: Some(Some(ts(2024, 3, 15))),
        trade_close: Some(Some(110.0)),
        net_income: Some(Some(10.0)),
        ..TradePatch::default()
    };
    let updated = database
        .trades
        .update(created.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.date_close, Some(ts(2024, 3, 15)));
    assert_eq!(updated.trade_close, Some(110.0));
    assert_eq!(updated.net_income, Some(10.0));
    // Untouched fields keep their values.
    assert_eq!(updated.date_open, created.date_open);
    assert_eq!(updated.trade_open, created.trade_open);
    assert_eq!(updated.count, created.count);
    assert_eq!(updated.trade_type_id, created.trade_type_id);
}

#[tokio::test]
async fn update_can_clear_nullable_fields() {
    let database = test_db().await;

    let created = database
        .trade_codes
        .add(TradeCode {
            id: 0,
            exchange_id: String::from("LKOH"),
            description: Some(String::from("Lukoil")),
        })
        .await
        .unwrap();

    let patch = TradeCodePatch {
        description: Some(None),
        ..TradeCodePatch::default()
    };
    let updated = database
        .trade_codes
        .update(created.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.description, None);
    assert_eq!(updated.exchange_id, "LKOH");
}

#[tokio::test]
async fn update_missing_id_returns_none() {
    let database = test_db().await;

    let patch = TradeTypePatch {
        name: Some(String::from("short")),
    };
    let updated = database.trade_types.update(42, patch).await.unwrap();

    assert!(updated.is_none());
}

#[tokio::test]
async fn empty_patch_is_a_plain_read() {
    let database = test_db().await;

    let created = database
        .trade_types
        .add(TradeType {
            id: 0,
            name: String::from("sell"),
        })
        .await
        .unwrap();

    let updated = database
        .trade_types
        .update(created.id, TradeTypePatch::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "sell");
}

#[tokio::test]
async fn delete_then_get_by_id_returns_none() {
    let database = test_db().await;
    let (user_id, trade_type_id, trade_code_id) = seed_refs(&database).await;
    let created = database
        .trades
        .add(trade(user_id, trade_type_id, trade_code_id))
        .await
        .unwrap();

    database.trades.delete(created.id).await.unwrap();

    let gone = database.trades.get_by_id(created.id).await.unwrap();
    assert!(gone.is_none());
}

#[tokio::test]
async fn delete_missing_id_is_a_noop() {
    let database = test_db().await;

    database.trades.delete(42).await.unwrap();
}

#[tokio::test]
async fn duplicate_trade_type_name_is_a_unique_violation() {
    let database = test_db().await;

    database
        .trade_types
        .add(TradeType {
            id: 0,
            name: String::from("buy"),
        })
        .await
        .unwrap();
    let duplicate = database
        .trade_types
        .add(TradeType {
            id: 0,
            name: String::from("buy"),
        })
        .await;

    match duplicate {
        Err(sqlx::Error::Database(e)) => assert!(e.is_unique_violation()),
        other => panic!("expected unique violation, got {:?}", other),
    }
}

#[tokio::test]
async fn trade_references_must_exist() {
    let database = test_db().await;
    let (user_id, trade_type_id, _) = seed_refs(&database).await;

    let orphan = database
        .trades
        .add(trade(user_id, trade_type_id, 999))
        .await;

    match orphan {
        Err(sqlx::Error::Database(e)) => {
            assert!(e.is_foreign_key_violation())
        },
        other => panic!("expected foreign key violation, got {:?}", other),
    }
}

#[tokio::test]
async fn get_open_returns_only_open_positions() {
    let database = test_db().await;
    let (user_id, trade_type_id, trade_code_id) = seed_refs(&database).await;

    let open = database
        .trades
        .add(trade(user_id, trade_type_id, trade_code_id))
        .await
        .unwrap();
    let mut closed = trade(user_id, trade_type_id, trade_code_id);
    closed.date_close = Some(ts(2024, 3, 20));
    closed.trade_close = Some(110.0);
    closed.net_income = Some(10.0);
    database.trades.add(closed).await.unwrap();

    let open_trades = database.trades.get_open().await.unwrap();

    assert_eq!(open_trades.len(), 1);
    assert_eq!(open_trades[0].id, open.id);
}

#[tokio::test]
async fn get_all_with_refs_joins_type_and_code() {
    let database = test_db().await;
    let (user_id, trade_type_id, trade_code_id) = seed_refs(&database).await;
    database
        .trades
        .add(trade(user_id, trade_type_id, trade_code_id))
        .await
        .unwrap();

    let views = database.trades.get_all_with_refs().await.unwrap();

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].trade_type, "buy");
    assert_eq!(views[0].trade_code, "SBER");
    assert_eq!(views[0].trade_open, 100.0);
}

#[tokio::test]
async fn get_by_login_and_seed_insert_are_idempotent() {
    let database = test_db().await;

    database.users.insert_or_ignore(user("trader")).await.unwrap();
    database.users.insert_or_ignore(user("trader")).await.unwrap();

    let found = database
        .users
        .get_by_login("trader")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.login, "trader");

    let all = database.users.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
}
