use sqlx::{query_builder::Separated, Error};

use super::{DataBase, Entity, InsertQuery, Patch};
use crate::model::{Table, Trade, TradePatch, TradeView};

impl Entity for Trade {
    const TABLE: &'static str = "trades";
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "date_open",
        "date_close",
        "trade_open",
        "trade_close",
        "net_income",
        "count",
        "trade_type_id",
        "trade_code_id",
        "user_id",
    ];

    type Patch = TradePatch;

    fn bind_insert<'q>(&'q self, query: InsertQuery<'q>) -> InsertQuery<'q> {
        query
            .bind(self.date_open)
            .bind(self.date_close)
            .bind(self.trade_open)
            .bind(self.trade_close)
            .bind(self.net_income)
            .bind(self.count)
            .bind(self.trade_type_id)
            .bind(self.trade_code_id)
            .bind(self.user_id)
    }
}

impl Patch for TradePatch {
    fn is_empty(&self) -> bool {
        self.date_open.is_none()
            && self.date_close.is_none()
            && self.trade_open.is_none()
            && self.trade_close.is_none()
            && self.net_income.is_none()
            && self.count.is_none()
            && self.trade_type_id.is_none()
            && self.trade_code_id.is_none()
            && self.user_id.is_none()
    }

    fn push(&self, fields: &mut Separated<'_, '_, DataBase, &'static str>) {
        if let Some(date_open) = self.date_open {
            fields.push(r#""date_open" = "#);
            fields.push_bind_unseparated(date_open);
        }
        if let Some(date_close) = self.date_close {
            fields.push(r#""date_close" = "#);
            fields.push_bind_unseparated(date_close);
        }
        if let Some(trade_open) = self.trade_open {
            fields.push(r#""trade_open" = "#);
            fields.push_bind_unseparated(trade_open);
        }
        if let Some(trade_close) = self.trade_close {
            fields.push(r#""trade_close" = "#);
            fields.push_bind_unseparated(trade_close);
        }
        if let Some(net_income) = self.net_income {
            fields.push(r#""net_income" = "#);
            fields.push_bind_unseparated(net_income);
        }
        if let Some(count) = self.count {
            fields.push(r#""count" = "#);
            fields.push_bind_unseparated(count);
        }
        if let Some(trade_type_id) = self.trade_type_id {
            fields.push(r#""trade_type_id" = "#);
            fields.push_bind_unseparated(trade_type_id);
        }
        if let Some(trade_code_id) = self.trade_code_id {
            fields.push(r#""trade_code_id" = "#);
            fields.push_bind_unseparated(trade_code_id);
        }
        if let Some(user_id) = self.user_id {
            fields.push(r#""user_id" = "#);
            fields.push_bind_unseparated(user_id);
        }
    }
}

impl Table<Trade> {
    /// Open positions only, insertion order.
    pub async fn get_open(&self) -> Result<Vec<Trade>, Error> {
        const SQL: &str = r#"
        SELECT *
        FROM "trades"
        WHERE "date_close" IS NULL
        ORDER BY "id"
        "#;

        sqlx::query_as(SQL).fetch_all(&self.pool).await
    }

    /// Dashboard rows: trades joined with their type name and
    /// exchange code.
    pub async fn get_all_with_refs(&self) -> Result<Vec<TradeView>, Error> {
        const SQL: &str = r#"
        SELECT
            t."id",
            t."date_open",
            t."date_close",
            t."trade_open",
            t."trade_close",
            t."net_income",
            t."count",
            tt."name" AS "trade_type",
            tc."exchange_id" AS "trade_code"
        FROM "trades" t
        JOIN "tradetypes" tt ON tt."id" = t."trade_type_id"
        JOIN "tradecodes" tc ON tc."id" = t."trade_code_id"
        ORDER BY t."id"
        "#;

        sqlx::query_as(SQL).fetch_all(&self.pool).await
    }
}
