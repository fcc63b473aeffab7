use sqlx::query_builder::Separated;

use super::{DataBase, Entity, InsertQuery, Patch};
use crate::model::{TradeCode, TradeCodePatch};

impl Entity for TradeCode {
    const TABLE: &'static str = "tradecodes";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["exchange_id", "description"];

    type Patch = TradeCodePatch;

    fn bind_insert<'q>(&'q self, query: InsertQuery<'q>) -> InsertQuery<'q> {
        query.bind(&self.exchange_id).bind(&self.description)
    }
}

impl Patch for TradeCodePatch {
    fn is_empty(&self) -> bool {
        self.exchange_id.is_none() && self.description.is_none()
    }

    fn push(&self, fields: &mut Separated<'_, '_, DataBase, &'static str>) {
        if let Some(exchange_id) = &self.exchange_id {
            fields.push(r#""exchange_id" = "#);
            fields.push_bind_unseparated(exchange_id.clone());
        }
        if let Some(description) = &self.description {
            fields.push(r#""description" = "#);
            fields.push_bind_unseparated(description.clone());
        }
    }
}
