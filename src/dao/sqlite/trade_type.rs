use sqlx::{query_builder::Separated, Error};

use super::{DataBase, Entity, InsertQuery, Patch};
use crate::model::{Table, TradeType, TradeTypePatch};

impl Entity for TradeType {
    const TABLE: &'static str = "tradetypes";
    const INSERT_COLUMNS: &'static [&'static str] = &["name"];

    type Patch = TradeTypePatch;

    fn bind_insert<'q>(&'q self, query: InsertQuery<'q>) -> InsertQuery<'q> {
        query.bind(&self.name)
    }
}

impl Patch for TradeTypePatch {
    fn is_empty(&self) -> bool {
        self.name.is_none()
    }

    fn push(&self, fields: &mut Separated<'_, '_, DataBase, &'static str>) {
        if let Some(name) = &self.name {
            fields.push(r#""name" = "#);
            fields.push_bind_unseparated(name.clone());
        }
    }
}

impl Table<TradeType> {
    /// Idempotent seed insert for the configured type names.
    pub async fn insert_or_ignore(&self, name: &str) -> Result<(), Error> {
        const SQL: &str = r#"
        INSERT INTO "tradetypes" ("name")
        VALUES (?)
        ON CONFLICT DO NOTHING
        "#;

        sqlx::query(SQL).bind(name).execute(&self.pool).await.map(drop)
    }
}
