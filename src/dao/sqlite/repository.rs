//! Generic CRUD over any journal entity.
//!
//! `Table<T>` gains the five repository operations for every type that
//! implements [`Entity`]. Entity impls only declare the table name, the
//! insert column list and how to bind their fields; partial updates go
//! through the entity's [`Patch`] type and a `QueryBuilder`.

use sqlx::{query_builder::Separated, Error, FromRow, QueryBuilder};

use super::{DBRow, DataBase, InsertQuery};
use crate::model::Table;

pub trait Entity: for<'r> FromRow<'r, DBRow> + Send + Unpin {
    const TABLE: &'static str;
    /// Persisted columns in insert order, excluding the generated id.
    const INSERT_COLUMNS: &'static [&'static str];

    type Patch: Patch + Send;

    fn bind_insert<'q>(&'q self, query: InsertQuery<'q>) -> InsertQuery<'q>;
}

pub trait Patch {
    fn is_empty(&self) -> bool;
    fn push(&self, fields: &mut Separated<'_, '_, DataBase, &'static str>);
}

impl<T: Entity> Table<T> {
    pub async fn get_by_id(&self, id: i64) -> Result<Option<T>, Error> {
        let sql = format!(
            r#"
            SELECT *
            FROM "{}"
            WHERE "id" = ?
            "#,
            T::TABLE
        );

        sqlx::query_as(&sql).bind(id).fetch_optional(&self.pool).await
    }

    pub async fn get_all(&self) -> Result<Vec<T>, Error> {
        let sql = format!(
            r#"
            SELECT *
            FROM "{}"
            ORDER BY "id"
            "#,
            T::TABLE
        );

        sqlx::query_as(&sql).fetch_all(&self.pool).await
    }

    /// Inserts the record and commits, then re-reads the row so the
    /// caller gets the generated id and any store defaults back.
    pub async fn add(&self, data: T) -> Result<T, Error> {
        let sql = insert_sql::<T>();
        let result =
            data.bind_insert(sqlx::query(&sql)).execute(&self.pool).await?;
        let id = result.last_insert_rowid();

        self.get_by_id(id).await?.ok_or(Error::RowNotFound)
    }

    /// Applies the set fields of the patch and returns the refreshed
    /// row, or `None` if the id no longer exists. An empty patch
    /// degenerates to a plain read.
    pub async fn update(
        &self,
        id: i64,
        patch: T::Patch,
    ) -> Result<Option<T>, Error> {
        if patch.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query_builder: QueryBuilder<DataBase> =
            QueryBuilder::new(format!(r#"UPDATE "{}" SET "#, T::TABLE));
        let mut fields = query_builder.separated(", ");
        patch.push(&mut fields);
        query_builder.push(r#" WHERE "id" = "#);
        query_builder.push_bind(id);

        query_builder.build().execute(&self.pool).await?;

        self.get_by_id(id).await
    }

    /// No-op when the id does not exist.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        let sql = format!(
            r#"
            DELETE FROM "{}"
            WHERE "id" = ?
            "#,
            T::TABLE
        );

        sqlx::query(&sql).bind(id).execute(&self.pool).await.map(drop)
    }
}

fn insert_sql<T: Entity>() -> String {
    let columns = T::INSERT_COLUMNS
        .iter()
        .map(|column| format!(r#""{}""#, column))
        .collect::<Vec<String>>()
        .join(", ");
    let placeholders = vec!["?"; T::INSERT_COLUMNS.len()].join(", ");

    format!(
        r#"INSERT INTO "{}" ({}) VALUES ({})"#,
        T::TABLE,
        columns,
        placeholders
    )
}
