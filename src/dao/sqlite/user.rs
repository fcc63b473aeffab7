use sqlx::{query_builder::Separated, Error};

use super::{DataBase, Entity, InsertQuery, Patch};
use crate::model::{Table, User, UserPatch};

impl Entity for User {
    const TABLE: &'static str = "users";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["login", "hash_password", "last_login_date", "refresh_token"];

    type Patch = UserPatch;

    fn bind_insert<'q>(&'q self, query: InsertQuery<'q>) -> InsertQuery<'q> {
        query
            .bind(&self.login)
            .bind(&self.hash_password)
            .bind(self.last_login_date)
            .bind(&self.refresh_token)
    }
}

impl Patch for UserPatch {
    fn is_empty(&self) -> bool {
        self.login.is_none()
            && self.hash_password.is_none()
            && self.last_login_date.is_none()
            && self.refresh_token.is_none()
    }

    fn push(&self, fields: &mut Separated<'_, '_, DataBase, &'static str>) {
        if let Some(login) = &self.login {
            fields.push(r#""login" = "#);
            fields.push_bind_unseparated(login.clone());
        }
        if let Some(hash_password) = &self.hash_password {
            fields.push(r#""hash_password" = "#);
            fields.push_bind_unseparated(hash_password.clone());
        }
        if let Some(last_login_date) = self.last_login_date {
            fields.push(r#""last_login_date" = "#);
            fields.push_bind_unseparated(last_login_date);
        }
        if let Some(refresh_token) = &self.refresh_token {
            fields.push(r#""refresh_token" = "#);
            fields.push_bind_unseparated(refresh_token.clone());
        }
    }
}

impl Table<User> {
    pub async fn get_by_login(
        &self,
        login: &str,
    ) -> Result<Option<User>, Error> {
        const SQL: &str = r#"
        SELECT *
        FROM "users"
        WHERE "login" = ?
        "#;

        sqlx::query_as(SQL).bind(login).fetch_optional(&self.pool).await
    }

    /// Idempotent seed insert for the configured default user.
    pub async fn insert_or_ignore(&self, data: User) -> Result<(), Error> {
        const SQL: &str = r#"
        INSERT INTO "users" (
            "login",
            "hash_password",
            "last_login_date",
            "refresh_token"
        )
        VALUES (?, ?, ?, ?)
        ON CONFLICT DO NOTHING
        "#;

        sqlx::query(SQL)
            .bind(&data.login)
            .bind(&data.hash_password)
            .bind(data.last_login_date)
            .bind(&data.refresh_token)
            .execute(&self.pool)
            .await
            .map(drop)
    }
}
