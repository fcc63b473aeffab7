pub mod recent_data;
pub mod signals;
pub mod trade_close;
pub mod trade_codes;
pub mod trade_delete;
pub mod trade_open;
pub mod trade_types;
pub mod trade_update;
pub mod trades;
pub mod version;

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::User,
};

/// All trade writes run on behalf of the single configured user.
pub(crate) async fn default_user(
    state: &AppState<State>,
) -> Result<User, Error> {
    let login = &state.config.default_login;

    state
        .database
        .users
        .get_by_login(login)
        .await?
        .ok_or_else(|| Error::NotFound(format!("user {}", login)))
}
