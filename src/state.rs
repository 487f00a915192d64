use crate::db::DB;
use crate::utils::token::TokenKeys;

#[derive(Clone)]
pub struct AppState {
    pub db: DB,
    pub tokens: TokenKeys,
}

impl AppState {
    pub fn new(db: DB, jwt_secret: &str) -> Self {
        Self {
            db,
            tokens: TokenKeys::new(jwt_secret),
        }
    }
}
