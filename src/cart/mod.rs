mod dto;
pub mod handlers;
mod repo;

pub use repo::{Cart, CartItem, CartLine};

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::routes())
}
