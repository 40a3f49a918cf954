mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;

use axum::{
    routing::{get, post},
    Router,
};

use crate::app::{mount, RouteTable, MATCH, SIGNUP};
use crate::state::AppState;

pub use repo::{SqliteUserStore, UserStore};

pub fn routes() -> RouteTable {
    vec![
        (SIGNUP, post(handlers::signup)),
        (MATCH, get(handlers::match_users)),
    ]
}

pub fn router() -> Router<AppState> {
    mount(routes())
}
