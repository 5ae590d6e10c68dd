mod dashboard;
mod rsvp;

use axum::{routing::{get, post}, Router};

use crate::AppState;

pub use dashboard::list_names;
pub use rsvp::{register, RsvpRequest};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rsvp", post(rsvp::rsvp))
        .route("/dashboard", get(dashboard::dashboard))
}
