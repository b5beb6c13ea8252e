pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use config::LinkCatalog;
use domain::template::Expander;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use domain::strip_paging_parameters;
pub use domain::template::{
    expand, expand_named, expand_named_with, parse, ExpansionError, ParamValue, Parameters, UriTemplate,
};

// Application state
pub struct AppState {
    pub catalog: LinkCatalog,
    pub expander: Expander,
}

impl AppState {
    pub fn new(catalog: LinkCatalog) -> Self {
        Self {
            catalog,
            expander: Expander::new(),
        }
    }
}

/// Build the link service router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/links", get(handlers::links::list_links))
        .route("/links/{rel}", get(handlers::links::expand_link))
        .route("/expand", post(handlers::links::expand_template))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
