// Link expansion handlers

use axum::{
    extract::{Path, RawQuery, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::form_urlencoded;

use crate::{
    domain::{
        strip_paging_parameters,
        template::{ParamValue, Parameters},
    },
    error::AppError,
    AppState,
};

#[derive(Serialize)]
pub struct LinkSummary {
    pub rel: String,
    pub description: String,
    pub template: String,
}

#[derive(Serialize)]
pub struct ExpandedLink {
    pub rel: String,
    pub href: String,
}

#[derive(Serialize)]
pub struct Href {
    pub href: String,
}

// Body of POST /expand
#[derive(Deserialize)]
pub struct ExpandRequest {
    template: String,
    #[serde(default)]
    values: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    parameters: Option<serde_json::Value>,
    #[serde(default)]
    composite: bool,
    #[serde(default)]
    strip_paging: bool,
}

/// Collect a raw query string into named parameters. A repeated name
/// becomes a collection.
pub fn parameters_from_query(query: &str) -> Parameters {
    let mut parameters = Parameters::new();
    for (name, value) in form_urlencoded::parse(query.as_bytes()) {
        parameters.append(name, value);
    }
    parameters
}

// GET /links - The configured link relations
pub async fn list_links(State(state): State<Arc<AppState>>) -> Json<Vec<LinkSummary>> {
    let links = state
        .catalog
        .iter()
        .map(|link| LinkSummary {
            rel: link.rel.clone(),
            description: link.description.clone(),
            template: link.template.to_string(),
        })
        .collect();
    Json(links)
}

// GET /links/{rel} - Expand one relation with the request's query parameters
pub async fn expand_link(
    Path(rel): Path<String>,
    RawQuery(query): RawQuery,
    State(state): State<Arc<AppState>>,
) -> Result<Json<ExpandedLink>, AppError> {
    let link = state
        .catalog
        .get(&rel)
        .ok_or_else(|| AppError::NotFound(format!("link relation '{}'", rel)))?;

    let parameters = parameters_from_query(query.as_deref().unwrap_or_default());
    let href = state
        .expander
        .expand_parameters(&link.template, &parameters, link.composite)?;

    Ok(Json(ExpandedLink { rel, href }))
}

// POST /expand - Expand an ad-hoc template
pub async fn expand_template(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExpandRequest>,
) -> Result<Json<Href>, AppError> {
    let template = state.expander.template(&request.template)?;

    let href = match request.values {
        Some(values) => {
            let values: Vec<ParamValue> = values.into_iter().map(ParamValue::from).collect();
            state.expander.expand_values(&template, &values)?
        }
        None => {
            let parameters = request
                .parameters
                .map(Parameters::from_json)
                .unwrap_or_default();
            state
                .expander
                .expand_parameters(&template, &parameters, request.composite)?
        }
    };

    let href = if request.strip_paging {
        strip_paging_parameters(&href)
    } else {
        href
    };

    Ok(Json(Href { href }))
}
