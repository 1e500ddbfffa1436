use axum::{extract::State, Json};
use serde::Serialize;

use crate::catalog::IndustryOptions;
use crate::state::AppState;

#[derive(Serialize)]
pub struct IndustriesResponse {
    pub industries: Vec<IndustryOptions>,
}

/// GET /api/v1/industries
///
/// Enumerated industries with the focus and role options the form offers for each.
pub async fn handle_list_industries(State(state): State<AppState>) -> Json<IndustriesResponse> {
    Json(IndustriesResponse {
        industries: state.catalog.list_options(),
    })
}
