//! Axum route handlers for one-shot prospect search.

use axum::extract::State;
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::Json;
use crate::prospects::generator::generate_prospects;
use crate::prospects::models::{Prospect, TargetingCriteria};
use crate::prospects::validation::{validate_criteria, CriteriaInput};
use crate::random::RngSource;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub criteria: TargetingCriteria,
    pub prospects: Vec<Prospect>,
}

/// POST /api/v1/prospects/search
///
/// Stateless variant of the form: full criteria in, five prospects out.
/// Nothing is stored; the caller owns the result.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<CriteriaInput>,
) -> Result<Json<SearchResponse>, AppError> {
    let criteria = validate_criteria(&request)?;

    let mut rng = RngSource::from_entropy();
    let prospects = generate_prospects(
        &state.catalog,
        &criteria,
        &state.selector_settings,
        &mut rng,
    );

    Ok(Json(SearchResponse {
        criteria,
        prospects,
    }))
}
