//! Axum route handlers for the two-step prospect form.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::{Json, Path};
use crate::prospects::export::{prospects_to_csv, EXPORT_FILE_NAME};
use crate::prospects::generator::generate_prospects;
use crate::prospects::models::{FollowUpScenario, Prospect, TargetingCriteria};
use crate::prospects::validation::{validate_criteria, CriteriaInput};
use crate::random::RngSource;
use crate::session::models::{FormSession, FormStep, SessionStats};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub demographic: String,
    #[serde(default)]
    pub industry: String,
}

#[derive(Debug, Serialize)]
pub struct StartSessionResponse {
    pub session_id: Uuid,
    pub step: FormStep,
    pub criteria: TargetingCriteria,
    /// Choices for step 2, conditioned on the industry. Empty for unknown industries.
    pub focus_options: Vec<String>,
    pub role_options: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RefinementRequest {
    #[serde(default)]
    pub industry_focus: Option<String>,
    #[serde(default)]
    pub target_role: Option<String>,
}

/// One navigation tab: "Prospect 1 of 5".
#[derive(Debug, Serialize)]
pub struct ProspectSummary {
    pub index: usize,
    pub label: String,
    pub name: String,
    pub title: String,
    pub company: String,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub step: FormStep,
    pub criteria: TargetingCriteria,
    pub prospects: Vec<ProspectSummary>,
    pub stats: Option<SessionStats>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ScenarioOption {
    pub key: FollowUpScenario,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProspectCard {
    pub index: usize,
    pub label: String,
    pub prospect: Prospect,
    pub follow_up_scenarios: Vec<ScenarioOption>,
}

#[derive(Debug, Serialize)]
pub struct FollowUpView {
    pub scenario: FollowUpScenario,
    pub label: &'static str,
    pub template: String,
}

impl SessionView {
    fn from_session(session: &FormSession) -> Self {
        let total = session.prospects.len();
        Self {
            session_id: session.id,
            step: session.step,
            criteria: session.criteria.clone(),
            prospects: session
                .prospects
                .iter()
                .enumerate()
                .map(|(index, p)| ProspectSummary {
                    index,
                    label: tab_label(index, total),
                    name: p.name.clone(),
                    title: p.title.clone(),
                    company: p.company.clone(),
                })
                .collect(),
            stats: session.stats(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

fn tab_label(index: usize, total: usize) -> String {
    format!("Prospect {} of {}", index + 1, total)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Form step 1. Validates the required fields and opens a session.
pub async fn handle_start_session(
    State(state): State<AppState>,
    Json(request): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<StartSessionResponse>), AppError> {
    let criteria = validate_criteria(&CriteriaInput {
        location: request.location,
        demographic: request.demographic,
        industry: request.industry,
        ..CriteriaInput::default()
    })?;

    let (focus_options, role_options) = match state.catalog.find(&criteria.industry) {
        Some(profile) => (profile.focus_options.clone(), profile.role_options.clone()),
        None => (Vec::new(), Vec::new()),
    };

    let session = FormSession::start(criteria);
    let response = StartSessionResponse {
        session_id: session.id,
        step: session.step,
        criteria: session.criteria.clone(),
        focus_options,
        role_options,
    };
    state.sessions.insert(session).await;

    info!(
        "Session {} started for industry '{}'",
        response.session_id, response.criteria.industry
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/v1/sessions/:id/refinement
///
/// Form step 2. Applies the optional focus and role, then generates prospects.
/// Re-submitting replaces the previous results.
pub async fn handle_refine_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RefinementRequest>,
) -> Result<Json<SessionView>, AppError> {
    let catalog = state.catalog.clone();
    let settings = state.selector_settings.clone();

    let view = state
        .sessions
        .update(id, move |session| {
            let criteria = validate_criteria(&CriteriaInput {
                location: session.criteria.location.clone(),
                demographic: session.criteria.demographic.clone(),
                industry: session.criteria.industry.clone(),
                industry_focus: request.industry_focus,
                target_role: request.target_role,
            })?;

            let mut rng = RngSource::from_entropy();
            let prospects = generate_prospects(&catalog, &criteria, &settings, &mut rng);
            session.complete(criteria, prospects);
            Ok(SessionView::from_session(session))
        })
        .await?;

    Ok(Json(view))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let view = state
        .sessions
        .read(id, |session| Ok(SessionView::from_session(session)))
        .await?;
    Ok(Json(view))
}

/// GET /api/v1/sessions/:id/prospects/:index
///
/// Prospect card for the navigation tab at `index` (0-based).
pub async fn handle_get_prospect(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<Json<ProspectCard>, AppError> {
    let card = state
        .sessions
        .read(id, |session| {
            let prospect = session.prospect(index)?.clone();
            Ok(ProspectCard {
                index,
                label: tab_label(index, session.prospects.len()),
                prospect,
                follow_up_scenarios: FollowUpScenario::ALL
                    .into_iter()
                    .map(|key| ScenarioOption {
                        key,
                        label: key.label(),
                    })
                    .collect(),
            })
        })
        .await?;
    Ok(Json(card))
}

/// GET /api/v1/sessions/:id/prospects/:index/follow-ups/:scenario
pub async fn handle_get_follow_up(
    State(state): State<AppState>,
    Path((id, index, scenario)): Path<(Uuid, usize, String)>,
) -> Result<Json<FollowUpView>, AppError> {
    let scenario: FollowUpScenario = scenario.parse()?;
    let view = state
        .sessions
        .read(id, |session| {
            let prospect = session.prospect(index)?;
            Ok(FollowUpView {
                scenario,
                label: scenario.label(),
                template: prospect.follow_up_templates.get(scenario).to_string(),
            })
        })
        .await?;
    Ok(Json(view))
}

/// GET /api/v1/sessions/:id/export
///
/// Downloads the session's prospects as CSV.
pub async fn handle_export_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let csv = state
        .sessions
        .read(id, |session| {
            session.require_results()?;
            Ok(prospects_to_csv(&session.prospects)?)
        })
        .await?;

    info!("Exported {} bytes of CSV for session {id}", csv.len());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        csv,
    ))
}

/// DELETE /api/v1/sessions/:id
///
/// Resets the form by discarding the session.
pub async fn handle_reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(id).await {
        return Err(AppError::NotFound(format!("Session {id} not found or expired")));
    }
    info!("Session {id} reset");
    Ok(StatusCode::NO_CONTENT)
}
