use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::prospects::models::{Prospect, TargetingCriteria};

/// Where a session is in the two-step form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    /// Base criteria accepted; waiting for the optional focus/role step.
    Refinement,
    /// Prospects generated and available for navigation and export.
    Results,
}

/// Explicit form state for one client.
///
/// Created by step 1, updated by step 2 (re-submitting step 2 replaces the
/// prospects), discarded on reset or after `SESSION_TTL_MINUTES` of inactivity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSession {
    pub id: Uuid,
    pub step: FormStep,
    pub criteria: TargetingCriteria,
    pub prospects: Vec<Prospect>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Figures shown in the export/statistics panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub total_prospects: usize,
    pub industry: String,
    pub location: String,
}

impl FormSession {
    /// Step 1: base criteria only; focus and role are cleared.
    pub fn start(criteria: TargetingCriteria) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            step: FormStep::Refinement,
            criteria: TargetingCriteria {
                industry_focus: None,
                target_role: None,
                ..criteria
            },
            prospects: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Step 2: records the refined criteria and the prospects generated from them.
    pub fn complete(&mut self, criteria: TargetingCriteria, prospects: Vec<Prospect>) {
        self.criteria = criteria;
        self.prospects = prospects;
        self.step = FormStep::Results;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.updated_at > ttl
    }

    /// Prospect at a 0-based navigation index.
    pub fn prospect(&self, index: usize) -> Result<&Prospect, AppError> {
        self.require_results()?;
        self.prospects.get(index).ok_or_else(|| {
            AppError::NotFound(format!(
                "Prospect {index} not found; session has {} prospects",
                self.prospects.len()
            ))
        })
    }

    pub fn require_results(&self) -> Result<(), AppError> {
        match self.step {
            FormStep::Results => Ok(()),
            FormStep::Refinement => Err(AppError::Conflict(
                "No prospects yet; submit the refinement step first".to_string(),
            )),
        }
    }

    pub fn stats(&self) -> Option<SessionStats> {
        (self.step == FormStep::Results).then(|| SessionStats {
            total_prospects: self.prospects.len(),
            industry: self.criteria.industry.clone(),
            location: self.criteria.location.clone(),
        })
    }
}
