use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validated targeting input. Required fields are trimmed and non-empty;
/// blank optional fields are `None`, never `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetingCriteria {
    pub location: String,
    pub demographic: String,
    pub industry: String,
    pub industry_focus: Option<String>,
    pub target_role: Option<String>,
}

/// Synthesized who-and-where of one prospect, before any copy is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectIdentity {
    pub name: String,
    pub title: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpTemplates {
    pub positive: String,
    pub negative: String,
    pub no_response: String,
}

impl FollowUpTemplates {
    pub fn get(&self, scenario: FollowUpScenario) -> &str {
        match scenario {
            FollowUpScenario::Positive => &self.positive,
            FollowUpScenario::Negative => &self.negative,
            FollowUpScenario::NoResponse => &self.no_response,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpScenario {
    Positive,
    Negative,
    NoResponse,
}

impl FollowUpScenario {
    pub const ALL: [FollowUpScenario; 3] = [
        FollowUpScenario::Positive,
        FollowUpScenario::Negative,
        FollowUpScenario::NoResponse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FollowUpScenario::Positive => "positive",
            FollowUpScenario::Negative => "negative",
            FollowUpScenario::NoResponse => "no_response",
        }
    }

    /// Label shown by the scenario picker.
    pub fn label(&self) -> &'static str {
        match self {
            FollowUpScenario::Positive => "Positive Response",
            FollowUpScenario::Negative => "Negative Response",
            FollowUpScenario::NoResponse => "No Response",
        }
    }
}

impl fmt::Display for FollowUpScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScenario(pub String);

impl fmt::Display for UnknownScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown follow-up scenario '{}'; expected positive, negative or no_response",
            self.0
        )
    }
}

impl FromStr for FollowUpScenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "positive" => Ok(FollowUpScenario::Positive),
            "negative" => Ok(FollowUpScenario::Negative),
            "no_response" | "noresponse" => Ok(FollowUpScenario::NoResponse),
            _ => Err(UnknownScenario(s.to_string())),
        }
    }
}

/// A synthesized contact plus its outreach copy. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prospect {
    pub name: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub profile_url: String,
    pub email_template: String,
    pub follow_up_templates: FollowUpTemplates,
}
