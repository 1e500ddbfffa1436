//! Builds the cold email and its three follow-ups for one identity.
//!
//! Pure over (identity, criteria, catalog) plus the injected random source.
//! The only random choice is the email's opening line; follow-ups do not
//! correlate with it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::IndustryCatalog;
use crate::outreach::templates::{
    fill_template, DEFAULT_FIRST_NAME, DEFAULT_ROLE_PHRASE, EMAIL_TEMPLATE, GENERIC_RESOURCE,
    NEGATIVE_FOLLOW_UP_TEMPLATE, NO_RESPONSE_FOLLOW_UP_TEMPLATE, POSITIVE_FOLLOW_UP_TEMPLATE,
    SUPPORT_FOCUS_AND_ROLE, SUPPORT_FOCUS_ONLY, SUPPORT_GENERAL, SUPPORT_ROLE_ONLY,
    VALUE_PROPOSITION_FOCUS_AND_ROLE, VALUE_PROPOSITION_FOCUS_ONLY, VALUE_PROPOSITION_GENERAL,
    VALUE_PROPOSITION_ROLE_ONLY,
};
use crate::prospects::models::{FollowUpTemplates, ProspectIdentity, TargetingCriteria};
use crate::random::{pick, RandomSource};

/// Email plus follow-ups for one prospect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutreachTemplates {
    pub email_template: String,
    pub follow_up: FollowUpTemplates,
}

/// Which optional criteria were supplied. Selects the value-proposition wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specificity {
    FocusAndRole,
    FocusOnly,
    RoleOnly,
    General,
}

impl Specificity {
    pub fn from_criteria(criteria: &TargetingCriteria) -> Self {
        match (
            criteria.industry_focus.is_some(),
            criteria.target_role.is_some(),
        ) {
            (true, true) => Specificity::FocusAndRole,
            (true, false) => Specificity::FocusOnly,
            (false, true) => Specificity::RoleOnly,
            (false, false) => Specificity::General,
        }
    }

    fn value_proposition_template(&self) -> &'static str {
        match self {
            Specificity::FocusAndRole => VALUE_PROPOSITION_FOCUS_AND_ROLE,
            Specificity::FocusOnly => VALUE_PROPOSITION_FOCUS_ONLY,
            Specificity::RoleOnly => VALUE_PROPOSITION_ROLE_ONLY,
            Specificity::General => VALUE_PROPOSITION_GENERAL,
        }
    }

    fn support_template(&self) -> &'static str {
        match self {
            Specificity::FocusAndRole => SUPPORT_FOCUS_AND_ROLE,
            Specificity::FocusOnly => SUPPORT_FOCUS_ONLY,
            Specificity::RoleOnly => SUPPORT_ROLE_ONLY,
            Specificity::General => SUPPORT_GENERAL,
        }
    }
}

/// Phrases shared by the email and every follow-up of one prospect.
struct Phrases<'a> {
    first_name: &'a str,
    company: &'a str,
    title: &'a str,
    industry: &'a str,
    focus_area: &'a str,
    focus: &'a str,
    role_phrase: String,
}

impl<'a> Phrases<'a> {
    fn new(identity: &'a ProspectIdentity, criteria: &'a TargetingCriteria) -> Self {
        let role_phrase = match criteria.target_role.as_deref() {
            Some(role) => format!("{role}s"),
            None => DEFAULT_ROLE_PHRASE.to_string(),
        };
        let focus_area = criteria
            .industry_focus
            .as_deref()
            .unwrap_or(&criteria.industry);

        Self {
            first_name: first_name(&identity.name),
            company: &identity.company,
            title: &identity.title,
            industry: &criteria.industry,
            focus_area,
            focus: criteria.industry_focus.as_deref().unwrap_or_default(),
            role_phrase,
        }
    }

    fn vars(&self) -> [(&str, &str); 7] {
        [
            ("first_name", self.first_name),
            ("company", self.company),
            ("title", self.title),
            ("industry", self.industry),
            ("focus_area", self.focus_area),
            ("focus", self.focus),
            ("role_phrase", self.role_phrase.as_str()),
        ]
    }
}

/// First whitespace-separated token of `name`, or a neutral greeting when blank.
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(DEFAULT_FIRST_NAME)
}

/// Composes the initial outreach email and the positive / negative / no-response
/// follow-ups for one identity. All four share the same derived phrases, so
/// company and industry references stay consistent across them.
pub fn compose_outreach<R>(
    catalog: &IndustryCatalog,
    identity: &ProspectIdentity,
    criteria: &TargetingCriteria,
    rng: &mut R,
) -> OutreachTemplates
where
    R: RandomSource + ?Sized,
{
    let profile = catalog.profile_for(&criteria.industry);
    let specificity = Specificity::from_criteria(criteria);
    let phrases = Phrases::new(identity, criteria);
    let vars = phrases.vars();

    let opening_template = pick(rng, &profile.opening_lines)
        .map(String::as_str)
        .unwrap_or_default();
    let opening_line = fill_template(opening_template, &vars);
    let value_proposition = fill_template(specificity.value_proposition_template(), &vars);

    let email_template = fill_template(
        EMAIL_TEMPLATE,
        &[
            ("company", phrases.company),
            ("focus_area", phrases.focus_area),
            ("first_name", phrases.first_name),
            ("opening_line", opening_line.trim()),
            ("value_proposition", value_proposition.as_str()),
        ],
    );

    let follow_up = compose_follow_ups(catalog, &phrases, specificity, &vars, &criteria.industry);

    debug!(
        "Composed outreach for {} at {} ({:?})",
        phrases.first_name, phrases.company, specificity
    );

    OutreachTemplates {
        email_template,
        follow_up,
    }
}

fn compose_follow_ups(
    catalog: &IndustryCatalog,
    phrases: &Phrases<'_>,
    specificity: Specificity,
    vars: &[(&str, &str)],
    industry: &str,
) -> FollowUpTemplates {
    let value_prop = fill_template(specificity.support_template(), vars);

    let resource = match catalog.profile_for(industry).resource_description.as_deref() {
        Some(description) if !description.trim().is_empty() => {
            fill_template(description.trim(), vars)
        }
        _ => fill_template(GENERIC_RESOURCE, vars),
    };

    let positive = fill_template(
        POSITIVE_FOLLOW_UP_TEMPLATE,
        &[("first_name", phrases.first_name), ("value_prop", value_prop.as_str())],
    );
    let negative = fill_template(
        NEGATIVE_FOLLOW_UP_TEMPLATE,
        &[
            ("first_name", phrases.first_name),
            ("resource", resource.as_str()),
            ("company", phrases.company),
        ],
    );
    let no_response = fill_template(
        NO_RESPONSE_FOLLOW_UP_TEMPLATE,
        &[
            ("first_name", phrases.first_name),
            ("focus_area", phrases.focus_area),
            ("value_prop", value_prop.as_str()),
        ],
    );

    FollowUpTemplates {
        positive,
        negative,
        no_response,
    }
}
