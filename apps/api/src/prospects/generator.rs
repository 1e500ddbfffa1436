//! Orchestrates catalog selection, identity drawing and composition.
//!
//! Flow: select_catalog → draw PROSPECTS_PER_SEARCH identities → compose_outreach per identity.
//! Records are independent; the random source is the only thing they share.

use tracing::info;

use crate::catalog::selector::{select_catalog, SelectorSettings};
use crate::catalog::IndustryCatalog;
use crate::outreach::composer::compose_outreach;
use crate::prospects::models::{Prospect, ProspectIdentity, TargetingCriteria};
use crate::random::{pick, RandomSource};

/// Every search yields exactly this many prospects.
pub const PROSPECTS_PER_SEARCH: usize = 5;

const PROFILE_URL_BASE: &str = "https://linkedin.com/in";

/// Generates the fixed-size batch of prospects for validated criteria.
pub fn generate_prospects<R>(
    catalog: &IndustryCatalog,
    criteria: &TargetingCriteria,
    settings: &SelectorSettings,
    rng: &mut R,
) -> Vec<Prospect>
where
    R: RandomSource + ?Sized,
{
    let selection = select_catalog(catalog, criteria, settings, rng);

    let mut prospects = Vec::with_capacity(PROSPECTS_PER_SEARCH);
    for _ in 0..PROSPECTS_PER_SEARCH {
        let first = pick_or_empty(rng, &catalog.first_names);
        let last = pick_or_empty(rng, &catalog.last_names);
        let identity = ProspectIdentity {
            name: format!("{first} {last}").trim().to_string(),
            title: pick_or_empty(rng, &selection.job_titles).to_string(),
            company: pick_or_empty(rng, &selection.companies).to_string(),
        };

        let outreach = compose_outreach(catalog, &identity, criteria, rng);

        prospects.push(Prospect {
            profile_url: profile_url(first, last),
            name: identity.name,
            title: identity.title,
            company: identity.company,
            location: criteria.location.clone(),
            email_template: outreach.email_template,
            follow_up_templates: outreach.follow_up,
        });
    }

    info!(
        "Generated {} prospects for industry '{}' in '{}'",
        prospects.len(),
        criteria.industry,
        criteria.location
    );

    prospects
}

/// Cosmetic profile link: `https://linkedin.com/in/{first}-{last}`, lowercased.
pub fn profile_url(first: &str, last: &str) -> String {
    format!("{PROFILE_URL_BASE}/{}-{}", slug(first), slug(last))
}

fn slug(part: &str) -> String {
    part.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn pick_or_empty<'a, R>(rng: &mut R, items: &'a [String]) -> &'a str
where
    R: RandomSource + ?Sized,
{
    pick(rng, items).map(|s| s.trim()).unwrap_or_default()
}
