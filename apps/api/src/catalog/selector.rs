//! Turns targeting criteria into company and job-title pools.
//!
//! No error path: unknown industries resolve to the generic fallback profile,
//! and catalog validation guarantees every pool drawn from is non-empty.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::IndustryCatalog;
use crate::prospects::models::TargetingCriteria;
use crate::random::{pick, RandomSource};

/// Default number of synthesized company names per selection.
pub const DEFAULT_COMPANY_POOL_SIZE: usize = 8;
/// Default chance of splicing the focus word into a company name.
pub const DEFAULT_FOCUS_SPLICE_PROBABILITY: f64 = 0.5;

/// Tunables for company-name synthesis. Loaded from `Config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorSettings {
    pub company_pool_size: usize,
    pub focus_splice_probability: f64,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            company_pool_size: DEFAULT_COMPANY_POOL_SIZE,
            focus_splice_probability: DEFAULT_FOCUS_SPLICE_PROBABILITY,
        }
    }
}

/// Pools that prospect identities are drawn from. Both are non-empty.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSelection {
    pub companies: Vec<String>,
    pub job_titles: Vec<String>,
}

/// Builds the company and job-title pools for one generation request.
///
/// Companies: `company_pool_size` prefix/suffix pairs, optionally spliced with
/// the focus's first word, followed by the industry-agnostic base names.
/// Titles: base titles, then industry titles, then role-derived variants.
pub fn select_catalog<R>(
    catalog: &IndustryCatalog,
    criteria: &TargetingCriteria,
    settings: &SelectorSettings,
    rng: &mut R,
) -> CatalogSelection
where
    R: RandomSource + ?Sized,
{
    let profile = catalog.profile_for(&criteria.industry);
    let focus_word = criteria
        .industry_focus
        .as_deref()
        .and_then(|f| f.split_whitespace().next());

    let mut companies: Vec<String> = Vec::new();
    for _ in 0..settings.company_pool_size.max(1) {
        let prefix = pick(rng, &profile.company_prefixes).map_or("", String::as_str);
        let mut suffix = pick(rng, &profile.company_suffixes).map_or("", String::as_str);
        if has_repeated_adjacent_word(&join_words(&[prefix, suffix])) {
            // Catalog files may share a word between prefixes and suffixes
            let others: Vec<&str> = profile
                .company_suffixes
                .iter()
                .map(String::as_str)
                .filter(|s| !has_repeated_adjacent_word(&join_words(&[prefix, s])))
                .collect();
            suffix = pick(rng, &others).copied().unwrap_or("");
        }

        let plain = join_words(&[prefix, suffix]);
        let name = match focus_word {
            Some(word) if rng.chance(settings.focus_splice_probability) => {
                let spliced = join_words(&[prefix, word, suffix]);
                // "Cloud Cloud Labs" reads as a typo; keep the plain pairing instead
                if has_repeated_adjacent_word(&spliced) {
                    plain
                } else {
                    spliced
                }
            }
            _ => plain,
        };
        push_unique(&mut companies, name);
    }
    for base in &catalog.base_companies {
        push_unique(&mut companies, base.trim().to_string());
    }

    let mut job_titles: Vec<String> = Vec::new();
    let role_titles = criteria
        .target_role
        .as_deref()
        .map(role_variants)
        .unwrap_or_default();
    for title in catalog
        .base_titles
        .iter()
        .chain(profile.job_titles.iter())
        .chain(role_titles.iter())
    {
        if has_repeated_adjacent_word(title) {
            debug!("Discarding degenerate title variant: {title}");
            continue;
        }
        push_unique(&mut job_titles, title.trim().to_string());
    }

    debug!(
        "Catalog selection for '{}': {} companies, {} titles (fallback={})",
        criteria.industry,
        companies.len(),
        job_titles.len(),
        catalog.find(&criteria.industry).is_none()
    );

    CatalogSelection {
        companies,
        job_titles,
    }
}

/// Title variants derived from a target role. Degenerate variants are
/// filtered by the caller.
pub fn role_variants(role: &str) -> Vec<String> {
    let role = role.trim();
    if role.is_empty() {
        return Vec::new();
    }
    vec![
        role.to_string(),
        format!("Senior {role}"),
        format!("Lead {role}"),
        format!("Head of {role}"),
        format!("{role} Manager"),
    ]
}

/// True when two neighbouring words are equal ignoring ASCII case ("Manager Manager").
pub fn has_repeated_adjacent_word(text: &str) -> bool {
    let words: Vec<&str> = text.split_whitespace().collect();
    words.windows(2).any(|w| w[0].eq_ignore_ascii_case(w[1]))
}

fn join_words(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_unique(pool: &mut Vec<String>, item: String) {
    if item.is_empty() || pool.iter().any(|p| p.eq_ignore_ascii_case(&item)) {
        return;
    }
    pool.push(item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::ScriptedSource;
    use crate::random::RngSource;

    fn criteria(industry: &str, focus: Option<&str>, role: Option<&str>) -> TargetingCriteria {
        TargetingCriteria {
            location: "London".to_string(),
            demographic: "C-level Executives".to_string(),
            industry: industry.to_string(),
            industry_focus: focus.map(str::to_string),
            target_role: role.map(str::to_string),
        }
    }

    #[test]
    fn test_every_known_and_unknown_industry_yields_non_empty_pools() {
        let catalog = IndustryCatalog::builtin();
        let mut rng = RngSource::seeded(11);
        let mut industries: Vec<String> =
            catalog.industries.iter().map(|p| p.name.clone()).collect();
        industries.extend(["Unknown Sector".to_string(), String::new()]);

        for industry in industries {
            for (focus, role) in [
                (None, None),
                (Some("Enterprise"), None),
                (None, Some("CTO/CIO")),
                (Some("Enterprise"), Some("CTO/CIO")),
            ] {
                let c = criteria(&industry, focus, role);
                let sel = select_catalog(&catalog, &c, &SelectorSettings::default(), &mut rng);
                assert!(!sel.companies.is_empty(), "no companies for {industry:?}");
                assert!(!sel.job_titles.is_empty(), "no titles for {industry:?}");
            }
        }
    }

    #[test]
    fn test_unknown_industry_uses_generic_fragments() {
        let catalog = IndustryCatalog::builtin();
        let mut rng = RngSource::seeded(3);
        let c = criteria("Unknown Sector", None, None);
        let sel = select_catalog(&catalog, &c, &SelectorSettings::default(), &mut rng);

        let prefixes = ["Global", "Advanced", "Innovative", "Strategic"];
        let suffixes = ["Group", "Inc", "Corporation", "Company"];
        let synthesized: Vec<&String> = sel
            .companies
            .iter()
            .filter(|c| !catalog.base_companies.contains(c))
            .collect();
        assert!(!synthesized.is_empty());
        for name in synthesized {
            let (prefix, suffix) = name.split_once(' ').unwrap();
            assert!(prefixes.contains(&prefix), "unexpected prefix in {name}");
            assert!(suffixes.contains(&suffix), "unexpected suffix in {name}");
        }
        assert!(sel.job_titles.contains(&"General Manager".to_string()));
    }

    #[test]
    fn test_base_companies_always_appended() {
        let catalog = IndustryCatalog::builtin();
        let mut rng = RngSource::seeded(5);
        let c = criteria("Technology & Software", Some("Enterprise"), None);
        let sel = select_catalog(&catalog, &c, &SelectorSettings::default(), &mut rng);
        for base in &catalog.base_companies {
            assert!(sel.companies.contains(base), "missing base company {base}");
        }
    }

    #[test]
    fn test_focus_word_spliced_when_coin_lands() {
        let catalog = IndustryCatalog::builtin();
        let mut rng = ScriptedSource::first(true);
        let c = criteria("Technology & Software", Some("Enterprise Cloud"), None);
        let sel = select_catalog(&catalog, &c, &SelectorSettings::default(), &mut rng);
        // first prefix "Cloud", first suffix "Labs", first word of focus only
        assert_eq!(sel.companies[0], "Cloud Enterprise Labs");
    }

    #[test]
    fn test_focus_word_never_spliced_when_coin_misses() {
        let catalog = IndustryCatalog::builtin();
        let mut rng = ScriptedSource::first(false);
        let c = criteria("Technology & Software", Some("Enterprise"), None);
        let sel = select_catalog(&catalog, &c, &SelectorSettings::default(), &mut rng);
        assert_eq!(sel.companies[0], "Cloud Labs");
        assert!(sel
            .companies
            .iter()
            .filter(|name| !catalog.base_companies.contains(name))
            .all(|name| !name.split_whitespace().any(|w| w == "Enterprise")));
    }

    #[test]
    fn test_builtin_prefixes_never_double_up_with_suffixes() {
        let catalog = IndustryCatalog::builtin();
        for profile in catalog.industries.iter().chain([&catalog.fallback]) {
            for prefix in &profile.company_prefixes {
                for suffix in &profile.company_suffixes {
                    assert!(
                        !has_repeated_adjacent_word(&format!("{prefix} {suffix}")),
                        "{} pairs {prefix} with {suffix}",
                        profile.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_shared_prefix_and_suffix_word_is_redrawn() {
        let mut catalog = IndustryCatalog::builtin();
        let finance = catalog
            .industries
            .iter_mut()
            .find(|p| p.name == "Financial Services")
            .unwrap();
        finance.company_prefixes = vec!["Capital".to_string(), "Summit".to_string()];
        finance.company_suffixes = vec!["Partners".to_string(), "Capital".to_string()];

        // prefix 0 "Capital", suffix 1 "Capital", then the redraw takes index 0 of the rest
        let mut rng = ScriptedSource::new(vec![0, 1, 0], false);
        let settings = SelectorSettings {
            company_pool_size: 1,
            ..SelectorSettings::default()
        };
        let c = criteria("Financial Services", None, None);
        let sel = select_catalog(&catalog, &c, &settings, &mut rng);
        assert_eq!(sel.companies[0], "Capital Partners");
        assert!(!sel.companies.iter().any(|n| has_repeated_adjacent_word(n)));
    }

    #[test]
    fn test_no_repeated_words_across_random_draws() {
        let catalog = IndustryCatalog::builtin();
        let mut rng = RngSource::seeded(8);
        for profile in &catalog.industries {
            let c = criteria(&profile.name, Some("Capital Markets"), None);
            for _ in 0..20 {
                let sel = select_catalog(&catalog, &c, &SelectorSettings::default(), &mut rng);
                assert!(!sel.companies.iter().any(|n| has_repeated_adjacent_word(n)));
            }
        }
    }

    #[test]
    fn test_zero_probability_disables_splicing() {
        let catalog = IndustryCatalog::builtin();
        let mut rng = RngSource::seeded(99);
        let settings = SelectorSettings {
            focus_splice_probability: 0.0,
            ..SelectorSettings::default()
        };
        let c = criteria("Financial Services", Some("Fintech"), None);
        let sel = select_catalog(&catalog, &c, &settings, &mut rng);
        assert!(sel.companies.iter().all(|name| !name.contains("Fintech")));
    }

    #[test]
    fn test_splice_skipped_when_it_would_repeat_a_word() {
        let catalog = IndustryCatalog::builtin();
        // prefix index 0 is "Cloud"; focus starts with "Cloud"
        let mut rng = ScriptedSource::first(true);
        let c = criteria("Technology & Software", Some("Cloud Infrastructure"), None);
        let sel = select_catalog(&catalog, &c, &SelectorSettings::default(), &mut rng);
        assert_eq!(sel.companies[0], "Cloud Labs");
    }

    #[test]
    fn test_company_pool_is_bounded_and_unique() {
        let catalog = IndustryCatalog::builtin();
        let mut rng = RngSource::seeded(21);
        let settings = SelectorSettings::default();
        let c = criteria("Manufacturing", None, None);
        let sel = select_catalog(&catalog, &c, &settings, &mut rng);
        assert!(sel.companies.len() <= settings.company_pool_size + catalog.base_companies.len());
        let mut deduped = sel.companies.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), sel.companies.len());
    }

    #[test]
    fn test_role_variants_appended_to_titles() {
        let catalog = IndustryCatalog::builtin();
        let mut rng = RngSource::seeded(1);
        let c = criteria("Technology & Software", None, Some("CTO/CIO"));
        let sel = select_catalog(&catalog, &c, &SelectorSettings::default(), &mut rng);
        for expected in [
            "CTO/CIO",
            "Senior CTO/CIO",
            "Lead CTO/CIO",
            "Head of CTO/CIO",
            "CTO/CIO Manager",
        ] {
            assert!(
                sel.job_titles.contains(&expected.to_string()),
                "missing {expected}"
            );
        }
        // base titles come first
        assert_eq!(sel.job_titles[0], "CEO");
    }

    #[test]
    fn test_manager_role_never_yields_manager_manager() {
        let catalog = IndustryCatalog::builtin();
        let mut rng = RngSource::seeded(1);
        let c = criteria("Retail & E-commerce", None, Some("E-commerce Manager"));
        let sel = select_catalog(&catalog, &c, &SelectorSettings::default(), &mut rng);
        assert!(sel.job_titles.contains(&"E-commerce Manager".to_string()));
        assert!(!sel
            .job_titles
            .iter()
            .any(|t| has_repeated_adjacent_word(t)));
        assert!(!sel.job_titles.contains(&"E-commerce Manager Manager".to_string()));
    }

    #[test]
    fn test_repeated_adjacent_word_detection() {
        assert!(has_repeated_adjacent_word("Manager Manager"));
        assert!(has_repeated_adjacent_word("Senior senior Engineer"));
        assert!(!has_repeated_adjacent_word("Head of Head of Sales"));
        assert!(!has_repeated_adjacent_word("Product Manager"));
    }

    #[test]
    fn test_blank_role_produces_no_variants() {
        assert!(role_variants("   ").is_empty());
        assert_eq!(role_variants(" Dean ")[1], "Senior Dean");
    }
}
