//! Immutable naming pools and copy fragments keyed by industry.
//!
//! Loaded exactly once at startup (built-in tables, or a JSON file when
//! `CATALOG_PATH` is set) and shared read-only behind an `Arc`.
//! Validation at load time guarantees every pool a selection draws from is
//! non-empty, so selection and composition never have an error path.

mod data;
pub mod handlers;
pub mod selector;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog pool '{pool}' is empty for {owner}")]
    EmptyPool { owner: String, pool: &'static str },

    #[error("Duplicate industry in catalog: {0}")]
    DuplicateIndustry(String),
}

/// Everything the selector and composer need to know about one industry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryProfile {
    pub name: String,
    pub company_prefixes: Vec<String>,
    pub company_suffixes: Vec<String>,
    pub job_titles: Vec<String>,
    /// Templates over {title}, {company}, {industry}, {focus_area}, {role_phrase}.
    pub opening_lines: Vec<String>,
    /// Template over {company} and {focus_area}. `None` means the composer's generic phrase.
    #[serde(default)]
    pub resource_description: Option<String>,
    /// Options offered by the form for the optional industry focus.
    #[serde(default)]
    pub focus_options: Vec<String>,
    /// Options offered by the form for the optional target role.
    #[serde(default)]
    pub role_options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryCatalog {
    pub industries: Vec<IndustryProfile>,
    /// Used whenever the requested industry is not in `industries`.
    pub fallback: IndustryProfile,
    pub base_companies: Vec<String>,
    pub base_titles: Vec<String>,
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

/// Public listing of one industry and its form options.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryOptions {
    pub name: String,
    pub focus_options: Vec<String>,
    pub role_options: Vec<String>,
}

impl IndustryCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            industries: data::INDUSTRIES.iter().map(to_profile).collect(),
            fallback: to_profile(&data::FALLBACK),
            base_companies: owned(data::BASE_COMPANIES),
            base_titles: owned(data::BASE_TITLES),
            first_names: owned(data::FIRST_NAMES),
            last_names: owned(data::LAST_NAMES),
        }
    }

    /// Parses and validates a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: IndustryCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a catalog from a JSON file on disk.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Checks the non-empty guarantees that selection relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (pool, items) in [
            ("base_companies", &self.base_companies),
            ("base_titles", &self.base_titles),
            ("first_names", &self.first_names),
            ("last_names", &self.last_names),
        ] {
            require_non_empty("catalog", pool, items)?;
        }

        validate_profile(&self.fallback)?;

        let mut seen = std::collections::HashSet::new();
        for profile in &self.industries {
            validate_profile(profile)?;
            if !seen.insert(normalize_name(&profile.name)) {
                return Err(CatalogError::DuplicateIndustry(profile.name.clone()));
            }
        }

        Ok(())
    }

    /// Looks up an industry by name, ignoring surrounding whitespace and ASCII case.
    pub fn find(&self, industry: &str) -> Option<&IndustryProfile> {
        let wanted = normalize_name(industry);
        self.industries
            .iter()
            .find(|p| normalize_name(&p.name) == wanted)
    }

    /// The profile for `industry`, or the generic fallback when it is unknown.
    pub fn profile_for(&self, industry: &str) -> &IndustryProfile {
        self.find(industry).unwrap_or(&self.fallback)
    }

    /// Enumerated industries with their focus and role options, in catalog order.
    pub fn list_options(&self) -> Vec<IndustryOptions> {
        self.industries
            .iter()
            .map(|p| IndustryOptions {
                name: p.name.clone(),
                focus_options: p.focus_options.clone(),
                role_options: p.role_options.clone(),
            })
            .collect()
    }
}

fn validate_profile(profile: &IndustryProfile) -> Result<(), CatalogError> {
    let owner = format!("industry '{}'", profile.name);
    require_non_empty(&owner, "company_prefixes", &profile.company_prefixes)?;
    require_non_empty(&owner, "company_suffixes", &profile.company_suffixes)?;
    require_non_empty(&owner, "job_titles", &profile.job_titles)?;
    require_non_empty(&owner, "opening_lines", &profile.opening_lines)?;
    Ok(())
}

fn require_non_empty(owner: &str, pool: &'static str, items: &[String]) -> Result<(), CatalogError> {
    if items.iter().all(|s| s.trim().is_empty()) {
        return Err(CatalogError::EmptyPool {
            owner: owner.to_string(),
            pool,
        });
    }
    Ok(())
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn to_profile(b: &data::BuiltinIndustry) -> IndustryProfile {
    IndustryProfile {
        name: b.name.to_string(),
        company_prefixes: owned(b.company_prefixes),
        company_suffixes: owned(b.company_suffixes),
        job_titles: owned(b.job_titles),
        opening_lines: owned(b.opening_lines),
        resource_description: b.resource_description.map(str::to_string),
        focus_options: owned(b.focus_options),
        role_options: owned(b.role_options),
    }
}
