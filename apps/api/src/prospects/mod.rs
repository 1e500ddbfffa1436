// Prospect synthesis: input validation, identity drawing, CSV export.
// Copy generation lives in `outreach`; pool selection in `catalog::selector`.

pub mod export;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod validation;
