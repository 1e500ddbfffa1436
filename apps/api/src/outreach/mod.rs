// Outreach copy: cold email plus positive / negative / no-response follow-ups.
// Pure string composition over the catalog; randomness only via `random::RandomSource`.

pub mod composer;
pub mod templates;
