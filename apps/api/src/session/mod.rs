// Two-step form state: step 1 opens a session with base criteria,
// step 2 refines it and generates prospects. Held in memory only.

pub mod handlers;
pub mod models;
pub mod store;
