/// Router Module Index
///
/// Splits the HTTP surface into the JSON endpoints consumed by the SPA and the
/// page fallback that drives rendering per URL. Neither layer rejects
/// anonymous clients; auth gating happens inside the navigation guard.

/// Health check and JSON navigation API.
pub mod public;

/// Page fallback: every other URL goes through the navigation router.
pub mod pages;
