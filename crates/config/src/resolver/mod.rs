//! Layered configuration resolution.
//!
//! Responsibilities:
//! - Select the active environment and validate it against the local allow-list.
//! - Load local (with file-to-resource fallback), environment-table, and base layers.
//! - Merge the layers and stamp the selected environment into the result.
//!
//! Does NOT handle:
//! - Reading or decoding individual sources (see `loader` and `format`).
//! - Installing logging or reading `.env` files (entry points do that).
//!
//! Invariants / Assumptions:
//! - Precedence is local > environment > base, per leaf path.
//! - The local fallback is taken only when the primary source does not exist.
//! - Every failure is terminal for the call; no partial configuration is returned.
//! - `resolve()` holds no state between calls; every call loads afresh.

mod allow_list;
mod builder;
mod resolved;

#[cfg(test)]
mod tests;

pub use allow_list::{allowed_environments, is_environment_allowed, is_environment_configured};
pub use builder::Resolver;
pub use resolved::ResolvedConfig;
