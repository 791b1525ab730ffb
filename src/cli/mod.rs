//! # CLI Module
//!
//! Command implementations behind the `nowplaying` binary.
//!
//! - [`serve`] - Runs the HTTP relay and the scheduled token refresh in one
//!   process
//! - [`refresh`] - Refreshes the stored access token once and exits, for
//!   hosts that schedule the refresh externally (cron, systemd timers)
//!
//! Both commands read their configuration through [`crate::config`] and stop
//! the process with a non-zero exit code when it is incomplete.

mod refresh;
mod serve;

pub use refresh::refresh;
pub use serve::serve;
