//! Now-playing relay library
//!
//! Exposes the currently playing Spotify track over HTTP and keeps the
//! access token used for that call fresh. Two entry points share a single
//! key-value cell: the scheduled refresher writes the token, the relay reads
//! it on every request.
//!
//! # Modules
//!
//! - `api` - HTTP handlers of the relay
//! - `cli` - Command implementations for the binary
//! - `config` - Environment driven configuration
//! - `error` - Typed errors of the relay, refresher, store and config
//! - `refresher` - Refresh-token grant and the schedule around it
//! - `relay` - Currently playing lookup
//! - `server` - Router construction and listener
//! - `spotify` - Upstream HTTP client
//! - `store` - Token storage capability and its implementations
//! - `types` - Upstream payloads and credentials

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod refresher;
pub mod relay;
pub mod server;
pub mod spotify;
pub mod store;
pub mod types;

/// A convenient Result type alias for the binary entry points.
///
/// Library operations return their own typed errors ([`error::RelayError`],
/// [`error::RefreshError`], ...); this alias is where they meet at the top of
/// the command implementations. The boxed error is `Send + Sync` so it can
/// cross task boundaries.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use nowplaying::Res;
///
/// async fn bind(addr: &str) -> Res<tokio::net::TcpListener> {
///     Ok(tokio::net::TcpListener::bind(addr).await?)
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Every line starts with a UTC timestamp, the relay runs as a long-lived
/// service and its stdout usually ends up in a journal.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("Relay listening on http://{}", addr);
/// info!("Now playing: {}", label);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string().dimmed(),
      "o".blue().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints a success message with a green checkmark.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Access token refreshed.");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
      "{} [{}] {}",
      chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string().dimmed(),
      "✓".green().bold(),
      std::format_args!($($arg)*)
    );
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for startup problems the process cannot continue from, such as
/// missing credentials or an unbindable address. Code after this macro does
/// not run.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`; the line goes to
/// stderr.
///
/// # Behavior
///
/// Exits with code 1, which is what an external scheduler running
/// `nowplaying refresh` looks at.
///
/// # Example
///
/// ```
/// let credentials = match config::credentials() {
///     Ok(c) => c,
///     Err(e) => error!("Cannot load Spotify credentials: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string().dimmed(),
      "!".red().bold(),
      std::format_args!($($arg)*)
    );
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for failures the service survives, e.g. a scheduled refresh that
/// did not go through or a relay request answered with a 500.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`; the line goes to
/// stderr.
///
/// # Example
///
/// ```
/// warning!("Scheduled token refresh failed: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!(
      "{} [{}] {}",
      chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string().dimmed(),
      "!".yellow().bold(),
      std::format_args!($($arg)*)
    );
  })
}
