//! Loomcheck - Browser smoke verification for the LogicLoom dashboard
//!
//! Drives a headless browser through an ordered list of verification
//! scenarios against a running instance of the dashboard, waiting for
//! expected content, interacting with a few controls, and capturing
//! full-page screenshots as evidence.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Browser**: Session lifetime and the page-driver seam over agent-browser
//! - **Runner**: Scenario model and strictly sequential step execution
//! - **Scenarios**: The built-in catalog of verification flows
//!
//! # Usage
//!
//! ```rust,no_run
//! use loomcheck::{scenarios, Config, Runner, Session};
//!
//! #[tokio::main]
//! async fn main() -> loomcheck::Result<()> {
//!     let config = Config::load();
//!     let session = Session::launch(&config).await?;
//!
//!     let runner = Runner::new(session.page(), &config);
//!     let result = runner.run_all(&scenarios::builtin()).await;
//!
//!     session.close().await?;
//!     result
//! }
//! ```

pub mod browser;
pub mod core;
pub mod runner;
pub mod scenarios;

// Re-export commonly used items
pub use browser::{PageDriver, Session};
pub use core::{Config, LoomcheckError, Result};
pub use runner::{Runner, Scenario, Step};
