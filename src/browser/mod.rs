//! Browser automation module
//!
//! Wraps the agent-browser CLI behind a page-driver trait.

mod page;
mod probe;
mod session;

pub use page::{classify_failure, AgentBrowserPage, FailureKind, PageDriver};
pub use probe::{parse_probe_output, probe_script};
pub use session::Session;
