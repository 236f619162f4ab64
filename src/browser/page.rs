//! Page driver - wraps the agent-browser CLI
//!
//! `PageDriver` is the seam the runner drives pages through; the production
//! implementation shells out to agent-browser, tests substitute a mock.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::browser::probe;
use crate::core::{Condition, Locator, LoomcheckError, Result, Visibility};

/// One navigable browsing context, driven synchronously one call at a time
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Load a URL, blocking until the navigation commits
    async fn goto(&self, url: &str) -> Result<()>;

    /// Poll the rendered DOM until the condition holds or the timeout elapses
    async fn wait_for(&self, condition: &Condition, timeout_ms: u64) -> Result<()>;

    /// Tri-state capability query for an interaction target
    async fn visibility(&self, locator: &Locator) -> Result<Visibility>;

    /// Click an element
    async fn click(&self, locator: &Locator) -> Result<()>;

    /// Choose an option value in a select element
    async fn select_option(&self, locator: &Locator, value: &str) -> Result<()>;

    /// Serialize the current rendered page to a full-page PNG
    async fn screenshot(&self, path: &Path) -> Result<()>;
}

/// Failure kind recovered from agent-browser stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    ElementNotFound,
    Navigation,
    Other,
}

/// Classify a failed CLI invocation by its stderr text
pub fn classify_failure(stderr: &str) -> FailureKind {
    let lower = stderr.to_lowercase();
    if lower.contains("timeout") || lower.contains("timed out") {
        FailureKind::Timeout
    } else if lower.contains("no element") || lower.contains("not found") {
        FailureKind::ElementNotFound
    } else if lower.contains("net::") || lower.contains("navigation") || lower.contains("err_") {
        FailureKind::Navigation
    } else {
        FailureKind::Other
    }
}

/// Page implementation over the agent-browser CLI
pub struct AgentBrowserPage {
    /// Session name for isolation
    session_name: String,
    /// Whether to run in headed mode
    headed: bool,
    /// Echo CLI command lines before running them
    debug: bool,
}

impl AgentBrowserPage {
    /// Create a new page driver for a named session
    pub fn new(session_name: impl Into<String>) -> Self {
        Self {
            session_name: session_name.into(),
            headed: false,
            debug: false,
        }
    }

    /// Set headed mode
    pub fn set_headed(&mut self, headed: bool) {
        self.headed = headed;
    }

    /// Set debug echo
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Check if agent-browser is installed
    pub async fn is_available() -> bool {
        Command::new("agent-browser")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Run an agent-browser command, returning stdout on success
    async fn run_command(&self, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new("agent-browser");
        cmd.args(["--session", &self.session_name]);

        if self.headed {
            cmd.arg("--headed");
        }

        cmd.args(args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        if self.debug {
            println!("[debug] agent-browser --session {} {}", self.session_name, args.join(" "));
        }

        let output = cmd.output().await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoomcheckError::AgentBrowserNotFound
            } else {
                LoomcheckError::browser(format!("Failed to run agent-browser: {}", e))
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            Err(LoomcheckError::browser(format!(
                "agent-browser command failed: {}",
                stderr
            )))
        }
    }

    /// Run a command, mapping a failed exit through the stderr classifier
    async fn run_classified(&self, args: &[&str], what: &str, timeout_ms: u64) -> Result<String> {
        match self.run_command(args).await {
            Ok(out) => Ok(out),
            Err(LoomcheckError::Browser(msg)) => match classify_failure(&msg) {
                FailureKind::Timeout => Err(LoomcheckError::timeout(what, timeout_ms)),
                FailureKind::ElementNotFound => Err(LoomcheckError::element_not_found(what)),
                FailureKind::Navigation => Err(LoomcheckError::navigation(msg)),
                FailureKind::Other => Err(LoomcheckError::Browser(msg)),
            },
            Err(e) => Err(e),
        }
    }

    /// Run an interaction command; a target that never materializes (either
    /// reported missing or timing out while locating) is ElementNotFound
    async fn run_interaction(&self, args: &[&str], selector: &str) -> Result<()> {
        match self.run_command(args).await {
            Ok(_) => Ok(()),
            Err(LoomcheckError::Browser(msg)) => match classify_failure(&msg) {
                FailureKind::ElementNotFound | FailureKind::Timeout => {
                    Err(LoomcheckError::element_not_found(selector))
                }
                FailureKind::Navigation => Err(LoomcheckError::navigation(msg)),
                FailureKind::Other => Err(LoomcheckError::Browser(msg)),
            },
            Err(e) => Err(e),
        }
    }

    /// Close the underlying browser session
    pub async fn close(&self) -> Result<()> {
        self.run_command(&["close"]).await?;
        Ok(())
    }
}

#[async_trait]
impl PageDriver for AgentBrowserPage {
    async fn goto(&self, url: &str) -> Result<()> {
        match self.run_command(&["open", url]).await {
            Ok(_) => Ok(()),
            Err(LoomcheckError::Browser(msg)) => Err(LoomcheckError::navigation(msg)),
            Err(e) => Err(e),
        }
    }

    async fn wait_for(&self, condition: &Condition, timeout_ms: u64) -> Result<()> {
        let ms = timeout_ms.to_string();
        let what = condition.to_string();

        let result = match condition {
            Condition::Text(t) => {
                self.run_classified(&["wait", "--text", t, "--timeout", &ms], &what, timeout_ms)
                    .await
            }
            Condition::Selector(s) => {
                self.run_classified(&["wait", s, "--timeout", &ms], &what, timeout_ms)
                    .await
            }
        };

        result.map(|_| ())
    }

    async fn visibility(&self, locator: &Locator) -> Result<Visibility> {
        let script = probe::probe_script(locator);
        let output = self.run_command(&["eval", &script]).await?;
        probe::parse_probe_output(&output)
    }

    async fn click(&self, locator: &Locator) -> Result<()> {
        let selector = locator.as_selector();
        self.run_interaction(&["click", &selector], &selector).await
    }

    async fn select_option(&self, locator: &Locator, value: &str) -> Result<()> {
        let selector = locator.as_selector();
        self.run_interaction(&["select", &selector, value], &selector)
            .await
    }

    async fn screenshot(&self, path: &Path) -> Result<()> {
        let path_str = path.display().to_string();
        self.run_command(&["screenshot", &path_str, "--full"]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_creation() {
        let page = AgentBrowserPage::new("test-session");
        assert_eq!(page.session_name, "test-session");
        assert!(!page.headed);
    }

    #[test]
    fn test_classify_timeout() {
        assert_eq!(
            classify_failure("TimeoutError: waiting for selector `.x` failed: timeout 1000ms exceeded"),
            FailureKind::Timeout
        );
        assert_eq!(classify_failure("Timed out after 30000ms"), FailureKind::Timeout);
    }

    #[test]
    fn test_classify_element_not_found() {
        assert_eq!(
            classify_failure("Error: no element matches selector button.submit"),
            FailureKind::ElementNotFound
        );
        assert_eq!(classify_failure("element not found: text=Save"), FailureKind::ElementNotFound);
    }

    #[test]
    fn test_classify_navigation() {
        assert_eq!(
            classify_failure("page.goto: net::ERR_CONNECTION_REFUSED at http://localhost:3001/"),
            FailureKind::Navigation
        );
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify_failure("something exploded"), FailureKind::Other);
    }
}
