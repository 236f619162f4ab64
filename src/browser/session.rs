//! Browser session lifetime
//!
//! A `Session` owns the browser process behind the agent-browser CLI for one
//! run. Callers must reach `close()` on every exit path; the binary runs the
//! scenarios, captures the result, closes, and only then propagates errors.

use crate::browser::page::AgentBrowserPage;
use crate::core::{Config, LoomcheckError, Result};

/// Owned lifetime of the browser driving all pages in one run
pub struct Session {
    page: AgentBrowserPage,
}

impl Session {
    /// Verify the CLI is installed and set up the shared page driver
    pub async fn launch(config: &Config) -> Result<Self> {
        if !AgentBrowserPage::is_available().await {
            return Err(LoomcheckError::AgentBrowserNotFound);
        }

        let mut page = AgentBrowserPage::new(&config.browser.session_name);
        page.set_headed(config.browser.headed);
        page.set_debug(config.runner.debug);

        Ok(Self { page })
    }

    /// The single page reused sequentially across scenarios
    pub fn page(&self) -> &AgentBrowserPage {
        &self.page
    }

    /// Close the browser, releasing the OS process
    pub async fn close(&self) -> Result<()> {
        self.page.close().await
    }
}
