//! Runner module - sequential scenario execution
//!
//! Executes scenarios strictly in order over one shared page. The first
//! failed required wait (or navigation) aborts the whole run; guarded
//! interactions degrade to a silent skip instead.

mod scenario;

pub use scenario::{Scenario, Step};

use std::fs;
use std::time::Duration;

use crate::browser::PageDriver;
use crate::core::{Action, Config, Expectation, LoomcheckError, Result};

/// Sequential verification runner over one injected page driver
pub struct Runner<'a, D: PageDriver + ?Sized> {
    driver: &'a D,
    config: &'a Config,
}

impl<'a, D: PageDriver + ?Sized> Runner<'a, D> {
    /// Create a runner borrowing the shared page and config
    pub fn new(driver: &'a D, config: &'a Config) -> Self {
        Self { driver, config }
    }

    /// Run every scenario in order; the first hard error aborts the rest
    pub async fn run_all(&self, scenarios: &[Scenario]) -> Result<()> {
        for scenario in scenarios {
            self.run_scenario(scenario).await?;
        }
        Ok(())
    }

    /// Execute one scenario's steps in declaration order
    pub async fn run_scenario(&self, scenario: &Scenario) -> Result<()> {
        println!("Running {}...", scenario.name);

        for step in &scenario.steps {
            self.run_step(step).await?;
        }

        Ok(())
    }

    async fn run_step(&self, step: &Step) -> Result<()> {
        match step {
            Step::Navigate { path } => {
                let url = self.config.target_url(path)?;
                println!("Visiting {}...", url);
                self.driver.goto(url.as_str()).await
            }

            Step::WaitFor {
                condition,
                timeout_ms,
            } => {
                let timeout = timeout_ms.unwrap_or(self.config.browser.timeout_ms);
                if self.config.runner.debug {
                    println!("[debug] waiting for {} (timeout {}ms)", condition, timeout);
                }
                self.driver.wait_for(condition, timeout).await
            }

            Step::Interact {
                locator,
                action,
                guarded,
                confirm,
            } => {
                if *guarded {
                    let state = self.driver.visibility(locator).await?;
                    if !state.is_actionable() {
                        println!("Skipping {} on {} ({})", action, locator, state);
                        return Ok(());
                    }
                }

                match action {
                    Action::Click => self.driver.click(locator).await?,
                    Action::SelectOption(value) => {
                        self.driver.select_option(locator, value).await?
                    }
                }

                if let Some(condition) = confirm {
                    self.driver
                        .wait_for(condition, self.config.browser.timeout_ms)
                        .await?;
                }

                Ok(())
            }

            Step::Capture { file } => {
                fs::create_dir_all(&self.config.output.dir)?;
                let path = self.config.output.dir.join(file);
                self.driver.screenshot(&path).await?;
                println!("Screenshot saved to {}", path.display());
                Ok(())
            }

            Step::Check { locator, expect } => {
                let state = self.driver.visibility(locator).await?;
                if state.satisfies(*expect) {
                    match expect {
                        Expectation::Present => println!("SUCCESS: {} found.", locator),
                        Expectation::Absent => println!("SUCCESS: {} not present.", locator),
                    }
                } else {
                    match expect {
                        Expectation::Present => {
                            println!("FAILURE: {} NOT found ({}).", locator, state)
                        }
                        Expectation::Absent => {
                            println!("FAILURE: {} unexpectedly visible.", locator)
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

/// Probe the target with a plain HTTP GET before launching the browser.
///
/// An unreachable target fails here with a clear message instead of a
/// browser-side wait timeout.
pub async fn preflight(config: &Config) -> Result<()> {
    let url = config.base_url()?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.browser.timeout_ms))
        .build()
        .map_err(|e| LoomcheckError::navigation(format!("HTTP client setup failed: {}", e)))?;

    client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| LoomcheckError::navigation(format!("target {} unreachable: {}", url, e)))?;

    Ok(())
}
