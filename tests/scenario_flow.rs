//! Scenario execution tests over a mock page driver
//!
//! The mock records every driver invocation so the suite can assert the
//! runner executes steps strictly in declaration order, skips guarded
//! interactions silently, and aborts on the first failed required wait.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use loomcheck::core::{Condition, Locator, Visibility};
use loomcheck::{scenarios, Config, LoomcheckError, PageDriver, Runner, Scenario};
use tokio_test::assert_ok;

/// Test double recording invocation order
#[derive(Default)]
struct MockPage {
    /// Every driver call, in order
    ops: Mutex<Vec<String>>,
    /// Conditions that never become true; waits on them time out
    never_true: HashSet<String>,
    /// Visibility answers per locator selector (default: visible)
    visibility: HashMap<String, Visibility>,
    /// Locators whose click fails with ElementNotFound
    missing: HashSet<String>,
}

impl MockPage {
    fn record(&self, op: impl Into<String>) {
        self.ops.lock().unwrap().push(op.into());
    }

    fn ops(&self) -> Vec<String> {
        self.ops.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageDriver for MockPage {
    async fn goto(&self, url: &str) -> loomcheck::Result<()> {
        self.record(format!("goto {}", url));
        Ok(())
    }

    async fn wait_for(&self, condition: &Condition, timeout_ms: u64) -> loomcheck::Result<()> {
        self.record(format!("wait {}", condition));
        if self.never_true.contains(&condition.to_string()) {
            tokio::time::sleep(Duration::from_millis(timeout_ms)).await;
            return Err(LoomcheckError::timeout(condition.to_string(), timeout_ms));
        }
        Ok(())
    }

    async fn visibility(&self, locator: &Locator) -> loomcheck::Result<Visibility> {
        self.record(format!("visibility {}", locator));
        Ok(self
            .visibility
            .get(&locator.as_selector())
            .copied()
            .unwrap_or(Visibility::Visible))
    }

    async fn click(&self, locator: &Locator) -> loomcheck::Result<()> {
        if self.missing.contains(&locator.as_selector()) {
            return Err(LoomcheckError::element_not_found(locator.as_selector()));
        }
        self.record(format!("click {}", locator));
        Ok(())
    }

    async fn select_option(&self, locator: &Locator, value: &str) -> loomcheck::Result<()> {
        self.record(format!("select {} = {}", locator, value));
        Ok(())
    }

    async fn screenshot(&self, path: &Path) -> loomcheck::Result<()> {
        self.record(format!(
            "screenshot {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        ));
        std::fs::write(path, b"\x89PNG")?;
        Ok(())
    }
}

fn test_config(out_dir: &Path) -> Config {
    let mut config = Config::default();
    config.set_base_url("http://localhost:3001");
    config.output.dir = out_dir.to_path_buf();
    config.browser.timeout_ms = 100;
    config
}

#[tokio::test]
async fn steps_execute_in_declared_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let page = MockPage::default();

    let scenario = scenarios::by_slug("login").unwrap();
    assert_ok!(Runner::new(&page, &config).run_scenario(&scenario).await);

    assert_eq!(
        page.ops(),
        vec![
            "goto http://localhost:3001/login",
            "wait text \"Sign in to LogicLoom\"",
            "screenshot login.png",
        ]
    );
}

#[tokio::test]
async fn dashboard_waits_precede_capture() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let page = MockPage::default();

    let scenario = scenarios::by_slug("dashboard").unwrap();
    assert_ok!(Runner::new(&page, &config).run_scenario(&scenario).await);

    let ops = page.ops();
    let growth = ops
        .iter()
        .position(|op| op.contains("Follower Growth"))
        .unwrap();
    let volume = ops
        .iter()
        .position(|op| op.contains("Engagement Volume"))
        .unwrap();
    let capture = ops
        .iter()
        .position(|op| op.starts_with("screenshot"))
        .unwrap();

    assert!(growth < capture);
    assert!(volume < capture);
}

#[tokio::test]
async fn guarded_click_skips_when_target_absent() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let mut page = MockPage::default();
    page.visibility.insert(
        "button:has-text('Connect')".to_string(),
        Visibility::Absent,
    );

    let scenario = scenarios::by_slug("connections").unwrap();
    assert_ok!(Runner::new(&page, &config).run_scenario(&scenario).await);

    let ops = page.ops();
    assert!(ops.iter().all(|op| !op.starts_with("click")));
    // The confirm wait belongs to the guarded branch and is skipped with it
    assert!(ops.iter().all(|op| !op.contains("Connected")));
    // Later steps still ran
    assert!(ops.iter().any(|op| op.starts_with("screenshot")));
}

#[tokio::test]
async fn connections_toggle_flips_at_most_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let scenario = scenarios::by_slug("connections").unwrap();

    // First run: button visible, click happens and is confirmed
    let page = MockPage::default();
    assert_ok!(Runner::new(&page, &config).run_scenario(&scenario).await);
    let first = page.ops();
    assert_eq!(first.iter().filter(|op| op.starts_with("click")).count(), 1);
    assert!(first.iter().any(|op| op.contains("Connected")));

    // Second run: already connected, button gone, same final shape minus the click
    let mut page = MockPage::default();
    page.visibility.insert(
        "button:has-text('Connect')".to_string(),
        Visibility::Absent,
    );
    assert_ok!(Runner::new(&page, &config).run_scenario(&scenario).await);
    let second = page.ops();
    assert_eq!(second.iter().filter(|op| op.starts_with("click")).count(), 0);
    assert!(second.iter().any(|op| op.starts_with("screenshot")));
}

#[tokio::test]
async fn failed_required_wait_aborts_remaining_steps() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let mut page = MockPage::default();
    page.never_true.insert("text \"never rendered\"".to_string());

    let scenario = Scenario::new("Doomed", "doomed")
        .navigate("/dashboard")
        .wait_with_timeout(Condition::text("never rendered"), 1)
        .capture("doomed.png");

    let err = Runner::new(&page, &config)
        .run_scenario(&scenario)
        .await
        .unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got: {}", err);

    let ops = page.ops();
    assert!(ops.iter().all(|op| !op.starts_with("screenshot")));
    assert!(!dir.path().join("doomed.png").exists());
}

#[tokio::test]
async fn timeout_in_one_scenario_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let mut page = MockPage::default();
    page.never_true.insert("text \"never rendered\"".to_string());

    let doomed = Scenario::new("Doomed", "doomed")
        .navigate("/dashboard")
        .wait_with_timeout(Condition::text("never rendered"), 1);
    let after = scenarios::by_slug("login").unwrap();

    let result = Runner::new(&page, &config).run_all(&[doomed, after]).await;
    assert!(result.is_err());

    // No scenario after the failing one started
    let ops = page.ops();
    assert!(ops.iter().all(|op| !op.contains("/login")));
}

#[tokio::test]
async fn login_screenshot_written_and_next_scenario_runs() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let page = MockPage::default();

    let flows = vec![
        scenarios::by_slug("login").unwrap(),
        scenarios::by_slug("signup").unwrap(),
    ];
    assert_ok!(Runner::new(&page, &config).run_all(&flows).await);

    assert!(dir.path().join("login.png").exists());
    assert!(dir.path().join("signup.png").exists());

    let ops = page.ops();
    let login_shot = ops
        .iter()
        .position(|op| op == "screenshot login.png")
        .unwrap();
    let signup_nav = ops
        .iter()
        .position(|op| op.contains("/signup"))
        .unwrap();
    assert!(login_shot < signup_nav);
}

#[tokio::test]
async fn rerun_overwrites_screenshots_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let page = MockPage::default();
    let scenario = scenarios::by_slug("login").unwrap();

    let runner = Runner::new(&page, &config);
    assert_ok!(runner.run_scenario(&scenario).await);
    assert_ok!(runner.run_scenario(&scenario).await);

    // Still exactly one evidence file, current state only
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn dashboard_layout_check_tolerates_absent_public_link() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let mut page = MockPage::default();
    page.visibility
        .insert("text=Rate Calculator".to_string(), Visibility::Absent);

    let scenario = scenarios::by_slug("dashboard-layout").unwrap();
    assert_ok!(Runner::new(&page, &config).run_scenario(&scenario).await);

    let ops = page.ops();
    assert!(ops
        .iter()
        .any(|op| op == "visibility text=Rate Calculator"));
    // Soft check never blocks evidence capture
    assert!(ops.iter().any(|op| op.starts_with("screenshot")));
}

#[tokio::test]
async fn unguarded_missing_element_fails_the_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let mut page = MockPage::default();
    page.missing.insert("button[type='submit']".to_string());

    let scenario = Scenario::new("Submit", "submit")
        .navigate("/tools/best-time")
        .click(Locator::css("button[type='submit']"))
        .capture("never.png");

    let err = Runner::new(&page, &config)
        .run_scenario(&scenario)
        .await
        .unwrap_err();
    assert!(matches!(err, LoomcheckError::ElementNotFound(_)));
    assert!(!dir.path().join("never.png").exists());
}
