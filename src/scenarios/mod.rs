//! Built-in verification scenarios for the LogicLoom dashboard
//!
//! Routes, expected texts, interactions, and screenshot filenames are coupled
//! to the rendered application. Any copy change on the target pages is a
//! breaking change for these flows.

use crate::core::{Condition, Locator};
use crate::runner::Scenario;

/// The full catalog, in run order
pub fn builtin() -> Vec<Scenario> {
    vec![
        dashboard_overview(),
        connections(),
        best_time_tool(),
        login(),
        signup(),
        pricing(),
        settings(),
        profile(),
        calendar(),
        deals_crm(),
        collabs(),
        monetization(),
        landing_layout(),
        dashboard_layout(),
    ]
}

/// Look up a scenario by slug
pub fn by_slug(slug: &str) -> Option<Scenario> {
    builtin().into_iter().find(|s| s.slug == slug)
}

fn dashboard_overview() -> Scenario {
    Scenario::new("Dashboard", "dashboard")
        .navigate("/dashboard")
        .wait_text("Dashboard")
        .wait_text("Follower Growth")
        .wait_text("Engagement Volume")
        .capture("dashboard_overview.png")
}

fn connections() -> Scenario {
    // The Connect button only exists while a platform is disconnected, so the
    // click is guarded; a re-run finds "Connected" and skips.
    Scenario::new("Connections", "connections")
        .navigate("/dashboard/connections")
        .wait_text("Platform Connections")
        .click_if_visible(
            Locator::css("button:has-text('Connect')"),
            Some(Condition::text("Connected")),
        )
        .capture("dashboard_connections.png")
}

fn best_time_tool() -> Scenario {
    Scenario::new("Best Time Tool", "best-time")
        .navigate("/tools/best-time")
        .wait_text("When Should You Post?")
        .select(Locator::css("select:has-text('Platform')"), "tiktok")
        .click(Locator::css("button[type='submit']"))
        .wait_text("Recommended Posting Slots")
        .capture("best_time_tool.png")
}

fn login() -> Scenario {
    Scenario::new("Login", "login")
        .navigate("/login")
        .wait_text("Sign in to LogicLoom")
        .capture("login.png")
}

fn signup() -> Scenario {
    Scenario::new("Signup", "signup")
        .navigate("/signup")
        .wait_text("Create your account")
        .capture("signup.png")
}

fn pricing() -> Scenario {
    Scenario::new("Pricing", "pricing")
        .navigate("/pricing")
        .wait_text("Invest in your business")
        .wait_text("Most Popular")
        .capture("pricing.png")
}

fn settings() -> Scenario {
    Scenario::new("Settings", "settings")
        .navigate("/dashboard/settings")
        .wait_text("Profile Information")
        .wait_text("Subscription & Billing")
        .capture("settings.png")
}

fn profile() -> Scenario {
    Scenario::new("Profile", "profile")
        .navigate("/dashboard/profile")
        .wait_text("John Doe")
        .wait_text("Portfolio")
        .capture("profile.png")
}

fn calendar() -> Scenario {
    Scenario::new("Calendar", "calendar")
        .navigate("/dashboard/calendar")
        .wait_text("Content Calendar")
        .wait_text("Idea Backlog")
        .wait_text("Sun")
        .capture("calendar.png")
}

fn deals_crm() -> Scenario {
    Scenario::new("Deals CRM", "deals")
        .navigate("/dashboard/deals")
        .wait_text("Brand Deal CRM")
        .wait_text("Prospects")
        .wait_text("Active / In Progress")
        .capture("deals_crm.png")
}

fn collabs() -> Scenario {
    Scenario::new("Collabs", "collabs")
        .navigate("/dashboard/collabs")
        .wait_text("Creator Marketplace")
        .wait_text("Connect")
        .capture("collabs.png")
}

fn monetization() -> Scenario {
    Scenario::new("Monetization", "monetization")
        .navigate("/dashboard/monetization")
        .wait_text("Monetization")
        .wait_text("Link-in-Bio Page")
        .wait_text("Digital Store")
        .capture("monetization.png")
}

fn landing_layout() -> Scenario {
    Scenario::new("Public Landing Layout", "landing-layout")
        .navigate("/")
        .wait_selector("h1")
        .check_present(Locator::css("nav"))
        .check_present(Locator::text("LogicLoom"))
        .capture("landing_page_layout.png")
}

fn dashboard_layout() -> Scenario {
    // "Rate Calculator" is a public-navbar-only link; seeing it on an
    // authenticated route means the public layout leaked in.
    Scenario::new("Dashboard Layout", "dashboard-layout")
        .navigate("/dashboard")
        .wait_text("Overview")
        .check_absent(Locator::text("Rate Calculator"))
        .capture("dashboard_layout_fixed.png")
}
