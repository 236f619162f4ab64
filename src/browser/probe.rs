//! Visibility probing via in-page JavaScript
//!
//! Builds the script evaluated for the tri-state capability query and parses
//! the CLI's eval output back into a `Visibility`.

use crate::core::{Locator, LoomcheckError, Result, Visibility};

/// Split a Playwright-style `:has-text('...')` suffix off a CSS selector.
///
/// querySelectorAll does not understand the extension, so the probe filters
/// by text content in JS instead.
pub fn split_has_text(selector: &str) -> (String, Option<String>) {
    if let Some(idx) = selector.find(":has-text('") {
        let base = selector[..idx].to_string();
        let rest = &selector[idx + ":has-text('".len()..];
        if let Some(end) = rest.find("')") {
            return (base, Some(rest[..end].to_string()));
        }
    }
    (selector.to_string(), None)
}

/// Build the JS expression returning "visible", "hidden", or "absent"
pub fn probe_script(locator: &Locator) -> String {
    let (candidates, filter) = match locator {
        Locator::Css(sel) => {
            let (base, text) = split_has_text(sel);
            let base_js = js_string(&base);
            match text {
                Some(t) => (
                    format!("Array.from(document.querySelectorAll({}))", base_js),
                    format!(".filter(el => (el.textContent || '').includes({}))", js_string(&t)),
                ),
                None => (
                    format!("Array.from(document.querySelectorAll({}))", base_js),
                    String::new(),
                ),
            }
        }
        Locator::Text(t) => (
            "Array.from(document.querySelectorAll('body *'))".to_string(),
            format!(
                ".filter(el => el.childElementCount === 0 && (el.textContent || '').includes({}))",
                js_string(t)
            ),
        ),
    };

    format!(
        "(() => {{ const els = {}{}; if (els.length === 0) return 'absent'; \
         const visible = els.some(el => el.getClientRects().length > 0 && \
         getComputedStyle(el).visibility !== 'hidden'); \
         return visible ? 'visible' : 'hidden'; }})()",
        candidates, filter
    )
}

/// Parse the eval output (possibly JSON-quoted, possibly bare) into a state
pub fn parse_probe_output(raw: &str) -> Result<Visibility> {
    let trimmed = raw.trim().trim_matches('"');
    match trimmed {
        "visible" => Ok(Visibility::Visible),
        "hidden" => Ok(Visibility::Hidden),
        "absent" => Ok(Visibility::Absent),
        other => Err(LoomcheckError::browser(format!(
            "unexpected visibility probe output: {}",
            other
        ))),
    }
}

/// Quote a Rust string as a JS string literal
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}
