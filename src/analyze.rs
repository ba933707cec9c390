//! Design analysis heuristics.
//!
//! Boolean presence checks over a markup string: no DOM, no scoring model,
//! just pattern tests that classify each dimension as good, needs-work, or
//! missing, with a canned recommendation for anything that fails. The LLM
//! path may add richer prose; the manual engine never synthesizes numbers.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::classes::{BREAKPOINT_PREFIXES, INTERACTION_MARKERS};

/// Verdict for one analyzed dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    Good,
    NeedsWork,
    Missing,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Good => "Good",
            Verdict::NeedsWork => "Needs work",
            Verdict::Missing => "Missing",
        }
    }
}

/// One analyzed dimension of the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    pub name: String,
    pub verdict: Verdict,
    pub detail: String,
    #[serde(default)]
    pub recommendation: Option<String>,
}

/// A full design report. Shared shape between both execution paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignReport {
    pub checks: Vec<Check>,
    #[serde(default)]
    pub summary: Option<String>,
}

fn class_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"class="([^"]*)""#).expect("class attribute regex"))
}

fn img_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<img\b[^>]*>").expect("img tag regex"))
}

const SEMANTIC_TAGS: &[&str] = &["<header", "<nav", "<main", "<footer", "<section", "<article"];

/// Run every check over a markup fragment.
pub fn analyze(html: &str) -> DesignReport {
    let checks = vec![
        check_semantics(html),
        check_accessibility(html),
        check_responsive(html),
        check_interactivity(html),
        check_class_usage(html),
    ];

    let good = checks.iter().filter(|c| c.verdict == Verdict::Good).count();
    let summary = Some(format!("{} of {} checks passed", good, checks.len()));

    DesignReport { checks, summary }
}

fn check_semantics(html: &str) -> Check {
    let found: Vec<&str> =
        SEMANTIC_TAGS.iter().filter(|t| html.contains(**t)).map(|t| &t[1..]).collect();

    if found.is_empty() {
        Check {
            name: "Semantic structure".to_string(),
            verdict: Verdict::Missing,
            detail: "No semantic landmark elements found".to_string(),
            recommendation: Some(
                "Use landmark elements (header, nav, main, footer) instead of bare divs"
                    .to_string(),
            ),
        }
    } else {
        Check {
            name: "Semantic structure".to_string(),
            verdict: Verdict::Good,
            detail: format!("Semantic elements present: {}", found.join(", ")),
            recommendation: None,
        }
    }
}

fn check_accessibility(html: &str) -> Check {
    let images = img_tag_regex().find_iter(html).count();
    let images_with_alt =
        img_tag_regex().find_iter(html).filter(|m| m.as_str().contains("alt=")).count();
    let has_aria = html.contains("aria-") || html.contains("role=");

    if images > images_with_alt {
        Check {
            name: "Accessibility".to_string(),
            verdict: Verdict::NeedsWork,
            detail: format!("{} of {} images missing alt text", images - images_with_alt, images),
            recommendation: Some("Add alt attributes to every img element".to_string()),
        }
    } else if !has_aria && !html.contains("<label") {
        Check {
            name: "Accessibility".to_string(),
            verdict: Verdict::NeedsWork,
            detail: "No ARIA attributes or labels found".to_string(),
            recommendation: Some(
                "Add aria-label/role attributes to interactive elements".to_string(),
            ),
        }
    } else {
        Check {
            name: "Accessibility".to_string(),
            verdict: Verdict::Good,
            detail: "Images are labelled and ARIA usage is present".to_string(),
            recommendation: None,
        }
    }
}

fn check_responsive(html: &str) -> Check {
    let found: Vec<&str> =
        BREAKPOINT_PREFIXES.iter().filter(|p| html.contains(**p)).copied().collect();

    if found.is_empty() {
        Check {
            name: "Responsive design".to_string(),
            verdict: Verdict::Missing,
            detail: "No responsive breakpoint variants found".to_string(),
            recommendation: Some(
                "Add breakpoint variants (sm:, md:, lg:) so the layout adapts to screen size"
                    .to_string(),
            ),
        }
    } else {
        Check {
            name: "Responsive design".to_string(),
            verdict: Verdict::Good,
            detail: format!("Breakpoint variants in use: {}", found.join(" ")),
            recommendation: None,
        }
    }
}

fn check_interactivity(html: &str) -> Check {
    let found: Vec<&str> =
        INTERACTION_MARKERS.iter().filter(|m| html.contains(**m)).copied().collect();

    if found.is_empty() {
        Check {
            name: "Interactivity".to_string(),
            verdict: Verdict::NeedsWork,
            detail: "No hover/focus states or transitions found".to_string(),
            recommendation: Some(
                "Add hover: and focus: variants plus transition classes for interactive feedback"
                    .to_string(),
            ),
        }
    } else {
        Check {
            name: "Interactivity".to_string(),
            verdict: Verdict::Good,
            detail: format!("Interaction states in use: {}", found.join(" ")),
            recommendation: None,
        }
    }
}

fn check_class_usage(html: &str) -> Check {
    let counts: Vec<usize> = class_attr_regex()
        .captures_iter(html)
        .map(|c| c[1].split_whitespace().count())
        .collect();

    if counts.is_empty() {
        return Check {
            name: "Class usage".to_string(),
            verdict: Verdict::Missing,
            detail: "No class attributes found".to_string(),
            recommendation: Some("Style elements with utility classes".to_string()),
        };
    }

    let total: usize = counts.iter().sum();
    let max = counts.iter().copied().max().unwrap_or(0);

    if max > 15 {
        Check {
            name: "Class usage".to_string(),
            verdict: Verdict::NeedsWork,
            detail: format!(
                "{} classes across {} elements; heaviest element carries {}",
                total,
                counts.len(),
                max
            ),
            recommendation: Some(
                "Extract heavily repeated class lists into a shared component".to_string(),
            ),
        }
    } else {
        Check {
            name: "Class usage".to_string(),
            verdict: Verdict::Good,
            detail: format!("{} classes across {} elements", total, counts.len()),
            recommendation: None,
        }
    }
}
