//! The WCAG rule engine.
//!
//! Each rule inspects a parsed document and reports zero or more [`Issue`]s.
//! Rules are assembled into a registry via [`default_rules`] and run by
//! [`crate::application::services::ScanService`].

mod form_label;
mod img_alt;
mod link_text;

pub use form_label::FormLabel;
pub use img_alt::ImgAlt;
pub use link_text::LinkText;

use crate::domain::issue::Issue;
use scraper::{ElementRef, Html};

/// A single automated accessibility check.
pub trait Rule: Send + Sync {
    /// Stable identifier reported in issue rows, e.g. `IMG_ALT`.
    fn id(&self) -> &'static str;

    /// Runs the check against a parsed document.
    fn check(&self, document: &Html) -> Vec<Issue>;
}

/// The built-in WCAG 2.2 Level A rule set.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ImgAlt),
        Box::new(FormLabel),
        Box::new(LinkText),
    ]
}

/// Position of the element among same-tag siblings, 1-indexed.
fn nth_of_type(element: &ElementRef) -> usize {
    let name = element.value().name();
    element
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .filter(|sibling| sibling.value().name() == name)
        .count()
        + 1
}

/// Approximate CSS selector for locating the element in the page.
pub(crate) fn element_selector(element: &ElementRef) -> String {
    format!("{}:nth-of-type({})", element.value().name(), nth_of_type(element))
}

/// Maximum length of the markup excerpt attached to an issue.
const CONTEXT_LIMIT: usize = 200;

/// Offending element markup, truncated for report readability.
pub(crate) fn context_snippet(element: &ElementRef) -> String {
    let html = element.html();
    if html.chars().count() <= CONTEXT_LIMIT {
        html
    } else {
        html.chars().take(CONTEXT_LIMIT).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_registry() {
        let rules = default_rules();
        let ids: Vec<&str> = rules.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["IMG_ALT", "FORM_LABEL", "LINK_TEXT"]);
    }

    #[test]
    fn test_element_selector_counts_same_tag_siblings() {
        let document = Html::parse_document(
            "<div><p>one</p><img src='a.png'><img src='b.png'></div>",
        );
        let selector = scraper::Selector::parse("img").unwrap();
        let selectors: Vec<String> = document
            .select(&selector)
            .map(|el| element_selector(&el))
            .collect();

        assert_eq!(
            selectors,
            vec!["img:nth-of-type(1)".to_string(), "img:nth-of-type(2)".to_string()]
        );
    }

    #[test]
    fn test_context_snippet_is_truncated() {
        let long_alt = "x".repeat(500);
        let html = format!("<div><img src='a.png' title='{long_alt}'></div>");
        let document = Html::parse_document(&html);
        let selector = scraper::Selector::parse("img").unwrap();
        let img = document.select(&selector).next().unwrap();

        assert_eq!(context_snippet(&img).chars().count(), 200);
    }
}
