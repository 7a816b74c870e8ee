//! Descriptive link text (WCAG 2.4.4).

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use super::{Rule, context_snippet, element_selector};
use crate::domain::issue::{ConformanceLevel, Issue, Principle};

static LINKS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Matches link text that is generic on its own or as a leading phrase.
static GENERIC_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:click here|read more|learn more|more|details)(?:\s|$)").unwrap()
});

/// Flags links whose text is empty or generic when read out of context.
pub struct LinkText;

impl Rule for LinkText {
    fn id(&self) -> &'static str {
        "LINK_TEXT"
    }

    fn check(&self, document: &Html) -> Vec<Issue> {
        document
            .select(&LINKS)
            .filter(|link| {
                let text = link.text().collect::<String>().trim().to_lowercase();
                text.is_empty() || GENERIC_TEXT.is_match(&text)
            })
            .map(|link| Issue {
                rule: self.id(),
                principle: Principle::Understandable,
                success_criterion: "2.4.4 Link Purpose (In Context)",
                level: ConformanceLevel::A,
                description: "Link text should be descriptive and convey the purpose of the link.",
                context: context_snippet(&link),
                selector: element_selector(&link),
                recommendation:
                    "Replace generic link text with text that describes the destination or action.",
            })
            .collect()
    }
}
