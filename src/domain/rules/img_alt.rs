//! Text alternatives for images (WCAG 1.1.1).

use std::sync::LazyLock;

use scraper::{Html, Selector};

use super::{Rule, context_snippet, element_selector};
use crate::domain::issue::{ConformanceLevel, Issue, Principle};

static IMAGES: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

/// Flags `<img>` elements without a non-empty `alt` attribute.
pub struct ImgAlt;

impl Rule for ImgAlt {
    fn id(&self) -> &'static str {
        "IMG_ALT"
    }

    fn check(&self, document: &Html) -> Vec<Issue> {
        document
            .select(&IMAGES)
            .filter(|img| {
                img.value()
                    .attr("alt")
                    .is_none_or(|alt| alt.trim().is_empty())
            })
            .map(|img| Issue {
                rule: self.id(),
                principle: Principle::Perceivable,
                success_criterion: "1.1.1 Non-text Content",
                level: ConformanceLevel::A,
                description: "Image elements must have a text alternative (alt attribute).",
                context: context_snippet(&img),
                selector: element_selector(&img),
                recommendation: "Add a descriptive alt attribute to the <img> element.",
            })
            .collect()
    }
}
