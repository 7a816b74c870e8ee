//! Labels for form controls (WCAG 3.3.2 / 1.3.1).

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::{Rule, context_snippet, element_selector};
use crate::domain::issue::{ConformanceLevel, Issue, Principle};

static CONTROLS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input, select, textarea").unwrap());

static LABELS_WITH_FOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("label[for]").unwrap());

/// Input types that do not need a visible label.
const EXEMPT_INPUT_TYPES: &[&str] = &["hidden", "submit", "button", "image"];

/// Flags form controls without an associated `<label>`.
///
/// A control counts as labelled when it is wrapped by a `<label>` ancestor or
/// when a `<label for="...">` references its `id`.
pub struct FormLabel;

impl Rule for FormLabel {
    fn id(&self) -> &'static str {
        "FORM_LABEL"
    }

    fn check(&self, document: &Html) -> Vec<Issue> {
        let referenced_ids: HashSet<&str> = document
            .select(&LABELS_WITH_FOR)
            .filter_map(|label| label.value().attr("for"))
            .collect();

        document
            .select(&CONTROLS)
            .filter(|control| !is_exempt(control))
            .filter(|control| !is_labelled(control, &referenced_ids))
            .map(|control| Issue {
                rule: self.id(),
                principle: Principle::Understandable,
                success_criterion: "3.3.2 Labels or Instructions / 1.3.1 Info and Relationships",
                level: ConformanceLevel::A,
                description: "Form controls must have associated labels.",
                context: context_snippet(&control),
                selector: element_selector(&control),
                recommendation:
                    "Add a <label> element referencing the control or wrap the control in a <label>.",
            })
            .collect()
    }
}

fn is_exempt(control: &ElementRef) -> bool {
    control.value().name() == "input"
        && control.value().attr("type").is_some_and(|t| {
            EXEMPT_INPUT_TYPES
                .iter()
                .any(|exempt| t.eq_ignore_ascii_case(exempt))
        })
}

fn is_labelled(control: &ElementRef, referenced_ids: &HashSet<&str>) -> bool {
    let wrapped = control
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "label");

    wrapped
        || control
            .value()
            .attr("id")
            .is_some_and(|id| referenced_ids.contains(id))
}
