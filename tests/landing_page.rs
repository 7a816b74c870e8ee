//! Structural assertions about the landing page markup.

use axum::{Router, routing::get};
use axum_test::TestServer;
use scraper::{Html, Selector};
use wcag_scanner::domain::rules::default_rules;
use wcag_scanner::web::handlers::landing_handler;

async fn rendered_page() -> String {
    let app: Router = Router::new().route("/", get(landing_handler));
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;
    response.assert_status_ok();

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    response.text()
}

#[tokio::test]
async fn test_form_posts_to_scan_in_new_context() {
    let page = rendered_page().await;
    let document = Html::parse_document(&page);

    let forms: Vec<_> = document
        .select(&Selector::parse("form").unwrap())
        .collect();
    assert_eq!(forms.len(), 1);

    let form = forms[0].value();
    assert_eq!(form.attr("action"), Some("/scan"));
    assert_eq!(form.attr("method"), Some("post"));
    assert_eq!(form.attr("target"), Some("_blank"));
}

#[tokio::test]
async fn test_exactly_one_url_input_and_submit_control() {
    let page = rendered_page().await;
    let document = Html::parse_document(&page);

    let url_inputs: Vec<_> = document
        .select(&Selector::parse("input[type=url]").unwrap())
        .collect();
    assert_eq!(url_inputs.len(), 1);

    let input = url_inputs[0].value();
    assert_eq!(input.attr("name"), Some("url"));
    assert!(input.attr("required").is_some());

    let submits = document
        .select(&Selector::parse("button[type=submit], input[type=submit]").unwrap())
        .count();
    assert_eq!(submits, 1);

    // The url input is the only input on the page.
    let inputs = document.select(&Selector::parse("input").unwrap()).count();
    assert_eq!(inputs, 1);
}

#[tokio::test]
async fn test_get_api_alternative_is_documented() {
    let page = rendered_page().await;

    assert!(page.contains("GET /scan?url="));
}

#[tokio::test]
async fn test_landing_page_passes_its_own_rules() {
    let page = rendered_page().await;
    let document = Html::parse_document(&page);

    for rule in default_rules() {
        let issues = rule.check(&document);
        assert!(
            issues.is_empty(),
            "landing page violates {}: {:?}",
            rule.id(),
            issues
        );
    }
}
