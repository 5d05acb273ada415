use scraper::Html;
use seolens::checks::OnPageAnalyzer;
use seolens::models::{CategoryResult, CheckId, CheckResult, CheckStatus};
use seolens::page::Page;
use url::Url;

const PAGE_URL: &str = "https://shop.example.com/products/widgets";

fn analyze(head: &str, body: &str) -> CategoryResult {
    let html = format!(
        "<!DOCTYPE html><html><head>{}</head><body>{}</body></html>",
        head, body
    );
    let document = Html::parse_document(&html);
    let url = Url::parse(PAGE_URL).unwrap();
    OnPageAnalyzer::analyze(&Page::new(&document, &url))
}

fn check(result: &CategoryResult, id: CheckId) -> CheckResult {
    result
        .find(id)
        .unwrap_or_else(|| panic!("Check not found: {:?}", id))
        .clone()
}

#[test]
fn test_checks_run_in_fixed_order() {
    let result = analyze("", "");
    let ids: Vec<_> = result.iter().map(|c| c.id).collect();

    assert_eq!(
        ids,
        vec![
            CheckId::TitleTag,
            CheckId::MetaDescription,
            CheckId::H1Heading,
            CheckId::ImageAltText,
            CheckId::InternalLinking,
        ]
    );
}

#[test]
fn test_title_in_recommended_range() {
    let result = analyze(
        "<title>Best Widgets for Your Home and Garden 2024</title>",
        "",
    );
    let title = check(&result, CheckId::TitleTag);

    assert_eq!(title.status, CheckStatus::Good);
    assert_eq!(title.title, "Title Tag");
    assert_eq!(title.value, "Best Widgets for Your Home and Garden 2024");
    assert!(title.description.contains("42 characters"));
}

#[test]
fn test_title_missing_or_blank() {
    for head in ["", "<title></title>", "<title>   \n  </title>"] {
        let title = check(&analyze(head, ""), CheckId::TitleTag);
        assert_eq!(title.status, CheckStatus::Error, "head: {:?}", head);
        assert_eq!(title.value, "Missing");
    }
}

#[test]
fn test_title_length_boundaries() {
    let cases = [
        (29, CheckStatus::Warning),
        (30, CheckStatus::Good),
        (60, CheckStatus::Good),
        (61, CheckStatus::Warning),
    ];

    for (length, expected) in cases {
        let head = format!("<title>{}</title>", "a".repeat(length));
        let title = check(&analyze(&head, ""), CheckId::TitleTag);
        assert_eq!(title.status, expected, "title length {}", length);
    }
}

#[test]
fn test_title_is_trimmed() {
    let title = check(
        &analyze("<title>\n   Short title   \n</title>", ""),
        CheckId::TitleTag,
    );

    assert_eq!(title.value, "Short title");
    assert_eq!(title.status, CheckStatus::Warning);
}

#[test]
fn test_meta_description() {
    let good = "x".repeat(140);
    let head = format!("<meta name=\"description\" content=\"{}\">", good);
    let meta = check(&analyze(&head, ""), CheckId::MetaDescription);
    assert_eq!(meta.status, CheckStatus::Good);
    assert_eq!(meta.value, good);

    let meta = check(
        &analyze("<meta name=\"description\" content=\"Too short\">", ""),
        CheckId::MetaDescription,
    );
    assert_eq!(meta.status, CheckStatus::Warning);

    let meta = check(
        &analyze("<meta name=\"description\" content=\"\">", ""),
        CheckId::MetaDescription,
    );
    assert_eq!(meta.status, CheckStatus::Error);
    assert_eq!(meta.value, "Missing");
}

#[test]
fn test_h1_heading_counts() {
    let h1 = check(&analyze("", "<p>No heading</p>"), CheckId::H1Heading);
    assert_eq!(h1.status, CheckStatus::Error);
    assert_eq!(h1.value, "Missing");

    let h1 = check(&analyze("", "<h1>  Garden Widgets </h1>"), CheckId::H1Heading);
    assert_eq!(h1.status, CheckStatus::Good);
    assert_eq!(h1.value, "Garden Widgets");

    let h1 = check(
        &analyze("", "<h1>First</h1><section><h1>Second</h1></section>"),
        CheckId::H1Heading,
    );
    assert_eq!(h1.status, CheckStatus::Warning);
    assert_eq!(h1.value, "First");
    assert!(h1.description.contains("Found 2 H1 tags"));
}

#[test]
fn test_image_alt_text_partial_coverage() {
    let body = r#"
        <img src="a.jpg" alt="A">
        <img src="b.jpg" alt="B">
        <img src="c.jpg" alt="C">
        <img src="d.jpg" alt="D">
        <img src="e.jpg">
    "#;
    let alt = check(&analyze("", body), CheckId::ImageAltText);

    assert_eq!(alt.value, "4/5 images");
    assert_eq!(alt.status, CheckStatus::Warning);
    assert!(alt.description.contains("(80%)"));
}

#[test]
fn test_image_alt_text_empty_alt_counts_as_missing() {
    let body = r#"<img src="a.jpg" alt=""><img src="b.jpg" alt="B">"#;
    let alt = check(&analyze("", body), CheckId::ImageAltText);

    assert_eq!(alt.value, "1/2 images");
    assert_eq!(alt.status, CheckStatus::Error);
}

#[test]
fn test_image_alt_text_without_images() {
    let alt = check(&analyze("", "<p>Text only</p>"), CheckId::ImageAltText);

    assert_eq!(alt.status, CheckStatus::Good);
    assert_eq!(alt.value, "0/0 images");
    assert_eq!(alt.description, "No images found on the page.");
}

#[test]
fn test_internal_linking() {
    let body = r#"
        <a href="/about">About</a>
        <a href="https://shop.example.com/cart">Cart</a>
        <a href="https://elsewhere.org/">Partner</a>
        <a>No href</a>
    "#;
    let links = check(&analyze("", body), CheckId::InternalLinking);
    assert_eq!(links.status, CheckStatus::Good);
    assert_eq!(links.value, "2 internal links");

    let links = check(
        &analyze("", r#"<a href="https://elsewhere.org/">Partner</a>"#),
        CheckId::InternalLinking,
    );
    assert_eq!(links.status, CheckStatus::Warning);
    assert_eq!(links.value, "0 internal links");
}
