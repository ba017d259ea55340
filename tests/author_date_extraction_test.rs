use rs_news_extract::profile::MetadataSelectors;
use rs_news_extract::{
    extract, Outcome, ProfileRegistry, Selector, SiteProfile, AUTHOR_NOT_FOUND, DATE_NOT_FOUND,
    TITLE_NOT_FOUND,
};

fn sel(s: &str) -> Selector {
    match s.parse() {
        Ok(sel) => sel,
        Err(err) => panic!("selector {s:?} failed to parse: {err}"),
    }
}

fn profile_with(author: &[&str], date: &[&str]) -> SiteProfile {
    SiteProfile {
        body_selectors: vec![sel(".story")],
        metadata: MetadataSelectors {
            author: author.iter().map(|s| sel(s)).collect(),
            date: date.iter().map(|s| sel(s)).collect(),
            ..MetadataSelectors::default()
        },
        ..SiteProfile::default()
    }
}

#[test]
fn byline_outside_body_container_is_found() {
    let html = r#"
        <html><body>
            <div class="masthead">
                <h1>Storm hits coast</h1>
                <p class="author-name">Priya Raman</p>
                <span class="article-date">12 March 2024</span>
            </div>
            <div class="story"><p>Winds reached 120km/h.</p></div>
        </body></html>
    "#;

    let result = extract(html, &profile_with(&[".author-name"], &[".article-date"]));

    assert_eq!(result.status, Outcome::Success);
    assert_eq!(result.author, "Priya Raman");
    assert_eq!(result.date, "12 March 2024");
    assert!(result.has_author());
    assert!(result.has_date());
}

#[test]
fn selector_order_beats_document_order() {
    let html = r#"
        <html><body>
            <span class="byline">Desk Staff</span>
            <div class="story"><p>Text.</p></div>
            <span class="author-name">Named Writer</span>
        </body></html>
    "#;

    let result = extract(html, &profile_with(&[".author-name", ".byline"], &[]));

    assert_eq!(result.author, "Named Writer");
}

#[test]
fn blank_matches_fall_through_to_next_candidate() {
    let html = r#"
        <html><body>
            <span class="author-name">   </span>
            <span class="byline">Second Choice</span>
            <div class="story"><p>Text.</p></div>
        </body></html>
    "#;

    let result = extract(html, &profile_with(&[".author-name", ".byline"], &[]));

    assert_eq!(result.author, "Second Choice");
}

#[test]
fn date_is_kept_verbatim() {
    let html = r#"
        <html><body>
            <time datetime="2024-08-17T14:00:00Z">Updated yesterday, 2pm</time>
            <div class="story"><p>Text.</p></div>
        </body></html>
    "#;

    let result = extract(html, &profile_with(&[], &["time[datetime]"]));

    assert_eq!(result.date, "Updated yesterday, 2pm");
}

#[test]
fn empty_time_element_uses_datetime_attribute() {
    let html = r#"
        <html><body>
            <time datetime="2024-08-17"></time>
            <div class="story"><p>Text.</p></div>
        </body></html>
    "#;

    let result = extract(html, &profile_with(&[], &["time[datetime]"]));

    assert_eq!(result.date, "2024-08-17");
}

#[test]
fn meta_tags_in_head_are_reachable() {
    let html = r#"
        <html>
            <head><meta name="author" content="Head Author"></head>
            <body><div class="story"><p>Text.</p></div></body>
        </html>
    "#;

    let result = extract(html, &profile_with(&["meta[name=author]"], &[]));

    assert_eq!(result.author, "Head Author");
}

#[test]
fn misses_degrade_to_sentinels_not_failures() {
    let html = r#"<html><body><div class="story"><p>Only a body.</p></div></body></html>"#;

    let result = extract(html, &profile_with(&[".author-name"], &[".article-date"]));

    assert_eq!(result.status, Outcome::Success);
    assert_eq!(result.title, TITLE_NOT_FOUND);
    assert_eq!(result.author, AUTHOR_NOT_FOUND);
    assert_eq!(result.date, DATE_NOT_FOUND);
    assert_eq!(result.text, "By Author not found\nDate not found\nOnly a body.");
}

#[test]
fn verge_profile_reads_its_byline() {
    let registry = match ProfileRegistry::builtin() {
        Ok(r) => r,
        Err(err) => panic!("builtin profiles: {err}"),
    };
    let profile = registry.lookup("https://www.theverge.com/2024/8/17/24222564/rimac-nevera");
    let html = r#"
        <html><body>
            <div class="c-entry-hero">
                <h1>Rimac Nevera review</h1>
                <span class="c-byline__author">Andrew J. Hawkins</span>
                <time datetime="2024-08-17T14:00:00Z">Aug 17, 2024</time>
            </div>
            <div class="l-col__main">
                <p>The Nevera is absurdly quick.</p>
                <div class="c-related-list"><p>Related: other cars</p></div>
            </div>
        </body></html>
    "#;

    let result = extract(html, profile);

    assert_eq!(result.status, Outcome::Success);
    assert_eq!(result.title, "Rimac Nevera review");
    assert_eq!(result.author, "Andrew J. Hawkins");
    assert_eq!(result.date, "Aug 17, 2024");
    assert_eq!(result.body, "The Nevera is absurdly quick.");
}
