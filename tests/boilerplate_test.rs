use rs_news_extract::profile::PhrasePattern;
use rs_news_extract::{extract, Outcome, Selector, SiteProfile};

fn sel(s: &str) -> Selector {
    match s.parse() {
        Ok(sel) => sel,
        Err(err) => panic!("selector {s:?} failed to parse: {err}"),
    }
}

fn phrase(p: &str) -> PhrasePattern {
    match PhrasePattern::new(p) {
        Ok(p) => p,
        Err(err) => panic!("pattern {p:?} failed to compile: {err}"),
    }
}

const NOISY_ARTICLE: &str = r#"
    <html><body>
        <article>
            <h1>Council approves budget</h1>
            <div class="social-share"><p>Share on Facebook</p></div>
            <p>The council voted on Tuesday.</p>
            <figure><img src="vote.jpg"><figcaption><p>Councillors vote.</p></figcaption></figure>
            <p class="tags">Politics</p>
            <div class="related-content"><h3>Related</h3><p>Another story</p></div>
            <p>MORE: Council news</p>
            <nav><p>Next article</p></nav>
            <p>The budget takes effect in July.</p>
            <footer><p>Copyright</p></footer>
        </article>
    </body></html>
"#;

#[test]
fn structural_denylist_needs_no_profile_configuration() {
    let profile = SiteProfile {
        body_selectors: vec![sel("article")],
        ..SiteProfile::default()
    };

    let result = extract(NOISY_ARTICLE, &profile);

    assert!(!result.body.contains("Councillors vote."));
    assert!(!result.body.contains("Next article"));
    assert!(!result.body.contains("Copyright"));
    // Not structurally excluded, and this profile names no noise classes.
    assert!(result.body.contains("Share on Facebook"));
}

#[test]
fn profile_noise_rules_clean_the_body() {
    let profile = SiteProfile {
        body_selectors: vec![sel("article")],
        unwanted_selectors: vec![sel(".social-share")],
        boilerplate_classes: vec!["tags".to_string(), "related-content".to_string()],
        boilerplate_phrases: vec![phrase("^MORE:")],
        ..SiteProfile::default()
    };

    let result = extract(NOISY_ARTICLE, &profile);

    assert_eq!(result.status, Outcome::Success);
    assert_eq!(
        result.body,
        "Council approves budget\n\nThe council voted on Tuesday.\n\nThe budget takes effect in July."
    );
}

#[test]
fn generic_profile_strips_common_chrome() {
    let result = extract(NOISY_ARTICLE, &SiteProfile::generic());

    assert_eq!(result.status, Outcome::Success);
    assert!(!result.body.contains("Share on Facebook"));
    assert!(result.body.contains("The council voted on Tuesday."));
}

#[test]
fn class_match_is_per_token() {
    let html = r#"<article><p class="tagsline">Kept</p><p class="x tags y">Dropped</p></article>"#;
    let profile = SiteProfile {
        boilerplate_classes: vec!["tags".to_string()],
        ..SiteProfile::default()
    };

    assert_eq!(extract(html, &profile).body, "Kept");
}

#[test]
fn unwanted_selector_removes_nested_matches() {
    let html = r#"
        <article>
            <p>Lead</p>
            <div><div><section class="newsletter"><p>Sign up for our newsletter</p></section></div></div>
            <p>Tail</p>
        </article>
    "#;
    let profile = SiteProfile {
        unwanted_selectors: vec![sel("section.newsletter")],
        ..SiteProfile::default()
    };

    let result = extract(html, &profile);

    // Without the removal the sign-up text would also trip the paywall gate.
    assert_eq!(result.status, Outcome::Success);
    assert_eq!(result.body, "Lead\n\nTail");
}

#[test]
fn everything_filtered_counts_as_paywalled() {
    let html = r#"<article><aside><p>Only an ad</p></aside></article>"#;

    let result = extract(html, &SiteProfile::default());

    assert_eq!(result.status, Outcome::PaywallDetected);
}
