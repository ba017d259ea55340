use rs_news_extract::{
    extract_with_options, BypassAttempt, ExtractionResult, Options, Outcome, ProfileRegistry, Selector, SiteProfile,
};

fn registry() -> ProfileRegistry {
    match ProfileRegistry::builtin() {
        Ok(r) => r,
        Err(err) => panic!("builtin profiles: {err}"),
    }
}

fn run(html: &str, profile: &SiteProfile, bypass: BypassAttempt) -> ExtractionResult {
    extract_with_options(html, profile, bypass, &Options::default())
}

const TEASER_WITH_SUBSCRIBE: &str = r#"
    <html><body>
        <h1>Markets rally</h1>
        <article>
            <p>Stocks rose sharply on Monday.</p>
            <p>Subscribe to keep reading.</p>
        </article>
    </body></html>
"#;

#[test]
fn indicator_inside_body_blocks_even_after_bypass() {
    let reg = registry();
    let profile = reg.lookup("https://www.msnbc.com/news/markets");
    let html = r#"
        <html><body>
            <h1>Exclusive report</h1>
            <article>
                <p>The first paragraph is free.</p>
                <div class="premium-content"></div>
            </article>
        </body></html>
    "#;

    let result = run(html, profile, BypassAttempt::Succeeded);

    assert_eq!(result.status, Outcome::PaywallDetected);
    assert_eq!(result.title, "Exclusive report");
    assert!(result.body.is_empty());
    assert!(result.text.is_empty());
}

#[test]
fn indicator_outside_body_is_ignored() {
    let reg = registry();
    let profile = reg.lookup("https://www.msnbc.com/news/markets");
    let html = r#"
        <html><body>
            <div class="paywall">Site-wide banner</div>
            <article><p>The whole story is here.</p></article>
        </body></html>
    "#;

    let result = run(html, profile, BypassAttempt::NotAttempted);

    assert_eq!(result.status, Outcome::Success);
    assert_eq!(result.body, "The whole story is here.");
}

#[test]
fn indicator_removed_by_noise_filter_still_counts() {
    let profile = SiteProfile {
        unwanted_selectors: vec![Selector::class("paywall")],
        paywall_indicators: vec![Selector::class("paywall")],
        ..SiteProfile::default()
    };
    let html = r#"<article><p>Teaser text.</p><div class="paywall"><p>Locked</p></div></article>"#;

    let result = run(html, &profile, BypassAttempt::Succeeded);

    assert_eq!(result.status, Outcome::PaywallDetected);
}

#[test]
fn phrasing_blocks_without_successful_bypass() {
    let profile = SiteProfile::default();

    assert_eq!(run(TEASER_WITH_SUBSCRIBE, &profile, BypassAttempt::NotAttempted).status, Outcome::PaywallDetected);
    assert_eq!(run(TEASER_WITH_SUBSCRIBE, &profile, BypassAttempt::Failed).status, Outcome::PaywallDetected);
}

#[test]
fn successful_bypass_relaxes_phrasing() {
    let result = run(TEASER_WITH_SUBSCRIBE, &SiteProfile::default(), BypassAttempt::Succeeded);

    assert_eq!(result.status, Outcome::Success);
    assert!(result.body.ends_with("Subscribe to keep reading."));
}

#[test]
fn profile_that_ignores_bypass_still_blocks() {
    let profile = SiteProfile {
        honor_bypass: false,
        ..SiteProfile::default()
    };

    let result = run(TEASER_WITH_SUBSCRIBE, &profile, BypassAttempt::Succeeded);

    assert_eq!(result.status, Outcome::PaywallDetected);
}

#[test]
fn profile_without_text_check_keeps_sign_up_wording() {
    let reg = registry();
    let profile = reg.lookup("https://www.abc.net.au/news/2024-08-17/story");
    let html = r#"<article><p>Voters must register by Friday.</p></article>"#;

    let result = run(html, profile, BypassAttempt::NotAttempted);

    assert_eq!(result.status, Outcome::Success);
    assert_eq!(result.body, "Voters must register by Friday.");
}

#[test]
fn length_gate_spares_long_articles() {
    let options = Options {
        textual_gate_max_chars: Some(60),
        ..Options::default()
    };
    let html = r#"
        <article>
            <p>A long feature about local elections and the people who run them.</p>
            <p>Readers can subscribe to the weekly newsletter.</p>
        </article>
    "#;

    let long = extract_with_options(html, &SiteProfile::default(), BypassAttempt::NotAttempted, &options);
    let short = extract_with_options(
        TEASER_WITH_SUBSCRIBE,
        &SiteProfile::default(),
        BypassAttempt::NotAttempted,
        &Options {
            textual_gate_max_chars: Some(500),
            ..Options::default()
        },
    );

    assert_eq!(long.status, Outcome::Success);
    assert_eq!(short.status, Outcome::PaywallDetected);
}

#[test]
fn empty_body_is_paywalled_whatever_the_bypass() {
    let profile = SiteProfile {
        paywall_text_check: false,
        ..SiteProfile::default()
    };
    let html = r#"<article><figure><p>Caption only</p></figure><p>   </p></article>"#;

    for bypass in [BypassAttempt::NotAttempted, BypassAttempt::Failed, BypassAttempt::Succeeded] {
        assert_eq!(run(html, &profile, bypass).status, Outcome::PaywallDetected, "{bypass:?}");
    }
}
