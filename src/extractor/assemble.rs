//! Text assembly from a filtered body.

use super::pruning::FilteredBody;
use crate::dom;
use crate::normalize::collapse_whitespace;
use crate::profile::SiteProfile;

/// Separator between body blocks.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Text of every surviving block, in document order, whitespace collapsed.
///
/// Blocks without text and blocks matching one of the profile's boilerplate
/// phrases are skipped.
#[must_use]
pub fn collect_blocks(body: &FilteredBody, profile: &SiteProfile) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut phrase_hits = 0usize;

    for block in body.text_blocks() {
        let text = collapse_whitespace(&dom::stripped_text(&block));
        if text.is_empty() {
            continue;
        }
        if profile.is_boilerplate_phrase(&text) {
            phrase_hits += 1;
            continue;
        }
        blocks.push(text);
    }

    if phrase_hits > 0 {
        tracing::debug!(profile = %profile.name, dropped = phrase_hits, "boilerplate phrases dropped");
    }
    blocks
}

/// Join blocks into the body string.
#[must_use]
pub fn join_blocks(blocks: &[String]) -> String {
    blocks.join(BLOCK_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::pruning;
    use crate::profile::PhrasePattern;

    #[test]
    fn test_blocks_and_phrases() {
        let profile = SiteProfile {
            boilerplate_phrases: vec![PhrasePattern::new("^MORE:").unwrap_or_else(|e| panic!("{e}"))],
            ..SiteProfile::default()
        };
        let doc = dom::parse(r#"
            <article>
                <h1>Rimac  Nevera</h1>
                <p>It is <em>very</em>
                   fast.</p>
                <p>MORE: Other cars</p>
                <ul><li>not a block</li></ul>
            </article>
        "#);
        let filtered = pruning::filter(&doc.select("article"), &profile);

        let blocks = collect_blocks(&filtered, &profile);
        assert_eq!(blocks, vec!["Rimac Nevera", "It is very fast."]);
        assert_eq!(join_blocks(&blocks), "Rimac Nevera\n\nIt is very fast.");
    }
}
