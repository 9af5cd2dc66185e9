use super::numbers::NumberLexicon;
use super::types::{FlagKind, FlagRecord};
use crate::cues::Cue;
use log::info;

/// Rewrite cue text token-by-token, flagging every rewrite.
///
/// Tokens are whitespace-separated; each one matches at most one rule.
/// Cue text is replaced in place; flag records come back in order of
/// appearance across cues.
pub fn normalize_cues<L: NumberLexicon>(cues: &mut [Cue], lexicon: &L) -> Vec<FlagRecord> {
    let mut flags = Vec::new();

    for cue in cues.iter_mut() {
        let index = cue.index;
        let mut tokens: Vec<String> = Vec::new();
        let mut changed = false;

        for token in cue.text.split_whitespace() {
            match rewrite_token(token, lexicon) {
                Some((normalized, kind)) => {
                    flags.push(FlagRecord {
                        cue_index: index,
                        original_token: token.to_string(),
                        normalized_token: normalized.clone(),
                        kind,
                    });
                    tokens.push(normalized);
                    changed = true;
                }
                None => tokens.push(token.to_string()),
            }
        }

        if changed {
            cue.text = tokens.join(" ");
        }
    }

    info!("Flagged {} tokens for review", flags.len());
    flags
}

/// Apply the acronym or number rule to a single token, leaving attached
/// punctuation outside the rewritten core.
fn rewrite_token<L: NumberLexicon>(token: &str, lexicon: &L) -> Option<(String, FlagKind)> {
    let (prefix, core, suffix) = split_affixes(token);
    if core.is_empty() {
        return None;
    }

    if core.len() >= 2 && core.chars().all(|c| c.is_ascii_uppercase()) {
        let spaced = core
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");
        return Some((format!("{}{}{}", prefix, spaced, suffix), FlagKind::Acronym));
    }

    if let Ok(value) = core.parse::<i64>() {
        let words = lexicon.words(value);
        return Some((format!("{}{}{}", prefix, words, suffix), FlagKind::Number));
    }

    None
}

/// Split a token into leading punctuation, the alphanumeric core, and
/// trailing punctuation. A minus sign directly before a leading digit
/// belongs to the core.
fn split_affixes(token: &str) -> (&str, &str, &str) {
    let Some(first) = token.find(|c: char| c.is_ascii_alphanumeric()) else {
        return (token, "", "");
    };
    let last = token
        .rfind(|c: char| c.is_ascii_alphanumeric())
        .expect("a first alphanumeric implies a last one");

    let mut start = first;
    if start > 0
        && token[..start].ends_with('-')
        && token[start..].starts_with(|c: char| c.is_ascii_digit())
    {
        start -= 1;
    }

    // alphanumeric cores end on single-byte ASCII, so last + 1 is a boundary
    (&token[..start], &token[start..last + 1], &token[last + 1..])
}
