//! Text clean-up applied before synthesis.

use std::borrow::Cow;

/// Abbreviations spelled out before speaking.  Keys match case-sensitively
/// and only as a whole token (leading/trailing punctuation allowed).
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("N",   "north"),
    ("S",   "south"),
    ("E",   "east"),
    ("W",   "west"),
    ("NW",  "northwest"),
    ("NE",  "northeast"),
    ("SE",  "southeast"),
    ("SW",  "southwest"),
    ("NB",  "northbound"),
    ("SB",  "southbound"),
    ("WB",  "westbound"),
    ("EB",  "eastbound"),
    ("Ave", "Avenue"),
    ("Ln",  "Lane"),
    ("Hwy", "Highway"),
    ("Ct",  "Court"),
    ("Tr",  "Trail"),
];

/// Longest key in [`ABBREVIATIONS`], in bytes.
const MAX_KEY_LEN: usize = 3;

const BOLD_OPEN:  &str = "<b>";
const BOLD_CLOSE: &str = "</b>";

/// Remove every `<b>` and `</b>` tag.
///
/// Repeats until no tag is left, so tags assembled by an earlier removal
/// (`"<<b>b>"`) go too.  The result never contains a tag, which makes the
/// function idempotent.
pub fn strip_bold_tags(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains(BOLD_OPEN) || out.contains(BOLD_CLOSE) {
        out = out.replace(BOLD_OPEN, "").replace(BOLD_CLOSE, "");
    }
    out
}

/// Spell out the abbreviations in [`ABBREVIATIONS`].
///
/// The text is scanned token by token; whitespace is copied through untouched.
/// A token is expanded when its alphanumeric core (punctuation on either side
/// peeled off) is exactly a key, so `Ave.` becomes `Avenue.` while `Avenue`,
/// `Main` and `NEW` are left alone.
pub fn expand_abbreviations(text: &str) -> String {
    let mut out  = String::with_capacity(text.len() + 16);
    let mut rest = text;

    while !rest.is_empty() {
        let ws_end = rest.find(|c: char| !c.is_whitespace()).unwrap_or(rest.len());
        out.push_str(&rest[..ws_end]);
        rest = &rest[ws_end..];

        let tok_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        out.push_str(&expand_token(&rest[..tok_end]));
        rest = &rest[tok_end..];
    }
    out
}

/// Strip bold tags, then expand abbreviations.
pub fn normalize(text: &str) -> String {
    expand_abbreviations(&strip_bold_tags(text))
}

fn expand_token(token: &str) -> Cow<'_, str> {
    let Some(start) = token.find(char::is_alphanumeric) else {
        return Cow::Borrowed(token);
    };
    // rfind succeeds whenever find did
    let last = token.rfind(char::is_alphanumeric).unwrap_or(start);
    let end  = last + token[last..].chars().next().map_or(1, char::len_utf8);

    let core = &token[start..end];
    if core.len() > MAX_KEY_LEN {
        return Cow::Borrowed(token);
    }
    match lookup(core) {
        Some(full) => Cow::Owned(format!("{}{}{}", &token[..start], full, &token[end..])),
        None       => Cow::Borrowed(token),
    }
}

fn lookup(key: &str) -> Option<&'static str> {
    ABBREVIATIONS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    // ── strip_bold_tags ──────────────────────────────────────────────────
    #[test]
    fn strips_pairs() {
        assert_eq!(strip_bold_tags("Turn <b>left</b> on <b>Elm</b>"), "Turn left on Elm");
    }

    #[test]
    fn strips_unbalanced_tags() {
        assert_eq!(strip_bold_tags("a</b>b<b>c"), "abc");
    }

    #[test]
    fn strips_tags_formed_by_removal() {
        assert_eq!(strip_bold_tags("<<b>b>x<</b>/b>"), "x");
    }

    #[test]
    fn strip_is_idempotent() {
        for s in ["", "plain", "<b>x</b>", "<<b>b>y", "<b></b><b>", "</b</b>>"] {
            let once = strip_bold_tags(s);
            assert_eq!(strip_bold_tags(&once), once, "input {:?}", s);
        }
    }

    #[test]
    fn leaves_other_markup() {
        assert_eq!(strip_bold_tags("<i>x</i>"), "<i>x</i>");
    }

    // ── expand_abbreviations ─────────────────────────────────────────────
    #[test]
    fn expands_direction_and_street() {
        let s = expand_abbreviations("N on Main Ave");
        assert_eq!(s, "north on Main Avenue");
        assert!(s.contains("north") && s.contains("Avenue"));
    }

    #[test]
    fn expands_two_letter_keys() {
        assert_eq!(expand_abbreviations("Head NW on Hwy 9"), "Head northwest on Highway 9");
        assert_eq!(expand_abbreviations("Merge onto I-5 SB"), "Merge onto I-5 southbound");
    }

    #[test]
    fn keeps_punctuation_around_the_token() {
        assert_eq!(expand_abbreviations("Turn onto Oak Ln."), "Turn onto Oak Lane.");
        assert_eq!(expand_abbreviations("(E)"), "(east)");
    }

    #[test]
    fn ignores_keys_inside_words() {
        assert_eq!(expand_abbreviations("NEW Avenue Main Wes"), "NEW Avenue Main Wes");
    }

    #[test]
    fn is_case_sensitive() {
        assert_eq!(expand_abbreviations("n s e w ave"), "n s e w ave");
    }

    #[test]
    fn preserves_whitespace_runs() {
        assert_eq!(expand_abbreviations("  S\tCt  "), "  south\tCourt  ");
    }

    // ── normalize ────────────────────────────────────────────────────────
    #[test]
    fn normalize_strips_then_expands() {
        assert_eq!(normalize("Go <b>N</b> on <b>Main Ave</b>"), "Go north on Main Avenue");
    }

    #[test]
    fn normalize_leaves_game_text_alone() {
        assert_eq!(normalize("Spell the word <b>talk</b>."), "Spell the word talk.");
    }
}
