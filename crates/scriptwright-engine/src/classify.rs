use std::sync::LazyLock;

use regex::Regex;

/// Semantic role of a single screenplay line.
///
/// Every line gets exactly one category; [`ElementCategory::Action`] is the
/// fallback when no other rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    SceneHeading,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
}

impl ElementCategory {
    /// Paragraph type label used in the exported document.
    ///
    /// These strings are a compatibility contract with external screenwriting
    /// tools and must not change.
    pub fn label(&self) -> &'static str {
        match self {
            ElementCategory::SceneHeading => "Scene Heading",
            ElementCategory::Action => "Action",
            ElementCategory::Character => "Character",
            ElementCategory::Dialogue => "Dialogue",
            ElementCategory::Parenthetical => "Parenthetical",
            ElementCategory::Transition => "Transition",
        }
    }
}

static SCENE_HEADING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(INT\.|EXT\.|FADE IN|FADE OUT)").unwrap());

static TRANSITION_CUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)CUT TO:|DISSOLVE TO:|FADE TO:|TO:\s*$").unwrap());

/// Maximum length (in characters) of a character cue line.
const CHARACTER_MAX_LEN: usize = 30;

/// Maximum number of whitespace-separated tokens in a character cue.
const CHARACTER_MAX_TOKENS: usize = 3;

/// Classifies a single trimmed, non-blank line into its screenplay element.
///
/// The rule chain is ordered and first-match-wins; textual cues overlap
/// (an all-caps "CUT TO:" is both upper-case and a transition cue), so the
/// order must be preserved exactly:
///
/// 1. Scene heading: starts with `INT.`, `EXT.`, `FADE IN` or `FADE OUT`
///    (case-insensitive).
/// 2. Transition: contains `CUT TO:`, `DISSOLVE TO:`, `FADE TO:`, or ends
///    with `TO:` (case-insensitive).
/// 3. Parenthetical: wrapped in `(` ... `)`.
/// 4. Character: short all-caps cue, see [`is_character_cue`].
/// 5. Action otherwise.
///
/// Total function: any input maps to a valid category, with no side effects.
pub fn classify(line: &str) -> ElementCategory {
    if SCENE_HEADING_PREFIX.is_match(line) {
        ElementCategory::SceneHeading
    } else if TRANSITION_CUE.is_match(line) {
        ElementCategory::Transition
    } else if line.starts_with('(') && line.ends_with(')') {
        ElementCategory::Parenthetical
    } else if is_character_cue(line) {
        ElementCategory::Character
    } else {
        ElementCategory::Action
    }
}

/// Classifies a line given the category of the preceding line.
///
/// Same rule chain as [`classify`], except that an otherwise-unmatched line
/// following a character cue or a parenthetical defaults to dialogue rather
/// than action. Interactive editors thread the previous category through
/// explicitly; there is no ambient editor state in the engine.
pub fn classify_after(line: &str, prev: Option<ElementCategory>) -> ElementCategory {
    let category = classify(line);
    match (category, prev) {
        (
            ElementCategory::Action,
            Some(ElementCategory::Character | ElementCategory::Parenthetical),
        ) => ElementCategory::Dialogue,
        _ => category,
    }
}

/// Whether a line reads as a character cue: non-empty, entirely upper-case,
/// shorter than 30 characters, at most 3 tokens, and containing neither `.`
/// nor `(`.
///
/// The `(` exclusion keeps cue-adjacent parentheticals like `(V.O.)` from
/// being misread as part of a character name.
fn is_character_cue(line: &str) -> bool {
    !line.is_empty()
        && line.chars().count() < CHARACTER_MAX_LEN
        && !line.contains('.')
        && !line.contains('(')
        && line.split_whitespace().count() <= CHARACTER_MAX_TOKENS
        && line == line.to_uppercase()
        && line.chars().any(|c| c.is_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("INT. HOUSE - DAY")]
    #[case("int. house - day")]
    #[case("EXT. STREET - NIGHT")]
    #[case("FADE IN:")]
    #[case("FADE OUT.")]
    fn scene_heading_prefixes(#[case] line: &str) {
        assert_eq!(classify(line), ElementCategory::SceneHeading);
    }

    #[rstest]
    #[case("CUT TO:")]
    #[case("SMASH CUT TO:")]
    #[case("DISSOLVE TO:")]
    #[case("FADE TO:")]
    #[case("BACK TO:")]
    fn transition_cues(#[case] line: &str) {
        assert_eq!(classify(line), ElementCategory::Transition);
    }

    #[test]
    fn fade_to_is_a_transition_not_a_heading() {
        // "FADE TO:" does not share the exact FADE IN / FADE OUT prefixes,
        // so it falls through to the transition rule.
        assert_eq!(classify("FADE TO:"), ElementCategory::Transition);
    }

    #[test]
    fn scene_heading_wins_over_transition() {
        // Rule order: a heading prefix beats a trailing "TO:".
        assert_eq!(classify("INT. CUT TO:"), ElementCategory::SceneHeading);
    }

    #[rstest]
    #[case("(beat)")]
    #[case("(whispering)")]
    #[case("(O.S.)")]
    fn parentheticals(#[case] line: &str) {
        assert_eq!(classify(line), ElementCategory::Parenthetical);
    }

    #[rstest]
    #[case("JOHN")]
    #[case("MARY JANE")]
    #[case("OLD MAN WILLOW")]
    fn character_cues(#[case] line: &str) {
        assert_eq!(classify(line), ElementCategory::Character);
    }

    #[rstest]
    #[case("A VERY LONG ALL CAPS LINE THAT EXCEEDS THIRTY CHARACTERS")] // length bound
    #[case("JOHN SMITH JR III ESQ")] // too many tokens
    #[case("MR. SMITH")] // contains a period
    #[case("JOHN (CONT'D")] // contains a parenthesis
    #[case("He walks in.")] // mixed case
    #[case("!!!")] // no letters at all
    fn not_character_cues(#[case] line: &str) {
        assert_eq!(classify(line), ElementCategory::Action);
    }

    #[test]
    fn character_length_boundary_is_thirty() {
        let at_limit = "A".repeat(30);
        let under_limit = "A".repeat(29);
        assert_eq!(classify(&at_limit), ElementCategory::Action);
        assert_eq!(classify(&under_limit), ElementCategory::Character);
    }

    #[test]
    fn action_is_the_default() {
        assert_eq!(classify("He walks in."), ElementCategory::Action);
        assert_eq!(classify("...---..."), ElementCategory::Action);
        assert_eq!(classify("x"), ElementCategory::Action);
    }

    #[test]
    fn classification_is_idempotent() {
        for line in ["INT. HOUSE - DAY", "JOHN", "(beat)", "Hello there."] {
            assert_eq!(classify(line), classify(line));
        }
    }

    #[test]
    fn dialogue_follows_a_character_cue() {
        let prev = Some(ElementCategory::Character);
        assert_eq!(
            classify_after("Hello there.", prev),
            ElementCategory::Dialogue
        );
    }

    #[test]
    fn dialogue_follows_a_parenthetical() {
        let prev = Some(ElementCategory::Parenthetical);
        assert_eq!(classify_after("Fine, I'll go.", prev), ElementCategory::Dialogue);
    }

    #[test]
    fn context_never_overrides_a_matched_rule() {
        let prev = Some(ElementCategory::Character);
        assert_eq!(
            classify_after("INT. HOUSE - DAY", prev),
            ElementCategory::SceneHeading
        );
        assert_eq!(classify_after("(beat)", prev), ElementCategory::Parenthetical);
    }

    #[test]
    fn no_context_means_action_fallback() {
        assert_eq!(classify_after("Hello there.", None), ElementCategory::Action);
        assert_eq!(
            classify_after("Hello there.", Some(ElementCategory::Action)),
            ElementCategory::Action
        );
    }
}
