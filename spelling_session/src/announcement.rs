//! Announcement decisions.
//!
//! An [`Announcement`] is a plain value: *what* should be said after a session
//! event.  Rendering it to text is pure; speaking it is someone else's job.
//! Rendered text marks the interesting word in `<b>…</b>`, which the speech
//! side strips before synthesis and a display can show in bold.

use std::fmt;

use letter_pool::Word;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Announcement {
    /// A new session began.
    SessionStarted { target: Word },
    /// A tap resolved to `letter`; `position` is the 1-based count entered so far.
    LetterSelected { letter: char, position: usize },
    /// The word was spelled correctly.
    Matched { entered: String, target: Word },
    /// The word's length was reached with a wrong spelling.
    Exhausted { entered: String, target: Word },
}

impl Announcement {
    pub fn text(&self) -> String {
        match self {
            Announcement::SessionStarted { target } =>
                format!("Spell the word <b>{}</b>.", target),
            Announcement::LetterSelected { letter, .. } =>
                format!("<b>{}</b>", letter),
            Announcement::Matched { entered, target } =>
                format!("Correct! You spelled <b>{}</b>, and the word is <b>{}</b>.", entered, target),
            Announcement::Exhausted { entered, target } =>
                format!("Not quite. You spelled <b>{}</b>, but the word is <b>{}</b>.", entered, target),
        }
    }

    /// True for the end-of-session messages.
    pub fn is_result(&self) -> bool {
        matches!(self, Announcement::Matched { .. } | Announcement::Exhausted { .. })
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_text_names_both_words() {
        let a = Announcement::Exhausted { entered: "talx".into(), target: Word::from("talk") };
        let t = a.text();
        assert!(t.contains("talx"));
        assert!(t.contains("talk"));
        assert!(a.is_result());
    }

    #[test]
    fn start_text_marks_target_bold() {
        let a = Announcement::SessionStarted { target: Word::from("laugh") };
        assert_eq!(a.to_string(), "Spell the word <b>laugh</b>.");
        assert!(!a.is_result());
    }

    #[test]
    fn letter_text_is_just_the_letter() {
        let a = Announcement::LetterSelected { letter: 'g', position: 3 };
        assert_eq!(a.text(), "<b>g</b>");
    }
}
