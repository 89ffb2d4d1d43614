//! The spelling session itself.

use std::fmt;

use letter_pool::Word;
use log::{debug, info};
use thiserror::Error;

use crate::announcement::Announcement;

// ════════════════════════════════════════════════════════════════════════════
// SessionStatus
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Fewer letters entered than the target has.
    InProgress,
    /// Target length reached and the entered letters equal the target.
    Matched,
    /// Target length reached with at least one wrong letter.
    Exhausted,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::InProgress)
    }

    pub fn name(self) -> &'static str {
        match self {
            SessionStatus::InProgress => "in progress",
            SessionStatus::Matched    => "matched",
            SessionStatus::Exhausted  => "exhausted",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SessionError
// ════════════════════════════════════════════════════════════════════════════

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A letter arrived after the session reached a terminal state.
    /// Recoverable: callers normally log it and carry on.
    #[error("session already {status}; letter '{letter}' not accepted")]
    Closed { status: SessionStatus, letter: char },
}

// ════════════════════════════════════════════════════════════════════════════
// Transition
// ════════════════════════════════════════════════════════════════════════════

/// What happened when one letter was entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub letter:  char,
    /// Status after the letter was appended.
    pub status:  SessionStatus,
    /// Everything entered so far, including `letter`.
    pub entered: String,
    pub target:  Word,
}

impl Transition {
    pub fn is_terminal(&self) -> bool { self.status.is_terminal() }

    /// Announcements this step calls for, in the order they should be spoken.
    ///
    /// Always the selected letter; on a terminal step, also the result with
    /// both the entered and the target word.
    pub fn announcements(&self) -> Vec<Announcement> {
        let mut out = vec![Announcement::LetterSelected {
            letter:   self.letter,
            position: self.entered.chars().count(),
        }];
        match self.status {
            SessionStatus::InProgress => {}
            SessionStatus::Matched => out.push(Announcement::Matched {
                entered: self.entered.clone(),
                target:  self.target.clone(),
            }),
            SessionStatus::Exhausted => out.push(Announcement::Exhausted {
                entered: self.entered.clone(),
                target:  self.target.clone(),
            }),
        }
        out
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SpellingSession
// ════════════════════════════════════════════════════════════════════════════

/// One attempt at spelling one target word.
///
/// One-shot: once the number of entered letters reaches the target length the
/// session is decided and no retry happens within it.
#[derive(Clone, Debug)]
pub struct SpellingSession {
    target:  Word,
    entered: String,
    status:  SessionStatus,
}

impl SpellingSession {
    pub fn new(target: Word) -> Self {
        // an empty target is trivially spelled
        let status = if target.is_empty() { SessionStatus::Matched } else { SessionStatus::InProgress };
        SpellingSession { target, entered: String::new(), status }
    }

    /// Append one letter and re-evaluate the status.
    pub fn enter(&mut self, letter: char) -> Result<Transition, SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::Closed { status: self.status, letter });
        }

        self.entered.push(letter);
        let count = self.entered.chars().count();
        if count >= self.target.len() {
            self.status = if self.target == self.entered.as_str() {
                SessionStatus::Matched
            } else {
                SessionStatus::Exhausted
            };
            info!(
                "session {}: entered \"{}\", target \"{}\"",
                self.status, self.entered, self.target
            );
        } else {
            debug!("entered '{}' ({}/{})", letter, count, self.target.len());
        }

        Ok(Transition {
            letter,
            status:  self.status,
            entered: self.entered.clone(),
            target:  self.target.clone(),
        })
    }

    /// The opening announcement for this session.
    pub fn start_announcement(&self) -> Announcement {
        Announcement::SessionStarted { target: self.target.clone() }
    }

    pub fn target(&self)  -> &Word          { &self.target }
    pub fn entered(&self) -> &str           { &self.entered }
    pub fn status(&self)  -> SessionStatus  { self.status }
    pub fn is_closed(&self) -> bool         { self.status.is_terminal() }

    /// Letters still to be entered before the session is decided.
    pub fn remaining(&self) -> usize {
        self.target.len().saturating_sub(self.entered.chars().count())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
