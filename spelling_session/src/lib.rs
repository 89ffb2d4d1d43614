//! # spelling_session
//!
//! Tracks the letters a player enters against the target word and decides
//! what should be said about each step.
//!
//! ## State machine
//!
//! ```text
//!                 enter(c), entered < target
//!                ┌─────────┐
//!                ▼         │
//!          ┌────────────┐──┘   entered == target   ┌─────────┐
//!   new ──►│ InProgress │ ───────────────────────► │ Matched │
//!          └────────────┘                          └─────────┘
//!                │  length reached, entered ≠ target
//!                ▼
//!          ┌───────────┐
//!          │ Exhausted │
//!          └───────────┘
//! ```
//!
//! Both terminal states are final: further letters are refused with
//! [`SessionError::Closed`].  There is no undo.
//!
//! Announcement *decisions* ([`Announcement`]) are pure values derived from a
//! [`Transition`]; *delivering* them is the caller's job (see `say_text`).

pub mod announcement;
pub mod session;

pub use announcement::Announcement;
pub use session::{SessionError, SessionStatus, SpellingSession, Transition};
