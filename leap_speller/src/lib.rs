//! # leap_speller
//!
//! Air-tap spelling game.  A word is drawn from the vocabulary, its letters
//! plus random filler are shuffled onto ten floating cubes, and the player
//! taps cubes to spell the word.  Every tap is announced aloud; once as many
//! letters as the word has are entered the round is judged and both the
//! entered and the target word are spoken.
//!
//! ## Gesture → Action mapping
//!
//! | Gesture | Hand | Action |
//! |---|---|---|
//! | Index finger jabs downward | Either | Tap: fingertip resolved to the cube within 70 units on every axis |
//! | Enter (window) | – | Abandon the round, draw a new word |
//! | Escape (window) | – | Quit |
//!
//! ## Pipeline
//!
//! ```text
//!  LeapGestureSource ─┐
//!                     ├─ GestureEvent ─▶ SpellerApp ─▶ TapResolver ─▶ SpellingSession
//!  SimGestureSource ──┘                     │                              │
//!        ▲                                  ▼                              ▼
//!   Visualizer (minifb) ◀──────── cubes + status             Announcement ─▶ Announcer
//! ```
//!
//! ## Feature flags
//!
//! * (default) — **Simulation mode**: mouse and keyboard drive taps.
//! * `leap` — **Hardware mode**: also polls a real LeapMotion controller via LeapC.
//!
//! ### Simulation controls
//!
//! | Input | Gesture |
//! |---|---|
//! | Left click | Tap where the pointer meets the cube plane |
//! | `A`–`Z` | Tap the first cube showing that letter |
//! | `Enter` | New word |
//! | `Escape` | Quit |

pub mod geometry;
pub mod camera;
pub mod layout;
pub mod resolver;
pub mod gesture;
pub mod error;
pub mod visualizer;
pub mod app;

pub use app::{run, AppConfig, SpellerApp, TapOutcome};
pub use error::AppError;
pub use resolver::TapResolver;
