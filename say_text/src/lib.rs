//! # say_text
//!
//! The speech side of the spelling game.  Callers hand plain strings to an
//! [`Announce`] implementation and move on; nothing comes back.
//!
//! Before a string reaches a synthesiser it is normalised:
//!
//! 1. every `<b>` / `</b>` tag is stripped ([`strip_bold_tags`]);
//! 2. direction and street abbreviations are spelled out
//!    ([`expand_abbreviations`]), so `N on Main Ave` is read as
//!    "north on Main Avenue".
//!
//! ## Backends
//!
//! | Backend | When |
//! |---|---|
//! | [`CommandVoice`] | `say` (macOS) or `espeak-ng` / `espeak` found on `PATH` |
//! | [`LogVoice`] | no synthesiser installed; utterances go to the log |
//! | [`NullVoice`] | silence |
//!
//! [`Announcer`] runs the chosen backend on its own thread; [`NullAnnouncer`]
//! stands in when there is no speech boundary at all.

pub mod announcer;
pub mod normalize;
pub mod voice;

pub use announcer::{Announce, Announcer, NullAnnouncer, Transcript};
pub use normalize::{expand_abbreviations, normalize, strip_bold_tags, ABBREVIATIONS};
pub use voice::{open_voice, CommandVoice, LogVoice, NullVoice, Voice, VoiceSettings};
