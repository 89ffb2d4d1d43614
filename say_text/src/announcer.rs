//! Fire-and-forget announcements.
//!
//! [`Announce`] is the port the game calls.  [`Announcer`] is the real one: a
//! handle to a speech thread fed over a channel, so `announce` never blocks on
//! synthesis.  Utterances are spoken in the order they were sent; nothing is
//! reported back and a later utterance may begin before the player has taken
//! in an earlier one.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use log::debug;

use crate::normalize::normalize;
use crate::voice::{open_voice, Voice, VoiceSettings};

// ════════════════════════════════════════════════════════════════════════════
// Announce — the port
// ════════════════════════════════════════════════════════════════════════════

/// Anything that accepts text to be spoken.  Never fails, never blocks on
/// delivery.
pub trait Announce {
    fn announce(&self, text: &str);
}

/// Used when there is no speech boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAnnouncer;

impl Announce for NullAnnouncer {
    fn announce(&self, _text: &str) {}
}

/// Keeps every announced string, unnormalised, in memory.
///
/// Clones share the same list, so one copy can be handed to the game while
/// another reads it back.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self { Self::default() }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).last().cloned()
    }

    pub fn clear(&self) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl Announce for Transcript {
    fn announce(&self, text: &str) {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).push(text.to_string());
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SpeechCommand — sent to the speech thread
// ════════════════════════════════════════════════════════════════════════════

pub enum SpeechCommand {
    /// Normalise and speak.
    Say(String),
    /// Replace the utterance parameters for everything that follows.
    SetSettings(VoiceSettings),
}

// ════════════════════════════════════════════════════════════════════════════
// Announcer — handle to the speech thread
// ════════════════════════════════════════════════════════════════════════════

pub struct Announcer {
    cmd_tx: Sender<SpeechCommand>,
    handle: Option<JoinHandle<()>>,
}

impl Announcer {
    /// Spawn the speech thread around `voice`.
    pub fn spawn(voice: Box<dyn Voice>, settings: VoiceSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<SpeechCommand>();
        let handle = thread::spawn(move || speech_thread(voice, settings, cmd_rx));
        Announcer { cmd_tx, handle: Some(handle) }
    }

    /// Spawn around the first synthesiser found on this machine.
    pub fn open(settings: VoiceSettings) -> Self {
        Self::spawn(open_voice(), settings)
    }

    pub fn set_settings(&self, settings: VoiceSettings) {
        let _ = self.cmd_tx.send(SpeechCommand::SetSettings(settings));
    }

    /// Close the channel and wait until everything already queued has been
    /// spoken.
    pub fn finish(mut self) {
        let handle = self.handle.take();
        drop(self);
        if let Some(h) = handle {
            let _ = h.join();
        }
    }
}

impl Announce for Announcer {
    fn announce(&self, text: &str) {
        let _ = self.cmd_tx.send(SpeechCommand::Say(text.to_string()));
    }
}

// ════════════════════════════════════════════════════════════════════════════
// speech_thread — the actual loop
// ════════════════════════════════════════════════════════════════════════════

fn speech_thread(
    mut voice:    Box<dyn Voice>,
    mut settings: VoiceSettings,
    cmd_rx:       Receiver<SpeechCommand>,
) {
    // ends once every Sender is gone
    for cmd in cmd_rx {
        match cmd {
            SpeechCommand::Say(text) => {
                let spoken = normalize(&text);
                if spoken.trim().is_empty() { continue; }
                debug!("[speech] say \"{}\"", spoken);
                voice.speak(&spoken, &settings);
            }
            SpeechCommand::SetSettings(s) => { settings = s; }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Records what the voice was asked to say, with the rate in effect.
    struct Recorder(Arc<Mutex<Vec<(String, f32)>>>);

    impl Voice for Recorder {
        fn speak(&mut self, text: &str, settings: &VoiceSettings) {
            self.0.lock().unwrap().push((text.to_string(), settings.rate));
        }
    }

    fn recorder() -> (Box<dyn Voice>, Arc<Mutex<Vec<(String, f32)>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (Box::new(Recorder(Arc::clone(&log))), log)
    }

    #[test]
    fn announcer_normalises_before_speaking() {
        let (voice, log) = recorder();
        let a = Announcer::spawn(voice, VoiceSettings::default());
        a.announce("<b>N</b> on Main Ave");
        a.finish();
        let spoken = log.lock().unwrap();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].0, "north on Main Avenue");
    }

    #[test]
    fn announcer_keeps_order_and_skips_blank_text() {
        let (voice, log) = recorder();
        let a = Announcer::spawn(voice, VoiceSettings::default());
        a.announce("one");
        a.announce("<b></b>");
        a.announce("two");
        a.finish();
        let spoken: Vec<String> = log.lock().unwrap().iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(spoken, vec!["one", "two"]);
    }

    #[test]
    fn settings_change_applies_to_later_utterances() {
        let (voice, log) = recorder();
        let a = Announcer::spawn(voice, VoiceSettings::default());
        a.announce("before");
        a.set_settings(VoiceSettings { rate: 0.5, ..VoiceSettings::default() });
        a.announce("after");
        a.finish();
        let spoken = log.lock().unwrap();
        assert_eq!(spoken[0].1, 1.0);
        assert_eq!(spoken[1].1, 0.5);
    }

    #[test]
    fn transcript_shares_lines_between_clones() {
        let t = Transcript::new();
        let port: Box<dyn Announce> = Box::new(t.clone());
        port.announce("Spell the word <b>talk</b>.");
        assert_eq!(t.lines(), vec!["Spell the word <b>talk</b>."]);
        assert_eq!(t.last().as_deref(), Some("Spell the word <b>talk</b>."));
        t.clear();
        assert!(t.lines().is_empty());
    }

    #[test]
    fn null_announcer_accepts_anything() {
        NullAnnouncer.announce("ignored");
    }
}
