//! Speech backends.
//!
//! A [`Voice`] turns already-normalised text into sound.  The announcer thread
//! owns exactly one and calls it for every utterance.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{info, warn};

// ════════════════════════════════════════════════════════════════════════════
// VoiceSettings
// ════════════════════════════════════════════════════════════════════════════

/// Utterance parameters.  Multipliers are relative to the synthesiser's
/// normal speed, pitch and loudness (1.0 = unchanged).
#[derive(Clone, Debug, PartialEq)]
pub struct VoiceSettings {
    /// Preferred voice name, e.g. "Samantha (Enhanced)".
    pub voice:  String,
    /// BCP-47 language tag.
    pub lang:   String,
    pub pitch:  f32,
    pub rate:   f32,
    pub volume: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        VoiceSettings {
            voice:  "Samantha (Enhanced)".to_string(),
            lang:   "en-US".to_string(),
            pitch:  1.1,
            rate:   1.0,
            volume: 1.0,
        }
    }
}

impl VoiceSettings {
    /// Base voice name without any "(Enhanced)"-style qualifier.
    pub fn voice_family(&self) -> &str {
        self.voice.split(" (").next().unwrap_or(&self.voice).trim()
    }

    /// Speaking rate in words per minute (175 wpm at rate 1.0).
    pub fn words_per_minute(&self) -> u32 {
        (175.0 * self.rate.max(0.1)).round() as u32
    }

    /// espeak pitch, 0–99 with 50 as normal.
    pub fn espeak_pitch(&self) -> u32 {
        (50.0 * self.pitch).round().clamp(0.0, 99.0) as u32
    }

    /// espeak amplitude, 0–200 with 100 as normal.
    pub fn espeak_amplitude(&self) -> u32 {
        (100.0 * self.volume).round().clamp(0.0, 200.0) as u32
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Voice trait + backends
// ════════════════════════════════════════════════════════════════════════════

pub trait Voice: Send {
    fn speak(&mut self, text: &str, settings: &VoiceSettings);
}

// ── system synthesiser ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flavor {
    /// macOS `say`
    Say,
    /// `espeak` / `espeak-ng`
    Espeak,
}

/// Speaks by running the platform's command-line synthesiser.
///
/// Blocks the announcer thread until the utterance has been spoken.
#[derive(Debug)]
pub struct CommandVoice {
    program: PathBuf,
    flavor:  Flavor,
}

impl CommandVoice {
    fn args(&self, text: &str, s: &VoiceSettings) -> Vec<String> {
        let mut a = Vec::new();
        match self.flavor {
            Flavor::Say => {
                a.extend(["-v".to_string(), s.voice_family().to_string()]);
                a.extend(["-r".to_string(), s.words_per_minute().to_string()]);
            }
            Flavor::Espeak => {
                a.extend(["-v".to_string(), s.lang.to_ascii_lowercase()]);
                a.extend(["-s".to_string(), s.words_per_minute().to_string()]);
                a.extend(["-p".to_string(), s.espeak_pitch().to_string()]);
                a.extend(["-a".to_string(), s.espeak_amplitude().to_string()]);
                a.push("--".to_string());
            }
        }
        a.push(text.to_string());
        a
    }
}

impl Voice for CommandVoice {
    fn speak(&mut self, text: &str, settings: &VoiceSettings) {
        let status = Command::new(&self.program)
            .args(self.args(text, settings))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(s) if s.success() => {}
            Ok(s)  => warn!("[speech] {} exited with {}", self.program.display(), s),
            Err(e) => warn!("[speech] could not run {}: {}", self.program.display(), e),
        }
    }
}

// ── log backend ───────────────────────────────────────────────────────────

/// Writes each utterance to the log instead of speaking it.
#[derive(Debug, Default)]
pub struct LogVoice;

impl Voice for LogVoice {
    fn speak(&mut self, text: &str, _settings: &VoiceSettings) {
        info!("[speech] \"{}\"", text);
    }
}

// ── silence ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct NullVoice;

impl Voice for NullVoice {
    fn speak(&mut self, _text: &str, _settings: &VoiceSettings) {}
}

// ════════════════════════════════════════════════════════════════════════════
// open_voice — pick the first available synthesiser
// ════════════════════════════════════════════════════════════════════════════

/// Find a command-line synthesiser on `PATH`.
/// Falls back to [`LogVoice`] with a warning if none is installed.
pub fn open_voice() -> Box<dyn Voice> {
    let candidates: &[(&str, Flavor)] = if cfg!(target_os = "macos") {
        &[("say", Flavor::Say)]
    } else {
        &[("espeak-ng", Flavor::Espeak), ("espeak", Flavor::Espeak)]
    };

    for &(name, flavor) in candidates {
        if let Some(program) = find_in_path(name) {
            info!("[speech] using {}", program.display());
            return Box::new(CommandVoice { program, flavor });
        }
    }

    warn!("[speech] no synthesiser found; announcements will only be logged.");
    warn!("[speech] Install one of:");
    warn!("         • macOS: built-in `say` (always available)");
    warn!("         • Linux: `espeak-ng` or `espeak`");
    Box::new(LogVoice)
}

fn find_in_path(name: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_file(candidate))
}

fn is_file(p: &Path) -> bool {
    p.metadata().map(|m| m.is_file()).unwrap_or(false)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_the_game_voice() {
        let s = VoiceSettings::default();
        assert_eq!(s.voice_family(), "Samantha");
        assert_eq!(s.lang, "en-US");
        assert_eq!(s.words_per_minute(), 175);
        assert_eq!(s.espeak_pitch(), 55);
        assert_eq!(s.espeak_amplitude(), 100);
    }

    #[test]
    fn espeak_values_are_clamped() {
        let s = VoiceSettings { pitch: 5.0, volume: 9.0, ..VoiceSettings::default() };
        assert_eq!(s.espeak_pitch(), 99);
        assert_eq!(s.espeak_amplitude(), 200);
    }

    #[test]
    fn espeak_args_end_with_the_text() {
        let v = CommandVoice { program: PathBuf::from("espeak"), flavor: Flavor::Espeak };
        let a = v.args("-north", &VoiceSettings::default());
        assert_eq!(&a[..2], &["-v".to_string(), "en-us".to_string()]);
        assert_eq!(a[a.len() - 2], "--");
        assert_eq!(a.last().map(String::as_str), Some("-north"));
    }

    #[test]
    fn say_args_use_voice_family() {
        let v = CommandVoice { program: PathBuf::from("say"), flavor: Flavor::Say };
        let a = v.args("hello", &VoiceSettings::default());
        assert!(a.windows(2).any(|w| w[0] == "-v" && w[1] == "Samantha"));
    }

    #[test]
    fn missing_program_is_not_found() {
        assert!(find_in_path("definitely-not-a-real-synthesiser-xyz").is_none());
    }
}
