//! Top-level application state.
//!
//! `SpellerApp` is the session context every handler works on: it owns the
//! word source, the current pool and its placed cubes, the spelling session,
//! the resolver and the announcer port.  Nothing lives in globals; the run
//! loop feeds it `GestureEvent`s and hands its state to the visualizer each
//! frame.

use std::sync::mpsc::{self, TryRecvError};

use letter_pool::{pool_for_word, CandidatePool, PoolError, Vocabulary, Word, PADDED_LENGTH};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use say_text::{Announce, Announcer, VoiceSettings};
use spelling_session::{SessionError, SessionStatus, SpellingSession, Transition};

use crate::error::Result;
use crate::gesture::{spawn_into, GestureEvent, SimGestureSource, SimInput, TapEvent};
use crate::layout::{CubeLayout, PlacedCube};
use crate::resolver::{TapResolver, DEFAULT_TOLERANCE};
use crate::visualizer::Visualizer;

/// Frames a hit cube stays highlighted.
const FLASH_FRAMES: u32 = 20;

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub vocabulary:    Vocabulary,
    /// Letters offered per word (target + filler).
    pub padded_length: usize,
    /// Per-axis tap tolerance, scene units.
    pub tolerance:     f32,
    pub layout:        CubeLayout,
    pub voice:         VoiceSettings,
    /// Seed for reproducible pools; `None` seeds from the OS.
    pub seed:          Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            vocabulary:    Vocabulary::default(),
            padded_length: PADDED_LENGTH,
            tolerance:     DEFAULT_TOLERANCE,
            layout:        CubeLayout::default(),
            voice:         VoiceSettings::default(),
            seed:          None,
        }
    }
}

impl AppConfig {
    /// Every word must fit the pad budget; checked up front so a bad
    /// configuration fails at start-up rather than on whichever word is
    /// drawn first.
    pub fn validate(&self) -> std::result::Result<(), PoolError> {
        if self.vocabulary.is_empty() {
            return Err(PoolError::EmptyVocabulary);
        }
        for w in self.vocabulary.words() {
            if w.is_empty() {
                return Err(PoolError::EmptyWord);
            }
            if w.len() > self.padded_length {
                return Err(PoolError::WordTooLong {
                    word:   w.to_string(),
                    len:    w.len(),
                    padded: self.padded_length,
                });
            }
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// TapOutcome
// ════════════════════════════════════════════════════════════════════════════

/// What a single tap did.
#[derive(Clone, Debug, PartialEq)]
pub enum TapOutcome {
    /// No cube within tolerance.
    Missed,
    /// A letter was entered.
    Entered(Transition),
    /// A cube was hit but the session was already decided.
    Ignored(SessionError),
}

// ════════════════════════════════════════════════════════════════════════════
// SpellerApp
// ════════════════════════════════════════════════════════════════════════════

pub struct SpellerApp {
    // ── word source ──────────────────────────────────────────────────────
    vocabulary:    Vocabulary,
    padded_length: usize,
    rng:           SmallRng,

    // ── current session ──────────────────────────────────────────────────
    pool:          CandidatePool,
    cubes:         Vec<PlacedCube>,
    session:       SpellingSession,

    // ── input / output ───────────────────────────────────────────────────
    layout:        CubeLayout,
    resolver:      TapResolver,
    announcer:     Box<dyn Announce>,

    // ── display ──────────────────────────────────────────────────────────
    pub status:    String,
    last_hit:      Option<usize>,
    flash:         u32,
}

impl SpellerApp {
    /// Validate `cfg`, draw the first word and announce it.
    pub fn new(cfg: AppConfig, announcer: Box<dyn Announce>) -> Result<Self> {
        cfg.validate()?;

        let mut rng = match cfg.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None       => SmallRng::from_entropy(),
        };
        let target = cfg.vocabulary.choose(&mut rng)?.clone();
        let pool   = pool_for_word(&target, cfg.padded_length, &mut rng)?;

        let mut app = SpellerApp {
            vocabulary:    cfg.vocabulary,
            padded_length: cfg.padded_length,
            rng,
            cubes:         cfg.layout.place(&pool),
            pool,
            session:       SpellingSession::new(target),
            layout:        cfg.layout,
            resolver:      TapResolver::new(cfg.tolerance),
            announcer,
            status:        String::new(),
            last_hit:      None,
            flash:         0,
        };
        app.announce_start();
        Ok(app)
    }

    /// Abandon the current word and draw a fresh one.
    pub fn new_word(&mut self) -> Result<()> {
        let target = self.vocabulary.choose(&mut self.rng)?.clone();
        self.start_word(target)
    }

    /// Start a session on a specific `target`.
    pub fn start_word(&mut self, target: Word) -> Result<()> {
        self.pool     = pool_for_word(&target, self.padded_length, &mut self.rng)?;
        self.cubes    = self.layout.place(&self.pool);
        self.session  = SpellingSession::new(target);
        self.last_hit = None;
        self.flash    = 0;
        self.announce_start();
        Ok(())
    }

    fn announce_start(&mut self) {
        info!("new word ({} letters): pool {}", self.session.target().len(), self.pool.as_string());
        self.announcer.announce(&self.session.start_announcement().text());
        self.status = format!("New word - {} letters. Tap the cubes to spell it.", self.session.target().len());
    }

    // ── process one GestureEvent ─────────────────────────────────────────

    pub fn handle_gesture(&mut self, event: GestureEvent) -> Result<()> {
        match event {
            GestureEvent::Tap(tap) => { self.handle_tap(&tap); }
            GestureEvent::NewWord  => self.new_word()?,
            GestureEvent::Quit     => { /* handled in run loop */ }
        }
        Ok(())
    }

    /// Resolve `tap` to a cube and feed its letter to the session.
    pub fn handle_tap(&mut self, tap: &TapEvent) -> TapOutcome {
        let Some(hit) = self.resolver.resolve(tap, &self.cubes) else {
            debug!("tap at ({:.0}, {:.0}, {:.0}) hit nothing", tap.point.x, tap.point.y, tap.point.z);
            return TapOutcome::Missed;
        };

        match self.session.enter(hit.letter) {
            Ok(step) => {
                self.last_hit = Some(hit.index);
                self.flash    = FLASH_FRAMES;
                for a in step.announcements() {
                    self.announcer.announce(&a.text());
                }
                self.status = match step.status {
                    SessionStatus::InProgress => format!(
                        "Picked {}  ({} of {})",
                        hit.letter, step.entered.chars().count(), step.target.len()
                    ),
                    SessionStatus::Matched => format!(
                        "CORRECT - you spelled {}. Enter = next word", step.entered
                    ),
                    SessionStatus::Exhausted => format!(
                        "NOT QUITE - you spelled {}, the word is {}. Enter = next word",
                        step.entered, step.target
                    ),
                };
                TapOutcome::Entered(step)
            }
            Err(e) => {
                info!("{}", e);
                self.status = "Word finished - Enter for a new one".to_string();
                TapOutcome::Ignored(e)
            }
        }
    }

    // ── Per-frame tick ────────────────────────────────────────────────────

    pub fn tick(&mut self) {
        self.flash = self.flash.saturating_sub(1);
    }

    // ── Accessors for the render loop ─────────────────────────────────────

    pub fn cubes(&self)    -> &[PlacedCube]     { &self.cubes }
    pub fn pool(&self)     -> &CandidatePool    { &self.pool }
    pub fn session(&self)  -> &SpellingSession  { &self.session }
    pub fn layout(&self)   -> &CubeLayout       { &self.layout }
    pub fn last_hit(&self) -> Option<usize>     { self.last_hit }

    /// Slot to draw highlighted this frame.
    pub fn highlight(&self) -> Option<usize> {
        if self.flash > 0 { self.last_hit } else { None }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application.
///
/// This is the entry point called from `main.rs`.  It opens the speech
/// thread, the visualizer, and the gesture sources (simulation always, the
/// hardware tracker too with `--features leap`), then drives the
/// event/render loop at ~60 fps.
pub fn run(cfg: AppConfig) -> Result<()> {
    let announcer = Announcer::open(cfg.voice.clone());
    let mut app = SpellerApp::new(cfg, Box::new(announcer))?;

    // ── Gesture channel — every source feeds the same receiver ────────────
    let (sim_tx, sim_rx)         = mpsc::channel::<SimInput>();
    let (gesture_tx, gesture_rx) = mpsc::channel::<GestureEvent>();
    spawn_into(SimGestureSource { rx: sim_rx }, gesture_tx.clone());
    #[cfg(feature = "leap")]
    spawn_into(crate::gesture::LeapGestureSource::default(), gesture_tx.clone());
    drop(gesture_tx);

    // ── Visualizer (owns the window and the sim input sender) ────────────
    let mut vis = Visualizer::new(sim_tx, app.layout())?;

    // ── Main loop ─────────────────────────────────────────────────────────
    while vis.is_open() {
        // 1. Poll window input → SimInput
        if !vis.poll_input(app.cubes()) { break; }

        // 2. Drain gesture events
        loop {
            match gesture_rx.try_recv() {
                Ok(GestureEvent::Quit)          => return Ok(()),
                Ok(evt)                         => app.handle_gesture(evt)?,
                Err(TryRecvError::Empty)        => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }

        // 3. Per-frame logic
        app.tick();

        // 4. Render
        vis.render(app.cubes(), app.session(), app.highlight(), &app.status);
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
