//! Tap input — both from LeapMotion hardware and mouse/keyboard simulation.
//!
//! The public interface is [`GestureEvent`] delivered over a `mpsc` channel.
//! Consumers don't need to know whether a tap came from a real fingertip or
//! from a mouse click projected into the scene.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::geometry::Vec3;

// ════════════════════════════════════════════════════════════════════════════
// TapEvent / GestureEvent
// ════════════════════════════════════════════════════════════════════════════

/// One discrete selection gesture: where the fingertip was and which way it
/// was pointing.  Consumed once by the resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapEvent {
    pub point:     Vec3,
    pub direction: Vec3,
}

/// A high-level input event.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// An air tap (or click) somewhere in the scene.
    Tap(TapEvent),
    /// Throw the current word away and start a fresh one.
    NewWord,
    /// Quit the application.
    Quit,
}

// ════════════════════════════════════════════════════════════════════════════
// GestureSource trait — unified interface for hw and sim
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`GestureEvent`]s over a channel.
pub trait GestureSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<GestureEvent>);
}

// ════════════════════════════════════════════════════════════════════════════
// Spawn helpers
// ════════════════════════════════════════════════════════════════════════════

/// Spawn a gesture source on its own thread and return the receiving end.
pub fn spawn_gesture_source<G: GestureSource>(source: G) -> Receiver<GestureEvent> {
    let (tx, rx) = mpsc::channel();
    spawn_into(source, tx);
    rx
}

/// Spawn a gesture source that feeds an existing channel, so several sources
/// can share one receiver.
pub fn spawn_into<G: GestureSource>(source: G, tx: Sender<GestureEvent>) {
    thread::spawn(move || Box::new(source).run(tx));
}

// ════════════════════════════════════════════════════════════════════════════
// TapDetector — fingertip track → discrete taps
// ════════════════════════════════════════════════════════════════════════════

/// Recognises a "key tap": the fingertip dropping faster than `min_speed`.
///
/// After a tap the detector stays disarmed until the downward speed falls
/// below half the threshold, and no two taps are closer than `cooldown`, so
/// one poke produces one event however many frames it spans.
#[derive(Clone, Debug)]
pub struct TapDetector {
    /// Downward fingertip speed that counts as a tap, mm/s.
    pub min_speed: f32,
    pub cooldown:  Duration,
    last:          Option<(Vec3, Instant)>,
    last_tap:      Option<Instant>,
    armed:         bool,
}

impl Default for TapDetector {
    fn default() -> Self { TapDetector::new(300.0, Duration::from_millis(400)) }
}

impl TapDetector {
    pub fn new(min_speed: f32, cooldown: Duration) -> Self {
        TapDetector { min_speed, cooldown, last: None, last_tap: None, armed: true }
    }

    /// Forget the fingertip track (hand lost).
    pub fn reset(&mut self) {
        self.last  = None;
        self.armed = true;
    }

    /// Feed one frame.  Returns a tap when this frame completes one.
    pub fn update(&mut self, tip: Vec3, direction: Vec3, at: Instant) -> Option<TapEvent> {
        let (prev_tip, prev_at) = self.last.replace((tip, at))?;
        let dt = at.saturating_duration_since(prev_at).as_secs_f32();
        if dt <= 0.0 { return None; }

        let down_speed = (prev_tip.y - tip.y) / dt;
        if down_speed < self.min_speed * 0.5 {
            self.armed = true;
        }
        if !self.armed || down_speed < self.min_speed {
            return None;
        }
        if let Some(t) = self.last_tap {
            if at.saturating_duration_since(t) < self.cooldown { return None; }
        }

        self.armed    = false;
        self.last_tap = Some(at);
        Some(TapEvent { point: tip, direction: direction.normalize() })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// LeapGestureSource — real hardware (feature = "leap")
// ════════════════════════════════════════════════════════════════════════════

/// Gesture source backed by a real LeapMotion controller.
///
/// Requires the `leap` feature flag and the LeapC shared library installed.
///
/// Each tracking frame, the index fingertip of every visible hand is fed to
/// that hand's [`TapDetector`].  The tap point is the fingertip itself; the
/// direction is the distal bone's (previous joint → tip).  Leap coordinates
/// are used unchanged: the scene is laid out in the tracker's millimetres.
#[cfg(feature = "leap")]
#[derive(Default)]
pub struct LeapGestureSource {
    pub detector: TapDetector,
}

#[cfg(feature = "leap")]
impl GestureSource for LeapGestureSource {
    fn run(self: Box<Self>, tx: Sender<GestureEvent>) {
        use leaprs::*;

        let mut connection = match Connection::create(ConnectionConfig::default()) {
            Ok(c)  => c,
            Err(e) => {
                log::error!("[leap] failed to create LeapC connection: {:?}", e);
                return;
            }
        };
        if let Err(e) = connection.open() {
            log::error!("[leap] failed to open LeapMotion device: {:?}", e);
            return;
        }
        log::info!("[leap] connected");

        let mut left  = self.detector.clone();
        let mut right = self.detector.clone();

        loop {
            let msg = match connection.poll(100) {
                Ok(m)  => m,
                Err(_) => continue,
            };

            if let Event::Tracking(frame) = msg.event() {
                let hands: Vec<_> = frame.hands().collect();
                let mut seen_left  = false;
                let mut seen_right = false;

                for hand in &hands {
                    let fingers: Vec<_> = hand.digits().collect();
                    if fingers.len() < 2 { continue; }
                    let tip  = fingers[1].distal().next_joint();
                    let base = fingers[1].distal().prev_joint();
                    let tip_v  = Vec3::new(tip.x, tip.y, tip.z);
                    let base_v = Vec3::new(base.x, base.y, base.z);

                    let detector = if hand.hand_type() == HandType::Left {
                        seen_left = true;
                        &mut left
                    } else {
                        seen_right = true;
                        &mut right
                    };
                    if let Some(tap) = detector.update(tip_v, tip_v - base_v, Instant::now()) {
                        if tx.send(GestureEvent::Tap(tap)).is_err() { return; }
                    }
                }

                if !seen_left  { left.reset();  }
                if !seen_right { right.reset(); }
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SimGestureSource — mouse/keyboard simulation (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Gesture source driven by [`SimInput`] events (from the visualizer's window).
///
/// The visualizer already projects clicks into scene space; this translator
/// turns window input into `GestureEvent`s so the window loop stays free of
/// game logic.
pub struct SimGestureSource {
    pub rx: Receiver<SimInput>,
}

/// Raw input event from the simulation window.
#[derive(Clone, Debug)]
pub enum SimInput {
    /// Mouse click or letter key, already mapped to a scene point.
    Tap { point: Vec3, direction: Vec3 },
    KeyDown(SimKey),
}

/// Simulated keys (mapped from minifb Key).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimKey {
    NewWord,    // Enter
    Quit,       // Escape
}

impl GestureSource for SimGestureSource {
    fn run(self: Box<Self>, tx: Sender<GestureEvent>) {
        for input in self.rx {
            let event = match input {
                SimInput::Tap { point, direction } =>
                    GestureEvent::Tap(TapEvent { point, direction: direction.normalize() }),
                SimInput::KeyDown(SimKey::NewWord) => GestureEvent::NewWord,
                SimInput::KeyDown(SimKey::Quit)    => {
                    let _ = tx.send(GestureEvent::Quit);
                    return;
                }
            };
            if tx.send(event).is_err() { return; }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(10);

    /// Feed a fingertip track of y-values, one per 10 ms frame.
    fn feed(det: &mut TapDetector, start: Instant, ys: &[f32]) -> Vec<(usize, TapEvent)> {
        ys.iter().enumerate().filter_map(|(i, &y)| {
            let at = start + FRAME * i as u32;
            det.update(Vec3::new(0.0, y, 0.0), Vec3::DOWN, at).map(|t| (i, t))
        }).collect()
    }

    #[test]
    fn hovering_finger_never_taps() {
        let mut d = TapDetector::default();
        let taps = feed(&mut d, Instant::now(), &[200.0, 200.5, 199.8, 200.1, 200.0]);
        assert!(taps.is_empty());
    }

    #[test]
    fn quick_drop_taps_once() {
        let mut d = TapDetector::default();
        // 10 mm per 10 ms = 1000 mm/s downward for several frames
        let taps = feed(&mut d, Instant::now(), &[200.0, 190.0, 180.0, 170.0, 160.0]);
        assert_eq!(taps.len(), 1);
        assert_eq!(taps[0].0, 1);
        assert_eq!(taps[0].1.point, Vec3::new(0.0, 190.0, 0.0));
        assert_eq!(taps[0].1.direction, Vec3::DOWN);
    }

    #[test]
    fn second_tap_needs_rearm_and_cooldown() {
        let mut d = TapDetector::new(300.0, Duration::from_millis(100));
        let mut ys = vec![200.0, 190.0, 180.0];   // tap
        ys.extend([180.0; 12]);                    // hold still 120 ms
        ys.extend([170.0, 160.0]);                 // tap again
        let taps = feed(&mut d, Instant::now(), &ys);
        assert_eq!(taps.len(), 2);
    }

    #[test]
    fn cooldown_suppresses_fast_repeat() {
        let mut d = TapDetector::new(300.0, Duration::from_millis(500));
        let taps = feed(&mut d, Instant::now(), &[200.0, 190.0, 190.0, 180.0]);
        assert_eq!(taps.len(), 1);
    }

    #[test]
    fn reset_drops_the_track() {
        let mut d = TapDetector::default();
        let t0 = Instant::now();
        d.update(Vec3::new(0.0, 300.0, 0.0), Vec3::DOWN, t0);
        d.reset();
        // a big jump after losing the hand is not a tap
        assert!(d.update(Vec3::new(0.0, 100.0, 0.0), Vec3::DOWN, t0 + FRAME).is_none());
    }

    #[test]
    fn sim_source_translates_inputs() {
        let (sim_tx, sim_rx) = mpsc::channel();
        let rx = spawn_gesture_source(SimGestureSource { rx: sim_rx });
        let p = Vec3::new(1.0, 2.0, 3.0);
        sim_tx.send(SimInput::Tap { point: p, direction: Vec3::new(0.0, -2.0, 0.0) }).unwrap();
        sim_tx.send(SimInput::KeyDown(SimKey::NewWord)).unwrap();
        sim_tx.send(SimInput::KeyDown(SimKey::Quit)).unwrap();

        assert_eq!(rx.recv().unwrap(), GestureEvent::Tap(TapEvent { point: p, direction: Vec3::DOWN }));
        assert_eq!(rx.recv().unwrap(), GestureEvent::NewWord);
        assert_eq!(rx.recv().unwrap(), GestureEvent::Quit);
        // source stops after Quit
        assert!(rx.recv().is_err());
    }
}
