//! spell_menu — the spelling game in a terminal, no window or hand tracker.
//!
//! Pick letters from the offered pool by slot number or by typing the letter.

use std::io::{self, Write};

use letter_pool::{build_pool, CandidatePool, Vocabulary, PADDED_LENGTH};
use log::warn;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use say_text::{strip_bold_tags, Announce, Announcer, VoiceSettings};
use spelling_session::{Announcement, SpellingSession};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!();
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║              Spell It — letter pool console              ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();

    let mut rng = match seed_arg() {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None       => SmallRng::from_entropy(),
    };
    let vocab     = Vocabulary::default();
    let announcer = Announcer::open(VoiceSettings::default());

    'words: loop {
        let (target, pool) = match build_pool(&vocab, PADDED_LENGTH, &mut rng) {
            Ok(p)  => p,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        let mut session = SpellingSession::new(target);
        say(&announcer, &session.start_announcement());
        print_pool(&pool);

        while !session.is_closed() {
            let line = read_line(&format!(
                "  [{}{}] slot 0–{} or letter (q quits): ",
                session.entered(),
                "_".repeat(session.remaining()),
                pool.len().saturating_sub(1),
            ));
            if line.is_empty() { break 'words; } // stdin closed
            let input = line.trim();
            if input.eq_ignore_ascii_case("q") {
                break 'words;
            }
            let Some(letter) = pick(input, &pool) else {
                println!("  ⚠  Not in the pool.");
                continue;
            };
            match session.enter(letter) {
                Ok(step) => {
                    for a in step.announcements() { say(&announcer, &a); }
                }
                Err(e) => warn!("{}", e),
            }
        }

        let again = read_line("\n  Another word? (Y/n): ");
        if again.trim().eq_ignore_ascii_case("n") { break; }
        println!();
    }

    println!("\nGoodbye!\n");
    announcer.finish();
}

fn say(announcer: &Announcer, a: &Announcement) {
    let text = a.text();
    println!("  ▸ {}", strip_bold_tags(&text));
    announcer.announce(&text);
}

fn print_pool(pool: &CandidatePool) {
    let slots: String = pool.iter().map(|c| format!(" {:>2} ", c.index)).collect();
    let cells: String = pool.iter().map(|c| format!("[ {}]", c.letter)).collect();
    println!();
    println!("  {}", slots);
    println!("  {}", cells);
    println!();
}

/// Slot number or a letter present in the pool.
fn pick(input: &str, pool: &CandidatePool) -> Option<char> {
    if let Ok(i) = input.parse::<usize>() {
        return pool.get(i).map(|c| c.letter);
    }
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => pool.find(c).map(|c| c.letter),
        _ => None,
    }
}

fn seed_arg() -> Option<u64> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
