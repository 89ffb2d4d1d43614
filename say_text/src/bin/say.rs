//! say — speak the arguments, or each line of stdin, through the announcer.
//!
//! ```text
//! say "Head <b>NW</b> on Oak Ln"
//! echo "Spell the word <b>talk</b>" | say
//! ```

use std::io::{self, BufRead};

use say_text::{normalize, Announce, Announcer, VoiceSettings};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let announcer = Announcer::open(VoiceSettings::default());

    if args.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(text) => {
                    println!("  ▸ {}", normalize(&text));
                    announcer.announce(&text);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    break;
                }
            }
        }
    } else {
        let text = args.join(" ");
        println!("  ▸ {}", normalize(&text));
        announcer.announce(&text);
    }

    announcer.finish();
}
