//! leap_speller — interactive entry point.

use leap_speller::app::{run, AppConfig};
use log::warn;
use std::io::{self, Write};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║         Leap Speller — tap the floating letter cubes         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "leap")]
    println!("  Mode: LeapMotion hardware (mouse and keys still work)");
    #[cfg(not(feature = "leap"))]
    println!("  Mode: Mouse/keyboard simulation  (use --features leap for hardware)");
    println!();

    let args: Vec<String> = std::env::args().collect();
    let seed = arg_value(&args, "--seed").and_then(|s| match s.parse::<u64>() {
        Ok(n)  => Some(n),
        Err(_) => { warn!("ignoring bad --seed '{}'", s); None }
    });

    let mut cfg = if args.iter().any(|a| a == "--quick") {
        println!("  Quick-start: 12 words, 10 cubes, tolerance 70\n");
        AppConfig::default()
    } else {
        configure_interactively()
    };
    if seed.is_some() { cfg.seed = seed; }

    println!();
    println!("  Opening visualizer window…");
    println!();

    if let Err(e) = run(cfg) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn configure_interactively() -> AppConfig {
    let defaults = AppConfig::default();

    let padded_length: usize = loop {
        let n = read_line("  Cubes per word 4–20 (default 10): ")
            .trim().parse::<usize>().unwrap_or(defaults.padded_length);
        if (4..=20).contains(&n) { break n; }
        println!("    ⚠  4–20 only.");
    };

    let tolerance: f32 = read_line("  Tap tolerance in scene units (default 70): ")
        .trim().parse::<f32>().ok()
        .filter(|t| *t > 0.0)
        .unwrap_or(defaults.tolerance);

    let seed = read_line("  Seed (blank = random): ").trim().parse::<u64>().ok();

    AppConfig { padded_length, tolerance, seed, ..defaults }
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
