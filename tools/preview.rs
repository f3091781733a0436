/// Preview — interactive shell for trying out phrase pools.
///
/// Usage: preview [--pools <path>] [--seed <n>]
///
/// Commands:
///   mood <label>        — set the mood label (free text)
///   food <label>        — set the food label (free text)
///   style <short|poem>  — set the output style
///   seed <n>            — reset the RNG with a seed
///   gen                 — generate one text
///   bulk <n>            — generate n seeded variants with variety stats
///   fallback            — show the offline fallback message
///   moods / foods       — list the built-in cards
///   help                — list commands
///   quit                — exit

use poem_engine::core::fallback::fallback_text;
use poem_engine::core::generator::{PoemGenerator, PoemRequest, Style};
use poem_engine::core::pools::PhrasePools;
use poem_engine::schema::menu::{find_food, find_mood, Choice, FOODS, MOODS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut pools_path = None;
    let mut seed: u64 = 42;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--pools" if i + 1 < args.len() => {
                i += 1;
                pools_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().unwrap_or(42);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let generator = match load_pools(pools_path.as_deref()).and_then(PoemGenerator::new) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };
    for warning in generator.pools().lint() {
        println!("WARNING: {}", warning);
    }

    let mut rng = StdRng::seed_from_u64(seed);

    // Session state
    let mut mood = String::from("Tired");
    let mut food = String::from("Noodles");
    let mut style = Style::Poem;

    println!("Seed: {}", seed);
    println!("Type 'help' for commands.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("preview> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
            None => (line.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => print_help(),
            "mood" => {
                mood = rest.to_string();
                println!("Mood set to {:?}", mood);
            }
            "food" => {
                food = rest.to_string();
                let req = PoemRequest::new(&mood, &food, style);
                println!("Food set to {:?} (category: {})", food, req.category().key());
            }
            "style" => match rest {
                "short" => style = Style::Short,
                "poem" => style = Style::Poem,
                _ => println!("Usage: style <short|poem>"),
            },
            "seed" => match rest.parse::<u64>() {
                Ok(n) => {
                    rng = StdRng::seed_from_u64(n);
                    println!("Seed set to {}", n);
                }
                Err(_) => println!("Usage: seed <n>"),
            },
            "gen" | "g" => {
                let req = PoemRequest::new(&mood, &food, style);
                println!("\n--- Generated Text ---");
                println!("{}", generator.generate(&req, &mut rng));
                println!("--- End ---\n");
            }
            "bulk" => {
                let n: usize = rest.parse().unwrap_or(10);
                let req = PoemRequest::new(&mood, &food, style);
                let base_seed: u64 = rng.gen();
                let texts = generator.generate_variants(&req, n, base_seed);
                let with_ending = texts.iter().filter(|t| t.lines().count() == 6).count();
                let distinct: HashSet<&String> = texts.iter().collect();
                println!("Generated {} texts (base seed {})", n, base_seed);
                println!("  distinct: {}", distinct.len());
                if style == Style::Poem {
                    println!("  with ending: {}", with_ending);
                }
            }
            "fallback" => {
                let m = find_mood(&mood).copied().unwrap_or(MOODS[1]);
                let f = find_food(&food).copied().unwrap_or(FOODS[9]);
                println!("{}", fallback_text(&m, &f));
            }
            "moods" => print_choices(&MOODS),
            "foods" => print_choices(&FOODS),
            _ => println!("Unknown command: {}. Type 'help' for commands.", cmd),
        }
    }
}

fn load_pools(path: Option<&str>) -> Result<PhrasePools, poem_engine::core::pools::PoolError> {
    let mut pools = PhrasePools::builtin()?;
    if let Some(path) = path {
        pools.merge(PhrasePools::load_from_ron_unchecked(Path::new(path))?);
        pools.validate()?;
        println!("Merged pools from {}", path);
    }
    Ok(pools)
}

fn print_choices(choices: &[Choice]) {
    for c in choices {
        println!("  {} {:<10} {}", c.emoji, c.label, c.hint);
    }
}

fn print_usage() {
    println!("Usage: preview [--pools <path>] [--seed <n>]");
}

fn print_help() {
    println!("Commands:");
    println!("  mood <label>        Set the mood label");
    println!("  food <label>        Set the food label");
    println!("  style <short|poem>  Set the output style");
    println!("  seed <n>            Reset the RNG");
    println!("  gen                 Generate one text");
    println!("  bulk <n>            Generate n texts with variety statistics");
    println!("  fallback            Show the offline fallback message");
    println!("  moods / foods       List the built-in cards");
    println!("  quit                Exit");
}
