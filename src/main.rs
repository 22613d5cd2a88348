mod cli;

use clap::Parser;
use cli::{Args, Command};
use emoji_transcoder::{logging, Catalog, EmojiTranscoder};
use std::io::Read;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = logging::level_from_env()
        .unwrap_or_else(|| logging::level_from_verbosity(args.verbose, args.quiet));
    logging::init(level);

    let transcoder = match &args.catalog {
        Some(path) => {
            let catalog = Catalog::from_json_file(path)?;
            log::info!("loaded {} emoji from {}", catalog.len(), path.display());
            EmojiTranscoder::new(catalog)
        }
        None => EmojiTranscoder::builtin(),
    };

    match args.command {
        Command::Transform { input, to } => {
            println!("{}", transcoder.transform(&input, to)?);
        }
        Command::Text { text, to } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            print!("{}", transcoder.transform_text(&text, to));
            if !text.ends_with('\n') {
                println!();
            }
        }
        Command::Info { input, json } => {
            let record = transcoder.get_info(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(record)?);
            } else {
                println!("{}", record);
            }
        }
        Command::List { format } => {
            let mut names = transcoder.list_supported();
            names.sort_unstable();
            for name in names {
                match format {
                    Some(format) => println!("{}\t{}", name, transcoder.transform(name, format)?),
                    None => println!("{}", name),
                }
            }
        }
        Command::Check { input } => {
            if transcoder.is_supported(&input) {
                println!("✓ {} is supported", input.trim());
            } else {
                println!("✗ {} is not supported", input.trim());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
