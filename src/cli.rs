use clap::Parser;
use emoji_transcoder::Format;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Convert emoji between characters, shortcodes, HTML entities and escapes")]
pub struct Args {
    /// Load emoji from a JSON catalog instead of the embedded table
    #[clap(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[clap(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all log output
    #[clap(long, short, global = true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub enum Command {
    /// Convert a single emoji given in any representation
    Transform {
        /// Name, character, shortcode, HTML entity or escape sequence
        input: String,

        /// Target format: emoji, shortcode, html or unicode
        #[clap(long, short, default_value = "emoji")]
        to: Format,
    },
    /// Convert every emoji found in a block of text
    Text {
        /// Text to convert (read from stdin when omitted)
        text: Option<String>,

        /// Target format: emoji, shortcode, html or unicode
        #[clap(long, short, default_value = "shortcode")]
        to: Format,
    },
    /// Show every representation of an emoji
    Info {
        /// Name, character, shortcode, HTML entity or escape sequence
        input: String,

        /// Print the record as JSON
        #[clap(long)]
        json: bool,
    },
    /// List supported emoji names
    List {
        /// Also print each emoji in this format
        #[clap(long, short)]
        format: Option<Format>,
    },
    /// Exit with status 1 unless the input is a supported emoji
    Check {
        /// Name, character, shortcode, HTML entity or escape sequence
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transform() {
        let args = Args::parse_from(["emoji-transcoder", "transform", "smile", "--to", "html"]);
        match args.command {
            Command::Transform { input, to } => {
                assert_eq!(input, "smile");
                assert_eq!(to, Format::Html);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result = Args::try_parse_from(["emoji-transcoder", "transform", "smile", "--to", "bogus"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = Args::parse_from(["emoji-transcoder", "list", "-vv", "--catalog", "emoji.json"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.catalog, Some(PathBuf::from("emoji.json")));
        assert!(matches!(args.command, Command::List { format: None }));
    }
}
