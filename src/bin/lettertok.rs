//! lettertok command line
//!
//! Text-mode front-end for the built-in tokenizer.
//!
//! # Usage
//!
//! ```bash
//! # IDs for a sentence
//! lettertok encode "how are you"
//!
//! # One row per span with offsets
//! lettertok encode --spans "Piyush has Girlfriend!"
//!
//! # Fail on characters outside the vocabulary
//! lettertok encode --strict "a€b"
//!
//! # Decode a free-form ID list
//! lettertok decode "196, 163 - 241"
//!
//! # Dump the word block as JSON
//! lettertok vocab --kind word --json
//!
//! # Debug logging
//! RUST_LOG=debug lettertok encode "hello"
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use lettertok::core::display::{
    contains_phrase, contains_special, decode_display_label, parse_id_list,
};
use lettertok::{builtin, EncodeOptions, SpecialPhrase, TokenKind, TokenizerError};

#[derive(Parser)]
#[command(name = "lettertok", version, about = "Greedy letter/word tokenizer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text to token IDs
    Encode(EncodeArgs),
    /// Decode a comma/space/hyphen separated ID list
    Decode(DecodeArgs),
    /// List vocabulary entries
    Vocab(VocabArgs),
}

#[derive(Args)]
struct EncodeArgs {
    /// Text to encode (multiple arguments are joined with spaces)
    #[arg(required = true)]
    text: Vec<String>,

    /// Fail on the first character outside the vocabulary
    #[arg(long)]
    strict: bool,

    /// Emit this ID for characters outside the vocabulary
    #[arg(long, value_name = "ID")]
    unknown_id: Option<u32>,

    /// Print one line per span instead of a bare ID list
    #[arg(long)]
    spans: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DecodeArgs {
    /// IDs, e.g. "196, 163 - 241"
    #[arg(required = true)]
    ids: Vec<String>,

    /// Also print the per-ID decode labels
    #[arg(long)]
    labels: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum KindArg {
    Special,
    Character,
    Word,
}

impl From<KindArg> for TokenKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Special => TokenKind::Special,
            KindArg::Character => TokenKind::Character,
            KindArg::Word => TokenKind::Word,
        }
    }
}

#[derive(Args)]
struct VocabArgs {
    /// Only list entries of this kind
    #[arg(short, long)]
    kind: Option<KindArg>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Encode(args) => handle_encode(args),
        Command::Decode(args) => handle_decode(args),
        Command::Vocab(args) => handle_vocab(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_encode(args: EncodeArgs) -> Result<()> {
    let text = args.text.join(" ");
    let options = EncodeOptions {
        strict: args.strict,
        unknown_id: args.unknown_id,
    };
    let tokenizer = builtin();

    let spans = match tokenizer.encode_with_spans(&text, options) {
        Ok(spans) => spans,
        Err(e @ TokenizerError::UnknownToken { .. }) => {
            anyhow::bail!("{e} (rerun without --strict to drop it)")
        }
        Err(e) => return Err(e.into()),
    };
    info!(chars = text.chars().count(), spans = spans.len(), "encoded");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
        return Ok(());
    }

    if args.spans {
        for span in &spans {
            println!(
                "{:>5}  {:>4}..{:<4}  {:<9}  {:?}",
                span.id,
                span.start,
                span.end,
                span.kind.as_str(),
                span.original_text
            );
        }
    } else {
        let ids = spans.iter().map(|s| s.id.to_string()).collect::<Vec<_>>();
        println!("{}", ids.join(", "));
    }

    let ids = spans.iter().map(|s| s.id).collect::<Vec<_>>();
    if contains_special(tokenizer, &ids) {
        for phrase in SpecialPhrase::ALL {
            if contains_phrase(&ids, phrase) {
                println!("special: {:?} ({})", phrase.phrase(), phrase.id());
            }
        }
    }
    Ok(())
}

fn handle_decode(args: DecodeArgs) -> Result<()> {
    let tokenizer = builtin();
    let ids = parse_id_list(&args.ids.join(" "));
    info!(ids = ids.len(), "decoding");

    println!("{}", tokenizer.decode_letters(&ids));
    if args.labels {
        let labels = ids
            .iter()
            .map(|&id| format!("{id}={}", decode_display_label(tokenizer, id)))
            .collect::<Vec<_>>();
        println!("{}", labels.join(" "));
    }
    Ok(())
}

fn handle_vocab(args: VocabArgs) -> Result<()> {
    let kind = args.kind.map(TokenKind::from);
    let entries = builtin()
        .vocab()
        .entries()
        .iter()
        .filter(|e| kind.map_or(true, |k| e.kind == k))
        .collect::<Vec<_>>();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in entries {
            println!("{:>5}  {:<9}  {:?}", entry.id, entry.kind.as_str(), entry.token);
        }
    }
    Ok(())
}
