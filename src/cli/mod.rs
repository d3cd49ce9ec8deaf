// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction.
// clap parses the command line; everything else is delegated
// to Layer 2 (application).
//
//   pdf-flashcards                  → interactive session
//   pdf-flashcards interactive      → same, with --output/--seed
//   pdf-flashcards generate <PDF>   → no prompts, all flags
//   pdf-flashcards show [FILE]      → preview a saved card file
//
// The interactive session asks, in order: the PDF path, the
// card count, whether to make multiple-choice cards and, only
// if so, how many distractors.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod prompt;
pub mod report;

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::application::generate_use_case::GenerateConfig;
use commands::{Commands, GenerateArgs, InteractiveArgs, ShowArgs, PREVIEW_CARDS};
use prompt::Prompter;
use report::{generate_and_report, print_file_not_found, print_preview, BANNER};
use crate::infra::card_store::CardStore;

#[derive(Parser, Debug)]
#[command(
    name = "pdf-flashcards",
    version,
    about = "Turn the sentences of a PDF into cloze or multiple-choice flashcards."
)]
pub struct Cli {
    /// Interactive when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Dispatch to the chosen mode. The CLI layer only routes.
    pub fn run(self) -> Result<()> {
        let stdout = io::stdout();
        match self.command {
            Some(Commands::Generate(args))    => run_generate(&args, &mut stdout.lock()),
            Some(Commands::Interactive(args)) => run_interactive(io::stdin().lock(), stdout.lock(), &args),
            Some(Commands::Show(args))        => run_show(&args, &mut stdout.lock()),
            None => run_interactive(io::stdin().lock(), stdout.lock(), &InteractiveArgs::default()),
        }
    }
}

/// Handles the `generate` subcommand.
fn run_generate<W: Write>(args: &GenerateArgs, out: &mut W) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    tracing::info!("Generating cards from '{}'", args.pdf.display());

    let config = GenerateConfig::from(args);
    generate_and_report(out, &args.pdf, &config, &args.output, args.preview)
}

/// Handles the `show` subcommand.
fn run_show<W: Write>(args: &ShowArgs, out: &mut W) -> Result<()> {
    if !args.file.exists() {
        return print_file_not_found(out);
    }

    let cards = CardStore::new(&args.file).load()?;
    writeln!(out, "{} cards in {}", cards.len(), args.file.display())?;
    print_preview(out, &cards, args.limit)
}

/// The prompt-driven session.
fn run_interactive<R: BufRead, W: Write>(input: R, output: W, args: &InteractiveArgs) -> Result<()> {
    let mut prompter = Prompter::new(input, output);
    writeln!(prompter.output(), "{BANNER}")?;

    let pdf = PathBuf::from(prompter.ask("Enter path to PDF file (e.g., notes.pdf): ")?);
    // Checked before asking anything else
    if !pdf.exists() {
        return print_file_not_found(prompter.output());
    }

    let defaults  = GenerateConfig::default();
    let max_cards = prompter.ask_usize(
        &format!("Number of cards to generate (default {}): ", defaults.max_cards),
        defaults.max_cards,
    )?;
    let make_mcq = prompter.confirm("Create multiple-choice cards? (y/N): ")?;
    let distractors = if make_mcq {
        prompter.ask_usize(
            &format!("Number of distractors per MCQ (default {}): ", defaults.distractors),
            defaults.distractors,
        )?
    } else {
        defaults.distractors
    };

    let config = GenerateConfig {
        max_cards,
        make_mcq,
        distractors,
        seed: args.seed,
        ..defaults
    };
    generate_and_report(prompter.output(), &pdf, &config, &args.output, PREVIEW_CARDS)
}
