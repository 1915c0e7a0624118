use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use htmlspell::{cli, Config, Session, SessionOutcome};
use std::io;
use std::path::PathBuf;
use std::process;

const ARG_ERROR: i32 = 1;
const SPELL_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "htmlspell")]
#[command(version, about = "Interactive spell checker for HTML documents", long_about = None)]
struct Cli {
    /// HTML file to check
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Main dictionary (JSON object whose keys are valid words)
    #[arg(value_name = "MAIN_DICT")]
    main_dict: Option<PathBuf>,

    /// Custom dictionary (plain text, one word per line; appended to on exit)
    #[arg(value_name = "CUSTOM_DICT")]
    custom_dict: Option<PathBuf>,

    /// Exit with code 2 when unresolved words remain
    #[arg(short = 'e', long)]
    exit_error: bool,

    /// Strict mode: check capitalized words too
    #[arg(short = 's', long)]
    strict: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            process::exit(ARG_ERROR);
        }
    };

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(ARG_ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "htmlspell", &mut io::stdout());
        return Ok(0);
    }

    let (Some(file), Some(main_dict), Some(custom_dict)) =
        (cli.file, cli.main_dict, cli.custom_dict)
    else {
        anyhow::bail!("Expected FILE, MAIN_DICT and CUSTOM_DICT. Use --help for usage.");
    };

    let config = Config::load(cli.strict, cli.exit_error)?;
    let colored = !cli.no_color;

    let mut session = Session::new(&config, file, &main_dict, &custom_dict, colored)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let outcome = session.run(&mut input, &mut output)?;

    cli::output::print_session_summary(&outcome, colored);

    match outcome {
        SessionOutcome::Completed { skipped, .. } if skipped > 0 && config.exit_error => {
            Ok(SPELL_ERROR)
        }
        _ => Ok(0),
    }
}
