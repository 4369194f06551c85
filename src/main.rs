use std::{
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use calc::{
    interpreter::session::Session,
    repl::{Repl, print_results},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// calc evaluates arithmetic expressions with variables and math functions.
///
/// Statements end with `;`. Without arguments an interactive prompt is
/// started; type `quit` to leave it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates the given statements instead of starting a prompt.
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Evaluates the statements in a file instead of starting a prompt.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Suppresses the interactive prompt.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let script = match (args.expr, args.file) {
        (Some(expr), _) => expr,
        (None, Some(path)) => match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        },
        (None, None) => return run_interactive(!args.quiet),
    };

    run_script(&script)
}

/// Logs go to stderr and are only enabled when `RUST_LOG` is set.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                                 .with_writer(io::stderr)
                                 .init();
    }
}

fn run_interactive(show_prompt: bool) -> ExitCode {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let stderr = io::stderr().lock();

    match Repl::new(stdin, stdout, stderr, show_prompt).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run_script(script: &str) -> ExitCode {
    let mut session = Session::new();
    let results = session.run(script);

    let mut stdout = BufWriter::new(io::stdout().lock());
    let mut stderr = io::stderr().lock();

    let summary = print_results(&results, &mut stdout, &mut stderr).and_then(|summary| {
                                                                        stdout.flush()?;
                                                                        Ok(summary)
                                                                    });

    match summary {
        Ok(summary) if summary.failures == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}
