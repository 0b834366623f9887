//! Command-line host for the Monkey language: an interactive REPL by
//! default, or a one-shot script runner when given a file argument.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use monkey::{define_macros, evaluate, expand_macros, parse, Environment, Object};

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

/// Monkey: lexer, Pratt parser, and tree-walking evaluator in one binary.
#[derive(Parser, Debug)]
#[command(name = "monkey")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive REPL and script runner for the Monkey language")]
struct Cli {
    /// Script to run instead of entering the REPL
    script: Option<PathBuf>,

    /// Enable verbose (debug-level) diagnostic logging
    #[arg(short, long, env = "MONKEY_VERBOSE")]
    verbose: bool,

    /// Disable ANSI color in the REPL prompt and error banner
    #[arg(long, env = "MONKEY_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.script {
        Some(path) => run_script(path),
        None => {
            run_repl(cli.no_color);
            ExitCode::SUCCESS
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_new("debug")
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))
    }
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}

/// Runs the whole pipeline once against `path`'s contents, reporting parse
/// errors and a final `Error` object to stderr, and exiting non-zero on
/// either. The three failure shapes here — an I/O error, a macro-expansion
/// error, and a parser-error batch — get unified through `anyhow` rather
/// than each growing their own match arm at the process boundary.
fn run_script(path: &PathBuf) -> ExitCode {
    match run_script_inner(path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("monkey: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_script_inner(path: &PathBuf) -> anyhow::Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;

    let (program, errors) = parse(&source);
    if !errors.is_empty() {
        let mut buf = Vec::new();
        print_parse_errors(&mut buf, &errors);
        bail!("{}", String::from_utf8_lossy(&buf).trim_end());
    }

    let macro_env = Environment::new();
    let program = define_macros(program, &macro_env);
    let mut stderr = io::stderr();
    let program = expand_macros(program, &macro_env, &mut stderr)?;

    let eval_env = Environment::new();
    let mut stdout = io::stdout();
    let result = evaluate(&program, &eval_env, &mut stdout);
    if let Object::Error(message) = result.as_ref() {
        bail!("{message}");
    }
    Ok(())
}

/// Reads lines from stdin, evaluating each against persistent macro and
/// value environments until EOF.
fn run_repl(no_color: bool) {
    let prompt = if no_color { ">> " } else { "\x1b[36m>> \x1b[0m" };

    let macro_env = Environment::new();
    let eval_env = Environment::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{prompt}");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let (program, errors) = parse(&line);
        if !errors.is_empty() {
            print_parse_errors(&mut stdout, &errors);
            continue;
        }

        let program = define_macros(program, &macro_env);
        let program = match expand_macros(program, &macro_env, &mut stdout) {
            Ok(program) => program,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let result = evaluate(&program, &eval_env, &mut stdout);
        if !matches!(result.as_ref(), Object::Null) {
            println!("{}", result.inspect());
        }
    }
}

fn print_parse_errors(out: &mut dyn Write, errors: &[monkey::ParseError]) {
    let _ = writeln!(out, "{MONKEY_FACE}");
    let _ = writeln!(out, "Woops! We ran into some monkey business here!");
    let _ = writeln!(out, " parser errors:");
    for error in errors {
        let _ = writeln!(out, "\t{error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_script_positional() {
        let cli = Cli::parse_from(["monkey", "script.monkey"]);
        assert_eq!(cli.script, Some(PathBuf::from("script.monkey")));
    }

    #[test]
    fn cli_defaults_to_repl_mode() {
        let cli = Cli::parse_from(["monkey"]);
        assert!(cli.script.is_none());
    }

    #[test]
    fn cli_parses_verbose_and_no_color() {
        let cli = Cli::parse_from(["monkey", "--verbose", "--no-color"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn parse_error_banner_includes_each_message() {
        let (_, errors) = parse("let x = ;");
        let mut out = Vec::new();
        print_parse_errors(&mut out, &errors);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("parser errors:"));
        for error in &errors {
            assert!(rendered.contains(&error.to_string()));
        }
    }
}
