//! jottc-drv - Tokenizer Driver
//!
//! The command-line front end for the Jott tokenizer. It reads one source
//! file, prints each token as a `file:line<TAB>KIND<TAB>lexeme` row on
//! stdout, and reports diagnostics on stderr. Unclassified lexemes are
//! printed like any other token and then warned about; lexical errors
//! produce no token output at all and a nonzero exit status.

#![warn(missing_docs)]

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jottc_lex::{tokenize_file, LexError, TokenKind};
use jottc_util::{Diagnostic, DiagnosticCode, Handler};

/// Jottc - Tokenizer for the Jott programming language
///
/// Reads a Jott source file and prints its token stream, one token per
/// line, as tab-separated location, kind, and lexeme.
#[derive(Parser, Debug)]
#[command(name = "jottc")]
#[command(author = "Jott Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenizer for the Jott programming language", long_about = None)]
pub struct Cli {
    /// Jott source file to tokenize
    pub input: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "JOTTC_VERBOSE")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long, env = "JOTTC_NO_COLOR")]
    pub no_color: bool,
}

/// Main entry point for the jottc driver.
///
/// Parses command-line arguments, initializes logging, and tokenizes the
/// requested file.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    Session::new(cli.input).run()
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}

/// A single tokenization run: one input file and its diagnostics.
pub struct Session {
    /// File being tokenized.
    input: PathBuf,

    /// Collected diagnostics for this run.
    handler: Handler,
}

impl Session {
    /// Creates a session for the given input file.
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            handler: Handler::new(),
        }
    }

    /// Tokenizes the input file and prints the token stream.
    ///
    /// On success the tokens go to stdout and any unclassified-lexeme
    /// warnings to stderr. On a lexical error nothing is printed to stdout
    /// and the error diagnostic goes to stderr.
    pub fn run(&self) -> Result<()> {
        tracing::debug!(input = %self.input.display(), "tokenizing");

        match tokenize_file(&self.input) {
            Ok(tokens) => {
                for token in &tokens {
                    println!("{token}");
                }

                for token in tokens.iter().filter(|t| t.kind == TokenKind::Unclassified) {
                    self.handler.emit_diagnostic(
                        Diagnostic::warning(format!(
                            "lexeme `{}` has no classification",
                            token.lexeme
                        ))
                        .with_code(DiagnosticCode::W_LEX_UNCLASSIFIED)
                        .with_loc(token.loc.clone()),
                    );
                }

                tracing::debug!(count = tokens.len(), "tokenization finished");
                self.report();
                Ok(())
            },
            Err(err) => {
                self.handler.emit_diagnostic(diagnose(&err));
                self.report();
                bail!("could not tokenize `{}`", self.input.display())
            },
        }
    }

    /// Prints all collected diagnostics to stderr.
    fn report(&self) {
        for diag in self.handler.diagnostics() {
            eprintln!("{diag}");
        }
    }
}

/// Turns a lexical error into a user-facing diagnostic.
fn diagnose(err: &LexError) -> Diagnostic {
    let diag = match err {
        LexError::StrayDot { .. } => Diagnostic::error("stray '.' is not part of a number")
            .with_help("attach the '.' to a digit, as in `0.5` or `5.`"),
        LexError::BareBang { .. } => Diagnostic::error("'!' must be followed by '='")
            .with_help("write `!=` for inequality"),
        LexError::UnterminatedString { .. } => Diagnostic::error("unterminated string literal")
            .with_note("string literals may not span lines"),
        LexError::Io { path, source } => {
            Diagnostic::error(format!("failed to read `{}`", path.display()))
                .with_note(source.to_string())
        },
    };

    let diag = diag.with_code(err.code());
    match err.loc() {
        Some(loc) => diag.with_loc(loc.clone()),
        None => diag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use jottc_util::{DiagnosticCode, Level, SourceLoc};

    fn loc() -> SourceLoc {
        SourceLoc::new("a.jott".into(), 2)
    }

    #[test]
    fn test_cli_parse_input() {
        let cli = Cli::parse_from(["jottc", "prog.jott"]);
        assert_eq!(cli.input, PathBuf::from("prog.jott"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parse_verbose() {
        let cli = Cli::parse_from(["jottc", "-v", "prog.jott"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(Cli::try_parse_from(["jottc"]).is_err());
    }

    #[test]
    fn test_diagnose_stray_dot() {
        let diag = diagnose(&LexError::StrayDot { loc: loc() });
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEX_STRAY_DOT));
        assert_eq!(diag.loc.as_ref().map(|l| l.line), Some(2));
    }

    #[test]
    fn test_diagnose_bare_bang_has_help() {
        let diag = diagnose(&LexError::BareBang { loc: loc() });
        assert!(diag.helps.iter().any(|h| h.contains("!=")));
    }

    #[test]
    fn test_diagnose_io_has_no_loc() {
        let err = LexError::Io {
            path: PathBuf::from("missing.jott"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let diag = diagnose(&err);
        assert!(diag.loc.is_none());
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEX_IO));
    }

    #[test]
    fn test_session_missing_file_fails() {
        let session = Session::new(PathBuf::from("no/such/file.jott"));
        assert!(session.run().is_err());
    }

    #[test]
    fn test_session_valid_file_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.jott");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "x = 5;").unwrap();

        let session = Session::new(path);
        assert!(session.run().is_ok());
    }

    #[test]
    fn test_session_lexical_error_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.jott");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "a ! b").unwrap();

        let session = Session::new(path);
        assert!(session.run().is_err());
    }
}
