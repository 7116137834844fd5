#![deny(missing_docs)]

//! # apidoc CLI
//!
//! Command-line entry point: accepts one or more API descriptions (local
//! paths or URLs) and writes one AsciiDoc document per input. Each input's
//! outcome is reported individually; a failure never silently aborts the
//! batch.

use apidoc::{generate_document, AppResult, Input};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generates AsciiDoc documentation from OpenAPI descriptions")]
struct Cli {
    /// Input documents: local file paths or HTTP(S) URLs. A URL may carry a
    /// `|file-name` suffix selecting the local file name for the fetched
    /// content.
    #[clap(required = true)]
    inputs: Vec<String>,

    /// Destination directory for generated documents.
    #[clap(short, long, default_value = ".")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let temp_dir = std::env::temp_dir();

    let mut failed = 0usize;
    for argument in &cli.inputs {
        match process(argument, &cli.output, &temp_dir) {
            Ok(path) => println!("Generated {}", path.display()),
            Err(e) => {
                eprintln!("{}: {}", argument, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        eprintln!("{} of {} inputs failed", failed, cli.inputs.len());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn process(argument: &str, out_dir: &Path, temp_dir: &Path) -> AppResult<PathBuf> {
    let input = Input::parse(argument)?;
    generate_document(&input, out_dir, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_process_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let res = process("/nonexistent/openapi.yaml", dir.path(), dir.path());
        assert!(res.is_err());
    }
}
