#![deny(missing_docs)]

//! # apidoc
//!
//! Generates AsciiDoc reference documentation from OpenAPI/Swagger API
//! descriptions: one input document in, one AsciiDoc document out.
//!
//! The crate is split into a domain-free AsciiDoc emitter and a traversal
//! engine that walks the parsed description in a fixed deterministic order,
//! so regenerating from an unmodified input is byte-identical.

/// AsciiDoc emitter and styling helpers.
pub mod asciidoc;

/// Shared error types.
pub mod error;

/// The traversal engine producing one document per description.
pub mod generator;

/// Input resolution: local paths and remote URLs.
pub mod input;

/// Serde model of the parsed API description.
pub mod model;

/// Destination naming and the final write.
pub mod output;

pub use asciidoc::AsciiDoc;
pub use error::{AppError, AppResult};
pub use generator::{generate, generate_to_string};
pub use input::{load_description, Input};
pub use model::ApiDescription;

use std::path::{Path, PathBuf};

/// Runs the full pipeline for one input: materialize, parse, generate, write.
///
/// Returns the destination path of the generated document. Remote inputs are
/// fetched into `temp_dir` first; the document is rendered fully in memory
/// and only written to `out_dir` when traversal succeeds.
pub fn generate_document(input: &Input, out_dir: &Path, temp_dir: &Path) -> AppResult<PathBuf> {
    let source = input.materialize(temp_dir)?;
    let api = load_description(&source)?;
    let document = generate_to_string(&api)?;

    let destination = output::destination_path(out_dir, &source);
    output::write_document(&destination, &document)?;

    Ok(destination)
}
