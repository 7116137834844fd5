#![deny(missing_docs)]

//! # AsciiDoc Emitter
//!
//! A thin, stateful writer that turns structural write calls (sections,
//! paragraphs, code blocks, tables) into AsciiDoc markup, serialized
//! incrementally to the output sink. It owns no knowledge of API
//! descriptions; all domain formatting decisions live in the generator.

use std::io::{self, Write};

/// Incremental AsciiDoc writer over an output sink.
///
/// Table rows are buffered cell by cell and flushed on [`row_end`]. The
/// emitter does not validate that the number of cells per row matches the
/// declared column count; that is a caller invariant, asserted by tests.
///
/// [`row_end`]: AsciiDoc::table_row_end
pub struct AsciiDoc<W: Write> {
    out: W,
    row: Vec<String>,
}

impl<W: Write> AsciiDoc<W> {
    /// Creates an emitter writing to `out`.
    pub fn new(out: W) -> Self {
        AsciiDoc {
            out,
            row: Vec::new(),
        }
    }

    /// Consumes the emitter, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Emits a section heading at nesting level 1-4.
    pub fn section(&mut self, level: u8, title: &str) -> io::Result<()> {
        debug_assert!((1..=4).contains(&level));
        let marker = "=".repeat(level as usize);
        writeln!(self.out, "{} {}", marker, title)?;
        writeln!(self.out)
    }

    /// Emits a plain paragraph followed by a blank line.
    ///
    /// Writes nothing when `text` is empty, so optional fields can be passed
    /// through without producing stray blank paragraphs.
    pub fn paragraph(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "{}", text)?;
        writeln!(self.out)
    }

    /// Emits a fenced source block labeled with a language tag.
    pub fn code_block(&mut self, language: &str, content: &str) -> io::Result<()> {
        writeln!(self.out, "[source,{}]", language)?;
        writeln!(self.out, "----")?;
        writeln!(self.out, "{}", content)?;
        writeln!(self.out, "----")?;
        writeln!(self.out)
    }

    /// Opens a table with relative column widths and a header row.
    ///
    /// `widths` and `headers` must have the same length; the column count is
    /// implied by both.
    pub fn table_begin(&mut self, widths: &[u8], headers: &[&str]) -> io::Result<()> {
        debug_assert_eq!(widths.len(), headers.len());
        let cols: Vec<String> = widths.iter().map(|w| w.to_string()).collect();
        writeln!(self.out, "[cols=\"{}\"]", cols.join(","))?;
        writeln!(self.out, "|===")?;
        for header in headers {
            write!(self.out, "|{}", header)?;
        }
        writeln!(self.out)?;
        writeln!(self.out)
    }

    /// Buffers one cell for the current row, left to right.
    pub fn table_cell(&mut self, text: &str) {
        self.row.push(text.to_string());
    }

    /// Flushes the buffered cells as one table row.
    pub fn table_row_end(&mut self) -> io::Result<()> {
        for cell in self.row.drain(..) {
            writeln!(self.out, "|{}", cell)?;
        }
        writeln!(self.out)
    }

    /// Closes the table.
    pub fn table_end(&mut self) -> io::Result<()> {
        writeln!(self.out, "|===")?;
        writeln!(self.out)
    }
}

/// Renders text in italics.
pub fn italic(text: &str) -> String {
    format!("_{}_", text)
}

/// Renders text in monospace.
pub fn monospace(text: &str) -> String {
    format!("`{}`", text)
}

/// Renders text as subscript.
pub fn subscript(text: &str) -> String {
    format!("~{}~", text)
}

/// Renders a cross reference to a section by name.
pub fn link(target: &str) -> String {
    format!("<<{}>>", target)
}

/// Extracts the bare name from a schema reference string:
/// `#/components/schemas/User` yields `User`.
pub fn ref_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render<F>(build: F) -> String
    where
        F: FnOnce(&mut AsciiDoc<Vec<u8>>) -> io::Result<()>,
    {
        let mut adoc = AsciiDoc::new(Vec::new());
        build(&mut adoc).unwrap();
        String::from_utf8(adoc.into_inner()).unwrap()
    }

    #[test]
    fn test_section_levels() {
        let text = render(|adoc| {
            adoc.section(1, "Title")?;
            adoc.section(2, "Paths")?;
            adoc.section(3, "/pets")?;
            adoc.section(4, "Parameters")
        });
        assert_eq!(
            text,
            "= Title\n\n== Paths\n\n=== /pets\n\n==== Parameters\n\n"
        );
    }

    #[test]
    fn test_paragraph_skips_empty() {
        let text = render(|adoc| {
            adoc.paragraph("")?;
            adoc.paragraph("hello")
        });
        assert_eq!(text, "hello\n\n");
    }

    #[test]
    fn test_code_block() {
        let text = render(|adoc| adoc.code_block("shell", "GET /pets"));
        assert_eq!(text, "[source,shell]\n----\nGET /pets\n----\n\n");
    }

    #[test]
    fn test_table_shape() {
        let text = render(|adoc| {
            adoc.table_begin(&[1, 2, 2], &["Response code", "Description", "Content"])?;
            adoc.table_cell("200");
            adoc.table_cell("OK");
            adoc.table_cell("");
            adoc.table_row_end()?;
            adoc.table_end()
        });
        assert_eq!(
            text,
            "[cols=\"1,2,2\"]\n|===\n|Response code|Description|Content\n\n|200\n|OK\n|\n\n|===\n\n"
        );
    }

    #[test]
    fn test_table_row_buffer_resets() {
        let text = render(|adoc| {
            adoc.table_begin(&[1, 1], &["A", "B"])?;
            adoc.table_cell("1");
            adoc.table_cell("2");
            adoc.table_row_end()?;
            adoc.table_cell("3");
            adoc.table_cell("4");
            adoc.table_row_end()?;
            adoc.table_end()
        });
        assert_eq!(
            text,
            "[cols=\"1,1\"]\n|===\n|A|B\n\n|1\n|2\n\n|3\n|4\n\n|===\n\n"
        );
    }

    #[test]
    fn test_styling_helpers() {
        assert_eq!(italic("string"), "_string_");
        assert_eq!(monospace("25"), "`25`");
        assert_eq!(subscript("application/json"), "~application/json~");
        assert_eq!(link("User"), "<<User>>");
    }

    #[test]
    fn test_ref_name() {
        assert_eq!(ref_name("#/components/schemas/User"), "User");
        assert_eq!(ref_name("User"), "User");
        assert_eq!(ref_name("#/definitions/nested/Email"), "Email");
    }
}
