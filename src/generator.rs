#![deny(missing_docs)]

//! # Document Generator
//!
//! Walks one parsed [`ApiDescription`] in a fixed deterministic order and
//! drives the AsciiDoc emitter: info, paths (with operations, parameters and
//! responses per path), then component models. All domain formatting
//! decisions live here; the emitter knows nothing about API descriptions.
//!
//! Ordering rules, per collection:
//! - path keys and model names: lexicographic key order
//! - HTTP methods within a path: fixed declared order (see
//!   [`PathItem::methods`])
//! - parameters: original declaration order
//! - schema properties and response content media types: declaration order

use crate::asciidoc::{italic, link, monospace, ref_name, subscript, AsciiDoc};
use crate::error::{AppError, AppResult};
use crate::model::{ApiDescription, Components, Operation, Parameter, PathItem, Response, Schema};
use indexmap::IndexMap;
use serde_json::Value;
use std::io::Write;

/// Generates the full AsciiDoc document for one API description into `out`.
///
/// The traversal is read-only and total: optional fields degrade to omission,
/// and only a missing `info` object or a sink error aborts generation.
pub fn generate<W: Write>(api: &ApiDescription, out: W) -> AppResult<()> {
    let mut gen = Generator {
        adoc: AsciiDoc::new(out),
    };

    gen.info(api)?;
    gen.paths(&api.paths)?;
    gen.models(api.components.as_ref())?;

    Ok(())
}

/// Generates the document into an in-memory buffer.
///
/// Used by callers that must not leave a half-written file behind: the
/// destination is written only after the whole traversal has succeeded.
pub fn generate_to_string(api: &ApiDescription) -> AppResult<String> {
    let mut buffer = Vec::new();
    generate(api, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| AppError::General(e.to_string()))
}

struct Generator<W: Write> {
    adoc: AsciiDoc<W>,
}

impl<W: Write> Generator<W> {
    fn info(&mut self, api: &ApiDescription) -> AppResult<()> {
        let info = api.info.as_ref().ok_or_else(|| {
            AppError::Structure("API description missing required 'info' object".into())
        })?;

        self.adoc
            .section(1, info.title.as_deref().unwrap_or_default())?;
        self.adoc
            .paragraph(info.description.as_deref().unwrap_or_default())?;
        if let Some(version) = &info.version {
            self.adoc.paragraph(&format!("Version {}", version))?;
        }

        Ok(())
    }

    fn paths(&mut self, paths: &IndexMap<String, PathItem>) -> AppResult<()> {
        self.adoc.section(2, "Paths")?;

        let mut keys: Vec<&String> = paths.keys().collect();
        keys.sort();

        for key in keys {
            self.adoc.section(3, key)?;
            for (method, operation) in paths[key].methods() {
                self.operation(method, key, operation)?;
            }
        }

        Ok(())
    }

    fn operation(&mut self, method: &str, path: &str, operation: &Operation) -> AppResult<()> {
        self.adoc
            .code_block("shell", &format!("{} {}", method.to_uppercase(), path))?;

        if let Some(description) = non_empty(operation.description.as_deref()) {
            self.adoc.section(4, "Description")?;
            self.adoc.paragraph(description)?;
        }

        if let Some(body) = &operation.request_body {
            self.adoc.section(4, "Request body")?;
            if let Some(description) = non_empty(body.description.as_deref()) {
                self.adoc.paragraph(description)?;
            }
            // The content-type map is parsed but not rendered here yet.
        }

        self.parameters(&operation.parameters)?;
        self.responses(&operation.responses)?;

        Ok(())
    }

    fn parameters(&mut self, parameters: &[Parameter]) -> AppResult<()> {
        if parameters.is_empty() {
            return Ok(());
        }

        self.adoc.section(4, "Parameters")?;
        self.adoc.table_begin(
            &[1, 2, 3, 1, 1],
            &["Type", "Name", "Description", "Schema", "Default"],
        )?;

        // Declaration order: parameter order is meaningful to callers.
        for parameter in parameters {
            self.adoc
                .table_cell(parameter.location.as_deref().unwrap_or_default());
            self.adoc
                .table_cell(parameter.name.as_deref().unwrap_or_default());
            self.adoc.table_cell(&parameter_description(parameter));
            self.adoc.table_cell(&schema_value(parameter.schema.as_ref()));
            // Parameter-level defaults are not modeled by this version.
            self.adoc.table_cell("");
            self.adoc.table_row_end()?;
        }

        self.adoc.table_end()?;
        Ok(())
    }

    fn responses(&mut self, responses: &IndexMap<String, Response>) -> AppResult<()> {
        if responses.is_empty() {
            return Ok(());
        }

        self.adoc.section(4, "Responses")?;
        self.adoc
            .table_begin(&[1, 2, 2], &["Response code", "Description", "Content"])?;

        let mut codes: Vec<&String> = responses.keys().collect();
        codes.sort();

        for code in codes {
            let response = &responses[code];
            self.adoc.table_cell(code);
            self.adoc
                .table_cell(response.description.as_deref().unwrap_or_default());
            self.adoc.table_cell(&response_content(response));
            self.adoc.table_row_end()?;
        }

        self.adoc.table_end()?;
        Ok(())
    }

    fn models(&mut self, components: Option<&Components>) -> AppResult<()> {
        let components = match components {
            Some(components) => components,
            None => return Ok(()),
        };

        self.adoc.section(2, "Models")?;

        let mut names: Vec<&String> = components.schemas.keys().collect();
        names.sort();

        for name in names {
            self.model(name, &components.schemas[name])?;
        }

        Ok(())
    }

    fn model(&mut self, name: &str, schema: &Schema) -> AppResult<()> {
        self.adoc.section(3, name)?;
        self.adoc.paragraph(&format!(
            "Type of {}",
            italic(schema.schema_type.as_deref().unwrap_or_default())
        ))?;

        if let Some(description) = non_empty(schema.description.as_deref()) {
            self.adoc.section(4, "Description")?;
            self.adoc.paragraph(description)?;
        }

        self.adoc.section(4, "Properties")?;
        self.adoc.table_begin(
            &[1, 1, 1, 2, 2],
            &["Name", "Type", "Format", "Description", "Example"],
        )?;

        // Declaration order: property order reflects a meaningful field layout.
        for (key, property) in &schema.properties {
            self.adoc.table_cell(key);
            self.adoc
                .table_cell(property.schema_type.as_deref().unwrap_or_default());
            self.adoc
                .table_cell(property.format.as_deref().unwrap_or_default());
            self.adoc.table_cell(&property_description(property));
            self.adoc.table_cell(
                &property
                    .example
                    .as_ref()
                    .map(value_text)
                    .unwrap_or_default(),
            );
            self.adoc.table_row_end()?;
        }

        self.adoc.table_end()?;
        Ok(())
    }
}

/// Composes the Description cell of a parameter row: the description text,
/// plus the example (when present) on a fresh line in monospace.
fn parameter_description(parameter: &Parameter) -> String {
    let mut text = String::new();

    if let Some(description) = non_empty(parameter.description.as_deref()) {
        text.push_str(description);
    }
    if let Some(example) = &parameter.example {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str("For example:\n");
        text.push_str(&monospace(&value_text(example)));
    }

    text
}

/// Composes the Description cell of a property row: the description text,
/// plus `Default: <value>` (when present) on a fresh line.
fn property_description(property: &Schema) -> String {
    let mut text = String::new();

    if let Some(description) = &property.description {
        text.push_str(description);
    }
    if let Some(default) = &property.default {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str("Default: ");
        text.push_str(&value_text(default));
    }

    text
}

/// Concatenates the content cell of a response row: subscripted media type,
/// newline, resolved schema value, per entry in declaration order.
fn response_content(response: &Response) -> String {
    let mut text = String::new();

    if let Some(content) = &response.content {
        for (media_type, entry) in content {
            text.push_str(&subscript(media_type));
            text.push('\n');
            text.push_str(&schema_value(entry.schema.as_ref()));
        }
    }

    text
}

/// Resolves a schema to its table-cell rendering.
///
/// A reference renders as a cross link to the named model; a type name
/// renders verbatim; when both are present the link precedes the type,
/// separated by one space. An absent schema renders empty.
fn schema_value(schema: Option<&Schema>) -> String {
    let schema = match schema {
        Some(schema) => schema,
        None => return String::new(),
    };

    match (&schema.schema_type, &schema.reference) {
        (Some(schema_type), Some(reference)) => {
            format!("{} {}", link(ref_name(reference)), schema_type)
        }
        (Some(schema_type), None) => schema_type.clone(),
        (None, Some(reference)) => link(ref_name(reference)),
        (None, None) => String::new(),
    }
}

/// Renders a JSON value for a table cell: strings verbatim (no quotes),
/// everything else in compact JSON form.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}
