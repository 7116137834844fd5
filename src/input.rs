#![deny(missing_docs)]

//! # Input Resolution
//!
//! Resolves command-line input arguments into local files the parser can
//! read. An argument is either a local path or an HTTP(S) URL; remote
//! documents are fetched with a blocking one-shot request (no retry) and
//! materialized verbatim to a local file before parsing.

use crate::error::{AppError, AppResult};
use crate::model::ApiDescription;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// One resolved input argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A local file path, used as-is.
    Local(PathBuf),
    /// A remote document to fetch and materialize under `file_name`.
    Remote {
        /// The HTTP(S) URL to fetch.
        url: String,
        /// Local file name for the materialized content.
        file_name: String,
    },
}

impl Input {
    /// Parses one command-line argument.
    ///
    /// An argument containing `://` is remote. A remote argument may carry a
    /// `|file-name` suffix selecting the local file name; without it the
    /// URL's host name is used. Anything else is a local path.
    pub fn parse(argument: &str) -> AppResult<Self> {
        let (location, alias) = match argument.split_once('|') {
            Some((location, alias)) => (location, Some(alias)),
            None => (argument, None),
        };

        if !location.contains("://") {
            return Ok(Input::Local(PathBuf::from(argument)));
        }

        let file_name = match alias {
            Some(alias) if !alias.is_empty() => alias.to_string(),
            _ => {
                let url = Url::parse(location)
                    .map_err(|e| AppError::Fetch(format!("{}: {}", location, e)))?;
                url.host_str()
                    .ok_or_else(|| {
                        AppError::Fetch(format!("{}: URL has no host name", location))
                    })?
                    .to_string()
            }
        };

        Ok(Input::Remote {
            url: location.to_string(),
            file_name,
        })
    }

    /// Name used when reporting this input's outcome.
    pub fn display_name(&self) -> String {
        match self {
            Input::Local(path) => path.display().to_string(),
            Input::Remote { url, .. } => url.clone(),
        }
    }

    /// Produces a local file for this input.
    ///
    /// Local inputs pass through untouched; remote inputs are fetched and
    /// written under `temp_dir`. A fetch failure aborts only this input.
    pub fn materialize(&self, temp_dir: &Path) -> AppResult<PathBuf> {
        match self {
            Input::Local(path) => Ok(path.clone()),
            Input::Remote { url, file_name } => {
                let body = fetch(url)?;
                let path = temp_dir.join(file_name);
                fs::write(&path, body)?;
                Ok(path)
            }
        }
    }
}

/// Performs the blocking one-shot GET. No retries.
fn fetch(url: &str) -> AppResult<String> {
    let mut response = ureq::get(url)
        .call()
        .map_err(|e| AppError::Fetch(format!("{}: {}", url, e)))?;
    response
        .body_mut()
        .read_to_string()
        .map_err(|e| AppError::Fetch(format!("{}: {}", url, e)))
}

/// Reads and deserializes a materialized API description.
///
/// YAML and JSON are both accepted; JSON is a subset of the YAML the
/// deserializer understands.
pub fn load_description(path: &Path) -> AppResult<ApiDescription> {
    let text = fs::read_to_string(path)?;
    serde_yaml::from_str(&text)
        .map_err(|e| AppError::Parse(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_local_path() {
        let input = Input::parse("docs/openapi.yaml").unwrap();
        assert_eq!(input, Input::Local(PathBuf::from("docs/openapi.yaml")));
    }

    #[test]
    fn test_parse_url_with_alias() {
        let input = Input::parse("https://example.com/api/openapi.yaml|petstore.yaml").unwrap();
        assert_eq!(
            input,
            Input::Remote {
                url: "https://example.com/api/openapi.yaml".to_string(),
                file_name: "petstore.yaml".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_url_defaults_to_host_name() {
        let input = Input::parse("https://petstore.swagger.io/v2/swagger.json").unwrap();
        assert_eq!(
            input,
            Input::Remote {
                url: "https://petstore.swagger.io/v2/swagger.json".to_string(),
                file_name: "petstore.swagger.io".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_invalid_url_is_input_error() {
        let err = Input::parse("https://exa mple/x").unwrap_err();
        assert!(matches!(err, AppError::Fetch(_)));
    }

    #[test]
    fn test_materialize_local_passthrough() {
        let input = Input::Local(PathBuf::from("a.yaml"));
        let dir = tempdir().unwrap();
        let path = input.materialize(dir.path()).unwrap();
        assert_eq!(path, PathBuf::from("a.yaml"));
    }

    #[test]
    fn test_load_description_reads_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(&path, "info: { title: T, version: \"1\" }\npaths: {}\n").unwrap();

        let api = load_description(&path).unwrap();
        assert_eq!(api.info.unwrap().title.as_deref(), Some("T"));
    }

    #[test]
    fn test_load_description_json_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("openapi.json");
        fs::write(
            &path,
            r#"{"info": {"title": "T", "version": "1"}, "paths": {}}"#,
        )
        .unwrap();

        let api = load_description(&path).unwrap();
        assert_eq!(api.info.unwrap().version.as_deref(), Some("1"));
    }

    #[test]
    fn test_load_description_malformed_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "info: [unclosed").unwrap();

        let err = load_description(&path).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_load_description_missing_file_is_io_error() {
        let err = load_description(Path::new("/nonexistent/openapi.yaml")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
