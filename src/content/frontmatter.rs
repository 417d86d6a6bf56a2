//! Front-matter parsing

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Delimiter opening and closing a front-matter block
const DELIMITER: &str = "---";

/// Errors in the front-matter block of a file
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("front-matter block opened with '---' but never closed")]
    Unterminated,

    #[error("unsupported front-matter language '{0}' (expected yaml, json or toml)")]
    UnknownLanguage(String),

    #[error("front-matter must be a key/value mapping")]
    NotAMapping,

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Header language, taken from the text following the opening delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Yaml,
    Json,
    Toml,
}

impl Language {
    fn from_tag(tag: &str) -> Result<Self, FrontmatterError> {
        match tag.to_ascii_lowercase().as_str() {
            "" | "yaml" | "yml" => Ok(Language::Yaml),
            "json" => Ok(Language::Json),
            "toml" => Ok(Language::Toml),
            _ => Err(FrontmatterError::UnknownLanguage(tag.to_string())),
        }
    }
}

/// Raw front-matter of a content file, before projection into typed metadata
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    data: Mapping,
}

impl Frontmatter {
    /// Split a document into its front-matter and body.
    ///
    /// A document that does not open with `---` has no front-matter and the
    /// whole text is the body. Once a block is opened it must close and
    /// parse; there is no fallback to treating it as body text.
    pub fn parse(content: &str) -> Result<(Self, &str), FrontmatterError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let (first_line, rest) = split_line(content);
        let Some(tag) = first_line.trim_end().strip_prefix(DELIMITER) else {
            return Ok((Frontmatter::default(), content));
        };
        // "----" is a thematic break, not a delimiter
        if tag.starts_with('-') {
            return Ok((Frontmatter::default(), content));
        }
        let language = Language::from_tag(tag.trim())?;

        let mut offset = 0;
        let mut remaining = rest;
        while !remaining.is_empty() {
            let (line, next) = split_line(remaining);
            if line.trim_end() == DELIMITER {
                let header = &rest[..offset];
                let body = next;
                let data = parse_header(header, language)?;
                return Ok((Frontmatter { data }, body));
            }
            offset += remaining.len() - next.len();
            remaining = next;
        }

        Err(FrontmatterError::Unterminated)
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Look up a top-level key holding a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Deserialize the whole block into a typed structure
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_yaml::Error> {
        serde_yaml::from_value(Value::Mapping(self.data.clone()))
    }
}

/// Split off the first line (without its terminator) from the rest
fn split_line(text: &str) -> (&str, &str) {
    match text.find('\n') {
        Some(pos) => {
            let line = &text[..pos];
            (line.strip_suffix('\r').unwrap_or(line), &text[pos + 1..])
        }
        None => (text, ""),
    }
}

fn parse_header(header: &str, language: Language) -> Result<Mapping, FrontmatterError> {
    if header.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let value: Value = match language {
        Language::Yaml => serde_yaml::from_str(header)?,
        Language::Json => {
            let json: serde_json::Value = serde_json::from_str(header)?;
            serde_yaml::to_value(json)?
        }
        Language::Toml => {
            let table: toml::Table = toml::from_str(header)?;
            serde_yaml::to_value(table)?
        }
    };

    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(FrontmatterError::NotAMapping),
    }
}
