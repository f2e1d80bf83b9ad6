//! YAML frontmatter extraction.
//!
//! Posts open with a `---` fenced YAML block. Blank lines and a UTF-8 BOM
//! may precede the opening fence; a file without a fence has empty
//! frontmatter.

use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Errors emitted while parsing or extracting frontmatter.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Unclosed YAML fence (e.g., missing terminating `---`).
    #[error("Unterminated YAML frontmatter block: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse.
    #[error("Frontmatter parse error: {0}")]
    Parse(String),
    /// Top-level YAML node was not a mapping.
    #[error("Frontmatter must be a YAML mapping at the top level")]
    InvalidRootType,
}

/// The frontmatter keys a post understands. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Frontmatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub quote: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub thumbnail: Option<String>,
}

/// Accept strings, numbers and booleans as text; anything else is absent.
///
/// `date: 20240501` or `title: 2024` are common enough in hand-written YAML.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match JsonValue::deserialize(deserializer)? {
        JsonValue::String(s) => Some(s),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Extract and parse the frontmatter of a post source.
pub fn parse_frontmatter(input: &str) -> Result<Frontmatter, FrontmatterError> {
    let value = match find_yaml_block(input)? {
        Some(block) => parse_yaml_block(block)?,
        None => return Ok(Frontmatter::default()),
    };
    serde_json::from_value(value).map_err(|err| FrontmatterError::Parse(err.to_string()))
}

fn parse_yaml_block(block: &str) -> Result<JsonValue, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(JsonValue::Object(Default::default()));
    }

    let yaml_value: serde_yaml::Value =
        serde_yaml::from_str(block).map_err(|err| FrontmatterError::Parse(err.to_string()))?;
    let json_value =
        serde_json::to_value(yaml_value).map_err(|err| FrontmatterError::Parse(err.to_string()))?;

    match json_value {
        JsonValue::Null => Ok(JsonValue::Object(Default::default())),
        JsonValue::Object(_) => Ok(json_value),
        _ => Err(FrontmatterError::InvalidRootType),
    }
}

fn find_yaml_block(input: &str) -> Result<Option<&str>, FrontmatterError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut lines = LineCursor::new(input);

    let opened = loop {
        match lines.next() {
            Some((line, _)) if line.trim().is_empty() => continue,
            Some((line, _)) if is_yaml_fence(line) => break true,
            _ => break false,
        }
    };
    if !opened {
        return Ok(None);
    }

    let block_start = lines.offset();
    loop {
        match lines.next() {
            Some((line, line_start)) if is_yaml_fence(line) => {
                let block = &input[block_start..line_start];
                return Ok(Some(block.trim_end_matches(['\r', '\n'])));
            }
            Some(_) => continue,
            None => return Err(FrontmatterError::Unterminated),
        }
    }
}

/// Iterates lines together with their starting byte offset.
struct LineCursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> LineCursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    /// Offset of the first byte not yet consumed.
    fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.input.len() {
            return None;
        }
        let start = self.offset;
        let rest = &self.input[start..];
        match rest.find('\n') {
            Some(pos) => {
                self.offset = start + pos + 1;
                Some((&rest[..pos], start))
            }
            None => {
                self.offset = self.input.len();
                Some((rest, start))
            }
        }
    }
}

fn is_yaml_fence(line: &str) -> bool {
    line.trim_end_matches('\r') == "---"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Frontmatter {
        parse_frontmatter(input).expect("frontmatter should parse")
    }

    #[test]
    fn test_returns_empty_when_no_frontmatter() {
        assert_eq!(parse("# Title\nBody"), Frontmatter::default());
    }

    #[test]
    fn test_parses_post_fields() {
        let fm = parse(
            "---\ntitle: 마음의 변화\nsubtitle: 작은 습관\ndate: 2024-03-01\ncategory: mind\n---\n# Body",
        );
        assert_eq!(fm.title.as_deref(), Some("마음의 변화"));
        assert_eq!(fm.subtitle.as_deref(), Some("작은 습관"));
        assert_eq!(fm.date.as_deref(), Some("2024-03-01"));
        assert_eq!(fm.category.as_deref(), Some("mind"));
        assert_eq!(fm.slug, None);
    }

    #[test]
    fn test_ignores_unknown_keys() {
        let fm = parse("---\ntitle: A\ntags:\n  - x\n---\n");
        assert_eq!(fm.title.as_deref(), Some("A"));
    }

    #[test]
    fn test_stringifies_scalar_values() {
        let fm = parse("---\ntitle: 2024\ndate: 20240501\n---\n");
        assert_eq!(fm.title.as_deref(), Some("2024"));
        assert_eq!(fm.date.as_deref(), Some("20240501"));
    }

    #[test]
    fn test_non_scalar_values_are_absent() {
        let fm = parse("---\ntitle: [a, b]\n---\n");
        assert_eq!(fm.title, None);
    }

    #[test]
    fn test_handles_empty_block() {
        assert_eq!(parse("---\n---\n# Body"), Frontmatter::default());
    }

    #[test]
    fn test_handles_bom_crlf_and_leading_blank_lines() {
        let fm = parse("\u{feff}\n   \r\n---\r\ntitle: bar\r\n---\r\nBody");
        assert_eq!(fm.title.as_deref(), Some("bar"));
    }

    #[test]
    fn test_errors_on_invalid_yaml() {
        let err = parse_frontmatter("---\ntitle: [unterminated\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::Parse(_)), "{err:?}");
    }

    #[test]
    fn test_errors_on_unterminated_block() {
        let err = parse_frontmatter("---\ntitle: test").unwrap_err();
        assert!(matches!(err, FrontmatterError::Unterminated));
    }

    #[test]
    fn test_errors_on_non_mapping_root() {
        let err = parse_frontmatter("---\n- a\n- b\n---\n").unwrap_err();
        assert!(matches!(err, FrontmatterError::InvalidRootType));
    }
}
