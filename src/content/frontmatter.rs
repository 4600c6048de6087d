//! Front-matter parsing

use serde_yaml::Value;

/// Front-matter data from an artist or blog post file.
///
/// Fields are kept as a raw YAML mapping; the typed accessors coerce what they
/// can and return `None` for anything else so each caller applies its own
/// per-field default.
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    data: Value,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        (FrontMatter::default(), content)
    }

    fn parse_yaml(content: &str) -> (Self, &str) {
        let rest = &content[3..]; // Skip opening ---
        let rest = rest.trim_start_matches(['\n', '\r']);

        // `---` immediately followed by `---`
        if let Some(remaining) = rest.strip_prefix("---") {
            return (FrontMatter::default(), remaining.trim_start_matches(['\n', '\r']));
        }

        let Some(end_pos) = rest.find("\n---") else {
            // No closing ---, treat as no front-matter
            return (FrontMatter::default(), content);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..]; // Skip \n---
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), remaining);
        }

        // A block of prose between two horizontal rules is not front-matter
        if !has_yaml_structure(yaml_content) {
            return (FrontMatter::default(), content);
        }

        match serde_yaml::from_str::<Value>(yaml_content) {
            Ok(data @ Value::Mapping(_)) => (FrontMatter { data }, remaining),
            Ok(_) => (FrontMatter::default(), remaining),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                (FrontMatter::default(), content)
            }
        }
    }

    /// True when no field was parsed
    pub fn is_empty(&self) -> bool {
        match &self.data {
            Value::Mapping(map) => map.is_empty(),
            _ => true,
        }
    }

    /// String field; numbers and booleans are stringified
    pub fn str(&self, key: &str) -> Option<String> {
        self.data.get(key).and_then(scalar_to_string)
    }

    /// String field inside a nested mapping (`social.instagram`)
    pub fn nested_str(&self, parent: &str, key: &str) -> Option<String> {
        self.data
            .get(parent)
            .and_then(|p| p.get(key))
            .and_then(scalar_to_string)
    }

    /// Integer field; accepts floats (truncated) and numeric strings
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.data.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Boolean field; accepts `"true"`/`"false"` strings
    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.data.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// List of strings; a single string becomes a one-element list
    pub fn str_list(&self, key: &str) -> Option<Vec<String>> {
        match self.data.get(key)? {
            Value::Sequence(items) => Some(items.iter().filter_map(scalar_to_string).collect()),
            Value::Null => None,
            other => scalar_to_string(other).map(|s| vec![s]),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// At least one unindented line must be a field (`revealDate: 2026-06-01`,
/// `social:`); URLs and prose sentences are not.
fn has_yaml_structure(yaml_content: &str) -> bool {
    yaml_content.lines().any(|line| {
        let Some((key, value)) = line.split_once(':') else {
            return false;
        };
        let is_field_name = key.starts_with(|c: char| c.is_ascii_alphabetic())
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        is_field_name && (value.trim_end().is_empty() || value.starts_with(' '))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order_mark_is_skipped() {
        let (fm, body) = FrontMatter::parse("\u{feff}---\ntitle: Ciao\n---\nBody");
        assert_eq!(fm.str("title").as_deref(), Some("Ciao"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_artist_frontmatter() {
        let content = r#"---
name: DJ Caramella
day: 2
order: 3
revealed: true
revealDate: 2026-03-01
social:
  instagram: https://instagram.com/caramella
---

Sweet house music.
"#;

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.str("name").as_deref(), Some("DJ Caramella"));
        assert_eq!(fm.int("day"), Some(2));
        assert_eq!(fm.int("order"), Some(3));
        assert_eq!(fm.bool("revealed"), Some(true));
        assert_eq!(fm.str("revealDate").as_deref(), Some("2026-03-01"));
        assert_eq!(
            fm.nested_str("social", "instagram").as_deref(),
            Some("https://instagram.com/caramella")
        );
        assert_eq!(fm.nested_str("social", "spotify"), None);
        assert_eq!(body.trim(), "Sweet house music.");
    }

    #[test]
    fn test_lenient_coercion() {
        let content = "---\nname: 1999\norder: \"4\"\nrevealed: maybe\ntags: live\n---\n";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.str("name").as_deref(), Some("1999"));
        assert_eq!(fm.int("order"), Some(4));
        assert_eq!(fm.bool("revealed"), None);
        assert_eq!(fm.str_list("tags"), Some(vec!["live".to_string()]));
        assert_eq!(body, "");
    }

    #[test]
    fn test_wrong_types_yield_none() {
        let content = "---\nday:\n  - 1\nname:\n  first: a\n---\nbody";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.int("day"), None);
        assert_eq!(fm.str("name"), None);
    }

    #[test]
    fn test_tag_list() {
        let content = "---\ntitle: Post\ntags:\n  - news\n  - lineup\n---\nHello";
        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.str_list("tags"), Some(vec!["news".into(), "lineup".into()]));
        assert_eq!(body, "Hello");
    }

    #[test]
    fn test_no_frontmatter() {
        let (fm, body) = FrontMatter::parse("Just text.");
        assert!(fm.is_empty());
        assert_eq!(body, "Just text.");
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = FrontMatter::parse("---\n---\nBody");
        assert!(fm.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_unclosed_block_is_content() {
        let content = "---\ntitle: Open";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_horizontal_rules_not_yaml() {
        let content = "---\n\nCheck https://example.com for details\n\n---\nMore.";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert!(body.contains("https://example.com"));
    }

    #[test]
    fn test_field_lines_detected() {
        assert!(has_yaml_structure("name: A\nrevealed: true"));
        assert!(has_yaml_structure("social:\n  instagram: https://ig.example"));
        assert!(!has_yaml_structure("  indented: value"));
        assert!(!has_yaml_structure("https://example.com"));
        assert!(!has_yaml_structure("Tickets at the gate: cash only"));
    }
}
