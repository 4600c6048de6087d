//! Render a markdown file to HTML

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::{markdown_to_html, FrontMatter};

/// Render `path` to HTML, dropping any front-matter block
pub fn render_file(path: &Path) -> Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let (fm, body) = FrontMatter::parse(&content);
    if !fm.is_empty() {
        tracing::debug!("Skipped front-matter in {:?}", path);
    }
    Ok(markdown_to_html(body))
}

/// Render `path` and print the HTML to stdout
pub fn run(path: &Path) -> Result<()> {
    println!("{}", render_file(path)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_file_strips_frontmatter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("post.mdx");
        fs::write(&path, "---\ntitle: Hi\n---\n## Ciao\n\nA *bold* move").unwrap();

        let html = render_file(&path).unwrap();
        assert_eq!(html, "<h2>Ciao</h2>\n<p>A <em>bold</em> move</p>");
    }

    #[test]
    fn test_render_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(render_file(&dir.path().join("missing.md")).is_err());
    }
}
