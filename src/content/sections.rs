//! Splitting the about page into its named sections

use serde::{Deserialize, Serialize};

use super::markdown::markdown_to_html;

/// About page markdown, one field per top-level section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutSections {
    pub story: String,
    pub editions: String,
    pub team: String,
    pub mission: String,
}

impl AboutSections {
    /// The same sections rendered to HTML
    pub fn to_html(&self) -> AboutSections {
        AboutSections {
            story: markdown_to_html(&self.story),
            editions: markdown_to_html(&self.editions),
            team: markdown_to_html(&self.team),
            mission: markdown_to_html(&self.mission),
        }
    }
}

/// Split about markdown at each `# ` heading.
///
/// A section is recognised by keywords in its heading, in either language
/// (`storia`/`story`, `edizioni`/`editions`, `team`, `missione`/`mission`).
/// The heading itself is dropped since the page renders its own titles.
pub fn split_sections(markdown: &str) -> AboutSections {
    let mut sections = AboutSections::default();

    for part in split_at_headings(markdown) {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }

        let first_line = trimmed.lines().next().unwrap_or_default().to_lowercase();
        let slot = if first_line.contains("storia") || first_line.contains("story") {
            &mut sections.story
        } else if first_line.contains("edizioni") || first_line.contains("editions") {
            &mut sections.editions
        } else if first_line.contains("team") {
            &mut sections.team
        } else if first_line.contains("missione") || first_line.contains("mission") {
            &mut sections.mission
        } else {
            continue;
        };

        *slot = remove_first_heading(trimmed);
    }

    sections
}

fn split_at_headings(markdown: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();

    for line in markdown.lines() {
        if line.starts_with("# ") && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }
        current.push_str(line);
        current.push('\n');
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

fn remove_first_heading(text: &str) -> String {
    if !text.starts_with("# ") {
        return text.to_string();
    }
    match text.split_once('\n') {
        Some((_, rest)) => rest.trim().to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ABOUT_IT: &str = "# La Nostra Storia

Tutto è iniziato in un giardino.

# Le Edizioni

Tre anni di festa.

# Il Team

- Pablo
- Giulia

# La Nostra Missione

Musica per tutti.
";

    #[test]
    fn test_split_italian_sections() {
        let sections = split_sections(ABOUT_IT);
        assert_eq!(sections.story, "Tutto è iniziato in un giardino.");
        assert_eq!(sections.editions, "Tre anni di festa.");
        assert_eq!(sections.team, "- Pablo\n- Giulia");
        assert_eq!(sections.mission, "Musica per tutti.");
    }

    #[test]
    fn test_split_english_sections_with_intro() {
        let markdown = "Intro text without heading\n\n# Our Story\nIt began.\n## Early days\nSmall.\n# The Team\nUs.";
        let sections = split_sections(markdown);
        assert_eq!(sections.story, "It began.\n## Early days\nSmall.");
        assert_eq!(sections.team, "Us.");
        assert_eq!(sections.editions, "");
        assert_eq!(sections.mission, "");
    }

    #[test]
    fn test_empty_markdown() {
        assert_eq!(split_sections(""), AboutSections::default());
    }

    #[test]
    fn test_heading_only_section() {
        let sections = split_sections("# Our Mission");
        assert_eq!(sections.mission, "");
    }

    #[test]
    fn test_to_html() {
        let sections = split_sections(ABOUT_IT).to_html();
        assert_eq!(sections.team, "<ul><li>Pablo</li><li>Giulia</li></ul>");
        assert_eq!(sections.story, "<p>Tutto è iniziato in un giardino.</p>");
    }
}
