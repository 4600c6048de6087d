//! Lightweight markdown-to-HTML conversion
//!
//! Supports headings, paragraphs, ordered and unordered lists, horizontal
//! rules, and the inline subset handled by [`render_inline`]. Anything else
//! (tables, code fences, raw HTML) renders as escaped paragraph text.

use lazy_static::lazy_static;
use regex::Regex;

use super::inline::render_inline;

lazy_static! {
    static ref RULE_RE: Regex = Regex::new(r"^(-{3,}|\*{3,}|_{3,})$").unwrap();
    static ref HEADING_RE: Regex = Regex::new(r"^(#{1,6})\s+(.+)$").unwrap();
    static ref ORDERED_ITEM_RE: Regex = Regex::new(r"^\d+\.\s+").unwrap();
    static ref UNORDERED_ITEM_RE: Regex = Regex::new(r"^[-*]\s+").unwrap();
}

/// Convert a markdown string to an HTML string.
///
/// Blocks are emitted one per line, joined with `\n`.
pub fn markdown_to_html(markdown: &str) -> String {
    let lines: Vec<&str> = markdown.split('\n').map(str::trim).collect();
    let mut parts: Vec<String> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.is_empty() {
            i += 1;
            continue;
        }

        if RULE_RE.is_match(line) {
            parts.push("<hr />".to_string());
            i += 1;
            continue;
        }

        if let Some(caps) = HEADING_RE.captures(line) {
            let level = caps[1].len();
            parts.push(format!(
                "<h{level}>{}</h{level}>",
                render_inline(&caps[2]),
                level = level
            ));
            i += 1;
            continue;
        }

        if ORDERED_ITEM_RE.is_match(line) {
            let (html, next) = collect_list(&lines, i, &ORDERED_ITEM_RE, "ol");
            parts.push(html);
            i = next;
            continue;
        }

        if UNORDERED_ITEM_RE.is_match(line) {
            let (html, next) = collect_list(&lines, i, &UNORDERED_ITEM_RE, "ul");
            parts.push(html);
            i = next;
            continue;
        }

        // The opening line is always taken so the scan advances
        let start = i;
        i += 1;
        while i < lines.len() && !lines[i].is_empty() && !opens_block(lines[i]) {
            i += 1;
        }
        let text = lines[start..i].join(" ");
        parts.push(format!("<p>{}</p>", render_inline(&text)));
    }

    parts.join("\n")
}

/// Consume a run of list items starting at `start`
fn collect_list(lines: &[&str], start: usize, marker: &Regex, tag: &str) -> (String, usize) {
    let mut html = format!("<{}>", tag);
    let mut i = start;
    while i < lines.len() && marker.is_match(lines[i]) {
        let item = marker.replace(lines[i], "");
        html.push_str("<li>");
        html.push_str(&render_inline(&item));
        html.push_str("</li>");
        i += 1;
    }
    html.push_str(&format!("</{}>", tag));
    (html, i)
}

fn opens_block(line: &str) -> bool {
    RULE_RE.is_match(line)
        || HEADING_RE.is_match(line)
        || ORDERED_ITEM_RE.is_match(line)
        || UNORDERED_ITEM_RE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings() {
        assert_eq!(markdown_to_html("# Title"), "<h1>Title</h1>");
        assert_eq!(markdown_to_html("## Sub **bold**"), "<h2>Sub <strong>bold</strong></h2>");
        assert_eq!(markdown_to_html("### A & B"), "<h3>A &amp; B</h3>");
        assert_eq!(markdown_to_html("###### Six"), "<h6>Six</h6>");
    }

    #[test]
    fn test_seven_hashes_is_paragraph() {
        assert_eq!(markdown_to_html("####### Seven"), "<p>####### Seven</p>");
    }

    #[test]
    fn test_hashtag_line_does_not_stall() {
        assert_eq!(markdown_to_html("#pablothegarden"), "<p>#pablothegarden</p>");
        assert_eq!(
            markdown_to_html("Follow us\n#pablothegarden"),
            "<p>Follow us #pablothegarden</p>"
        );
    }

    #[test]
    fn test_escaped_paragraph() {
        assert_eq!(markdown_to_html("&<>\""), "<p>&amp;&lt;&gt;&quot;</p>");
    }

    #[test]
    fn test_paragraph_joins_lines() {
        assert_eq!(
            markdown_to_html("first line\n  second line  \n\nnext"),
            "<p>first line second line</p>\n<p>next</p>"
        );
    }

    #[test]
    fn test_unordered_list_closes_before_paragraph() {
        assert_eq!(
            markdown_to_html("- a\n- b\n\ntext"),
            "<ul><li>a</li><li>b</li></ul>\n<p>text</p>"
        );
        assert_eq!(
            markdown_to_html("* one\n- two"),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn test_ordered_list() {
        assert_eq!(
            markdown_to_html("1. Arrive\n2. **Dance**\n10. Leave"),
            "<ol><li>Arrive</li><li><strong>Dance</strong></li><li>Leave</li></ol>"
        );
    }

    #[test]
    fn test_paragraph_stops_at_block() {
        assert_eq!(
            markdown_to_html("Intro\n- item\n## Next\ntext\n---"),
            "<p>Intro</p>\n<ul><li>item</li></ul>\n<h2>Next</h2>\n<p>text</p>\n<hr />"
        );
    }

    #[test]
    fn test_horizontal_rules() {
        assert_eq!(markdown_to_html("---\n***\n___"), "<hr />\n<hr />\n<hr />");
        assert_eq!(markdown_to_html("-- 2026"), "<p>-- 2026</p>");
    }

    #[test]
    fn test_raw_html_is_escaped() {
        assert_eq!(
            markdown_to_html("<div>hi</div>"),
            "<p>&lt;div&gt;hi&lt;/div&gt;</p>"
        );
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(
            markdown_to_html("# Regole\r\n\r\n- No glitter\r\n"),
            "<h1>Regole</h1>\n<ul><li>No glitter</li></ul>"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(markdown_to_html(""), "");
        assert_eq!(markdown_to_html("\n\n  \n"), "");
    }
}
