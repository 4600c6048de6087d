//! Inline markup: emphasis, code spans and links
//!
//! Text is tokenized into a small tree before rendering, so nesting such as
//! `**a *b* c**` has one defined result and HTML escaping happens exactly once,
//! on text nodes and link targets.

#[derive(Debug, Clone, PartialEq)]
enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Code(String),
    Link { text: Vec<Inline>, href: String },
}

/// Render one line (or a joined paragraph) of inline markdown to HTML
pub fn render_inline(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    write_nodes(&parse(&chars), &mut out);
    out
}

/// Escape the characters that would otherwise open markup or attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn parse(chars: &[char]) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut i = 0;

    while i < chars.len() {
        match parse_span(chars, i) {
            Some((node, next)) => {
                if !text.is_empty() {
                    nodes.push(Inline::Text(std::mem::take(&mut text)));
                }
                nodes.push(node);
                i = next;
            }
            None => {
                text.push(chars[i]);
                i += 1;
            }
        }
    }

    if !text.is_empty() {
        nodes.push(Inline::Text(text));
    }
    nodes
}

/// Try to read a span opening at `i`; returns the node and the index after it
fn parse_span(chars: &[char], i: usize) -> Option<(Inline, usize)> {
    let c = chars[i];
    match c {
        '`' => {
            let close = find_char(chars, i + 2, '`')?;
            let code: String = chars[i + 1..close].iter().collect();
            Some((Inline::Code(code), close + 1))
        }
        '*' | '_' if chars.get(i + 1) == Some(&c) => {
            let close = find_double(chars, i + 3, c)?;
            let inner = parse(&chars[i + 2..close]);
            Some((Inline::Strong(inner), close + 2))
        }
        '*' => {
            let close = find_single_star(chars, i + 2)?;
            let inner = parse(&chars[i + 1..close]);
            Some((Inline::Emphasis(inner), close + 1))
        }
        '_' => {
            if i > 0 && is_word(chars[i - 1]) {
                return None;
            }
            let close = (i + 2..chars.len()).find(|&j| {
                chars[j] == '_' && chars.get(j + 1).map_or(true, |&n| !is_word(n))
            })?;
            let inner = parse(&chars[i + 1..close]);
            Some((Inline::Emphasis(inner), close + 1))
        }
        '[' => {
            // Link text runs to the next bracket, which must be `](`
            let mid = (i + 1..chars.len()).find(|&j| matches!(chars[j], '[' | ']'))?;
            if chars[mid] == '[' || mid == i + 1 || chars.get(mid + 1) != Some(&'(') {
                return None;
            }
            let close = find_char(chars, mid + 3, ')')?;
            let text = parse(&chars[i + 1..mid]);
            let href: String = chars[mid + 2..close].iter().collect();
            Some((Inline::Link { text, href }, close + 1))
        }
        _ => None,
    }
}

fn find_char(chars: &[char], from: usize, target: char) -> Option<usize> {
    (from..chars.len()).find(|&j| chars[j] == target)
}

fn find_double(chars: &[char], from: usize, target: char) -> Option<usize> {
    (from..chars.len().saturating_sub(1)).find(|&j| chars[j] == target && chars[j + 1] == target)
}

/// Next `*` that is not half of a `**` pair
fn find_single_star(chars: &[char], from: usize) -> Option<usize> {
    let mut j = from;
    while j < chars.len() {
        if chars[j] == '*' {
            if chars.get(j + 1) == Some(&'*') {
                j += 2;
                continue;
            }
            return Some(j);
        }
        j += 1;
    }
    None
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn write_nodes(nodes: &[Inline], out: &mut String) {
    for node in nodes {
        match node {
            Inline::Text(text) => out.push_str(&escape_html(text)),
            Inline::Strong(inner) => {
                out.push_str("<strong>");
                write_nodes(inner, out);
                out.push_str("</strong>");
            }
            Inline::Emphasis(inner) => {
                out.push_str("<em>");
                write_nodes(inner, out);
                out.push_str("</em>");
            }
            Inline::Code(code) => {
                out.push_str("<code>");
                out.push_str(&escape_html(code));
                out.push_str("</code>");
            }
            Inline::Link { text, href } => {
                out.push_str("<a href=\"");
                out.push_str(&escape_html(href));
                out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
                write_nodes(text, out);
                out.push_str("</a>");
            }
        }
    }
}
