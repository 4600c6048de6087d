//! sitemap.xml generation

use chrono::{DateTime, Utc};

use crate::content::{escape_html, BlogPost};
use crate::helpers::{blog_post_path, full_url, localized_path};

/// Static pages present in every locale
pub const STATIC_PAGES: [&str; 8] = [
    "", "/lineup", "/tickets", "/gallery", "/blog", "/about", "/rules", "/contact",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// One `<url>` entry
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: Option<DateTime<Utc>>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

fn static_priority(page: &str) -> f32 {
    match page {
        "" => 1.0,
        "/lineup" | "/tickets" => 0.9,
        _ => 0.8,
    }
}

/// Entries for every static page and blog post in every locale.
///
/// `posts` pairs each locale with its loaded posts; static pages are stamped
/// with `generated_at`.
pub fn build_entries(
    base_url: &str,
    posts: &[(String, Vec<BlogPost>)],
    generated_at: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let static_entries = posts.iter().flat_map(|(locale, _)| {
        STATIC_PAGES.iter().map(move |page| SitemapEntry {
            url: full_url(base_url, &localized_path(locale, page)),
            last_modified: Some(generated_at),
            change_frequency: ChangeFrequency::Weekly,
            priority: static_priority(page),
        })
    });

    let blog_entries = posts.iter().flat_map(|(locale, posts)| {
        posts.iter().map(move |post| SitemapEntry {
            url: full_url(base_url, &blog_post_path(locale, &post.slug)),
            last_modified: post.parsed_date(),
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.7,
        })
    });

    static_entries.chain(blog_entries).collect()
}

/// Render entries as a sitemap XML document
pub fn to_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_html(&entry.url)));
        if let Some(modified) = entry.last_modified {
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                modified.format("%Y-%m-%dT%H:%M:%SZ")
            ));
        }
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post(slug: &str, date: &str) -> BlogPost {
        BlogPost {
            slug: slug.to_string(),
            date: date.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_entries() {
        let now = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
        let posts = vec![
            ("it".to_string(), vec![post("ciao", "2026-04-01")]),
            ("en".to_string(), vec![]),
        ];
        let entries = build_entries("https://pablothegarden.com/", &posts, now);

        assert_eq!(entries.len(), 17);
        assert_eq!(entries[0].url, "https://pablothegarden.com/it");
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[1].url, "https://pablothegarden.com/it/lineup");
        assert_eq!(entries[1].priority, 0.9);
        assert_eq!(entries[3].priority, 0.8);
        assert_eq!(entries[8].url, "https://pablothegarden.com/en");

        let blog = entries.last().unwrap();
        assert_eq!(blog.url, "https://pablothegarden.com/it/blog/ciao");
        assert_eq!(blog.change_frequency, ChangeFrequency::Monthly);
        assert_eq!(blog.last_modified, Some(Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_to_xml() {
        let entries = vec![SitemapEntry {
            url: "https://example.com/it?a=1&b=2".to_string(),
            last_modified: None,
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.8,
        }];
        let xml = to_xml(&entries);
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://example.com/it?a=1&amp;b=2</loc>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(!xml.contains("<lastmod>"));
    }
}
