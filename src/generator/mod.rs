//! Generator module - exports content snapshots, HTML fragments and the sitemap

pub mod sitemap;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::content::{AboutSections, BlogPost, ContentLoader};
use crate::helpers::{gallery_images, time_left, DayFilter, GalleryFilter, LineupView, TimeLeft};
use crate::Site;

/// What a generation run wrote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub locales: usize,
    pub posts: usize,
    pub files: usize,
}

/// Data for the home page header
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SiteSnapshot<'a> {
    title: &'a str,
    url: &'a str,
    locales: &'a [String],
    festival_start: &'a str,
    countdown: Option<TimeLeft>,
}

/// Blog index entry; the body lives in its own HTML file
#[derive(Debug, Clone, Serialize)]
struct PostSummary<'a> {
    title: &'a str,
    date: &'a str,
    excerpt: &'a str,
    image: &'a str,
    tags: &'a [String],
    slug: &'a str,
}

impl<'a> From<&'a BlogPost> for PostSummary<'a> {
    fn from(post: &'a BlogPost) -> Self {
        Self {
            title: &post.title,
            date: &post.date,
            excerpt: &post.excerpt,
            image: &post.image,
            tags: &post.tags,
            slug: &post.slug,
        }
    }
}

/// Static export generator
pub struct Generator {
    site: Site,
    loader: ContentLoader,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Self {
        Self {
            site: site.clone(),
            loader: site.loader(),
        }
    }

    /// Generate the entire export into the site's public directory
    pub fn generate(&self) -> Result<GenerateStats> {
        self.generate_into(&self.site.public_dir)
    }

    /// Generate the entire export into `out`
    pub fn generate_into(&self, out: &Path) -> Result<GenerateStats> {
        fs::create_dir_all(out)
            .with_context(|| format!("Failed to create output directory {:?}", out))?;

        let mut stats = GenerateStats::default();
        let now = Utc::now();

        // Locale-independent data
        let countdown = self
            .site
            .config
            .festival_start_utc()
            .and_then(|start| time_left(start, now));
        let snapshot = SiteSnapshot {
            title: &self.site.config.title,
            url: &self.site.config.url,
            locales: &self.site.config.locales,
            festival_start: &self.site.config.festival_start,
            countdown,
        };
        self.write_json(&out.join("site.json"), &snapshot, &mut stats)?;

        let lineup_config = self.loader.lineup_config();
        let artists = self.loader.lineup();
        let lineup = LineupView::build_at(&lineup_config, &artists, DayFilter::All, now);
        tracing::info!(
            "Lineup: {} artists shown, {} mystery slots",
            lineup.artists.len(),
            lineup.mystery_slots
        );
        self.write_json(&out.join("lineup.json"), &lineup, &mut stats)?;
        self.write_json(&out.join("lineup-config.json"), &lineup_config, &mut stats)?;

        self.write_json(&out.join("tickets.json"), &self.loader.tickets(), &mut stats)?;
        self.write_json(&out.join("sponsors.json"), &self.loader.sponsors(), &mut stats)?;
        let gallery = gallery_images(&self.loader.gallery(), GalleryFilter::All);
        self.write_json(&out.join("gallery.json"), &gallery, &mut stats)?;

        // Per-locale pages
        let mut posts_by_locale = Vec::new();
        for locale in &self.site.config.locales {
            let posts = self.generate_locale(out, locale, &mut stats)?;
            stats.posts += posts.len();
            stats.locales += 1;
            posts_by_locale.push((locale.clone(), posts));
        }

        let entries = sitemap::build_entries(&self.site.config.url, &posts_by_locale, now);
        self.write_file(&out.join("sitemap.xml"), &sitemap::to_xml(&entries), &mut stats)?;

        tracing::info!(
            "Generated {} files for {} locales ({} posts)",
            stats.files,
            stats.locales,
            stats.posts
        );

        Ok(stats)
    }

    fn generate_locale(
        &self,
        out: &Path,
        locale: &str,
        stats: &mut GenerateStats,
    ) -> Result<Vec<BlogPost>> {
        let dir = out.join(locale);
        fs::create_dir_all(dir.join("blog"))?;

        let posts = self.loader.blog_posts(locale);
        let summaries: Vec<PostSummary> = posts.iter().map(PostSummary::from).collect();
        self.write_json(&dir.join("blog.json"), &summaries, stats)?;
        for post in &posts {
            let path = dir.join("blog").join(format!("{}.html", post.slug));
            self.write_file(&path, &post.content_html(), stats)?;
        }

        self.write_json(&dir.join("faq.json"), &self.loader.faq(locale), stats)?;

        let about: AboutSections = self.loader.about_sections(locale).to_html();
        self.write_json(&dir.join("about.json"), &about, stats)?;

        let rules = crate::content::markdown_to_html(&self.loader.rules(locale));
        self.write_file(&dir.join("rules.html"), &rules, stats)?;

        tracing::debug!("Generated locale {} ({} posts)", locale, posts.len());
        Ok(posts)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T, stats: &mut GenerateStats) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.write_file(path, &json, stats)
    }

    fn write_file(&self, path: &Path, contents: &str, stats: &mut GenerateStats) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))?;
        tracing::debug!("Wrote {:?}", path);
        stats.files += 1;
        Ok(())
    }
}
