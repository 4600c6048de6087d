//! Content loader - reads festival content from the content directory
//!
//! Every accessor is fail-soft: a missing or malformed file yields the
//! documented default for its type, never an error. Nothing is cached, so
//! each call reflects the files as they are on disk at that moment.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::{or_default, ContentError};
use super::sections::{split_sections, AboutSections};
use super::{
    Artist, BlogPost, Faq, FestivalDay, FrontMatter, GalleryEdition, LineupConfig, SocialLinks,
    Sponsor, TicketConfig,
};
use crate::Site;

/// Loads content from a content root
#[derive(Debug, Clone)]
pub struct ContentLoader {
    root: PathBuf,
}

impl ContentLoader {
    /// Create a loader reading from `root`
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Create a loader for a site's configured content directory
    pub fn for_site(site: &Site) -> Self {
        Self::new(&site.content_dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and deserialize a JSON file relative to the content root
    pub fn read_json<T: DeserializeOwned>(&self, relative: impl AsRef<Path>) -> Result<T, ContentError> {
        let path = self.root.join(relative);
        let raw = fs::read_to_string(&path).map_err(|e| ContentError::io(&path, e))?;
        serde_json::from_str(&raw).map_err(|source| ContentError::Json { path, source })
    }

    fn read_text(&self, relative: impl AsRef<Path>) -> Result<String, ContentError> {
        let path = self.root.join(relative);
        fs::read_to_string(&path).map_err(|e| ContentError::io(&path, e))
    }

    /// Files with `extension` directly inside `dir`, sorted by name.
    /// A missing directory is an empty listing.
    fn list_files(&self, dir: impl AsRef<Path>, extension: &str) -> Vec<PathBuf> {
        WalkDir::new(self.root.join(dir))
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
            .collect()
    }

    /// Lineup reveal configuration
    pub fn lineup_config(&self) -> LineupConfig {
        or_default(self.read_json("lineup/config.json"), LineupConfig::default)
    }

    /// All artists from `lineup/*.md`, sorted by `order`
    pub fn lineup(&self) -> Vec<Artist> {
        let mut artists = Vec::new();

        for path in self.list_files("lineup", "md") {
            match self.load_artist(&path) {
                Ok(artist) => artists.push(artist),
                Err(e) => {
                    tracing::warn!("Failed to load artist {:?}: {}", path, e);
                }
            }
        }

        artists.sort_by_key(|a| a.order);
        artists
    }

    fn load_artist(&self, path: &Path) -> Result<Artist, ContentError> {
        let content = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let (fm, body) = FrontMatter::parse(&content);

        let day = match fm.int("day") {
            None => FestivalDay::One,
            Some(n) => FestivalDay::from_number(n).unwrap_or_else(|| {
                tracing::debug!("Artist {:?} has day {}, using day 1", path, n);
                FestivalDay::One
            }),
        };

        let bio = fm
            .str("bio")
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| body.trim().to_string());

        Ok(Artist {
            name: fm.str("name").unwrap_or_default(),
            slug: fm.str("slug").unwrap_or_else(|| file_stem(path)),
            day,
            time: fm.str("time").unwrap_or_default(),
            genre: fm.str("genre").unwrap_or_default(),
            photo: fm.str("photo").unwrap_or_default(),
            bio,
            revealed: fm.bool("revealed").unwrap_or(false),
            reveal_date: fm.str("revealDate").unwrap_or_default(),
            order: fm.int("order").unwrap_or(0),
            social: SocialLinks {
                instagram: fm.nested_str("social", "instagram").unwrap_or_default(),
                spotify: fm.nested_str("social", "spotify").unwrap_or_default(),
                soundcloud: fm.nested_str("social", "soundcloud").unwrap_or_default(),
            },
        })
    }

    /// Ticket releases; placeholder pricing when the file is absent
    pub fn tickets(&self) -> TicketConfig {
        or_default(self.read_json("tickets.json"), TicketConfig::default)
    }

    pub fn sponsors(&self) -> Vec<Sponsor> {
        or_default(self.read_json("sponsors/sponsors.json"), Vec::new)
    }

    /// Blog posts for a locale, newest first
    pub fn blog_posts(&self, locale: &str) -> Vec<BlogPost> {
        let mut posts = Vec::new();

        for path in self.list_files(Path::new("blog").join(locale), "mdx") {
            match self.load_post(&path, &file_stem(&path), locale) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        // Undated posts sort last
        posts.sort_by_cached_key(|p| std::cmp::Reverse(p.parsed_date()));
        posts
    }

    /// A single blog post by slug
    pub fn blog_post(&self, slug: &str, locale: &str) -> Option<BlogPost> {
        if !is_plain_name(slug) || !is_plain_name(locale) {
            tracing::debug!("Rejected blog post lookup {}/{}", locale, slug);
            return None;
        }

        let path = self.root.join("blog").join(locale).join(format!("{}.mdx", slug));
        match self.load_post(&path, slug, locale) {
            Ok(post) => Some(post),
            Err(e) if e.is_not_found() => {
                tracing::debug!("{}", e);
                None
            }
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    fn load_post(&self, path: &Path, slug: &str, locale: &str) -> Result<BlogPost, ContentError> {
        let content = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let (fm, body) = FrontMatter::parse(&content);

        Ok(BlogPost {
            title: fm.str("title").unwrap_or_default(),
            date: fm.str("date").unwrap_or_default(),
            excerpt: fm.str("excerpt").unwrap_or_default(),
            image: fm.str("image").unwrap_or_default(),
            tags: fm.str_list("tags").unwrap_or_default(),
            locale: locale.to_string(),
            slug: slug.to_string(),
            content: body.to_string(),
        })
    }

    /// Rules page markdown; empty when absent
    pub fn rules(&self, locale: &str) -> String {
        or_default(self.read_text(format!("rules/{}.md", locale)), String::new)
    }

    /// About page markdown; empty when absent
    pub fn about(&self, locale: &str) -> String {
        or_default(self.read_text(format!("about/{}.md", locale)), String::new)
    }

    pub fn about_sections(&self, locale: &str) -> AboutSections {
        split_sections(&self.about(locale))
    }

    pub fn faq(&self, locale: &str) -> Vec<Faq> {
        or_default(self.read_json(format!("faq/{}.json", locale)), Vec::new)
    }

    pub fn gallery(&self) -> Vec<GalleryEdition> {
        or_default(self.read_json("gallery.json"), Vec::new)
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

/// A single path component with no traversal
fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
