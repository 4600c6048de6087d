//! Content module - festival records, front-matter and markdown rendering

mod error;
mod frontmatter;
mod inline;
pub mod loader;
mod markdown;
mod models;
mod sections;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use inline::{escape_html, render_inline};
pub use loader::ContentLoader;
pub use markdown::markdown_to_html;
pub use models::{
    Artist, BlogPost, Faq, FestivalDay, GalleryEdition, GalleryImage, LineupConfig, LineupPhase,
    Localized, Release, ReleaseStatus, ReleaseTickets, Releases, SocialLinks, Sponsor,
    SponsorTier, TicketConfig, TicketStatus, TicketType,
};
pub use sections::{split_sections, AboutSections};
