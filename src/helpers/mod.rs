//! Helper functions shared by the CLI and the generator
//!
//! Date and locale formatting, plus the view decisions the site pages make
//! on top of loaded content (lineup cards, gallery ordering, URLs).

mod date;
mod gallery;
mod lineup;
mod locale;
mod url;

pub use date::*;
pub use gallery::*;
pub use lineup::*;
pub use locale::*;
pub use url::*;
