//! Content records: lineup, tickets, sponsors, blog, FAQ and gallery

use serde::{Deserialize, Deserializer, Serialize};

use super::markdown::markdown_to_html;
use crate::helpers;

/// Deserialize a number leniently: `null`, booleans and non-numeric strings
/// become 0, numeric strings are parsed
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct LenientNumber;

    impl<'de> Visitor<'de> for LenientNumber {
        type Value = f64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number")
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(if value.is_finite() { value } else { 0.0 })
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value as f64)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let n: f64 = value.trim().parse().unwrap_or(0.0);
            self.visit_f64(n)
        }

        fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(0.0)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(0.0)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(0.0)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(LenientNumber)
        }
    }

    deserializer.deserialize_any(LenientNumber)
}

// Float-to-int casts saturate; fractions are truncated
fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    lenient_number(deserializer).map(|n| n as i64)
}

fn lenient_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    lenient_number(deserializer).map(|n| n as i32)
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_number(deserializer).map(|n| n as u32)
}

/// A string authored in both site languages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Localized {
    pub it: String,
    pub en: String,
}

impl Localized {
    pub fn new(it: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            it: it.into(),
            en: en.into(),
        }
    }

    /// The string for `locale`, Italian unless the locale is exactly `en`
    pub fn get(&self, locale: &str) -> &str {
        helpers::get_localized_string(self, locale)
    }
}

/// Festival day an artist plays on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FestivalDay {
    #[default]
    One,
    Two,
}

impl FestivalDay {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(FestivalDay::One),
            2 => Some(FestivalDay::Two),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            FestivalDay::One => 1,
            FestivalDay::Two => 2,
        }
    }
}

impl TryFrom<u8> for FestivalDay {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        FestivalDay::from_number(i64::from(n)).ok_or_else(|| format!("invalid festival day {}", n))
    }
}

impl From<FestivalDay> for u8 {
    fn from(day: FestivalDay) -> u8 {
        day.number()
    }
}

/// Artist social profile links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub instagram: String,
    pub spotify: String,
    pub soundcloud: String,
}

/// An artist in the lineup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub name: String,
    pub slug: String,
    pub day: FestivalDay,
    pub time: String,
    pub genre: String,
    pub photo: String,
    pub bio: String,
    pub revealed: bool,
    pub reveal_date: String,
    pub order: i64,
    pub social: SocialLinks,
}

impl Artist {
    /// Whether the "new" badge applies at `now`
    pub fn is_new_at(&self, window_days: u32, now: chrono::DateTime<chrono::Utc>) -> bool {
        helpers::is_newly_revealed_at(&self.reveal_date, window_days, now)
    }
}

/// Disclosure stage of the lineup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum LineupPhase {
    #[default]
    ComingSoon,
    Revealing,
    Complete,
}

impl From<String> for LineupPhase {
    /// Unknown phases show the teaser, like an unset one
    fn from(s: String) -> Self {
        match s.as_str() {
            "revealing" => LineupPhase::Revealing,
            "complete" => LineupPhase::Complete,
            _ => LineupPhase::ComingSoon,
        }
    }
}

/// Lineup reveal configuration (`lineup/config.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineupConfig {
    pub phase: LineupPhase,
    #[serde(deserialize_with = "lenient_u32")]
    pub total_slots: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub new_badge_days: u32,
    pub coming_soon_message: Localized,
    pub mystery_card_message: Localized,
}

impl Default for LineupConfig {
    fn default() -> Self {
        Self {
            phase: LineupPhase::ComingSoon,
            total_slots: 0,
            new_badge_days: 7,
            coming_soon_message: Localized::default(),
            mystery_card_message: Localized::default(),
        }
    }
}

/// Availability of a single ticket type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TicketStatus {
    Available,
    SoldOut,
    #[default]
    ComingSoon,
}

impl From<String> for TicketStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "available" => TicketStatus::Available,
            "sold_out" => TicketStatus::SoldOut,
            _ => TicketStatus::ComingSoon,
        }
    }
}

/// State of a whole release
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ReleaseStatus {
    Active,
    SoldOut,
    #[default]
    ComingSoon,
}

impl From<String> for ReleaseStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => ReleaseStatus::Active,
            "sold_out" => ReleaseStatus::SoldOut,
            _ => ReleaseStatus::ComingSoon,
        }
    }
}

/// A single ticket type (full pass, day 1, day 2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketType {
    pub label: Localized,
    #[serde(deserialize_with = "lenient_number")]
    pub price: f64,
    pub currency: String,
    pub status: TicketStatus,
    pub url: String,
}

impl Default for TicketType {
    fn default() -> Self {
        Self {
            label: Localized::default(),
            price: 0.0,
            currency: "EUR".to_string(),
            status: TicketStatus::ComingSoon,
            url: String::new(),
        }
    }
}

/// The three ticket types sold in every release
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseTickets {
    pub fullpass: TicketType,
    pub day1: TicketType,
    pub day2: TicketType,
}

/// A ticket release phase (early bird, promo, regular)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    pub label: Localized,
    pub description: Localized,
    pub status: ReleaseStatus,
    pub tickets: ReleaseTickets,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Releases {
    pub earlybird: Release,
    pub promo: Release,
    pub regular: Release,
}

/// Full ticket configuration (`tickets.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TicketConfig {
    pub active_release: String,
    pub releases: Releases,
}

impl TicketConfig {
    /// Look up a release by its key
    pub fn release(&self, key: &str) -> Option<&Release> {
        match key {
            "earlybird" => Some(&self.releases.earlybird),
            "promo" => Some(&self.releases.promo),
            "regular" => Some(&self.releases.regular),
            _ => None,
        }
    }

    /// The release named by `activeRelease`, if it names one
    pub fn active_release(&self) -> Option<&Release> {
        self.release(&self.active_release)
    }

    /// Releases in sale order
    pub fn releases_in_order(&self) -> [(&'static str, &Release); 3] {
        [
            ("earlybird", &self.releases.earlybird),
            ("promo", &self.releases.promo),
            ("regular", &self.releases.regular),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SponsorTier {
    Gold,
    Silver,
    #[default]
    Bronze,
}

impl From<String> for SponsorTier {
    /// Unlisted tiers (`partner`, `media`) show with the smallest logos
    fn from(s: String) -> Self {
        match s.as_str() {
            "gold" => SponsorTier::Gold,
            "silver" => SponsorTier::Silver,
            _ => SponsorTier::Bronze,
        }
    }
}

/// Sponsor / partner entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sponsor {
    pub name: String,
    pub logo: String,
    pub url: String,
    pub tier: SponsorTier,
}

/// A blog post with its raw markdown body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub image: String,
    pub tags: Vec<String>,
    pub locale: String,
    pub slug: String,
    pub content: String,
}

impl BlogPost {
    pub fn parsed_date(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        helpers::parse_date(&self.date)
    }

    /// Body rendered to HTML
    pub fn content_html(&self) -> String {
        markdown_to_html(&self.content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(deserialize_with = "lenient_i32")]
    pub edition: i32,
    #[serde(deserialize_with = "lenient_i64")]
    pub order: i64,
}

/// Gallery photos of one festival edition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryEdition {
    #[serde(deserialize_with = "lenient_i32")]
    pub year: i32,
    pub theme: String,
    pub images: Vec<GalleryImage>,
}
