//! What the lineup page shows for the current reveal phase

use anyhow::bail;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

use crate::content::{Artist, FestivalDay, LineupConfig, LineupPhase};

/// Placeholder cards shown before any artist is announced
const COMING_SOON_PREVIEW_SLOTS: u32 = 8;

/// Day tab selected on the lineup page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayFilter {
    #[default]
    All,
    Day(FestivalDay),
}

impl DayFilter {
    pub fn matches(self, artist: &Artist) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(day) => artist.day == day,
        }
    }
}

impl FromStr for DayFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim() {
            "all" => Ok(DayFilter::All),
            "1" => Ok(DayFilter::Day(FestivalDay::One)),
            "2" => Ok(DayFilter::Day(FestivalDay::Two)),
            other => bail!("Unknown day: {}. Available: all, 1, 2", other),
        }
    }
}

/// A revealed artist with its badge state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistCard<'a> {
    #[serde(flatten)]
    pub artist: &'a Artist,
    pub is_new: bool,
}

/// Cards to show on the lineup page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupView<'a> {
    pub phase: LineupPhase,
    pub artists: Vec<ArtistCard<'a>>,
    /// Revealed artists across both days, before the day filter
    pub revealed: u32,
    /// Placeholder cards rendered after the artists
    pub mystery_slots: u32,
    /// Slots still to be announced
    pub remaining_slots: u32,
}

impl<'a> LineupView<'a> {
    pub fn build(config: &LineupConfig, artists: &'a [Artist], filter: DayFilter) -> Self {
        Self::build_at(config, artists, filter, Utc::now())
    }

    pub fn build_at(
        config: &LineupConfig,
        artists: &'a [Artist],
        filter: DayFilter,
        now: DateTime<Utc>,
    ) -> Self {
        if config.phase == LineupPhase::ComingSoon {
            return Self {
                phase: config.phase,
                artists: Vec::new(),
                revealed: 0,
                mystery_slots: config.total_slots.min(COMING_SOON_PREVIEW_SLOTS),
                remaining_slots: config.total_slots,
            };
        }

        let revealed: Vec<&Artist> = artists.iter().filter(|a| a.revealed).collect();
        let revealed_count = revealed.len() as u32;
        let remaining = match config.phase {
            LineupPhase::Complete => 0,
            _ => config.total_slots.saturating_sub(revealed_count),
        };

        let cards = revealed
            .into_iter()
            .filter(|a| filter.matches(a))
            .map(|artist| ArtistCard {
                artist,
                is_new: artist.is_new_at(config.new_badge_days, now),
            })
            .collect();

        // Mystery cards only make sense on the unfiltered grid
        let mystery_slots = if filter == DayFilter::All { remaining } else { 0 };

        Self {
            phase: config.phase,
            artists: cards,
            revealed: revealed_count,
            mystery_slots,
            remaining_slots: remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn artist(name: &str, day: FestivalDay, revealed: bool, reveal_date: &str) -> Artist {
        Artist {
            name: name.to_string(),
            slug: name.to_lowercase(),
            day,
            revealed,
            reveal_date: reveal_date.to_string(),
            ..Default::default()
        }
    }

    fn lineup() -> Vec<Artist> {
        vec![
            artist("Alba", FestivalDay::One, true, "2026-03-01"),
            artist("Bruno", FestivalDay::Two, true, "2026-03-10"),
            artist("Ciro", FestivalDay::Two, false, ""),
        ]
    }

    fn config(phase: LineupPhase, total_slots: u32) -> LineupConfig {
        LineupConfig {
            phase,
            total_slots,
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 12, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_coming_soon_shows_no_artists() {
        let artists = lineup();
        let view = LineupView::build_at(&config(LineupPhase::ComingSoon, 12), &artists, DayFilter::All, now());
        assert!(view.artists.is_empty());
        assert_eq!(view.mystery_slots, 8);
        assert_eq!(view.remaining_slots, 12);
    }

    #[test]
    fn test_revealing_counts_mystery_slots() {
        let artists = lineup();
        let view = LineupView::build_at(&config(LineupPhase::Revealing, 6), &artists, DayFilter::All, now());
        let names: Vec<_> = view.artists.iter().map(|c| c.artist.name.as_str()).collect();
        assert_eq!(names, vec!["Alba", "Bruno"]);
        assert_eq!(view.mystery_slots, 4);
        assert_eq!(view.remaining_slots, 4);
        assert!(!view.artists[0].is_new);
        assert!(view.artists[1].is_new);
    }

    #[test]
    fn test_more_revealed_than_slots() {
        let artists = lineup();
        let view = LineupView::build_at(&config(LineupPhase::Revealing, 1), &artists, DayFilter::All, now());
        assert_eq!(view.mystery_slots, 0);
    }

    #[test]
    fn test_complete_with_day_filter() {
        let artists = lineup();
        let filter = DayFilter::Day(FestivalDay::Two);
        let view = LineupView::build_at(&config(LineupPhase::Complete, 6), &artists, filter, now());
        assert_eq!(view.artists.len(), 1);
        assert_eq!(view.artists[0].artist.name, "Bruno");
        assert_eq!(view.mystery_slots, 0);
        assert_eq!(view.remaining_slots, 0);
    }

    #[test]
    fn test_filtered_revealing_hides_mystery_cards() {
        let artists = lineup();
        let filter = DayFilter::Day(FestivalDay::One);
        let view = LineupView::build_at(&config(LineupPhase::Revealing, 6), &artists, filter, now());
        assert_eq!(view.artists.len(), 1);
        assert_eq!(view.revealed, 2);
        assert_eq!(view.mystery_slots, 0);
        assert_eq!(view.remaining_slots, 4);
    }

    #[test]
    fn test_day_filter_from_str() {
        assert_eq!("all".parse::<DayFilter>().unwrap(), DayFilter::All);
        assert_eq!("2".parse::<DayFilter>().unwrap(), DayFilter::Day(FestivalDay::Two));
        assert!("3".parse::<DayFilter>().is_err());
    }

    #[test]
    fn test_card_serializes_flat() {
        let artists = lineup();
        let card = ArtistCard {
            artist: &artists[0],
            is_new: true,
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["name"], "Alba");
        assert_eq!(json["isNew"], true);
    }
}
