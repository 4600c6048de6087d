//! List site content

use anyhow::Result;
use std::io::{self, Write};

use crate::content::{ContentLoader, LineupPhase, ReleaseStatus, TicketStatus};
use crate::helpers::{
    edition_years, format_date, gallery_images, DayFilter, GalleryFilter, LineupView,
};
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str, locale: &str, day: DayFilter) -> Result<()> {
    let loader = site.loader();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(&mut out, &loader, content_type, locale, day)
}

/// Write the listing for `content_type` to `out`
pub fn write_listing<W: Write>(
    out: &mut W,
    loader: &ContentLoader,
    content_type: &str,
    locale: &str,
    day: DayFilter,
) -> Result<()> {
    match content_type {
        "artist" | "artists" | "lineup" => {
            let config = loader.lineup_config();
            let artists = loader.lineup();
            let view = LineupView::build(&config, &artists, day);
            writeln!(
                out,
                "Lineup ({}, {} revealed, {} shown, {} slots remaining):",
                phase_name(view.phase),
                view.revealed,
                view.artists.len(),
                view.remaining_slots
            )?;
            for card in &view.artists {
                let badge = if card.is_new { " [NEW]" } else { "" };
                writeln!(
                    out,
                    "  Day {} {} - {} ({}){}",
                    card.artist.day.number(),
                    card.artist.time,
                    card.artist.name,
                    card.artist.genre,
                    badge
                )?;
            }
            for _ in 0..view.mystery_slots {
                writeln!(out, "  ???")?;
            }
        }
        "post" | "posts" | "blog" => {
            let posts = loader.blog_posts(locale);
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                writeln!(
                    out,
                    "  {} - {} [{}]",
                    format_date(&post.date, locale),
                    post.title,
                    post.slug
                )?;
            }
        }
        "faq" => {
            let faq = loader.faq(locale);
            writeln!(out, "FAQ ({}):", faq.len())?;
            for entry in faq {
                writeln!(out, "  Q: {}", entry.question)?;
                writeln!(out, "     {}", entry.answer)?;
            }
        }
        "sponsor" | "sponsors" => {
            let sponsors = loader.sponsors();
            writeln!(out, "Sponsors ({}):", sponsors.len())?;
            for sponsor in sponsors {
                writeln!(out, "  {} [{:?}] {}", sponsor.name, sponsor.tier, sponsor.url)?;
            }
        }
        "gallery" => {
            let editions = loader.gallery();
            let images = gallery_images(&editions, GalleryFilter::All);
            let years: Vec<String> = edition_years(&editions).iter().map(i32::to_string).collect();
            writeln!(out, "Gallery ({} images, editions: {}):", images.len(), years.join(", "))?;
            for image in images {
                writeln!(out, "  {} #{} {} ({})", image.edition, image.order, image.src, image.alt)?;
            }
        }
        "release" | "releases" | "tickets" => {
            let tickets = loader.tickets();
            writeln!(out, "Releases:")?;
            for (key, release) in tickets.releases_in_order() {
                let marker = if key == tickets.active_release { "*" } else { " " };
                writeln!(
                    out,
                    " {}{} - {} [{}]",
                    marker,
                    key,
                    release.label.get(locale),
                    release_status_name(release.status)
                )?;
                let types = [
                    ("fullpass", &release.tickets.fullpass),
                    ("day1", &release.tickets.day1),
                    ("day2", &release.tickets.day2),
                ];
                for (name, ticket) in types {
                    writeln!(
                        out,
                        "    {}: {:.2} {} [{}]",
                        name,
                        ticket.price,
                        ticket.currency,
                        ticket_status_name(ticket.status)
                    )?;
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: artist, post, faq, sponsor, gallery, release",
                content_type
            );
        }
    }

    Ok(())
}

fn phase_name(phase: LineupPhase) -> &'static str {
    match phase {
        LineupPhase::ComingSoon => "coming soon",
        LineupPhase::Revealing => "revealing",
        LineupPhase::Complete => "complete",
    }
}

fn release_status_name(status: ReleaseStatus) -> &'static str {
    match status {
        ReleaseStatus::Active => "active",
        ReleaseStatus::SoldOut => "sold out",
        ReleaseStatus::ComingSoon => "coming soon",
    }
}

fn ticket_status_name(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Available => "available",
        TicketStatus::SoldOut => "sold out",
        TicketStatus::ComingSoon => "coming soon",
    }
}
