//! Gallery image ordering

use crate::content::{GalleryEdition, GalleryImage};

/// Edition tab selected on the gallery page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GalleryFilter {
    #[default]
    All,
    Year(i32),
}

/// Images to show for a filter.
///
/// Every image is stamped with its edition's year. `All` lists the newest
/// edition first and each edition by `order`.
pub fn gallery_images(editions: &[GalleryEdition], filter: GalleryFilter) -> Vec<GalleryImage> {
    let stamped = |edition: &GalleryEdition| {
        edition
            .images
            .iter()
            .map(|img| GalleryImage {
                edition: edition.year,
                ..img.clone()
            })
            .collect::<Vec<_>>()
    };

    let mut images = match filter {
        GalleryFilter::All => editions.iter().flat_map(stamped).collect::<Vec<_>>(),
        GalleryFilter::Year(year) => match editions.iter().find(|ed| ed.year == year) {
            Some(edition) => stamped(edition),
            None => return Vec::new(),
        },
    };

    images.sort_by(|a, b| b.edition.cmp(&a.edition).then(a.order.cmp(&b.order)));
    images
}

/// Edition years, newest first, for the filter tabs
pub fn edition_years(editions: &[GalleryEdition]) -> Vec<i32> {
    let mut years: Vec<i32> = editions.iter().map(|ed| ed.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(src: &str, order: i64) -> GalleryImage {
        GalleryImage {
            src: src.to_string(),
            order,
            ..Default::default()
        }
    }

    fn editions() -> Vec<GalleryEdition> {
        vec![
            GalleryEdition {
                year: 2023,
                theme: "Candy".to_string(),
                images: vec![image("a.jpg", 2), image("b.jpg", 1)],
            },
            GalleryEdition {
                year: 2024,
                theme: "Garden".to_string(),
                images: vec![image("c.jpg", 1)],
            },
        ]
    }

    #[test]
    fn test_all_newest_edition_first() {
        let images = gallery_images(&editions(), GalleryFilter::All);
        let srcs: Vec<_> = images.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(srcs, vec!["c.jpg", "b.jpg", "a.jpg"]);
        assert_eq!(images[0].edition, 2024);
        assert_eq!(images[2].edition, 2023);
    }

    #[test]
    fn test_single_year() {
        let images = gallery_images(&editions(), GalleryFilter::Year(2023));
        let srcs: Vec<_> = images.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(srcs, vec!["b.jpg", "a.jpg"]);
        assert!(gallery_images(&editions(), GalleryFilter::Year(2019)).is_empty());
    }

    #[test]
    fn test_edition_years() {
        assert_eq!(edition_years(&editions()), vec![2024, 2023]);
        assert!(edition_years(&[]).is_empty());
    }
}
