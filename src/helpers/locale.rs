//! Locale helpers

use crate::content::Localized;

/// Extract a localized string from an `{ it, en }` pair.
///
/// Italian is the site's primary language, so every locale other than exactly
/// `en` gets the Italian text.
pub fn get_localized_string<'a>(value: &'a Localized, locale: &str) -> &'a str {
    if locale == "en" {
        &value.en
    } else {
        &value.it
    }
}

/// Map a short site locale to its BCP 47 tag; unknown codes pass through
pub fn locale_tag(locale: &str) -> &str {
    match locale {
        "it" => "it-IT",
        "en" => "en-US",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_localized_string() {
        let greeting = Localized::new("Ciao", "Hi");
        assert_eq!(get_localized_string(&greeting, "en"), "Hi");
        assert_eq!(get_localized_string(&greeting, "it"), "Ciao");
        assert_eq!(get_localized_string(&greeting, "fr"), "Ciao");
        assert_eq!(get_localized_string(&greeting, "EN"), "Ciao");
    }

    #[test]
    fn test_locale_tag() {
        assert_eq!(locale_tag("it"), "it-IT");
        assert_eq!(locale_tag("en"), "en-US");
        assert_eq!(locale_tag("de"), "de");
    }
}
