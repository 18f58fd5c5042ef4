//! Helpers for canonical PokéAPI URLs.

/// Extract the numeric entity id from the trailing path segment of a
/// canonical resource URL, e.g. `https://pokeapi.co/api/v2/item/17/` -> 17.
///
/// List endpoints only reference entities by such URLs, so this is the one
/// place identity is derived instead of read from a field. If the upstream
/// URL shape ever changes this breaks loudly (`None`), and the list
/// annotation falls back to "not edited" for that entry.
pub fn trailing_id(url: &str) -> Option<i64> {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_with_trailing_slash() {
        assert_eq!(trailing_id("https://pokeapi.co/api/v2/item/17/"), Some(17));
    }

    #[test]
    fn extracts_id_without_trailing_slash() {
        assert_eq!(trailing_id("https://pokeapi.co/api/v2/item/304"), Some(304));
    }

    #[test]
    fn rejects_non_numeric_tail() {
        assert_eq!(trailing_id("https://pokeapi.co/api/v2/item/potion/"), None);
        assert_eq!(trailing_id(""), None);
        assert_eq!(trailing_id("///"), None);
    }
}
