//! URL slug helpers

/// Slugify a title: lowercase, keep `[a-z0-9]`, collapse separators to `-`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_was_dash = true;

    for c in text.chars() {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() {
            slug.push(lower);
            last_was_dash = false;
        } else if (c.is_whitespace() || c == '-' || c == '_') && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Random 6-character lowercase suffix for de-duplicating slugs
pub fn slug_suffix() -> String {
    use rand::Rng;

    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    const SUFFIX_LEN: usize = 6;

    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Super Mario Clone"), "super-mario-clone");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Tower! Defense: 2"), "tower-defense-2");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("snake__game  --  deluxe"), "snake-game-deluxe");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  --hello--  "), "hello");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slug_suffix_shape() {
        let a = slug_suffix();
        let b = slug_suffix();
        assert_eq!(a.len(), 6);
        assert_eq!(b.len(), 6);
        assert!(a.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
