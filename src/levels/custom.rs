//! Shareable custom games
//!
//! A custom game is a single stored word addressed by a short random id. The
//! id travels in a link as the `id` query parameter; opening the link on the
//! device that stored the word starts a one-off level for the synthetic
//! [`CUSTOM_PLAYER`], which never records progress.

use super::Level;
use crate::Result;
use crate::core::TargetLayout;
use rand::Rng;

/// Player name used for shared one-off games
pub const CUSTOM_PLAYER: &str = "Custom";

/// Length of generated game ids
pub const GAME_ID_LEN: usize = 6;

const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a short uppercase base-36 game id
#[must_use]
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..GAME_ID_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect()
}

/// Build the share link for a game id
///
/// # Examples
/// ```
/// use wordle_levels::levels::custom::share_link;
///
/// assert_eq!(share_link("https://example.org/play", "AB12CD"), "https://example.org/play?id=AB12CD");
/// ```
#[must_use]
pub fn share_link(base_url: &str, id: &str) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}id={id}")
}

/// Extract a game id from a share link or a bare id
///
/// Returns `None` when a link carries no non-empty `id` parameter.
#[must_use]
pub fn parse_share_link(input: &str) -> Option<String> {
    let input = input.trim();
    let Some((_, query)) = input.split_once('?') else {
        let bare = input.to_ascii_uppercase();
        return (!bare.is_empty() && bare.chars().all(|c| c.is_ascii_alphanumeric()))
            .then_some(bare);
    };

    query
        .split(['&', '#'])
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "id")
        .map(|(_, value)| value.trim().to_ascii_uppercase())
        .filter(|value| !value.is_empty())
}

/// Prefix of every custom game level id; catalog files may not use it
pub const CUSTOM_ID_PREFIX: &str = "custom-";

/// Level id used for a custom game
#[must_use]
pub fn custom_level_id(game_id: &str) -> String {
    format!("{CUSTOM_ID_PREFIX}{game_id}")
}

/// Build the one-off level for a stored custom word
///
/// # Errors
/// Returns an error if `word` is not a valid target phrase.
pub fn custom_level(game_id: &str, word: &str) -> Result<Level> {
    let layout = TargetLayout::parse(word)?;
    Ok(Level::new(custom_level_id(game_id), layout.phrase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_ids_are_short_base36() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let id = generate_id(&mut rng);
            assert_eq!(id.len(), GAME_ID_LEN);
            assert!(id.bytes().all(|b| ID_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn link_round_trip() {
        let link = share_link("https://example.org/index.html", "K3X9QZ");
        assert_eq!(parse_share_link(&link).as_deref(), Some("K3X9QZ"));
    }

    #[test]
    fn link_with_existing_query() {
        let link = share_link("https://example.org/?lang=en", "K3X9QZ");
        assert_eq!(link, "https://example.org/?lang=en&id=K3X9QZ");
        assert_eq!(parse_share_link(&link).as_deref(), Some("K3X9QZ"));
    }

    #[test]
    fn parse_accepts_bare_ids() {
        assert_eq!(parse_share_link(" k3x9qz ").as_deref(), Some("K3X9QZ"));
        assert_eq!(parse_share_link(""), None);
        assert_eq!(parse_share_link("not an id"), None);
    }

    #[test]
    fn parse_rejects_links_without_id() {
        assert_eq!(parse_share_link("https://example.org/?lang=en"), None);
        assert_eq!(parse_share_link("https://example.org/?id="), None);
    }

    #[test]
    fn custom_level_normalises_word() {
        let level = custom_level("ABC123", "  hot   chocolate ").unwrap();
        assert_eq!(level.id, "custom-ABC123");
        assert_eq!(level.word, "HOT CHOCOLATE");
        assert!(custom_level("ABC123", "").is_err());
    }
}
