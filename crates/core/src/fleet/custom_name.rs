//! User nickname handling.
//!
//! Sources echo the stock name back as a "nickname" more often than not,
//! with different casing or spacing. Only a nickname that is meaningfully
//! different from the stock identity is worth persisting as custom.

use super::candidates::slugify;

/// Decides whether a user-supplied nickname is a real custom name.
///
/// Not custom when (a) the slug form of the nickname is contained within the
/// ship code (case-insensitive), or (b) the canonical display name and the
/// nickname contain each other case-insensitively. Custom nicknames are
/// preserved verbatim.
pub fn detect_custom_name(
    nickname: Option<&str>,
    ship_code: &str,
    canonical_name: &str,
) -> Option<String> {
    let nickname = nickname?.trim();
    if nickname.is_empty() {
        return None;
    }

    // Both sides in slug form so "_"/"-"/case drift between the code and the
    // nickname does not defeat the containment check.
    let nickname_slug = slugify(nickname);
    if !nickname_slug.is_empty() && slugify(ship_code).contains(&nickname_slug) {
        return None;
    }

    let nickname_lower = nickname.to_lowercase();
    let canonical_lower = canonical_name.trim().to_lowercase();
    if !canonical_lower.is_empty()
        && (canonical_lower.contains(&nickname_lower) || nickname_lower.contains(&canonical_lower))
    {
        return None;
    }

    Some(nickname.to_string())
}
