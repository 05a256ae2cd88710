//! Slug candidate generation for import records.
//!
//! Naming is inconsistent across data sources (internal codes vs. display
//! names vs. external slugs), so a single raw record yields an ordered list
//! of candidate slugs. Order is significant: the matcher short-circuits on
//! the first hit.

/// Normalizes a raw identifier to slug form: lowercase, runs of
/// non-alphanumerics collapsed to single dashes, no leading/trailing dash.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Compact form: lowercase with every non-alphanumeric removed. Absorbs
/// punctuation and spacing drift between sources ("M50" vs "M-50").
pub fn compact(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Drops the leading manufacturer token from a ship code, e.g.
/// "AEGS_Avenger_Titan" -> "Avenger_Titan". Codes without a separator are
/// returned unchanged.
fn strip_manufacturer_token(ship_code: &str) -> &str {
    match ship_code.find(['_', '-', ' ']) {
        Some(idx) if idx + 1 < ship_code.len() => &ship_code[idx + 1..],
        _ => ship_code,
    }
}

/// Derives the ordered candidate list for one record, most-likely-correct
/// first:
/// (a) slug of the ship code with the manufacturer token stripped,
/// (b) slug of the display name,
/// (c) slug of the alias when present,
/// (d) compact variants of (a) and (b).
/// Duplicates and empty forms are dropped, preserving first-seen order.
pub fn candidate_slugs(ship_code: &str, name: &str, alias: Option<&str>) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::with_capacity(5);
    let mut push = |candidate: String| {
        if !candidate.is_empty() && !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    };

    let code_slug = slugify(strip_manufacturer_token(ship_code));
    let name_slug = slugify(name);

    push(code_slug.clone());
    push(name_slug.clone());
    if let Some(alias) = alias {
        push(slugify(alias));
    }
    push(compact(&code_slug));
    push(compact(&name_slug));

    candidates
}
