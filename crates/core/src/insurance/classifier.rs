//! Free-text insurance descriptor classification.

use super::insurance_constants::*;

/// Duration markers checked against the descriptor, longest first so a short
/// marker never matches as a substring of a longer one ("12" inside "120").
const DURATION_MARKERS: [(&str, &str); 6] = [
    ("120", TIER_IAE_120M),
    ("72", TIER_IAE_72M),
    ("12", TIER_IAE_12M),
    ("6", TIER_IAE_6M),
    ("3", TIER_IAE_3M),
    ("standard", TIER_STANDARD),
];

/// Maps a free-text insurance descriptor to a tier key.
///
/// The explicit lifetime flag is authoritative and wins unconditionally.
/// Otherwise the descriptor is tested case-insensitively against the known
/// duration markers. Classification never fails: unmatched (or absent) text
/// resolves to the UNKNOWN tier.
pub fn classify_insurance(descriptor: Option<&str>, lifetime: bool) -> &'static str {
    if lifetime {
        return TIER_LTI;
    }

    let text = match descriptor {
        Some(text) if !text.trim().is_empty() => text.to_lowercase(),
        _ => return TIER_UNKNOWN,
    };

    for (marker, tier) in DURATION_MARKERS {
        if text.contains(marker) {
            return tier;
        }
    }

    TIER_UNKNOWN
}
