/// Insurance tiers
///
/// Each constant is the key of one pre-seeded row in the insurance tier
/// lookup table. The table is read-only at runtime.

/// Lifetime insurance. The highest-priority tier; an explicit lifetime flag
/// on an import record always classifies here.
pub const TIER_LTI: &str = "LTI";

/// 120-month insure-and-expand package.
pub const TIER_IAE_120M: &str = "IAE-120M";

/// 72-month insure-and-expand package.
pub const TIER_IAE_72M: &str = "IAE-72M";

/// 12-month insurance.
pub const TIER_IAE_12M: &str = "IAE-12M";

/// 6-month insurance.
pub const TIER_IAE_6M: &str = "IAE-6M";

/// 3-month insurance.
pub const TIER_IAE_3M: &str = "IAE-3M";

/// Baseline hull coverage bundled with most pledges.
pub const TIER_STANDARD: &str = "STANDARD";

/// Descriptor did not match any known marker. Requires user review.
pub const TIER_UNKNOWN: &str = "UNKNOWN";

/// All seeded tier keys.
pub const ALL_TIERS: [&str; 8] = [
    TIER_LTI,
    TIER_IAE_120M,
    TIER_IAE_72M,
    TIER_IAE_12M,
    TIER_IAE_6M,
    TIER_IAE_3M,
    TIER_STANDARD,
    TIER_UNKNOWN,
];
