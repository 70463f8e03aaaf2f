// Follower-count tiers — engagement baselines by audience size.
//
// Larger accounts naturally see lower engagement rates, so every indicator
// that looks at engagement compares against the tier's expected rate rather
// than a single global number.

/// A follower-count band with its expected engagement rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub name: &'static str,
    /// Inclusive lower bound on follower count
    pub min: f64,
    /// Inclusive upper bound on follower count (infinite for the top band)
    pub max: f64,
    /// Expected engagement rate for this band, in percent
    pub avg_er: f64,
}

impl Tier {
    pub fn contains(&self, followers: f64) -> bool {
        followers >= self.min && followers <= self.max
    }
}

/// The five bands, ascending by follower count.
pub static TIERS: [Tier; 5] = [
    Tier {
        name: "Nano",
        min: 1_000.0,
        max: 10_000.0,
        avg_er: 4.5,
    },
    Tier {
        name: "Micro",
        min: 10_001.0,
        max: 100_000.0,
        avg_er: 3.0,
    },
    Tier {
        name: "Mid-Tier",
        min: 100_001.0,
        max: 500_000.0,
        avg_er: 2.5,
    },
    Tier {
        name: "Macro",
        min: 500_001.0,
        max: 1_000_000.0,
        avg_er: 1.5,
    },
    Tier {
        name: "Mega",
        min: 1_000_001.0,
        max: f64::INFINITY,
        avg_er: 1.0,
    },
];

/// Look up the tier for a follower count.
///
/// First band whose inclusive range contains the count wins. Counts outside
/// every band (below 1,000, or fractional values between two bands) fall back
/// to the last band, so the lookup is total.
pub fn get_tier(followers: f64) -> &'static Tier {
    TIERS
        .iter()
        .find(|tier| tier.contains(followers))
        .unwrap_or(&TIERS[TIERS.len() - 1])
}
