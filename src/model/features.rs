use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKey {
    Pray = 0,
    Journal = 1,
    Meditate = 2,
    Music = 3,
    SleepRest = 4,
    PrayerWall = 5,
    LocalSupport = 6,
}

pub const FEATURE_COUNT: usize = 7;

/// Canonical order. `Pray` stays first: scoring ties resolve to the earliest key.
pub fn feature_order() -> &'static [FeatureKey; FEATURE_COUNT] {
    &[
        FeatureKey::Pray,
        FeatureKey::Journal,
        FeatureKey::Meditate,
        FeatureKey::Music,
        FeatureKey::SleepRest,
        FeatureKey::PrayerWall,
        FeatureKey::LocalSupport,
    ]
}

impl FeatureKey {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureKey::Pray => "pray",
            FeatureKey::Journal => "journal",
            FeatureKey::Meditate => "meditate",
            FeatureKey::Music => "music",
            FeatureKey::SleepRest => "sleepRest",
            FeatureKey::PrayerWall => "prayerWall",
            FeatureKey::LocalSupport => "localSupport",
        }
    }
}

impl std::fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
