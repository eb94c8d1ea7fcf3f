use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Named bucket a level falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum Tier {
    Rookie,
    Challenger,
    Veteran,
    Elite,
    Legend,
}

impl Tier {
    /// Lowest level that qualifies for this tier
    #[must_use]
    pub const fn min_level(self) -> u8 {
        match self {
            Self::Rookie => 0,
            Self::Challenger => 20,
            Self::Veteran => 40,
            Self::Elite => 70,
            Self::Legend => 95,
        }
    }

    /// The highest tier whose threshold `level` meets
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        Self::iter().rev().find(|tier| level >= tier.min_level()).unwrap_or(Self::Rookie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(Tier::from_level(0), Tier::Rookie);
        assert_eq!(Tier::from_level(19), Tier::Rookie);
        assert_eq!(Tier::from_level(20), Tier::Challenger);
        assert_eq!(Tier::from_level(39), Tier::Challenger);
        assert_eq!(Tier::from_level(40), Tier::Veteran);
        assert_eq!(Tier::from_level(69), Tier::Veteran);
        assert_eq!(Tier::from_level(70), Tier::Elite);
        assert_eq!(Tier::from_level(94), Tier::Elite);
        assert_eq!(Tier::from_level(95), Tier::Legend);
        assert_eq!(Tier::from_level(100), Tier::Legend);
    }

    #[test]
    fn test_tiers_are_ascending() {
        let thresholds: Vec<_> = Tier::iter().map(Tier::min_level).collect();
        assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_names() {
        assert_eq!(Tier::Rookie.to_string(), "Rookie");
        assert_eq!(Tier::Legend.to_string(), "Legend");
        assert_eq!(serde_json::to_string(&Tier::Veteran).unwrap(), "\"Veteran\"");
    }
}
