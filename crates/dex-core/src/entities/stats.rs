use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

/// Valid range for every base stat.
pub const STAT_RANGE: RangeInclusive<u16> = 1..=255;

/// Stored for a stat the store holds as null, missing, or not a whole number.
/// It lies outside [`STAT_RANGE`].
const UNSET: u16 = 0;

// ---------------------------------------------------------------------------
// Stat
// ---------------------------------------------------------------------------

/// One of the six base stats, in the order the data store serializes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Self; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpAttack,
        Self::SpDefense,
        Self::Speed,
    ];

    /// Key used by the data store for this stat.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpAttack => "Sp. Attack",
            Self::SpDefense => "Sp. Defense",
            Self::Speed => "Speed",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stat {
    type Err = CoreError;

    /// Accepts the store key (`Sp. Attack`) as well as CLI spellings
    /// (`sp-attack`, `special_attack`, `spatk`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "hp" => Ok(Self::Hp),
            "attack" | "atk" => Ok(Self::Attack),
            "defense" | "def" => Ok(Self::Defense),
            "spattack" | "specialattack" | "spatk" => Ok(Self::SpAttack),
            "spdefense" | "specialdefense" | "spdef" => Ok(Self::SpDefense),
            "speed" | "spe" => Ok(Self::Speed),
            _ => Err(CoreError::Validation(format!("unknown stat '{s}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// BaseStats
// ---------------------------------------------------------------------------

/// Base stats of an entry: a fixed key set rather than an open map.
///
/// Decoding never fails on a stat value. Null, missing, fractional or negative values decode as 0, and
/// numeric strings are accepted. [`validate`] enforces [`STAT_RANGE`] before
/// anything is sent back, so an unset stat has to be fixed first.
///
/// [`validate`]: BaseStats::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(rename = "HP", default, deserialize_with = "lenient_stat")]
    pub hp: u16,
    #[serde(rename = "Attack", default, deserialize_with = "lenient_stat")]
    pub attack: u16,
    #[serde(rename = "Defense", default, deserialize_with = "lenient_stat")]
    pub defense: u16,
    #[serde(rename = "Sp. Attack", default, deserialize_with = "lenient_stat")]
    pub sp_attack: u16,
    #[serde(rename = "Sp. Defense", default, deserialize_with = "lenient_stat")]
    pub sp_defense: u16,
    #[serde(rename = "Speed", default, deserialize_with = "lenient_stat")]
    pub speed: u16,
}

impl BaseStats {
    #[must_use]
    pub const fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpAttack => self.sp_attack,
            Stat::SpDefense => self.sp_defense,
            Stat::Speed => self.speed,
        }
    }

    pub const fn set(&mut self, stat: Stat, value: u16) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpAttack => self.sp_attack = value,
            Stat::SpDefense => self.sp_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Stats in store order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u16)> + '_ {
        Stat::ALL.into_iter().map(|stat| (stat, self.get(stat)))
    }

    /// Check every stat lies within [`STAT_RANGE`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first out-of-range stat.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (stat, value) in self.iter() {
            if !STAT_RANGE.contains(&value) {
                return Err(CoreError::Validation(format!(
                    "{stat} must be between {} and {}, got {value}",
                    STAT_RANGE.start(),
                    STAT_RANGE.end()
                )));
            }
        }
        Ok(())
    }
}

fn lenient_stat<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let stat = match &value {
        serde_json::Value::Number(number) => number
            .as_u64()
            .and_then(|raw| u16::try_from(raw).ok()),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(stat.unwrap_or(UNSET))
}
