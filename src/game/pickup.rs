use enum_map::Enum;
use serde::Deserialize;
use std::fmt;

/// The kinds of items that the snake can pick up
#[derive(Clone, Copy, Debug, Deserialize, Enum, Eq, Hash, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum PickupKind {
    Food,
    SpeedUp,
    SlowDown,
    Points,
    Growth,
    Penalty,
    Boost,
    Lethal,
}

impl PickupKind {
    /// Return the effect of consuming this pickup, or `None` if touching it is
    /// fatal
    pub fn effect(self) -> Option<Effect> {
        let (score, speed, growth) = match self {
            PickupKind::Food => (4, -10, 3),
            PickupKind::SpeedUp => (5, -40, 2),
            PickupKind::SlowDown => (5, 40, 2),
            PickupKind::Growth => (7, -10, 7),
            PickupKind::Points => (20, -5, 2),
            PickupKind::Penalty => (-15, 40, 1),
            PickupKind::Boost => (20, -30, 4),
            PickupKind::Lethal => return None,
        };
        Some(Effect {
            score,
            speed,
            growth,
        })
    }

    pub fn is_lethal(self) -> bool {
        self == PickupKind::Lethal
    }

    /// Map a draw in `1..=100` to the kind whose band contains it.  Chaos
    /// mode carves a lethal band out of the top of the food band.  Draws
    /// outside `1..=100` select nothing.
    pub fn from_draw(draw: u32, chaos: bool) -> Option<PickupKind> {
        match draw {
            1..=39 => Some(PickupKind::Food),
            40..=49 if chaos => Some(PickupKind::Lethal),
            40..=49 => Some(PickupKind::Food),
            50..=59 => Some(PickupKind::SpeedUp),
            60..=69 => Some(PickupKind::SlowDown),
            70..=79 => Some(PickupKind::Growth),
            80..=89 => Some(PickupKind::Points),
            90..=94 => Some(PickupKind::Penalty),
            95..=100 => Some(PickupKind::Boost),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PickupKind::Food => "food",
            PickupKind::SpeedUp => "speed-up",
            PickupKind::SlowDown => "slow-down",
            PickupKind::Points => "points",
            PickupKind::Growth => "growth",
            PickupKind::Penalty => "penalty",
            PickupKind::Boost => "boost",
            PickupKind::Lethal => "lethal",
        }
    }
}

impl fmt::Display for PickupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// What consuming a pickup does to the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Effect {
    /// Change in score
    pub score: i32,

    /// Change in tick interval, in milliseconds; negative values speed the
    /// snake up
    pub speed: i32,

    /// Number of segments to add to the snake
    pub growth: usize,
}
