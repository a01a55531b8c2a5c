use crate::game::PickupKind;
use enum_map::{enum_map, EnumMap};
use serde::Deserialize;

/// Gameplay options that the player can toggle
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(from = "RawOptions")]
pub struct Options {
    /// Whether pickups appear & disappear on their own
    pub chaos: bool,

    /// Draw a worm instead of a snake.  Purely cosmetic; the engine only
    /// stores it for the presentation layer.
    pub worm: bool,

    enabled: EnumMap<PickupKind, bool>,
}

impl Options {
    pub fn set_chaos(&mut self, chaos: bool) {
        self.chaos = chaos;
    }

    pub fn set_worm(&mut self, worm: bool) {
        self.worm = worm;
    }

    /// Enable or disable a kind of pickup.  Food cannot be disabled, as it is
    /// what disabled kinds are replaced with.
    pub fn set_pickup_enabled(&mut self, kind: PickupKind, enabled: bool) {
        if kind != PickupKind::Food {
            self.enabled[kind] = enabled;
        }
    }

    pub fn pickup_enabled(&self, kind: PickupKind) -> bool {
        self.enabled[kind]
    }

    /// Iterate over the kinds of pickups that have been disabled
    pub fn disabled_pickups(&self) -> impl Iterator<Item = PickupKind> + '_ {
        self.enabled
            .iter()
            .filter_map(|(kind, &enabled)| (!enabled).then_some(kind))
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            chaos: false,
            worm: false,
            enabled: enum_map! { _ => true },
        }
    }
}

/// Options as written in the configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawOptions {
    chaos: bool,
    worm: bool,
    disabled_pickups: Vec<PickupKind>,
}

impl From<RawOptions> for Options {
    fn from(value: RawOptions) -> Options {
        let mut opts = Options {
            chaos: value.chaos,
            worm: value.worm,
            ..Options::default()
        };
        for kind in value.disabled_pickups {
            opts.set_pickup_enabled(kind, false);
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_enabled_by_default() {
        let opts = Options::default();
        assert!(!opts.chaos);
        assert!(!opts.worm);
        assert_eq!(opts.disabled_pickups().count(), 0);
    }

    #[test]
    fn toggle_pickup() {
        let mut opts = Options::default();
        opts.set_pickup_enabled(PickupKind::Lethal, false);
        assert!(!opts.pickup_enabled(PickupKind::Lethal));
        assert_eq!(
            opts.disabled_pickups().collect::<Vec<_>>(),
            [PickupKind::Lethal]
        );
        opts.set_pickup_enabled(PickupKind::Lethal, true);
        assert!(opts.pickup_enabled(PickupKind::Lethal));
    }

    #[test]
    fn food_cannot_be_disabled() {
        let mut opts = Options::default();
        opts.set_pickup_enabled(PickupKind::Food, false);
        assert!(opts.pickup_enabled(PickupKind::Food));
    }

    #[test]
    fn from_raw() {
        let opts = Options::from(RawOptions {
            chaos: true,
            worm: false,
            disabled_pickups: vec![PickupKind::Penalty, PickupKind::Food, PickupKind::SpeedUp],
        });
        assert!(opts.chaos);
        assert_eq!(
            opts.disabled_pickups().collect::<Vec<_>>(),
            [PickupKind::SpeedUp, PickupKind::Penalty]
        );
    }
}
