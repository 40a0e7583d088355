//! Theoretical win probabilities, kept as reference data.
//!
//! These are the hand-derived distributions for each game size and variant.
//! Front-ends show them next to live results, and the tests use them to
//! check the engine against theory. The non-bonus entries are exact
//! fractions over the 36 / 1296 equally likely rolls; the bonus entries are
//! analytic approximations of full-auto bonus play and are only accurate to
//! a few decimal places — don't treat them as exact.

use serde::{Deserialize, Serialize};

use crate::bonus::BonusMode;
use crate::config::{GameConfig, GameSize};
use crate::matching::MatchRule;
use crate::prize::Prize;

/// Which reference distribution to look up. The bonus column tabulates
/// full-auto bonus play under the positional rule only — the combinations
/// the original game ever derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableVariant {
    /// Positional rule, no bonus.
    Positional,
    /// Set-membership rule, no bonus.
    SetMembership,
    /// Positional rule with the automatic bonus reroll.
    FullAutoBonus,
}

const TWO_POSITIONAL: [(Prize, f64); 3] = [
    (Prize::TwoDiceFirst, 1.0 / 36.0),
    (Prize::TwoDiceSecond, 10.0 / 36.0),
    (Prize::TwoDiceLoser, 25.0 / 36.0),
];

const TWO_MEMBERSHIP: [(Prize, f64); 3] = [
    (Prize::TwoDiceFirst, 2.0 / 36.0),
    (Prize::TwoDiceSecond, 18.0 / 36.0),
    (Prize::TwoDiceLoser, 16.0 / 36.0),
];

// A second-prize roll upgrades when its one mismatched die rerolls into a
// hit (1/6); a losing roll stays losing because two misses cannot reach
// two hits in one pass.
const TWO_BONUS: [(Prize, f64); 3] = [
    (Prize::TwoDiceFirst, 1.0 / 36.0 + (10.0 / 36.0) * (1.0 / 6.0)),
    (Prize::TwoDiceSecond, 10.0 / 36.0 - (10.0 / 36.0) * (1.0 / 6.0)),
    (Prize::TwoDiceLoser, 25.0 / 36.0),
];

const FOUR_POSITIONAL: [(Prize, f64); 4] = [
    (Prize::FourDiceGrand, 1.0 / 1296.0),
    (Prize::FourDiceSecond, 20.0 / 1296.0),
    (Prize::FourDiceThird, 150.0 / 1296.0),
    (Prize::FourDiceLoser, 1125.0 / 1296.0),
];

const FOUR_MEMBERSHIP: [(Prize, f64); 4] = [
    (Prize::FourDiceGrand, 24.0 / 1296.0),
    (Prize::FourDiceSecond, 336.0 / 1296.0),
    (Prize::FourDiceThird, 660.0 / 1296.0),
    (Prize::FourDiceLoser, 276.0 / 1296.0),
];

// Numerically approximated; sums to ~0.9998 rather than 1.
const FOUR_BONUS: [(Prize, f64); 4] = [
    (Prize::FourDiceGrand, 0.008_716_9),
    (Prize::FourDiceSecond, 0.079_244),
    (Prize::FourDiceThird, 0.270_151),
    (Prize::FourDiceLoser, 0.641_888_9),
];

/// The reference distribution for a size and variant, as `(tier,
/// probability)` pairs in descending tier order.
pub fn table(size: GameSize, variant: TableVariant) -> &'static [(Prize, f64)] {
    match (size, variant) {
        (GameSize::Two, TableVariant::Positional) => &TWO_POSITIONAL,
        (GameSize::Two, TableVariant::SetMembership) => &TWO_MEMBERSHIP,
        (GameSize::Two, TableVariant::FullAutoBonus) => &TWO_BONUS,
        (GameSize::Four, TableVariant::Positional) => &FOUR_POSITIONAL,
        (GameSize::Four, TableVariant::SetMembership) => &FOUR_MEMBERSHIP,
        (GameSize::Four, TableVariant::FullAutoBonus) => &FOUR_BONUS,
    }
}

/// The reference distribution matching a live configuration, if one was
/// ever derived.
///
/// Bonus play is only tabulated under the positional rule; a membership
/// game with a bonus returns `None` ("no disponible"). Both bonus modes map
/// onto the full-auto column — the selective variant has no table of its
/// own since its odds depend on the player's choices.
pub fn for_config(config: &GameConfig) -> Option<&'static [(Prize, f64)]> {
    match (config.bonus, config.rule) {
        (BonusMode::Off, MatchRule::Positional) => {
            Some(table(config.size, TableVariant::Positional))
        }
        (BonusMode::Off, MatchRule::SetMembership) => {
            Some(table(config.size, TableVariant::SetMembership))
        }
        (_, MatchRule::Positional) => Some(table(config.size, TableVariant::FullAutoBonus)),
        (_, MatchRule::SetMembership) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonus::BonusMode;

    const VARIANTS: [TableVariant; 3] = [
        TableVariant::Positional,
        TableVariant::SetMembership,
        TableVariant::FullAutoBonus,
    ];

    fn total(entries: &[(Prize, f64)]) -> f64 {
        entries.iter().map(|(_, p)| p).sum()
    }

    #[test]
    fn exact_tables_sum_to_one() {
        for &size in GameSize::all() {
            for variant in [TableVariant::Positional, TableVariant::SetMembership] {
                let sum = total(table(size, variant));
                assert!((sum - 1.0).abs() < 1e-9, "{size} {variant:?}: {sum}");
            }
        }
    }

    #[test]
    fn approximate_tables_sum_near_one() {
        for &size in GameSize::all() {
            let sum = total(table(size, TableVariant::FullAutoBonus));
            assert!((sum - 1.0).abs() < 1e-3, "{size}: {sum}");
        }
    }

    #[test]
    fn probabilities_are_probabilities() {
        for &size in GameSize::all() {
            for variant in VARIANTS {
                for &(prize, p) in table(size, variant) {
                    assert!((0.0..=1.0).contains(&p), "{prize}: {p}");
                }
            }
        }
    }

    #[test]
    fn tiers_match_the_size() {
        for variant in VARIANTS {
            for &(prize, _) in table(GameSize::Two, variant) {
                assert!(matches!(
                    prize,
                    Prize::TwoDiceFirst | Prize::TwoDiceSecond | Prize::TwoDiceLoser
                ));
            }
            assert_eq!(table(GameSize::Two, variant).len(), 3);
            assert_eq!(table(GameSize::Four, variant).len(), 4);
        }
    }

    #[test]
    fn bonus_shifts_mass_toward_the_top_tier() {
        let plain = table(GameSize::Two, TableVariant::Positional);
        let bonus = table(GameSize::Two, TableVariant::FullAutoBonus);
        assert!(bonus[0].1 > plain[0].1);
        assert!(bonus[1].1 < plain[1].1);
    }

    #[test]
    fn config_lookup() {
        let cfg = GameConfig::new(GameSize::Two, MatchRule::Positional, BonusMode::Off);
        assert_eq!(
            for_config(&cfg).unwrap()[0].1,
            table(GameSize::Two, TableVariant::Positional)[0].1
        );

        let cfg = GameConfig::new(GameSize::Four, MatchRule::Positional, BonusMode::FullAuto);
        assert_eq!(
            for_config(&cfg).unwrap()[0].1,
            table(GameSize::Four, TableVariant::FullAutoBonus)[0].1
        );

        // Selective bonus shares the full-auto column.
        let cfg = GameConfig::new(GameSize::Two, MatchRule::Positional, BonusMode::Selective);
        assert_eq!(
            for_config(&cfg).unwrap()[0].1,
            table(GameSize::Two, TableVariant::FullAutoBonus)[0].1
        );

        // Membership + bonus was never derived.
        let cfg = GameConfig::new(GameSize::Two, MatchRule::SetMembership, BonusMode::FullAuto);
        assert!(for_config(&cfg).is_none());
    }
}
