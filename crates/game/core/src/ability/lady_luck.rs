//! LadyLuck dice table.

/// What a LadyLuck roll does. Bands are checked top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LuckOutcome {
    /// Double one: the caster is cursed and loses time.
    SnakeEyes,
    /// Double six: a free attack that always hits and crits.
    Boxcars,
    /// Sum of 3 or 11.
    CarefulAim,
    /// Sum of 4 or 10.
    QuickRoll,
    /// Any other pair: a free RapidStrike or SnapShot.
    FreeStrike,
    Nothing,
}

/// Reads two d6 results.
pub fn read_dice(first: u8, second: u8) -> LuckOutcome {
    match (first, second, first.saturating_add(second)) {
        (1, 1, _) => LuckOutcome::SnakeEyes,
        (6, 6, _) => LuckOutcome::Boxcars,
        (_, _, 3 | 11) => LuckOutcome::CarefulAim,
        (_, _, 4 | 10) => LuckOutcome::QuickRoll,
        (a, b, _) if a == b => LuckOutcome::FreeStrike,
        _ => LuckOutcome::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_of_two_and_five_fall_into_the_sum_band() {
        assert_eq!(read_dice(2, 2), LuckOutcome::QuickRoll);
        assert_eq!(read_dice(5, 5), LuckOutcome::QuickRoll);
        assert_eq!(read_dice(3, 3), LuckOutcome::FreeStrike);
        assert_eq!(read_dice(4, 4), LuckOutcome::FreeStrike);
    }

    #[test]
    fn every_face_pair_has_an_outcome() {
        let mut nothing = 0;
        for a in 1..=6u8 {
            for b in 1..=6u8 {
                if read_dice(a, b) == LuckOutcome::Nothing {
                    nothing += 1;
                }
            }
        }
        // 36 pairs minus 2 extreme doubles, 4 pairs summing 3/11, 6 summing
        // 4/10 (two of them doubles) and the two remaining doubles.
        assert_eq!(nothing, 36 - 2 - 4 - 6 - 2);
    }

    #[test]
    fn extremes() {
        assert_eq!(read_dice(1, 1), LuckOutcome::SnakeEyes);
        assert_eq!(read_dice(6, 6), LuckOutcome::Boxcars);
        assert_eq!(read_dice(1, 2), LuckOutcome::CarefulAim);
        assert_eq!(read_dice(6, 5), LuckOutcome::CarefulAim);
        assert_eq!(read_dice(6, 4), LuckOutcome::QuickRoll);
        assert_eq!(read_dice(2, 5), LuckOutcome::Nothing);
    }
}
