use crate::InvalidOutcomeError;

use super::cell::Player;

/// Terminal classification of a finished game.
///
/// Numeric ids follow the record format: 0 for a draw, otherwise the id of
/// the winning player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Outcome {
    #[display("Drawn game")]
    Draw,
    #[display("Won, {_0}!")]
    Win(Player),
}

impl Outcome {
    /// All outcomes in id order.
    pub const ALL: [Self; 3] = [Self::Draw, Self::Win(Player::One), Self::Win(Player::Two)];

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Draw => 0,
            Self::Win(player) => player.id(),
        }
    }

    #[must_use]
    pub const fn from_u8(id: u8) -> Option<Self> {
        match id {
            0 => Some(Self::Draw),
            _ => match Player::from_id(id) {
                Some(player) => Some(Self::Win(player)),
                None => None,
            },
        }
    }

    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Draw => None,
            Self::Win(player) => Some(player),
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = InvalidOutcomeError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_u8(id).ok_or(InvalidOutcomeError { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        for (id, outcome) in (0..).zip(Outcome::ALL) {
            assert_eq!(outcome.as_u8(), id);
            assert_eq!(Outcome::try_from(id), Ok(outcome));
        }
        assert_eq!(Outcome::try_from(3), Err(InvalidOutcomeError { id: 3 }));
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Draw.to_string(), "Drawn game");
        assert_eq!(Outcome::Win(Player::One).to_string(), "Won, player 1!");
        assert_eq!(Outcome::Win(Player::Two).to_string(), "Won, player 2!");
    }
}
