//! Which player owns which mark.
//!
//! Player identities are opaque here. The game itself only ever sees the
//! [`FieldState`] a player is entitled to place.

use crate::{FieldState, SeatError};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Owners of the Cross and Nought seats at one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seats<P> {
    crosses: Option<P>,
    noughts: Option<P>,
}

impl<P> Seats<P> {
    /// Both seats free.
    pub fn new() -> Self {
        Self {
            crosses: None,
            noughts: None,
        }
    }

    /// Player holding the Cross seat.
    pub fn crosses(&self) -> Option<&P> {
        self.crosses.as_ref()
    }

    /// Player holding the Nought seat.
    pub fn noughts(&self) -> Option<&P> {
        self.noughts.as_ref()
    }

    /// True if nobody plays `mark`. `Empty` is never free.
    pub fn is_free(&self, mark: FieldState) -> bool {
        match mark {
            FieldState::Cross => self.crosses.is_none(),
            FieldState::Nought => self.noughts.is_none(),
            FieldState::Empty => false,
        }
    }

    fn seat_mut(&mut self, mark: FieldState) -> Result<&mut Option<P>, SeatError> {
        match mark {
            FieldState::Cross => Ok(&mut self.crosses),
            FieldState::Nought => Ok(&mut self.noughts),
            FieldState::Empty => Err(SeatError::NoSuchSeat),
        }
    }
}

impl<P: PartialEq + std::fmt::Debug> Seats<P> {
    /// Seats restored from storage.
    ///
    /// # Errors
    ///
    /// [`SeatError::AlreadySeated`] if one player holds both seats.
    pub fn with_players(crosses: Option<P>, noughts: Option<P>) -> Result<Self, SeatError> {
        if crosses.is_some() && crosses == noughts {
            return Err(SeatError::AlreadySeated {
                mark: FieldState::Cross,
            });
        }
        Ok(Self { crosses, noughts })
    }

    /// Mark played by `player`, if seated.
    pub fn mark_of(&self, player: &P) -> Option<FieldState> {
        if self.crosses.as_ref() == Some(player) {
            Some(FieldState::Cross)
        } else if self.noughts.as_ref() == Some(player) {
            Some(FieldState::Nought)
        } else {
            None
        }
    }

    /// Seats `player` at `mark`.
    #[instrument(skip(self))]
    pub fn take(&mut self, mark: FieldState, player: P) -> Result<(), SeatError> {
        if let Some(held) = self.mark_of(&player) {
            return Err(SeatError::AlreadySeated { mark: held });
        }
        let seat = self.seat_mut(mark)?;
        if seat.is_some() {
            return Err(SeatError::SeatTaken { mark });
        }
        *seat = Some(player);
        debug!(%mark, "Seat taken");
        Ok(())
    }

    /// Seats `player` at the first free seat, Cross before Nought.
    #[instrument(skip(self))]
    pub fn join(&mut self, player: P) -> Result<FieldState, SeatError> {
        let mark = [FieldState::Cross, FieldState::Nought]
            .into_iter()
            .find(|&mark| self.is_free(mark))
            .ok_or(SeatError::TableFull)?;
        self.take(mark, player)?;
        Ok(mark)
    }
}

impl<P> Default for Seats<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_fills_cross_then_nought() {
        let mut seats = Seats::new();
        assert_eq!(seats.join("ann"), Ok(FieldState::Cross));
        assert_eq!(seats.join("bob"), Ok(FieldState::Nought));
        assert_eq!(seats.join("cid"), Err(SeatError::TableFull));
        assert_eq!(seats.mark_of(&"ann"), Some(FieldState::Cross));
        assert_eq!(seats.mark_of(&"bob"), Some(FieldState::Nought));
        assert_eq!(seats.mark_of(&"cid"), None);
    }

    #[test]
    fn test_take_specific_seat() {
        let mut seats = Seats::new();
        seats.take(FieldState::Nought, "ann").unwrap();
        assert!(seats.is_free(FieldState::Cross));
        assert!(!seats.is_free(FieldState::Nought));
        assert_eq!(
            seats.take(FieldState::Nought, "bob"),
            Err(SeatError::SeatTaken {
                mark: FieldState::Nought
            })
        );
        assert_eq!(seats.join("bob"), Ok(FieldState::Cross));
    }

    #[test]
    fn test_player_cannot_hold_both_seats() {
        let mut seats = Seats::new();
        seats.join("ann").unwrap();
        assert_eq!(
            seats.join("ann"),
            Err(SeatError::AlreadySeated {
                mark: FieldState::Cross
            })
        );
        assert!(seats.is_free(FieldState::Nought));
    }

    #[test]
    fn test_restored_seats_need_two_players() {
        assert_eq!(
            Seats::with_players(Some("ann"), Some("ann")),
            Err(SeatError::AlreadySeated {
                mark: FieldState::Cross
            })
        );
        let seats = Seats::with_players(Some("ann"), None).unwrap();
        assert!(seats.is_free(FieldState::Nought));
        assert!(Seats::<&str>::with_players(None, None).is_ok());
    }

    #[test]
    fn test_empty_is_not_a_seat() {
        let mut seats: Seats<&str> = Seats::new();
        assert!(!seats.is_free(FieldState::Empty));
        assert_eq!(
            seats.take(FieldState::Empty, "ann"),
            Err(SeatError::NoSuchSeat)
        );
    }
}
