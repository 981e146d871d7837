use serde::{Deserialize, Serialize};

use crate::*;

/// Invertible record of a single cell change.
///
/// Besides the cell's before/after `revealed` and `flagged` bits a delta carries the board
/// status before and after. Within a sequence produced by one action only the last delta may
/// carry a status transition, so sequences must be applied in order and reverted in reverse.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    coords: Coord2,
    prev_revealed: bool,
    prev_flagged: bool,
    next_revealed: bool,
    next_flagged: bool,
    prev_status: GameStatus,
    next_status: GameStatus,
}

impl Delta {
    /// A cell going from unrevealed to revealed, flag untouched.
    pub const fn reveal(
        coords: Coord2,
        flagged: bool,
        prev_status: GameStatus,
        next_status: GameStatus,
    ) -> Self {
        Self {
            coords,
            prev_revealed: false,
            prev_flagged: flagged,
            next_revealed: true,
            next_flagged: flagged,
            prev_status,
            next_status,
        }
    }

    /// A flag flip on a cell whose revealed state and board status stay as they are.
    pub const fn flag(
        coords: Coord2,
        revealed: bool,
        prev_flagged: bool,
        status: GameStatus,
    ) -> Self {
        Self {
            coords,
            prev_revealed: revealed,
            prev_flagged,
            next_revealed: revealed,
            next_flagged: !prev_flagged,
            prev_status: status,
            next_status: status,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn prev_revealed(&self) -> bool {
        self.prev_revealed
    }

    pub const fn prev_flagged(&self) -> bool {
        self.prev_flagged
    }

    pub const fn next_revealed(&self) -> bool {
        self.next_revealed
    }

    pub const fn next_flagged(&self) -> bool {
        self.next_flagged
    }

    pub const fn prev_status(&self) -> GameStatus {
        self.prev_status
    }

    pub const fn next_status(&self) -> GameStatus {
        self.next_status
    }

    pub const fn reveals_cell(&self) -> bool {
        !self.prev_revealed && self.next_revealed
    }

    pub fn changes_status(&self) -> bool {
        self.prev_status != self.next_status
    }

    /// The same change in the opposite direction; applying it equals reverting `self`.
    pub const fn inverse(&self) -> Self {
        Self {
            coords: self.coords,
            prev_revealed: self.next_revealed,
            prev_flagged: self.next_flagged,
            next_revealed: self.prev_revealed,
            next_flagged: self.prev_flagged,
            prev_status: self.next_status,
            next_status: self.prev_status,
        }
    }

    pub(crate) const fn with_next_status(self, next_status: GameStatus) -> Self {
        Self {
            next_status,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GameStatus::*;

    #[test]
    fn reveal_delta_fields() {
        let delta = Delta::reveal((1, 2), false, Running, Lost);

        assert_eq!(delta.coords(), (1, 2));
        assert!(delta.reveals_cell());
        assert!(!delta.prev_flagged() && !delta.next_flagged());
        assert!(delta.changes_status());
    }

    #[test]
    fn flag_delta_keeps_status() {
        let delta = Delta::flag((0, 0), false, false, Running);

        assert!(delta.next_flagged());
        assert!(!delta.reveals_cell());
        assert!(!delta.changes_status());
    }

    #[test]
    fn inverse_is_involution() {
        let delta = Delta::reveal((3, 4), false, Running, Won);

        assert_eq!(delta.inverse().inverse(), delta);
        assert_eq!(delta.inverse().next_status(), Running);
        assert!(!delta.inverse().next_revealed());
    }

    #[test]
    fn amending_status_touches_only_status() {
        let delta = Delta::reveal((0, 1), false, Running, Running).with_next_status(Won);

        assert_eq!(delta.prev_status(), Running);
        assert_eq!(delta.next_status(), Won);
        assert_eq!(delta.coords(), (0, 1));
    }

    #[test]
    fn serialized_shape() {
        let delta = Delta::flag((2, 5), false, true, Running);
        let json = serde_json::to_string(&delta).unwrap();

        assert_eq!(
            json,
            concat!(
                r#"{"coords":[2,5],"prev_revealed":false,"prev_flagged":true,"#,
                r#""next_revealed":false,"next_flagged":false,"#,
                r#""prev_status":"Running","next_status":"Running"}"#,
            )
        );
    }
}
