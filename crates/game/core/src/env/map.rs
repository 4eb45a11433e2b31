use crate::state::RoomId;

/// Room graph queried by flee and wander logic.
pub trait MapOracle {
    /// Exits leading out of `room`, in a stable order.
    fn exits(&self, room: RoomId) -> Vec<Exit>;

    /// Seconds needed to leave `room`.
    fn travel_time(&self, _room: RoomId) -> f32 {
        1.0
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ExitFlags: u8 {
        const LOCKED    = 1 << 0;
        /// Looks like an exit but leads nowhere.
        const FAKE      = 1 << 1;
        const OPENABLE  = 1 << 2;
        const CLOSED    = 1 << 3;
        /// Passable, but fleeing creatures avoid it when they can.
        const DANGEROUS = 1 << 4;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exit {
    pub direction: Direction,
    pub destination: RoomId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: ExitFlags,
}

impl Exit {
    pub const fn new(direction: Direction, destination: RoomId) -> Self {
        Self {
            direction,
            destination,
            flags: ExitFlags::empty(),
        }
    }

    pub const fn with_flags(mut self, flags: ExitFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether a creature can pass, given whether it can open doors.
    pub fn is_passable(&self, opens_doors: bool) -> bool {
        if self.flags.intersects(ExitFlags::LOCKED | ExitFlags::FAKE) {
            return false;
        }
        let shut = self.flags.contains(ExitFlags::CLOSED | ExitFlags::OPENABLE);
        !shut || opens_doors
    }

    pub fn is_dangerous(&self) -> bool {
        self.flags.contains(ExitFlags::DANGEROUS)
    }
}
