use core::convert::TryFrom;

/// Error returned when a byte cannot be converted to a `RoverStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStatus;

/// Outcome of a motion or laser command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoverStatus {
    /// Command accepted.
    Ok = 0x00,
    /// Command failed.
    Err = 0x01,
    /// The rover could not move because an obstacle is in the way.
    Blocked = 0x02,
}

impl TryFrom<u8> for RoverStatus {
    type Error = InvalidStatus;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::Ok),
            0x01 => Ok(Self::Err),
            0x02 => Ok(Self::Blocked),
            _ => Err(InvalidStatus),
        }
    }
}

impl RoverStatus {
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Failure word reported back to the operator, `None` on success.
    #[must_use]
    pub const fn reason(self) -> Option<&'static str> {
        match self {
            Self::Ok => None,
            Self::Err => Some("error"),
            Self::Blocked => Some("blocked"),
        }
    }
}
