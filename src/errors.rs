use core::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidValue,
    InvalidDirection,
    InvalidPacket,
}

impl Error {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidValue => "Invalid value",
            Self::InvalidDirection => "Invalid direction combination",
            Self::InvalidPacket => "Invalid command line",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
