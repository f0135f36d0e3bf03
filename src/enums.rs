use crate::Error;

/// Actuator group a command is aimed at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoverMotors {
    Wheels = 0x00,
    Camera = 0x01,
}

impl RoverMotors {
    #[must_use]
    pub const fn key(self) -> u8 {
        match self {
            Self::Wheels => b'w',
            Self::Camera => b'c',
        }
    }

    pub(crate) const fn from_key(key: u8) -> Option<Self> {
        match key {
            b'w' => Some(Self::Wheels),
            b'c' => Some(Self::Camera),
            _ => None,
        }
    }

    /// # Errors
    /// Returns `Error::InvalidValue` for anything but `wheels` or `camera`.
    pub fn from_word(word: &str) -> Result<Self, Error> {
        match word {
            "wheels" => Ok(Self::Wheels),
            "camera" => Ok(Self::Camera),
            _ => Err(Error::InvalidValue),
        }
    }
}

/// Step count sentinel: keep the motor running until told to stop.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MotorSteps {
    Infinite = 0x00,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LaserAction {
    On = 0x00,
    Off = 0x01,
    Blink = 0x02,
}

impl LaserAction {
    #[must_use]
    pub const fn key(self) -> u8 {
        match self {
            Self::On => b'i',
            Self::Off => b'o',
            Self::Blink => b'b',
        }
    }

    pub(crate) const fn from_key(key: u8) -> Option<Self> {
        match key {
            b'i' => Some(Self::On),
            b'o' => Some(Self::Off),
            b'b' => Some(Self::Blink),
            _ => None,
        }
    }

    /// # Errors
    /// Returns `Error::InvalidValue` for anything but `on`, `off` or `blink`.
    pub fn from_word(word: &str) -> Result<Self, Error> {
        match word {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "blink" => Ok(Self::Blink),
            _ => Err(Error::InvalidValue),
        }
    }
}
