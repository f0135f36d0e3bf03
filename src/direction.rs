use bitflags::bitflags;

use crate::Error;

/// Wheel motion command. Exactly one of these is active at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoverDirection {
    /// Halt the wheels.
    Stop = 0,
    Forward = 1,
    Back = 2,
    Left = 3,
    ForwardLeft = 4,
    BackLeft = 5,
    ForwardRight = 6,
    BackRight = 7,
    Right = 8,
    /// Spin in place, clockwise.
    Cw = 9,
    /// Spin in place, counter-clockwise.
    Ccw = 10,
}

bitflags! {
    /// Single movement words a rover direction is assembled from.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    struct Heading: u8 {
        const FORWARD = 1 << 0;
        const BACK = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const CW = 1 << 4;
        const CCW = 1 << 5;
    }
}

impl Heading {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "forward" => Some(Self::FORWARD),
            "back" => Some(Self::BACK),
            "left" => Some(Self::LEFT),
            "right" => Some(Self::RIGHT),
            "cw" => Some(Self::CW),
            "ccw" => Some(Self::CCW),
            _ => None,
        }
    }

    const fn from_key(key: u8) -> Option<Self> {
        match key {
            b'w' => Some(Self::FORWARD),
            b's' => Some(Self::BACK),
            b'a' => Some(Self::LEFT),
            b'd' => Some(Self::RIGHT),
            b'e' => Some(Self::CW),
            b'q' => Some(Self::CCW),
            _ => None,
        }
    }
}

impl RoverDirection {
    /// Every direction, indexed by discriminant.
    pub const ALL: [Self; 11] = [
        Self::Stop,
        Self::Forward,
        Self::Back,
        Self::Left,
        Self::ForwardLeft,
        Self::BackLeft,
        Self::ForwardRight,
        Self::BackRight,
        Self::Right,
        Self::Cw,
        Self::Ccw,
    ];

    const fn heading(self) -> Heading {
        match self {
            Self::Stop => Heading::empty(),
            Self::Forward => Heading::FORWARD,
            Self::Back => Heading::BACK,
            Self::Left => Heading::LEFT,
            Self::ForwardLeft => Heading::FORWARD.union(Heading::LEFT),
            Self::BackLeft => Heading::BACK.union(Heading::LEFT),
            Self::ForwardRight => Heading::FORWARD.union(Heading::RIGHT),
            Self::BackRight => Heading::BACK.union(Heading::RIGHT),
            Self::Right => Heading::RIGHT,
            Self::Cw => Heading::CW,
            Self::Ccw => Heading::CCW,
        }
    }

    fn from_heading(heading: Heading) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.heading() == heading)
            .ok_or(Error::InvalidDirection)
    }

    /// Resolves an unordered set of direction words (`forward`, `back`,
    /// `left`, `right`, `cw`, `ccw`) into a single direction.
    ///
    /// Repeated words count once. Only the single words and a
    /// `forward`/`back` word paired with a `left`/`right` word are accepted.
    ///
    /// # Errors
    /// Returns `Error::InvalidDirection` for an empty set, an unknown word,
    /// or a combination that is not a rover direction.
    pub fn from_names<'a, I>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut heading = Heading::empty();
        for name in names {
            heading |= Heading::from_word(name).ok_or(Error::InvalidDirection)?;
        }
        if heading.is_empty() {
            return Err(Error::InvalidDirection);
        }
        Self::from_heading(heading)
    }

    /// Resolves serial key letters into a direction. Key order is irrelevant
    /// and no keys at all means `Stop`.
    ///
    /// # Errors
    /// Returns `Error::InvalidDirection` on an unknown key or a combination
    /// that is not a rover direction.
    pub fn from_keys(keys: &[u8]) -> Result<Self, Error> {
        let mut heading = Heading::empty();
        for &key in keys {
            heading |= Heading::from_key(key).ok_or(Error::InvalidDirection)?;
        }
        Self::from_heading(heading)
    }

    /// Serial key letters for this direction.
    #[must_use]
    pub const fn keys(self) -> &'static str {
        match self {
            Self::Stop => "",
            Self::Forward => "w",
            Self::Back => "s",
            Self::Left => "a",
            Self::ForwardLeft => "wa",
            Self::BackLeft => "sa",
            Self::ForwardRight => "wd",
            Self::BackRight => "sd",
            Self::Right => "d",
            Self::Cw => "e",
            Self::Ccw => "q",
        }
    }
}

impl TryFrom<u8> for RoverDirection {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(Error::InvalidValue)
    }
}

bitflags! {
    /// Pan/tilt camera motion as a set of simultaneously active flags.
    ///
    /// `UP`/`DOWN` tilt and `CW`/`CCW` pan. The operators never validate:
    /// contradictory sets such as `UP | DOWN` and bits without a name are
    /// carried through unchanged.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CamDirection: u8 {
        const UP = 1;
        const DOWN = 2;
        const CW = 4;
        const CCW = 8;
    }
}

const CAM_KEYS: [(CamDirection, u8); 4] = [
    (CamDirection::UP, b'r'),
    (CamDirection::DOWN, b'f'),
    (CamDirection::CW, b'e'),
    (CamDirection::CCW, b'q'),
];

impl CamDirection {
    /// No camera motion.
    pub const STOP: Self = Self::empty();

    #[must_use]
    pub const fn is_stop(self) -> bool {
        self.is_empty()
    }

    /// ORs `other` into `self` and hands back `self` for further chaining.
    pub fn merge(&mut self, other: Self) -> &mut Self {
        *self |= other;
        self
    }

    /// Parses a single camera direction word (`stop`, `up`, `down`, `cw`, `ccw`).
    ///
    /// # Errors
    /// Returns `Error::InvalidDirection` for any other word.
    pub fn from_word(word: &str) -> Result<Self, Error> {
        match word {
            "stop" => Ok(Self::STOP),
            "up" => Ok(Self::UP),
            "down" => Ok(Self::DOWN),
            "cw" => Ok(Self::CW),
            "ccw" => Ok(Self::CCW),
            _ => Err(Error::InvalidDirection),
        }
    }

    /// ORs together the flags named by serial key letters.
    ///
    /// # Errors
    /// Returns `Error::InvalidDirection` on an unknown key.
    pub fn from_keys(keys: &[u8]) -> Result<Self, Error> {
        keys.iter().try_fold(Self::STOP, |acc, &key| {
            CAM_KEYS
                .iter()
                .find(|&&(_, k)| k == key)
                .map(|&(flag, _)| acc | flag)
                .ok_or(Error::InvalidDirection)
        })
    }

    /// Serial key letters of the named flags that are set, in
    /// `UP`, `DOWN`, `CW`, `CCW` order.
    pub fn keys(self) -> impl Iterator<Item = u8> {
        CAM_KEYS
            .into_iter()
            .filter(move |&(flag, _)| self.contains(flag))
            .map(|(_, key)| key)
    }
}

impl From<u8> for CamDirection {
    fn from(bits: u8) -> Self {
        Self::from_bits_retain(bits)
    }
}

impl From<CamDirection> for u8 {
    fn from(direction: CamDirection) -> Self {
        direction.bits()
    }
}
