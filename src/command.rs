use crate::{CamDirection, Error, LaserAction, RoverDirection, RoverMotors, cmd};

/// One line of the host-to-controller serial protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `move <keys>`: drive the wheels.
    Move(RoverDirection),
    /// `move_cam <keys>`: tilt and/or pan the camera.
    MoveCam(CamDirection),
    /// `move_stop <keys>`: stop one motor group, or all of them when `None`.
    Stop(Option<RoverMotors>),
    /// `laser_ctrl <key>`
    Laser(LaserAction),
}

impl Command {
    /// Parses a single command line. A trailing `\n` or `\r\n` is optional.
    ///
    /// # Errors
    /// - `Error::InvalidPacket` if the command word is unknown.
    /// - `Error::InvalidDirection` if `move`/`move_cam` keys do not form a direction.
    /// - `Error::InvalidValue` if `move_stop`/`laser_ctrl` keys are missing or unknown.
    pub fn parse(line: &[u8]) -> Result<Self, Error> {
        parse_line(line).inspect_err(|err| {
            log::debug!(
                "rejected command line {:?}: {}",
                core::str::from_utf8(line).unwrap_or("<non-ascii>"),
                err
            );
        })
    }
}

fn parse_line(line: &[u8]) -> Result<Command, Error> {
    let line = match line {
        [rest @ .., b'\r', cmd::TERMINATOR] | [rest @ .., cmd::TERMINATOR] => rest,
        _ => line,
    };

    let (word, keys) = match line.iter().position(|&b| b == cmd::SEPARATOR) {
        Some(idx) => (&line[..idx], &line[idx + 1..]),
        None => (line, &[][..]),
    };

    match word {
        cmd::MOVE => RoverDirection::from_keys(keys).map(Command::Move),
        cmd::MOVE_CAM => CamDirection::from_keys(keys).map(Command::MoveCam),
        cmd::MOVE_STOP => parse_stop_keys(keys).map(Command::Stop),
        cmd::LASER_CTRL => match keys {
            [key] => LaserAction::from_key(*key)
                .map(Command::Laser)
                .ok_or(Error::InvalidValue),
            _ => Err(Error::InvalidValue),
        },
        _ => Err(Error::InvalidPacket),
    }
}

fn parse_stop_keys(keys: &[u8]) -> Result<Option<RoverMotors>, Error> {
    let mut wheels = false;
    let mut camera = false;
    for &key in keys {
        match RoverMotors::from_key(key).ok_or(Error::InvalidValue)? {
            RoverMotors::Wheels => wheels = true,
            RoverMotors::Camera => camera = true,
        }
    }

    match (wheels, camera) {
        (true, true) => Ok(None),
        (true, false) => Ok(Some(RoverMotors::Wheels)),
        (false, true) => Ok(Some(RoverMotors::Camera)),
        (false, false) => Err(Error::InvalidValue),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(
            Command::parse(b"move wa\n").unwrap(),
            Command::Move(RoverDirection::ForwardLeft)
        );
        assert_eq!(
            Command::parse(b"move e\r\n").unwrap(),
            Command::Move(RoverDirection::Cw)
        );
        assert_eq!(
            Command::parse(b"move \n").unwrap(),
            Command::Move(RoverDirection::Stop)
        );
        assert_eq!(
            Command::parse(b"move").unwrap(),
            Command::Move(RoverDirection::Stop)
        );
    }

    #[test]
    fn test_parse_move_bad_direction() {
        assert_eq!(Command::parse(b"move ws\n"), Err(Error::InvalidDirection));
        assert_eq!(Command::parse(b"move r\n"), Err(Error::InvalidDirection));
    }

    #[test]
    fn test_parse_move_cam() {
        assert_eq!(
            Command::parse(b"move_cam re\n").unwrap(),
            Command::MoveCam(CamDirection::UP | CamDirection::CW)
        );
        // Contradictory tilt is passed through to the controller.
        assert_eq!(
            Command::parse(b"move_cam rf\n").unwrap(),
            Command::MoveCam(CamDirection::UP | CamDirection::DOWN)
        );
        assert_eq!(Command::parse(b"move_cam w\n"), Err(Error::InvalidDirection));
    }

    #[test]
    fn test_parse_move_stop() {
        assert_eq!(
            Command::parse(b"move_stop w\n").unwrap(),
            Command::Stop(Some(RoverMotors::Wheels))
        );
        assert_eq!(
            Command::parse(b"move_stop c\n").unwrap(),
            Command::Stop(Some(RoverMotors::Camera))
        );
        assert_eq!(Command::parse(b"move_stop cw\n").unwrap(), Command::Stop(None));
        assert_eq!(Command::parse(b"move_stop \n"), Err(Error::InvalidValue));
        assert_eq!(Command::parse(b"move_stop x\n"), Err(Error::InvalidValue));
    }

    #[test]
    fn test_parse_laser() {
        assert_eq!(
            Command::parse(b"laser_ctrl i\n").unwrap(),
            Command::Laser(LaserAction::On)
        );
        assert_eq!(
            Command::parse(b"laser_ctrl b\n").unwrap(),
            Command::Laser(LaserAction::Blink)
        );
        assert_eq!(Command::parse(b"laser_ctrl io\n"), Err(Error::InvalidValue));
        assert_eq!(Command::parse(b"laser_ctrl\n"), Err(Error::InvalidValue));
    }

    #[test]
    fn test_parse_unknown_word() {
        assert_eq!(Command::parse(b"track w\n"), Err(Error::InvalidPacket));
        assert_eq!(Command::parse(b"\n"), Err(Error::InvalidPacket));
        assert_eq!(Command::parse(b"MOVE w\n"), Err(Error::InvalidPacket));
    }
}
