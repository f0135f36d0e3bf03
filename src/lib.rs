//! A `no_std` command vocabulary for a wheeled rover with a pan/tilt camera and a laser.
//!
//! The crate provides the direction, motor, laser and status types shared by the host and
//! the motor controller, bit-flag arithmetic for combining camera motions, and the ASCII
//! line protocol the host uses to drive the controller over a serial link. It is
//! transport-agnostic: the encoder produces byte buffers that you can send over any
//! serial interface (UART, USB-Serial, etc.).

#![no_std]

pub mod command;
pub mod direction;
pub mod enums;
mod errors;
pub mod status;

pub use command::Command;
pub use direction::{CamDirection, RoverDirection};
pub use enums::{LaserAction, MotorSteps, RoverMotors};
pub use errors::Error;
pub use status::{InvalidStatus, RoverStatus};

/// Longest encoded line is `move_cam rfeq\n`.
const CMD_BUFFER_SIZE: usize = 16;

mod cmd {
    pub const MOVE: &[u8] = b"move";
    pub const MOVE_CAM: &[u8] = b"move_cam";
    pub const MOVE_STOP: &[u8] = b"move_stop";
    pub const LASER_CTRL: &[u8] = b"laser_ctrl";

    pub const SEPARATOR: u8 = b' ';
    pub const TERMINATOR: u8 = b'\n';
}

/// Builds serial command lines for the rover's motor controller.
///
/// Each call overwrites the internal buffer and returns the finished line,
/// terminator included.
#[derive(Debug, Copy, Clone)]
pub struct CommandEncoder {
    buffer: [u8; CMD_BUFFER_SIZE],
}

impl Default for CommandEncoder {
    fn default() -> Self {
        Self {
            buffer: [0; CMD_BUFFER_SIZE],
        }
    }
}

impl CommandEncoder {
    /// Creates an encoder with a zeroed buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a command to drive the wheels. `Stop` produces an empty key list.
    pub fn move_rover(&mut self, direction: RoverDirection) -> &[u8] {
        self.build_command(cmd::MOVE, direction.keys().as_bytes())
    }

    /// Generates a command to move the camera.
    ///
    /// Only named flags go on the wire: bits without a name are dropped, so the
    /// line parses back to `direction.intersection(CamDirection::all())`.
    pub fn move_camera(&mut self, direction: CamDirection) -> &[u8] {
        let mut keys = [0u8; 4];
        let mut len = 0;
        for (slot, key) in keys.iter_mut().zip(direction.keys()) {
            *slot = key;
            len += 1;
        }
        self.build_command(cmd::MOVE_CAM, &keys[..len])
    }

    /// Generates a command to stop a motor group, or every motor when `motors` is `None`.
    pub fn stop_motors(&mut self, motors: Option<RoverMotors>) -> &[u8] {
        let all = [RoverMotors::Wheels.key(), RoverMotors::Camera.key()];
        let single;
        let keys: &[u8] = match motors {
            Some(motor) => {
                single = [motor.key()];
                &single
            }
            None => &all,
        };
        self.build_command(cmd::MOVE_STOP, keys)
    }

    /// Generates a command to switch the laser.
    pub fn laser(&mut self, action: LaserAction) -> &[u8] {
        self.build_command(cmd::LASER_CTRL, &[action.key()])
    }

    /// Generates the line for any `Command`.
    ///
    /// `Command::parse` gives back `command` for every command whose camera
    /// flags are all named; see `move_camera` for unnamed bits.
    pub fn encode(&mut self, command: &Command) -> &[u8] {
        match *command {
            Command::Move(direction) => self.move_rover(direction),
            Command::MoveCam(direction) => self.move_camera(direction),
            Command::Stop(motors) => self.stop_motors(motors),
            Command::Laser(action) => self.laser(action),
        }
    }

    fn build_command(&mut self, word: &[u8], keys: &[u8]) -> &[u8] {
        let mut len = word.len();
        self.buffer[..len].copy_from_slice(word);
        self.buffer[len] = cmd::SEPARATOR;
        len += 1;
        self.buffer[len..len + keys.len()].copy_from_slice(keys);
        len += keys.len();
        self.buffer[len] = cmd::TERMINATOR;
        len += 1;

        log::trace!("TX: {:02x?}", &self.buffer[..len]);
        &self.buffer[..len]
    }
}
