//! Safety framework for rover hardware tests
//!
//! This module provides safety controls and constants for driving real
//! hardware without running the rover off the bench or blinding anyone.

use std::time::Duration;

/// Longest time the wheels may turn during a test
pub const MAX_WHEEL_RUN: Duration = Duration::from_millis(300);

/// Longest time the camera may move during a test
pub const MAX_CAMERA_RUN: Duration = Duration::from_millis(500);

/// Commands that should NEVER be sent on real hardware without explicit opt-in
pub const DANGEROUS_COMMANDS: &[(&str, &str)] = &[(
    "laser_ctrl i",
    "Laser must not be switched on unless ROVER_ALLOW_LASER=1",
)];

/// Check if a command line should be skipped during testing
pub fn should_skip_command(line: &[u8]) -> bool {
    let laser_allowed = std::env::var("ROVER_ALLOW_LASER").is_ok_and(|v| v == "1");
    let text = String::from_utf8_lossy(line);
    !laser_allowed
        && DANGEROUS_COMMANDS
            .iter()
            .any(|(cmd, _)| text.trim_end() == *cmd)
}

/// Validate a run time is within safe limits
pub fn validate_run_time(run: Duration, limit: Duration) -> Result<(), String> {
    if run > limit {
        Err(format!(
            "Run time {:?} exceeds safe limit of {:?}",
            run, limit
        ))
    } else {
        Ok(())
    }
}
