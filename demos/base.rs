//! Basic example driving the rover's motor controller via UART.
//!
//! This example shows how to:
//! - Connect to the controller via serial port
//! - Drive the wheels and stop them
//! - Combine camera tilt and pan flags into one command
//! - Blink the laser
//!
//! Set the `ROVER_SERIAL_PORT` environment variable to your serial port path.

use rover_types::{CamDirection, CommandEncoder, LaserAction, RoverDirection, RoverMotors};
use serial::{SerialPort, SerialPortSettings};
use std::env;
use std::thread;
use std::time::Duration;

fn main() {
    dotenvy::dotenv().ok();

    // Get serial port from environment
    let port_path =
        env::var("ROVER_SERIAL_PORT").expect("Set ROVER_SERIAL_PORT to your serial port path");

    println!("Connecting to: {}", port_path);

    // Open and configure serial port
    let mut port = serial::open(&port_path).expect("Failed to open serial port");
    port.reconfigure(&|settings: &mut dyn SerialPortSettings| {
        settings.set_baud_rate(serial::Baud9600)?;
        settings.set_char_size(serial::Bits8);
        settings.set_parity(serial::ParityNone);
        settings.set_stop_bits(serial::Stop1);
        settings.set_flow_control(serial::FlowNone);
        Ok(())
    })
    .expect("Failed to configure serial port");
    port.set_timeout(Duration::from_millis(100)).unwrap();

    let mut encoder = CommandEncoder::new();

    // === Wheels ===
    println!("\n=== Forward, then spin ===");

    send(&mut port, encoder.move_rover(RoverDirection::Forward));
    thread::sleep(Duration::from_secs(1));
    send(&mut port, encoder.move_rover(RoverDirection::Cw));
    thread::sleep(Duration::from_millis(500));
    send(&mut port, encoder.stop_motors(Some(RoverMotors::Wheels)));

    // === Camera ===
    println!("\n=== Tilt up while panning clockwise ===");

    let mut direction = CamDirection::STOP;
    direction |= CamDirection::UP;
    direction |= CamDirection::CW;
    println!("Camera flags: {:?} ({})", direction, u8::from(direction));
    send(&mut port, encoder.move_camera(direction));
    thread::sleep(Duration::from_millis(500));
    send(&mut port, encoder.stop_motors(Some(RoverMotors::Camera)));

    // === Laser ===
    println!("\n=== Laser blink ===");

    send(&mut port, encoder.laser(LaserAction::Blink));
    thread::sleep(Duration::from_secs(2));

    // === Cleanup ===
    println!("\n=== Done ===");
    send(&mut port, encoder.laser(LaserAction::Off));
    send(&mut port, encoder.stop_motors(None));
}

/// Send command and print whatever the controller answers
fn send<S: SerialPort + std::io::Read + std::io::Write>(port: &mut S, cmd: &[u8]) {
    println!("TX: {:?}", String::from_utf8_lossy(cmd));
    port.write_all(cmd).expect("Write failed");
    thread::sleep(Duration::from_millis(100));

    let mut buf = [0u8; 64];
    if let Ok(n @ 1..) = port.read(&mut buf) {
        println!("RX: {:?}", String::from_utf8_lossy(&buf[..n]));
    }
}
