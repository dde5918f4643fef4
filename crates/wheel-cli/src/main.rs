//! `wheel` — launches the Mapping Host's main loop (spec.md §6's CLI
//! surface): one optional positional argument selects the virtual device
//! id (default 2); exit code 0 on a normal signal-driven exit, non-zero on
//! a device-wait timeout or a fatal virtual-device error.

mod mapping;
mod runtime;

use std::process::ExitCode;

use tracing::{error, info};

use wheel_core::{ControllerRole, DeviceClass};
use wheel_hid::MemoryDevice;
use wheel_mapping::{MappingConfig, MappingError, MappingHostBuilder, NoopObserver};

fn parse_device_id(args: impl Iterator<Item = String>) -> u32 {
    const DEFAULT_DEVICE_ID: u32 = 2;

    match args.nth(1) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("wheel: ignoring invalid device id {raw:?}, using default {DEFAULT_DEVICE_ID}");
            DEFAULT_DEVICE_ID
        }),
        None => DEFAULT_DEVICE_ID,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let device_id = parse_device_id(std::env::args());
    info!(device_id, "starting wheel mapping host");

    // MemoryDevice stands in for the real virtual-joystick driver `device_id`
    // would select (spec.md §1 names the HID driver an external collaborator
    // with a named interface only).
    let device = MemoryDevice::new();
    let config = MappingConfig::new(30.0)
        .require(DeviceClass::Hmd, ControllerRole::Unknown)
        .require(DeviceClass::Controller, ControllerRole::LeftHand)
        .require(DeviceClass::Controller, ControllerRole::RightHand);

    let builder = MappingHostBuilder::new(Box::new(runtime::StubRuntime::new()), device, config);
    let mut observer = NoopObserver;
    if let Err(err) = builder.wait_for_required_devices(&mut observer) {
        error!(%err, "timed out waiting for required VR devices");
        return ExitCode::FAILURE;
    }

    let builder = match mapping::wire_steering_wheel(builder) {
        Ok(builder) => builder,
        Err(err) => {
            error!(%err, "failed to resolve devices for the steering wheel mapping");
            return ExitCode::FAILURE;
        }
    };

    let mut host = match builder.build(&mut observer) {
        Ok(host) => host,
        Err(err) => {
            error!(%err, "failed to start mapping host");
            return ExitCode::FAILURE;
        }
    };

    info!(nodes = host.node_count(), "mapping host running");
    match host.run(&mut observer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(MappingError::Hid(err)) => {
            error!(%err, "virtual device write failed, shutting down");
            ExitCode::FAILURE
        }
        Err(err) => {
            error!(%err, "mapping host stopped unexpectedly");
            ExitCode::FAILURE
        }
    }
}
