use crate::device::{scale_axis_value, StandardAxis, VirtualDevice, AXIS_PRECISION};
use crate::memory::MemoryDevice;

#[test]
fn scale_axis_value_extremes() {
    assert_eq!(scale_axis_value(1.0), AXIS_PRECISION);
    assert_eq!(scale_axis_value(-1.0), -AXIS_PRECISION);
    assert_eq!(scale_axis_value(0.0), 0);
}

#[test]
fn memory_device_records_writes() {
    let mut dev = MemoryDevice::new();
    dev.set_axis(StandardAxis::X, 12345).unwrap();
    dev.set_button(3, true).unwrap();

    assert_eq!(dev.axis(StandardAxis::X), 12345);
    assert_eq!(dev.axis(StandardAxis::Y), 0);
    assert!(dev.button(3));
    assert!(!dev.button(4));
}
