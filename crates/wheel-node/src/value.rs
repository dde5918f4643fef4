//! The output a node produces each tick. Every node kind — axis, button,
//! event trigger, or the VR source itself — stores one of these, so the
//! graph can stay a single homogeneous `Node` type (see `kind.rs`) rather
//! than splitting into separate axis/button graphs.

use std::rc::Rc;

use wheel_core::{ButtonState, DeviceSnapshot, VrStatePackage};

#[derive(Clone, Debug, Default)]
pub enum NodeValue {
    #[default]
    None,
    VrPackage(Rc<VrStatePackage>),
    Device(DeviceSnapshot),
    Axis(f64),
    Button(ButtonState),
}

impl NodeValue {
    pub fn as_vr_package(&self) -> &Rc<VrStatePackage> {
        match self {
            NodeValue::VrPackage(p) => p,
            other => panic!("expected NodeValue::VrPackage, got {other:?}"),
        }
    }

    pub fn as_device(&self) -> &DeviceSnapshot {
        match self {
            NodeValue::Device(d) => d,
            other => panic!("expected NodeValue::Device, got {other:?}"),
        }
    }

    pub fn as_axis(&self) -> f64 {
        match self {
            NodeValue::Axis(v) => *v,
            other => panic!("expected NodeValue::Axis, got {other:?}"),
        }
    }

    pub fn as_button(&self) -> ButtonState {
        match self {
            NodeValue::Button(b) => *b,
            other => panic!("expected NodeValue::Button, got {other:?}"),
        }
    }
}
