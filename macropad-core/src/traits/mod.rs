//! Hardware abstraction traits
//!
//! These traits define the interface between the control loop
//! and hardware-specific implementations.

pub mod hid;
pub mod indicator;
pub mod sampler;
pub mod system;

pub use hid::HidActions;
pub use indicator::{Indicator, Rgb};
pub use sampler::{InputSampler, Line};
pub use system::System;
