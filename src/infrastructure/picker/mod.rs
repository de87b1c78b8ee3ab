//! Picker surface infrastructure module

mod null;

pub use null::NullPicker;
