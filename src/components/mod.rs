//! UI components.

pub mod particles;
