//! Ambient particle field with pointer magnetism.
//!
//! Renders small drifting dots on an HTML canvas that:
//! - Fade in slowly, and fade out as they approach an edge
//! - Drift with a per-particle velocity plus optional global wind
//! - Ease toward the pointer, each with its own magnetism
//! - Respawn at a random position when they leave the canvas
//!
//! The animation only runs while the canvas is visible.
//!
//! # Example
//!
//! ```ignore
//! use magnet_particles::Particles;
//!
//! view! { <Particles quantity=150 circle_color="#9ecbff" staticity=30.0 /> }
//! ```

mod animation;
pub mod color;
mod component;
pub mod config;
mod engine;
mod field;
mod particle;
mod pointer;
mod render;
mod simulation;
mod subscription;
#[cfg(test)]
mod testing;
mod visibility;
mod web;

pub use animation::{FrameHandle, FrameScheduler, LoopState};
pub use component::{Particles, ParticlesFromConfig};
pub use config::{ConfigError, ParticleConfig, Settings};
pub use engine::ParticleEngine;
pub use particle::Particle;
pub use pointer::{PointerOffset, SurfaceOrigin};
pub use render::Surface;
pub use subscription::{Subscription, Subscriptions};
