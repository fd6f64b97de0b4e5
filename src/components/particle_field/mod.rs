//! Animated particle backgrounds for page sections.
//!
//! Every section draws the same effect: a field of small dots drifting at
//! constant velocity and fading in, respawning at a random spot whenever they
//! drift off the surface. The pieces, leaves first:
//!
//! - [`Particle`]: one dot, with `create` / `advance` / `render`
//! - [`ParticleField`]: the population for one surface
//! - [`AnimationHost`]: start/stop state machine binding a field to a surface
//!   and a [`FrameDriver`]
//! - [`ParticleCanvas`]: the Leptos component tying a host to a section's
//!   mounted lifetime
//!
//! # Example
//!
//! ```ignore
//! use folio::components::particle_field::{FieldConfig, ParticleCanvas};
//!
//! view! {
//!     <section class="relative overflow-hidden">
//!         <ParticleCanvas config=FieldConfig::section() theme=theme device=device />
//!         <div class="relative z-10">"..."</div>
//!     </section>
//! }
//! ```

pub mod color;
mod component;
pub mod config;
mod driver;
mod field;
mod host;
mod particle;
pub mod surface;

pub use color::{ColorScheme, ColorTemplate};
pub use component::ParticleCanvas;
pub use config::{BoundsSource, FieldConfig, ParticleCount};
pub use field::ParticleField;
pub use host::{AnimationHost, FrameDriver, HostState};
pub use particle::Particle;
pub use surface::Surface;
