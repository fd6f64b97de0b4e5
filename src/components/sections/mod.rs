//! Page sections.
//!
//! Each section is static markup over its own particle background; the only
//! per-section difference in the background is its [`FieldConfig`] preset.

mod about;
mod contact;
mod footer;
mod header;
mod navbar;
mod services;
mod work;

use leptos::prelude::*;

use super::particle_field::{FieldConfig, ParticleCanvas};
use crate::theme::use_theme;
use crate::viewport::use_viewport;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use navbar::Navbar;
pub use services::Services;
pub use work::{Work, WorkTab};

/// Particle canvas wired to the shared theme and device-class signals.
#[component]
fn SectionBackground(config: FieldConfig) -> impl IntoView {
	let theme = use_theme().signal();
	let device = use_viewport().device_signal();
	view! { <ParticleCanvas config=config theme=theme device=device /> }
}
