//! Particle colors.
//!
//! Particles fade in, so their fill is never a fixed CSS color. A
//! [`ColorTemplate`] carries the RGB base and is resolved per draw call with
//! the particle's current alpha.

use crate::theme::ThemeMode;

/// RGB base color with an opacity slot filled at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTemplate {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl ColorTemplate {
	pub const WHITE: Self = Self::rgb(255, 255, 255);
	pub const BLACK: Self = Self::rgb(0, 0, 0);
	/// Accent used by the work section in light mode.
	pub const VIOLET: Self = Self::rgb(139, 92, 246);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Substitute `alpha` into the template, yielding a CSS `rgba(...)` string.
	pub fn resolve(&self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
	}
}

/// Maps the page theme to the template a field draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
	/// Follows the light/dark theme.
	Adaptive {
		dark: ColorTemplate,
		light: ColorTemplate,
	},
	/// Ignores the theme; used on sections with a fixed dark backdrop.
	Fixed(ColorTemplate),
}

impl ColorScheme {
	/// White particles on dark, black on light.
	pub const fn monochrome() -> Self {
		Self::Adaptive {
			dark: ColorTemplate::WHITE,
			light: ColorTemplate::BLACK,
		}
	}

	pub fn template_for(&self, theme: ThemeMode) -> ColorTemplate {
		match (self, theme) {
			(ColorScheme::Fixed(t), _) => *t,
			(ColorScheme::Adaptive { dark, .. }, ThemeMode::Dark) => *dark,
			(ColorScheme::Adaptive { light, .. }, ThemeMode::Light) => *light,
		}
	}
}
