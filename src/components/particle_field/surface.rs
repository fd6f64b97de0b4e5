//! Drawing targets for particle fields.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SurfaceError;

/// The two draw operations a particle field needs.
pub trait Surface {
	/// Clear `[0, width) x [0, height)`.
	fn clear(&self, width: f64, height: f64);
	/// Fill a circle centred at `(x, y)` with a CSS color string.
	fn fill_circle(&self, x: f64, y: f64, radius: f64, fill: &str);
}

/// 2D canvas context of a section's background `<canvas>`.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, SurfaceError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|e| SurfaceError::Context(format!("{e:?}")))?
			.ok_or(SurfaceError::NoContext)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| SurfaceError::NoContext)?;
		Ok(Self { ctx })
	}
}

impl Surface for CanvasSurface {
	fn clear(&self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, fill: &str) {
		self.ctx.save();
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(fill);
		self.ctx.fill();
		self.ctx.restore();
	}
}
