//! Site-wide light/dark theme.
//!
//! The theme is the only state the site persists. It lives in a Leptos
//! context; components read it, and only the navbar toggle writes it.

use leptos::prelude::*;
use log::{debug, warn};

const STORAGE_KEY: &str = "theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	#[default]
	Light,
	Dark,
}

impl ThemeMode {
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value.trim() {
			"light" => Some(ThemeMode::Light),
			"dark" => Some(ThemeMode::Dark),
			_ => None,
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}

	pub fn is_dark(self) -> bool {
		self == ThemeMode::Dark
	}
}

/// Handle to the shared theme signal.
#[derive(Clone, Copy, Debug)]
pub struct ThemeState {
	pub mode: RwSignal<ThemeMode>,
}

impl ThemeState {
	pub fn toggle(&self) {
		self.mode.update(|m| *m = m.toggled());
	}

	pub fn signal(&self) -> Signal<ThemeMode> {
		self.mode.into()
	}
}

fn stored_theme() -> Option<ThemeMode> {
	let storage = web_sys::window()?.local_storage().ok()??;
	ThemeMode::parse(&storage.get_item(STORAGE_KEY).ok()??)
}

fn preferred_theme() -> ThemeMode {
	let prefers_dark = web_sys::window()
		.and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
		.is_some_and(|q| q.matches());
	if prefers_dark { ThemeMode::Dark } else { ThemeMode::Light }
}

fn persist(mode: ThemeMode) {
	let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
		return;
	};
	if let Err(e) = storage.set_item(STORAGE_KEY, mode.as_str()) {
		warn!("theme: could not persist preference: {e:?}");
	}
}

fn apply_document_class(mode: ThemeMode) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	if let Err(e) = root.class_list().toggle_with_force("dark", mode.is_dark()) {
		warn!("theme: could not update document class: {e:?}");
	}
}

/// Create the theme signal from the stored preference (or the OS
/// preference) and provide it to the component tree.
pub fn provide_theme() -> ThemeState {
	let initial = stored_theme().unwrap_or_else(preferred_theme);
	debug!("theme: starting in {} mode", initial.as_str());
	let state = ThemeState {
		mode: RwSignal::new(initial),
	};

	Effect::new(move |_| {
		let mode = state.mode.get();
		apply_document_class(mode);
		persist(mode);
	});

	provide_context(state);
	state
}

pub fn use_theme() -> ThemeState {
	expect_context::<ThemeState>()
}
