//! folio: single-page portfolio site.
//!
//! Client-side rendered Leptos app. Every section draws an animated particle
//! background (see [`components::particle_field`]) that follows the site's
//! light/dark theme and the viewport's device class.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;
pub mod error;
pub mod theme;
pub mod viewport;

use components::sections::{About, Contact, Footer, Header, Navbar, Services, Work};
pub use content::{SiteContent, parse_site_content};
use theme::provide_theme;
use viewport::provide_viewport;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio: logging initialized");
}

/// Load site content from a script element with id="site-data".
fn load_site_content() -> Option<SiteContent> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_site_content(&json_text) {
		Ok(content) => {
			info!(
				"folio: loaded site content for {} ({} projects)",
				content.profile.name,
				content.projects.len()
			);
			Some(content)
		}
		Err(e) => {
			warn!("folio: {}", e);
			None
		}
	}
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_theme();
	provide_viewport();

	let SiteContent {
		profile,
		about,
		services,
		projects,
		certificates,
		achievements,
		tech_stack,
		socials,
		contact,
	} = load_site_content().unwrap_or_default();
	let owner = profile.name.clone();
	let page_title = format!("{owner} | Portfolio");
	let email = contact.email.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=page_title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Navbar />
		<main>
			<Header profile=profile />
			<About about=about />
			<Services services=services />
			<Work
				projects=projects
				certificates=certificates
				achievements=achievements
				tech_stack=tech_stack
			/>
			<Contact contact=contact />
		</main>
		<Footer owner=owner email=email socials=socials />
	}
}
