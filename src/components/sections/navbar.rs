use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::theme::use_theme;
use crate::viewport::use_scrolled;

const NAV_ITEMS: [(&str, &str); 5] = [
	("Home", "#top"),
	("About me", "#about"),
	("Services", "#services"),
	("My Work", "#work"),
	("Contact me", "#contact"),
];

/// Scroll offset after which the navbar gets its solid backdrop.
const SCROLL_THRESHOLD: f64 = 50.0;

/// Fixed top navigation with the theme toggle and a mobile slide-in menu.
#[component]
pub fn Navbar() -> impl IntoView {
	let theme = use_theme();
	let scrolled = use_scrolled(SCROLL_THRESHOLD);
	let (menu_open, set_menu_open) = signal(false);

	let desktop_links = NAV_ITEMS
		.iter()
		.map(|(name, href)| view! { <li><a href=*href>{*name}</a></li> })
		.collect_view();

	view! {
		<nav class=move || if scrolled.get() { "navbar navbar-scrolled" } else { "navbar" }>
			<a href="#top" class="navbar-logo">
				<img src="./assets/logo.png" alt="Logo" class="logo-light" />
				<img src="./assets/logo_dark.png" alt="Logo" class="logo-dark" />
			</a>
			<ul class="navbar-links">{desktop_links}</ul>
			<div class="navbar-actions">
				<button
					class="theme-toggle"
					aria-label="Toggle theme"
					on:click=move |_| theme.toggle()
				>
					{move || if theme.mode.get().is_dark() { "☀" } else { "☾" }}
				</button>
				<a href="#contact" class="navbar-contact">
					"Contact"
				</a>
				<button
					class="menu-open"
					aria-label="Open mobile menu"
					on:click=move |_| set_menu_open.set(true)
				>
					"☰"
				</button>
			</div>
			<Show when=move || menu_open.get()>
				<div class="menu-overlay" on:click=move |_| set_menu_open.set(false)>
					<ul class="mobile-menu" on:click=|ev: MouseEvent| ev.stop_propagation()>
						<button
							class="menu-close"
							aria-label="Close mobile menu"
							on:click=move |_| set_menu_open.set(false)
						>
							"✕"
						</button>
						{NAV_ITEMS
							.iter()
							.map(|(name, href)| {
								view! {
									<li>
										<a href=*href on:click=move |_| set_menu_open.set(false)>
											{*name}
										</a>
									</li>
								}
							})
							.collect_view()}
					</ul>
				</div>
			</Show>
		</nav>
	}
}
