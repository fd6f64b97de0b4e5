use leptos::prelude::*;

use super::SectionBackground;
use crate::components::particle_field::FieldConfig;
use crate::content::SocialLink;

#[component]
pub fn Footer(owner: String, email: String, socials: Vec<SocialLink>) -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();
	let mailto = format!("mailto:{email}");
	let links = socials
		.into_iter()
		.map(|s| {
			view! {
				<li>
					<a href=s.url target="_blank" rel="noopener noreferrer">
						{s.label}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<footer class="footer relative w-full overflow-hidden">
			<SectionBackground config=FieldConfig::footer() />
			<div class="footer-inner relative z-10">
				<a href=mailto class="footer-mail">
					{email}
				</a>
				<hr class="footer-rule" />
				<div class="footer-bottom">
					<p>"© " {year} " " {owner} ". All rights reserved."</p>
					<ul class="footer-socials">{links}</ul>
				</div>
			</div>
		</footer>
	}
}
