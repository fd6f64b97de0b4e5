use leptos::prelude::*;

use super::SectionBackground;
use crate::components::particle_field::FieldConfig;
use crate::content::AboutContent;

#[component]
pub fn About(about: AboutContent) -> impl IntoView {
	let cards = about
		.cards
		.into_iter()
		.map(|card| {
			view! {
				<li class="card">
					<h3>{card.name}</h3>
					<p>{card.description}</p>
					<ul class="card-details">
						{card.details.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
					</ul>
				</li>
			}
		})
		.collect_view();
	let tools = about
		.tools
		.into_iter()
		.map(|tool| view! { <li class="tool">{tool}</li> })
		.collect_view();

	view! {
		<section id="about" class="section relative w-full overflow-hidden">
			<SectionBackground config=FieldConfig::section() />
			<div class="section-inner relative z-10">
				<h4 class="section-kicker">"Introduction"</h4>
				<h2 class="section-title">"About me"</h2>
				<p class="section-lead">{about.bio}</p>
				<ul class="card-grid">{cards}</ul>
				<h4 class="section-subtitle">"Tools I use"</h4>
				<ul class="tool-list">{tools}</ul>
			</div>
		</section>
	}
}
