use leptos::prelude::*;

use super::SectionBackground;
use crate::components::particle_field::FieldConfig;
use crate::content::Service;

#[component]
pub fn Services(services: Vec<Service>) -> impl IntoView {
	let cards = services
		.into_iter()
		.map(|service| {
			view! {
				<li class="card service-card">
					<h3>{service.name}</h3>
					<p>{service.description}</p>
					<a href=service.link class="card-link">
						"Read more"
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<section id="services" class="section relative w-full overflow-hidden">
			<SectionBackground config=FieldConfig::section() />
			<div class="section-inner relative z-10">
				<h4 class="section-kicker">"What I offer"</h4>
				<h2 class="section-title">"My services"</h2>
				<ul class="card-grid">{cards}</ul>
			</div>
		</section>
	}
}
