use leptos::prelude::*;

use super::SectionBackground;
use crate::components::particle_field::FieldConfig;
use crate::content::Profile;

/// Full-viewport hero with the livelier particle preset.
#[component]
pub fn Header(profile: Profile) -> impl IntoView {
	let Profile {
		name,
		title,
		summary,
		avatar,
		resume,
	} = profile;
	let avatar_alt = name.clone();
	let resume_link = (!resume.is_empty()).then(|| {
		view! {
			<a href=resume download="" class="btn btn-outline">
				"my resume"
			</a>
		}
	});

	view! {
		<header id="top" class="hero relative w-full min-h-screen overflow-hidden">
			<SectionBackground config=FieldConfig::hero() />
			<div class="hero-content relative z-10">
				<img src=avatar alt=avatar_alt class="hero-avatar" />
				<h3 class="hero-greeting">"Hi! I'm " {name}</h3>
				<h1 class="hero-title">{title}</h1>
				<p class="hero-summary">{summary}</p>
				<div class="hero-actions">
					<a href="#contact" class="btn btn-primary">
						"contact me"
					</a>
					{resume_link}
				</div>
			</div>
		</header>
	}
}
