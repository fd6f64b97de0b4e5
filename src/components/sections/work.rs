use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::SectionBackground;
use crate::components::particle_field::FieldConfig;
use crate::content::WorkItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkTab {
	Projects,
	Certificates,
	Achievements,
	TechStack,
}

impl WorkTab {
	pub const ALL: [WorkTab; 4] = [
		WorkTab::Projects,
		WorkTab::Certificates,
		WorkTab::Achievements,
		WorkTab::TechStack,
	];

	pub fn label(self) -> &'static str {
		match self {
			WorkTab::Projects => "Projects",
			WorkTab::Certificates => "Certificates",
			WorkTab::Achievements => "Achievements",
			WorkTab::TechStack => "Tech Stack",
		}
	}

	/// Items shown before "Show more" is pressed.
	pub fn collapsed_len(self) -> usize {
		match self {
			WorkTab::TechStack => 12,
			_ => 3,
		}
	}

	/// Certificates and achievements open their image in a lightbox.
	pub fn zoomable(self) -> bool {
		matches!(self, WorkTab::Certificates | WorkTab::Achievements)
	}

	pub fn visible_len(self, total: usize, show_all: bool) -> usize {
		if show_all {
			total
		} else {
			total.min(self.collapsed_len())
		}
	}
}

struct WorkContent {
	projects: Vec<WorkItem>,
	certificates: Vec<WorkItem>,
	achievements: Vec<WorkItem>,
	tech_stack: Vec<String>,
}

impl WorkContent {
	fn items(&self, tab: WorkTab) -> &[WorkItem] {
		match tab {
			WorkTab::Projects => &self.projects,
			WorkTab::Certificates => &self.certificates,
			WorkTab::Achievements => &self.achievements,
			WorkTab::TechStack => &[],
		}
	}

	fn len(&self, tab: WorkTab) -> usize {
		match tab {
			WorkTab::TechStack => self.tech_stack.len(),
			_ => self.items(tab).len(),
		}
	}
}

#[derive(Clone, Debug)]
struct Lightbox {
	image: String,
	title: String,
}

fn work_card(item: &WorkItem, zoomable: bool, set_lightbox: WriteSignal<Option<Lightbox>>) -> AnyView {
	let image = item.image.clone().map(|src| {
		view! { <img src=src alt=item.name.clone() class="work-card-image" /> }
	});
	let zoom = item.image.clone().filter(|_| zoomable).map(|image| {
		let title = item.name.clone();
		view! {
			<button
				class="work-card-zoom"
				on:click=move |_| {
					set_lightbox
						.set(
							Some(Lightbox {
								image: image.clone(),
								title: title.clone(),
							}),
						)
				}
			>
				"View"
			</button>
		}
	});
	let live = item.live_url.clone().map(|url| view! { <a href=url class="work-card-live">"Live Demo"</a> });
	let github = item
		.github_url
		.clone()
		.map(|url| view! { <a href=url class="work-card-github">"GitHub"</a> });

	view! {
		<li class="card work-card">
			{image}
			<h3>{item.name.clone()}</h3>
			<p>{item.description.clone()}</p>
			<div class="work-card-links">{live} {github}</div>
			{zoom}
		</li>
	}
	.into_any()
}

/// Tabbed showcase of projects, certificates, achievements and tech stack.
#[component]
pub fn Work(
	projects: Vec<WorkItem>,
	certificates: Vec<WorkItem>,
	achievements: Vec<WorkItem>,
	tech_stack: Vec<String>,
) -> impl IntoView {
	let content = StoredValue::new(WorkContent {
		projects,
		certificates,
		achievements,
		tech_stack,
	});
	let (tab, set_tab) = signal(WorkTab::Projects);
	let (show_all, set_show_all) = signal(false);
	let (lightbox, set_lightbox) = signal(None::<Lightbox>);

	let tabs = WorkTab::ALL
		.into_iter()
		.map(|t| {
			view! {
				<button
					class=move || if tab.get() == t { "tab tab-active" } else { "tab" }
					on:click=move |_| {
						set_tab.set(t);
						set_show_all.set(false);
					}
				>
					{t.label()}
				</button>
			}
		})
		.collect_view();

	let cards = move || {
		let (current, show) = (tab.get(), show_all.get());
		content.with_value(|c| {
			let n = current.visible_len(c.len(current), show);
			if current == WorkTab::TechStack {
				c.tech_stack[..n]
					.iter()
					.map(|name| view! { <li class="tech-tile">{name.clone()}</li> }.into_any())
					.collect::<Vec<_>>()
			} else {
				c.items(current)[..n]
					.iter()
					.map(|item| work_card(item, current.zoomable(), set_lightbox))
					.collect::<Vec<_>>()
			}
		})
	};

	let show_more = move || {
		let current = tab.get();
		let total = content.with_value(|c| c.len(current));
		(total > current.collapsed_len()).then(|| {
			view! {
				<button class="show-more" on:click=move |_| set_show_all.update(|s| *s = !*s)>
					{move || if show_all.get() { "Show less" } else { "Show more" }}
				</button>
			}
		})
	};

	let overlay = move || {
		lightbox.get().map(|lb| {
			let alt = lb.title.clone();
			view! {
				<div class="lightbox" on:click=move |_| set_lightbox.set(None)>
					<figure on:click=|ev: MouseEvent| ev.stop_propagation()>
						<button
							class="lightbox-close"
							aria-label="Close"
							on:click=move |_| set_lightbox.set(None)
						>
							"×"
						</button>
						<img src=lb.image alt=alt />
						<figcaption>{lb.title}</figcaption>
					</figure>
				</div>
			}
		})
	};

	view! {
		<section id="work" class="section relative w-full overflow-hidden">
			<SectionBackground config=FieldConfig::work() />
			<div class="section-inner relative z-10">
				<h4 class="section-kicker">"My portfolio"</h4>
				<h2 class="section-title">"My latest work"</h2>
				<p class="section-lead">
					"Explore my projects, certificates, achievements, and technical expertise."
				</p>
				<div class="tab-bar">{tabs}</div>
				<ul class=move || {
					if tab.get() == WorkTab::TechStack { "tech-grid" } else { "card-grid" }
				}>{cards}</ul>
				{show_more}
			</div>
			{overlay}
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_collapsed_view_limits() {
		assert_eq!(WorkTab::Projects.visible_len(2, false), 2);
		assert_eq!(WorkTab::Certificates.visible_len(7, false), 3);
		assert_eq!(WorkTab::TechStack.visible_len(13, false), 12);
		assert_eq!(WorkTab::TechStack.visible_len(13, true), 13);
	}

	#[test]
	fn test_only_credentials_are_zoomable() {
		let zoomable: Vec<_> = WorkTab::ALL.into_iter().filter(|t| t.zoomable()).collect();
		assert_eq!(zoomable, vec![WorkTab::Certificates, WorkTab::Achievements]);
	}
}
