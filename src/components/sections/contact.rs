use leptos::prelude::*;

use super::SectionBackground;
use crate::components::particle_field::FieldConfig;
use crate::content::ContactContent;

/// Contact section. The form posts straight to the configured form relay.
#[component]
pub fn Contact(contact: ContactContent) -> impl IntoView {
	let mailto = format!("mailto:{}", contact.email);

	view! {
		<section id="contact" class="section section-dark relative w-full overflow-hidden">
			<SectionBackground config=FieldConfig::contact() />
			<div class="section-inner relative z-10">
				<h4 class="section-kicker">"Connect with me"</h4>
				<h2 class="section-title">"Get in touch"</h2>
				<form class="contact-form" action=contact.form_endpoint method="POST">
					<div class="contact-row">
						<input type="text" name="name" placeholder="Enter your name" required=true />
						<input type="email" name="email" placeholder="Enter your email" required=true />
					</div>
					<textarea name="message" rows="6" placeholder="Enter your message" required=true></textarea>
					<button type="submit" class="btn btn-outline">
						"Send Message"
					</button>
				</form>
				<p class="contact-mail">
					"or write to " <a href=mailto>{contact.email}</a>
				</p>
			</div>
		</section>
	}
}
