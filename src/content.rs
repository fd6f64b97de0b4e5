//! Site content shown by the page sections.
//!
//! Content can be supplied by the hosting page as JSON in a
//! `<script id="site-data" type="application/json">` element. Every field is
//! optional; anything missing keeps the built-in default.

use serde::Deserialize;

use crate::error::ContentError;

/// Name, headline and links shown in the hero header.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
	pub name: String,
	pub title: String,
	pub summary: String,
	pub avatar: String,
	/// Downloadable resume; the button is hidden when empty.
	pub resume: String,
}

impl Default for Profile {
	fn default() -> Self {
		Self {
			name: "Your Name".into(),
			title: "Full-Stack Developer".into(),
			summary: "Software engineer building scalable web applications, from REST \
			          backends to interactive front ends."
				.into(),
			avatar: "./assets/profile.png".into(),
			resume: "./assets/resume.pdf".into(),
		}
	}
}

/// One card in the about section (technologies, education, ...).
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct InfoCard {
	pub name: String,
	pub description: String,
	pub details: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AboutContent {
	pub bio: String,
	pub cards: Vec<InfoCard>,
	pub tools: Vec<String>,
}

impl Default for AboutContent {
	fn default() -> Self {
		Self {
			bio: "I enjoy turning ideas into working products and learning whatever the \
			      problem at hand requires."
				.into(),
			cards: vec![
				InfoCard {
					name: "Technologies".into(),
					description: "Core languages and frameworks I build with.".into(),
					details: ["Python", "JavaScript", "HTML", "CSS", "React", "Django", "Node.js"]
						.map(String::from)
						.to_vec(),
				},
				InfoCard {
					name: "Education".into(),
					description: "Academic background and qualifications.".into(),
					details: vec!["B.Tech, Electronics and Communication".into()],
				},
				InfoCard {
					name: "Key Projects".into(),
					description: "Highlights of recent full-stack and ML work.".into(),
					details: vec![
						"Gym management platform (full-stack)".into(),
						"Medical image classifier (ML)".into(),
					],
				},
			],
			tools: ["React", "Django", "Tailwind", "Git", "VS Code"]
				.map(String::from)
				.to_vec(),
		}
	}
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Service {
	pub name: String,
	pub description: String,
	pub link: String,
}

/// A project, certificate or achievement card in the work section.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorkItem {
	pub name: String,
	pub description: String,
	pub image: Option<String>,
	pub live_url: Option<String>,
	pub github_url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SocialLink {
	pub label: String,
	pub url: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactContent {
	pub email: String,
	/// Form-relay endpoint the contact form posts to.
	pub form_endpoint: String,
}

impl Default for ContactContent {
	fn default() -> Self {
		Self {
			email: "hello@example.com".into(),
			form_endpoint: "https://formspree.io/f/your-form-id".into(),
		}
	}
}

/// Everything the page sections render.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteContent {
	pub profile: Profile,
	pub about: AboutContent,
	pub services: Vec<Service>,
	pub projects: Vec<WorkItem>,
	pub certificates: Vec<WorkItem>,
	pub achievements: Vec<WorkItem>,
	pub tech_stack: Vec<String>,
	pub socials: Vec<SocialLink>,
	pub contact: ContactContent,
}

fn work_item(name: &str, description: &str, image: &str) -> WorkItem {
	WorkItem {
		name: name.into(),
		description: description.into(),
		image: Some(image.into()),
		..WorkItem::default()
	}
}

impl Default for SiteContent {
	fn default() -> Self {
		Self {
			profile: Profile::default(),
			about: AboutContent::default(),
			services: vec![
				Service {
					name: "Full-Stack Web Development".into(),
					description: "Scalable, interactive web applications with modern \
					              front-end frameworks and robust REST backends."
						.into(),
					link: "#contact".into(),
				},
				Service {
					name: "AI/ML Solutions".into(),
					description: "Deep learning models applied to prediction and data \
					              analysis problems."
						.into(),
					link: "#contact".into(),
				},
				Service {
					name: "Problem Solving & Optimization".into(),
					description: "Data structures, algorithms and performance work on \
					              demanding code paths."
						.into(),
					link: "#contact".into(),
				},
			],
			projects: vec![
				WorkItem {
					live_url: Some("#".into()),
					github_url: Some("#".into()),
					..work_item(
						"Gym Platform",
						"Fitness platform with authentication and an admin dashboard.",
						"./assets/project-gym.png",
					)
				},
				WorkItem {
					live_url: Some("#".into()),
					github_url: Some("#".into()),
					..work_item(
						"Medical Image Classifier",
						"Web app serving an image classification model.",
						"./assets/project-classifier.png",
					)
				},
			],
			certificates: vec![
				work_item(
					"Python Full Stack Developer",
					"Professional certification.",
					"./assets/cert-fullstack.png",
				),
				work_item("Python Bootcamp", "Intensive bootcamp.", "./assets/cert-bootcamp.png"),
				work_item(
					"National Level Hackathon",
					"Hackathon participation.",
					"./assets/cert-hackathon.png",
				),
			],
			achievements: vec![
				work_item(
					"Robotics Workshop Challenge",
					"Second prize.",
					"./assets/award-robotics.png",
				),
				work_item("IoT Fire Alarm Model", "Third prize.", "./assets/award-iot.png"),
			],
			tech_stack: [
				"Python",
				"JavaScript",
				"React",
				"Django",
				"Node.js",
				"HTML",
				"CSS",
				"Tailwind CSS",
				"MongoDB",
				"MySQL",
				"Git",
				"Vercel",
				"Render",
			]
			.map(String::from)
			.to_vec(),
			socials: vec![
				SocialLink {
					label: "GitHub".into(),
					url: "https://github.com/".into(),
				},
				SocialLink {
					label: "LinkedIn".into(),
					url: "https://www.linkedin.com/".into(),
				},
			],
			contact: ContactContent::default(),
		}
	}
}

/// Parse site content JSON. Missing fields keep their defaults.
pub fn parse_site_content(json: &str) -> Result<SiteContent, ContentError> {
	Ok(serde_json::from_str(json)?)
}
