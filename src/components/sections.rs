//! Navigation bar, scroll progress bar and the five page sections.

use leptos::html::Div;
use leptos::prelude::*;

use super::particle_field::StarFieldSection;
use super::reveal::{PROJECTS_THRESHOLD, Reveal, SECTION_THRESHOLD, delay_style, use_in_view};
use super::scroll::{
	Section, nav_solid, nav_visible, parallax_offset, scroll_progress, scroll_to,
	use_scroll_context,
};
use crate::content::{
	CONTACT_INFO, FEATURES, OWNER_NAME, OWNER_ROLE, OWNER_TAGLINE, PROJECTS, PROJECTS_PER_SLIDE,
	SKILLS, SOCIAL_LINKS, next_slide, prev_slide, slide, slide_count,
};

/// Fixed top navigation. Hides while scrolling down and highlights the
/// section currently under the probe line.
#[component]
pub fn Navigation() -> impl IntoView {
	let scroll = use_scroll_context();
	let (menu_open, set_menu_open) = signal(false);
	let visible = RwSignal::new(true);
	let last_y = StoredValue::new(0.0_f64);

	Effect::new(move |_| {
		let y = scroll.scroll_y.get();
		visible.set(nav_visible(y, last_y.get_value()));
		last_y.set_value(y);
	});

	let nav_class = move || {
		format!(
			"site-nav {} {}",
			if visible.get() { "nav-shown" } else { "nav-hidden" },
			if nav_solid(scroll.scroll_y.get()) { "nav-solid" } else { "nav-clear" },
		)
	};

	let go = move |section: Section| {
		scroll_to(section);
		set_menu_open.set(false);
	};

	let links = move |mobile: bool| {
		Section::ALL
			.into_iter()
			.map(|section| {
				let class = move || {
					let active = scroll.active_section.get() == section;
					format!(
						"nav-link{}{}",
						if mobile { " nav-link-mobile" } else { "" },
						if active { " nav-link-active" } else { "" },
					)
				};
				view! {
					<button class=class on:click=move |_| go(section)>
						{section.label()}
					</button>
				}
			})
			.collect_view()
	};

	view! {
		<nav class=nav_class>
			<div class="nav-inner">
				<button class="nav-logo" on:click=move |_| go(Section::Home)>
					{OWNER_NAME}
				</button>
				<div class="nav-links">{links(false)}</div>
				<button
					class="nav-menu-toggle"
					aria-label="Toggle menu"
					on:click=move |_| set_menu_open.update(|open| *open = !*open)
				>
					{move || if menu_open.get() { "✕" } else { "☰" }}
				</button>
			</div>
			<Show when=move || menu_open.get()>
				<div class="nav-mobile">{links(true)}</div>
			</Show>
		</nav>
	}
}

/// Thin bar across the top showing how far the page has been scrolled.
#[component]
pub fn ScrollProgressBar() -> impl IntoView {
	let scroll = use_scroll_context();
	let width = move || {
		let scroll_y = scroll.scroll_y.get();
		let Some(window) = web_sys::window() else {
			return "width: 0%;".to_string();
		};
		let document_height = window
			.document()
			.and_then(|d| d.document_element())
			.map(|e| e.scroll_height() as f64)
			.unwrap_or(0.0);
		let viewport_height = window
			.inner_height()
			.ok()
			.and_then(|h| h.as_f64())
			.unwrap_or(0.0);
		format!(
			"width: {}%;",
			scroll_progress(scroll_y, document_height, viewport_height)
		)
	};

	view! {
		<div class="scroll-progress">
			<div class="scroll-progress-fill" style=width />
		</div>
	}
}

#[component]
pub fn Hero() -> impl IntoView {
	let scroll = use_scroll_context();
	let float = move |phase: f64, frequency: f64, amplitude: f64| {
		move || {
			format!(
				"transform: translateY({}px);",
				parallax_offset(scroll.scroll_y.get(), phase, frequency, amplitude)
			)
		}
	};

	view! {
		<StarFieldSection section=Section::Home class="hero">
			<div class="hero-body" style=float(0.0, 0.005, 10.0)>
				<h1>
					"Hi, I'm " <span class="gradient-text">{OWNER_NAME}</span>
				</h1>
				<div class="hero-role">{OWNER_ROLE}</div>
				<p class="hero-tagline">{OWNER_TAGLINE}</p>
				<div class="hero-actions">
					<button
						class="button-primary"
						style=float(100.0, 0.008, 5.0)
						on:click=move |_| scroll_to(Section::Projects)
					>
						"View My Work"
					</button>
					<a
						class="button-secondary"
						href="/resume.pdf"
						download="Saurav_Agrawal_Resume.pdf"
						style=float(200.0, 0.008, 5.0)
					>
						"Download Resume"
					</a>
				</div>
			</div>
			<button
				class="hero-scroll-hint"
				aria-label="Scroll to about"
				style=float(0.0, 0.01, 10.0)
				on:click=move |_| scroll_to(Section::About)
			>
				"⌄"
			</button>
		</StarFieldSection>
	}
}

#[component]
pub fn About() -> impl IntoView {
	let reveal_ref = NodeRef::<Div>::new();
	let in_view = use_in_view(reveal_ref, SECTION_THRESHOLD);
	let reveal = move |kind: Reveal| move || kind.class(in_view.get());

	view! {
		<StarFieldSection section=Section::About class="about">
			<div node_ref=reveal_ref class=reveal(Reveal::Up)>
				<h2>"About " <span class="gradient-text">"Me"</span></h2>
				<div class="about-grid">
					<div class=reveal(Reveal::FromLeft) style=delay_style(200)>
						<img class="about-photo" src="/photo.jpg" alt=OWNER_NAME width="320" height="384" />
					</div>
					<div class=reveal(Reveal::FromRight) style=delay_style(400)>
						<h3>"Passionate Developer"</h3>
						<p>
							"A Computer Science Engineering graduate with a strong foundation in web development and programming, building clean, responsive, and user-friendly web applications."
						</p>
						<p>
							"I enjoy transforming ideas into working applications and continuously learning new tools and frameworks."
						</p>
						<div class="feature-list">
							{FEATURES
								.iter()
								.enumerate()
								.map(|(i, f)| {
									let class = move || format!("feature {}", Reveal::UpSmall.class(in_view.get()));
									view! {
										<div class=class style=delay_style(600 + i as u32 * 100)>
											<h4>{f.title}</h4>
											<p>{f.description}</p>
										</div>
									}
								})
								.collect_view()}
						</div>
					</div>
				</div>
			</div>
		</StarFieldSection>
	}
}

#[component]
pub fn Skills() -> impl IntoView {
	let reveal_ref = NodeRef::<Div>::new();
	let in_view = use_in_view(reveal_ref, SECTION_THRESHOLD);

	view! {
		<StarFieldSection section=Section::Skills class="skills">
			<div node_ref=reveal_ref class=move || Reveal::Up.class(in_view.get())>
				<h2>"My " <span class="gradient-text">"Skills"</span></h2>
				<p class="section-lead">"Technologies and expertise I bring to every project"</p>
				<div class="skill-grid">
					{SKILLS
						.iter()
						.enumerate()
						.map(|(i, skill)| {
							let class = move || format!("skill-tile {}", Reveal::Up.class(in_view.get()));
							view! {
								<div class=class style=delay_style(i as u32 * 50)>
									<span>{*skill}</span>
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>
		</StarFieldSection>
	}
}

/// Project cards in a two-per-slide carousel.
#[component]
pub fn Projects() -> impl IntoView {
	let slides = slide_count(PROJECTS.len(), PROJECTS_PER_SLIDE);
	let (current, set_current) = signal(0_usize);
	let track_style = move || format!("transform: translateX(-{}%);", current.get() * 100);
	let reveal_ref = NodeRef::<Div>::new();
	let in_view = use_in_view(reveal_ref, PROJECTS_THRESHOLD);

	view! {
		<StarFieldSection section=Section::Projects class="projects">
			<div node_ref=reveal_ref class=move || Reveal::Up.class(in_view.get())>
				<h2>"Featured " <span class="gradient-text">"Projects"</span></h2>
				<p class="section-lead">
					"Here are some of my recent projects that showcase my skills and creativity"
				</p>
				<div class="carousel">
					<div class="carousel-track" style=track_style>
						{(0..slides)
							.map(|index| {
								view! {
									<div class="carousel-slide">
										{slide(PROJECTS, index, PROJECTS_PER_SLIDE)
											.iter()
											.enumerate()
											.map(|(i, project)| {
												let class = move || {
													format!("project-card {}", Reveal::Up.class(in_view.get()))
												};
												view! {
													<a
														class=class
														style=delay_style(i as u32 * 200)
														href=project.repository
														target="_blank"
														rel="noopener noreferrer"
													>
														<img src=project.image alt=project.title width="500" height="300" />
														<h3>{project.title}</h3>
														<p>{project.description}</p>
														<div class="tech-list">
															{project
																.technologies
																.iter()
																.map(|tech| view! { <span class="tech">{*tech}</span> })
																.collect_view()}
														</div>
													</a>
												}
											})
											.collect_view()}
									</div>
								}
							})
							.collect_view()}
					</div>
					<Show when=move || { slides > 1 }>
						<button
							class="carousel-prev"
							aria-label="Previous projects"
							on:click=move |_| set_current.update(|c| *c = prev_slide(*c, slides))
						>
							"‹"
						</button>
						<button
							class="carousel-next"
							aria-label="Next projects"
							on:click=move |_| set_current.update(|c| *c = next_slide(*c, slides))
						>
							"›"
						</button>
						<div class="carousel-dots">
							{(0..slides)
								.map(|index| {
									let class = move || {
										if current.get() == index { "dot dot-active" } else { "dot" }
									};
									view! { <button class=class on:click=move |_| set_current.set(index) /> }
								})
								.collect_view()}
						</div>
					</Show>
				</div>
			</div>
		</StarFieldSection>
	}
}

#[component]
pub fn Contact() -> impl IntoView {
	let reveal_ref = NodeRef::<Div>::new();
	let in_view = use_in_view(reveal_ref, SECTION_THRESHOLD);
	let reveal = move || Reveal::Up.class(in_view.get());

	view! {
		<StarFieldSection section=Section::Contact class="contact">
			<div node_ref=reveal_ref class=reveal>
				<h2>"Get In Touch"</h2>
				<p class="section-lead">
					"Have a project in mind? Let's work together to create something amazing!"
				</p>
				<div class=reveal style=delay_style(200)>
					<div class="contact-grid">
						{CONTACT_INFO
							.iter()
							.map(|info| {
								view! {
									<a class="contact-card" href=info.link.unwrap_or("#")>
										<h4>{info.title}</h4>
										<p>{info.value}</p>
									</a>
								}
							})
							.collect_view()}
					</div>
					<h3>"Follow Me"</h3>
					<div class="social-links">
						{SOCIAL_LINKS
							.iter()
							.map(|link| {
								view! {
									<a
										class="social-link"
										href=link.href
										target="_blank"
										rel="noopener noreferrer"
										aria-label=link.label
									>
										{link.label}
									</a>
								}
							})
							.collect_view()}
					</div>
				</div>
			</div>
		</StarFieldSection>
	}
}
