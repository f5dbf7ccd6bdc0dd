//! Static page content and the project carousel paging.

/// Projects shown per carousel slide.
pub const PROJECTS_PER_SLIDE: usize = 2;

pub const OWNER_NAME: &str = "Saurav Agrawal";
pub const OWNER_ROLE: &str = "Software Engineer";
pub const OWNER_TAGLINE: &str = "Creative and self-driven web developer passionate about building responsive, real-time applications using React, Node.js, and Firebase.";

pub const SKILLS: &[&str] = &[
	"C++",
	"JAVA",
	"SQL",
	"HTML5",
	"CSS",
	"Javascript",
	"Node.js",
	"React.js",
	"MySQL",
	"MongoDB Compass",
	"Github",
	"Firebase",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
	pub title: &'static str,
	pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
	Feature {
		title: "Clean Code",
		description: "Writing maintainable, scalable, and efficient code following best practices.",
	},
	Feature {
		title: "Creative Design",
		description: "Crafting beautiful and intuitive user interfaces that enhance user experience.",
	},
	Feature {
		title: "Fast Performance",
		description: "Optimizing applications for speed and performance across all devices.",
	},
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
	pub id: u32,
	pub title: &'static str,
	pub description: &'static str,
	pub image: &'static str,
	pub technologies: &'static [&'static str],
	pub repository: &'static str,
}

pub const PROJECTS: &[Project] = &[
	Project {
		id: 1,
		title: "Invoice Builder",
		description: "A billing and invoice management application built with React, Redux Toolkit, and Vite. Create, edit, filter, and manage invoices with a modern UI.",
		image: "/invoice.png",
		technologies: &["React", "Redux", "Vite", "Tailwind CSS"],
		repository: "https://github.com/saurav-654/billing",
	},
	Project {
		id: 2,
		title: "Chat Application",
		description: "A real-time chat application using Node.js, Express.js, and Socket.io. Users join a chat, send messages, and see active participants.",
		image: "/chat.png",
		technologies: &["Node.js", "Express", "Socket.io"],
		repository: "https://github.com/saurav-654/web",
	},
	Project {
		id: 3,
		title: "RADARS Dashboard",
		description: "A web interface for real-time accident detection data from RADARS (Road Accident Detection and Reporting System), covering rollovers, collisions, submersion, and fires.",
		image: "/radars.png",
		technologies: &["HTML", "CSS", "JAVASCRIPT", "Firebase", "Google Maps API"],
		repository: "https://github.com/saurav-654/RADARS",
	},
	Project {
		id: 4,
		title: "Portfolio Website",
		description: "A responsive portfolio website with smooth animations and optimized performance.",
		image: "/placeholder.svg",
		technologies: &["Rust", "Leptos", "WebAssembly"],
		repository: "#",
	},
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
	pub title: &'static str,
	pub value: &'static str,
	pub link: Option<&'static str>,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
	ContactInfo {
		title: "Email",
		value: "sauravagrawal588@gmail.com",
		link: Some("mailto:sauravagrawal588@gmail.com"),
	},
	ContactInfo {
		title: "Phone",
		value: "+91 8863035026",
		link: Some("tel:+918863035026"),
	},
	ContactInfo {
		title: "Location",
		value: "Mohali, Punjab",
		link: None,
	},
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
	pub label: &'static str,
	pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
	SocialLink {
		label: "GitHub",
		href: "https://github.com/saurav-654/",
	},
	SocialLink {
		label: "LinkedIn",
		href: "https://linkedin.com/in/saurav-agrawal-a05471230",
	},
	SocialLink {
		label: "Twitter",
		href: "https://x.com/Saurav_agr45",
	},
];

/// Number of carousel slides needed for `len` items.
pub fn slide_count(len: usize, per_slide: usize) -> usize {
	if per_slide == 0 {
		return 0;
	}
	len.div_ceil(per_slide)
}

/// Following slide, wrapping to the first.
pub fn next_slide(current: usize, slides: usize) -> usize {
	if slides == 0 { 0 } else { (current + 1) % slides }
}

/// Preceding slide, wrapping to the last.
pub fn prev_slide(current: usize, slides: usize) -> usize {
	if slides == 0 {
		0
	} else {
		(current + slides - 1) % slides
	}
}

/// Items shown on one slide.
pub fn slide<T>(items: &[T], index: usize, per_slide: usize) -> &[T] {
	let start = (index * per_slide).min(items.len());
	let end = (start + per_slide).min(items.len());
	&items[start..end]
}
