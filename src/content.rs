//! Hand-authored site content. Every section renders straight from these
//! values; the unit tests at the bottom are the only validation they get.

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// Proficiency percentage, 0..=100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SITE_OWNER: &str = "Sakshi Jha";
pub const OWNER_EMAIL: &str = "sakshijha882@gmail.com";
pub const RESUME_PATH: &str = "/sakshi_jha.pdf";

/// Role titles cycled in the hero section.
pub const HERO_TITLES: &[&str] = &["Frontend Developer", "MERN Stack Developer"];

pub const HERO_TAGLINE: &str = "Passionate software engineer with 3 years of experience building scalable web applications and innovative solutions using modern technologies.";

/// In-page anchors, in page order. Drives both the header nav and the
/// footer quick links.
pub const SECTION_LINKS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("Skills", "#skills"),
    ("Experience", "#experience"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

pub fn skills() -> Vec<Skill> {
    vec![
        Skill {
            name: "React",
            icon: "devicon-react-original",
            color: "#61DAFB",
            level: 95,
        },
        Skill {
            name: "Node.js",
            icon: "devicon-nodejs-plain",
            color: "#339933",
            level: 90,
        },
        Skill {
            name: "Express",
            icon: "devicon-express-original",
            color: "#000000",
            level: 88,
        },
        Skill {
            name: "MongoDB",
            icon: "devicon-mongodb-plain",
            color: "#47A248",
            level: 85,
        },
        Skill {
            name: "JavaScript",
            icon: "devicon-javascript-plain",
            color: "#F7DF1E",
            level: 92,
        },
        Skill {
            name: "TypeScript",
            icon: "devicon-typescript-plain",
            color: "#3178C6",
            level: 87,
        },
        Skill {
            name: "Tailwind CSS",
            icon: "devicon-tailwindcss-original",
            color: "#06B6D4",
            level: 93,
        },
        Skill {
            name: "Next.js",
            icon: "devicon-nextjs-plain",
            color: "#000000",
            level: 83,
        },
        Skill {
            name: "React Query",
            icon: "devicon-react-plain",
            color: "#FF4154",
            level: 88,
        },
        Skill {
            name: "Git",
            icon: "devicon-git-plain",
            color: "#F05032",
            level: 90,
        },
    ]
}

/// Free-form expertise tags shown under the skills grid.
pub const EXTRA_EXPERTISE: &[&str] = &[
    "RESTful APIs",
    "GraphQL",
    "JWT Authentication",
    "Redux",
    "Zustand",
    "Context API",
    "Socket.io",
    "UI/UX Design",
    "HubSpot CRM",
];

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            title: "Executive Web Developer",
            company: "Capanicus",
            location: "Mohali, Chandigarh, Punjab",
            period: "Nov 2024 – Present",
            highlights: &[
                "Implemented telephony features (DID number provisioning, IVR configuration) and real-time calling using JsSIP and WebSockets.",
                "Designed and delivered real-time chat and presence features to improve user responsiveness and reliability.",
                "Integrated Jitsi-based video conferencing with advanced controls (mute/unmute, camera, background effects).",
                "Built modern UIs using Tailwind CSS and Ant Design components with responsive and accessible design.",
                "Integrated HubSpot and Monday.com with two-way sync for contacts and tasks to streamline workflows.",
                "Developed custom browser extension features to extend web app functionality.",
            ],
            technologies: &["React", "React query", "Zustand", "Socket.io", "Tailwind CSS"],
        },
        Job {
            title: "Software Engineer",
            company: "Wits Innovation Lab",
            location: "Kharar, Punjab",
            period: "Sep 2022 – Oct 2024",
            highlights: &[
                "Built ChatGPT-powered platform with voice Q&A and image-based responses using OpenAI APIs.",
                "Developed HRMS with role-based access controls, Google OAuth, Redux-managed themes, and secure routing.",
                "Implemented e-commerce features and payment flows with Razorpay & Stripe; added QR-code and ONDC buyer integrations.",
                "Built interactive video player with speed control, zoom, rotate, and canvas drawing tools.",
            ],
            technologies: &["React", "Redux", "Node.js", "MongoDB", "Express.js", "AI/ML"],
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Shop-Zone",
            description: "A modern e-commerce frontend built with React, TypeScript, Redux, and Tailwind CSS. Features include a responsive UI, product listings, and state management with Redux.",
            image: "/shop-zone.png",
            technologies: &["React", "TypeScript", "Redux", "Tailwind CSS"],
            live_url: Some("https://sakshijha8.github.io/Shop-Zone/"),
            github_url: Some("https://github.com/sakshijha8/Shop-Zone"),
        },
        Project {
            title: "AI Summarizer Extension",
            description: "A lightweight Chrome Extension that summarizes any webpage or YouTube video using AI. Provides concise summaries to help users save time and focus on key points.",
            image: "/ai-summarizer.png",
            technologies: &["React", "TypeScript", "OpenAI API", "Chrome Extensions"],
            live_url: None,
            github_url: Some("https://github.com/sakshijha8/AI-Summarizer-Extension"),
        },
        Project {
            title: "Firebase Chat App",
            description: "A real-time chat application built with React.js and Firebase, featuring authentication, direct and group chats, message editing/deletion, and real-time sync.",
            image: "/firebase-chat.png",
            technologies: &["React", "Firebase", "React Router", "Tailwind CSS", "React Icons"],
            live_url: None,
            github_url: Some("https://github.com/sakshijha8/Firebase-Realtime-Chat"),
        },
        Project {
            title: "Wil Website",
            description: "Wits Innovation Lab is an innovative company focused on driving business growth through the power of cutting-edge technologies. This project involved creating a dynamic and user-friendly company website to solve complex problems.",
            image: "https://images.pexels.com/photos/5077047/pexels-photo-5077047.jpeg?auto=compress&cs=tinysrgb&w=600",
            technologies: &["Next.js", "Material UI", "React Hook Form", "Yup"],
            live_url: Some("https://www.thewitslab.com/"),
            github_url: None,
        },
    ]
}

pub fn contact_methods() -> Vec<ContactMethod> {
    vec![
        ContactMethod {
            label: "Email",
            value: "sakshijha882@gmail.com",
            href: "mailto:sakshijha882@gmail.com",
            icon: "extra-email",
        },
        ContactMethod {
            label: "WhatsApp",
            value: "+91 9876677682",
            href: "https://wa.me/919876677682",
            icon: "extra-phone",
        },
        ContactMethod {
            label: "Location",
            value: "Mohali, India",
            href: "#contact",
            icon: "extra-location",
        },
    ]
}

pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            label: "GitHub",
            href: "https://github.com/sakshijha8",
            icon: "devicon-github-plain",
        },
        SocialLink {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/sakshi-jha-a332b8217/",
            icon: "devicon-linkedin-plain",
        },
        SocialLink {
            label: "Email",
            href: "mailto:sakshijha882@gmail.com",
            icon: "extra-email",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn href_ok(href: &str) -> bool {
        href.starts_with("https://")
            || href.starts_with("mailto:")
            || href.starts_with('/')
            || href.starts_with('#')
    }

    #[test]
    fn skill_levels_are_percentages() {
        for skill in skills() {
            assert!(skill.level <= 100, "{} level out of range", skill.name);
            assert!(!skill.name.is_empty());
            assert!(skill.color.starts_with('#') && skill.color.len() == 7);
        }
    }

    #[test]
    fn jobs_have_highlights_and_technologies() {
        for job in jobs() {
            assert!(!job.title.is_empty());
            assert!(!job.highlights.is_empty(), "{} has no highlights", job.company);
            assert!(!job.technologies.is_empty());
        }
    }

    #[test]
    fn project_links_are_absolute() {
        for project in projects() {
            assert!(!project.description.is_empty());
            for url in project.live_url.iter().chain(project.github_url.iter()) {
                assert!(url.starts_with("https://"), "{url}");
            }
            // every project must be reachable one way or the other
            assert!(project.live_url.is_some() || project.github_url.is_some());
        }
    }

    #[test]
    fn contact_and_social_hrefs_resolve() {
        for method in contact_methods() {
            assert!(href_ok(method.href), "{}", method.href);
        }
        for link in social_links() {
            assert!(href_ok(link.href), "{}", link.href);
        }
    }

    #[test]
    fn section_links_are_in_page_anchors() {
        for (label, href) in SECTION_LINKS {
            assert!(!label.is_empty());
            assert!(href.starts_with('#'), "{href} is not an in-page anchor");
        }
    }
}
