pub const BUILD_YEAR: &str = env!("BUILD_YEAR");
pub const FAVICON: &str = "/favicon.svg";

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub intro: &'static str,
    pub portrait: &'static str,
    pub resume: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Moses Rono",
    role: "Full Stack Developer",
    intro: "Passionate about creating beautiful, functional, and user-centered digital experiences. \
        Specialized in modern web technologies and always eager to learn new skills.",
    portrait: "/profile.svg",
    resume: "/resume.pdf",
};

/// Role strings cycled by the hero typewriter, in display order.
pub const ROLES: &[&str] = &[
    "Full Stack Developer",
    "Frontend Engineer",
    "UI/UX Enthusiast",
    "Problem Solver",
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution with modern UI/UX, payment integration, and admin dashboard.",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=500&h=300&fit=crop",
        link: "https://github.com/Rohn500",
    },
    Project {
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates and team collaboration features.",
        technologies: &["React", "Firebase", "TypeScript", "Material-UI"],
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=500&h=300&fit=crop",
        link: "https://github.com/Rohn500",
    },
    Project {
        title: "Weather Dashboard",
        description: "A responsive weather application with location-based forecasts and interactive maps.",
        technologies: &["Vue.js", "API Integration", "Chart.js", "CSS3"],
        image: "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?w=500&h=300&fit=crop",
        link: "https://github.com/Rohn500",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
}

impl Skill {
    /// CSS width of the proficiency bar.
    pub fn width(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", level: 90 },
    Skill { name: "TypeScript", level: 85 },
    Skill { name: "Node.js", level: 80 },
    Skill { name: "Python", level: 75 },
    Skill { name: "CSS/SCSS", level: 90 },
    Skill { name: "MongoDB", level: 70 },
    Skill { name: "Git", level: 85 },
    Skill { name: "AWS", level: 65 },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub caption: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "50+", caption: "Projects Completed" },
    Stat { value: "3+", caption: "Years Experience" },
    Stat { value: "20+", caption: "Happy Clients" },
];

pub const ABOUT: &[&str] = &[
    "I'm a passionate full-stack developer with over 3 years of experience in creating digital \
    solutions that make a difference. My journey in web development started with a curiosity about \
    how things work on the internet, and it has evolved into a career focused on crafting exceptional \
    user experiences.",
    "I specialize in React, Node.js, and modern web technologies. When I'm not coding, you can find \
    me exploring new technologies, contributing to open-source projects, or sharing knowledge with the \
    developer community.",
];

#[derive(Debug, Clone, Copy)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { label: "Email", value: "mosesrono@gmail.com" },
    ContactDetail { label: "Phone", value: "+254 (7) 16 761 292" },
    ContactDetail { label: "Location", value: "Kutus, Kirinyaga" },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: "https://github.com/Rohn500" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com" },
    SocialLink { label: "Twitter", href: "https://twitter.com" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_percentages() {
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} is over 100%", skill.name);
        }
        assert_eq!(SKILLS[0].width(), "width: 90%");
    }

    #[test]
    fn test_skill_width_clamps() {
        let skill = Skill { name: "Rust", level: 150 };
        assert_eq!(skill.width(), "width: 100%");
    }

    #[test]
    fn test_projects_have_tags_and_links() {
        assert_eq!(PROJECTS.len(), 3);
        for project in PROJECTS {
            assert!(!project.technologies.is_empty());
            assert!(project.link.starts_with("https://"));
        }
        // tag order is preserved
        assert_eq!(PROJECTS[0].technologies, &["React", "Node.js", "MongoDB", "Stripe"]);
    }

    #[test]
    fn test_linked_assets_exist() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in [PROFILE.portrait, PROFILE.resume, FAVICON] {
            let path = public.join(asset.trim_start_matches('/'));
            assert!(path.is_file(), "missing asset {}", path.display());
        }
    }

    #[test]
    fn test_roles_not_empty() {
        assert!(!ROLES.is_empty());
        assert_eq!(ROLES[0], PROFILE.role);
    }
}
