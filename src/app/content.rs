//! Static display content. Everything here is read-only data; no record is
//! ever mutated at runtime.

pub struct NavItem {
    pub label: &'static str,
    /// Anchor id of the section the item scrolls to.
    pub section: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        section: "hero",
    },
    NavItem {
        label: "About",
        section: "about",
    },
    NavItem {
        label: "Projects",
        section: "projects",
    },
    NavItem {
        label: "Achievements",
        section: "achievements",
    },
    NavItem {
        label: "Contact",
        section: "contact",
    },
];

pub struct Skill {
    pub name: &'static str,
    /// Icon-font class, rendered as `<i class=...>`.
    pub icon: &'static str,
    pub color: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "HTML5",
        icon: "devicon-html5-plain",
        color: "text-orange-500",
    },
    Skill {
        name: "CSS3",
        icon: "devicon-css3-plain",
        color: "text-blue-500",
    },
    Skill {
        name: "JavaScript",
        icon: "devicon-javascript-plain",
        color: "text-yellow-500",
    },
    Skill {
        name: "React",
        icon: "devicon-react-original",
        color: "text-cyan-500",
    },
    Skill {
        name: "Rust",
        icon: "devicon-rust-original",
        color: "text-green-500",
    },
    Skill {
        name: "TypeScript",
        icon: "devicon-typescript-plain",
        color: "text-blue-600",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Code Tracker Website",
        description: "A full-stack app to track, manage, and analyze coding progress.",
        image: "/image-uploads/code-tracker.png",
        tech: &["React", "Node.js", "Supabase", "PostgreSQL"],
        link: "#",
    },
    Project {
        title: "Interactive 3D Portfolio",
        description: "A modern portfolio powered by 3D visuals and timeline animations.",
        image: "/image-uploads/portfolio-3d.png",
        tech: &["React", "Tailwind", "GSAP", "Spline"],
        link: "#",
    },
    Project {
        title: "Animation Tools Site",
        description: "Modern web animation tools showcase with dynamic interactions.",
        image: "/image-uploads/animation-tools.png",
        tech: &["React", "Bootstrap", "Framer Motion"],
        link: "#",
    },
    Project {
        title: "3D Image Rotator",
        description: "Spin and explore images in a smooth, interactive 3D view.",
        image: "/image-uploads/image-rotator.png",
        tech: &["HTML", "CSS", "JS"],
        link: "#",
    },
    Project {
        title: "Text Converter",
        description: "An immersive web tool that combines interactive visuals with powerful \
                      text transformation features.",
        image: "/image-uploads/text-converter.png",
        tech: &["Three.js", "WebGL", "React"],
        link: "#",
    },
    Project {
        title: "Gaming UI Dice Roller",
        description: "Next-level gaming interface with real-time data visualization.",
        image: "/image-uploads/dice-roller.png",
        tech: &["HTML", "CSS", "JavaScript"],
        link: "#",
    },
];

/// Number that counts up from zero when the achievements section enters.
pub struct Counter {
    pub target: u32,
    pub suffix: &'static str,
}

pub struct Achievement {
    pub icon: &'static str,
    /// Static title, or the suffix text after a counted number.
    pub title: &'static str,
    pub counter: Option<Counter>,
    pub description: &'static str,
    pub accent: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        icon: "ph ph-scroll",
        title: "Google AI/ML Certified",
        counter: None,
        description: "Certified AI/ML Developer Intern",
        accent: "neon-blue",
    },
    Achievement {
        icon: "ph ph-code",
        title: "LeetCode Problems",
        counter: Some(Counter {
            target: 220,
            suffix: "+ LeetCode Problems",
        }),
        description: "Solved complex algorithms",
        accent: "neon-cyan",
    },
    Achievement {
        icon: "ph ph-scroll",
        title: "Oracle Certified Foundations Associate",
        counter: None,
        description: "Recognized by Oracle Corporation as Oracle Certified.",
        accent: "neon-blue",
    },
    Achievement {
        icon: "ph ph-users",
        title: "Cloud Computing NPTEL Certified",
        counter: None,
        description: "NPTEL",
        accent: "neon-purple",
    },
    Achievement {
        icon: "ph ph-trophy",
        title: "3 Hackathons participated",
        counter: None,
        description: "Team competitions across web and ML tracks",
        accent: "neon-pink",
    },
    Achievement {
        icon: "ph ph-target",
        title: "Success Rate",
        counter: Some(Counter {
            target: 100,
            suffix: "% Success Rate",
        }),
        description: "On-time delivery across every project",
        accent: "neon-blue",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/vamsi-krishna-neelam",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/vamsi-krishna-neelam-37171b293/",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "LeetCode",
        href: "https://leetcode.com/u/Neelam_Vamsi_Krishna/",
        icon: "ph ph-code",
    },
];

pub const OWNER_NAME: &str = "Vamsi Krishna";
pub const OWNER_ROLE: &str = "Web Developer";
