//! The page's copy. Everything here is static and ordered as displayed.

use serde::Serialize;

use super::period::{ Period, YearMonth };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub glyph: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Role {
    pub company: &'static str,
    pub title: &'static str,
    pub period: Period,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ProjectLink {
    Private,
    Public {
        label: &'static str,
        url: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub link: ProjectLink,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: &'static str,
    pub headline: &'static str,
    pub focus: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume: &'static str,
}

pub const HERO_ID: &str = "hero";

pub const SECTIONS: &[Section] = &[
    Section { id: "about", label: "About" },
    Section { id: "skills", label: "Skills" },
    Section { id: "experience", label: "Experience" },
    Section { id: "projects", label: "Projects" },
    Section { id: "education", label: "Education" },
    Section { id: "achievements", label: "Achievements" },
    Section { id: "contact", label: "Contact" },
];

pub const CONTACT: Contact = Contact {
    name: "Zeeshan Ahmad",
    headline: "Backend Developer",
    focus: "Backend Developer — NestJS · Node.js · MongoDB · Microservices",
    location: "Jamshedpur, Jharkhand, India",
    email: "zeem1920@gmail.com",
    phone: "+91 79798 25081",
    github: "https://github.com/zeem26",
    linkedin: "https://www.linkedin.com/in/zeem26/",
    resume: "https://drive.google.com/file/d/1jrvQvwH0BFGUCl9wXnXXrepc9BawXMts/view?usp=drive_link",
};

pub const INTRO: &str =
    "I build reliable, test-covered backend systems, real-time features, and integrations \
     (OAuth2 & third-party APIs). Seeking backend roles in India — open to remote/international in future.";

pub const ABOUT: &str =
    "Backend developer experienced in NestJS, Node.js, MongoDB, microservices, and real-time systems. \
     Built and maintained production backends and third-party integrations (OAuth2/Keycloak, Google & Meta APIs). \
     Strong problem-solving background (250+ DSA problems solved). I take pride in writing modular, \
     test-covered code and designing APIs that scale.";

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Strengths",
        items: &["Fast learner", "Reliable delivery", "Problem solving"],
    },
    Highlight {
        title: "Hobbies",
        items: &["Teaching & mentoring", "Traveling", "Astronomy"],
    },
    Highlight {
        title: "Career Goals",
        items: &["Backend roles in India (short-term)", "International opportunities (later)"],
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "NestJS", glyph: "🐈" },
    Skill { name: "Node.js", glyph: "🟩" },
    Skill { name: "MongoDB", glyph: "🍃" },
    Skill { name: "Apache Pulsar", glyph: "📨" },
    Skill { name: "WebSockets", glyph: "🔌" },
    Skill { name: "React (familiar)", glyph: "⚛️" },
    Skill { name: "Redux", glyph: "🔁" },
    Skill { name: "Tailwind CSS", glyph: "🎨" },
    Skill { name: "Jest", glyph: "🧪" },
    Skill { name: "Docker (basic)", glyph: "🐳" },
    Skill { name: "Keycloak (OAuth2)", glyph: "🔐" },
    Skill { name: "Git & GitHub", glyph: "🐙" },
];

pub const EXPERIENCE: &[Role] = &[
    Role {
        company: "Kanlas Technologies",
        title: "Software Engineer (Backend)",
        period: Period::ongoing(YearMonth::new(2024, 12)),
        highlights: &[
            "Leading backend development for a social-platform management SaaS (accounts, posts, ads, analytics across Google, Meta, Threads, YouTube).",
            "Designed & deployed 50+ REST APIs & microservices; Nx monorepo for code reuse.",
            "Contributed to Apache Pulsar adoption for inter-service messaging (~1,000+ concurrent events/sec target).",
            "Maintained ~85% unit test coverage with Jest; authored API & architecture docs.",
            "GitHub contributions: 494 (2025). Employee of the Month (2025).",
        ],
    },
    Role {
        company: "Kanlas Technologies",
        title: "Backend Development Intern",
        period: Period::between(YearMonth::new(2024, 6), YearMonth::new(2024, 12)),
        highlights: &[
            "Built backend from scratch for loyalty & engagement platform (mobile + web).",
            "Engineered 100+ APIs for products, orders, returns, loyalty points, ticketing, admin/customer flows.",
            "Implemented real-time admin–customer chat (WebSockets) with Pulsar; integrated Keycloak (OAuth2), Firebase, SendGrid.",
            "434 GitHub contributions to the loyalty platform repo (2024).",
        ],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Social Platform Manager (Work)",
        summary: "OAuth2 integrations, Pulsar, Nx monorepo, 50+ APIs.",
        link: ProjectLink::Private,
    },
    Project {
        name: "Loyalty Program App (Work)",
        summary: "Backend for loyalty/engagement: 100+ APIs, real-time chat, Firebase, SendGrid.",
        link: ProjectLink::Private,
    },
    Project {
        name: "YouTube Clone (Personal)",
        summary: "React, Redux, Node.js, Express, MongoDB, JWT auth, Firebase Storage.",
        link: ProjectLink::Public {
            label: "Repo: github.com/zeem26",
            url: "https://github.com/zeem26",
        },
    },
];

pub const EDUCATION: &[&str] = &[
    "MCA — Netaji Subhash University — Completed Aug 2024",
    "B.Sc. Mathematics — Kolhan University — 2019–2022",
    "Intermediate — Jharkhand Academic Council — 2017–2019",
    "Matriculation — Vikas Vidhyalaya (CBSE) — 2015–2017",
];

pub const ACHIEVEMENTS: &[&str] = &[
    "Solved 250+ DSA problems on LeetCode, GfG, Coding Ninjas.",
    "GitHub contributions: 434 (loyalty platform, 2024); 494 (social platform, 2025).",
    "Maintained ~85% unit test coverage (Jest) on core services.",
    "Employee of the Month (2025) — Kanlas Technologies.",
];

pub const FOOTER: &str = "© 2025 Zeeshan Ahmad. Built with ❤️ using Rust + Dioxus + Tailwind CSS.";

impl Role {
    pub fn heading(&self) -> String {
        format!("{} — {}", self.company, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_anchors_unique_and_ordered() {
        let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, [
            "about",
            "skills",
            "experience",
            "projects",
            "education",
            "achievements",
            "contact",
        ]);
        let unique: HashSet<_> = ids.iter().chain(std::iter::once(&HERO_ID)).collect();
        assert_eq!(unique.len(), SECTIONS.len() + 1);
    }

    #[test]
    fn test_experience_is_newest_first() {
        assert_eq!(EXPERIENCE[0].period.label(), "Dec 2024 – Present");
        assert!(EXPERIENCE.windows(2).all(|w| w[0].period.start >= w[1].period.start));
        assert_eq!(EXPERIENCE[1].heading(), "Kanlas Technologies — Backend Development Intern");
    }

    #[test]
    fn test_skill_list() {
        assert_eq!(SKILLS.len(), 12);
        assert!(SKILLS.iter().all(|s| !s.name.is_empty() && !s.glyph.is_empty()));
    }
}
