//! Site footer. Static content only.

use chrono::Datelike;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub to: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

const fn link(label: &'static str, to: &'static str) -> FooterLink {
    FooterLink { label, to }
}

pub const TAGLINE: &str = "Connecting talented professionals with great employers.";

pub const SECTIONS: [FooterSection; 2] = [
    FooterSection {
        title: "For Job Seekers",
        links: &[
            link("Browse Jobs", "/login"),
            link("Create Account", "/login"),
            link("Job Seeker Dashboard", "/login"),
        ],
    },
    FooterSection {
        title: "For Employers",
        links: &[
            link("Post a Job", "/login"),
            link("Create Account", "/login"),
            link("Employer Dashboard", "/employer/dashboard"),
        ],
    },
];

pub const CONTACT: [&str; 2] = ["Email: contact@jobportal.com", "Phone: (123) 456-7890"];

pub const LEGAL: [FooterLink; 2] = [link("Terms", "/terms"), link("Privacy", "/privacy")];

/// Copyright line for the current year.
pub fn copyright() -> String {
    format!(
        "\u{a9} {} JobPortal. All rights reserved.",
        chrono::Local::now().year()
    )
}
