//! Home Page
//!
//! The single-page portfolio: hero with typewriter, then about, projects,
//! skills and contact sections that reveal as they scroll in.

use dioxus::prelude::*;
use portfolio_core::config::PHRASES;

use crate::components::{Reveal, Typewriter};

/// A project card on the home page
#[derive(Clone, Copy, PartialEq, Debug)]
struct Project {
    title: &'static str,
    summary: &'static str,
    stack: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Pipeline Orchestrator",
        summary: "Nightly ingestion of public datasets into a warehouse, with data quality checks at every hop.",
        stack: &["Python", "Airflow", "Postgres"],
    },
    Project {
        title: "Invoice Parser",
        summary: "Pulls line items out of scanned invoices and reconciles them against purchase orders.",
        stack: &["Python", "OCR", "SQLite"],
    },
    Project {
        title: "Metrics Dashboard",
        summary: "Self-serve dashboards over the warehouse for a small operations team.",
        stack: &["SQL", "dbt", "Metabase"],
    },
];

const SKILLS: &[&str] = &[
    "Python", "SQL", "Rust", "dbt", "Airflow", "Postgres", "Docker", "Git",
];

/// Home page with every section
#[component]
pub fn Home() -> Element {
    let phrases: Vec<String> = PHRASES.iter().map(|p| p.to_string()).collect();

    rsx! {
        main {
            section { id: "hero", class: "hero",
                p { class: "hero-eyebrow", "Hello, I'm a data engineer" }
                h1 { class: "hero-title",
                    "I enjoy "
                    Typewriter { phrases: phrases }
                }
                a { class: "hero-cta", href: "#projects", "See my work" }
            }

            section { id: "about", class: "section",
                Reveal { name: "about-heading",
                    h2 { class: "section-title", "About" }
                }
                Reveal { name: "about-body",
                    p { class: "body-text",
                        "I build the plumbing that moves data from where it lands to where it is useful, "
                        "and I like automating anything I have to do twice."
                    }
                }
            }

            section { id: "projects", class: "section",
                Reveal { name: "projects-heading",
                    h2 { class: "section-title", "Projects" }
                }
                div { class: "project-grid",
                    for project in PROJECTS {
                        Reveal { key: "{project.title}", name: project.title.to_string(), class: "project-card".to_string(),
                            h3 { "{project.title}" }
                            p { class: "body-text", "{project.summary}" }
                            ul { class: "stack",
                                for tech in project.stack {
                                    li { key: "{tech}", "{tech}" }
                                }
                            }
                        }
                    }
                }
            }

            section { id: "skills", class: "section",
                Reveal { name: "skills-heading",
                    h2 { class: "section-title", "Skills" }
                }
                Reveal { name: "skills-list",
                    ul { class: "skill-pills",
                        for skill in SKILLS {
                            li { key: "{skill}", class: "pill", "{skill}" }
                        }
                    }
                }
            }

            section { id: "contact", class: "section",
                Reveal { name: "contact",
                    h2 { class: "section-title", "Contact" }
                    p { class: "body-text", "Open to data engineering roles and interesting side projects." }
                    a { class: "hero-cta", href: "mailto:hello@example.com", "Say hello" }
                }
            }
        }
    }
}
