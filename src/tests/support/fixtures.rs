use chrono::Utc;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::{About, NewAbout};
use crate::modules::contact::application::domain::entities::{Contact, NewContact};
use crate::modules::project::application::domain::entities::{NewProject, Project};

// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────

pub fn sample_project() -> Project {
    let now = Utc::now();

    Project {
        id: Uuid::new_v4(),
        title: "Portfolio CMS".to_string(),
        description: "Content API for a personal site".to_string(),
        image_url: Some("https://cdn.example.com/cms.png".to_string()),
        technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
        github_url: Some("https://github.com/ana/cms".to_string()),
        live_url: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn new_project() -> NewProject {
    NewProject {
        title: "Portfolio CMS".to_string(),
        description: "Content API for a personal site".to_string(),
        image_url: None,
        technologies: vec!["Rust".to_string()],
        github_url: Some("https://github.com/ana/cms".to_string()),
        live_url: None,
    }
}

// ──────────────────────────────────────────────────────────
// Contacts
// ──────────────────────────────────────────────────────────

/// An unread, unreplied message.
pub fn sample_contact() -> Contact {
    let now = Utc::now();

    Contact {
        id: Uuid::new_v4(),
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        phone: None,
        subject: "Hello".to_string(),
        message: "I would like to talk about a project.".to_string(),
        read: false,
        replied: false,
        created_at: now,
        updated_at: now,
    }
}

pub fn new_contact() -> NewContact {
    NewContact {
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        phone: None,
        subject: "Hello".to_string(),
        message: "I would like to talk about a project.".to_string(),
    }
}

// ──────────────────────────────────────────────────────────
// About
// ──────────────────────────────────────────────────────────

pub fn sample_about() -> About {
    let now = Utc::now();

    About {
        id: Uuid::new_v4(),
        title: "Hi, I'm Ana".to_string(),
        description: "Backend developer".to_string(),
        avatar: None,
        active: false,
        skills: vec![],
        education: vec![],
        experience: vec![],
        social_links: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn new_about(title: &str, active: bool) -> NewAbout {
    NewAbout {
        title: title.to_string(),
        description: "Backend developer".to_string(),
        avatar: None,
        active,
        skills: vec![],
        education: vec![],
        experience: vec![],
        social_links: None,
    }
}
