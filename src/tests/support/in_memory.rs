//! Vec-backed implementations of the outgoing ports.
//!
//! Each store is its own repository and query, so the same instance can be
//! handed to both sides of a use-case bundle. Lists come back newest first.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::{About, AboutChanges, NewAbout};
use crate::modules::about::application::domain::profile_items::{AboutItem, AboutSection};
use crate::modules::about::application::ports::outgoing::{
    AboutListFilter, AboutQuery, AboutQueryError, AboutRepository, AboutRepositoryError,
};
use crate::modules::contact::application::domain::entities::{
    Contact, ContactChanges, ContactStatus, NewContact,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactListFilter, ContactQuery, ContactQueryError, ContactRepository, ContactRepositoryError,
};
use crate::modules::project::application::domain::entities::{
    NewProject, Project, ProjectChanges,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};
use crate::shared::patch::PatchField;

fn matches_search(search: &Option<String>, fields: &[&str]) -> bool {
    match search {
        None => true,
        Some(term) => {
            let term = term.to_lowercase();
            fields.iter().any(|f| f.to_lowercase().contains(&term))
        }
    }
}

fn paginate<T: Clone>(items: Vec<T>, page: PageRequest) -> PageResult<T> {
    let total = items.len() as u64;
    let items = items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.per_page as usize)
        .collect();

    PageResult {
        items,
        total,
        page: page.page,
        per_page: page.per_page,
    }
}

// ──────────────────────────────────────────────────────────
// About
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryAboutStore {
    abouts: Arc<RwLock<Vec<About>>>,
}

impl InMemoryAboutStore {
    pub fn all(&self) -> Vec<About> {
        self.abouts.read().unwrap().clone()
    }

    fn edit<F>(&self, about_id: Uuid, edit: F) -> Result<About, AboutRepositoryError>
    where
        F: FnOnce(&mut Vec<About>, usize) -> Result<(), AboutRepositoryError>,
    {
        let mut abouts = self.abouts.write().unwrap();
        let index = abouts
            .iter()
            .position(|a| a.id == about_id)
            .ok_or(AboutRepositoryError::NotFound)?;

        edit(&mut *abouts, index)?;
        abouts[index].updated_at = Utc::now();
        Ok(abouts[index].clone())
    }

    fn filtered(&self, filter: &AboutListFilter) -> Vec<About> {
        self.abouts
            .read()
            .unwrap()
            .iter()
            .rev()
            .filter(|a| {
                matches_search(&filter.search, &[a.title.as_str(), a.description.as_str()])
            })
            .cloned()
            .collect()
    }
}

fn activate(abouts: &mut [About], index: usize) {
    for (i, about) in abouts.iter_mut().enumerate() {
        about.active = i == index;
    }
}

#[async_trait]
impl AboutRepository for InMemoryAboutStore {
    async fn create_about(&self, data: NewAbout) -> Result<About, AboutRepositoryError> {
        let now = Utc::now();
        let about = About {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            avatar: data.avatar,
            active: data.active,
            skills: data.skills,
            education: data.education,
            experience: data.experience,
            social_links: data.social_links,
            created_at: now,
            updated_at: now,
        };

        let mut abouts = self.abouts.write().unwrap();
        abouts.push(about.clone());
        if about.active {
            let index = abouts.len() - 1;
            activate(&mut abouts[..], index);
        }

        Ok(about)
    }

    async fn update_about(
        &self,
        about_id: Uuid,
        changes: AboutChanges,
    ) -> Result<About, AboutRepositoryError> {
        self.edit(about_id, |abouts, index| {
            if changes.activates() {
                activate(abouts, index);
            }

            let about = &mut abouts[index];
            if let PatchField::Value(title) = changes.title {
                about.title = title;
            }
            if let PatchField::Value(description) = changes.description {
                about.description = description;
            }
            about.avatar = changes.avatar.apply_to(about.avatar.take());
            if changes.active == Some(false) {
                about.active = false;
            }
            if let Some(skills) = changes.skills {
                about.skills = skills;
            }
            if let Some(education) = changes.education {
                about.education = education;
            }
            if let Some(experience) = changes.experience {
                about.experience = experience;
            }
            about.social_links = changes.social_links.apply_to(about.social_links.take());
            Ok(())
        })
    }

    async fn set_active(&self, about_id: Uuid) -> Result<About, AboutRepositoryError> {
        self.edit(about_id, |abouts, index| {
            activate(abouts, index);
            Ok(())
        })
    }

    async fn add_item(
        &self,
        about_id: Uuid,
        item: AboutItem,
    ) -> Result<About, AboutRepositoryError> {
        self.edit(about_id, |abouts, index| {
            abouts[index].push_item(item);
            Ok(())
        })
    }

    async fn remove_item(
        &self,
        about_id: Uuid,
        section: AboutSection,
        item_id: Uuid,
    ) -> Result<About, AboutRepositoryError> {
        self.edit(about_id, |abouts, index| {
            if abouts[index].remove_item(section, item_id) {
                Ok(())
            } else {
                Err(AboutRepositoryError::ItemNotFound(section))
            }
        })
    }

    async fn delete_about(&self, about_id: Uuid) -> Result<About, AboutRepositoryError> {
        let mut abouts = self.abouts.write().unwrap();
        let index = abouts
            .iter()
            .position(|a| a.id == about_id)
            .ok_or(AboutRepositoryError::NotFound)?;

        Ok(abouts.remove(index))
    }
}

#[async_trait]
impl AboutQuery for InMemoryAboutStore {
    async fn get_by_id(&self, about_id: Uuid) -> Result<About, AboutQueryError> {
        self.abouts
            .read()
            .unwrap()
            .iter()
            .find(|a| a.id == about_id)
            .cloned()
            .ok_or(AboutQueryError::NotFound)
    }

    async fn get_active(&self) -> Result<About, AboutQueryError> {
        self.abouts
            .read()
            .unwrap()
            .iter()
            .find(|a| a.active)
            .cloned()
            .ok_or(AboutQueryError::NotFound)
    }

    async fn list(&self, filter: AboutListFilter) -> Result<Vec<About>, AboutQueryError> {
        Ok(self.filtered(&filter))
    }

    async fn page(
        &self,
        filter: AboutListFilter,
        page: PageRequest,
    ) -> Result<PageResult<About>, AboutQueryError> {
        Ok(paginate(self.filtered(&filter), page))
    }
}

// ──────────────────────────────────────────────────────────
// Contacts
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryContactStore {
    contacts: Arc<RwLock<Vec<Contact>>>,
}

impl InMemoryContactStore {
    pub fn all(&self) -> Vec<Contact> {
        self.contacts.read().unwrap().clone()
    }

    fn edit<F>(&self, contact_id: Uuid, edit: F) -> Result<Contact, ContactRepositoryError>
    where
        F: FnOnce(&mut Contact),
    {
        let mut contacts = self.contacts.write().unwrap();
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == contact_id)
            .ok_or(ContactRepositoryError::NotFound)?;

        edit(contact);
        contact.updated_at = Utc::now();
        Ok(contact.clone())
    }

    fn filtered(&self, filter: &ContactListFilter) -> Vec<Contact> {
        self.contacts
            .read()
            .unwrap()
            .iter()
            .rev()
            .filter(|c| {
                matches_search(
                    &filter.search,
                    &[c.name.as_str(), c.email.as_str(), c.subject.as_str()],
                )
            })
            .filter(|c| filter.read.map_or(true, |read| c.read == read))
            .filter(|c| filter.replied.map_or(true, |replied| c.replied == replied))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactStore {
    async fn create_contact(&self, data: NewContact) -> Result<Contact, ContactRepositoryError> {
        let now = Utc::now();
        let contact = Contact {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            subject: data.subject,
            message: data.message,
            read: false,
            replied: false,
            created_at: now,
            updated_at: now,
        };

        self.contacts.write().unwrap().push(contact.clone());
        Ok(contact)
    }

    async fn update_contact(
        &self,
        contact_id: Uuid,
        changes: ContactChanges,
    ) -> Result<Contact, ContactRepositoryError> {
        let requested = changes.requested_status();

        self.edit(contact_id, |contact| {
            if let PatchField::Value(name) = changes.name {
                contact.name = name;
            }
            if let PatchField::Value(email) = changes.email {
                contact.email = email;
            }
            if let PatchField::Value(subject) = changes.subject {
                contact.subject = subject;
            }
            if let PatchField::Value(message) = changes.message {
                contact.message = message;
            }
            contact.phone = changes.phone.apply_to(contact.phone.take());

            if let Some(status) = requested {
                let next = contact.status().advance_to(status);
                contact.set_status(next);
            }
        })
    }

    async fn advance_status(
        &self,
        contact_id: Uuid,
        status: ContactStatus,
    ) -> Result<Contact, ContactRepositoryError> {
        self.edit(contact_id, |contact| {
            let next = contact.status().advance_to(status);
            contact.set_status(next);
        })
    }

    async fn delete_contact(&self, contact_id: Uuid) -> Result<Contact, ContactRepositoryError> {
        let mut contacts = self.contacts.write().unwrap();
        let index = contacts
            .iter()
            .position(|c| c.id == contact_id)
            .ok_or(ContactRepositoryError::NotFound)?;

        Ok(contacts.remove(index))
    }
}

#[async_trait]
impl ContactQuery for InMemoryContactStore {
    async fn get_by_id(&self, contact_id: Uuid) -> Result<Contact, ContactQueryError> {
        self.contacts
            .read()
            .unwrap()
            .iter()
            .find(|c| c.id == contact_id)
            .cloned()
            .ok_or(ContactQueryError::NotFound)
    }

    async fn list(&self, filter: ContactListFilter) -> Result<Vec<Contact>, ContactQueryError> {
        Ok(self.filtered(&filter))
    }

    async fn page(
        &self,
        filter: ContactListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Contact>, ContactQueryError> {
        Ok(paginate(self.filtered(&filter), page))
    }
}

// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryProjectStore {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectStore {
    pub fn all(&self) -> Vec<Project> {
        self.projects.read().unwrap().clone()
    }

    fn filtered(&self, filter: &ProjectListFilter) -> Vec<Project> {
        self.projects
            .read()
            .unwrap()
            .iter()
            .rev()
            .filter(|p| {
                matches_search(&filter.search, &[p.title.as_str(), p.description.as_str()])
            })
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectStore {
    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            image_url: data.image_url,
            technologies: data.technologies,
            github_url: data.github_url,
            live_url: data.live_url,
            created_at: now,
            updated_at: now,
        };

        self.projects.write().unwrap().push(project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut projects = self.projects.write().unwrap();
        let project = projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        if let PatchField::Value(title) = changes.title {
            project.title = title;
        }
        if let PatchField::Value(description) = changes.description {
            project.description = description;
        }
        project.image_url = changes.image_url.apply_to(project.image_url.take());
        project.technologies = changes
            .technologies
            .apply_to(Some(std::mem::take(&mut project.technologies)))
            .unwrap_or_default();
        project.github_url = changes.github_url.apply_to(project.github_url.take());
        project.live_url = changes.live_url.apply_to(project.live_url.take());
        project.updated_at = Utc::now();

        Ok(project.clone())
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<Project, ProjectRepositoryError> {
        let mut projects = self.projects.write().unwrap();
        let index = projects
            .iter()
            .position(|p| p.id == project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        Ok(projects.remove(index))
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjectStore {
    async fn get_by_id(&self, project_id: Uuid) -> Result<Project, ProjectQueryError> {
        self.projects
            .read()
            .unwrap()
            .iter()
            .find(|p| p.id == project_id)
            .cloned()
            .ok_or(ProjectQueryError::NotFound)
    }

    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectQueryError> {
        Ok(self.filtered(&filter))
    }

    async fn page(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Project>, ProjectQueryError> {
        Ok(paginate(self.filtered(&filter), page))
    }
}
