use utoipa::OpenApi;

use crate::api::schemas::ErrorResponse;
use crate::modules::about::application::domain::entities::{
    About, AboutChanges, NewAbout, SocialLinks,
};
use crate::modules::about::application::domain::profile_items::{
    AboutSection, Education, ExperienceRecord, Skill,
};
use crate::modules::contact::application::domain::entities::{
    Contact, ContactChanges, ContactStatus, NewContact,
};
use crate::modules::project::application::domain::entities::{
    NewProject, Project, ProjectChanges,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Content API for the portfolio site: about profile, contact messages and projects",
    ),
    paths(
        // About endpoints
        crate::modules::about::adapter::incoming::web::routes::get_abouts_handler,
        crate::modules::about::adapter::incoming::web::routes::get_active_about_handler,
        crate::modules::about::adapter::incoming::web::routes::get_about_by_id_handler,
        crate::modules::about::adapter::incoming::web::routes::create_about_handler,
        crate::modules::about::adapter::incoming::web::routes::update_about_handler,
        crate::modules::about::adapter::incoming::web::routes::set_active_about_handler,
        crate::modules::about::adapter::incoming::web::routes::add_about_item_handler,
        crate::modules::about::adapter::incoming::web::routes::remove_about_item_handler,
        crate::modules::about::adapter::incoming::web::routes::delete_about_handler,

        // Contact endpoints
        crate::modules::contact::adapter::incoming::web::routes::get_contacts_handler,
        crate::modules::contact::adapter::incoming::web::routes::get_unread_contacts_handler,
        crate::modules::contact::adapter::incoming::web::routes::get_contact_by_id_handler,
        crate::modules::contact::adapter::incoming::web::routes::create_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::update_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::mark_contact_read_handler,
        crate::modules::contact::adapter::incoming::web::routes::mark_contact_replied_handler,
        crate::modules::contact::adapter::incoming::web::routes::delete_contact_handler,

        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_by_id_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,
    ),
    components(
        schemas(
            ErrorResponse,

            // About
            About,
            NewAbout,
            AboutChanges,
            SocialLinks,
            Skill,
            Education,
            ExperienceRecord,
            AboutSection,

            // Contact
            Contact,
            NewContact,
            ContactChanges,
            ContactStatus,

            // Project
            Project,
            NewProject,
            ProjectChanges,
        )
    ),
    tags(
        (name = "about", description = "About profile endpoints"),
        (name = "contact", description = "Contact message endpoints"),
        (name = "projects", description = "Project management endpoints"),
    )
)]
pub struct ApiDoc;
