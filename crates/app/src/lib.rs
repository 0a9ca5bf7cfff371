//! Folio application composition root
//!
//! Composes all domain routers into a single application.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use folio_common::Config;
use folio_contact::ContactState;
use folio_delivery::{SinkConfig, SinkFactory};
use folio_github::{GithubConfig, GithubServiceFactory};
use folio_projects::{ProjectCatalog, ProjectsState};
use folio_showcase::ShowcaseState;
use folio_skills::{SkillCatalog, SkillsState};

/// Create the main application router with all routes and state
pub async fn create_app(config: Config, pool: Option<PgPool>) -> Result<Router, anyhow::Error> {
    // Static catalogs are loaded once; a bad catalog fails startup loudly
    let data_dir = Path::new(&config.data_dir);
    let project_catalog = Arc::new(ProjectCatalog::load(data_dir.join("projects.json"))?);
    let skill_catalog = Arc::new(SkillCatalog::load(data_dir.join("skills.json"))?);

    // Contact delivery sink from environment
    let sink_config = SinkConfig::from_env()?;
    let sink = SinkFactory::create(sink_config, pool)?;

    // Repository listing service from environment
    let github_config = GithubConfig::from_env()?;
    let repos = GithubServiceFactory::create(github_config)?;

    let projects_state = ProjectsState {
        catalog: project_catalog,
    };
    let skills_state = SkillsState {
        catalog: skill_catalog,
    };
    let contact_state = ContactState {
        sink: Arc::from(sink),
    };
    let showcase_state = ShowcaseState {
        repos: Arc::from(repos),
    };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Folio API v0.1.0" }))
        .merge(folio_projects::routes().with_state(projects_state))
        .merge(folio_skills::routes().with_state(skills_state))
        .merge(folio_contact::routes().with_state(contact_state))
        .merge(folio_showcase::routes().with_state(showcase_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
