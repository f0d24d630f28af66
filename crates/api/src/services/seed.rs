//! Startup seeding of showcase data.

use persistence::repositories::{NewProject, ProjectRepository};
use sqlx::PgPool;
use tracing::info;

/// Seeds the projects table with showcase entries when it is empty.
pub async fn seed_projects(pool: &PgPool) -> Result<(), sqlx::Error> {
    let repo = ProjectRepository::new(pool.clone());

    if repo.count().await? > 0 {
        return Ok(());
    }

    let seed_projects = [
        NewProject {
            title: "DevTools Analytics Dashboard",
            description: "A privacy-first analytics tool for developer documentation sites.",
            author: "alex_builds",
            status: "Shipped",
        },
        NewProject {
            title: "Focus Mode Extension",
            description:
                "Browser extension that blocks distraction feeds during deep work sessions.",
            author: "sarah_k",
            status: "Shipped",
        },
        NewProject {
            title: "SaaS Starter Kit",
            description: "Next.js + Stripe + Supabase boilerplate for rapid prototyping.",
            author: "mike_codes",
            status: "In Progress",
        },
        NewProject {
            title: "CLI Task Manager",
            description: "Rust-based command line tool for managing daily engineering tasks.",
            author: "jason_dev",
            status: "Shipped",
        },
    ];

    for project in seed_projects {
        repo.create(project).await?;
    }

    info!("Seeded database with initial projects");
    Ok(())
}
