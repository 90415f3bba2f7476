use clap::ArgMatches;
use tracing::error;

use folio_core::projects::ProjectError;
use folio_core::{FolioError, events};

use super::helpers::{describe_error, load_config_with_warning, open_store};

pub fn handle_show_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let id = matches
        .get_one::<String>("id")
        .ok_or("Project id is required")?;
    let json_output = matches.get_flag("json");

    let config = load_config_with_warning();
    let store = open_store(&config);

    let Some(project) = store.get(id) else {
        let e = ProjectError::NotFound { id: id.clone() };
        eprintln!("❌ {}", describe_error(&e));
        error!(
            event = "cli.show_failed",
            id = id,
            error = %e,
            error_code = e.error_code()
        );
        events::log_app_error(&e);
        return Err(e.into());
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(project)?);
        return Ok(());
    }

    println!("{}", project.title());
    println!("   Id:          {}", project.id());
    println!("   Category:    {}", project.category());
    println!("   Description: {}", project.description());
    println!("   Tags:        {}", project.tags().join(", "));
    println!(
        "   Demo:        {}",
        project.demo_link().unwrap_or("(not yet available)")
    );
    println!(
        "   Code:        {}",
        project.code_link().unwrap_or("(not yet available)")
    );
    if let Some(image) = project.image_url() {
        println!("   Image:       {}", image);
    }
    println!("   Created:     {}", project.created_at().format("%Y-%m-%d %H:%M"));
    if let Some(updated_at) = project.updated_at() {
        println!("   Updated:     {}", updated_at.format("%Y-%m-%d %H:%M"));
    }

    Ok(())
}
