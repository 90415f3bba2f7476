use clap::{Arg, ArgAction, Command};

/// Project field flags shared by `add` (where the required ones are
/// enforced by the store, not clap) and `edit` (where all are optional).
fn project_field_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("title")
                .long("title")
                .short('t')
                .help("Project title"),
        )
        .arg(
            Arg::new("description")
                .long("description")
                .short('d')
                .help("Short description of the project"),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .short('c')
                .help("Category: web, app or game"),
        )
        .arg(
            Arg::new("tags")
                .long("tags")
                .help("Comma-separated tech stack, e.g. 'Rust, WebAssembly'"),
        )
        .arg(
            Arg::new("demo")
                .long("demo")
                .help("Live demo URL ('' or '#' for none)"),
        )
        .arg(
            Arg::new("code")
                .long("code")
                .help("Source code URL ('' or '#' for none)"),
        )
        .arg(Arg::new("image").long("image").help("Preview image URL"))
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}

pub fn build_cli() -> Command {
    Command::new("folio")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage a portfolio of project records")
        .long_about("folio keeps a small catalog of portfolio projects (web, app and game) in a local JSON file. Projects can be added, edited, removed, filtered, searched, and moved between machines with export/import.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(project_field_args(
            Command::new("add").about("Add a new project to the top of the catalog"),
        ))
        .subcommand(project_field_args(
            Command::new("edit")
                .about("Edit a project in place; omitted fields keep their current value")
                .arg(
                    Arg::new("id")
                        .help("Id of the project to edit")
                        .required(true)
                        .index(1),
                ),
        ))
        .subcommand(
            Command::new("rm")
                .about("Remove a project")
                .arg(
                    Arg::new("id")
                        .help("Id of the project to remove")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation prompt")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List projects, optionally for one category")
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .help("all, web, app or game (default from config)"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("search")
                .about("Search titles, descriptions and tags (case-insensitive)")
                .arg(
                    Arg::new("query")
                        .help("Text to look for; empty lists everything")
                        .required(true)
                        .index(1),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show one project in full")
                .arg(
                    Arg::new("id")
                        .help("Id of the project")
                        .required(true)
                        .index(1),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Write the whole catalog to a JSON file")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file (default: vibe-portfolio-YYYY-MM-DD.json in the export directory)"),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Merge projects from an exported JSON file; known ids are skipped")
                .arg(
                    Arg::new("file")
                        .help("File produced by 'folio export'")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Show project count and when the catalog last changed")
                .arg(json_arg()),
        )
}
