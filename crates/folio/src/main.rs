use folio_core::init_logging;

mod app;
mod commands;
mod table;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    // Quiet unless -v/--verbose was given
    let verbose = matches.get_flag("verbose");
    init_logging(!verbose);

    // Handlers print their own failure message; only the status is left
    if let Err(e) = commands::run_command(&matches) {
        std::process::exit(commands::exit_code(e.as_ref()));
    }
}
