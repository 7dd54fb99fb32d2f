use task_cli::commands::Cli;
use task_cli::libs::logging;

fn main() {
    // Load .env file if it exists
    let _ = dotenv::dotenv();
    logging::init();

    Cli::menu();
}
