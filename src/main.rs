use azure_rg_export::args::Args;
use azure_rg_export::azure::AzCli;
use azure_rg_export::output;
use azure_rg_export::Orchestrator;
use clap::Parser;
use colored::Colorize;
use std::process;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    azure_rg_export::logging::init(&args.log_config);
    //
    log::info!("#Start main()");

    let config = args.config();
    let request_line = match args.request_line() {
        Some(line) => line,
        None => {
            let stdin = std::io::stdin();
            match output::prompt_for_groups(stdin.lock(), std::io::stdout()) {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("{} {e}", "ERROR".on_red());
                    process::exit(e.exit_code());
                }
            }
        }
    };

    let location = config.location.clone();
    let orchestrator = Orchestrator::new(AzCli::from_config(&config), config);
    match orchestrator.run(&request_line) {
        Ok(report) => {
            output::print_summary(&report, &location);
            process::exit(report.exit_code());
        }
        Err(e) => {
            log::error!("Export aborted: {e}");
            eprintln!("{} {e}", "ERROR".on_red());
            process::exit(e.exit_code());
        }
    }
}
