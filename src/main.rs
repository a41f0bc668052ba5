use clap::Parser;
use examplan::application::{ExamService, ExamStore};
use examplan::cli::{format_exam_list, Cli, Commands, Menu};
use examplan::error::{ExamError, Result};
use examplan::infrastructure::{FileStorage, Settings};
use std::io;

fn main() {
    let cli = Cli::parse();
    let settings = Settings::resolve(cli.file.clone(), cli.verbose);

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.log_directive())),
        )
        .init();

    match run(cli.command, &settings) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!("exiting with code {}: {:?}", e.exit_code(), e);
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(command: Option<Commands>, settings: &Settings) -> Result<()> {
    let store = ExamStore::new(FileStorage::new(settings.data_file.clone()));
    tracing::debug!("using data file {}", settings.data_file.display());

    let Some(command) = command else {
        let stdin = io::stdin();
        let mut menu = Menu::new(store, stdin.lock(), io::stdout());
        menu.initialize()?;
        return menu.run();
    };

    let mut service = ExamService::new(store);
    service.initialize()?;

    match command {
        Commands::List => {
            let today = chrono::Local::now().date_naive();
            println!("{}", format_exam_list(&service.exams(), today, true).trim_end());
        }
        Commands::Add { name, date } => {
            let exam = service.add(&name, &date)?;
            println!("Added \"{}\" ({})", exam.name, exam.id);
        }
        Commands::Edit { id, name, date } => {
            if name.is_none() && date.is_none() {
                return Err(ExamError::Config(
                    "Nothing to change: pass --name and/or --date".to_string(),
                ));
            }
            let exam = service.edit(&id, name.as_deref(), date.as_deref())?;
            println!("Updated \"{}\" ({})", exam.name, exam.id);
        }
        Commands::Delete { id } => {
            let exam = service.delete(&id)?;
            println!("Deleted \"{}\"", exam.name);
        }
        Commands::Clear { yes } => {
            if !yes {
                return Err(ExamError::Config(
                    "Refusing to delete all exams without --yes".to_string(),
                ));
            }
            let count = service.clear()?;
            println!("Deleted {} exams", count);
        }
    }

    Ok(())
}
