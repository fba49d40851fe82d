use clap::Parser;
use hospital_admissions::application::admission::AdmissionService;
use hospital_admissions::domain::ports::PatientRegistryBox;
use hospital_admissions::infrastructure::in_memory::InMemoryPatientRegistry;
use hospital_admissions::interfaces::console::department::DepartmentNotifier;
use hospital_admissions::interfaces::console::menu::{Console, ConsoleConfig};
use hospital_admissions::interfaces::export::{ExportFormat, export_patients};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write the admitted patients to this file when the session ends
    #[arg(long)]
    export: Option<PathBuf>,

    /// Format of the export file
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    export_format: ExportFormat,

    /// Symbol printed in front of amounts
    #[arg(long, default_value = "₹")]
    currency: String,

    /// Never clear the screen between menus
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hospital_admissions=warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let registry: PatientRegistryBox = Box::new(InMemoryPatientRegistry::new());
    let mut service = AdmissionService::new(registry);
    service.register_listener(Box::new(DepartmentNotifier::new(
        io::stdout(),
        cli.currency.clone(),
    )));

    let config = ConsoleConfig {
        currency: cli.currency,
        clear_screen: !cli.no_clear && io::stdout().is_terminal(),
    };
    let mut console = Console::new(io::stdin().lock(), io::stdout(), config);
    console.run(&mut service).into_diagnostic()?;

    if let Some(path) = cli.export {
        let file = File::create(&path).into_diagnostic()?;
        let count =
            export_patients(service.list_patients(), cli.export_format, file).into_diagnostic()?;
        tracing::info!(count, path = %path.display(), "roster exported");
    }

    Ok(())
}
