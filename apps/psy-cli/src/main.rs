use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use psy_props::CoolPropSource;
use psy_report::{ReportDriver, ReportResult};

#[derive(Parser)]
#[command(name = "psy-cli")]
#[command(about = "Humid-air psychrometric validation tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full validation report
    Report {
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List section ids in report order
    Sections,
    /// Print a single table by section id (e.g. A.6.1, virial-pure)
    Table {
        /// Section id
        section: String,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ReportResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let driver = ReportDriver::new(CoolPropSource::new());

    match cli.command {
        Commands::Report { output } => cmd_report(&driver, output.as_deref()),
        Commands::Sections => cmd_sections(&driver),
        Commands::Table { section, output } => cmd_table(&driver, &section, output.as_deref()),
    }
}

fn cmd_report(driver: &ReportDriver<CoolPropSource>, output: Option<&Path>) -> ReportResult<()> {
    tracing::info!("generating validation report");
    write_with(output, |out| driver.write_report(out))
}

fn cmd_sections(driver: &ReportDriver<CoolPropSource>) -> ReportResult<()> {
    for spec in driver.tables() {
        // A-series titles repeat the section id; don't print it twice
        let title = spec
            .title
            .strip_prefix(spec.id.as_str())
            .map_or(spec.title.as_str(), str::trim_start);
        println!("{:16} {}", spec.id, title);
    }
    Ok(())
}

fn cmd_table(
    driver: &ReportDriver<CoolPropSource>,
    section: &str,
    output: Option<&Path>,
) -> ReportResult<()> {
    tracing::info!(section, "generating table");
    write_with(output, |out| driver.write_section(section, out))
}

fn write_with(
    output: Option<&Path>,
    write: impl FnOnce(&mut dyn Write) -> ReportResult<()>,
) -> ReportResult<()> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            let mut out = BufWriter::new(file);
            write(&mut out)?;
            out.flush()?;
            println!("✓ Wrote {}", path.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write(&mut out)
        }
    }
}
