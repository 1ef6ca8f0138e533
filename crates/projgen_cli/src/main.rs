//! Command-line front end for the project generator.
//!
//! # Responsibility
//! - Translate flags into core calls and print what the core returns.
//! - Write exported plans to disk when asked.
//!
//! # Invariants
//! - No selection or formatting logic lives here; the core owns both.
//! - Randomness is seeded here and passed down explicitly.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use projgen_core::{
    default_log_level, init_logging, plan_file_name, render_plan, Catalog, CatalogStats,
    ExportFormat, ProjectGenerator, ProjectRecord, RecordQuery, SelectionCriteria,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

const DEFAULT_TOP_TECHNOLOGIES: usize = 10;

/// Recommend a learning project and export it as a plan
#[derive(Parser)]
#[command(name = "projgen", version, long_about = None)]
struct Cli {
    /// Log level (trace|debug|info|warn|error); only used together with --log-dir
    #[arg(long, global = true, env = "PROJGEN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "PROJGEN_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick one project matching the given criteria
    Generate {
        /// Domain key (cybersecurity|data_analytics|artificial_intelligence|cloud_security);
        /// all domains when unset
        #[arg(long)]
        domain: Option<String>,

        /// Experience level key (beginner|intermediate|advanced); all levels when unset
        #[arg(long)]
        level: Option<String>,

        /// Preferred technology; repeat or separate with commas
        #[arg(long = "tech", value_delimiter = ',')]
        tech: Vec<String>,

        /// Maximum project duration in weeks
        #[arg(long)]
        max_weeks: Option<u32>,

        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// List catalog projects
    List {
        /// Restrict to one domain key
        #[arg(long)]
        domain: Option<String>,

        /// Restrict to one experience level key
        #[arg(long)]
        level: Option<String>,
    },
    /// Export a catalog project by its exact title
    Export {
        /// Project title
        #[arg(long)]
        title: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show catalog statistics
    Stats {
        /// Number of technologies to rank
        #[arg(long, default_value_t = DEFAULT_TOP_TECHNOLOGIES)]
        top: usize,
    },
    /// Show featured projects
    Featured,
}

#[derive(Args)]
struct OutputArgs {
    /// Plan format (markdown|json)
    #[arg(long, default_value = "markdown")]
    format: String,

    /// Write the plan to this file, or into this directory under its default name
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = log_level_or_default(cli.log_level.as_deref());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    } else if let Some(level) =
        ignored_log_level(cli.log_level.as_deref(), cli.log_dir.as_deref())
    {
        eprintln!("warning: log level `{level}` ignored because no log directory is set");
    }

    let catalog = Catalog::builtin().context("failed to load built-in catalog")?;
    let generator = ProjectGenerator::new(catalog);

    match cli.command {
        Commands::Generate {
            domain,
            level,
            tech,
            max_weeks,
            seed,
            output,
        } => {
            let tech = clean_tech_preferences(tech);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let record = match (domain, level) {
                (Some(domain), Some(level)) => {
                    let mut criteria =
                        SelectionCriteria::new(domain, level).with_tech_preferences(tech);
                    criteria.max_duration_weeks = max_weeks;
                    generator.select(&criteria, &mut rng)?
                }
                (domain, level) => generator.select_from(
                    &RecordQuery { domain, level },
                    &tech,
                    max_weeks,
                    &mut rng,
                )?,
            };
            info!(
                "event=cli_generate module=cli status=ok seeded={}",
                seed.is_some()
            );
            emit_plan(&record, &output)
        }
        Commands::List { domain, level } => {
            let records = generator.all_records(&RecordQuery { domain, level });
            for record in &records {
                println!("{}", list_line(record));
            }
            Ok(())
        }
        Commands::Export { title, output } => {
            let Some(record) = catalog.find_by_title(&title) else {
                bail!("no project titled `{title}`");
            };
            emit_plan(&record, &output)
        }
        Commands::Stats { top } => {
            let records = generator.all_records(&RecordQuery::all());
            print_stats(&CatalogStats::from_records(&records, top));
            Ok(())
        }
        Commands::Featured => {
            for record in catalog.featured() {
                println!("{}", list_line(&record));
            }
            Ok(())
        }
    }
}

fn log_level_or_default(log_level: Option<&str>) -> &str {
    log_level.unwrap_or(default_log_level())
}

/// Returns the level that has no effect because logging stays off.
fn ignored_log_level<'a>(log_level: Option<&'a str>, log_dir: Option<&str>) -> Option<&'a str> {
    match log_dir {
        Some(_) => None,
        None => log_level,
    }
}

fn clean_tech_preferences(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

fn emit_plan(record: &ProjectRecord, output: &OutputArgs) -> Result<()> {
    let format: ExportFormat = output.format.parse()?;
    let plan = render_plan(record, format)?;

    let Some(target) = output.output.as_deref() else {
        print!("{plan}");
        return Ok(());
    };

    let path = resolve_output_path(target, record, format);
    std::fs::write(&path, plan)
        .with_context(|| format!("failed to write plan to `{}`", path.display()))?;
    info!("event=plan_written module=cli status=ok format={}", format);
    println!("Project plan saved to: {}", path.display());
    Ok(())
}

fn resolve_output_path(target: &Path, record: &ProjectRecord, format: ExportFormat) -> PathBuf {
    if target.is_dir() {
        target.join(plan_file_name(record, format))
    } else {
        target.to_path_buf()
    }
}

fn list_line(record: &ProjectRecord) -> String {
    let domain = record.domain.map_or("-", |domain| domain.as_str());
    let level = record.experience_level.map_or("-", |level| level.as_str());
    format!(
        "{domain}/{level}: {} ({}, {})",
        record.title, record.difficulty, record.duration
    )
}

fn print_stats(stats: &CatalogStats) {
    println!("Total Projects: {}", stats.total);

    println!("\nProjects by Domain:");
    for (domain, count) in &stats.by_domain {
        println!("  {}: {count}", domain.label());
    }

    println!("\nProjects by Difficulty:");
    for (difficulty, count) in &stats.by_difficulty {
        println!("  {difficulty}: {count}");
    }

    println!("\nTop {} Technologies:", stats.top_technologies.len());
    for (tech, count) in &stats.top_technologies {
        println!("  {tech}: {count} projects");
    }
}
