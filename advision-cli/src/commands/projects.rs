//! `advision projects list|show|add`

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use advision_core::{Project, ProjectDraft, ProjectId, ProjectRegistry, ProjectStatus};
use advision_renderer::Renderer;

use crate::dashboard::Dashboard;
use crate::sink::TerminalSink;
use crate::{OutputFormat, StatusFilterArg};

/// Browse the project registry.
#[derive(Subcommand, Debug)]
pub enum ProjectsCommand {
    /// List projects matching a search and status filter.
    List(ListArgs),

    /// Show one project.
    Show(ShowArgs),

    /// Create a project and print it. Nothing is persisted.
    Add(AddArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive text matched against name and client.
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// planning | active | completed | all
    #[arg(long, default_value = "all")]
    pub status: StatusFilterArg,

    /// table | html | markdown | json
    #[arg(long, short = 'f', default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    pub id: u64,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Project name (e.g. "Spring Launch").
    pub name: String,

    #[arg(long)]
    pub client: String,

    /// Free-form budget text, e.g. "$25,000".
    #[arg(long)]
    pub budget: String,

    /// Free-form duration text, e.g. "3 months".
    #[arg(long)]
    pub duration: String,

    /// planning | active | completed. Defaults to planning.
    #[arg(long)]
    pub status: Option<ProjectStatus>,

    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

pub fn run(cmd: ProjectsCommand) -> Result<()> {
    match cmd {
        ProjectsCommand::List(args) => list(args),
        ProjectsCommand::Show(args) => show(args),
        ProjectsCommand::Add(args) => add(args),
    }
}

fn list(args: ListArgs) -> Result<()> {
    let registry = ProjectRegistry::seeded();
    let projects = registry.query(&args.search, args.status.0);

    match args.format {
        OutputFormat::Listing(format) => {
            let renderer = Renderer::new().context("failed to initialise renderer")?;
            let output = renderer
                .render(&projects, format)
                .with_context(|| format!("failed to render {format} listing"))?;
            println!("{output}");
        }
        OutputFormat::Table => {
            print_summary(&registry);
            if projects.is_empty() {
                println!("No projects match the current filters.");
            } else {
                print_table(&projects);
            }
        }
    }
    Ok(())
}

fn show(args: ShowArgs) -> Result<()> {
    let registry = ProjectRegistry::seeded();
    let project = registry.find(ProjectId(args.id))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(project).context("failed to serialize project")?
        );
        return Ok(());
    }

    println!("{} {}", project.name.bold(), format!("#{}", project.id).bright_black());
    println!("  client:    {}", project.client);
    println!("  status:    {}", status_colored(project.status));
    println!("  budget:    {}", project.budget);
    println!("  duration:  {}", project.duration);
    println!("  progress:  {}%", project.progress);
    println!("  timeline:  {} → {}", project.start_date, project.end_date);
    if !project.description.is_empty() {
        println!("  {}", project.description.italic());
    }
    Ok(())
}

fn add(args: AddArgs) -> Result<()> {
    let mut draft = ProjectDraft::new(args.name, args.client, args.budget, args.duration);
    if let Some(status) = args.status {
        draft = draft.with_status(status);
    }
    if let Some(description) = args.description {
        draft = draft.with_description(description);
    }

    let mut dashboard = Dashboard::new(
        ProjectRegistry::seeded(),
        TerminalSink,
        Default::default(),
    )?;
    let project = dashboard.create(draft)?;
    print_table(std::slice::from_ref(&project));
    Ok(())
}

// ---------------------------------------------------------------------------
// Table output
// ---------------------------------------------------------------------------

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "id")]
    id: ProjectId,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "client")]
    client: String,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "budget")]
    budget: String,
    #[tabled(rename = "duration")]
    duration: String,
    #[tabled(rename = "progress")]
    progress: String,
    #[tabled(rename = "timeline")]
    timeline: String,
}

impl From<&Project> for ProjectRow {
    fn from(p: &Project) -> Self {
        ProjectRow {
            id: p.id,
            name: p.name.clone(),
            client: p.client.clone(),
            status: p.status.label().to_string(),
            budget: p.budget.clone(),
            duration: p.duration.clone(),
            progress: format!("{}%", p.progress),
            timeline: format!("{} → {}", p.start_date, p.end_date),
        }
    }
}

fn print_table(projects: &[Project]) {
    let mut table = Table::new(projects.iter().map(ProjectRow::from));
    table.with(Style::rounded());
    println!("{table}");
}

fn print_summary(registry: &ProjectRegistry) {
    let counts: Vec<String> = registry
        .status_counts()
        .into_iter()
        .map(|(status, n)| format!("{} {} {}", indicator(status), n, status.label()))
        .collect();
    println!(
        "AdVision v{} | {} projects | {}",
        env!("CARGO_PKG_VERSION"),
        registry.len(),
        counts.join("  "),
    );
}

fn indicator(status: ProjectStatus) -> String {
    match status {
        ProjectStatus::Planning => "■".yellow().bold().to_string(),
        ProjectStatus::Active => "■".cyan().bold().to_string(),
        ProjectStatus::Completed => "■".green().bold().to_string(),
    }
}

fn status_colored(status: ProjectStatus) -> String {
    format!("{} {}", indicator(status), status.label())
}
