//! `advision charts`: overview analytics datasets.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use advision_core::charts::{dashboard_charts, Chart};

#[derive(Args, Debug)]
pub struct ChartsArgs {
    /// Only print the chart with this id: revenue | campaign | clients.
    #[arg(long)]
    pub only: Option<String>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct PointRow {
    #[tabled(rename = "label")]
    label: &'static str,
    #[tabled(rename = "value")]
    value: String,
    #[tabled(rename = "color")]
    color: &'static str,
}

impl ChartsArgs {
    pub fn run(self) -> Result<()> {
        let mut charts = dashboard_charts();
        if let Some(id) = self.only.as_deref() {
            charts.retain(|c| c.id == id);
            if charts.is_empty() {
                anyhow::bail!("unknown chart '{id}'; expected: revenue, campaign, clients");
            }
        }

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&charts).context("failed to serialize charts")?
            );
            return Ok(());
        }

        for chart in &charts {
            print_chart(chart);
        }
        Ok(())
    }
}

fn print_chart(chart: &Chart) {
    let peak = chart
        .peak()
        .map(|p| format!("peak {} ({})", p.label, chart.format.format(p.value)))
        .unwrap_or_default();
    println!("{} {}", chart.title.bold(), peak.bright_black());

    let rows = chart.points.iter().map(|p| PointRow {
        label: p.label,
        value: chart.format.format(p.value),
        color: p.color,
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
