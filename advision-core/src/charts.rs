//! Static analytics datasets shown on the dashboard overview.
//!
//! The figures are fixed; there is no data source behind them.

use serde::Serialize;

/// Primary series color.
pub const PRIMARY_COLOR: &str = "#1FB8CD";

/// Slice colors for categorical charts, in label order.
pub const PALETTE: &[&str] = &["#1FB8CD", "#FFC185", "#B4413C", "#ECEBD5", "#5D878F"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

/// How values are printed on axes and in tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFormat {
    /// `45000` → `$45k`
    ThousandsOfDollars,
    /// `85` → `85%`
    Percent,
}

impl ValueFormat {
    pub fn format(self, value: u64) -> String {
        match self {
            ValueFormat::ThousandsOfDollars => {
                if value % 1000 == 0 {
                    format!("${}k", value / 1000)
                } else {
                    format!("${:.1}k", value as f64 / 1000.0)
                }
            }
            ValueFormat::Percent => format!("{value}%"),
        }
    }
}

/// One labelled data point with its draw color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataPoint {
    pub label: &'static str,
    pub value: u64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub format: ValueFormat,
    /// Fixed axis ceiling, when the chart has one.
    pub max: Option<u64>,
    pub points: Vec<DataPoint>,
}

impl Chart {
    /// Point with the highest value; first one wins on ties.
    pub fn peak(&self) -> Option<&DataPoint> {
        self.points
            .iter()
            .fold(None, |best: Option<&DataPoint>, p| match best {
                Some(b) if b.value >= p.value => Some(b),
                _ => Some(p),
            })
    }
}

/// Categorical charts cycle through the palette; single-series charts use the primary color.
fn color_for(kind: ChartKind, index: usize) -> &'static str {
    match kind {
        ChartKind::Doughnut => PALETTE[index % PALETTE.len()],
        ChartKind::Line | ChartKind::Bar => PRIMARY_COLOR,
    }
}

fn points(kind: ChartKind, data: &[(&'static str, u64)]) -> Vec<DataPoint> {
    data.iter()
        .enumerate()
        .map(|(index, &(label, value))| DataPoint {
            label,
            value,
            color: color_for(kind, index),
        })
        .collect()
}

/// Monthly revenue, January to June.
pub fn revenue_chart() -> Chart {
    Chart {
        id: "revenue",
        title: "Revenue",
        kind: ChartKind::Line,
        format: ValueFormat::ThousandsOfDollars,
        max: None,
        points: points(ChartKind::Line, &[
            ("Jan", 45_000),
            ("Feb", 52_000),
            ("Mar", 48_000),
            ("Apr", 61_000),
            ("May", 55_000),
            ("Jun", 67_000),
        ]),
    }
}

/// Share of spend per campaign channel.
pub fn campaign_chart() -> Chart {
    Chart {
        id: "campaign",
        title: "Campaign Channels",
        kind: ChartKind::Doughnut,
        format: ValueFormat::Percent,
        max: None,
        points: points(ChartKind::Doughnut, &[
            ("Social Media", 35),
            ("Search Ads", 25),
            ("Display", 20),
            ("Video", 15),
            ("Email", 5),
        ]),
    }
}

/// Performance score per client.
pub fn client_chart() -> Chart {
    Chart {
        id: "clients",
        title: "Performance Score",
        kind: ChartKind::Bar,
        format: ValueFormat::Percent,
        max: Some(100),
        points: points(ChartKind::Bar, &[
            ("Client A", 85),
            ("Client B", 92),
            ("Client C", 78),
            ("Client D", 88),
            ("Client E", 95),
        ]),
    }
}

/// All overview charts in page order.
pub fn dashboard_charts() -> Vec<Chart> {
    vec![revenue_chart(), campaign_chart(), client_chart()]
}
