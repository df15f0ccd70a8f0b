//! Sample campaigns loaded into a fresh dashboard.

use chrono::NaiveDate;

use crate::types::{Project, ProjectId, ProjectStatus};

struct Seed {
    id: u64,
    name: &'static str,
    client: &'static str,
    budget: &'static str,
    duration: &'static str,
    status: ProjectStatus,
    progress: u8,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    description: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: 1,
        name: "Summer Fashion Campaign",
        client: "StyleCorp",
        budget: "$25,000",
        duration: "3 months",
        status: ProjectStatus::Active,
        progress: 65,
        start: (2025, 6, 1),
        end: (2025, 8, 31),
        description: "Multi-platform campaign for summer collection",
    },
    Seed {
        id: 2,
        name: "Tech Product Launch",
        client: "InnovateTech",
        budget: "$50,000",
        duration: "4 months",
        status: ProjectStatus::Planning,
        progress: 25,
        start: (2025, 9, 1),
        end: (2025, 12, 31),
        description: "Comprehensive launch strategy for new product",
    },
    Seed {
        id: 3,
        name: "Holiday Sale Promotion",
        client: "RetailPlus",
        budget: "$35,000",
        duration: "2 months",
        status: ProjectStatus::Completed,
        progress: 100,
        start: (2024, 11, 1),
        end: (2024, 12, 31),
        description: "Holiday season promotional campaigns",
    },
    Seed {
        id: 4,
        name: "Brand Awareness Drive",
        client: "NewStart Inc",
        budget: "$18,000",
        duration: "6 months",
        status: ProjectStatus::Active,
        progress: 40,
        start: (2025, 5, 1),
        end: (2025, 10, 31),
        description: "Building brand recognition in target markets",
    },
];

/// The four sample projects, in their original order.
pub fn seed_projects() -> Vec<Project> {
    SEEDS.iter().map(Seed::to_project).collect()
}

impl Seed {
    fn to_project(&self) -> Project {
        Project {
            id: ProjectId(self.id),
            name: self.name.to_owned(),
            client: self.client.to_owned(),
            budget: self.budget.to_owned(),
            duration: self.duration.to_owned(),
            status: self.status,
            progress: self.progress,
            start_date: ymd(self.start),
            end_date: ymd(self.end),
            description: self.description.to_owned(),
        }
    }
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    // Seed dates are literals above; an invalid one is a programming error.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}
