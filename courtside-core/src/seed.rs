//! Compiled-in seed data for the admin screens.
//!
//! A real deployment would replace these with fetch-backed sources returning
//! the same record shapes.

use chrono::NaiveDate;

use crate::domain::{MembershipStatus, PlayerRecord, RoleRecord};
use crate::traits::{DataSource, DataSourceError};

fn seed_date(y: i32, m: u32, d: u32) -> Result<NaiveDate, DataSourceError> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| DataSourceError::Unavailable {
        reason: format!("invalid seed date {y:04}-{m:02}-{d:02}"),
    })
}

/// Static roster source: the five club members the roster screen ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRoster;

impl DataSource<PlayerRecord> for StaticRoster {
    fn fetch(&self) -> Result<Vec<PlayerRecord>, DataSourceError> {
        let seed = [
            (
                "SC-001",
                "Budi Santoso",
                "budi.santoso@example.com",
                (2024, 1, 12),
                MembershipStatus::Active,
            ),
            (
                "SC-002",
                "Siti Rahayu",
                "+62-812-5550-114",
                (2024, 2, 3),
                MembershipStatus::Active,
            ),
            (
                "SC-003",
                "Agus Wijaya",
                "agus.wijaya@example.com",
                (2024, 2, 21),
                MembershipStatus::Inactive,
            ),
            (
                "SC-004",
                "Dewi Lestari",
                "+62-812-5550-221",
                (2024, 3, 8),
                MembershipStatus::Active,
            ),
            (
                "SC-005",
                "Rudi Hartono",
                "rudi.hartono@example.com",
                (2024, 3, 27),
                MembershipStatus::Active,
            ),
        ];

        seed.into_iter()
            .map(|(id, name, contact, (y, m, d), status)| {
                let joined = seed_date(y, m, d)?;
                PlayerRecord::new(id, name, contact, joined, status).map_err(|e| {
                    DataSourceError::Unavailable {
                        reason: e.to_string(),
                    }
                })
            })
            .collect()
    }
}

/// Static role directory: the three roles the management screen ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRoleDirectory;

impl DataSource<RoleRecord> for StaticRoleDirectory {
    fn fetch(&self) -> Result<Vec<RoleRecord>, DataSourceError> {
        let seed = [
            (
                1,
                "Administrator",
                2,
                "Full access to facility settings, bookings and member data",
                "shield",
                "#7c3aed",
            ),
            (
                2,
                "Operator",
                5,
                "Manages court bookings and day-to-day schedules",
                "calendar",
                "#2563eb",
            ),
            (
                3,
                "Staff",
                11,
                "Front-desk check-in and member assistance",
                "users",
                "#16a34a",
            ),
        ];

        seed.into_iter()
            .map(|(id, name, user_count, description, icon, color)| {
                RoleRecord::new(id, name, user_count, description, icon, color).map_err(|e| {
                    DataSourceError::Unavailable {
                        reason: e.to_string(),
                    }
                })
            })
            .collect()
    }
}
