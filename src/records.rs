// 📥 Record Loader - parse caller-supplied CSV/JSON text into records
//
// Loading is all-or-nothing: a missing field, a bad number, an unknown
// pledge action, a non-finite amount, or a repeated project id fails the
// whole batch. Nothing here touches the filesystem.

use crate::entities::{Pledge, PledgeChange, Project};
use crate::error::RecordError;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use tracing::debug;

// ============================================================================
// CSV
// ============================================================================

/// Parse projects from CSV with header `id,name,category,goal,pledged,backers`.
pub fn projects_from_csv(text: &str) -> Result<Vec<Project>> {
    let projects: Vec<Project> = read_csv(text, "project")?;
    validate_projects(&projects)?;
    Ok(projects)
}

/// Parse pledges from CSV with header `userId,rewardId,baseAmount,shipping,tax`.
pub fn pledges_from_csv(text: &str) -> Result<Vec<Pledge>> {
    let pledges: Vec<Pledge> = read_csv(text, "pledge")?;

    for (index, pledge) in pledges.iter().enumerate() {
        require_finite("pledge", index, "baseAmount", pledge.base_amount)?;
        require_finite("pledge", index, "shipping", pledge.shipping)?;
        require_finite("pledge", index, "tax", pledge.tax)?;
    }

    Ok(pledges)
}

/// Parse pledge changes from CSV with header `action,delta`.
pub fn pledge_changes_from_csv(text: &str) -> Result<Vec<PledgeChange>> {
    let changes: Vec<PledgeChange> = read_csv(text, "pledge change")?;

    for (index, change) in changes.iter().enumerate() {
        require_finite("pledge change", index, "delta", change.delta)?;
    }

    Ok(changes)
}

fn read_csv<T: DeserializeOwned>(text: &str, record: &str) -> Result<Vec<T>> {
    let mut rdr = csv::Reader::from_reader(text.as_bytes());

    let mut records = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        let item: T = result.with_context(|| format!("Failed to deserialize {} #{}", record, index))?;
        records.push(item);
    }

    debug!(record, count = records.len(), "loaded records from csv");

    Ok(records)
}

// ============================================================================
// JSON
// ============================================================================

/// Parse a JSON array of projects.
pub fn projects_from_json(text: &str) -> Result<Vec<Project>> {
    let projects: Vec<Project> =
        serde_json::from_str(text).context("Failed to deserialize projects from JSON")?;
    validate_projects(&projects)?;

    debug!(count = projects.len(), "loaded projects from json");

    Ok(projects)
}

// ============================================================================
// VALIDATION
// ============================================================================

fn validate_projects(projects: &[Project]) -> Result<()> {
    let mut seen = HashSet::new();

    for (index, project) in projects.iter().enumerate() {
        require_finite("project", index, "goal", project.goal)?;
        require_finite("project", index, "pledged", project.pledged)?;

        if !seen.insert(project.id) {
            return Err(RecordError::DuplicateId {
                id: project.id,
                index,
            }
            .into());
        }
    }

    Ok(())
}

fn require_finite(record: &'static str, index: usize, field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        return Ok(());
    }

    Err(RecordError::InvalidInput {
        record,
        index,
        field,
        reason: format!("must be a finite number, got {}", value),
    }
    .into())
}

// ============================================================================
// TESTS
// ============================================================================
