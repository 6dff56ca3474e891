//! The exported session document: a floor plan, what the user drew on it and,
//! optionally, the accuracy they were shown.

use crate::error::{ColScoreError, CsResult};
use crate::geometry::{Column, FloorPlan, Point};
use crate::scorer::types::AccuracyResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridDirection {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub id: String,
    pub start: Point,
    pub end: Point,
    pub direction: GridDirection,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserData {
    pub grid_lines: Vec<GridLine>,
    pub columns: Vec<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_decisions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCredentials {
    pub username: String,
    pub email: String,
    pub engineer_type: String,
    pub last_login: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportData {
    pub floor_plan: FloorPlan,
    pub user_data: UserData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<AccuracyResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_credentials: Option<UserCredentials>,
}

impl ExportData {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CsResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Rejects documents that cannot describe a scorable session: an outline
    /// with fewer than 3 vertices, or a vertex or column off the finite plane.
    pub fn validate(&self) -> CsResult<()> {
        let plan = &self.floor_plan;
        if plan.is_degenerate() {
            return Err(ColScoreError::Validation(format!(
                "floor plan '{}' has {} points, at least 3 are required",
                plan.name,
                plan.points.len()
            )));
        }
        if let Some(p) = plan.points.iter().find(|p| !is_finite(p)) {
            return Err(ColScoreError::Validation(format!(
                "floor plan '{}' has a non-finite vertex ({}, {})",
                plan.name, p.x, p.y
            )));
        }
        if let Some(c) = self
            .user_data
            .columns
            .iter()
            .find(|c| !is_finite(&c.position))
        {
            return Err(ColScoreError::Validation(format!(
                "column '{}' has a non-finite position ({}, {})",
                c.id, c.position.x, c.position.y
            )));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> CsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// `{plan}[_{engineerType}][_{username}].json`, with any `.csv` suffix
    /// dropped from the plan name.
    pub fn export_file_name(&self) -> String {
        let mut name = plan_stem(&self.floor_plan.name).to_string();
        if let Some(creds) = &self.user_credentials {
            if !creds.engineer_type.is_empty() {
                name.push('_');
                name.push_str(&creds.engineer_type);
            }
            if !creds.username.is_empty() {
                name.push('_');
                name.push_str(&creds.username);
            }
        }
        name.push_str(".json");
        name
    }
}

/// Plan name as it appears in export file names.
pub fn plan_stem(plan_name: &str) -> &str {
    plan_name.strip_suffix(".csv").unwrap_or(plan_name)
}

fn is_finite(p: &Point) -> bool {
    p.x.is_finite() && p.y.is_finite() && p.z.is_finite()
}
