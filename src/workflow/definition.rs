// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! GitHub Actions workflow structures
//!
//! Only the subset of the workflow schema that snakegen emits. Maps are
//! `BTreeMap` and struct fields serialize in declaration order, which keeps
//! the rendered YAML byte-for-byte stable.

use serde::Serialize;
use std::collections::BTreeMap;

/// A workflow file
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Workflow {
    pub name: String,

    #[serde(rename = "on")]
    pub triggers: Triggers,

    pub permissions: BTreeMap<String, String>,

    pub jobs: BTreeMap<String, Job>,
}

impl Workflow {
    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, crate::SnakegenError> {
        serde_yaml::to_string(self).map_err(Into::into)
    }

    /// All steps across all jobs, in job-name then step order
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.jobs.values().flat_map(|job| job.steps.iter())
    }
}

/// Events that start the workflow
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Triggers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push: Option<BranchFilter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<BranchFilter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<CronEntry>>,

    /// Serialized as an empty mapping when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_dispatch: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BranchFilter {
    pub branches: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CronEntry {
    pub cron: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Job {
    #[serde(rename = "runs-on")]
    pub runs_on: String,

    pub steps: Vec<Step>,
}

/// A single job step
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Step {
    pub name: String,

    /// Expression gating the step
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub with: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
}

impl Step {
    pub fn uses(name: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uses: Some(action.into()),
            ..Default::default()
        }
    }

    pub fn run(name: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            run: Some(script.into()),
            ..Default::default()
        }
    }

    pub fn with_input(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn when(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}
