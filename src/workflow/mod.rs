// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Workflow generation
//!
//! Builds the GitHub Actions workflow that runs the snake rendering action.

mod definition;
mod synthesizer;

pub use definition::*;
pub use synthesizer::{
    output_spec, WorkflowSynthesizer, CHECKOUT_ACTION, DEFAULT_WORKFLOW_PATH, JOB_NAME,
    SNAKE_ACTION, WORKFLOW_NAME,
};
