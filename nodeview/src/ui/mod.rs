//! Contains the output rendering used throughout the application.
//!
//! This module re-exports:
//! - [`report`]: Plain-text listing lines for nodes, pods and containers.
//! - [`table`]: Tabular rendering of node detail.

pub mod report;
pub mod table;
