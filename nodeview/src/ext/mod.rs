//! This module provides extensions to Kubernetes API types.
//!
//! It introduces traits that extend `k8s_openapi` types such as `Pod` and
//! `Node` with the accessors this tool reads, flattening their deeply
//! optional fields.

mod node;
mod pod;

pub use self::{node::NodeExt, pod::PodExt};
