//! # verbatim-clustering
//!
//! Embedding-based clustering of survey responses. Two methods behind one
//! engine: parametric K-means with silhouette-driven auto-K, and density
//! clustering (PCA reduction + HDBSCAN) that tolerates noise.

pub mod density;
pub mod engine;
pub mod grouping;
pub mod kmeans;
pub mod outcome;
pub mod silhouette;

pub use engine::{ClusteringEngine, Method};
pub use outcome::ClusterOutcome;
