//! Clustering engine: embeds responses and dispatches to a method.

use std::sync::Arc;

use ndarray::Array2;
use serde::Serialize;
use tracing::info;
use verbatim_core::config::ClusteringConfig;
use verbatim_core::constants::NOISE_LABEL;
use verbatim_core::errors::{ClusteringError, VerbatimResult};
use verbatim_core::traits::IEmbeddingProvider;

use crate::{density, grouping, kmeans, outcome::ClusterOutcome, silhouette};

/// Which clustering algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// K-means; exactly K clusters, K chosen by silhouette unless forced.
    Parametric,
    /// PCA + HDBSCAN; cluster count discovered, noise allowed.
    Density,
}

/// Clusters response texts via a shared embedding provider.
pub struct ClusteringEngine {
    provider: Arc<dyn IEmbeddingProvider>,
    config: ClusteringConfig,
}

impl ClusteringEngine {
    pub fn new(provider: Arc<dyn IEmbeddingProvider>, config: ClusteringConfig) -> Self {
        Self { provider, config }
    }

    /// Cluster `responses` with `method`.
    ///
    /// `k_override` forces K for the parametric method and is ignored by
    /// density. Fewer than two responses cannot be clustered at all and is
    /// an error; callers wanting a meaningful analysis floor should check
    /// `MIN_RESPONSES_FOR_CLUSTERING` before calling.
    pub fn cluster(
        &self,
        responses: &[String],
        method: Method,
        k_override: Option<usize>,
    ) -> VerbatimResult<ClusterOutcome> {
        let n = responses.len();
        if n < 2 {
            return Err(ClusteringError::InsufficientResponses {
                count: n,
                required: 2,
            }
            .into());
        }

        let embeddings = self.provider.embed_batch(responses)?;
        let data = to_matrix(&embeddings)?;

        let outcome = match method {
            Method::Parametric => self.run_parametric(responses, &data, k_override)?,
            Method::Density => self.run_density(responses, &data)?,
        };

        info!(
            method = ?method,
            responses = n,
            clusters = outcome.cluster_count(),
            noise = outcome.noise_count,
            "clustering complete"
        );
        Ok(outcome)
    }

    fn run_parametric(
        &self,
        responses: &[String],
        data: &Array2<f64>,
        k_override: Option<usize>,
    ) -> VerbatimResult<ClusterOutcome> {
        // K >= N degenerates to one point per centroid; cap forced K at
        // N - 1, with the two-response floor still allowing K = 2.
        let k = match k_override {
            Some(k) => k.clamp(2, (responses.len() - 1).max(2)),
            None => kmeans::optimal_k(data, &self.config)?,
        };
        let labels = kmeans::fit(data, k, &self.config)?;
        let silhouette = silhouette::score(data, &labels);

        Ok(ClusterOutcome {
            clusters: grouping::by_label(&labels, responses),
            labels,
            method: Method::Parametric,
            chosen_k: Some(k),
            silhouette: Some(silhouette),
            noise_count: 0,
        })
    }

    fn run_density(
        &self,
        responses: &[String],
        data: &Array2<f64>,
    ) -> VerbatimResult<ClusterOutcome> {
        let labels = density::cluster(data, &self.config)?;
        let noise_count = labels.iter().filter(|&&l| l == NOISE_LABEL).count();

        Ok(ClusterOutcome {
            clusters: grouping::by_label(&labels, responses),
            labels,
            method: Method::Density,
            chosen_k: None,
            silhouette: None,
            noise_count,
        })
    }
}

/// Row-major embedding vectors into an N×D matrix. Ragged input means a
/// provider bug; surface it as a dimension mismatch.
fn to_matrix(embeddings: &[Vec<f32>]) -> VerbatimResult<Array2<f64>> {
    let n = embeddings.len();
    let d = embeddings.first().map(Vec::len).unwrap_or(0);
    for row in embeddings {
        if row.len() != d {
            return Err(verbatim_core::errors::EmbeddingError::DimensionMismatch {
                expected: d,
                actual: row.len(),
            }
            .into());
        }
    }

    let mut data = Array2::zeros((n, d));
    for (i, row) in embeddings.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            data[[i, j]] = v as f64;
        }
    }
    Ok(data)
}
