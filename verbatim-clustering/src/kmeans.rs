//! Seeded K-means fitting and silhouette-driven K selection.

use linfa::dataset::AsTargets;
use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use ndarray::Array2;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use tracing::debug;
use verbatim_core::config::ClusteringConfig;
use verbatim_core::errors::{ClusteringError, VerbatimResult};

use crate::silhouette;

/// Fit K-means with a fixed seed and return one label per row.
///
/// Identical data, K, and seed produce identical labels.
pub fn fit(data: &Array2<f64>, k: usize, config: &ClusteringConfig) -> VerbatimResult<Vec<i32>> {
    let rng = Xoshiro256Plus::seed_from_u64(config.seed);
    let dataset = DatasetBase::from(data.clone());

    let model = linfa_clustering::KMeans::params_with_rng(k, rng)
        .max_n_iterations(config.max_iterations)
        .tolerance(config.tolerance)
        .fit(&dataset)
        .map_err(|e| ClusteringError::FitFailed {
            reason: format!("k-means with k={k}: {e}"),
        })?;

    let predictions = model.predict(&dataset);
    Ok(predictions
        .as_targets()
        .iter()
        .map(|&label| label as i32)
        .collect())
}

/// Pick K by silhouette over K ∈ [2, min(max_clusters, N−1)].
///
/// The scan is ascending and a candidate replaces the incumbent only on a
/// strictly greater score, so ties resolve to the smaller K. Two rows
/// degenerate straight to K = 2.
pub fn optimal_k(data: &Array2<f64>, config: &ClusteringConfig) -> VerbatimResult<usize> {
    let n = data.nrows();
    let upper = config.max_clusters.min(n.saturating_sub(1));
    if n == 2 || upper < 2 {
        return Ok(2.min(n));
    }

    let mut best_k = 2;
    let mut best_score = f64::NEG_INFINITY;
    for k in 2..=upper {
        let labels = fit(data, k, config)?;
        let score = silhouette::score(data, &labels);
        debug!(k, score, "silhouette for candidate k");
        if score > best_score {
            best_score = score;
            best_k = k;
        }
    }
    Ok(best_k)
}
