//! Density clustering: PCA reduction followed by HDBSCAN.
//!
//! HDBSCAN discovers the cluster count itself and may label points as
//! noise (−1). Distances degrade in high-dimensional embedding space, so
//! rows are first projected down with PCA.

use hdbscan::{Hdbscan, HdbscanHyperParams};
use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use linfa_reduction::Pca;
use ndarray::Array2;
use tracing::debug;
use verbatim_core::config::ClusteringConfig;
use verbatim_core::constants::NOISE_LABEL;
use verbatim_core::errors::{ClusteringError, VerbatimResult};

/// Project rows down to `min(reduced_dimensions, N, D)` dimensions.
///
/// Returns the input untouched when it is already at or below the target.
/// PCA is deterministic, so repeated runs reduce identically.
pub fn reduce(data: &Array2<f64>, config: &ClusteringConfig) -> VerbatimResult<Array2<f64>> {
    let (n, d) = data.dim();
    let target = config.reduced_dimensions.min(n).min(d);
    if target >= d {
        return Ok(data.clone());
    }

    let dataset = DatasetBase::from(data.clone());
    let pca = Pca::params(target)
        .fit(&dataset)
        .map_err(|e| ClusteringError::ReductionFailed {
            reason: format!("pca to {target} dims: {e}"),
        })?;
    // Predicting on the owned records yields a dataset; the reduced
    // coordinates are its targets.
    let reduced = pca.predict(data.clone()).targets().clone();
    debug!(from = d, to = target, "reduced embedding dimensionality");
    Ok(reduced)
}

/// Run HDBSCAN over reduced rows. One i32 label per row, −1 for noise.
///
/// Every row labeled noise is an error, not an empty result set.
pub fn cluster(data: &Array2<f64>, config: &ClusteringConfig) -> VerbatimResult<Vec<i32>> {
    let reduced = reduce(data, config)?;
    let features: Vec<Vec<f32>> = reduced
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|&v| v as f32).collect())
        .collect();

    let hyper_params = HdbscanHyperParams::builder()
        .min_cluster_size(config.min_cluster_size)
        .min_samples(1)
        .build();
    let clusterer = Hdbscan::new(&features, hyper_params);
    let labels = clusterer
        .cluster()
        .map_err(|e| ClusteringError::FitFailed {
            reason: format!("hdbscan: {e:?}"),
        })?;

    check_not_all_noise(&labels)?;
    Ok(labels)
}

/// Reject labelings where no non-noise cluster survived.
pub fn check_not_all_noise(labels: &[i32]) -> VerbatimResult<()> {
    let noise = labels.iter().filter(|&&l| l == NOISE_LABEL).count();
    if noise == labels.len() {
        return Err(ClusteringError::Unclusterable {
            total: labels.len(),
            noise,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn reduce_is_identity_at_low_dims() {
        let data = array![[0.0, 1.0], [1.0, 0.0], [0.5, 0.5]];
        let config = ClusteringConfig::default();
        let reduced = reduce(&data, &config).unwrap();
        assert_eq!(reduced, data);
    }

    #[test]
    fn reduce_caps_at_target_dims() {
        // 4 rows, 8 dims, target 5 -> min(5, 4, 8) = 4 columns at most.
        let data = Array2::from_shape_fn((4, 8), |(i, j)| (i * 8 + j) as f64 * 0.1);
        let config = ClusteringConfig::default();
        let reduced = reduce(&data, &config).unwrap();
        assert_eq!(reduced.nrows(), 4);
        assert!(reduced.ncols() <= 4);
    }

    #[test]
    fn dense_blobs_cluster_without_noise() {
        let data = array![
            [0.0, 0.0],
            [0.1, 0.0],
            [0.0, 0.1],
            [9.0, 9.0],
            [9.1, 9.0],
            [9.0, 9.1],
        ];
        let labels = cluster(&data, &ClusteringConfig::default()).unwrap();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[3], labels[4]);
        assert_ne!(labels[0], labels[3]);
    }

    #[test]
    fn high_dimensional_blobs_reduce_then_cluster() {
        // 8-dim input forces the PCA path before HDBSCAN sees the rows.
        let mut data = Array2::zeros((6, 8));
        for i in 0..6 {
            let base = if i < 3 { 0.0 } else { 9.0 };
            for j in 0..8 {
                data[[i, j]] = base + i as f64 * 0.01 + j as f64 * 0.001;
            }
        }
        let labels = cluster(&data, &ClusteringConfig::default()).unwrap();
        assert_eq!(labels.len(), 6);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[1], labels[2]);
        assert_eq!(labels[3], labels[4]);
        assert_ne!(labels[0], labels[3]);
    }

    #[test]
    fn all_noise_is_an_error() {
        let err = check_not_all_noise(&[-1, -1, -1]).unwrap_err();
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn partial_noise_is_allowed() {
        assert!(check_not_all_noise(&[0, 0, -1]).is_ok());
    }
}
