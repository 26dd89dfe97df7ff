//! Silhouette coefficient over Euclidean distance.
//!
//! Mean over all points of `(b - a) / max(a, b)`, where `a` is the mean
//! distance to the point's own cluster and `b` the smallest mean distance
//! to any other cluster. Singleton clusters contribute `a = 0`.

use std::collections::BTreeMap;

use ndarray::Array2;

fn euclidean(data: &Array2<f64>, i: usize, j: usize) -> f64 {
    data.row(i)
        .iter()
        .zip(data.row(j).iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Mean silhouette over all points. Returns 0.0 when fewer than two
/// distinct labels are present (undefined, treated as neutral).
pub fn score(data: &Array2<f64>, labels: &[i32]) -> f64 {
    let n = labels.len();
    let mut members: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (i, &label) in labels.iter().enumerate() {
        members.entry(label).or_default().push(i);
    }
    if members.len() < 2 || n < 2 {
        return 0.0;
    }

    let mut total = 0.0;
    for (i, &own) in labels.iter().enumerate() {
        let own_members = &members[&own];

        let a = if own_members.len() <= 1 {
            0.0
        } else {
            own_members
                .iter()
                .filter(|&&j| j != i)
                .map(|&j| euclidean(data, i, j))
                .sum::<f64>()
                / (own_members.len() - 1) as f64
        };

        let b = members
            .iter()
            .filter(|(&label, _)| label != own)
            .map(|(_, other)| {
                other.iter().map(|&j| euclidean(data, i, j)).sum::<f64>() / other.len() as f64
            })
            .fold(f64::INFINITY, f64::min);

        let denom = a.max(b);
        if denom > 0.0 {
            total += (b - a) / denom;
        }
        // Identical points in both clusters: contribution 0.
    }

    total / n as f64
}
