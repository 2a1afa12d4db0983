//! Planar projection of raw point clouds
//!
//! Pure coordinate relabeling: z dropped, x/y swapped into the vehicle
//! heading convention. No sorting, no filtering.

use contracts::PlanarPoint;

/// Project a flat (x, y, z) scalar sequence onto the vehicle plane.
///
/// `output[i] = (input[3i+1], input[3i])` — the axes swap so that forward
/// becomes local x. Point order is preserved. Incomplete trailing triples
/// are dropped, so a truncated or empty cloud yields a shorter (possibly
/// empty) point set rather than a panic.
pub fn to_planar(point_cloud: &[f32]) -> Vec<PlanarPoint> {
    point_cloud
        .chunks_exact(3)
        .map(|triple| PlanarPoint::new(triple[1], triple[0]))
        .collect()
}
