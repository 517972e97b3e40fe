//! Pitch estimation.
//!
//! The pitch of an axis is the representative spacing between adjacent line
//! centers. It is the median-like element of the sorted gaps, which tolerates
//! one irregular gap without requiring a perfectly uniform grid.

/// Estimates the pitch of one axis from its cluster centers.
///
/// Returns `0.0` (indeterminate) when there are fewer than two centers.
/// Otherwise the absolute gaps between consecutive centers are sorted and
/// the one at index `n / 2` is returned; for an even number of gaps that is
/// the upper-middle gap, not the mean of the two middle ones.
///
/// # Examples
///
/// ```
/// # use regrid::grid::pitch::estimate;
/// assert_eq!(estimate(&[0.0, 100.0, 200.0, 300.0]), 100.0);
/// assert_eq!(estimate(&[42.0]), 0.0);
/// ```
pub fn estimate(centers: &[f32]) -> f32 {
    if centers.len() < 2 {
        return 0.0;
    }

    let mut gaps: Vec<f32> = centers.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    gaps.sort_by(f32::total_cmp);
    gaps[gaps.len() / 2]
}
