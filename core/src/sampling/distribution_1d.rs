//! 1D Distribution.

use crate::numeric::*;

/// Represents a piecewise-constant 1D function over `size` unit-width buckets
/// and draws samples proportional to it by inverting its CDF.
///
/// Densities are normalized to the bucket-index coordinate system: a constant
/// function yields a density of 1 in every bucket.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PiecewiseConstantDistribution1D {
    /// Number of buckets.
    size: usize,

    /// Normalized density of each bucket.
    pdf: Vec<Float>,

    /// Cumulative bucket mass; `size + 1` entries running from 0 to exactly 1.
    cdf: Vec<Float>,
}

impl PiecewiseConstantDistribution1D {
    /// Returns a new `PiecewiseConstantDistribution1D` for the given
    /// piecewise-constant function.
    ///
    /// * `f` - Unnormalized, non-negative function values; one per bucket.
    pub fn new(f: &[Float]) -> Self {
        let mut distrib = Self::default();
        distrib.init(f);
        distrib
    }

    /// Builds the PDF and CDF tables from the given function, replacing any
    /// previous contents.
    ///
    /// An all-zero function yields an all-zero PDF and a CDF that stays at 0
    /// until its final entry. Negative or non-finite values are not rejected
    /// but lead to unspecified densities.
    ///
    /// * `f` - Unnormalized, non-negative function values; one per bucket.
    pub fn init(&mut self, f: &[Float]) {
        let size = f.len();
        self.size = size;

        self.pdf.clear();
        self.pdf.resize(size, 0.0);
        self.cdf.clear();
        self.cdf.resize(size + 1, 0.0);

        // Accumulate the function.
        for i in 1..size + 1 {
            self.cdf[i] = self.cdf[i - 1] + f[i - 1];
        }

        let total = self.cdf[size];
        debug!("Distribution1D with {size} buckets, total mass {total}");
        if f.iter().any(|v| !v.is_finite() || *v < 0.0) {
            warn!("Distribution1D built from negative or non-finite values");
        } else if size > 0 && total == 0.0 {
            warn!("Distribution1D built from a function that is zero everywhere");
        }

        // Zero mass leaves every density at zero instead of dividing by it.
        let rcp_sum = if total == 0.0 { 0.0 } else { 1.0 / total };

        // Normalize the densities and the cumulative distribution.
        for i in 1..size + 1 {
            self.pdf[i - 1] = f[i - 1] * rcp_sum * size as Float;
            self.cdf[i] = min(self.cdf[i] * rcp_sum, 1.0);
        }
        self.cdf[size] = 1.0;

        debug_assert_eq!(self.cdf.len(), self.pdf.len() + 1);
    }

    /// Returns the number of buckets.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the distribution has no buckets.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the normalized density of every bucket.
    pub fn pdf_values(&self) -> &[Float] {
        &self.pdf
    }

    /// Returns the cumulative distribution; `size + 1` entries.
    pub fn cdf_values(&self) -> &[Float] {
        &self.cdf
    }

    /// Returns the density of a bucket or `None` if out of range.
    ///
    /// * `index` - Bucket index.
    pub fn bucket_pdf(&self, index: usize) -> Option<Float> {
        self.pdf.get(index).copied()
    }

    /// Maps a uniform sample to a continuous coordinate in `[0, size)`
    /// distributed according to the function.
    ///
    /// The result is non-decreasing in `u`. Samples outside `[0, 1)` are
    /// clamped into the first or last bucket. Buckets with zero density are
    /// never interpolated into; they return their left edge.
    ///
    /// * `u` - The uniform sample.
    pub fn sample(&self, u: Float) -> Float {
        if self.size == 0 {
            return 0.0;
        }

        // Coarse sampling: find the bucket whose CDF segment contains `u`.
        let index = find_interval(self.cdf.len(), |i| self.cdf[i] <= u);

        // Refine linearly since the function is constant inside the bucket.
        let dcdf = self.cdf[index + 1] - self.cdf[index];
        if dcdf == 0.0 || self.pdf[index] == 0.0 {
            return index as Float;
        }
        let fraction = max((u - self.cdf[index]) / dcdf, 0.0);

        min(index as Float + fraction, (index + 1) as Float * ONE_MINUS_EPSILON)
    }

    /// Returns the density of the bucket containing `p`.
    ///
    /// NOTE: `p` is scaled by `size` to find its bucket, so it is expected in
    /// `[0, 1)`. Coordinates returned by `sample` are in bucket units
    /// `[0, size)` and must be divided by `size` before being passed here.
    /// Values outside the range are clamped to the first or last bucket.
    ///
    /// * `p` - Normalized coordinate.
    pub fn pdf(&self, p: Float) -> Float {
        if self.size == 0 {
            return 0.0;
        }

        let index = clamp((p * self.size as Float) as isize, 0, self.size as isize - 1);
        self.pdf[index as usize]
    }
}

impl From<&[Float]> for PiecewiseConstantDistribution1D {
    /// Build a distribution from a slice of function values.
    fn from(f: &[Float]) -> Self {
        Self::new(f)
    }
}

impl FromIterator<Float> for PiecewiseConstantDistribution1D {
    /// Build a distribution from an iterator over function values.
    fn from_iter<I: IntoIterator<Item = Float>>(iter: I) -> Self {
        let f: Vec<Float> = iter.into_iter().collect();
        Self::new(&f)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
