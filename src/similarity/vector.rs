// Dense vector math: dot product, magnitude, cosine similarity.
//
// The cosine primitive accepts any two equal-length vectors, not just the
// one-hot basis vectors the topic scorer compares against. Vectors are scaled
// by their largest component before squaring, so values near the ends of the
// f64 range neither overflow to infinity nor underflow to zero.

use crate::error::{Result, SimilarityError};

/// Dot product of two vectors. Requires equal lengths.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean length of a vector.
pub fn magnitude(v: &[f64]) -> f64 {
    let scale = max_abs(v);
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }
    scale * v.iter().map(|x| (x / scale).powi(2)).sum::<f64>().sqrt()
}

/// Cosine similarity: `dot(a, b) / (|a| * |b|)`.
///
/// Result is in [-1, 1], or [0, 1] for non-negative inputs. Fails when the
/// lengths differ, a component is NaN or infinite, or either vector has zero
/// magnitude.
pub fn cosine(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b)?;
    check_finite(a, "left")?;
    check_finite(b, "right")?;

    let (scale_a, scale_b) = (max_abs(a), max_abs(b));
    if scale_a == 0.0 || scale_b == 0.0 {
        return Err(SimilarityError::DivisionByZero {
            context: "cosine of a zero-magnitude vector",
        });
    }

    // Every scaled component is in [-1, 1] and the largest is exactly ±1,
    // so both norms are at least 1
    let a: Vec<f64> = a.iter().map(|x| x / scale_a).collect();
    let b: Vec<f64> = b.iter().map(|x| x / scale_b).collect();
    let numerator = dot(&a, &b)?;
    let denominator = magnitude(&a) * magnitude(&b);

    // Rounding can push |a·a| / |a|² a hair past 1.0
    Ok((numerator / denominator).clamp(-1.0, 1.0))
}

fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0, |max: f64, x| max.max(x.abs()))
}

fn check_finite(v: &[f64], side: &'static str) -> Result<()> {
    match v.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(SimilarityError::NonFinite { side, index }),
        None => Ok(()),
    }
}

fn check_dimensions(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
