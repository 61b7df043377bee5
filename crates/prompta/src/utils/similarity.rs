use prompta_domain::embedding::Embedding;

/// Cosine of the angle between two index-aligned vectors. A zero-magnitude
/// operand scores 0 rather than dividing by zero.
pub fn cosine_similarity(a: &Embedding, b: &Embedding) -> f32 {
    let a = a.as_slice();
    let b = b.as_slice();

    // Mismatched dimensions mean the vectors came from different models,
    // which is a caller bug.
    assert_eq!(a.len(), b.len(), "embedding dimensions must match");

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-6;

    fn embedding(values: &[f32]) -> Embedding {
        Embedding::from(values.to_vec())
    }

    #[test]
    fn self_similarity_is_maximal() {
        let v = embedding(&[0.3, -1.2, 4.5]);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn opposite_vectors_score_negative_one() {
        let v = embedding(&[0.3, -1.2, 4.5]);
        let negated = embedding(&[-0.3, 1.2, -4.5]);
        assert!((cosine_similarity(&v, &negated) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn zero_vector_scores_zero() {
        let zero = embedding(&[0.0, 0.0, 0.0]);
        let v = embedding(&[1.0, 2.0, 3.0]);
        assert_eq!(cosine_similarity(&zero, &v), 0.0);
        assert_eq!(cosine_similarity(&v, &zero), 0.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = embedding(&[1.0, 0.5, -0.25]);
        let b = embedding(&[0.75, -0.5, 2.0]);
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        let a = embedding(&[1.0, 0.0]);
        let b = embedding(&[0.0, 1.0]);
        assert!(cosine_similarity(&a, &b).abs() < TOLERANCE);
    }

    #[test]
    #[should_panic(expected = "embedding dimensions must match")]
    fn mismatched_dimensions_panic() {
        let a = embedding(&[1.0, 0.0]);
        let b = embedding(&[0.0, 1.0, 2.0]);
        cosine_similarity(&a, &b);
    }
}
