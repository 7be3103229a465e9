//! Animation mapping for the week/month morph.

/// Cubic ease-in-out mapping.
/// Input: linear progress in [0.0, 1.0].
/// Output: eased progress in [0.0, 1.0].
pub(crate) fn easing(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(easing(0.0), 0.0);
        assert_eq!(easing(1.0), 1.0);
        assert_eq!(easing(0.5), 0.5);
    }

    #[test]
    fn test_easing_clamps_input() {
        assert_eq!(easing(-2.0), 0.0);
        assert_eq!(easing(3.0), 1.0);
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=100 {
            let eased = easing(i as f32 / 100.0);
            assert!(eased >= last);
            last = eased;
        }
    }
}
