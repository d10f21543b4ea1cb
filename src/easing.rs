/// Ease in out quadratic over normalized time.
///
/// Maps `t` in `0.0..=1.0` to eased progress in `0.0..=1.0`: accelerates
/// through the first half and decelerates through the second.
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t * 2.0;
    if t < 1.0 {
        0.5 * t * t
    } else {
        let t = t - 1.0;
        -0.5 * (t * (t - 2.0) - 1.0)
    }
}

/// Eased checkpoint for step `index` of `steps`, scaled to `total`
#[allow(clippy::cast_precision_loss)]
pub fn eased_checkpoint(index: usize, steps: usize, total: f32) -> f32 {
    if steps == 0 {
        return 0.0;
    }
    ease_in_out_quad(index as f32 / steps as f32) * total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_in_out_quad_endpoints() {
        assert!(ease_in_out_quad(0.0).abs() < f32::EPSILON);
        assert!((ease_in_out_quad(0.5) - 0.5).abs() < f32::EPSILON);
        assert!((ease_in_out_quad(1.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_ease_in_out_quad_is_symmetric() {
        for i in 0..=10u8 {
            let t = f32::from(i) / 10.0;
            let mirrored = 1.0 - ease_in_out_quad(1.0 - t);
            assert!((ease_in_out_quad(t) - mirrored).abs() < 1e-6);
        }
    }

    #[test]
    fn test_eased_checkpoint_last_step() {
        assert!((eased_checkpoint(19, 20, 1.0) - 0.995).abs() < 1e-6);
        assert!(eased_checkpoint(3, 0, 1.0).abs() < f32::EPSILON);
    }
}
