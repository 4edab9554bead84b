// Mon Oct 19 2026 - Alex

pub struct MathUtils;

impl MathUtils {
    pub fn percentage(current: u64, total: u64) -> f64 {
        if total == 0 {
            0.0
        } else {
            (current as f64 / total as f64) * 100.0
        }
    }

    /// Shannon entropy in bits per symbol over a 256-bin histogram.
    /// Empty bins are skipped so an empty input yields 0.
    pub fn shannon_entropy(histogram: &[u64; 256], total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }

        let total = total as f64;
        let entropy = histogram
            .iter()
            .filter(|&&count| count > 0)
            .fold(0.0f64, |acc, &count| {
                let p = count as f64 / total;
                acc - p * p.log2()
            });

        entropy.clamp(0.0, 8.0)
    }
}

pub fn percentage(current: u64, total: u64) -> f64 {
    MathUtils::percentage(current, total)
}

pub fn shannon_entropy(histogram: &[u64; 256], total: u64) -> f64 {
    MathUtils::shannon_entropy(histogram, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_handles_zero_total() {
        assert_eq!(percentage(5, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn test_entropy_uniform() {
        let histogram = [1u64; 256];
        let entropy = shannon_entropy(&histogram, 256);
        assert!((entropy - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_entropy_single_symbol() {
        let mut histogram = [0u64; 256];
        histogram[0x41] = 10;
        let entropy = shannon_entropy(&histogram, 10);
        assert_eq!(entropy, 0.0);
        assert!(entropy.is_sign_positive());
        assert_eq!(shannon_entropy(&[0u64; 256], 0), 0.0);
    }
}
