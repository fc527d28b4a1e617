//! Chi-square goodness-of-fit helpers.
//!
//! Critical values use the Wilson–Hilferty cube-root normal approximation,
//! accurate to a few percent for the degrees of freedom used in tests.

/// A chi-square statistic and its degrees of freedom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChiSquare {
    pub statistic: f64,
    pub dof: usize,
}

impl ChiSquare {
    /// Whether the statistic stays below the upper critical value at
    /// standard-normal quantile `z` (e.g. `3.719` for a 1e-4 tail).
    pub fn passes(&self, z: f64) -> bool {
        self.statistic <= chi_square_critical(self.dof, z)
    }
}

/// Upper critical value of the chi-square distribution with `dof` degrees
/// of freedom at standard-normal quantile `z`.
pub fn chi_square_critical(dof: usize, z: f64) -> f64 {
    if dof == 0 {
        return 0.0;
    }
    let k = dof as f64;
    let h = 2.0 / (9.0 * k);
    k * (1.0 - h + z * h.sqrt()).powi(3)
}

/// Pearson statistic of `counts` against a uniform expectation.
pub fn chi_square_uniform(counts: &[u64]) -> ChiSquare {
    let total: u64 = counts.iter().sum();
    if counts.len() < 2 || total == 0 {
        return ChiSquare {
            statistic: 0.0,
            dof: 0,
        };
    }
    let expected = total as f64 / counts.len() as f64;
    let statistic = counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum();
    ChiSquare {
        statistic,
        dof: counts.len() - 1,
    }
}

/// Two-sample homogeneity statistic: are `a` and `b` draws from the same
/// categorical distribution? Categories empty in both samples are skipped.
///
/// Panics if the histograms have different lengths.
pub fn chi_square_homogeneity(a: &[u64], b: &[u64]) -> ChiSquare {
    assert_eq!(a.len(), b.len(), "histograms must share categories");
    let na: u64 = a.iter().sum();
    let nb: u64 = b.iter().sum();
    if na == 0 || nb == 0 {
        return ChiSquare {
            statistic: 0.0,
            dof: 0,
        };
    }
    let ka = (nb as f64 / na as f64).sqrt();
    let kb = (na as f64 / nb as f64).sqrt();

    let mut statistic = 0.0;
    let mut used = 0usize;
    for (&x, &y) in a.iter().zip(b) {
        if x + y == 0 {
            continue;
        }
        let d = x as f64 * ka - y as f64 * kb;
        statistic += d * d / (x + y) as f64;
        used += 1;
    }
    ChiSquare {
        statistic,
        dof: used.saturating_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs()
    }

    #[test]
    fn critical_values_match_tables() {
        // Tabulated: dof 3 @ 0.001 -> 16.266, dof 10 @ 0.05 -> 18.307.
        assert!(close(chi_square_critical(3, 3.090), 16.266, 0.03));
        assert!(close(chi_square_critical(10, 1.645), 18.307, 0.01));
        assert_eq!(chi_square_critical(0, 3.0), 0.0);
    }

    #[test]
    fn uniform_counts_score_zero() {
        let c = chi_square_uniform(&[250, 250, 250, 250]);
        assert_eq!(c.statistic, 0.0);
        assert_eq!(c.dof, 3);
        assert!(c.passes(3.0));
    }

    #[test]
    fn skewed_counts_fail() {
        let c = chi_square_uniform(&[700, 100, 100, 100]);
        assert!(!c.passes(3.719));
    }

    #[test]
    fn identical_samples_are_homogeneous() {
        let c = chi_square_homogeneity(&[5, 0, 7, 3], &[5, 0, 7, 3]);
        assert_eq!(c.statistic, 0.0);
        assert_eq!(c.dof, 2);
    }

    #[test]
    fn homogeneity_handles_unequal_totals() {
        // Same proportions, double the sample size.
        let c = chi_square_homogeneity(&[10, 20, 30], &[20, 40, 60]);
        assert!(c.statistic < 1e-9);
    }

    #[test]
    fn disjoint_samples_are_not_homogeneous() {
        let c = chi_square_homogeneity(&[500, 0], &[0, 500]);
        assert!(!c.passes(3.719));
    }
}
