use crate::float_fmt::fmt_f64_fixed;

/// Summary shown in the statistics panel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticsSummary {
    pub count: usize,
    pub sum: u64,
    /// Mean rounded to two decimal places.
    pub average: f64,
    pub minimum: u32,
    pub maximum: u32,
    pub range: u32,
}

impl StatisticsSummary {
    pub fn average_text(&self) -> String {
        fmt_f64_fixed(self.average, 2)
    }
}

/// Compute the panel values for `values`.
///
/// Returns `None` for an empty slice: the panel stays hidden instead of
/// showing a meaningless average.
pub fn summarize(values: &[u32]) -> Option<StatisticsSummary> {
    let (&first, rest) = values.split_first()?;

    let mut sum = first as u64;
    let mut minimum = first;
    let mut maximum = first;
    for &v in rest {
        sum += v as u64;
        minimum = minimum.min(v);
        maximum = maximum.max(v);
    }

    let mean = sum as f64 / values.len() as f64;
    Some(StatisticsSummary {
        count: values.len(),
        sum,
        average: (mean * 100.0).round() / 100.0,
        minimum,
        maximum,
        range: maximum - minimum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sequence() {
        let s = summarize(&[3, 1, 4, 1, 5]).unwrap();
        assert_eq!(s.count, 5);
        assert_eq!(s.sum, 14);
        assert_eq!(s.average_text(), "2.80");
        assert!((s.average - 2.8).abs() < 1e-9);
        assert_eq!(s.minimum, 1);
        assert_eq!(s.maximum, 5);
        assert_eq!(s.range, 4);
    }

    #[test]
    fn empty_has_no_summary() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn single_value_has_zero_range() {
        let s = summarize(&[42]).unwrap();
        assert_eq!(s.average_text(), "42.00");
        assert_eq!(s.minimum, 42);
        assert_eq!(s.maximum, 42);
        assert_eq!(s.range, 0);
    }

    #[test]
    fn average_rounds_to_two_places() {
        // 10 / 3 = 3.333...
        let s = summarize(&[3, 3, 4]).unwrap();
        assert_eq!(s.average_text(), "3.33");
        // 2 / 3 = 0.666...
        let s = summarize(&[0, 1, 1]).unwrap();
        assert_eq!(s.average_text(), "0.67");
    }

    #[test]
    fn sum_does_not_overflow_at_full_width() {
        let values = vec![u32::MAX; 10_000];
        let s = summarize(&values).unwrap();
        assert_eq!(s.sum, u32::MAX as u64 * 10_000);
        assert_eq!(s.maximum, u32::MAX);
        assert_eq!(s.range, 0);
    }
}
