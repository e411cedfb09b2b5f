pub fn percent(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shares_sum_to_one_hundred() {
        let parts = [2.5, 3.165, 7.2];
        let total: f64 = parts.iter().sum();
        let sum: f64 = parts.iter().map(|p| percent(*p, total)).sum();
        assert!((sum - 100.0).abs() < 0.1);
    }

    #[test]
    fn zero_total_has_no_shares() {
        assert_eq!(percent(5.0, 0.0), 0.0);
        assert_eq!(percent(0.0, 0.0), 0.0);
    }
}
