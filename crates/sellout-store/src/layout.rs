//! Bucket key layout for raw inputs and trusted outputs.

use sellout_model::Period;

/// Prefix holding the raw vendor exports for a period.
pub fn raw_prefix(period: Period) -> String {
    format!("raw/jbp/{}/{:02}/", period.year(), period.month())
}

/// Key of the compiled sellout object for a period. Deterministic per
/// period, so a rerun overwrites the previous output.
pub fn trusted_object(period: Period) -> String {
    format!(
        "trusted/jbp/{year}/{month:02}/compilados_sellout_{month:02}_{year}.csv",
        year = period.year(),
        month = period.month(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_prefix_zero_pads_month() {
        let period = Period::new(3, 2024).unwrap();
        assert_eq!(raw_prefix(period), "raw/jbp/2024/03/");
    }

    #[test]
    fn trusted_object_is_keyed_by_period() {
        let period = Period::new(10, 2024).unwrap();
        assert_eq!(
            trusted_object(period),
            "trusted/jbp/2024/10/compilados_sellout_10_2024.csv"
        );
    }
}
