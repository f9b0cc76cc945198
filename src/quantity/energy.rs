quantity!(WattHours, i64, "Wh");

quantity!(KilowattHours, f64, "kWh");

impl From<WattHours> for KilowattHours {
    fn from(value: WattHours) -> Self {
        #[allow(clippy::cast_precision_loss)]
        Self(value.0 as f64 * 0.001)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_watt_hours_to_kilowatt_hours() {
        assert_abs_diff_eq!(KilowattHours::from(WattHours(1500)).0, 1.5);
    }

    #[test]
    fn test_display_uses_comma_separator() {
        assert_eq!(KilowattHours(1.0).to_string(), "1,00 kWh");
        assert_eq!(KilowattHours(-0.5).to_string(), "-0,50 kWh");
        assert_eq!(WattHours(2500).to_string(), "2500 Wh");
    }

    #[test]
    fn test_sum_stays_integral() {
        let total: WattHours = [WattHours(1), WattHours(2), WattHours(3)].into_iter().sum();
        assert_eq!(total, WattHours(6));
    }
}
