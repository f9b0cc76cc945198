use std::ops::Mul;

quantity!(Euros, f64, "€");

impl Mul<u32> for Euros {
    type Output = Self;

    fn mul(self, hours: u32) -> Self::Output {
        Self(self.0 * f64::from(hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_rate_times_duration() {
        assert_eq!(Euros(19.95) * 2, Euros(39.90));
    }

    #[test]
    fn test_display() {
        assert_eq!(Euros(39.9).to_string(), "39,90 €");
    }
}
