quantity!(Celsius, f64, "°C");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Celsius(2.5).to_string(), "2,50 °C");
        assert_eq!(Celsius(-12.34).to_string(), "-12,34 °C");
    }
}
