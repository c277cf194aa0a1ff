/// `numerator / denominator`, with `0/0 = 0` and `n/0 = +inf` for `n > 0`
pub fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        if numerator > 0 { f64::INFINITY } else { 0.0 }
    } else {
        numerator as f64 / denominator as f64
    }
}

pub fn format_ratio(value: f64) -> String {
    if value == f64::INFINITY {
        return "Inf".to_string();
    }
    if value.is_nan() || value == 0.0 {
        return "0.000".to_string();
    }
    format!("{:.3}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_edges() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(4, 0), f64::INFINITY);
        assert_eq!(ratio(3, 2), 1.5);
        assert_eq!(ratio(0, 5), 0.0);
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(f64::INFINITY), "Inf");
        assert_eq!(format_ratio(0.0), "0.000");
        assert_eq!(format_ratio(f64::NAN), "0.000");
        assert_eq!(format_ratio(2.0 / 3.0), "0.667");
        assert_eq!(format_ratio(1.5), "1.500");
    }
}
