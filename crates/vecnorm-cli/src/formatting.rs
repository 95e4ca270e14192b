//! Number formatting for evaluation results

/// Format a result, spelling IEEE 754 special values the way the parser reads them
pub fn format_number(n: f64, precision: Option<usize>) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        match precision {
            Some(digits) => format!("{:.*}", digits, n),
            None => format!("{}", n),
        }
    }
}

/// One line of the demo listing: expression padded to 12, value right-aligned in 15
pub fn format_listing_line(expression: &str, value: f64) -> String {
    format!("{:<12} = {:>15}", expression, format_number(value, Some(8)))
}
