/// Utilities for order date formatting
use chrono::NaiveDate;

/// Date as shown in the orders table
/// Example: 2023-05-17 -> "2023-05-17"
pub fn format_order_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Long form for the details page
/// Example: 2023-05-17 -> "May 17, 2023"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_order_date() {
        let date = NaiveDate::from_ymd_opt(2023, 5, 7).unwrap();
        assert_eq!(format_order_date(date), "2023-05-07");
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(
            format_long_date(NaiveDate::from_ymd_opt(2023, 5, 17).unwrap()),
            "May 17, 2023"
        );
        assert_eq!(
            format_long_date(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()),
            "December 1, 2023"
        );
    }
}
