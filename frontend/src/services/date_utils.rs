use chrono::NaiveDate;

/// Get current local date in YYYY-MM-DD format
pub fn get_current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Format YYYY-MM-DD date string for display (e.g. "Sun, June 15, 2025")
pub fn format_date_for_display(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%a, %B %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Check if a date string represents today
pub fn is_today(date_str: &str) -> bool {
    date_str == get_current_date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_current_date_format() {
        let today = get_current_date();
        assert_eq!(today.len(), 10);
        assert!(shared::schedule::parse_date(&today).is_ok());
        assert!(is_today(&today));
    }

    #[wasm_bindgen_test]
    fn test_display_format() {
        assert_eq!(format_date_for_display("2025-06-15"), "Sun, June 15, 2025");
        assert_eq!(format_date_for_display("garbage"), "garbage");
    }
}
