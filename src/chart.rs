//! Text rendering of category totals as a horizontal bar chart.
//!
//! Categories run down the left axis and bars grow to the right in proportion to the category's
//! total. The bar of the largest total (by magnitude) is `width` characters long. Negative totals
//! are drawn with a lighter shade.

use crate::CategoryTotals;

pub const TITLE: &str = "Expenses by Category";
pub const CATEGORY_AXIS: &str = "Category";
pub const AMOUNT_AXIS: &str = "Total Amount Spent";
pub const NO_DATA: &str = "No expenses to chart.";

const POSITIVE: char = '█';
const NEGATIVE: char = '░';

/// Renders `totals` as a bar chart, or the `NO_DATA` message when there is nothing to show.
pub fn render(totals: &CategoryTotals, width: usize) -> String {
    if totals.is_empty() {
        return NO_DATA.to_string();
    }

    let label_width = totals
        .iter()
        .map(|(category, _)| category.chars().count())
        .chain(std::iter::once(CATEGORY_AXIS.len()))
        .max()
        .unwrap_or_default();
    let max = totals.max_magnitude();

    let mut lines = vec![
        TITLE.to_string(),
        String::new(),
        format!("{CATEGORY_AXIS:<label_width$} | {AMOUNT_AXIS}"),
        format!(
            "{}-+-{}",
            "-".repeat(label_width),
            "-".repeat(width.max(AMOUNT_AXIS.len()))
        ),
    ];
    for (category, total) in totals.iter() {
        let bar = bar(total, max, width);
        lines.push(format!(
            "{category:<label_width$} | {bar:<width$} {}",
            format_amount(total)
        ));
    }
    lines.join("\n")
}

/// Scales `total` against `max` to a run of at most `width` bar characters. A non-zero total
/// always gets at least one character.
fn bar(total: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || total == 0.0 {
        return String::new();
    }
    let len = ((total.abs() / max) * width as f64).round() as usize;
    let len = len.clamp(1, width.max(1));
    let c = if total < 0.0 { NEGATIVE } else { POSITIVE };
    std::iter::repeat(c).take(len).collect()
}

/// Formats an amount with thousands separators and two decimals, e.g. `-1,234.50`.
fn format_amount(amount: f64) -> String {
    let cents = (amount * 100.0).round() / 100.0;
    let sign = if cents < 0.0 { "-" } else { "" };
    format!("{sign}{}", format_num::format_num!(",.2f", cents.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(data: &[(&str, f64)]) -> CategoryTotals {
        data.iter().map(|(c, t)| (c.to_string(), *t)).collect()
    }

    fn bar_len(line: &str, c: char) -> usize {
        line.chars().filter(|x| *x == c).count()
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(NO_DATA, render(&CategoryTotals::default(), 40));
    }

    #[test]
    fn test_render_scales_bars() {
        let chart = render(&totals(&[("Food", 10.0), ("Transport", 20.0)]), 40);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(TITLE, lines[0]);
        assert_eq!("Category  | Total Amount Spent", lines[2]);
        assert!(lines[4].starts_with("Food      | "));
        assert!(lines[4].ends_with(" 10.00"));
        assert_eq!(20, bar_len(lines[4], POSITIVE));
        assert!(lines[5].starts_with("Transport | "));
        assert!(lines[5].ends_with(" 20.00"));
        assert_eq!(40, bar_len(lines[5], POSITIVE));
        // Amounts line up because bars are padded to the full width.
        assert_eq!(lines[4].chars().count(), lines[5].chars().count());
    }

    #[test]
    fn test_render_negative_total() {
        let chart = render(&totals(&[("Food", 10.0), ("Refunds", -5.0)]), 10);
        let refunds = chart.lines().find(|l| l.starts_with("Refunds")).unwrap();
        assert_eq!(5, bar_len(refunds, NEGATIVE));
        assert_eq!(0, bar_len(refunds, POSITIVE));
        assert!(refunds.ends_with(" -5.00"));
    }

    #[test]
    fn test_small_totals_are_visible() {
        assert_eq!(1, bar(0.01, 1000.0, 10).chars().count());
        assert_eq!("", bar(0.0, 1000.0, 10));
        assert_eq!("", bar(0.0, 0.0, 10));
    }

    #[test]
    fn test_long_category_widens_label_axis() {
        let chart = render(&totals(&[("Entertainment", 1.0)]), 5);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!("Category      | Total Amount Spent", lines[2]);
        assert!(lines[4].starts_with("Entertainment | "));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!("19.75", format_amount(19.75));
        assert_eq!("1,234.50", format_amount(1234.5));
        assert_eq!("-5.00", format_amount(-5.0));
    }

    #[test]
    fn test_format_amount_rounding_to_zero_has_no_sign() {
        assert_eq!("0.00", format_amount(-0.004));
        assert_eq!("0.00", format_amount(0.004));
        assert_eq!("-0.01", format_amount(-0.006));
    }
}
