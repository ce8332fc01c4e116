//! Order total recalculation.
//!
//! Pure functions of the line list; amounts are in the smallest currency unit.
//! Arithmetic saturates instead of wrapping.

use crate::order::LineItem;

/// unit price × quantity.
pub fn line_subtotal(unit_price: u64, quantity: i64) -> i64 {
    i64::try_from(unit_price)
        .unwrap_or(i64::MAX)
        .saturating_mul(quantity)
}

/// Sum of subtotals over lines that reference a product. Blank rows count as zero.
pub fn order_total(items: &[LineItem]) -> i64 {
    items
        .iter()
        .filter(|item| !item.is_empty())
        .map(LineItem::subtotal)
        .fold(0, i64::saturating_add)
}

/// `12345` → `"123.45"`.
pub fn format_amount(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderdesk_products::{Product, ProductId};

    fn test_line(unit_price: u64, quantity: i64) -> LineItem {
        let sku = format!("AB{:04}", unit_price % 10_000);
        let product = Product::new(ProductId::generate(), sku, "Widget", unit_price).unwrap();
        LineItem::for_product(product, quantity)
    }

    #[test]
    fn empty_list_totals_zero() {
        assert_eq!(order_total(&[]), 0);
    }

    #[test]
    fn blank_rows_only_totals_zero() {
        let items = vec![LineItem::empty(), LineItem::empty_with_quantity(10)];
        assert_eq!(order_total(&items), 0);
    }

    #[test]
    fn sums_priced_lines() {
        let items = vec![test_line(1_000, 2), LineItem::empty(), test_line(500, 1)];
        assert_eq!(order_total(&items), 2_500);
    }

    #[test]
    fn saturates_on_overflow() {
        assert_eq!(line_subtotal(u64::MAX, 2), i64::MAX);
        let items = vec![test_line(u64::MAX, 1), test_line(1, 1)];
        assert_eq!(order_total(&items), i64::MAX);
    }

    #[test]
    fn formats_amounts_with_two_decimals() {
        assert_eq!(format_amount(2_500), "25.00");
        assert_eq!(format_amount(7), "0.07");
        assert_eq!(format_amount(-1_050), "-10.50");
        assert_eq!(format_amount(0), "0.00");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: total equals the plain sum when nothing overflows.
            #[test]
            fn matches_naive_sum(lines in proptest::collection::vec((1u64..100_000, 1i64..1_000), 0..20)) {
                let items: Vec<LineItem> = lines.iter().map(|&(p, q)| test_line(p, q)).collect();
                let expected: i64 = lines.iter().map(|&(p, q)| p as i64 * q).sum();
                prop_assert_eq!(order_total(&items), expected);
            }
        }
    }
}
