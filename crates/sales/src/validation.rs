//! Save-time checks on an order.

use orderdesk_core::Violations;

use crate::order::{DeliveryAddress, Order};

const MAX_STREET_CHARS: usize = 150;
const MAX_NUMBER_CHARS: usize = 20;
const MAX_COMPLEMENT_CHARS: usize = 150;
const MAX_NEIGHBORHOOD_CHARS: usize = 60;
const MAX_CITY_CHARS: usize = 60;
const MAX_STATE_CHARS: usize = 60;
const MAX_ZIP_CHARS: usize = 9;

/// Every reason `order` cannot be saved yet. Blank rows are ignored.
pub fn validate_for_save(order: &Order) -> Violations {
    let mut v = Violations::new();

    v.require("customer", order.customer());
    v.require("salesperson", order.salesperson());
    v.require("payment_method", order.payment_method().as_ref());
    v.merge(validate_address(order.delivery_address()));

    if order.priced_items().next().is_none() {
        v.add("items", "order must have at least one item");
    }
    if order.total() < 0 {
        v.add("total", "order total must not be negative");
    }

    v
}

pub fn validate_address(address: &DeliveryAddress) -> Violations {
    let mut v = Violations::new();
    let required = [
        ("delivery_address.street", address.street.as_str(), MAX_STREET_CHARS),
        ("delivery_address.number", address.number.as_str(), MAX_NUMBER_CHARS),
        ("delivery_address.neighborhood", address.neighborhood.as_str(), MAX_NEIGHBORHOOD_CHARS),
        ("delivery_address.city", address.city.as_str(), MAX_CITY_CHARS),
        ("delivery_address.state", address.state.as_str(), MAX_STATE_CHARS),
        ("delivery_address.zip", address.zip.as_str(), MAX_ZIP_CHARS),
    ];
    for (field, value, max) in required {
        if v.require_text(field, value) {
            v.max_chars(field, value, max);
        }
    }
    if let Some(complement) = &address.complement {
        v.max_chars("delivery_address.complement", complement, MAX_COMPLEMENT_CHARS);
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{LineItem, PaymentMethod};
    use crate::test_support::*;

    fn complete_order() -> Order {
        let mut order = Order::new();
        order.set_customer(Some(test_customer()));
        order.set_salesperson(Some(test_salesperson()));
        order.set_payment_method(Some(PaymentMethod::Cash));
        order.set_delivery_address(test_address());
        order.push_line(LineItem::for_product(test_product("AB1000", 1_000), 1)).unwrap();
        order
    }

    #[test]
    fn complete_order_passes() {
        assert!(validate_for_save(&complete_order()).is_empty());
    }

    #[test]
    fn blank_trailing_row_does_not_count_as_item() {
        let mut order = complete_order();
        order.append_empty_line();
        assert!(validate_for_save(&order).is_empty());

        let mut empty = Order::new();
        empty.append_empty_line();
        assert!(validate_for_save(&empty).has_field("items"));
    }

    #[test]
    fn new_order_reports_every_missing_field() {
        let v = validate_for_save(&Order::new());
        for field in [
            "customer",
            "salesperson",
            "payment_method",
            "delivery_address.street",
            "delivery_address.number",
            "delivery_address.neighborhood",
            "delivery_address.city",
            "delivery_address.state",
            "delivery_address.zip",
            "items",
        ] {
            assert!(v.has_field(field), "missing violation for {field}");
        }
        assert!(!v.has_field("total"));
    }

    #[test]
    fn negative_total_is_rejected() {
        let mut order = complete_order();
        order.set_quantity(0, -3).unwrap();
        order.recalculate_total();
        assert!(validate_for_save(&order).has_field("total"));
    }

    #[test]
    fn address_lengths_are_limited() {
        let mut address = test_address();
        address.zip = "38400-000-000".to_string();
        address.complement = Some("x".repeat(151));
        let v = validate_address(&address);
        assert_eq!(v.len(), 2);
        assert!(v.has_field("delivery_address.zip"));
        assert!(v.has_field("delivery_address.complement"));
    }
}
