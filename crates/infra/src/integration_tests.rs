//! Integration tests for whole editing sessions.
//!
//! Tests: EditingSession → Catalog → in-memory directories, and
//! EditingSession → save workflow → InMemoryOrderRepository.
//!
//! Verifies:
//! - Entered lines reach the repository without the blank row
//! - Rejections keep the session's order intact
//! - Orders replaced by another collaborator are picked up through the bus

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use orderdesk_events::{EventBus, InMemoryEventBus};
    use orderdesk_parties::{Customer, CustomerId, CustomerKind};
    use orderdesk_products::{Product, ProductId};
    use orderdesk_sales::{
        Catalog, DeliveryAddress, EditingSession, InMemoryNotifier, LineAssignment, Notification, Notifier,
        OrderChanged, OrderRepository, PaymentMethod, QuantityChange, SaveOutcome, SessionConfig,
        TracingNotifier,
    };
    use orderdesk_users::{Group, User, UserId, user_key};

    use crate::directory::{InMemoryCustomerDirectory, InMemoryProductDirectory, InMemoryUserDirectory};
    use crate::repository::InMemoryOrderRepository;

    type TestCatalog = Catalog<
        Arc<InMemoryProductDirectory>,
        Arc<InMemoryCustomerDirectory>,
        Arc<InMemoryUserDirectory>,
    >;
    type TestSession = EditingSession<TestCatalog, Arc<InMemoryOrderRepository>, Arc<InMemoryNotifier>>;

    struct World {
        catalog: TestCatalog,
        repository: Arc<InMemoryOrderRepository>,
        notifier: Arc<InMemoryNotifier>,
        customer: Customer,
        salesperson: User,
    }

    fn test_world() -> World {
        orderdesk_observability::init();

        let products = InMemoryProductDirectory::with_products([
            Product::new(ProductId::generate(), "HM1000", "Hammer", 1_000).unwrap(),
            Product::new(ProductId::generate(), "NL2000", "Nails (box)", 500).unwrap(),
            Product::new(ProductId::generate(), "SW3000", "Saw", 2_990).unwrap(),
        ]);
        let customer = Customer::new(
            CustomerId::generate(),
            "Acme Tools",
            Some("buyer@acme.example".to_string()),
            "12345678000199",
            CustomerKind::Company,
        )
        .unwrap();
        let customers = InMemoryCustomerDirectory::with_customers([customer.clone()]);
        let salesperson =
            User::new(UserId::generate(), "Ana", "ana@example.com", vec![Group::Salespeople]).unwrap();
        let users = InMemoryUserDirectory::with_users([
            salesperson.clone(),
            User::new(UserId::generate(), "Bruno", "bruno@example.com", vec![Group::Auxiliaries]).unwrap(),
        ]);

        World {
            catalog: Catalog::new(Arc::new(products), Arc::new(customers), Arc::new(users)),
            repository: Arc::new(InMemoryOrderRepository::new()),
            notifier: Arc::new(InMemoryNotifier::new()),
            customer,
            salesperson,
        }
    }

    fn start(world: &World) -> TestSession {
        EditingSession::start(
            world.catalog.clone(),
            world.repository.clone(),
            world.notifier.clone(),
            SessionConfig::default(),
        )
    }

    fn test_address() -> DeliveryAddress {
        DeliveryAddress {
            street: "Av. Brasil".to_string(),
            number: "1500".to_string(),
            complement: Some("Sala 3".to_string()),
            neighborhood: "Centro".to_string(),
            city: "Uberaba".to_string(),
            state: "MG".to_string(),
            zip: "38010-000".to_string(),
        }
    }

    fn fill_header<N: Notifier>(
        world: &World,
        session: &mut EditingSession<TestCatalog, Arc<InMemoryOrderRepository>, N>,
    ) {
        let found = session.complete_customer("acme");
        assert_eq!(found, vec![world.customer.clone()]);
        session.select_customer(found[0].clone());
        session
            .select_salesperson_by_key(&user_key(Some(&world.salesperson)))
            .unwrap();
        session.set_payment_method(Some(PaymentMethod::BankSlip));
        *session.delivery_address_mut() = test_address();
    }

    #[test]
    fn entered_order_is_stored_without_blank_row() {
        let world = test_world();
        let mut session = start(&world);
        fill_header(&world, &mut session);
        assert_eq!(session.salespeople(), &[world.salesperson.clone()]);

        assert_eq!(session.lookup_product_by_code("hm1000"), LineAssignment::Assigned { row: 0 });
        assert_eq!(session.update_quantity(0, 2), Ok(QuantityChange::Updated));
        assert_eq!(session.lookup_product_by_code("NL2000"), LineAssignment::Assigned { row: 1 });
        assert_eq!(session.order().total(), 2_500);

        assert_eq!(session.lookup_product_by_code("HM1000"), LineAssignment::DuplicateProduct);
        assert_eq!(session.order().total(), 2_500);

        let outcome = session.save();
        let SaveOutcome::Saved { id } = outcome.clone() else {
            panic!("expected Saved, got {outcome:?}");
        };

        let stored = world.repository.get(id).unwrap();
        assert_eq!(stored.items().len(), 2);
        assert!(stored.items().iter().all(|i| !i.is_empty()));
        assert_eq!(stored.total(), 2_500);
        assert_eq!(stored.payment_method(), Some(PaymentMethod::BankSlip));

        assert!(session.is_editing());
        assert_eq!(session.order().items().len(), 3);
        assert_eq!(session.order().editable_row(), Some(2));
        assert_eq!(
            world.notifier.take(),
            vec![
                Notification::error("A line item with this product already exists."),
                Notification::info("Order saved successfully!"),
            ]
        );
    }

    #[test]
    fn rejected_save_leaves_repository_and_session_alone() {
        let world = test_world();
        let mut session = start(&world);
        session.lookup_product_by_code("SW3000");
        let before = session.order().clone();

        let outcome = session.save();

        assert!(!outcome.is_saved());
        assert!(world.repository.is_empty());
        assert_eq!(session.order(), &before);
        let sent = world.notifier.take();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].message.contains("customer: is required"));
    }

    #[test]
    fn editing_a_saved_order_updates_it_in_place() {
        let world = test_world();
        let mut session = start(&world);
        fill_header(&world, &mut session);
        session.lookup_product_by_code("HM1000");
        session.lookup_product_by_code("NL2000");
        session.lookup_product_by_code("SW3000");
        let SaveOutcome::Saved { id } = session.save() else {
            panic!("first save should succeed");
        };

        assert_eq!(session.update_quantity(1, 0), Ok(QuantityChange::Removed));
        assert_eq!(session.update_quantity(0, 3), Ok(QuantityChange::Updated));
        assert!(session.save().is_saved());

        let stored = world.repository.get(id).unwrap();
        assert_eq!(world.repository.len(), 1);
        assert_eq!(stored.items().len(), 2);
        assert_eq!(stored.total(), 3 * 1_000 + 2_990);
        assert_eq!(session.order().total(), stored.total());
    }

    #[test]
    fn order_replaced_elsewhere_is_loaded_from_the_bus() {
        let world = test_world();
        let mut session = start(&world);
        fill_header(&world, &mut session);
        session.lookup_product_by_code("HM1000");
        let SaveOutcome::Saved { id } = session.save() else {
            panic!("save should succeed");
        };

        let bus: Arc<InMemoryEventBus<OrderChanged>> = Arc::new(InMemoryEventBus::new());
        let changes = bus.subscribe();

        // Another collaborator changes the stored order and announces it.
        let repository = world.repository.clone();
        let bus_clone = bus.clone();
        let (done_tx, done_rx) = std::sync::mpsc::channel::<()>();
        std::thread::spawn(move || {
            if let Some(mut order) = repository.get(id) {
                order.set_payment_method(Some(PaymentMethod::Cash));
                if let Ok(saved) = repository.save(&order) {
                    let _ = bus_clone.publish(OrderChanged::new(saved));
                }
            }
            let _ = done_tx.send(());
        });
        done_rx.recv_timeout(Duration::from_secs(1)).unwrap();

        assert!(session.receive_changes(&changes));
        assert_eq!(session.order().payment_method(), Some(PaymentMethod::Cash));
        assert_eq!(session.order().editable_row(), Some(1));
        assert_eq!(session.order().total(), 1_000);
        assert!(!session.receive_changes(&changes));
    }

    #[test]
    fn invalid_and_unknown_codes_do_not_touch_lines() {
        let world = test_world();
        let mut session = start(&world);

        assert_eq!(session.lookup_product_by_code("HAMMER"), LineAssignment::InvalidCode);
        assert_eq!(session.lookup_product_by_code("ZZ0000"), LineAssignment::Nothing);
        assert_eq!(session.lookup_product_by_code(""), LineAssignment::Nothing);

        assert_eq!(session.order().items().len(), 1);
        assert_eq!(world.notifier.take().len(), 1);
    }

    #[test]
    fn product_completion_is_sorted_by_name() {
        let world = test_world();
        let mut session = start(&world);

        let names: Vec<String> = session
            .complete_product("")
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, ["Hammer", "Nails (box)", "Saw"]);

        let saw = session.complete_product("sa");
        session.set_editable_product(saw.first().cloned());
        assert_eq!(session.assign_editable_product(), LineAssignment::Assigned { row: 0 });
        assert_eq!(session.order().total(), 2_990);
    }

    #[test]
    fn session_with_tracing_notifier_saves() {
        let world = test_world();
        let mut session = EditingSession::start(
            world.catalog.clone(),
            world.repository.clone(),
            TracingNotifier,
            SessionConfig::default().with_saved_message("Pedido salvo!"),
        );
        fill_header(&world, &mut session);
        session.lookup_product_by_code("NL2000");

        assert!(session.save().is_saved());
        let order = session.finish();
        assert_eq!(order.items().len(), 1);
        assert_eq!(world.repository.len(), 1);
    }
}
