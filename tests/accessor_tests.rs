//! Tests for container accessors: `at`, `ix` and `first_where`.

use std::collections::{BTreeMap, HashMap};

use optica::lens;
use optica::optics::{Affine, Lens, at, first_where, ix, some};
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Order {
    sku: String,
    quantity: u32,
}

#[derive(Clone, PartialEq, Debug)]
struct Warehouse {
    stock: BTreeMap<String, u32>,
    orders: Vec<Order>,
}

fn warehouse() -> Warehouse {
    Warehouse {
        stock: BTreeMap::from([("bolt".to_string(), 40), ("nut".to_string(), 0)]),
        orders: vec![
            Order {
                sku: "bolt".to_string(),
                quantity: 4,
            },
            Order {
                sku: "nut".to_string(),
                quantity: 10,
            },
            Order {
                sku: "bolt".to_string(),
                quantity: 1,
            },
        ],
    }
}

// =============================================================================
// at
// =============================================================================

#[rstest]
#[case("bolt", Some(40))]
#[case("nut", Some(0))]
#[case("washer", None)]
fn test_at_view(#[case] key: &str, #[case] expected: Option<u32>) {
    assert_eq!(at(key.to_string()).view(&warehouse().stock), expected);
}

#[test]
fn test_at_update_some_inserts_or_replaces() {
    let stock = at("washer".to_string()).update(warehouse().stock, Some(7));
    assert_eq!(stock.get("washer"), Some(&7));

    let stock = at("bolt".to_string()).update(stock, Some(39));
    assert_eq!(stock.get("bolt"), Some(&39));
    assert_eq!(stock.len(), 3);
}

#[test]
fn test_at_update_none_removes() {
    let stock = at("nut".to_string()).update(warehouse().stock, None);
    assert!(!stock.contains_key("nut"));

    let unchanged = at("washer".to_string()).update(stock.clone(), None);
    assert_eq!(unchanged, stock);
}

#[test]
fn test_at_on_hash_map() {
    let ports: HashMap<&str, u16> = HashMap::from([("http", 80)]);
    let https = at("https");

    assert_eq!(https.view(&ports), None);
    let ports = https.update(ports, Some(443));
    assert_eq!(ports["https"], 443);
}

#[test]
fn test_at_composed_with_some_reads_only_present_keys() {
    let bolts = lens!(Warehouse, stock)
        .compose(at("bolt".to_string()))
        .compose_prism(some());
    let washers = lens!(Warehouse, stock)
        .compose(at("washer".to_string()))
        .compose_prism(some());

    assert_eq!(bolts.preview(&warehouse()), Some(40));
    assert_eq!(washers.preview(&warehouse()), None);
    assert_eq!(washers.try_modify(warehouse(), |count| count + 1), warehouse());
}

#[test]
fn test_at_composed_with_some_inserts_missing_key_on_write() {
    let washers = lens!(Warehouse, stock)
        .compose(at("washer".to_string()))
        .compose_prism(some());

    let restocked = washers.try_update(&warehouse(), 5);
    assert_eq!(
        restocked.map(|warehouse| warehouse.stock),
        Some(BTreeMap::from([
            ("bolt".to_string(), 40),
            ("nut".to_string(), 0),
            ("washer".to_string(), 5),
        ]))
    );
}

#[test]
fn test_ix_refuses_write_where_at_with_some_inserts() {
    let through_at = lens!(Warehouse, stock)
        .compose(at("washer".to_string()))
        .compose_prism(some());
    let through_ix = lens!(Warehouse, stock).compose_affine(ix("washer".to_string()));

    assert!(through_at.try_update(&warehouse(), 5).is_some());
    assert_eq!(through_ix.try_update(&warehouse(), 5), None);
}

// =============================================================================
// ix
// =============================================================================

#[test]
fn test_ix_map_replaces_only_existing_entries() {
    let stock = warehouse().stock;

    assert_eq!(ix("nut".to_string()).preview(&stock), Some(0));
    let restocked = ix("nut".to_string()).try_update(&stock, 100);
    assert_eq!(restocked.map(|stock| stock["nut"]), Some(100));

    assert_eq!(ix("washer".to_string()).try_update(&stock, 1), None);
}

#[rstest]
#[case(0, Some(10))]
#[case(1, Some(20))]
#[case(2, None)]
fn test_ix_vec(#[case] index: usize, #[case] expected: Option<i32>) {
    let values = vec![10, 20];
    assert_eq!(ix(index).preview(&values), expected);
    assert_eq!(
        ix(index).try_update(&values, 0).map(|values| values.len()),
        expected.map(|_| 2)
    );
}

#[test]
fn test_ix_composed_through_lens() {
    let second_order = lens!(Warehouse, orders)
        .compose_affine(ix(1))
        .compose_lens(lens!(Order, quantity));

    assert_eq!(second_order.preview(&warehouse()), Some(10));
    let updated = second_order.try_modify(warehouse(), |quantity| quantity * 2);
    assert_eq!(updated.orders[1].quantity, 20);
    assert_eq!(updated.orders[0], warehouse().orders[0]);
}

// =============================================================================
// first_where
// =============================================================================

#[test]
fn test_first_where_focuses_first_match_only() {
    let first_bolt = first_where(|order: &Order| order.sku == "bolt");

    assert_eq!(
        first_bolt.preview(&warehouse().orders).map(|order| order.quantity),
        Some(4)
    );

    let orders = first_bolt.try_modify(warehouse().orders, |order| Order {
        quantity: order.quantity + 1,
        ..order
    });
    assert_eq!(orders[0].quantity, 5);
    assert_eq!(orders[2].quantity, 1);
}

#[test]
fn test_first_where_without_match_is_absent() {
    let washer = first_where(|order: &Order| order.sku == "washer");

    assert_eq!(washer.preview(&warehouse().orders), None);
    assert!(!washer.is_present(&warehouse().orders));
    assert_eq!(
        washer.try_update(
            &warehouse().orders,
            Order {
                sku: "washer".to_string(),
                quantity: 1,
            }
        ),
        None
    );
}

#[test]
fn test_first_where_replaces_in_place_even_if_predicate_breaks() {
    let first_bolt = first_where(|order: &Order| order.sku == "bolt");
    let replacement = Order {
        sku: "nut".to_string(),
        quantity: 99,
    };

    let orders = first_bolt.try_update(&warehouse().orders, replacement.clone());
    let orders = orders.unwrap_or_default();

    assert_eq!(orders[0], replacement);
    assert_eq!(orders.len(), 3);
    assert_eq!(
        first_bolt.preview(&orders).map(|order| order.quantity),
        Some(1)
    );
}
