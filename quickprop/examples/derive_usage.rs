//! Deriving default bundles for your own types
//!
//! Run with `cargo run --example derive_usage`.

use quickprop::{Arbitrary, Bundle, CheckConfig, Runner};

#[allow(dead_code)]
#[derive(Debug, Clone, Arbitrary)]
struct Order {
    customer: String,
    quantity: u16,
    express: bool,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Arbitrary)]
enum Payment {
    Cash,
    Card { last_four: u16 },
    Voucher(u32),
}

fn small_batches() -> Bundle<Vec<Order>> {
    Bundle::vec_of_max_len(Order::bundle(), 5).expect("non-zero length")
}

#[allow(dead_code)]
#[derive(Debug, Clone, Arbitrary)]
struct Batch {
    #[arbitrary(with = "small_batches")]
    orders: Vec<Order>,
    payment: Payment,
}

fn main() {
    let runner = Runner::new(CheckConfig::default().with_trials(200));

    // False on purpose: large orders exist
    let report = runner.report("quantity < 500", &Order::bundle(), &|o: &Order| {
        o.quantity < 500
    });
    println!("{}", report);

    let report = runner.report(
        "batches hold fewer than 5 orders",
        &Batch::bundle(),
        &|b: &Batch| b.orders.len() < 5,
    );
    println!("{}", report);
}
