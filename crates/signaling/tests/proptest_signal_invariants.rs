//! Property-based invariant tests for the signal slot registry and emit
//! validation.
//!
//! 1. Connect/disconnect sequences keep slots unique and in registration
//!    order (checked against a simple ordered-set model).
//! 2. Emit invokes exactly the connected slots, in model order.
//! 3. Emit succeeds iff the argument names equal the contract as a set.
//! 4. A failed emit invokes no slot.
//! 5. Equality depends only on the slot sequence.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use signaling::{Kwargs, ParamShape, Signal, Slot};

// ── Helpers ─────────────────────────────────────────────────────────────

const POOL: usize = 6;
const NAMES: [&str; 4] = ["foo", "bar", "baz", "qux"];

#[derive(Debug, Clone, Copy)]
enum Op {
    Connect(usize),
    Disconnect(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..POOL).prop_map(Op::Connect),
        (0..POOL).prop_map(Op::Disconnect),
    ]
}

fn name_subset_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(NAMES.to_vec(), 0..=NAMES.len())
}

type Log = Rc<RefCell<Vec<usize>>>;

fn slot_pool(log: &Log) -> Vec<Slot<u8>> {
    (0..POOL)
        .map(|i| {
            let log = Rc::clone(log);
            Slot::new(format!("slot{i}"), ParamShape::catch_all(), move |_| {
                log.borrow_mut().push(i);
                Ok(())
            })
        })
        .collect()
}

fn apply(signal: &mut Signal<u8>, model: &mut Vec<usize>, pool: &[Slot<u8>], op: Op) {
    match op {
        Op::Connect(i) => {
            signal.connect(pool[i].clone()).expect("catch-all slot connects");
            if !model.contains(&i) {
                model.push(i);
            }
        }
        Op::Disconnect(i) => {
            signal.disconnect(&pool[i]);
            model.retain(|&m| m != i);
        }
    }
}

fn kwargs_for(names: &[&str]) -> Kwargs<u8> {
    names.iter().map(|n| (*n, 0u8)).collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Registry matches the ordered-set model
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn registry_matches_model(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let log: Log = Rc::default();
        let pool = slot_pool(&log);
        let mut signal = Signal::new();
        let mut model = Vec::new();

        for op in ops {
            apply(&mut signal, &mut model, &pool, op);
            prop_assert_eq!(signal.len(), model.len());
        }

        let expected: Vec<Slot<u8>> = model.iter().map(|&i| pool[i].clone()).collect();
        prop_assert_eq!(signal.slots(), expected.as_slice());
        for (i, slot) in pool.iter().enumerate() {
            prop_assert_eq!(signal.is_connected(slot), model.contains(&i));
        }

        signal.emit(&Kwargs::new()).expect("no-argument emit");
        prop_assert_eq!(&*log.borrow(), &model);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–4. Emit validation is exact set equality and all-or-nothing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn emit_accepts_exact_name_set(
        contract in name_subset_strategy(),
        supplied in name_subset_strategy(),
    ) {
        let log: Log = Rc::default();
        let pool = slot_pool(&log);
        let mut signal = Signal::with_contract(contract.clone());
        for slot in &pool {
            signal.connect(slot.clone()).expect("catch-all slot connects");
        }

        let mut want = contract.clone();
        let mut got = supplied.clone();
        want.sort_unstable();
        got.sort_unstable();

        let result = signal.emit(&kwargs_for(&supplied));
        if want == got {
            prop_assert!(result.is_ok());
            prop_assert_eq!(log.borrow().len(), POOL);
        } else {
            let err = result.expect_err("mismatched names must be rejected");
            prop_assert!(err.is_invalid_emit());
            prop_assert!(log.borrow().is_empty());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Equality ignores name and contract
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn equality_follows_slot_sequence(
        ops_a in proptest::collection::vec(op_strategy(), 0..20),
        ops_b in proptest::collection::vec(op_strategy(), 0..20),
        contract in name_subset_strategy(),
    ) {
        let log: Log = Rc::default();
        let pool = slot_pool(&log);
        let mut a = Signal::new().named("a");
        let mut b = Signal::with_contract(contract);
        let mut model_a = Vec::new();
        let mut model_b = Vec::new();

        for op in ops_a {
            apply(&mut a, &mut model_a, &pool, op);
        }
        for op in ops_b {
            apply(&mut b, &mut model_b, &pool, op);
        }

        prop_assert_eq!(a == b, model_a == model_b);
    }
}
