#![no_main]

use std::cell::RefCell;
use std::rc::Rc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use signaling::{Kwargs, ParamShape, Signal, Slot};

const NAMES: [&str; 4] = ["foo", "bar", "baz", "qux"];
const POOL: usize = 8;

#[derive(Arbitrary, Debug)]
enum FuzzOp {
    Connect { slot: u8, params: u8, catch_all: bool },
    Disconnect { slot: u8 },
    Emit { names: u8 },
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    contract: u8,
    ops: Vec<FuzzOp>,
}

fn pick(mask: u8) -> Vec<&'static str> {
    NAMES
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, n)| *n)
        .collect()
}

fuzz_target!(|input: FuzzInput| {
    let contract = pick(input.contract);
    let calls: Rc<RefCell<Vec<usize>>> = Rc::default();
    let mut signal = Signal::with_contract(contract.clone());
    let mut pool: Vec<Option<Slot<u8>>> = vec![None; POOL];

    for op in input.ops.into_iter().take(256) {
        match op {
            FuzzOp::Connect {
                slot,
                params,
                catch_all,
            } => {
                let idx = usize::from(slot) % POOL;
                let slot = pool[idx].get_or_insert_with(|| {
                    let mut shape = ParamShape::named(pick(params));
                    if catch_all {
                        shape = shape.with_catch_all();
                    }
                    let calls = Rc::clone(&calls);
                    Slot::new(format!("slot{idx}"), shape, move |_| {
                        calls.borrow_mut().push(idx);
                        Ok(())
                    })
                });
                let before = signal.len();
                match signal.connect(slot.clone()) {
                    Ok(()) => {
                        assert!(signal.is_connected(slot));
                        assert!(signal.len() == before || signal.len() == before + 1);
                    }
                    Err(err) => {
                        assert!(err.is_invalid_slot());
                        assert_eq!(signal.len(), before);
                    }
                }
            }
            FuzzOp::Disconnect { slot } => {
                if let Some(slot) = &pool[usize::from(slot) % POOL] {
                    signal.disconnect(slot);
                    assert!(!signal.is_connected(slot));
                }
            }
            FuzzOp::Emit { names } => {
                let supplied = pick(names);
                let kwargs: Kwargs<u8> = supplied.iter().map(|n| (*n, 0)).collect();
                calls.borrow_mut().clear();
                match signal.emit(&kwargs) {
                    Ok(()) => {
                        assert_eq!(supplied, contract);
                        assert_eq!(calls.borrow().len(), signal.len());
                    }
                    Err(err) => {
                        assert!(err.is_invalid_emit());
                        assert!(calls.borrow().is_empty());
                    }
                }
            }
        }
    }

    // Connected slots stay unique.
    let slots = signal.slots();
    for (i, a) in slots.iter().enumerate() {
        assert!(slots[i + 1..].iter().all(|b| a != b));
    }
});
