// HashMap property tests against std's HashMap as a model.
//
// Property 1: every operation agrees with the model.
//  - Operations: add, set, remove, get; keys from a small range so that
//    duplicates and re-insertions after removal are frequent.
//  - Invariant after each step: len() matches the model, the touched key
//    reads back the model's value (or the miss value) and every key in the
//    model is still reachable.
//
// Property 2: the same sequence with a hasher that maps every key to one of
//  four raw hashes, so nearly every entry sits in a shared run and removals
//  shift long chains, including across the end of the array.
use std::collections::HashMap as Model;
use std::hash::BuildHasherDefault;
use std::hash::Hasher;

use fib_map::HashMap;
use fib_map::fnv::Fnv1aBuildHasher;
use proptest::prelude::*;

#[derive(Default)]
struct FourBuckets {
    hash: u64,
}

impl Hasher for FourBuckets {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.hash = self.hash.wrapping_add(byte as u64);
        }
    }

    fn finish(&self) -> u64 {
        // Spread the buckets over the top bits so their homes differ.
        (self.hash & 3) << 30
    }
}

type Colliding = BuildHasherDefault<FourBuckets>;

#[derive(Clone, Copy, Debug)]
enum Op {
    Add(u16, u32),
    Set(u16, u32),
    Remove(u16),
    Get(u16),
}

fn op_strategy(keys: u16) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..keys, any::<u32>()).prop_map(|(k, v)| Op::Add(k, v)),
        (0..keys, any::<u32>()).prop_map(|(k, v)| Op::Set(k, v)),
        (0..keys).prop_map(Op::Remove),
        (0..keys).prop_map(Op::Get),
    ]
}

fn run<S>(mut map: HashMap<u16, u32, S>, ops: Vec<Op>) -> Result<(), TestCaseError>
where
    S: std::hash::BuildHasher,
{
    let mut model: Model<u16, u32> = Model::new();

    for op in ops {
        let key = match op {
            Op::Add(k, v) => {
                let expected = !model.contains_key(&k);
                if expected {
                    model.insert(k, v);
                }
                prop_assert_eq!(map.add(k, v), expected);
                k
            }
            Op::Set(k, v) => {
                prop_assert_eq!(map.set(k, v), model.insert(k, v));
                k
            }
            Op::Remove(k) => {
                prop_assert_eq!(map.remove(&k), model.remove(&k).is_some());
                k
            }
            Op::Get(k) => k,
        };

        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(map.get_checked(&key), model.get(&key));
        prop_assert_eq!(*map.get(&key), model.get(&key).copied().unwrap_or(u32::MAX));
        prop_assert!(map.len() <= map.load_factor());
        prop_assert_eq!(map.load_factor() * 2, map.capacity());
        for (k, v) in &model {
            prop_assert_eq!(map.get_checked(k), Some(v), "key {} lost after {:?}", k, op);
        }
    }

    for (k, v) in &model {
        prop_assert_eq!(map.get_checked(k), Some(v));
    }
    let mut seen: Vec<(u16, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    let mut expected: Vec<(u16, u32)> = model.into_iter().collect();
    seen.sort_unstable();
    expected.sort_unstable();
    prop_assert_eq!(seen, expected);

    Ok(())
}

proptest! {
    #[test]
    fn prop_matches_model(
        ops in (1u16..=64).prop_flat_map(|keys| proptest::collection::vec(op_strategy(keys), 1..300)),
    ) {
        let map = HashMap::<u16, u32, Fnv1aBuildHasher>::new().with_miss_value(u32::MAX);
        run(map, ops)?;
    }

    #[test]
    fn prop_matches_model_with_collisions(
        ops in proptest::collection::vec(op_strategy(40), 1..300),
    ) {
        let map = HashMap::<u16, u32, Colliding>::new().with_miss_value(u32::MAX);
        run(map, ops)?;
    }
}
