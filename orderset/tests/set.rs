use orderset::{OrderedSet, SetError};
use rand::{distr::Alphanumeric, rngs::SmallRng, Rng, SeedableRng};
use std::iter;

/// Reference model: a plain vector of pairs, reordered with the same
/// swap-remove as the set.
#[derive(Default)]
struct Model {
    pairs: Vec<(u8, u32)>,
}

impl Model {
    fn position(&self, key: u8) -> Option<usize> {
        self.pairs.iter().position(|(k, _)| *k == key)
    }
}

#[test]
fn test_insert_remove() {
    let mut m: OrderedSet<Vec<char>, usize> = OrderedSet::new();
    let seed = u64::from_le_bytes(*b"testseed");

    let rng = &mut SmallRng::seed_from_u64(seed);
    let tx: Vec<Vec<char>> = iter::repeat_with(|| {
        rng.sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect()
    })
    .take(4096)
    .collect();

    for _ in 0..8 {
        for (i, x) in tx.iter().enumerate() {
            assert!(!m.contains(x));
            m.add(x.clone(), i).unwrap();
        }
        itertools::assert_equal(m.keys(), tx.iter());
        for (i, x) in tx.iter().enumerate() {
            assert_eq!(m.remove(x), Ok(i));
        }
        assert!(m.is_empty());
    }
}

#[test]
fn test_against_model() {
    let seed = u64::from_le_bytes(*b"ordmodel");
    let rng = &mut SmallRng::seed_from_u64(seed);
    let mut set: OrderedSet<u8, u32> = OrderedSet::new();
    let mut model = Model::default();

    for step in 0..20_000u32 {
        let key: u8 = rng.random_range(0..64);
        match rng.random_range(0..6) {
            0 => {
                let expected = match model.position(key) {
                    Some(_) => Err(SetError::AlreadyExists),
                    None => {
                        model.pairs.push((key, step));
                        Ok(())
                    }
                };
                assert_eq!(set.add(key, step), expected);
            }
            1 => {
                match model.position(key) {
                    Some(i) => model.pairs[i].1 = step,
                    None => model.pairs.push((key, step)),
                }
                set.upsert(key, step);
            }
            2 => {
                let expected = match model.position(key) {
                    Some(i) => Ok(model.pairs.swap_remove(i).1),
                    None => Err(SetError::NotFound),
                };
                assert_eq!(set.remove(&key), expected);
            }
            3 => {
                let value = set.borrow_mut_with_default(key, step);
                *value += 1;
                match model.position(key) {
                    Some(i) => model.pairs[i].1 += 1,
                    None => model.pairs.push((key, step + 1)),
                }
            }
            4 => {
                let expected = model.position(key).map(|i| &model.pairs[i].1);
                assert_eq!(set.borrow(&key).ok(), expected);
                assert_eq!(set.contains(&key), expected.is_some());
            }
            _ => {
                if rng.random_range(0..200) == 0 {
                    set.empty();
                    set.empty();
                    model.pairs.clear();
                }
            }
        }
        assert_eq!(set.len(), model.pairs.len());
    }

    itertools::assert_equal(
        set.iter().map(|(k, v)| (*k, *v)),
        model.pairs.iter().copied(),
    );

    let mut forward = vec![];
    set.clone().for_each(|k, v| forward.push((k, v)));
    assert_eq!(forward, model.pairs);

    let mut backward = vec![];
    set.for_each_reverse(|k, v| backward.push((k, v)));
    model.pairs.reverse();
    assert_eq!(backward, model.pairs);
}

#[test]
fn test_error_leaves_set_unchanged() {
    let mut set: OrderedSet<String, i32> = ["x", "y", "z"]
        .iter()
        .enumerate()
        .map(|(i, k)| (k.to_string(), i as i32))
        .collect();
    let before = set.clone();

    assert_eq!(set.add("y".to_string(), 100), Err(SetError::AlreadyExists));
    assert_eq!(set.remove("w"), Err(SetError::NotFound));
    assert_eq!(set.borrow_mut("w"), Err(SetError::NotFound));
    assert_eq!(set.borrow("w"), Err(SetError::NotFound));

    assert_eq!(set, before);
    itertools::assert_equal(set.keys(), before.keys());
}
