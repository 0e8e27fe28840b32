#[cfg(test)]
mod tests {
    use std::hash::{Hash, Hasher};

    use bijection::{Bijection, BijectionError, Evicted::*};

    #[derive(PartialEq, Eq, Clone, Hash, Debug)]
    struct TestingStruct {
        pub(crate) value: u64,
        pub(crate) data: String,
    }

    impl TestingStruct {
        pub(crate) fn from_value(value: u64) -> Self {
            Self {
                value,
                data: value.to_string(),
            }
        }
    }

    // Every instance hashes the same, so every lookup has to be settled by equality
    #[derive(PartialEq, Eq, Clone, Debug)]
    struct BumpingStruct {
        hashable: String,
        value: u64,
    }

    impl Hash for BumpingStruct {
        fn hash<H: Hasher>(&self, state: &mut H) {
            self.hashable.hash(state)
        }
    }

    impl BumpingStruct {
        fn from_value(value: u64) -> Self {
            Self {
                hashable: String::from("bump"),
                value,
            }
        }
    }

    fn construct_default_map() -> Bijection<String, TestingStruct> {
        (0..10)
            .map(|i| (i.to_string(), TestingStruct::from_value(i)))
            .collect()
    }

    fn assert_synced<A, B>(map: &Bijection<A, B>)
    where
        A: Hash + Eq + std::fmt::Debug,
        B: Hash + Eq + std::fmt::Debug,
    {
        assert_eq!(map.len(), map.inverse().len());
        assert_eq!(map.keys().count(), map.len());
        assert_eq!(map.values().count(), map.len());
        for (a, b) in map.iter() {
            assert_eq!(map.get(a), Some(b));
            assert_eq!(map.inverse().get(b), Some(a));
        }
    }

    #[test]
    fn construction_test() {
        let map: Bijection<String, TestingStruct> = Bijection::new();
        assert_eq!(map.len(), 0);
        assert_eq!(map.capacity(), 0);
        let mut map = construct_default_map();
        assert_eq!(map.len(), 10);
        assert_synced(&map);
        let cap = map.capacity();
        map.clear();
        assert!(map.is_empty());
        assert!(map.inverse().is_empty());
        assert_eq!(map.capacity(), cap);
    }

    #[test]
    fn insert_test() {
        let mut map: Bijection<u64, String> = Bijection::with_capacity(100);
        for i in 0..100 {
            let ev = map.insert(i, i.to_string());
            assert_eq!(ev, Neither);
        }
        assert_eq!(map.len(), 100);
        for (val, s) in map.iter() {
            assert_eq!(val.to_string(), *s);
            assert_eq!(str::parse::<u64>(s).expect("Unreachable"), *val);
        }
        assert_synced(&map);
    }

    #[test]
    fn basic_scenario_test() {
        let mut map: Bijection<&str, u64> = Bijection::new();
        map.insert("a", 1);
        map.insert("b", 2);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.inverse().get(&2), Some(&"b"));
        assert_eq!(map.len(), 2);
        assert_eq!(map["b"], 2);
    }

    #[test]
    fn overwrite_key_test() {
        let mut map: Bijection<&str, u64> = Bijection::new();
        map.insert("a", 1);
        let ev = map.insert("a", 2);
        assert_eq!(ev, ByKey("a", 1));
        assert_eq!(map.get("a"), Some(&2));
        assert!(!map.contains_value(&1));
        assert_eq!(map.len(), 1);
        assert_synced(&map);
    }

    #[test]
    fn overwrite_value_test() {
        let mut map: Bijection<&str, u64> = Bijection::new();
        map.insert("a", 1);
        let ev = map.insert("b", 1);
        assert_eq!(ev, ByValue("a", 1));
        assert_eq!(map.get_by_value(&1), Some(&"b"));
        assert!(!map.contains_key("a"));
        assert_eq!(map.len(), 1);
        assert_synced(&map);
    }

    #[test]
    fn collision_law_test() {
        let mut map: Bijection<u64, &str> = Bijection::new();
        map.insert(1, "x");
        map.insert(2, "y");
        let ev = map.insert(1, "y");
        assert_eq!(ev, Both((1, "x"), (2, "y")));
        assert_eq!(map.len(), 1);
        assert!(map.are_paired(&1, &"y"));
        assert!(!map.contains_key(&2));
        assert!(!map.contains_value(&"x"));
        assert_eq!(map.inverse().get(&"y"), Some(&1));
        assert_synced(&map);
    }

    #[test]
    fn idempotent_insert_test() {
        let mut once: Bijection<u64, &str> = Bijection::new();
        once.insert(1, "x");
        once.insert(2, "y");
        let mut twice = once.clone();
        once.insert(3, "z");
        twice.insert(3, "z");
        let ev = twice.insert(3, "z");
        assert_eq!(ev, ByKey(3, "z"));
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 3);
        assert_synced(&twice);
    }

    #[test]
    fn insert_remove_round_trip_test() {
        let mut map = construct_default_map();
        let before = map.clone();
        map.insert("42".to_string(), TestingStruct::from_value(42));
        assert_eq!(map.len(), 11);
        assert_eq!(
            map.remove("42"),
            Some(TestingStruct::from_value(42))
        );
        assert_eq!(map, before);
        assert_synced(&map);
    }

    #[test]
    fn get_tests() {
        let map = construct_default_map();
        assert!(map.contains_key("0"));
        assert!(map.contains_value(&TestingStruct::from_value(0)));
        assert_eq!(map.get_by_value(&TestingStruct::from_value(42)), None);
        assert_eq!(
            map.get_by_value(&TestingStruct::from_value(0)),
            Some(&"0".to_string())
        );
        assert_eq!(map.get("42"), None);
        assert_eq!(map.get("0"), Some(&TestingStruct::from_value(0)));
        assert_eq!(
            map.get_key_value("7"),
            Some((&"7".to_string(), &TestingStruct::from_value(7)))
        );
        assert_eq!(map.try_get("7"), Ok(&TestingStruct::from_value(7)));
        assert_eq!(map.try_get("42"), Err(BijectionError::KeyNotFound));
        assert!(map.are_paired(&"1".to_string(), &TestingStruct::from_value(1)));
        assert!(!map.are_paired(&"1".to_string(), &TestingStruct::from_value(2)));
    }

    #[test]
    #[should_panic(expected = "no entry found for key")]
    fn index_missing_key_test() {
        let map = construct_default_map();
        let _ = &map["42"];
    }

    #[test]
    fn remove_tests() {
        // Remove by key
        let mut map = construct_default_map();
        assert_eq!(map.remove("42"), None);
        assert_eq!(map.remove("0"), Some(TestingStruct::from_value(0)));
        assert!(!map.contains_value(&TestingStruct::from_value(0)));
        assert_eq!(map.len(), 9);
        // Remove entry
        assert_eq!(
            map.remove_entry("1"),
            Some(("1".to_string(), TestingStruct::from_value(1)))
        );
        // Remove by value
        assert_eq!(map.remove_by_value(&TestingStruct::from_value(42)), None);
        assert_eq!(
            map.remove_by_value(&TestingStruct::from_value(2)),
            Some("2".to_string())
        );
        assert!(!map.contains_key("2"));
        assert_eq!(map.len(), 7);
        assert_synced(&map);
    }

    #[test]
    fn failed_remove_leaves_map_untouched_test() {
        let mut map = construct_default_map();
        let before = map.clone();
        assert_eq!(map.try_remove("missing"), Err(BijectionError::KeyNotFound));
        assert_eq!(
            map.try_remove_by_value(&TestingStruct::from_value(42)),
            Err(BijectionError::KeyNotFound)
        );
        assert_eq!(map, before);
        assert_eq!(map.len(), 10);
        assert_eq!(map.try_remove("3"), Ok(TestingStruct::from_value(3)));
        assert_eq!(
            map.try_remove_by_value(&TestingStruct::from_value(4)),
            Ok("4".to_string())
        );
        assert_synced(&map);
    }

    #[test]
    fn hash_collision_test() {
        let mut map: Bijection<BumpingStruct, BumpingStruct> = Bijection::new();
        for i in 0..10 {
            let ev = map.insert(BumpingStruct::from_value(i), BumpingStruct::from_value(i + 100));
            assert_eq!(ev, Neither);
        }
        assert_eq!(map.len(), 10);
        assert_synced(&map);
        // Collides on both sides, in buckets that all share one hash
        let ev = map.insert(BumpingStruct::from_value(3), BumpingStruct::from_value(105));
        assert_eq!(
            ev,
            Both(
                (BumpingStruct::from_value(3), BumpingStruct::from_value(103)),
                (BumpingStruct::from_value(5), BumpingStruct::from_value(105)),
            )
        );
        assert_eq!(map.len(), 9);
        assert_eq!(
            map.get(&BumpingStruct::from_value(3)),
            Some(&BumpingStruct::from_value(105))
        );
        assert_eq!(
            map.remove(&BumpingStruct::from_value(7)),
            Some(BumpingStruct::from_value(107))
        );
        assert_eq!(map.len(), 8);
        assert_synced(&map);
    }

    #[test]
    fn retain_test() {
        let mut map: Bijection<u64, String> = (0..100).map(|i| (i, i.to_string())).collect();
        map.retain(|x, _| x % 2 == 0);
        assert_eq!(map.len(), 50);
        assert_eq!(map.inverse().len(), 50);
        for (val, s) in map.iter() {
            assert_eq!(val % 2, 0);
            assert_eq!(map.get_by_value(s), Some(val));
        }
        assert!(!map.contains_value("1"));
    }

    #[test]
    fn drain_test() {
        let mut map = construct_default_map();
        let mut drained: Vec<(String, TestingStruct)> = map.drain().collect();
        drained.sort_by_key(|(_, t)| t.value);
        assert_eq!(drained.len(), 10);
        for (i, (s, t)) in drained.into_iter().enumerate() {
            assert_eq!(s, i.to_string());
            assert_eq!(t, TestingStruct::from_value(i as u64));
        }
        assert!(map.is_empty());
        assert!(map.inverse().is_empty());
        // A partially consumed drain still empties both sides
        let mut map = construct_default_map();
        assert_eq!(map.drain().take(3).count(), 3);
        assert!(map.is_empty());
        assert_eq!(map.values().count(), 0);
        map.insert("0".to_string(), TestingStruct::from_value(0));
        assert_synced(&map);
    }

    #[test]
    fn into_iter_test() {
        let map = construct_default_map();
        let mut pairs: Vec<(String, TestingStruct)> = map.into_iter().collect();
        pairs.sort_by_key(|(_, t)| t.value);
        assert_eq!(pairs.len(), 10);
        assert_eq!(pairs[4], ("4".to_string(), TestingStruct::from_value(4)));
    }

    #[test]
    fn iter_is_restartable_test() {
        let map = construct_default_map();
        let iter = map.iter();
        assert_eq!(iter.len(), 10);
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        let borrowed: Vec<_> = (&map).into_iter().collect();
        assert_eq!(first, borrowed);
    }

    #[test]
    fn keys_and_values_follow_iter_order_test() {
        let map: Bijection<u64, String> = (0..64).map(|i| (i, (i * 7).to_string())).collect();
        let pairs: Vec<(&u64, &String)> = map.iter().collect();
        let zipped: Vec<(&u64, &String)> = map.keys().zip(map.values()).collect();
        assert_eq!(zipped, pairs);
        assert_eq!(map.values().len(), 64);

        let inv = map.inverse();
        let inv_pairs: Vec<(&String, &u64)> = inv.iter().collect();
        let inv_zipped: Vec<(&String, &u64)> = inv.keys().zip(inv.values()).collect();
        assert_eq!(inv_zipped, inv_pairs);
        assert!(inv.keys().zip(inv.values()).all(|(k, v)| map.are_paired(v, k)));
    }

    #[test]
    fn are_paired_borrowed_test() {
        let map = construct_default_map();
        assert!(map.are_paired("3", &TestingStruct::from_value(3)));
        assert!(!map.are_paired("3", &TestingStruct::from_value(4)));
        assert!(!map.are_paired("42", &TestingStruct::from_value(42)));
        let words: Bijection<String, String> =
            [("a".to_string(), "x".to_string())].into_iter().collect();
        assert!(words.are_paired("a", "x"));
        assert!(!words.are_paired("x", "a"));
    }

    #[test]
    fn capacity_test() {
        let mut map: Bijection<u64, u64> = Bijection::with_capacity(100);
        assert!(map.capacity() >= 100);
        map.insert(1, 2);
        map.insert(3, 4);
        map.shrink_to(10);
        assert!(map.capacity() >= 10);
        map.shrink_to_fit();
        assert!(map.capacity() >= 2);
        map.reserve(50);
        assert!(map.capacity() >= 52);
        assert_eq!(map.get(&3), Some(&4));
        assert_synced(&map);
    }

    #[test]
    fn equality_test() {
        let map_1 = construct_default_map();
        let map_2: Bijection<String, TestingStruct> = (0..10)
            .rev()
            .map(|i| (i.to_string(), TestingStruct::from_value(i)))
            .collect();
        assert_eq!(map_1, map_2);
        let mut map_3 = map_2.clone();
        map_3.insert("0".to_string(), TestingStruct::from_value(1));
        assert_ne!(map_1, map_3);
    }

    #[test]
    fn debug_test() {
        let map: Bijection<&str, u64> = [("a", 1)].into();
        assert_eq!(format!("{map:?}"), r#"{"a": 1}"#);
        assert_eq!(format!("{:?}", map.inverse()), r#"{1: "a"}"#);
    }
}
