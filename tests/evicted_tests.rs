#[cfg(test)]
mod tests {
    use bijection::{Bijection, Evicted};

    #[test]
    fn is_tests() {
        let no: Evicted<&str, u64> = Evicted::Neither;
        let bk: Evicted<&str, u64> = Evicted::ByKey("a", 1);
        let bb: Evicted<&str, u64> = Evicted::Both(("a", 1), ("b", 2));
        assert!(no.is_none());
        assert!(!no.is_some());
        assert!(bk.is_some());
        assert!(bb.is_some());
        assert_eq!(no.len(), 0);
        assert_eq!(bk.len(), 1);
        assert_eq!(bb.len(), 2);
    }

    #[test]
    fn accessor_tests() {
        let bk: Evicted<&str, u64> = Evicted::ByKey("a", 1);
        let bv: Evicted<&str, u64> = Evicted::ByValue("b", 2);
        let bb: Evicted<&str, u64> = Evicted::Both(("a", 1), ("b", 2));
        assert_eq!(bk.by_key(), Some((&"a", &1)));
        assert_eq!(bk.by_value(), None);
        assert_eq!(bv.by_key(), None);
        assert_eq!(bv.by_value(), Some((&"b", &2)));
        assert_eq!(bb.by_key(), Some((&"a", &1)));
        assert_eq!(bb.by_value(), Some((&"b", &2)));
    }

    #[test]
    fn swap_tests() {
        let no: Evicted<&str, u64> = Evicted::Neither;
        assert_eq!(no.swap(), Evicted::Neither);
        assert_eq!(Evicted::ByKey("a", 1).swap(), Evicted::ByValue(1, "a"));
        assert_eq!(Evicted::ByValue("b", 2).swap(), Evicted::ByKey(2, "b"));
        assert_eq!(
            Evicted::Both(("a", 1), ("b", 2)).swap(),
            Evicted::Both((2, "b"), (1, "a"))
        );
        let bb: Evicted<&str, u64> = Evicted::Both(("a", 1), ("b", 2));
        assert_eq!(bb.swap().swap(), bb);
    }

    #[test]
    fn from_tests() {
        let no: Evicted<u64, u64> = Evicted::Neither;
        let no_tup: (Option<(u64, u64)>, Option<(u64, u64)>) = no.into();
        assert_eq!(no_tup, (None, None));
        assert_eq!(no, Evicted::from(no_tup));

        let bk: Evicted<u64, u64> = Evicted::ByKey(1, 2);
        let bk_tup: (Option<(u64, u64)>, Option<(u64, u64)>) = bk.into();
        assert_eq!(bk_tup, (Some((1, 2)), None));
        assert_eq!(bk, Evicted::from(bk_tup));

        let bv: Evicted<u64, u64> = Evicted::ByValue(3, 4);
        let bv_tup: (Option<(u64, u64)>, Option<(u64, u64)>) = bv.into();
        assert_eq!(bv_tup, (None, Some((3, 4))));
        assert_eq!(bv, Evicted::from(bv_tup));

        let bb: Evicted<u64, u64> = Evicted::Both((1, 2), (3, 4));
        let bb_tup: (Option<(u64, u64)>, Option<(u64, u64)>) = bb.into();
        assert_eq!(bb_tup, (Some((1, 2)), Some((3, 4))));
        assert_eq!(bb, Evicted::from(bb_tup));
    }

    #[test]
    fn into_iter_tests() {
        let no: Evicted<u64, u64> = Evicted::Neither;
        assert_eq!(no.into_iter().count(), 0);
        let bv: Evicted<u64, u64> = Evicted::ByValue(3, 4);
        assert_eq!(bv.into_iter().collect::<Vec<_>>(), vec![(3, 4)]);
        let bb: Evicted<u64, u64> = Evicted::Both((1, 2), (3, 4));
        assert_eq!(bb.into_iter().collect::<Vec<_>>(), vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn debug_tests() {
        let no: Evicted<&str, u64> = Evicted::Neither;
        assert_eq!(format!("{no:?}"), "Neither");
        let bk: Evicted<&str, u64> = Evicted::ByKey("a", 1);
        assert_eq!(format!("{bk:?}"), r#"ByKey( "a", 1 )"#);
        let bb: Evicted<&str, u64> = Evicted::Both(("a", 1), ("b", 2));
        assert_eq!(format!("{bb:?}"), r#"Both( ("a", 1), ("b", 2) )"#);
    }

    #[test]
    fn reinsert_evictions_test() {
        // Shift every value one key down; each original pair is reported exactly once
        let mut map: Bijection<u64, u64> = (0..10).map(|i| (i, i + 100)).collect();
        let mut evicted = Vec::new();
        for i in 0..10 {
            evicted.extend(map.insert(i, (i + 1) % 10 + 100));
        }
        assert_eq!(map.len(), 10);
        assert_eq!(map.get(&9), Some(&100));
        evicted.sort();
        assert_eq!(evicted, (0..10).map(|i| (i, i + 100)).collect::<Vec<_>>());
    }
}
