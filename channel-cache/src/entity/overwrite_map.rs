use super::Overwrite;
use arc_swap::ArcSwap;
use dashmap::DashMap;
use model::channel::PermissionOverwrite;
use model::Snowflake;
use std::iter::FromIterator;
use std::sync::Arc;

type Inner = DashMap<Snowflake, Overwrite>;

/// A channel's permission overwrites keyed by principal id.
///
/// Single keys are written through the inner `DashMap`, whose shard locks are only held for the
/// duration of the insert or remove. A full resync builds a new map and swaps it in, so a
/// reader holding the previous map keeps seeing it whole.
#[derive(Debug)]
pub struct OverwriteMap(ArcSwap<Inner>);

impl OverwriteMap {
    pub fn new() -> Self {
        Self(ArcSwap::from_pointee(DashMap::new()))
    }

    pub fn from_vec(overwrites: Vec<PermissionOverwrite>) -> Self {
        overwrites.into_iter().map(Overwrite::from).collect()
    }

    pub fn replace_all<T>(&self, overwrites: T)
    where
        T: IntoIterator<Item = Overwrite>,
    {
        self.0.store(Arc::new(build(overwrites)));
    }

    /// Returns the overwrite previously stored for the same principal id
    pub fn upsert(&self, overwrite: Overwrite) -> Option<Overwrite> {
        self.0.load().insert(overwrite.target_id(), overwrite)
    }

    pub fn remove(&self, id: Snowflake) -> bool {
        self.0.load().remove(&id).is_some()
    }

    pub fn get(&self, id: Snowflake) -> Option<Overwrite> {
        self.0.load().get(&id).map(|overwrite| *overwrite.value())
    }

    pub fn snapshot_all(&self) -> Vec<Overwrite> {
        let map = self.0.load_full();
        map.iter().map(|overwrite| *overwrite.value()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for OverwriteMap {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Overwrite> for OverwriteMap {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Overwrite>,
    {
        Self(ArcSwap::from_pointee(build(iter)))
    }
}

fn build<T>(overwrites: T) -> Inner
where
    T: IntoIterator<Item = Overwrite>,
{
    overwrites
        .into_iter()
        .map(|overwrite| (overwrite.target_id(), overwrite))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{OverwritePermissions, PermissionTarget};
    use std::thread;

    fn user(id: u64, allow: u64, deny: u64) -> Overwrite {
        Overwrite::new(
            PermissionTarget::User(Snowflake(id)),
            OverwritePermissions::new(allow, deny),
        )
    }

    fn role(id: u64, allow: u64, deny: u64) -> Overwrite {
        Overwrite::new(
            PermissionTarget::Role(Snowflake(id)),
            OverwritePermissions::new(allow, deny),
        )
    }

    fn sorted_ids(map: &OverwriteMap) -> Vec<u64> {
        let mut ids: Vec<u64> = map.snapshot_all().iter().map(|o| o.target_id().0).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn test_upsert_and_get() {
        let map = OverwriteMap::new();
        assert!(map.get(Snowflake(1)).is_none());

        assert_eq!(map.upsert(user(1, 0x1, 0)), None);
        assert_eq!(map.upsert(user(1, 0x2, 0)), Some(user(1, 0x1, 0)));
        assert_eq!(map.get(Snowflake(1)), Some(user(1, 0x2, 0)));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_from_vec() {
        use model::channel::PermissionOverwriteType;
        use model::PermissionBitSet;

        let map = OverwriteMap::from_vec(vec![PermissionOverwrite {
            id: Snowflake(4),
            overwrite_type: PermissionOverwriteType::Role,
            allow: PermissionBitSet(0x400),
            deny: PermissionBitSet(0),
        }]);

        assert_eq!(map.get(Snowflake(4)), Some(role(4, 0x400, 0)));
        assert!(!map.is_empty());
    }

    #[test]
    fn test_remove() {
        let map = OverwriteMap::new();
        map.upsert(role(3, 0x8, 0));

        assert!(!map.remove(Snowflake(4)));
        assert!(map.remove(Snowflake(3)));
        assert!(!map.remove(Snowflake(3)));
        assert!(map.get(Snowflake(3)).is_none());
        assert!(map.snapshot_all().is_empty());
    }

    #[test]
    fn test_interleaved_writes_match_reference_map() {
        use std::collections::HashMap;

        let map = OverwriteMap::new();
        let mut expected: HashMap<Snowflake, Overwrite> = HashMap::new();

        // fixed linear congruential sequence over 8 keys, so keys repeat often
        let mut seed: u64 = 0x2545_F491_4F6C_DD1D;
        for step in 0..500u64 {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let id = (seed >> 33) % 8;
            let op = (seed >> 40) % 3;

            if op == 2 {
                let removed = map.remove(Snowflake(id));
                assert_eq!(removed, expected.remove(&Snowflake(id)).is_some());
            } else {
                let overwrite = if op == 0 {
                    user(id, step, 0)
                } else {
                    role(id, 0, step)
                };
                let previous = map.upsert(overwrite);
                assert_eq!(previous, expected.insert(Snowflake(id), overwrite));
            }

            for key in 0..8 {
                assert_eq!(
                    map.get(Snowflake(key)),
                    expected.get(&Snowflake(key)).copied()
                );
            }

            let mut snapshot = map.snapshot_all();
            snapshot.sort_by_key(|o| o.target_id());
            let mut reference: Vec<Overwrite> = expected.values().copied().collect();
            reference.sort_by_key(|o| o.target_id());
            assert_eq!(snapshot, reference);
        }
    }

    #[test]
    fn test_replace_all_drops_stale_entries() {
        let map: OverwriteMap = vec![user(1, 1, 0), user(2, 2, 0)].into_iter().collect();
        map.upsert(role(9, 4, 0));

        map.replace_all(vec![user(2, 8, 0), role(5, 0, 16)]);

        assert_eq!(sorted_ids(&map), vec![2, 5]);
        assert_eq!(map.get(Snowflake(2)), Some(user(2, 8, 0)));
        assert!(map.get(Snowflake(1)).is_none());
        assert!(map.get(Snowflake(9)).is_none());
    }

    #[test]
    fn test_snapshot_is_detached_from_later_writes() {
        let map: OverwriteMap = vec![user(1, 1, 0)].into_iter().collect();
        let snapshot = map.snapshot_all();

        map.upsert(user(2, 1, 0));
        map.remove(Snowflake(1));

        assert_eq!(snapshot, vec![user(1, 1, 0)]);
        assert_eq!(sorted_ids(&map), vec![2]);
    }

    #[test]
    fn test_readers_never_see_mixed_generations() {
        let old: Vec<Overwrite> = (0..32).map(|i| user(i, 1, 0)).collect();
        let new: Vec<Overwrite> = (100..132).map(|i| user(i, 2, 0)).collect();
        let map = Arc::new(old.clone().into_iter().collect::<OverwriteMap>());

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let map = Arc::clone(&map);
                thread::spawn(move || {
                    for _ in 0..500 {
                        let snapshot = map.snapshot_all();
                        assert_eq!(snapshot.len(), 32);
                        let generation = snapshot[0].permissions().allow_value();
                        assert!(snapshot
                            .iter()
                            .all(|o| o.permissions().allow_value() == generation));
                    }
                })
            })
            .collect();

        for i in 0..200 {
            if i % 2 == 0 {
                map.replace_all(new.clone());
            } else {
                map.replace_all(old.clone());
            }
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }
}
