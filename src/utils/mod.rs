use std::sync::{Arc, RwLock};

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::api::error;

/// Fresh identifier such as `message-0190f1c2-...`. UUIDv7 keeps ids unique and
/// time ordered even when many are minted within the same millisecond.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::now_v7())
}

/// UTC instant from calendar fields; invalid input falls back to the epoch.
pub fn utc_datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|n| n.and_utc())
        .unwrap_or_default()
}

/// Transformation applied to a single stored element. Returning an error aborts the
/// update and leaves the collection untouched.
pub type Patch<T> = Box<dyn FnOnce(&T) -> Result<T, error::SystemError> + Send>;

/// Copy-on-write collection. Every write builds a new vector and swaps it in, so a
/// reader holding an earlier snapshot never sees a half-applied change.
#[derive(Debug)]
pub struct Snapshot<T> {
    inner: RwLock<Arc<Vec<T>>>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self { inner: RwLock::new(Arc::new(Vec::new())) }
    }
}

impl<T: Clone> Snapshot<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { inner: RwLock::new(Arc::new(items)) }
    }

    pub fn load(&self) -> Arc<Vec<T>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Replaces the whole collection with the output of `f`. `None` keeps the current one.
    pub fn replace_with<F>(&self, f: F) -> bool
    where
        F: FnOnce(&[T]) -> Option<Vec<T>>,
    {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        match f(guard.as_slice()) {
            Some(next) => {
                *guard = Arc::new(next);
                true
            }
            None => false,
        }
    }

    /// Applies `patch` to the first element matching `find`.
    pub fn modify_first<F>(&self, find: F, patch: Patch<T>) -> Result<Option<T>, error::SystemError>
    where
        F: Fn(&T) -> bool,
    {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let Some(index) = guard.iter().position(|item| find(item)) else {
            return Ok(None);
        };
        let updated = patch(&guard[index])?;
        let next: Vec<T> = guard
            .iter()
            .enumerate()
            .map(|(i, item)| if i == index { updated.clone() } else { item.clone() })
            .collect();
        *guard = Arc::new(next);
        Ok(Some(updated))
    }

    pub fn push_many(&self, items: Vec<T>) {
        self.replace_with(|current| {
            let mut next = Vec::with_capacity(current.len() + items.len());
            next.extend_from_slice(current);
            next.extend(items);
            Some(next)
        });
    }

    pub fn remove_where<F>(&self, remove: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let mut removed = 0;
        self.replace_with(|current| {
            let next: Vec<T> = current.iter().filter(|item| !remove(item)).cloned().collect();
            removed = current.len() - next.len();
            (removed > 0).then_some(next)
        });
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_unique_in_a_burst() {
        let ids: std::collections::HashSet<String> = (0..1000).map(|_| new_id("n")).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.starts_with("n-")));
    }

    #[test]
    fn test_utc_datetime_fields() {
        let at = utc_datetime(2023, 9, 2, 14, 30);
        assert_eq!(at.to_rfc3339(), "2023-09-02T14:30:00+00:00");
        assert_eq!(utc_datetime(2023, 13, 1, 0, 0), DateTime::<Utc>::default());
    }

    #[test]
    fn test_old_snapshot_is_unaffected_by_writes() {
        let snapshot = Snapshot::new(vec![1, 2, 3]);
        let before = snapshot.load();

        let updated = snapshot.modify_first(|n| *n == 2, Box::new(|n: &i32| Ok(n * 10))).unwrap();
        assert_eq!(updated, Some(20));

        assert_eq!(*before, vec![1, 2, 3]);
        assert_eq!(*snapshot.load(), vec![1, 20, 3]);
    }

    #[test]
    fn test_failed_patch_leaves_collection_intact() {
        let snapshot = Snapshot::new(vec![1, 2, 3]);
        let before = snapshot.load();
        let result = snapshot
            .modify_first(|n| *n == 1, Box::new(|_: &i32| Err(error::SystemError::invalid("nope"))));
        assert!(result.is_err());
        assert!(Arc::ptr_eq(&before, &snapshot.load()));
    }

    #[test]
    fn test_modify_missing_is_none() {
        let snapshot = Snapshot::new(vec![1]);
        let before = snapshot.load();
        assert_eq!(snapshot.modify_first(|n| *n == 9, Box::new(|n: &i32| Ok(*n))).unwrap(), None);
        assert!(Arc::ptr_eq(&before, &snapshot.load()));
    }

    #[test]
    fn test_push_and_remove() {
        let snapshot = Snapshot::new(vec![1]);
        snapshot.push_many(vec![2, 3]);
        assert_eq!(*snapshot.load(), vec![1, 2, 3]);
        assert_eq!(snapshot.remove_where(|n| *n == 2), 1);
        assert_eq!(snapshot.remove_where(|n| *n == 2), 0);
        assert_eq!(*snapshot.load(), vec![1, 3]);
    }
}
