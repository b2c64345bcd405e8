//! paginate/memo: optional in-process LRU over page boundary tables.
//!
//! Ключ = (канонизированный путь главы, page_size). Значение хранит mtime,
//! с которым таблица была посчитана; при несовпадении mtime запись выкидывается
//! (то же правило, что и у дискового кэша).
//!
//! cap == 0 - слой выключен.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::splitter::PageBoundaries;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
struct MemoKey {
    path: PathBuf,
    page_size: usize,
}

impl MemoKey {
    fn new(path: &Path, page_size: usize) -> Self {
        // все формы одного пути (rel/abs/symlink) дают один ключ
        let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        Self { path, page_size }
    }
}

struct Inner {
    map: HashMap<MemoKey, (i64, PageBoundaries)>,
    // LRU order: front = oldest
    order: VecDeque<MemoKey>,
}

pub struct PaginationMemo {
    cap: usize,
    inner: Mutex<Inner>,
}

impl PaginationMemo {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            inner: Mutex::new(Inner {
                map: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.cap > 0
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|g| g.map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Boundaries computed for exactly `mtime`; a stale entry is evicted.
    pub fn get(&self, path: &Path, page_size: usize, mtime: i64) -> Option<PageBoundaries> {
        if !self.enabled() {
            return None;
        }
        let key = MemoKey::new(path, page_size);
        let mut g = self.inner.lock().ok()?;

        let fresh = match g.map.get(&key) {
            Some((m, _)) => *m == mtime,
            None => return None,
        };
        if !fresh {
            g.map.remove(&key);
            g.order.retain(|k| k != &key);
            return None;
        }

        touch(&mut g.order, &key);
        g.map.get(&key).map(|(_, b)| b.clone())
    }

    pub fn put(&self, path: &Path, page_size: usize, mtime: i64, bounds: PageBoundaries) {
        if !self.enabled() {
            return;
        }
        let key = MemoKey::new(path, page_size);
        let Ok(mut g) = self.inner.lock() else {
            return;
        };

        if g.map.insert(key.clone(), (mtime, bounds)).is_some() {
            touch(&mut g.order, &key);
        } else {
            g.order.push_back(key);
        }

        while g.map.len() > self.cap {
            match g.order.pop_front() {
                Some(old) => {
                    g.map.remove(&old);
                }
                None => break,
            }
        }
    }

    pub fn clear(&self) {
        if let Ok(mut g) = self.inner.lock() {
            g.map.clear();
            g.order.clear();
        }
    }
}

fn touch(order: &mut VecDeque<MemoKey>, key: &MemoKey) {
    if let Some(i) = order.iter().position(|k| k == key) {
        if let Some(k) = order.remove(i) {
            order.push_back(k);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(v: &[usize]) -> PageBoundaries {
        PageBoundaries::from_raw(v.to_vec(), *v.last().unwrap()).unwrap()
    }

    #[test]
    fn disabled_memo_stores_nothing() {
        let m = PaginationMemo::new(0);
        m.put(Path::new("a.txt"), 10, 1, b(&[0, 5]));
        assert!(m.get(Path::new("a.txt"), 10, 1).is_none());
        assert!(m.is_empty());
    }

    #[test]
    fn mtime_mismatch_evicts() {
        let m = PaginationMemo::new(4);
        m.put(Path::new("a.txt"), 10, 1, b(&[0, 5]));
        assert_eq!(m.get(Path::new("a.txt"), 10, 1), Some(b(&[0, 5])));
        assert!(m.get(Path::new("a.txt"), 10, 2).is_none());
        assert!(m.get(Path::new("a.txt"), 10, 1).is_none(), "evicted on mismatch");
    }

    #[test]
    fn page_size_is_part_of_key() {
        let m = PaginationMemo::new(4);
        m.put(Path::new("a.txt"), 10, 1, b(&[0, 5]));
        assert!(m.get(Path::new("a.txt"), 20, 1).is_none());
    }

    #[test]
    fn lru_evicts_oldest() {
        let m = PaginationMemo::new(2);
        m.put(Path::new("a.txt"), 10, 1, b(&[0, 1]));
        m.put(Path::new("b.txt"), 10, 1, b(&[0, 2]));
        // touch a -> b becomes oldest
        assert!(m.get(Path::new("a.txt"), 10, 1).is_some());
        m.put(Path::new("c.txt"), 10, 1, b(&[0, 3]));
        assert_eq!(m.len(), 2);
        assert!(m.get(Path::new("b.txt"), 10, 1).is_none());
        assert!(m.get(Path::new("a.txt"), 10, 1).is_some());
        assert!(m.get(Path::new("c.txt"), 10, 1).is_some());
    }
}
