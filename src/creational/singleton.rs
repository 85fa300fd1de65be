// Singleton: one instance per process, whichever thread gets there first.
//
// Each variant is a cell meant to live in a `static`. They differ in when the
// value is built and in how concurrent first accesses are serialised:
//
// | Variant                  | Built            | Race closed by               |
// |--------------------------|------------------|------------------------------|
// | `LazySingleton`          | first access     | `OnceLock`                   |
// | `EagerSingleton`         | compile time     | nothing to race              |
// | `SynchronizedSingleton`  | first access     | mutex on every call          |
// | `DoubleCheckedSingleton` | first access     | atomic load, mutex if empty  |
// | `HolderSingleton`        | first access     | `LazyLock` holder            |
// | `EnumSingleton`          | compile time     | single-variant enum static   |

use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::{LazyLock, Mutex, OnceLock, PoisonError};

use tracing::debug;

// ============================================================================
// Lazy (atomic-once primitive)
// ============================================================================

pub struct LazySingleton<T> {
    cell: OnceLock<T>,
}

impl<T> LazySingleton<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Returns the instance, running `init` if this is the first access.
    /// Concurrent first callers block until the single `init` finishes.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(|| {
            debug!("constructing lazy singleton");
            init()
        })
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }
}

impl<T> Default for LazySingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Eager
// ============================================================================

/// Instance built in a const context, before any code runs.
pub struct EagerSingleton<T> {
    instance: T,
}

impl<T> EagerSingleton<T> {
    pub const fn new(instance: T) -> Self {
        Self { instance }
    }

    pub fn get(&self) -> &T {
        &self.instance
    }
}

// ============================================================================
// Synchronized lazy
// ============================================================================

/// Takes the lock on every access, initialised or not.
///
/// The instance is leaked so it can be handed out as `&'static T`; use this
/// cell from a `static`.
pub struct SynchronizedSingleton<T: 'static> {
    slot: Mutex<Option<&'static T>>,
}

impl<T: 'static> SynchronizedSingleton<T> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &'static T {
        // the slot is written only after `init` returns, so a poisoned lock
        // still holds either `None` or a complete instance
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot.get_or_insert_with(|| {
            debug!("constructing synchronized singleton");
            &*Box::leak(Box::new(init()))
        })
    }

    pub fn get(&self) -> Option<&'static T> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: 'static> Default for SynchronizedSingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Double-checked locking
// ============================================================================

/// Lock-free once initialised; the mutex is only taken while the pointer is
/// still null.
pub struct DoubleCheckedSingleton<T> {
    instance: AtomicPtr<T>,
    init_lock: Mutex<()>,
    _owns: PhantomData<Box<T>>,
}

// SAFETY: the cell hands out `&T` to any thread (needs `T: Sync`) and the
// thread that drops the cell may differ from the one that built the value
// (needs `T: Send`). Same bounds as `OnceLock<T>`.
unsafe impl<T: Send + Sync> Sync for DoubleCheckedSingleton<T> {}
unsafe impl<T: Send> Send for DoubleCheckedSingleton<T> {}

impl<T> DoubleCheckedSingleton<T> {
    pub const fn new() -> Self {
        Self {
            instance: AtomicPtr::new(ptr::null_mut()),
            init_lock: Mutex::new(()),
            _owns: PhantomData,
        }
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        let current = self.instance.load(Ordering::Acquire);
        if !current.is_null() {
            // SAFETY: non-null pointers come from `Box::into_raw` below, are
            // published with Release, and are freed only in `drop`.
            return unsafe { &*current };
        }

        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut current = self.instance.load(Ordering::Acquire);
        if current.is_null() {
            debug!("constructing double-checked singleton");
            current = Box::into_raw(Box::new(init()));
            self.instance.store(current, Ordering::Release);
        }
        // SAFETY: as above; `current` is either the pointer we just stored or
        // one another thread published before releasing the lock.
        unsafe { &*current }
    }

    pub fn get(&self) -> Option<&T> {
        let current = self.instance.load(Ordering::Acquire);
        // SAFETY: see `get_or_init`.
        unsafe { current.as_ref() }
    }
}

impl<T> Default for DoubleCheckedSingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoubleCheckedSingleton<T> {
    fn drop(&mut self) {
        let current = *self.instance.get_mut();
        if !current.is_null() {
            // SAFETY: `&mut self` means no borrows handed out by
            // `get_or_init` are alive, and the pointer came from `Box::into_raw`.
            drop(unsafe { Box::from_raw(current) });
        }
    }
}

// ============================================================================
// Lazy holder
// ============================================================================

/// The initialiser is fixed at declaration and runs on first dereference.
pub struct HolderSingleton<T, F = fn() -> T> {
    holder: LazyLock<T, F>,
}

impl<T, F: FnOnce() -> T> HolderSingleton<T, F> {
    pub const fn new(init: F) -> Self {
        Self {
            holder: LazyLock::new(init),
        }
    }

    pub fn get(&self) -> &T {
        &self.holder
    }
}

// ============================================================================
// Enum
// ============================================================================

/// A single-variant enum: the type itself admits exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumSingleton {
    Instance,
}

static ENUM_INSTANCE: EnumSingleton = EnumSingleton::Instance;

impl EnumSingleton {
    pub fn get() -> &'static EnumSingleton {
        &ENUM_INSTANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Barrier;
    use std::thread;

    const THREADS: usize = 16;

    #[derive(Debug)]
    struct Instance {
        payload: [u8; 8],
    }

    /// Runs `access` on `THREADS` threads released together and returns the
    /// address each one saw.
    fn race<F>(access: F) -> Vec<usize>
    where
        F: Fn() -> usize + Sync,
    {
        let barrier = &Barrier::new(THREADS);
        let access = &access;
        thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(move || {
                        barrier.wait();
                        access()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        })
    }

    fn assert_single(addresses: &[usize], constructions: &AtomicUsize) {
        assert_eq!(addresses.len(), THREADS);
        assert!(addresses.iter().all(|&addr| addr == addresses[0]));
        assert_eq!(constructions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_lazy_under_race() {
        static CELL: LazySingleton<Instance> = LazySingleton::new();
        static BUILT: AtomicUsize = AtomicUsize::new(0);

        assert!(CELL.get().is_none());
        let addresses = race(|| {
            let instance = CELL.get_or_init(|| {
                BUILT.fetch_add(1, Ordering::SeqCst);
                Instance { payload: [1; 8] }
            });
            instance as *const Instance as usize
        });
        assert_single(&addresses, &BUILT);
        assert_eq!(CELL.get().map(|instance| instance.payload), Some([1; 8]));
    }

    #[test]
    fn test_synchronized_under_race() {
        static CELL: SynchronizedSingleton<Instance> = SynchronizedSingleton::new();
        static BUILT: AtomicUsize = AtomicUsize::new(0);

        let addresses = race(|| {
            let instance = CELL.get_or_init(|| {
                BUILT.fetch_add(1, Ordering::SeqCst);
                Instance { payload: [2; 8] }
            });
            instance as *const Instance as usize
        });
        assert_single(&addresses, &BUILT);
        assert!(CELL.get().is_some());
    }

    #[test]
    fn test_double_checked_under_race() {
        static CELL: DoubleCheckedSingleton<Instance> = DoubleCheckedSingleton::new();
        static BUILT: AtomicUsize = AtomicUsize::new(0);

        let addresses = race(|| {
            let instance = CELL.get_or_init(|| {
                BUILT.fetch_add(1, Ordering::SeqCst);
                Instance { payload: [3; 8] }
            });
            instance as *const Instance as usize
        });
        assert_single(&addresses, &BUILT);
        let instance = CELL.get().unwrap();
        assert!(std::ptr::eq(instance, CELL.get_or_init(|| unreachable!())));
    }

    #[test]
    fn test_double_checked_drops_instance() {
        struct Tracked<'a>(&'a AtomicUsize);
        impl Drop for Tracked<'_> {
            fn drop(&mut self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let drops = AtomicUsize::new(0);
        {
            let cell = DoubleCheckedSingleton::new();
            cell.get_or_init(|| Tracked(&drops));
            cell.get_or_init(|| Tracked(&drops));
        }
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_holder_under_race() {
        static BUILT: AtomicUsize = AtomicUsize::new(0);
        static CELL: HolderSingleton<Instance> = HolderSingleton::new(|| {
            BUILT.fetch_add(1, Ordering::SeqCst);
            Instance { payload: [4; 8] }
        });

        assert_eq!(BUILT.load(Ordering::SeqCst), 0);
        let addresses = race(|| CELL.get() as *const Instance as usize);
        assert_single(&addresses, &BUILT);
    }

    #[test]
    fn test_eager_is_ready_before_access() {
        static CELL: EagerSingleton<[u8; 4]> = EagerSingleton::new([9, 9, 9, 9]);

        let addresses = race(|| CELL.get() as *const [u8; 4] as usize);
        assert!(addresses.iter().all(|&addr| addr == addresses[0]));
        assert_eq!(CELL.get(), &[9, 9, 9, 9]);
    }

    #[test]
    fn test_enum_instance() {
        let addresses = race(|| EnumSingleton::get() as *const EnumSingleton as usize);
        assert!(addresses.iter().all(|&addr| addr == addresses[0]));
        assert_eq!(*EnumSingleton::get(), EnumSingleton::Instance);
    }
}
