use std::fmt;
use std::sync::{Arc, RwLock};

type Watcher<T> = Box<dyn Fn(&T) + Send + Sync>;

struct ObservableInner<T> {
    value: RwLock<T>,
    watchers: RwLock<Vec<Watcher<T>>>,
}

/// Reactive cell with interior mutability.
///
/// `Observable<T>` holds one value plus a list of watchers. Every write
/// notifies the watchers synchronously, before the mutating call returns,
/// so a read that follows a completed write never observes stale derived
/// state. It uses `Arc<RwLock<T>>` internally, making it cheap to clone
/// and safe to share between a presenter and its UI binding.
///
/// Watchers cannot be removed; the cells in this crate live for the whole
/// form lifetime.
///
/// # Example
///
/// ```
/// use fieldwork::observable::Observable;
///
/// let name = Observable::new(String::new());
/// name.subscribe(|v: &String| log::trace!("name is now {v:?}"));
/// name.set("ada".to_string());
/// assert_eq!(name.get(), "ada");
/// ```
pub struct Observable<T> {
    inner: Arc<ObservableInner<T>>,
}

impl<T> Observable<T> {
    /// Create a new cell holding `value`
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(ObservableInner {
                value: RwLock::new(value),
                watchers: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .value
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Set a new value and notify every watcher
    pub fn set(&self, value: T)
    where
        T: Clone,
    {
        if let Ok(mut guard) = self.inner.value.write() {
            *guard = value;
        }
        self.notify();
    }

    /// Update the value in place and notify every watcher
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
        T: Clone,
    {
        if let Ok(mut guard) = self.inner.value.write() {
            f(&mut guard);
        }
        self.notify();
    }

    /// Register a watcher called on every subsequent write
    pub fn subscribe<F>(&self, watcher: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        if let Ok(mut watchers) = self.inner.watchers.write() {
            watchers.push(Box::new(watcher));
        }
    }

    /// Watchers receive a snapshot taken after the write, not the live
    /// guard, so they are free to read the cell again.
    fn notify(&self)
    where
        T: Clone,
    {
        let snapshot = self.get();
        if let Ok(watchers) = self.inner.watchers.read() {
            for watcher in watchers.iter() {
                watcher(&snapshot);
            }
        }
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Observable").field(&self.get()).finish()
    }
}
