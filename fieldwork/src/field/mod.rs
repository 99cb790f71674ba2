//! Field presenters - per-input value, dirtiness, and validity tracking.

mod builders;
mod meta;

pub use meta::{FieldMeta, InputKind};

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::trace;

use crate::observable::Observable;
use crate::rules::{Rule, RuleError};
use crate::validated::ValidatedInput;
use crate::value::EmptyValue;

/// Unique identifier for a field presenter instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(usize);

impl FieldId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__field_{}", self.0)
    }
}

type Middleware<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// State shared by every handle to one field
struct FieldInner<T> {
    /// Value captured at construction; restored on reset, never mutated
    initial_value: T,
    /// Rules in insertion order
    rules: RwLock<Vec<Rule<T>>>,
    /// Transformations applied to every incoming value, in insertion order
    middleware: RwLock<Vec<Middleware<T>>>,
    /// Derived: AND of all rule outcomes for the current value
    valid: AtomicBool,
    /// Derived: messages of the failing rules that declare one
    error_messages: RwLock<Vec<String>>,
    /// Set on the first accepted change, cleared only by reset
    dirty: AtomicBool,
    /// While set, change requests are ignored
    disabled: AtomicBool,
    /// Metadata flag set by the required rule builder
    required: AtomicBool,
    /// Presentation metadata
    meta: RwLock<FieldMeta>,
}

impl<T> FieldInner<T> {
    /// Re-run every rule against `value` and store the derived state.
    ///
    /// `valid` is the AND of all outcomes (vacuously true with zero
    /// rules); `error_messages` collects, in insertion order, the message
    /// of every failing rule that has one. Silent rules affect validity
    /// only.
    fn revalidate(&self, value: &T) {
        let mut valid = true;
        let mut messages = Vec::new();
        if let Ok(rules) = self.rules.read() {
            for rule in rules.iter() {
                if !rule.passes(value) {
                    valid = false;
                    if let Some(message) = rule.message() {
                        messages.push(message.to_string());
                    }
                }
            }
        }
        self.valid.store(valid, Ordering::SeqCst);
        if let Ok(mut guard) = self.error_messages.write() {
            *guard = messages;
        }
    }
}

/// A presenter for one form input.
///
/// `FieldPresenter<T>` owns a field's value, dirty flag, rule set, and
/// derived validity. Every value mutation re-runs the rules synchronously,
/// so reads always reflect the latest write. The presenter is a cheap
/// handle: clones share state, which lets a UI binding and a form
/// aggregate observe the same field.
///
/// Rules and middleware accumulate through chained builder calls;
/// builders that register a rule return `Result` because a rule with a
/// blank message is a configuration error (a silent rule is requested
/// with `None` instead).
///
/// # Example
///
/// ```
/// use fieldwork::field::FieldPresenter;
/// use fieldwork::rules::RuleError;
///
/// # fn main() -> Result<(), RuleError> {
/// let email = FieldPresenter::new(String::new())
///     .must_be_email(Some("You must provide a valid email address"))?
///     .is_required(None)?
///     .with_label("Email");
///
/// email.change("someone@example.com".to_string());
/// assert!(email.is_valid());
/// assert!(email.is_dirty());
/// # Ok(())
/// # }
/// ```
pub struct FieldPresenter<T> {
    /// Unique identifier for this field instance
    id: FieldId,
    /// The reactive value cell
    value: Observable<T>,
    /// Shared state
    inner: Arc<FieldInner<T>>,
}

impl<T> FieldPresenter<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a presenter holding `initial_value`.
    ///
    /// A fresh field has no rules, so it is vacuously valid, with no
    /// error messages, and not dirty.
    pub fn new(initial_value: T) -> Self {
        let value = Observable::new(initial_value.clone());
        let inner = Arc::new(FieldInner {
            initial_value,
            rules: RwLock::new(Vec::new()),
            middleware: RwLock::new(Vec::new()),
            valid: AtomicBool::new(true),
            error_messages: RwLock::new(Vec::new()),
            dirty: AtomicBool::new(false),
            disabled: AtomicBool::new(false),
            required: AtomicBool::new(false),
            meta: RwLock::new(FieldMeta::default()),
        });

        // The reactive link: every value mutation, including the one reset
        // performs, re-runs the rules before the mutating call returns.
        let weak = Arc::downgrade(&inner);
        value.subscribe(move |new_value| {
            if let Some(inner) = weak.upgrade() {
                inner.revalidate(new_value);
            }
        });

        Self {
            id: FieldId::new(),
            value,
            inner,
        }
    }

    /// Get the unique id for this field
    pub fn id(&self) -> FieldId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current value
    pub fn value(&self) -> T {
        self.value.get()
    }

    /// Check whether every rule holds for the current value
    pub fn is_valid(&self) -> bool {
        self.inner.valid.load(Ordering::SeqCst)
    }

    /// Get the messages of the currently failing rules, in rule insertion
    /// order
    pub fn error_messages(&self) -> Vec<String> {
        self.inner
            .error_messages
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Check whether the value has changed since construction or the last
    /// reset
    pub fn is_dirty(&self) -> bool {
        self.inner.dirty.load(Ordering::SeqCst)
    }

    /// Check whether change requests are currently ignored
    pub fn is_disabled(&self) -> bool {
        self.inner.disabled.load(Ordering::SeqCst)
    }

    /// Check whether a required rule has been registered
    pub fn required(&self) -> bool {
        self.inner.required.load(Ordering::SeqCst)
    }

    /// Get the presentation metadata
    pub fn meta(&self) -> FieldMeta {
        self.inner
            .meta
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Get the label
    pub fn label(&self) -> String {
        self.inner
            .meta
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Apply a new value.
    ///
    /// Ignored while the field is disabled: the value and the dirty flag
    /// stay untouched. Otherwise the value is piped through the middleware
    /// in insertion order, assigned, and the field becomes dirty. The
    /// rules re-run before this call returns.
    pub fn change(&self, new_value: T) {
        if self.is_disabled() {
            trace!("field {} is disabled, ignoring change", self.id);
            return;
        }
        let mut value = new_value;
        if let Ok(middleware) = self.inner.middleware.read() {
            for transform in middleware.iter() {
                value = transform(value);
            }
        }
        self.value.set(value);
        self.inner.dirty.store(true, Ordering::SeqCst);
    }

    /// Restore the initial value and clear the dirty flag.
    ///
    /// The restored value travels through the same reactive trigger as an
    /// ordinary change, so the derived state afterwards matches what a
    /// change to the initial value would produce.
    pub fn reset(&self) {
        self.value.set(self.inner.initial_value.clone());
        self.inner.dirty.store(false, Ordering::SeqCst);
    }

    /// Toggle the disabled flag at runtime
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.disabled.store(disabled, Ordering::SeqCst);
    }

    /// Subscribe to value changes; the hook UI bindings attach to
    pub fn watch<F>(&self, watcher: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.value.subscribe(watcher);
    }

    // -------------------------------------------------------------------------
    // Configuration builders
    // -------------------------------------------------------------------------

    /// Append a rule and immediately evaluate it against the current
    /// value.
    ///
    /// `message` is the text contributed to [`error_messages`] when the
    /// rule fails. `None` registers a silent rule that affects validity
    /// only; an empty string is rejected as [`RuleError::BlankMessage`].
    ///
    /// [`error_messages`]: FieldPresenter::error_messages
    pub fn add_rule<F>(self, condition: F, message: Option<&str>) -> Result<Self, RuleError>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let rule = Rule::new(condition, message.map(String::from))?;
        if let Ok(mut rules) = self.inner.rules.write() {
            rules.push(rule);
        }
        self.revalidate_now();
        Ok(self)
    }

    /// Append a transformation applied to every incoming value.
    ///
    /// Middleware runs in insertion order inside [`change`]; adding one
    /// does not retroactively transform the current value.
    ///
    /// [`change`]: FieldPresenter::change
    pub fn with_middleware<F>(self, transform: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        if let Ok(mut middleware) = self.inner.middleware.write() {
            middleware.push(Box::new(transform));
        }
        self
    }

    /// Mark the field disabled; change requests are ignored from then on
    pub fn disable(self) -> Self {
        self.inner.disabled.store(true, Ordering::SeqCst);
        self
    }

    /// Set the label
    pub fn with_label(self, label: impl Into<String>) -> Self {
        if let Ok(mut meta) = self.inner.meta.write() {
            meta.label = label.into();
        }
        self
    }

    /// Set the help text
    pub fn with_help_text(self, help_text: impl Into<String>) -> Self {
        if let Ok(mut meta) = self.inner.meta.write() {
            meta.help_text = help_text.into();
        }
        self
    }

    /// Set the placeholder shown while the value is empty
    pub fn with_placeholder(self, placeholder: impl Into<String>) -> Self {
        if let Ok(mut meta) = self.inner.meta.write() {
            meta.placeholder = placeholder.into();
        }
        self
    }

    /// Set the prefix icon glyph
    pub fn with_icon(self, icon: impl Into<String>) -> Self {
        if let Ok(mut meta) = self.inner.meta.write() {
            meta.icon = icon.into();
        }
        self
    }

    /// Set the widget kind
    pub fn with_kind(self, kind: InputKind) -> Self {
        if let Ok(mut meta) = self.inner.meta.write() {
            meta.kind = kind;
        }
        self
    }

    /// Render as a multi-line editor
    pub fn multiline(self) -> Self {
        if let Ok(mut meta) = self.inner.meta.write() {
            meta.multiline = true;
        }
        self
    }

    fn revalidate_now(&self) {
        let value = self.value.get();
        self.inner.revalidate(&value);
    }

    pub(crate) fn mark_required(&self) {
        self.inner.required.store(true, Ordering::SeqCst);
    }
}

impl<T> FieldPresenter<T>
where
    T: Clone + EmptyValue + Send + Sync + 'static,
{
    /// Never dirtied and currently holding an empty value.
    ///
    /// Pristine fields are suppressed from a form's aggregate error list;
    /// a field that was touched and then cleared is not pristine.
    pub fn is_pristine(&self) -> bool {
        !self.is_dirty() && self.value.get().is_empty_value()
    }
}

impl<T> Clone for FieldPresenter<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            value: self.value.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for FieldPresenter<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for FieldPresenter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldPresenter")
            .field("id", &self.id)
            .field("value", &self.value.get())
            .field("valid", &self.inner.valid.load(Ordering::SeqCst))
            .field("dirty", &self.inner.dirty.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// ValidatedInput implementation
// -----------------------------------------------------------------------------

impl<T> ValidatedInput for FieldPresenter<T>
where
    T: Clone + EmptyValue + Send + Sync + 'static,
{
    fn is_valid(&self) -> bool {
        FieldPresenter::is_valid(self)
    }

    fn is_dirty(&self) -> bool {
        FieldPresenter::is_dirty(self)
    }

    fn is_pristine(&self) -> bool {
        FieldPresenter::is_pristine(self)
    }

    fn error_messages(&self) -> Vec<String> {
        FieldPresenter::error_messages(self)
    }

    fn reset(&self) {
        FieldPresenter::reset(self)
    }

    fn watch_changes(&self, watcher: Box<dyn Fn() + Send + Sync>) {
        self.value.subscribe(move |_| watcher());
    }

    fn field_id(&self) -> FieldId {
        self.id
    }
}
