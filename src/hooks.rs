//! Named extension points for the login screen.
//!
//! Plugins extend the rendered page through hooks: **actions** append
//! markup at a named point in the document, **filters** thread a value
//! (a string or a list of strings) through every registered listener and
//! return the possibly-modified result. Listeners run in priority order,
//! ties broken by registration order.
//!
//! The registry is cheap to clone (callbacks are reference-counted), so
//! the application keeps one base registry and clones it per request;
//! anything the renderer registers while building a page stays scoped to
//! that request.
//!
//! # Examples
//!
//! ```
//! use vestibule::hooks::{FilterArgs, Hooks};
//!
//! let mut hooks = Hooks::new();
//! hooks.add_text_filter("login_title", 10, |title, _| format!("{} (staging)", title));
//! let title = hooks.apply_filters("login_title", "Log In".to_string(), &FilterArgs::none());
//! assert_eq!(title, "Log In (staging)");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

/// Default listener priority, matching the convention that built-in
/// listeners register at 10 unless they need to run earlier or later.
pub const DEFAULT_PRIORITY: i32 = 10;

/// An action listener: appends markup to the output buffer. It receives
/// the registry too, so emitters can resolve filters of their own (the
/// robots meta emitter runs the `robots` list filter, for example).
pub type ActionFn = Arc<dyn Fn(&Hooks, &mut String) + Send + Sync>;

/// A text filter listener: receives the current value and returns the
/// replacement.
pub type TextFilterFn = Arc<dyn Fn(String, &FilterArgs) -> String + Send + Sync>;

/// A list filter listener: receives the current list and returns the
/// replacement.
pub type ListFilterFn = Arc<dyn Fn(Vec<String>, &FilterArgs) -> Vec<String> + Send + Sync>;

/// Extra positional context a hook contract exposes alongside the
/// filtered value: the pre-composition original for `login_title`, the
/// current login action for `login_body_class`.
#[derive(Clone, Debug, Default)]
pub struct FilterArgs {
    pub original: Option<String>,
    pub action: Option<String>,
}

impl FilterArgs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_original(original: &str) -> Self {
        Self {
            original: Some(original.to_string()),
            action: None,
        }
    }

    pub fn with_action(action: &str) -> Self {
        Self {
            original: None,
            action: Some(action.to_string()),
        }
    }
}

#[derive(Clone)]
struct HookEntry<F> {
    priority: i32,
    seq: u64,
    callback: F,
}

fn insert_sorted<F>(entries: &mut Vec<HookEntry<F>>, entry: HookEntry<F>) {
    let pos = entries.partition_point(|e| (e.priority, e.seq) <= (entry.priority, entry.seq));
    entries.insert(pos, entry);
}

/// The hook registry: three maps of named, priority-ordered listeners.
#[derive(Clone, Default)]
pub struct Hooks {
    actions: HashMap<String, Vec<HookEntry<ActionFn>>>,
    text_filters: HashMap<String, Vec<HookEntry<TextFilterFn>>>,
    list_filters: HashMap<String, Vec<HookEntry<ListFilterFn>>>,
    next_seq: u64,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Register an action listener on `name` at the given priority.
    pub fn add_action<F>(&mut self, name: &str, priority: i32, callback: F)
    where
        F: Fn(&Hooks, &mut String) + Send + Sync + 'static,
    {
        let seq = self.bump_seq();
        insert_sorted(
            self.actions.entry(name.to_string()).or_default(),
            HookEntry {
                priority,
                seq,
                callback: Arc::new(callback),
            },
        );
    }

    /// Register a text filter listener on `name` at the given priority.
    pub fn add_text_filter<F>(&mut self, name: &str, priority: i32, callback: F)
    where
        F: Fn(String, &FilterArgs) -> String + Send + Sync + 'static,
    {
        let seq = self.bump_seq();
        insert_sorted(
            self.text_filters.entry(name.to_string()).or_default(),
            HookEntry {
                priority,
                seq,
                callback: Arc::new(callback),
            },
        );
    }

    /// Register a list filter listener on `name` at the given priority.
    pub fn add_list_filter<F>(&mut self, name: &str, priority: i32, callback: F)
    where
        F: Fn(Vec<String>, &FilterArgs) -> Vec<String> + Send + Sync + 'static,
    {
        let seq = self.bump_seq();
        insert_sorted(
            self.list_filters.entry(name.to_string()).or_default(),
            HookEntry {
                priority,
                seq,
                callback: Arc::new(callback),
            },
        );
    }

    /// Run every action listener registered on `name` against the output
    /// buffer. A hook with no listeners is a no-op.
    pub fn do_action(&self, name: &str, out: &mut String) {
        if let Some(entries) = self.actions.get(name) {
            for entry in entries {
                (entry.callback)(self, out);
            }
        }
    }

    /// Thread `value` through every text filter registered on `name`.
    /// With no listeners the value comes back unchanged.
    pub fn apply_filters(&self, name: &str, value: String, args: &FilterArgs) -> String {
        let mut value = value;
        if let Some(entries) = self.text_filters.get(name) {
            for entry in entries {
                value = (entry.callback)(value, args);
            }
        }
        value
    }

    /// Thread `values` through every list filter registered on `name`.
    pub fn apply_list_filters(&self, name: &str, values: Vec<String>, args: &FilterArgs) -> Vec<String> {
        let mut values = values;
        if let Some(entries) = self.list_filters.get(name) {
            for entry in entries {
                values = (entry.callback)(values, args);
            }
        }
        values
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.action_count(name) > 0
    }

    /// Whether `name` has at least one action listener at exactly
    /// `priority`.
    pub fn has_action_at(&self, name: &str, priority: i32) -> bool {
        self.actions
            .get(name)
            .map(|entries| entries.iter().any(|e| e.priority == priority))
            .unwrap_or(false)
    }

    pub fn action_count(&self, name: &str) -> usize {
        self.actions.get(name).map(Vec::len).unwrap_or(0)
    }

    pub fn has_text_filter(&self, name: &str) -> bool {
        self.text_filter_count(name) > 0
    }

    pub fn text_filter_count(&self, name: &str) -> usize {
        self.text_filters.get(name).map(Vec::len).unwrap_or(0)
    }

    pub fn list_filter_count(&self, name: &str) -> usize {
        self.list_filters.get(name).map(Vec::len).unwrap_or(0)
    }

    /// Listener count for a known hook, whatever its kind.
    pub fn listener_count(&self, name: &str) -> usize {
        self.action_count(name) + self.text_filter_count(name) + self.list_filter_count(name)
    }
}

/// The hooks the login screen exposes, with their kind and contract.
/// Used by the `hooks` CLI listing; registration is not limited to these.
pub const KNOWN_HOOKS: &[(&str, &str, &str)] = &[
    ("robots", "list filter", "Robots meta directives emitted for the login page"),
    ("login_enqueue_scripts", "action", "Enqueue scripts and styles for the login page"),
    ("login_head", "action", "Emit markup inside <head>"),
    ("login_title", "text filter", "Rewrite the composed document title"),
    ("login_headerurl", "text filter", "Rewrite the header logo link URL"),
    ("login_headertitle", "text filter", "Deprecated; title-attribute variant of login_headertext"),
    ("login_headertext", "text filter", "Rewrite the header logo link text"),
    ("login_body_class", "list filter", "Adjust the <body> class list"),
    ("login_header", "action", "Emit markup right after <body> opens"),
    ("login_message", "text filter", "Rewrite the message shown above the form"),
    ("login_errors", "text filter", "Rewrite the assembled error block"),
    ("login_messages", "text filter", "Rewrite the assembled info block"),
    ("shake_error_codes", "list filter", "Adjust the error codes that shake the form"),
    ("login_footer", "action", "Emit markup before </body>"),
];
