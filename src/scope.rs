// In-memory scopes shown by the `list` command.
//
// A scope owns both its entries and its two column labels, so the two can
// never drift apart. Listing puts index-like keys ("0", "4", "17") first in
// ascending numeric order, then every other key in insertion order.
// Overwriting a key keeps its position.

pub const CONVERSATIONS: &str = "conversations";
pub const DRAFTS: &str = "drafts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    name: String,
    labels: [String; 2],
    entries: Vec<(String, String)>,
}

impl Scope {
    pub fn new(name: impl Into<String>, key_label: impl Into<String>, value_label: impl Into<String>) -> Self {
        Scope {
            name: name.into(),
            labels: [key_label.into(), value_label.into()],
            entries: Vec::new(),
        }
    }

    /// Builder-style insert, handy for seeding.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> (&str, &str) {
        (&self.labels[0], &self.labels[1])
    }

    /// Last write wins.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        let (mut indexed, named): (Vec<_>, Vec<_>) = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .partition(|(k, _)| index_key(k).is_some());
        indexed.sort_by_key(|(k, _)| index_key(k));
        indexed.into_iter().chain(named)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Canonical array-index form: digits only, no leading zero, below 2^32 - 1.
fn index_key(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse::<u32>().ok().filter(|n| *n != u32::MAX)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeStore {
    scopes: Vec<Scope>,
}

impl ScopeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two scopes available at startup.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.add(
            Scope::new(CONVERSATIONS, "ID", "Conversation Name")
                .with("1", "myConversation")
                .with("4", "anotherConv"),
        );
        store.add(
            Scope::new(DRAFTS, "Name", "Message")
                .with("myMsg", "hello everyone")
                .with("msg", "what is the time now?"),
        );
        store
    }

    /// Add a scope, replacing any scope of the same name.
    pub fn add(&mut self, scope: Scope) {
        match self.scopes.iter_mut().find(|s| s.name == scope.name) {
            Some(slot) => *slot = scope,
            None => self.scopes.push(scope),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Scope> {
        let idx = self.scopes.iter().position(|s| s.name == name)?;
        Some(self.scopes.remove(idx))
    }

    pub fn get(&self, name: &str) -> Option<&Scope> {
        self.scopes.iter().find(|s| s.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Scope> {
        self.scopes.iter_mut().find(|s| s.name == name)
    }

    /// Scope names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.scopes.iter().map(|s| s.name.as_str()).collect()
    }
}
