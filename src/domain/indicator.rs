//! Indicator definitions and name normalization.

use std::fmt;

/// Normalizes a human-supplied spelling for alias lookup: surrounding
/// whitespace is dropped and the rest is lowercased.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// An immutable indicator definition.
///
/// `id` keeps the spelling it was registered with and is the only key values
/// are stored under. `aliases` are kept normalized, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub id: String,
    pub display_name: String,
    pub aliases: Vec<String>,
}

impl Indicator {
    pub fn new<I, S>(id: &str, display_name: &str, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Indicator {
            id: id.trim().to_string(),
            display_name: display_name.trim().to_string(),
            aliases: aliases.into_iter().map(|a| normalize(a.as_ref())).collect(),
        }
    }

    /// Same definition with the id and display name trimmed and the aliases
    /// normalized. Fields are public, so a struct literal may skip [`Indicator::new`].
    pub fn normalized(&self) -> Indicator {
        Indicator::new(&self.id, &self.display_name, &self.aliases)
    }

    /// Every normalized spelling that should resolve to this indicator:
    /// the id, the display name, then the aliases. Duplicates are dropped,
    /// first occurrence wins.
    pub fn spellings(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.aliases.len() + 2);
        let candidates = [normalize(&self.id), normalize(&self.display_name)];
        let aliases = self.aliases.iter().map(|a| normalize(a));
        for spelling in candidates.into_iter().chain(aliases) {
            if !out.contains(&spelling) {
                out.push(spelling);
            }
        }
        out
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id)
    }
}
