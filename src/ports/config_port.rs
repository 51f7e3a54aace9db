//! Configuration access port trait.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool;

    /// Section names in the order they appear in the source.
    fn sections(&self) -> Vec<String>;

    /// Comma-separated value split into trimmed tokens. Empty tokens are
    /// kept so callers can reject them. There is no quoting: a spelling that
    /// itself contains a comma cannot be listed here and has to come from
    /// the builtin catalog or [`IndicatorRegistry::register`].
    ///
    /// [`IndicatorRegistry::register`]: crate::domain::registry::IndicatorRegistry::register
    fn get_list(&self, section: &str, key: &str) -> Option<Vec<String>> {
        self.get_string(section, key)
            .map(|raw| raw.split(',').map(|t| t.trim().to_string()).collect())
    }
}
