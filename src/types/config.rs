use std::collections::BTreeSet;

/// Per-call execution controls for [`run_debug_session`](crate::run_debug_session).
///
/// Breakpoints and resume positions live with the caller between calls and
/// are passed in explicitly; the engine keeps nothing between runs.
///
/// # Example
///
/// ```
/// use rulestep::DebugConfig;
///
/// // Resume onto the rule at index 1 that we paused on, without pausing again.
/// let config = DebugConfig::new()
///     .breakpoint("r2")
///     .breakpoint("r4")
///     .start_at(1)
///     .suppress("r2");
/// assert!(config.pauses_on("r4"));
/// assert!(!config.pauses_on("r2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DebugConfig {
    pub breakpoints: BTreeSet<String>,
    /// Array index to start recording from. Earlier rules are replayed silently.
    pub start_index: usize,
    /// Pause before the first enabled rule at or past this index.
    pub stop_index: Option<usize>,
    /// A breakpoint ignored for this call, used when resuming onto it.
    pub suppressed: Option<String>,
}

impl DebugConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn breakpoint(mut self, rule_id: &str) -> Self {
        self.breakpoints.insert(rule_id.to_owned());
        self
    }

    #[must_use]
    pub fn breakpoints<I, S>(mut self, rule_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.breakpoints.extend(rule_ids.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn start_at(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    #[must_use]
    pub fn stop_at(mut self, index: usize) -> Self {
        self.stop_index = Some(index);
        self
    }

    #[must_use]
    pub fn suppress(mut self, rule_id: &str) -> Self {
        self.suppressed = Some(rule_id.to_owned());
        self
    }

    /// Whether a breakpoint on `rule_id` is active for this call.
    #[must_use]
    pub fn pauses_on(&self, rule_id: &str) -> bool {
        self.breakpoints.contains(rule_id) && !self.is_suppressed(rule_id)
    }

    pub(crate) fn should_pause(&self, rule_id: &str, index: usize) -> bool {
        if self.is_suppressed(rule_id) {
            return false;
        }
        self.breakpoints.contains(rule_id) || self.stop_index.is_some_and(|stop| index >= stop)
    }

    fn is_suppressed(&self, rule_id: &str) -> bool {
        self.suppressed.as_deref() == Some(rule_id)
    }
}
