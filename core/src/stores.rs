//! UI state stores: small shared flag holders that let unrelated view
//! components communicate without direct references.
//!
//! Each store is a plain struct with trivial transitions and no persistence.
//! `validate_form` and `trigger_refetch` are pulse signals — the flag is
//! toggled, not set, so observers react to the change rather than the value.

/// Date range selected in the history filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeStore {
    pub start: String,
    pub end: String,
}

impl DateRangeStore {
    /// Overwrite both bounds; values are stored verbatim.
    pub fn update_date_range(&mut self, start: impl Into<String>, end: impl Into<String>) {
        self.start = start.into();
        self.end = end.into();
    }
}

/// Form-validation coordination flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormCheckStore {
    pub trigger_validation: bool,
    pub is_valid: bool,
}

impl FormCheckStore {
    /// Pulse: flip `trigger_validation` so form components re-run validation.
    pub fn validate_form(&mut self) {
        self.trigger_validation = !self.trigger_validation;
    }

    pub fn set_valid(&mut self) {
        self.is_valid = !self.is_valid;
    }

    pub fn set_invalid(&mut self) {
        self.is_valid = false;
    }
}

/// Refetch coordination flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefetchStore {
    pub need_refetch: bool,
}

impl RefetchStore {
    /// Pulse: flip `need_refetch` so list views re-issue their fetch.
    pub fn trigger_refetch(&mut self) {
        self.need_refetch = !self.need_refetch;
    }
}
