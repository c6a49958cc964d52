//! Document-level settings.

/// Calendar name shown by importing applications unless overridden.
pub const DEFAULT_CALENDAR_NAME: &str = "農曆提醒";

/// Product identifier written to `PRODID`.
pub const DEFAULT_PRODUCT_ID: &str = "-//lunical//Lunar ICS Generator//EN";

/// Settings for the generated calendar document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsConfig {
    /// Display name (`X-WR-CALNAME`); omitted when empty.
    calendar_name: String,
    /// `PRODID` value.
    product_id: String,
}

impl Default for IcsConfig {
    fn default() -> Self {
        Self {
            calendar_name: DEFAULT_CALENDAR_NAME.to_string(),
            product_id: DEFAULT_PRODUCT_ID.to_string(),
        }
    }
}

impl IcsConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the calendar display name.
    pub fn with_calendar_name(mut self, name: impl Into<String>) -> Self {
        self.calendar_name = name.into();
        self
    }

    /// Sets the product identifier.
    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = product_id.into();
        self
    }

    /// Returns the calendar display name.
    pub fn calendar_name(&self) -> &str {
        &self.calendar_name
    }

    /// Returns the product identifier.
    pub fn product_id(&self) -> &str {
        &self.product_id
    }
}
