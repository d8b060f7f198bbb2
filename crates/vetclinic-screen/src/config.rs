use vetclinic_core::Locale;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Per-screen settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    pub page_size: u32,
    pub locale: Locale,
    /// The signed-in user, recorded as creator/editor of saved records.
    pub acting_user: Option<String>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            locale: Locale::default(),
            acting_user: None,
        }
    }
}

impl ScreenConfig {
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn acting_user(mut self, user: Option<String>) -> Self {
        self.acting_user = user.filter(|u| !u.trim().is_empty());
        self
    }
}
