//! Pure state for the onboarding form. Keeps selection and validation
//! logic out of the component so it can be tested without a browser.

/// News topics a user can subscribe to. Multi-select.
pub const CATEGORIES: [(&str, &str); 8] = [
    ("technology", "Technology"),
    ("business", "Business"),
    ("science", "Science"),
    ("health", "Health"),
    ("sports", "Sports"),
    ("entertainment", "Entertainment"),
    ("politics", "Politics"),
    ("world", "World News"),
];

#[derive(Clone, PartialEq, Debug)]
pub struct CategoryOption {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// How the daily digest is written. Single-select.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SummaryStyle {
    QuickBullets,
    Standard,
    DeepDive,
}

impl SummaryStyle {
    pub const ALL: [SummaryStyle; 3] = [
        SummaryStyle::QuickBullets,
        SummaryStyle::Standard,
        SummaryStyle::DeepDive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SummaryStyle::QuickBullets => "Quick Bullets",
            SummaryStyle::Standard => "Standard Digest",
            SummaryStyle::DeepDive => "Deep Dive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SummaryStyle::QuickBullets => "Headlines and one-liners you can scan in a minute",
            SummaryStyle::Standard => "A few paragraphs per story with the key context",
            SummaryStyle::DeepDive => "Full background, analysis and links to go further",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct OnboardingForm {
    pub name: String,
    pub phone: String,
    pub notification_time: String,
    pub categories: Vec<CategoryOption>,
    pub summary: Option<SummaryStyle>,
}

impl OnboardingForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            notification_time: String::new(),
            categories: CATEGORIES
                .iter()
                .map(|&(id, label)| CategoryOption {
                    id,
                    label,
                    selected: false,
                })
                .collect(),
            summary: None,
        }
    }

    /// Flips the matching category and leaves every other one alone.
    pub fn toggle_category(&mut self, id: &str) {
        if let Some(option) = self.categories.iter_mut().find(|c| c.id == id) {
            option.selected = !option.selected;
        }
    }

    /// Picks a summary style. Re-picking the current one keeps it
    /// selected, it is not a toggle-off.
    pub fn choose_summary(&mut self, style: SummaryStyle) {
        self.summary = Some(style);
    }

    pub fn selected_category_count(&self) -> usize {
        self.categories.iter().filter(|c| c.selected).count()
    }

    /// Whether the form can be submitted: non-blank name and phone,
    /// at least one category, a summary style and a delivery time.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && self.selected_category_count() > 0
            && self.summary.is_some()
            && !self.notification_time.is_empty()
    }
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> OnboardingForm {
        let mut form = OnboardingForm::new();
        form.name = "Jane".to_string();
        form.phone = "555-0100".to_string();
        form.notification_time = "09:00".to_string();
        form.toggle_category("technology");
        form.choose_summary(SummaryStyle::Standard);
        form
    }

    #[test]
    fn test_new_form_starts_empty() {
        let form = OnboardingForm::new();
        assert_eq!(form.selected_category_count(), 0);
        assert_eq!(form.summary, None);
        assert!(!form.is_complete());
    }

    #[test]
    fn test_toggle_category_flips_only_the_target() {
        let mut form = OnboardingForm::new();
        form.toggle_category("science");

        for option in &form.categories {
            assert_eq!(option.selected, option.id == "science");
        }
    }

    #[test]
    fn test_toggle_category_is_an_on_off_toggle() {
        let mut form = OnboardingForm::new();

        // odd number of clicks leaves it selected
        form.toggle_category("sports");
        form.toggle_category("sports");
        form.toggle_category("sports");
        assert_eq!(form.selected_category_count(), 1);

        // even number of clicks leaves it unselected
        form.toggle_category("sports");
        assert_eq!(form.selected_category_count(), 0);
    }

    #[test]
    fn test_toggle_unknown_category_is_ignored() {
        let mut form = OnboardingForm::new();
        form.toggle_category("astrology");
        assert_eq!(form.selected_category_count(), 0);
    }

    #[test]
    fn test_categories_are_independent() {
        let mut form = OnboardingForm::new();
        form.toggle_category("health");
        form.toggle_category("world");
        form.toggle_category("health");

        assert_eq!(form.selected_category_count(), 1);
        let world = form.categories.iter().find(|c| c.id == "world").unwrap();
        assert!(world.selected);
    }

    #[test]
    fn test_summary_choice_is_single_valued() {
        let mut form = OnboardingForm::new();
        form.choose_summary(SummaryStyle::QuickBullets);
        form.choose_summary(SummaryStyle::DeepDive);
        assert_eq!(form.summary, Some(SummaryStyle::DeepDive));
    }

    #[test]
    fn test_rechoosing_summary_keeps_it_selected() {
        let mut form = OnboardingForm::new();
        form.choose_summary(SummaryStyle::Standard);
        form.choose_summary(SummaryStyle::Standard);
        assert_eq!(form.summary, Some(SummaryStyle::Standard));
    }

    #[test]
    fn test_complete_form_validates() {
        assert!(complete_form().is_complete());
    }

    #[test]
    fn test_each_missing_field_blocks_submission() {
        let mut form = complete_form();
        form.name = String::new();
        assert!(!form.is_complete());

        let mut form = complete_form();
        form.phone = String::new();
        assert!(!form.is_complete());

        let mut form = complete_form();
        form.notification_time = String::new();
        assert!(!form.is_complete());

        let mut form = complete_form();
        form.toggle_category("technology");
        assert!(!form.is_complete());

        let mut form = complete_form();
        form.summary = None;
        assert!(!form.is_complete());
    }

    #[test]
    fn test_blank_name_or_phone_counts_as_missing() {
        let mut form = complete_form();
        form.name = "   ".to_string();
        assert!(!form.is_complete());

        let mut form = complete_form();
        form.phone = "\t".to_string();
        assert!(!form.is_complete());
    }
}
