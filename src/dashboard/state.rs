//! Dashboard view state management

use crate::config::ProfileConfig;

/// Current page in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Home,
    Notes,
    Settings,
}

impl DashboardView {
    /// All pages in sidebar order
    pub const ALL: [DashboardView; 3] = [
        DashboardView::Home,
        DashboardView::Notes,
        DashboardView::Settings,
    ];

    /// Get the display name for this view
    pub fn name(&self) -> &'static str {
        match self {
            DashboardView::Home => "Home",
            DashboardView::Notes => "My Notes",
            DashboardView::Settings => "Settings",
        }
    }

    /// Get the icon character for this view
    pub fn icon(&self) -> &'static str {
        match self {
            DashboardView::Home => "H",
            DashboardView::Notes => "N",
            DashboardView::Settings => "S",
        }
    }
}

/// Widget state owned by the dashboard pages
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Settings view state
    pub settings: SettingsViewState,
}

/// Settings view state
#[derive(Debug, Default)]
pub struct SettingsViewState {
    /// Profile being edited; `None` until the view first opens
    pub profile_draft: Option<ProfileConfig>,
}

impl SettingsViewState {
    /// The draft, seeded from the saved profile on first use
    pub fn draft_mut(&mut self, saved: &ProfileConfig) -> &mut ProfileConfig {
        self.profile_draft.get_or_insert_with(|| saved.clone())
    }

    /// Whether the draft differs from the saved profile
    pub fn is_dirty(&self, saved: &ProfileConfig) -> bool {
        self.profile_draft.as_ref().is_some_and(|d| d != saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_home() {
        assert_eq!(DashboardView::default(), DashboardView::Home);
        assert_eq!(DashboardView::ALL[1].name(), "My Notes");
    }

    #[test]
    fn test_settings_draft_tracks_changes() {
        let saved = ProfileConfig::default();
        let mut settings = SettingsViewState::default();
        assert!(!settings.is_dirty(&saved));

        settings.draft_mut(&saved).user_bio = "Changed".to_string();
        assert!(settings.is_dirty(&saved));

        settings.draft_mut(&saved).user_bio = saved.user_bio.clone();
        assert!(!settings.is_dirty(&saved));
    }
}
