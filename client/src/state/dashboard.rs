//! Dashboard Shell chrome state: selected section and sidebar drawer.
//!
//! DESIGN
//! ======
//! The rendered panel is a pure function of `selected`. The sidebar flag is
//! independent of the section except that picking a section closes it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Sidebar entries, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Dashboard,
    MyProfile,
    WellnessGoals,
    Messages,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::MyProfile, Self::WellnessGoals, Self::Messages];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::MyProfile => "My Profile",
            Self::WellnessGoals => "Wellness Goals",
            Self::Messages => "Messages",
        }
    }

    #[must_use]
    pub fn panel(self) -> Panel {
        match self {
            Self::Dashboard => Panel::Metrics,
            Self::MyProfile => Panel::Profile,
            Self::WellnessGoals => Panel::Goals,
            Self::Messages => Panel::Messages,
        }
    }
}

/// Content rendered in the main area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Metrics,
    Profile,
    Goals,
    Messages,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub selected: Section,
    pub sidebar_open: bool,
}

impl DashboardState {
    /// Switch section and close the drawer.
    pub fn select(&mut self, section: Section) {
        self.selected = section;
        self.sidebar_open = false;
    }

    pub fn set_sidebar(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    #[must_use]
    pub fn panel(&self) -> Panel {
        self.selected.panel()
    }
}
