//! Wide/narrow viewport policy.
//!
//! The mode only changes how input is interpreted and how the shell is painted. Switching it
//! never rewrites window or icon state.

use serde::{Deserialize, Serialize};

use crate::icon_layout::IconArrangement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewportMode {
    Narrow,
    #[default]
    Wide,
}

/// Control rendered in a window's close slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAffordance {
    Close,
    Back,
}

impl ViewportMode {
    /// Viewports at or below `breakpoint` pixels are narrow.
    pub fn from_width(width: i32, breakpoint: i32) -> Self {
        if width <= breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Self::Narrow
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }

    pub fn opens_on_single_tap(self) -> bool {
        self.is_narrow()
    }

    pub fn windows_start_maximized(self) -> bool {
        self.is_narrow()
    }

    pub fn allows_window_drag(self) -> bool {
        !self.is_narrow()
    }

    pub fn titlebar_double_click_toggles(self) -> bool {
        !self.is_narrow()
    }

    pub fn close_affordance(self) -> CloseAffordance {
        match self {
            Self::Narrow => CloseAffordance::Back,
            Self::Wide => CloseAffordance::Close,
        }
    }

    pub fn icon_arrangement(self) -> IconArrangement {
        match self {
            Self::Narrow => IconArrangement::Grid,
            Self::Wide => IconArrangement::Free,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(ViewportMode::from_width(640, 640), ViewportMode::Narrow);
        assert_eq!(ViewportMode::from_width(641, 640), ViewportMode::Wide);
        assert_eq!(ViewportMode::from_width(0, 640), ViewportMode::Narrow);
    }

    #[test]
    fn narrow_policy_is_the_inverse_of_wide() {
        let narrow = ViewportMode::Narrow;
        assert!(narrow.opens_on_single_tap());
        assert!(narrow.windows_start_maximized());
        assert!(!narrow.allows_window_drag());
        assert!(!narrow.titlebar_double_click_toggles());
        assert_eq!(narrow.close_affordance(), CloseAffordance::Back);
        assert_eq!(narrow.icon_arrangement(), IconArrangement::Grid);

        let wide = ViewportMode::Wide;
        assert!(!wide.opens_on_single_tap());
        assert!(!wide.windows_start_maximized());
        assert!(wide.allows_window_drag());
        assert!(wide.titlebar_double_click_toggles());
        assert_eq!(wide.close_affordance(), CloseAffordance::Close);
        assert_eq!(wide.icon_arrangement(), IconArrangement::Free);
    }
}
