use rat_focus::FocusFlag;
use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;
use vassa_types::{Identity, Route};

/// Something the user can activate in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// Brand mark; navigates to the landing route.
    Logo,
    /// Desktop link to a primary route.
    Link(Route),
    /// "Free List Property" call-to-action.
    ListCta,
    /// User menu toggle when authenticated, login button otherwise.
    Identity,
    /// Hamburger toggle for the collapsed mobile panel.
    MobileToggle,
}

/// Inputs that decide which targets are laid out and how wide they are.
#[derive(Debug, Clone, Copy)]
pub struct NavLayoutContext<'a> {
    pub identity: &'a Identity,
    pub mobile_menu_open: bool,
    pub mobile_breakpoint: u16,
    pub compact_breakpoint: u16,
}

pub const LOGO_LABEL: &str = " VASSA ";
pub const CTA_LABEL: &str = "Free List Property";
pub const CTA_LABEL_SHORT: &str = "List Free";
const LINK_GAP: u16 = 2;

/// Label rendered for a target under the given layout context.
pub fn target_label(target: &NavTarget, context: &NavLayoutContext<'_>, width: u16) -> String {
    let wide = width >= context.mobile_breakpoint;
    let compact = width < context.compact_breakpoint;
    match target {
        NavTarget::Logo => LOGO_LABEL.to_string(),
        NavTarget::Link(route) => route.label().to_string(),
        NavTarget::ListCta => {
            let label = if wide { CTA_LABEL } else { CTA_LABEL_SHORT };
            format!("[ {label} ]")
        }
        NavTarget::Identity => match context.identity {
            Identity::Authenticated { .. } => {
                let name = if compact {
                    context.identity.short_name().unwrap_or_default()
                } else {
                    context.identity.name().unwrap_or_default()
                };
                format!("( ● {name} ▾ )")
            }
            Identity::Anonymous => "( ⚿ Login )".to_string(),
        },
        NavTarget::MobileToggle => {
            if context.mobile_menu_open {
                " ✕ ".to_string()
            } else {
                " ☰ ".to_string()
            }
        }
    }
}

/// Lays out the bar's targets on the middle row of `area`.
///
/// The logo and (on wide terminals) the links flow from the left; the
/// action cluster (call-to-action, identity, mobile toggle) is right-aligned.
/// Targets that do not fit are dropped rather than overlapped.
pub fn compute_layout(area: Rect, context: &NavLayoutContext<'_>) -> Vec<(NavTarget, Rect)> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    let row = area.y + area.height.saturating_sub(1) / 2;
    let width = area.width;
    let wide = width >= context.mobile_breakpoint;

    let mut right_targets = Vec::with_capacity(3);
    if width >= context.compact_breakpoint {
        right_targets.push(NavTarget::ListCta);
    }
    right_targets.push(NavTarget::Identity);
    if !wide {
        right_targets.push(NavTarget::MobileToggle);
    }

    let mut placed = Vec::new();
    let mut right_edge = area.x + width;
    let mut right_placed = Vec::new();
    for target in right_targets.into_iter().rev() {
        let label_width = label_width(&target, context, width);
        let Some(x) = right_edge.checked_sub(label_width + 1) else {
            continue;
        };
        if x < area.x + LOGO_LABEL.width() as u16 {
            continue;
        }
        right_placed.push((target, Rect::new(x, row, label_width, 1)));
        right_edge = x;
    }

    let mut cursor = area.x + 1;
    let logo_width = LOGO_LABEL.width() as u16;
    if cursor + logo_width <= right_edge {
        placed.push((NavTarget::Logo, Rect::new(cursor, row, logo_width, 1)));
        cursor += logo_width + LINK_GAP * 2;
    }

    if wide {
        for route in Route::PRIMARY_LINKS {
            let target = NavTarget::Link(route);
            let label_width = label_width(&target, context, width);
            if cursor + label_width + LINK_GAP > right_edge {
                break;
            }
            placed.push((target, Rect::new(cursor, row, label_width, 1)));
            cursor += label_width + LINK_GAP * 2;
        }
    }

    right_placed.reverse();
    placed.extend(right_placed);
    placed
}

fn label_width(target: &NavTarget, context: &NavLayoutContext<'_>, width: u16) -> u16 {
    target_label(target, context, width).width() as u16
}

/// State for the horizontal navigation bar.
///
/// Owns the last computed layout (for hit testing) and one rat-focus flag per
/// laid-out target so keyboard users can Tab through the bar.
#[derive(Debug, Default, Clone)]
pub struct NavBarState {
    /// Focus flag for the bar as a whole.
    pub container_focus: FocusFlag,
    /// Targets in visual order, with their last rendered area.
    pub targets: Vec<(NavTarget, Rect)>,
    /// Focus flags for each target; kept in sync with `targets` length.
    pub item_focus_flags: Vec<FocusFlag>,
    /// Last rendered area of the bar.
    pub last_area: Rect,
}

impl NavBarState {
    pub fn new() -> Self {
        Self {
            container_focus: FocusFlag::named("nav.bar"),
            ..Self::default()
        }
    }

    /// Stores a freshly computed layout, keeping keyboard focus on the same
    /// target when it is still present.
    pub fn set_layout(&mut self, area: Rect, targets: Vec<(NavTarget, Rect)>) {
        let focused = self.focused_target();
        self.last_area = area;
        self.targets = targets;
        self.item_focus_flags = (0..self.targets.len())
            .map(|index| FocusFlag::named(&format!("nav.bar.item.{index}")))
            .collect();
        if let Some(target) = focused
            && let Some(index) = self.targets.iter().position(|(candidate, _)| *candidate == target)
        {
            self.item_focus_flags[index].set(true);
            self.container_focus.set(true);
        }
    }

    /// Returns the target under a terminal cell, if any.
    pub fn target_at(&self, x: u16, y: u16) -> Option<NavTarget> {
        let position = Position::new(x, y);
        self.targets
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(target, _)| target.clone())
    }

    pub fn area_of(&self, target: &NavTarget) -> Option<Rect> {
        self.targets
            .iter()
            .find(|(candidate, _)| candidate == target)
            .map(|(_, area)| *area)
    }

    /// Area covering the right-hand action cluster. Pointer-downs inside it
    /// do not count as "outside" the user menu.
    pub fn action_cluster_area(&self) -> Rect {
        self.targets
            .iter()
            .filter(|(target, _)| matches!(target, NavTarget::ListCta | NavTarget::Identity | NavTarget::MobileToggle))
            .map(|(_, area)| *area)
            .reduce(|union, area| union.union(area))
            .unwrap_or_default()
    }

    pub fn focused_target(&self) -> Option<NavTarget> {
        let index = self.item_focus_flags.iter().position(|flag| flag.get())?;
        self.targets.get(index).map(|(target, _)| target.clone())
    }

    /// Moves keyboard focus to the next (or previous) target, wrapping at the ends.
    pub fn cycle_focus(&mut self, forward: bool) -> Option<NavTarget> {
        let len = self.item_focus_flags.len();
        if len == 0 {
            return None;
        }
        let next_index = match self.item_focus_flags.iter().position(|flag| flag.get()) {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        for (index, flag) in self.item_focus_flags.iter().enumerate() {
            flag.set(index == next_index);
        }
        self.container_focus.set(true);
        self.targets.get(next_index).map(|(target, _)| target.clone())
    }

    pub fn clear_focus(&mut self) {
        for flag in &self.item_focus_flags {
            flag.set(false);
        }
        self.container_focus.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(identity: &Identity) -> NavLayoutContext<'_> {
        NavLayoutContext {
            identity,
            mobile_menu_open: false,
            mobile_breakpoint: 96,
            compact_breakpoint: 60,
        }
    }

    fn targets(layout: &[(NavTarget, Rect)]) -> Vec<NavTarget> {
        layout.iter().map(|(target, _)| target.clone()).collect()
    }

    #[test]
    fn wide_layout_shows_links_and_no_toggle() {
        let identity = Identity::Anonymous;
        let layout = compute_layout(Rect::new(0, 0, 160, 3), &context(&identity));
        let targets = targets(&layout);

        assert_eq!(targets.first(), Some(&NavTarget::Logo));
        assert!(targets.contains(&NavTarget::Link(Route::About)));
        assert!(targets.contains(&NavTarget::Link(Route::List)));
        assert!(targets.contains(&NavTarget::Identity));
        assert!(!targets.contains(&NavTarget::MobileToggle));
    }

    #[test]
    fn narrow_layout_collapses_links_into_the_toggle() {
        let identity = Identity::Anonymous;
        let layout = compute_layout(Rect::new(0, 0, 80, 3), &context(&identity));
        let targets = targets(&layout);

        assert!(targets.iter().all(|target| !matches!(target, NavTarget::Link(_))));
        assert!(targets.contains(&NavTarget::MobileToggle));
        assert!(targets.contains(&NavTarget::ListCta));
    }

    #[test]
    fn compact_layout_hides_the_call_to_action() {
        let identity = Identity::Anonymous;
        let layout = compute_layout(Rect::new(0, 0, 50, 3), &context(&identity));
        assert!(!targets(&layout).contains(&NavTarget::ListCta));
    }

    #[test]
    fn compact_identity_uses_the_first_name() {
        let identity = Identity::from_session(Some(&vassa_types::SessionRecord::for_user("Asha Rao")));
        let ctx = context(&identity);
        assert!(target_label(&NavTarget::Identity, &ctx, 50).contains("Asha"));
        assert!(!target_label(&NavTarget::Identity, &ctx, 50).contains("Rao"));
        assert!(target_label(&NavTarget::Identity, &ctx, 120).contains("Asha Rao"));
    }

    #[test]
    fn targets_do_not_overlap() {
        let identity = Identity::Anonymous;
        let layout = compute_layout(Rect::new(0, 0, 120, 3), &context(&identity));
        for (index, (_, area)) in layout.iter().enumerate() {
            for (_, other) in layout.iter().skip(index + 1) {
                assert!(!area.intersects(*other), "{area:?} overlaps {other:?}");
            }
        }
    }

    #[test]
    fn hit_testing_and_focus_cycling() {
        let identity = Identity::Anonymous;
        let area = Rect::new(0, 0, 160, 3);
        let mut state = NavBarState::new();
        state.set_layout(area, compute_layout(area, &context(&identity)));

        let logo = state.area_of(&NavTarget::Logo).unwrap();
        assert_eq!(state.target_at(logo.x, logo.y), Some(NavTarget::Logo));
        assert_eq!(state.target_at(0, 2), None);

        assert_eq!(state.cycle_focus(true), Some(NavTarget::Logo));
        assert_eq!(state.cycle_focus(false), state.targets.last().map(|(target, _)| target.clone()));
        state.clear_focus();
        assert_eq!(state.focused_target(), None);
    }
}
