//! Tab, court and date selection.

use crate::schedule::effective_date;
use crate::CourtType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Slots,
    MyBookings,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Slots, Tab::MyBookings];

    /// Value of the `data-tab` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Slots => "slots",
            Tab::MyBookings => "my-bookings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Slots => "Book a court",
            Tab::MyBookings => "My bookings",
        }
    }

    /// Id of the panel element shown for this tab
    pub fn panel_id(&self) -> String {
        format!("{}-tab", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    /// Initialisation finished
    Ready,
    SelectTab(Tab),
    SelectCourt(CourtType),
    SelectDate(String),
    /// Re-run a load after a booking or cancellation changed backend state
    Refresh(Effect),
}

/// Reload requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    LoadSlots,
    LoadBookings,
}

/// Selection state of the widget.
///
/// Every emitted effect bumps its generation counter; views reload when the
/// counter changes and drop responses tagged with an older generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    pub ready: bool,
    pub tab: Tab,
    pub court: CourtType,
    /// Date that is queried and shown, never before `today`
    pub date: String,
    pub today: String,
    pub slots_generation: u32,
    pub bookings_generation: u32,
}

impl WidgetState {
    pub fn new(today: impl Into<String>) -> Self {
        let today = today.into();
        Self {
            ready: false,
            tab: Tab::default(),
            court: CourtType::default(),
            date: today.clone(),
            today,
            slots_generation: 0,
            bookings_generation: 0,
        }
    }

    /// Applies `action`; nothing changes before `Ready`
    pub fn apply(&mut self, action: WidgetAction) -> Option<Effect> {
        if !self.ready && action != WidgetAction::Ready {
            return None;
        }

        let effect = match action {
            WidgetAction::Ready => {
                if self.ready {
                    return None;
                }
                self.ready = true;
                Some(Effect::LoadSlots)
            }
            WidgetAction::SelectTab(tab) => {
                self.tab = tab;
                (tab == Tab::MyBookings).then_some(Effect::LoadBookings)
            }
            WidgetAction::SelectCourt(court) => {
                self.court = court;
                Some(Effect::LoadSlots)
            }
            WidgetAction::SelectDate(date) if date.is_empty() => {
                self.date = date;
                None
            }
            WidgetAction::SelectDate(date) => {
                // Typed input bypasses the picker's `min`
                self.date = effective_date(&date, &self.today).unwrap_or(date);
                Some(Effect::LoadSlots)
            }
            WidgetAction::Refresh(effect) => Some(effect),
        };

        match effect {
            Some(Effect::LoadSlots) => self.slots_generation = self.slots_generation.wrapping_add(1),
            Some(Effect::LoadBookings) => {
                self.bookings_generation = self.bookings_generation.wrapping_add(1)
            }
            None => {}
        }
        effect
    }

    pub fn is_active_tab(&self, tab: Tab) -> bool {
        self.tab == tab
    }

    pub fn is_active_court(&self, court: CourtType) -> bool {
        self.court == court
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state() -> WidgetState {
        let mut state = WidgetState::new("2025-06-15");
        state.apply(WidgetAction::Ready);
        state
    }

    #[test]
    fn test_defaults() {
        let state = WidgetState::new("2025-06-15");
        assert_eq!(state.tab, Tab::Slots);
        assert_eq!(state.court, CourtType::Rubber);
        assert!(!state.ready);
    }

    #[test]
    fn test_transitions_ignored_before_ready() {
        let mut state = WidgetState::new("2025-06-15");
        let before = state.clone();

        assert_eq!(state.apply(WidgetAction::SelectTab(Tab::MyBookings)), None);
        assert_eq!(state.apply(WidgetAction::SelectCourt(CourtType::Hard)), None);
        assert_eq!(state.apply(WidgetAction::SelectDate("2025-06-20".to_string())), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_ready_loads_slots_once() {
        let mut state = WidgetState::new("2025-06-15");
        assert_eq!(state.apply(WidgetAction::Ready), Some(Effect::LoadSlots));
        assert_eq!(state.slots_generation, 1);
        assert_eq!(state.apply(WidgetAction::Ready), None);
        assert_eq!(state.slots_generation, 1);
    }

    #[test]
    fn test_bookings_tab_reloads_every_time() {
        let mut state = ready_state();
        assert_eq!(state.apply(WidgetAction::SelectTab(Tab::MyBookings)), Some(Effect::LoadBookings));
        assert_eq!(state.apply(WidgetAction::SelectTab(Tab::MyBookings)), Some(Effect::LoadBookings));
        assert_eq!(state.bookings_generation, 2);
        assert!(state.is_active_tab(Tab::MyBookings));

        assert_eq!(state.apply(WidgetAction::SelectTab(Tab::Slots)), None);
        assert!(state.is_active_tab(Tab::Slots));
    }

    #[test]
    fn test_court_switch_reloads_slots() {
        let mut state = ready_state();
        assert_eq!(state.apply(WidgetAction::SelectCourt(CourtType::Hard)), Some(Effect::LoadSlots));
        assert!(state.is_active_court(CourtType::Hard));
        assert!(!state.is_active_court(CourtType::Rubber));
        assert_eq!(state.slots_generation, 2);
    }

    #[test]
    fn test_empty_date_does_not_reload() {
        let mut state = ready_state();
        assert_eq!(state.apply(WidgetAction::SelectDate(String::new())), None);
        assert_eq!(state.slots_generation, 1);
        assert_eq!(
            state.apply(WidgetAction::SelectDate("2025-06-16".to_string())),
            Some(Effect::LoadSlots)
        );
        assert_eq!(state.date, "2025-06-16");
    }

    #[test]
    fn test_past_date_is_replaced_by_today() {
        let mut state = ready_state();
        assert_eq!(
            state.apply(WidgetAction::SelectDate("2025-06-01".to_string())),
            Some(Effect::LoadSlots)
        );
        assert_eq!(state.date, "2025-06-15");
        assert_eq!(effective_date(&state.date, &state.today).unwrap(), state.date);
        assert_eq!(state.slots_generation, 2);
    }

    #[test]
    fn test_future_date_is_kept() {
        let mut state = ready_state();
        state.apply(WidgetAction::SelectDate("2025-07-01".to_string()));
        assert_eq!(state.date, "2025-07-01");
        assert_eq!(effective_date(&state.date, &state.today).unwrap(), state.date);
    }

    #[test]
    fn test_refresh_bumps_generation() {
        let mut state = ready_state();
        assert_eq!(state.apply(WidgetAction::Refresh(Effect::LoadSlots)), Some(Effect::LoadSlots));
        assert_eq!(state.slots_generation, 2);
        assert_eq!(
            state.apply(WidgetAction::Refresh(Effect::LoadBookings)),
            Some(Effect::LoadBookings)
        );
        assert_eq!(state.bookings_generation, 1);

        let mut idle = WidgetState::new("2025-06-15");
        assert_eq!(idle.apply(WidgetAction::Refresh(Effect::LoadSlots)), None);
    }

    #[test]
    fn test_tab_attributes() {
        assert_eq!(Tab::MyBookings.panel_id(), "my-bookings-tab");
        assert_eq!(Tab::Slots.as_str(), "slots");
    }
}
