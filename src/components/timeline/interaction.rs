//! Single source of truth for what the user is currently inspecting.
//!
//! Three input modalities (hover, click/tap, keyboard) funnel into one
//! reducer: [`reduce`] takes the current state and an [`Input`] and returns
//! the next state plus the [`Command`]s the view must run (timers,
//! navigation). Keeping the transitions pure makes the whole machine
//! testable without a DOM.

/// Debounce before a hover activates, in milliseconds. Leaving the entity
/// before this elapses cancels the activation entirely.
pub const HOVER_DELAY_MS: u64 = 300;

/// Horizontal margin the tooltip anchor keeps from either container edge,
/// in pixels.
pub const EDGE_MARGIN_PX: f64 = 150.0;

/// Reference to the one entity that can be active at a time. Items and
/// events share the slot, so activating one always clears the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityRef {
    Item(String),
    Event(String),
}

/// How the current activation came about. Hover-sourced activations are
/// dismissed by pointer-leave; click-sourced ones persist until an explicit
/// dismissal or a confirming second tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Hover,
    Click,
}

/// Pixel anchor for the tooltip/connector, relative to the timeline
/// container. `x` is pre-clamped via [`clamp_anchor_x`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Activation {
    pub entity: EntityRef,
    pub source: Source,
    pub anchor: Option<Anchor>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
    pub active: Option<Activation>,
    /// Entity whose hover debounce is currently running.
    pub pending: Option<EntityRef>,
}

impl InteractionState {
    /// State with a pre-selected entity, used for the default selection when
    /// the timeline first renders. Click-sourced so a stray pointer-leave
    /// does not clear it.
    pub fn with_initial(entity: Option<EntityRef>) -> Self {
        InteractionState {
            active: entity.map(|entity| Activation {
                entity,
                source: Source::Click,
                anchor: None,
            }),
            pending: None,
        }
    }

    pub fn active_entity(&self) -> Option<&EntityRef> {
        self.active.as_ref().map(|a| &a.entity)
    }

    pub fn is_active(&self, entity: &EntityRef) -> bool {
        self.active_entity() == Some(entity)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// Pointer entered an entity. `hover_capable` reflects the
    /// `(hover: hover)` media query; touch devices report false and skip
    /// hover arming entirely.
    PointerEnter {
        entity: EntityRef,
        anchor: Option<Anchor>,
        hover_capable: bool,
    },
    /// The hover debounce fired for `entity`.
    HoverElapsed {
        entity: EntityRef,
        anchor: Option<Anchor>,
    },
    PointerLeave,
    /// Click, touch, or keyboard activation of an entity.
    Tap {
        entity: EntityRef,
        anchor: Option<Anchor>,
    },
    /// Outside click, Escape, or blur.
    Dismiss,
}

/// Side effects for the view layer to run after a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    StartHoverTimer {
        entity: EntityRef,
        anchor: Option<Anchor>,
    },
    CancelHoverTimer,
    /// Perform the entity's navigation action. Only emitted on the
    /// confirming second tap of an already click-activated entity.
    Navigate(EntityRef),
}

pub fn reduce(state: &InteractionState, input: Input) -> (InteractionState, Vec<Command>) {
    match input {
        Input::PointerEnter {
            entity,
            anchor,
            hover_capable,
        } => {
            if !hover_capable || state.is_active(&entity) {
                return (state.clone(), vec![]);
            }
            let next = InteractionState {
                active: state.active.clone(),
                pending: Some(entity.clone()),
            };
            (next, vec![Command::StartHoverTimer { entity, anchor }])
        }
        Input::HoverElapsed { entity, anchor } => {
            // A stale timer (pointer already left, or moved to another
            // entity) must not activate anything.
            if state.pending.as_ref() != Some(&entity) {
                return (state.clone(), vec![]);
            }
            let next = InteractionState {
                active: Some(Activation {
                    entity,
                    source: Source::Hover,
                    anchor,
                }),
                pending: None,
            };
            (next, vec![])
        }
        Input::PointerLeave => {
            let mut commands = vec![];
            if state.pending.is_some() {
                commands.push(Command::CancelHoverTimer);
            }
            let active = match &state.active {
                Some(a) if a.source == Source::Hover => None,
                other => other.clone(),
            };
            (
                InteractionState {
                    active,
                    pending: None,
                },
                commands,
            )
        }
        Input::Tap { entity, anchor } => {
            if let Some(active) = &state.active {
                if active.entity == entity && active.source == Source::Click {
                    // Second tap on an already click-activated entity
                    // confirms navigation; the activation stays put.
                    return (state.clone(), vec![Command::Navigate(entity)]);
                }
            }
            let next = InteractionState {
                active: Some(Activation {
                    entity,
                    source: Source::Click,
                    anchor,
                }),
                pending: None,
            };
            (next, vec![Command::CancelHoverTimer])
        }
        Input::Dismiss => (InteractionState::default(), vec![Command::CancelHoverTimer]),
    }
}

/// Clamps the tooltip anchor away from the container edges so the tooltip
/// never renders off-container. Containers narrower than two margins anchor
/// at their center.
pub fn clamp_anchor_x(x: f64, container_width: f64) -> f64 {
    if container_width <= 2.0 * EDGE_MARGIN_PX {
        return container_width / 2.0;
    }
    x.clamp(EDGE_MARGIN_PX, container_width - EDGE_MARGIN_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> EntityRef {
        EntityRef::Item(id.into())
    }

    fn event(id: &str) -> EntityRef {
        EntityRef::Event(id.into())
    }

    fn enter(entity: EntityRef) -> Input {
        Input::PointerEnter {
            entity,
            anchor: None,
            hover_capable: true,
        }
    }

    fn tap(entity: EntityRef) -> Input {
        Input::Tap {
            entity,
            anchor: None,
        }
    }

    #[test]
    fn test_hover_arms_debounce_then_activates() {
        let idle = InteractionState::default();
        let (pending, commands) = reduce(&idle, enter(item("x")));
        assert_eq!(pending.pending, Some(item("x")));
        assert!(pending.active.is_none());
        assert_eq!(
            commands,
            vec![Command::StartHoverTimer {
                entity: item("x"),
                anchor: None
            }]
        );

        let (active, commands) = reduce(
            &pending,
            Input::HoverElapsed {
                entity: item("x"),
                anchor: None,
            },
        );
        assert!(commands.is_empty());
        assert!(active.is_active(&item("x")));
        assert_eq!(active.active.unwrap().source, Source::Hover);
    }

    #[test]
    fn test_leave_before_debounce_never_activates() {
        // Scenario: hover 200ms then leave before 300ms elapses.
        let idle = InteractionState::default();
        let (pending, _) = reduce(&idle, enter(item("x")));
        let (after_leave, commands) = reduce(&pending, Input::PointerLeave);
        assert!(commands.contains(&Command::CancelHoverTimer));
        assert_eq!(after_leave, InteractionState::default());

        // Even if the timer raced the cancel, the elapsed input is stale.
        let (state, _) = reduce(
            &after_leave,
            Input::HoverElapsed {
                entity: item("x"),
                anchor: None,
            },
        );
        assert!(state.active.is_none());
    }

    #[test]
    fn test_touch_devices_skip_hover_arming() {
        let idle = InteractionState::default();
        let (state, commands) = reduce(
            &idle,
            Input::PointerEnter {
                entity: item("x"),
                anchor: None,
                hover_capable: false,
            },
        );
        assert_eq!(state, idle);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_hover_sourced_activation_cleared_by_leave() {
        let state = InteractionState {
            active: Some(Activation {
                entity: item("x"),
                source: Source::Hover,
                anchor: None,
            }),
            pending: None,
        };
        let (next, _) = reduce(&state, Input::PointerLeave);
        assert!(next.active.is_none());
    }

    #[test]
    fn test_click_sourced_activation_survives_leave() {
        let (state, _) = reduce(&InteractionState::default(), tap(event("y")));
        assert!(state.is_active(&event("y")));
        let (next, _) = reduce(&state, Input::PointerLeave);
        assert!(next.is_active(&event("y")));
    }

    #[test]
    fn test_activation_is_mutually_exclusive() {
        let (a_active, _) = reduce(&InteractionState::default(), tap(item("a")));
        let (b_active, _) = reduce(&a_active, tap(event("b")));
        assert!(b_active.is_active(&event("b")));
        assert!(!b_active.is_active(&item("a")));
        assert_eq!(b_active.active.iter().count(), 1);
    }

    #[test]
    fn test_second_tap_confirms_navigation() {
        let (state, first) = reduce(&InteractionState::default(), tap(item("x")));
        assert!(!first.contains(&Command::Navigate(item("x"))));
        let (after, second) = reduce(&state, tap(item("x")));
        assert!(second.contains(&Command::Navigate(item("x"))));
        // Activation stays in place while navigating.
        assert!(after.is_active(&item("x")));
    }

    #[test]
    fn test_tap_on_hover_active_entity_promotes_without_navigating() {
        let state = InteractionState {
            active: Some(Activation {
                entity: item("x"),
                source: Source::Hover,
                anchor: None,
            }),
            pending: None,
        };
        let (next, commands) = reduce(&state, tap(item("x")));
        assert!(!commands.iter().any(|c| matches!(c, Command::Navigate(_))));
        assert_eq!(next.active.unwrap().source, Source::Click);
    }

    #[test]
    fn test_dismiss_clears_everything() {
        // Scenario: click activates and anchors; an outside click clears.
        let (state, _) = reduce(
            &InteractionState::default(),
            Input::Tap {
                entity: event("y"),
                anchor: Some(Anchor { x: 200.0, y: 40.0 }),
            },
        );
        assert!(state.active.as_ref().unwrap().anchor.is_some());
        let (next, commands) = reduce(&state, Input::Dismiss);
        assert_eq!(next, InteractionState::default());
        assert!(commands.contains(&Command::CancelHoverTimer));
    }

    #[test]
    fn test_stale_timer_for_other_entity_ignored() {
        let (pending_b, _) = reduce(&InteractionState::default(), enter(item("b")));
        let (state, _) = reduce(
            &pending_b,
            Input::HoverElapsed {
                entity: item("a"),
                anchor: None,
            },
        );
        assert!(state.active.is_none());
        assert_eq!(state.pending, Some(item("b")));
    }

    #[test]
    fn test_default_selection_behaves_like_click() {
        let state = InteractionState::with_initial(Some(item("last")));
        let (next, _) = reduce(&state, Input::PointerLeave);
        assert!(next.is_active(&item("last")));
    }

    #[test]
    fn test_anchor_clamped_away_from_edges() {
        assert_eq!(clamp_anchor_x(10.0, 1000.0), EDGE_MARGIN_PX);
        assert_eq!(clamp_anchor_x(990.0, 1000.0), 1000.0 - EDGE_MARGIN_PX);
        assert_eq!(clamp_anchor_x(500.0, 1000.0), 500.0);
        // Narrow containers anchor at center.
        assert_eq!(clamp_anchor_x(10.0, 200.0), 100.0);
    }
}
