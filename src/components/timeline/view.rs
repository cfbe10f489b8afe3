use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::content::{self, ContentItem, EventCategory, NavigationTarget, TimelineEvent};

use super::interaction::{
    clamp_anchor_x, reduce, Anchor, Command, EntityRef, Input, InteractionState, HOVER_DELAY_MS,
};
use super::lanes::assign_lanes;
use super::position::{point_position, range_position, Axis, MONTHS};

/// The visible time window of the career timeline.
pub const AXIS: Axis = Axis {
    start_year: 2019,
    end_year: 2027,
};

fn hover_capable() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(hover: hover)").ok().flatten())
        .map(|media| media.matches())
        .unwrap_or(false)
}

fn category_class(category: EventCategory) -> &'static str {
    match category {
        EventCategory::Education => "bg-coral",
        EventCategory::Work => "bg-jet",
        EventCategory::Research => "bg-dim-gray",
    }
}

fn format_event_range(event: &TimelineEvent) -> String {
    let start = format!(
        "{} {}",
        MONTHS[event.start_month.min(11) as usize],
        event.start_year
    );
    let end = match (event.end_year, event.end_month) {
        (Some(year), Some(month)) => format!("{} {}", MONTHS[month.min(11) as usize], year),
        (Some(year), None) => year.to_string(),
        (None, _) => "Present".to_string(),
    };
    format!("{start} - {end}")
}

/// Tooltip/connector anchor for an activated element, relative to the
/// timeline container. Returns `None` when geometry is not available yet;
/// the anchor is simply recomputed on the next interaction.
fn anchor_from_target(
    target: Option<web_sys::EventTarget>,
    container: Option<web_sys::HtmlDivElement>,
) -> Option<Anchor> {
    let element = target?.dyn_into::<web_sys::HtmlElement>().ok()?;
    let container = container?;
    let rect = element.get_bounding_client_rect();
    let bounds = container.get_bounding_client_rect();
    let x = clamp_anchor_x(rect.left() + rect.width() / 2.0 - bounds.left(), bounds.width());
    let y = rect.top() + rect.height() / 2.0 - bounds.top();
    Some(Anchor { x, y })
}

fn clear_timer(timer: StoredValue<Option<TimeoutHandle>>) {
    if let Some(handle) = timer.get_value() {
        handle.clear();
        timer.set_value(None);
    }
}

/// Applies one reducer step and runs the timer commands. Navigation commands
/// are returned to the caller, since only direct event handlers can carry
/// the router handle.
fn dispatch(
    state: RwSignal<InteractionState>,
    timer: StoredValue<Option<TimeoutHandle>>,
    input: Input,
) -> Vec<EntityRef> {
    let (next, commands) = reduce(&state.get_untracked(), input);
    state.set(next);
    let mut navigations = Vec::new();
    for command in commands {
        match command {
            Command::CancelHoverTimer => clear_timer(timer),
            Command::StartHoverTimer { entity, anchor } => {
                clear_timer(timer);
                let armed = set_timeout_with_handle(
                    move || {
                        let _ = dispatch(state, timer, Input::HoverElapsed { entity, anchor });
                    },
                    Duration::from_millis(HOVER_DELAY_MS),
                );
                match armed {
                    Ok(handle) => timer.set_value(Some(handle)),
                    Err(error) => tracing::warn!(?error, "failed to arm hover timer"),
                }
            }
            Command::Navigate(entity) => navigations.push(entity),
        }
    }
    navigations
}

#[allow(non_snake_case)]
#[component]
pub fn Timeline() -> impl IntoView {
    let items = content::timeline_content();
    let events = content::events();
    let lanes = StoredValue::new(assign_lanes(events, AXIS));

    let state = RwSignal::new(InteractionState::with_initial(
        items.last().map(|item| EntityRef::Item(item.id.clone())),
    ));
    let timer = StoredValue::new(None::<TimeoutHandle>);
    let container_ref = NodeRef::<html::Div>::new();
    let details_ref = NodeRef::<html::Div>::new();
    let connector_height = RwSignal::new(None::<f64>);

    let navigate = use_navigate();
    let run = move |input: Input| {
        for entity in dispatch(state, timer, input) {
            let target = match &entity {
                EntityRef::Item(id) => content::content_by_id(id).map(ContentItem::navigation),
                // Career events carry no outbound action.
                EntityRef::Event(_) => None,
            };
            match target {
                Some(target) if target.opens_new_tab() => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.open_with_url_and_target(&target.href(), "_blank");
                    }
                }
                Some(target) => navigate(&target.href(), Default::default()),
                None => {}
            }
        }
    };

    // Dismissal: clicks outside the widget and Escape anywhere.
    let run_outside = run.clone();
    let click_handle = window_event_listener(leptos::ev::click, move |ev| {
        let inside = container_ref
            .get_untracked()
            .and_then(|container| {
                let target = ev.target()?.dyn_into::<web_sys::Node>().ok()?;
                Some(container.contains(Some(&target)))
            })
            .unwrap_or(false);
        if !inside {
            run_outside(Input::Dismiss);
        }
    });
    let run_escape = run.clone();
    let key_handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            run_escape(Input::Dismiss);
        }
    });
    on_cleanup(move || {
        click_handle.remove();
        key_handle.remove();
        clear_timer(timer);
    });

    let active_item = Memo::new(move |_| {
        state.with(|s| {
            s.active_entity().and_then(|entity| match entity {
                EntityRef::Item(id) => content::content_by_id(id),
                EntityRef::Event(_) => None,
            })
        })
    });
    let active_event = Memo::new(move |_| {
        state.with(|s| {
            s.active_entity().and_then(|entity| match entity {
                EntityRef::Event(id) => content::event_by_id(id),
                EntityRef::Item(_) => None,
            })
        })
    });
    // Connector/diamond position below the track, as a percent of its width.
    let pointer_left = Memo::new(move |_| {
        state.with(|s| {
            s.active_entity().map(|entity| match entity {
                EntityRef::Item(id) => content::content_by_id(id)
                    .map(|item| point_position(item.when(), AXIS))
                    .unwrap_or(0.0),
                EntityRef::Event(id) => content::event_by_id(id)
                    .map(|event| range_position(event.start(), event.end(), AXIS).center())
                    .unwrap_or(0.0),
            })
        })
    });

    // Connector height from the activated element down to the detail panel.
    // Skipped for the frame when geometry is not mounted yet.
    Effect::new(move || {
        let anchor = state.with(|s| s.active.as_ref().and_then(|a| a.anchor));
        let Some(anchor) = anchor else {
            connector_height.set(None);
            return;
        };
        let (Some(details), Some(container)) = (details_ref.get(), container_ref.get()) else {
            return;
        };
        let details_top = details.get_bounding_client_rect().top();
        let target_y = container.get_bounding_client_rect().top() + anchor.y;
        // Stop slightly before the element so the diamond meets it visually.
        connector_height.set(Some((details_top - target_y - 8.0).max(8.0)));
    });

    let bars = events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let span = range_position(event.start(), event.end(), AXIS);
            let top = lanes.with_value(|layout| layout.offset_px(&event.id));
            let entity = EntityRef::Event(event.id.clone());
            let is_active = {
                let entity = entity.clone();
                Memo::new(move |_| state.with(|s| s.is_active(&entity)))
            };
            let on_enter = {
                let run = run.clone();
                let entity = entity.clone();
                move |ev: leptos::ev::MouseEvent| {
                    run(Input::PointerEnter {
                        entity: entity.clone(),
                        anchor: anchor_from_target(
                            ev.current_target(),
                            container_ref.get_untracked(),
                        ),
                        hover_capable: hover_capable(),
                    });
                }
            };
            let on_click = {
                let run = run.clone();
                let entity = entity.clone();
                move |ev: leptos::ev::MouseEvent| {
                    run(Input::Tap {
                        entity: entity.clone(),
                        anchor: anchor_from_target(
                            ev.current_target(),
                            container_ref.get_untracked(),
                        ),
                    });
                }
            };
            let on_touch = {
                let run = run.clone();
                let entity = entity.clone();
                move |ev: leptos::ev::TouchEvent| {
                    run(Input::Tap {
                        entity: entity.clone(),
                        anchor: anchor_from_target(
                            ev.current_target(),
                            container_ref.get_untracked(),
                        ),
                    });
                }
            };
            let on_key = {
                let run = run.clone();
                let entity = entity.clone();
                move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" || ev.key() == " " {
                        run(Input::Tap {
                            entity: entity.clone(),
                            anchor: anchor_from_target(
                                ev.current_target(),
                                container_ref.get_untracked(),
                            ),
                        });
                    }
                }
            };
            view! {
                <div
                    class=move || {
                        format!(
                            "absolute h-5 {} rounded-lg flex items-center px-2 text-white text-xs font-medium transition-all duration-300 shadow-lg cursor-pointer{}",
                            category_class(event.category),
                            if is_active.get() { " scale-105 shadow-xl" } else { "" },
                        )
                    }
                    style=format!(
                        "left: {}%; width: {}%; top: {}px; z-index: {};",
                        span.left,
                        span.width,
                        top,
                        10 + index,
                    )
                    title=format!("{} - {}", event.title, event.subtitle)
                    role="button"
                    tabindex="0"
                    aria-label=format!("{} {}", event.title, event.subtitle)
                    on:mouseenter=on_enter
                    on:mouseleave={
                        let run = run.clone();
                        move |_| run(Input::PointerLeave)
                    }
                    on:click=on_click
                    on:touchstart=on_touch
                    on:keydown=on_key
                >
                    <span class="truncate text-xs">{event.title.clone()}</span>
                    {event
                        .current
                        .then(|| view! { <div class="ml-1 w-2 h-2 bg-white rounded-full animate-pulse"></div> })}
                </div>
            }
        })
        .collect_view();

    let dots = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let left = point_position(item.when(), AXIS);
            let top = -20.0 + if index % 2 == 0 { 0.0 } else { 10.0 };
            let entity = EntityRef::Item(item.id.clone());
            let is_active = {
                let entity = entity.clone();
                Memo::new(move |_| state.with(|s| s.is_active(&entity)))
            };
            let on_enter = {
                let run = run.clone();
                let entity = entity.clone();
                move |ev: leptos::ev::MouseEvent| {
                    run(Input::PointerEnter {
                        entity: entity.clone(),
                        anchor: anchor_from_target(
                            ev.current_target(),
                            container_ref.get_untracked(),
                        ),
                        hover_capable: hover_capable(),
                    });
                }
            };
            let on_click = {
                let run = run.clone();
                let entity = entity.clone();
                move |ev: leptos::ev::MouseEvent| {
                    run(Input::Tap {
                        entity: entity.clone(),
                        anchor: anchor_from_target(
                            ev.current_target(),
                            container_ref.get_untracked(),
                        ),
                    });
                }
            };
            let on_touch = {
                let run = run.clone();
                let entity = entity.clone();
                move |ev: leptos::ev::TouchEvent| {
                    run(Input::Tap {
                        entity: entity.clone(),
                        anchor: anchor_from_target(
                            ev.current_target(),
                            container_ref.get_untracked(),
                        ),
                    });
                }
            };
            let on_key = {
                let run = run.clone();
                let entity = entity.clone();
                move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" || ev.key() == " " {
                        run(Input::Tap {
                            entity: entity.clone(),
                            anchor: anchor_from_target(
                                ev.current_target(),
                                container_ref.get_untracked(),
                            ),
                        });
                    }
                }
            };
            view! {
                <div
                    class=move || {
                        format!(
                            "absolute w-4 h-4 bg-white border-2 border-coral rounded-full cursor-pointer transition-all duration-300 shadow-lg z-30 flex items-center justify-center{}",
                            if is_active.get() { " scale-150 shadow-xl" } else { "" },
                        )
                    }
                    style=format!("left: {left}%; margin-left: -6px; top: {top}px;")
                    role="button"
                    tabindex="0"
                    aria-label=item.title.clone()
                    on:mouseenter=on_enter
                    on:mouseleave={
                        let run = run.clone();
                        move |_| run(Input::PointerLeave)
                    }
                    on:click=on_click
                    on:touchstart=on_touch
                    on:keydown=on_key
                >
                    <div class="w-1 h-1 bg-coral rounded-full"></div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div node_ref=container_ref class="bg-jet rounded-3xl p-4 md:p-8 border border-dim-gray/20 shadow-2xl">
            <h3 class="text-xl md:text-3xl font-bold text-white mb-6 text-center">"Journey Timeline"</h3>

            <div class="sm:hidden mb-3">
                <p class="text-dim-gray text-xs text-center mb-2">
                    "← Scroll horizontally to explore timeline →"
                </p>
            </div>

            <div class="overflow-x-auto overflow-y-hidden sm:overflow-x-visible">
                <div class="min-w-[700px] md:min-w-0">
                    // Year tick labels
                    <div class="relative mb-6">
                        <div class="flex justify-between text-xs md:text-sm text-dim-gray font-medium px-2">
                            {AXIS
                                .years()
                                .map(|year| {
                                    view! {
                                        <div class="flex flex-col items-center">
                                            <span class="mb-1">{year}</span>
                                            <div class="w-px h-2 md:h-4 bg-dim-gray/40"></div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="relative bg-night/50 rounded-2xl p-3 md:p-6 overflow-visible">
                        // Track base line
                        <div class="absolute top-10 md:top-12 left-3 md:left-6 right-3 md:right-6 bg-dim-gray/20 rounded-full h-0.5"></div>

                        // Event bars, stacked into lanes
                        <div
                            class="relative mb-0"
                            style=format!(
                                "height: {}px;",
                                lanes.with_value(|layout| layout.region_height_px()),
                            )
                        >
                            {bars}
                        </div>

                        // Dots for projects and blog posts
                        <div class="relative">{dots}</div>
                    </div>
                </div>
            </div>

            {move || {
                let item = active_item.get();
                let event = active_event.get();
                if item.is_none() && event.is_none() {
                    return ().into_any();
                }
                view! {
                    <div node_ref=details_ref class="relative mt-6">
                        {move || {
                            pointer_left
                                .get()
                                .map(|left| {
                                    let height = connector_height.get().unwrap_or(24.0);
                                    view! {
                                        <div
                                            class="absolute z-20 w-px bg-coral/60"
                                            style=format!(
                                                "left: calc({left}% - 0.5px); top: -{height}px; height: {height}px;",
                                            )
                                        ></div>
                                        <div
                                            class="absolute -top-2 h-2 w-2 bg-coral rotate-45 rounded-sm"
                                            style=format!("left: calc({left}% - 4px);")
                                        ></div>
                                    }
                                })
                        }}
                        <div class="p-4 bg-night/30 rounded-2xl text-white transition-all duration-300">
                            {item
                                .map(|item| {
                                    let target = item.navigation();
                                    let label = match &target {
                                        NavigationTarget::Detail(_) => "Read more →",
                                        NavigationTarget::Repo(_) => "View on GitHub →",
                                        NavigationTarget::External(_) => "Visit project →",
                                    };
                                    view! {
                                        <div>
                                            <p class="text-dim-gray text-[10px] uppercase tracking-wide mb-1">
                                                "From " {item.kind.label()}
                                            </p>
                                            <h4 class="font-bold text-coral text-sm md:text-base mb-1">
                                                {item.title.clone()}
                                            </h4>
                                            <p class="text-dim-gray text-xs leading-relaxed mb-2">
                                                {item.description.clone()}
                                            </p>
                                            <a
                                                href=target.href()
                                                target=if target.opens_new_tab() { "_blank" } else { "_self" }
                                                rel="noopener noreferrer"
                                                class="inline-block mt-1 px-3 py-1 bg-coral rounded text-white text-xs font-medium hover:bg-coral/80"
                                            >
                                                {label}
                                            </a>
                                        </div>
                                    }
                                        .into_any()
                                })}
                            {event
                                .map(|event| {
                                    view! {
                                        <div>
                                            <p class="text-dim-gray text-[10px] uppercase tracking-wide mb-1">
                                                "From event"
                                            </p>
                                            <h4 class="font-bold text-coral text-sm md:text-base mb-1">
                                                {event.title.clone()}
                                            </h4>
                                            <p class="text-white text-xs mb-1">{event.subtitle.clone()}</p>
                                            <p class="text-dim-gray text-xs leading-relaxed mb-2">
                                                {event.description.clone()}
                                            </p>
                                            <p class="text-white text-xs font-medium">
                                                {format_event_range(event)}
                                                {event
                                                    .location
                                                    .as_ref()
                                                    .map(|location| format!(" · {location}"))}
                                            </p>
                                        </div>
                                    }
                                        .into_any()
                                })}
                        </div>
                    </div>
                }
                    .into_any()
            }}

            // Legend
            <div class="flex flex-wrap gap-3 md:gap-6 justify-center mt-6 p-3 md:p-4 bg-night/30 rounded-xl">
                <div class="flex items-center gap-2">
                    <div class="w-3 h-3 md:w-4 md:h-4 bg-coral rounded-md shadow-sm"></div>
                    <span class="text-xs md:text-sm text-dim-gray font-medium">"Education"</span>
                </div>
                <div class="flex items-center gap-2">
                    <div class="w-3 h-3 md:w-4 md:h-4 bg-jet rounded-md shadow-sm"></div>
                    <span class="text-xs md:text-sm text-dim-gray font-medium">"Work"</span>
                </div>
                <div class="flex items-center gap-2">
                    <div class="w-3 h-3 md:w-4 md:h-4 bg-dim-gray rounded-md shadow-sm"></div>
                    <span class="text-xs md:text-sm text-dim-gray font-medium">"Research"</span>
                </div>
                <div class="flex items-center gap-2">
                    <div class="w-3 h-3 md:w-4 md:h-4 bg-white border-2 border-coral rounded-full shadow-sm"></div>
                    <span class="text-xs md:text-sm text-dim-gray font-medium">"Projects & Blog"</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_window_is_valid() {
        assert!(AXIS.end_year > AXIS.start_year);
    }

    #[test]
    fn test_format_event_range() {
        let mut event = content::events()
            .first()
            .cloned()
            .expect("catalog has events");
        event.start_year = 2019;
        event.start_month = 8;
        event.end_year = Some(2023);
        event.end_month = Some(4);
        assert_eq!(format_event_range(&event), "Sep 2019 - May 2023");

        event.end_year = None;
        event.end_month = None;
        assert_eq!(format_event_range(&event), "Sep 2019 - Present");
    }

    #[test]
    fn test_every_category_has_a_color() {
        for category in [
            EventCategory::Education,
            EventCategory::Work,
            EventCategory::Research,
        ] {
            assert!(category_class(category).starts_with("bg-"));
        }
    }
}
