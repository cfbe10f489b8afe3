use leptos::{html, prelude::*};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Observes an element and flips a signal once it scrolls into view.
///
/// Backed by an `IntersectionObserver` (threshold 0.1, 50px root margin).
/// The observer and its callback are torn down when the owning scope is
/// disposed. If the observer cannot be constructed the element just reports
/// visible, so content is never stuck hidden.
pub fn use_reveal() -> (NodeRef<html::Div>, ReadSignal<bool>) {
    let node = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);
    let armed = StoredValue::new(false);

    Effect::new(move || {
        let Some(element) = node.get() else {
            return;
        };
        if armed.get_value() {
            return;
        }
        armed.set_value(true);

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        set_visible.set(true);
                    }
                }
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(0.1));
        init.set_root_margin("50px");

        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => {
                observer.observe(&element);
                let cleanup = send_wrapper::SendWrapper::new((observer, callback));
                on_cleanup(move || {
                    let (observer, callback) = cleanup.take();
                    observer.disconnect();
                    drop(callback);
                });
            }
            Err(error) => {
                tracing::warn!(?error, "IntersectionObserver unavailable, showing content");
                set_visible.set(true);
            }
        }
    });

    (node, visible)
}

/// Wrapper that fades and slides its children in when they first become
/// visible, with an optional stagger delay.
#[allow(non_snake_case)]
#[component]
pub fn Reveal(children: Children, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let (node, visible) = use_reveal();
    view! {
        <div
            node_ref=node
            class=move || {
                format!(
                    "transition-all duration-1000 {}",
                    if visible.get() {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-8"
                    },
                )
            }
            style=format!("transition-delay: {delay_ms}ms;")
        >
            {children()}
        </div>
    }
}
