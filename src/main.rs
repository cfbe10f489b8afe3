use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use folio::routes::app::App;
        use leptos::mount::mount_to_body;
        use tracing_subscriber::prelude::*;
        use tracing_web::MakeWebConsoleWriter;

        pub fn main() {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false) // Only partially supported across browsers
                .without_time()   // std::time is not available in browsers
                .with_writer(MakeWebConsoleWriter::new());

            tracing_subscriber::registry()
                .with(fmt_layer)
                .init();
            mount_to_body(App);
        }
    } else {
        pub fn main() {
            // The site is rendered entirely in the browser; there is nothing
            // to run on a native host.
        }
    }
}
