// Example: install the control on a real page.
//
// Build for `wasm32-unknown-unknown` with `--features web` and load it from a page that contains
// an element with `id="scroll-top"`.

#[cfg(target_arch = "wasm32")]
fn main() {
    use tracing::level_filters::LevelFilter;
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_web::MakeWebConsoleWriter;

    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::DEBUG);
    tracing_subscriber::registry().with(fmt_layer).init();

    let options = scroll_top::ScrollTopOptions::default();
    match scroll_top_adapter::web::install_on_window(options) {
        Ok(control) => {
            tracing::info!(has_control = control.has_control(), "scroll-top installed");
        }
        Err(err) => tracing::error!(%err, "scroll-top not installed"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("web_page only runs on wasm32; try `--example sim_page` instead");
}
