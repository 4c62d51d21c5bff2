// Example: drive the control through a simulated page (scroll down, click, animate back up).
use scroll_top::{ControlElement, DEFAULT_CONTROL_ID, PageEvent, ScrollTopOptions, Viewport};
use scroll_top_adapter::Easing;
use scroll_top_adapter::sim::{SimPage, SimViewport};

fn main() {
    tracing_subscriber::fmt()
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let viewport = SimViewport::new()
        .with_max_offset(4_000.0)
        .with_duration_ms(240)
        .with_easing(Easing::EaseInOutCubic);
    let page = SimPage::with_viewport(viewport);
    let el = page.add_control(DEFAULT_CONTROL_ID);

    let control = scroll_top::install(&page, page.viewport(), ScrollTopOptions::default());
    page.fire(PageEvent::Load);
    println!("after load: visibility={:?}", control.visibility());

    for y in [40.0, 100.0, 101.0, 2_500.0] {
        page.user_scroll_to(y);
        println!("scrolled to {y}: active={}", el.has_class("active"));
    }

    let click = page.click(DEFAULT_CONTROL_ID);
    println!(
        "clicked: default_prevented={:?} commands={:?}",
        click.map(|c| c.default_prevented()),
        page.scroll_commands()
    );

    // Simulate a 60fps animation loop.
    let mut now_ms = 0u64;
    while page.viewport().is_animating() {
        now_ms += 16;
        if let Some(off) = page.tick(now_ms) {
            println!(
                "t={now_ms}ms off={off:.1} active={}",
                el.has_class("active")
            );
        }
    }

    println!(
        "done: off={} visibility={:?}",
        page.viewport().scroll_y(),
        control.visibility()
    );
}
