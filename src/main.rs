//! Bad Widgets entry point
//!
//! Headless demo driver: runs each widget simulation through a few seconds
//! of scripted input and logs what happens. The real gallery embeds the
//! simulators behind a renderer and the DOM hit-test layer.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Bad Widgets (headless demo) starting...");

    demo_cursor();
    demo_target();
    demo_geese();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build drives the simulators from the gallery shell.
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_cursor() {
    use bad_widgets::FixedTimestep;
    use bad_widgets::consts::CURSOR_DT;
    use bad_widgets::sim::{CursorSim, HitTest, Redirector, SyntheticEvent, Viewport};

    let mut sim = CursorSim::new(Viewport::new(1280.0, 720.0));
    let mut driver = FixedTimestep::new(CURSOR_DT);
    let mut closest = f32::INFINITY;

    // Chase the marker for five seconds of ~60 fps frames; the pointer
    // closes 80% of the gap every frame, the marker keeps fleeing.
    for _ in 0..300 {
        let c = sim.cursor();
        let p = sim.pointer();
        let chase = p + (c - p) * 0.8;
        sim.pointer_moved(chase.x, chase.y);
        for _ in 0..driver.advance(0.0167) {
            sim.tick();
        }
        closest = closest.min((sim.cursor() - sim.pointer()).length());
    }

    log::info!(
        "cursor demo: marker ended at {:?}, pointer never got closer than {:.1} px",
        sim.cursor(),
        closest
    );

    // A click aimed at the pointer lands on whatever sits under the marker.
    struct LogHost;
    impl HitTest for LogHost {
        type Element = &'static str;

        fn topmost_element_at(&self, _x: f32, _y: f32) -> Option<&'static str> {
            Some("button#signup")
        }

        fn dispatch(&self, element: &&'static str, event: SyntheticEvent) {
            log::info!("cursor demo: dispatched {:?} to {}", event, element);
        }
    }

    let mut redirector = Redirector::new();
    redirector.forward(&LogHost, sim.cursor(), SyntheticEvent::Activate);
    log::info!("cursor demo: click pulse fired = {}", redirector.take_pulse());
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_target() {
    use bad_widgets::Settings;
    use bad_widgets::consts::TARGET_DT;
    use bad_widgets::sim::target::{MAX_X, MAX_Y};
    use bad_widgets::sim::{NumberEntry, RingHit, TargetSim};

    let settings = Settings::load();
    let mut sim = TargetSim::with_mode(0xBAD_5EED, settings.normalization_mode());
    let mut redirects = 0u32;

    // Sixteen seconds at 125 Hz.
    for _ in 0..2000 {
        let p = sim.pos();
        if p.x.abs() > MAX_X || p.y.abs() > MAX_Y {
            redirects += 1;
        }
        sim.tick();
    }
    log::info!(
        "target demo: {} boundary redirects over {:.0} s, resting at {:?}",
        redirects,
        2000.0 * TARGET_DT,
        sim.pos()
    );

    // Two ring clicks and the center dot: the classic way to enter 42.
    let mut entry = NumberEntry::new();
    entry.apply(RingHit::Ring(4));
    entry.apply(RingHit::Ring(2));
    let closed = entry.apply(RingHit::Close);
    log::info!("target demo: entered {:?}, closed = {}", entry.value(), closed);
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_geese() {
    use bad_widgets::sim::goose::{GROWTH_DURATION_MS, TICK_MS};
    use bad_widgets::sim::{FoodKind, Pen, starting_colors};
    use glam::Vec2;

    let mut pen = Pen::new(0x600_5E);
    let [red, green, _] = starting_colors();

    let a = pen.spawn_egg(red, Vec2::new(0.25, 0.5));
    let b = pen.spawn_egg(green, Vec2::new(0.75, 0.5));
    pen.place_food(FoodKind::ShiftHCw, Vec2::new(0.5, 0.5));

    // Let both grow up (and wander, and maybe eat).
    for _ in 0..(GROWTH_DURATION_MS / TICK_MS) {
        pen.tick();
    }

    match pen.breed(a, b) {
        Some(child) => {
            let goose = &pen.geese()[child];
            log::info!(
                "goose demo: child hatched at {:?} with hue {:.1}",
                goose.pos,
                goose.color.hue
            );
        }
        None => log::info!("goose demo: breeding rejected"),
    }
    log::info!(
        "goose demo: {} geese, {} food left on the ground",
        pen.geese().len(),
        pen.food().len()
    );
}
