//! Synthetic input redirection
//!
//! Gestures aimed at the real pointer are delivered to whatever element lies
//! under the virtual cursor instead. Pure pass-through: the only state is a
//! one-shot visual pulse flag the renderer drains.

use glam::Vec2;

/// A gesture forwarded to the element under the virtual cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyntheticEvent {
    /// Click plus focus.
    Activate,
    /// Wheel scroll carrying the gesture's vertical delta.
    Scroll { delta_y: f32 },
}

/// Host hit-testing and dispatch capability.
///
/// The embedding toolkit locates the topmost element at a point and delivers
/// a synthetic event to it. Injected so the simulation stays headless.
pub trait HitTest {
    type Element;

    /// Topmost element at screen position (x, y), if any.
    fn topmost_element_at(&self, x: f32, y: f32) -> Option<Self::Element>;

    /// Deliver a synthetic event to an element.
    fn dispatch(&self, element: &Self::Element, event: SyntheticEvent);
}

/// Forwards gestures to the virtual cursor position.
#[derive(Debug, Default)]
pub struct Redirector {
    pulse: bool,
}

impl Redirector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a gesture to the element under `cursor`. The probe point is
    /// 1 px above the position so the cursor marker itself is never the hit
    /// target. Activation latches the visual pulse; a missing target is a
    /// silent no-op.
    pub fn forward<H: HitTest>(&mut self, host: &H, cursor: Vec2, event: SyntheticEvent) {
        let Some(element) = host.topmost_element_at(cursor.x, cursor.y - 1.0) else {
            log::debug!("nothing under virtual cursor at {:?}", cursor);
            return;
        };
        host.dispatch(&element, event);
        if matches!(event, SyntheticEvent::Activate) {
            self.pulse = true;
        }
    }

    /// Drain the one-shot click pulse (true at most once per activation).
    pub fn take_pulse(&mut self) -> bool {
        std::mem::take(&mut self.pulse)
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomHitTest;

/// DOM-backed hit testing for the browser build.
#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement, MouseEvent, MouseEventInit, WheelEvent, WheelEventInit};

    use super::{HitTest, SyntheticEvent};

    /// `document.elementFromPoint` plus synthetic `MouseEvent`/`WheelEvent`
    /// dispatch. Clicks also focus the target so keyboard entry follows the
    /// virtual cursor.
    #[derive(Debug, Default)]
    pub struct DomHitTest;

    impl HitTest for DomHitTest {
        type Element = Element;

        fn topmost_element_at(&self, x: f32, y: f32) -> Option<Element> {
            web_sys::window()?.document()?.element_from_point(x, y)
        }

        fn dispatch(&self, element: &Element, event: SyntheticEvent) {
            match event {
                SyntheticEvent::Activate => {
                    let init = MouseEventInit::new();
                    init.set_bubbles(true);
                    init.set_cancelable(true);
                    if let Ok(click) = MouseEvent::new_with_mouse_event_init_dict("click", &init) {
                        let _ = element.dispatch_event(&click);
                    }
                    if let Some(html) = element.dyn_ref::<HtmlElement>() {
                        let _ = html.focus();
                    }
                }
                SyntheticEvent::Scroll { delta_y } => {
                    let init = WheelEventInit::new();
                    init.set_bubbles(true);
                    init.set_delta_y(delta_y as f64);
                    if let Ok(wheel) = WheelEvent::new_with_wheel_event_init_dict("wheel", &init) {
                        let _ = element.dispatch_event(&wheel);
                    }
                }
            }
        }
    }
}
