use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Rejects NaN and infinities so the parallax math never sees them.
    pub fn new(x: f64, y: f64) -> Option<Self> {
        (x.is_finite() && y.is_finite()).then_some(Self { x, y })
    }
}

/// A background orb that drifts with the pointer: offset = pointer * factor + bias.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub factor: f64,
    pub bias: f64,
    pub class: &'static str,
}

pub const ORBS: [Orb; 2] = [
    Orb { factor: 0.1, bias: -200.0, class: "orb orb-primary" },
    Orb { factor: -0.05, bias: 100.0, class: "orb orb-secondary" },
];

impl Orb {
    pub fn offset(&self, pointer: PointerPosition) -> (f64, f64) {
        (
            pointer.x * self.factor + self.bias,
            pointer.y * self.factor + self.bias,
        )
    }

    pub fn style(&self, pointer: PointerPosition) -> String {
        let (x, y) = self.offset(pointer);
        format!("transform: translate({:.1}px, {:.1}px);", x, y)
    }
}

/// Latest window pointer position. The `mousemove` listener lives exactly as
/// long as the calling component.
#[hook]
pub fn use_pointer_position() -> PointerPosition {
    let position = use_state(PointerPosition::default);

    {
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                        if let Some(p) =
                            PointerPosition::new(f64::from(e.client_x()), f64::from(e.client_y()))
                        {
                            position.set(p);
                        }
                    });
                    if window
                        .add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("Could not subscribe to mousemove, parallax disabled");
                    }
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    *position
}
