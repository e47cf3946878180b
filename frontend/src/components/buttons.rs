use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::timers::{BrowserTimers, TimerHandle, TimerHost};

/// Button-local bounding box, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    fn of(node: &NodeRef) -> Option<Bounds> {
        let rect = node.cast::<Element>()?.get_bounding_client_rect();
        Some(Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        })
    }
}

/// How far the button leans toward the pointer.
pub fn magnetic_offset(pointer: (f64, f64), bounds: Bounds, strength: f64) -> (f64, f64) {
    let cx = bounds.left + bounds.width / 2.0;
    let cy = bounds.top + bounds.height / 2.0;
    ((pointer.0 - cx) * strength, (pointer.1 - cy) * strength)
}

#[derive(Properties, PartialEq)]
pub struct MagneticProps {
    #[prop_or_default]
    pub children: Children,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.3)]
    pub strength: f64,
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticProps) -> Html {
    let node = use_node_ref();
    let offset = use_state(|| (0.0, 0.0));

    let onmousemove = {
        let node = node.clone();
        let offset = offset.clone();
        let strength = props.strength;
        Callback::from(move |e: MouseEvent| {
            if let Some(bounds) = Bounds::of(&node) {
                let pointer = (f64::from(e.client_x()), f64::from(e.client_y()));
                offset.set(magnetic_offset(pointer, bounds, strength));
            }
        })
    };

    let onmouseleave = {
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| offset.set((0.0, 0.0)))
    };

    let (x, y) = *offset;
    html! {
        <button
            ref={node}
            class={classes!("magnetic-button", props.class.clone())}
            style={format!("transform: translate({:.1}px, {:.1}px);", x, y)}
            onclick={props.onclick.clone()}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

pub enum RippleAction {
    Spawn(Ripple),
    Expire(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleSet {
    pub ripples: Vec<Ripple>,
}

impl Reducible for RippleSet {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RippleAction::Spawn(ripple) => next.ripples.push(ripple),
            RippleAction::Expire(id) => next.ripples.retain(|r| r.id != id),
        }
        Rc::new(next)
    }
}

/// Expiry timers for one button's ripples. Hands out ids, so two clicks
/// between renders still get distinct ones. Timers that fired are pruned on
/// the next start; the rest are cancelled on `cancel_all` or drop.
pub struct RippleTimers<T: TimerHost> {
    host: T,
    next_id: u32,
    pending: HashMap<u32, TimerHandle>,
    fired: Rc<RefCell<Vec<u32>>>,
}

impl<T: TimerHost> RippleTimers<T> {
    pub fn new(host: T) -> Self {
        Self {
            host,
            next_id: 0,
            pending: HashMap::new(),
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Schedules `on_expire(id)` after the ripple lifetime and returns the id.
    pub fn start(&mut self, on_expire: impl FnOnce(u32) + 'static) -> u32 {
        self.prune();
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let fired = Rc::clone(&self.fired);
        let handle = self.host.schedule(
            config::RIPPLE_LIFETIME_MS,
            Box::new(move || {
                fired.borrow_mut().push(id);
                on_expire(id);
            }),
        );
        self.pending.insert(id, handle);
        id
    }

    /// Timers that have neither fired nor been cancelled.
    pub fn live(&mut self) -> usize {
        self.prune();
        self.pending.len()
    }

    pub fn cancel_all(&mut self) {
        for (_, mut handle) in self.pending.drain() {
            handle.cancel();
        }
    }

    // A handle must not be dropped from inside its own callback, so fired
    // ids are only collected there and released here.
    fn prune(&mut self) {
        for id in self.fired.borrow_mut().drain(..) {
            self.pending.remove(&id);
        }
    }
}

impl<T: TimerHost> Drop for RippleTimers<T> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[derive(Properties, PartialEq)]
pub struct RippleProps {
    #[prop_or_default]
    pub children: Children,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::from("rgba(255, 255, 255, 0.3)"))]
    pub ripple_color: AttrValue,
}

#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleProps) -> Html {
    let node = use_node_ref();
    let ripples = use_reducer(RippleSet::default);
    let timers = use_mut_ref(|| RippleTimers::new(BrowserTimers));

    // Pending expiries die with the button.
    {
        let timers = timers.clone();
        use_effect_with_deps(move |_| move || timers.borrow_mut().cancel_all(), ());
    }

    let onclick = {
        let node = node.clone();
        let ripples = ripples.clone();
        let timers = timers.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            let (x, y) = match Bounds::of(&node) {
                Some(b) => (f64::from(e.client_x()) - b.left, f64::from(e.client_y()) - b.top),
                None => (0.0, 0.0),
            };
            let dispatcher = ripples.dispatcher();
            let id = timers
                .borrow_mut()
                .start(move |id| dispatcher.dispatch(RippleAction::Expire(id)));
            ripples.dispatch(RippleAction::Spawn(Ripple { id, x, y }));
            onclick.emit(e);
        })
    };

    html! {
        <button ref={node} class={classes!("ripple-button", props.class.clone())} {onclick}>
            { for ripples.ripples.iter().map(|r| html! {
                <span
                    key={r.id}
                    class="ripple"
                    style={format!("left: {:.0}px; top: {:.0}px; background: {};", r.x, r.y, props.ripple_color)}
                    aria-hidden="true"
                ></span>
            }) }
            { for props.children.iter() }
        </button>
    }
}

pub const BUTTONS_CSS: &str = r#"
    .magnetic-button {
        transition: transform 0.2s ease-out;
    }
    .ripple-button {
        position: relative;
        overflow: hidden;
    }
    .ripple {
        position: absolute;
        width: 20px;
        height: 20px;
        margin: -10px 0 0 -10px;
        border-radius: 50%;
        pointer-events: none;
        animation: ripple-grow 0.6s ease-out forwards;
    }
    @keyframes ripple-grow {
        from { transform: scale(0); opacity: 1; }
        to { transform: scale(20); opacity: 0; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timers::manual::ManualTimers;
    use std::cell::Cell;

    #[test]
    fn magnet_pulls_toward_pointer() {
        let bounds = Bounds { left: 100.0, top: 100.0, width: 100.0, height: 40.0 };
        assert_eq!(magnetic_offset((150.0, 120.0), bounds, 0.2), (0.0, 0.0));
        assert_eq!(magnetic_offset((200.0, 140.0), bounds, 0.5), (25.0, 10.0));
        assert_eq!(magnetic_offset((100.0, 100.0), bounds, 0.5), (-25.0, -10.0));
    }

    #[test]
    fn ripples_expire_individually() {
        let set = Rc::new(RippleSet::default());
        let set = set.reduce(RippleAction::Spawn(Ripple { id: 0, x: 1.0, y: 2.0 }));
        let set = set.reduce(RippleAction::Spawn(Ripple { id: 1, x: 3.0, y: 4.0 }));

        let set = set.reduce(RippleAction::Expire(0));
        assert_eq!(set.ripples, vec![Ripple { id: 1, x: 3.0, y: 4.0 }]);

        // Expiring twice is harmless.
        let set = set.reduce(RippleAction::Expire(0));
        assert_eq!(set.ripples.len(), 1);
    }

    fn counting(expired: &Rc<RefCell<Vec<u32>>>) -> impl FnOnce(u32) + 'static {
        let expired = Rc::clone(expired);
        move |id| expired.borrow_mut().push(id)
    }

    #[test]
    fn back_to_back_clicks_get_distinct_ids_and_both_expire() {
        let clock = ManualTimers::new();
        let expired = Rc::new(RefCell::new(Vec::new()));
        let mut timers = RippleTimers::new(clock.clone());

        let first = timers.start(counting(&expired));
        let second = timers.start(counting(&expired));
        assert_ne!(first, second);
        assert_eq!(timers.live(), 2);

        clock.advance(u64::from(config::RIPPLE_LIFETIME_MS));
        assert_eq!(*expired.borrow(), vec![first, second]);
        assert_eq!(timers.live(), 0);
    }

    #[test]
    fn dropping_the_timers_cancels_pending_expiries() {
        let clock = ManualTimers::new();
        let expired = Rc::new(RefCell::new(Vec::new()));
        let mut timers = RippleTimers::new(clock.clone());
        timers.start(counting(&expired));
        timers.start(counting(&expired));
        assert_eq!(clock.pending(), 2);

        drop(timers);
        clock.advance(10_000);

        assert!(expired.borrow().is_empty());
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn cancel_all_leaves_fired_timers_alone() {
        let clock = ManualTimers::new();
        let fired = Rc::new(Cell::new(0));
        let mut timers = RippleTimers::new(clock.clone());

        let count = Rc::clone(&fired);
        timers.start(move |_| count.set(count.get() + 1));
        clock.advance(u64::from(config::RIPPLE_LIFETIME_MS));
        let count = Rc::clone(&fired);
        timers.start(move |_| count.set(count.get() + 1));

        timers.cancel_all();
        clock.advance(10_000);
        assert_eq!(fired.get(), 1);
        assert_eq!(timers.live(), 0);
    }
}
