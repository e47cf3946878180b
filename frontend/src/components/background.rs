use yew::prelude::*;

use crate::pointer::{PointerPosition, ORBS};

pub const PARTICLE_COUNT: usize = 20;
pub const SHAPE_COUNT: usize = 8;

/// Placement and timing of one floating dot. Positions are percentages of the
/// viewport, derived from the index so every render lays them out the same.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Floater {
    pub left: f64,
    pub top: f64,
    pub drift_x: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Floater {
    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; --drift-x: {}px; animation-duration: {}s; animation-delay: {}s;",
            self.left, self.top, self.drift_x, self.duration, self.delay
        )
    }
}

pub fn particle(i: usize) -> Floater {
    let n = i as f64;
    let base = (n * 137.5) % 100.0;
    Floater {
        left: (base + n * 23.7) % 100.0,
        top: (base * 1.618 + n * 31.2) % 100.0,
        drift_x: ((i % 3) as f64 - 1.0) * 15.0,
        duration: 4.0 + (i % 3) as f64 * 1.5,
        delay: (i % 4) as f64 * 0.75,
    }
}

pub fn shape(i: usize) -> Floater {
    let n = i as f64;
    let base = (n * 89.3) % 100.0;
    Floater {
        left: (base + n * 41.7) % 100.0,
        top: (base * 2.414 + n * 19.8) % 100.0,
        drift_x: ((i % 5) as f64 - 2.0) * 10.0,
        duration: 6.0 + (i % 4) as f64 * 1.5,
        delay: (i % 3) as f64 * 1.2,
    }
}

#[derive(Properties, PartialEq)]
pub struct BackgroundProps {
    pub pointer: PointerPosition,
}

#[function_component(FloatingBackground)]
pub fn floating_background(props: &BackgroundProps) -> Html {
    html! {
        <div class="floating-background" aria-hidden="true">
            { for ORBS.iter().map(|orb| html! {
                <div class={orb.class} style={orb.style(props.pointer)}></div>
            }) }
            { for (0..PARTICLE_COUNT).map(|i| html! {
                <div key={format!("particle-{}", i)} class="particle" style={particle(i).style()}></div>
            }) }
            { for (0..SHAPE_COUNT).map(|i| html! {
                <div key={format!("shape-{}", i)} class="shape" style={shape(i).style()}></div>
            }) }
            <style>
                {r#"
                    .floating-background {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        overflow: hidden;
                    }
                    .orb {
                        position: absolute;
                        border-radius: 50%;
                        transition: transform 0.8s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    .orb-primary {
                        width: 24rem;
                        height: 24rem;
                        background: linear-gradient(to right, rgba(192, 132, 252, 0.2), rgba(244, 114, 182, 0.2));
                        filter: blur(64px);
                    }
                    .orb-secondary {
                        width: 16rem;
                        height: 16rem;
                        background: linear-gradient(to right, rgba(96, 165, 250, 0.2), rgba(129, 140, 248, 0.2));
                        filter: blur(40px);
                    }
                    .particle, .shape {
                        position: absolute;
                        border-radius: 50%;
                        animation-name: float-particle;
                        animation-iteration-count: infinite;
                        animation-timing-function: ease-in-out;
                    }
                    .particle {
                        width: 0.5rem;
                        height: 0.5rem;
                        background: linear-gradient(to right, rgba(192, 132, 252, 0.4), rgba(244, 114, 182, 0.4));
                    }
                    .shape {
                        width: 1rem;
                        height: 1rem;
                        background: linear-gradient(to right, rgba(96, 165, 250, 0.3), rgba(192, 132, 252, 0.3));
                        animation-name: float-shape;
                    }
                    @keyframes float-particle {
                        0%, 100% { transform: translate(0, 0) scale(1); opacity: 0.2; }
                        50% { transform: translate(var(--drift-x), -40px) scale(1.8); opacity: 0.9; }
                    }
                    @keyframes float-shape {
                        0% { transform: translate(0, 0) scale(1) rotate(0deg); opacity: 0.4; }
                        50% { transform: translate(var(--drift-x), -50px) scale(1.3) rotate(180deg); opacity: 0.8; }
                        100% { transform: translate(0, 0) scale(1) rotate(360deg); opacity: 0.4; }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floaters_stay_inside_the_viewport() {
        for f in (0..PARTICLE_COUNT).map(particle).chain((0..SHAPE_COUNT).map(shape)) {
            assert!((0.0..100.0).contains(&f.left), "left {}", f.left);
            assert!((0.0..100.0).contains(&f.top), "top {}", f.top);
        }
    }

    #[test]
    fn particle_timing_cycles_with_index() {
        assert_eq!(particle(0).duration, 4.0);
        assert_eq!(particle(2).duration, 7.0);
        assert_eq!(particle(3).delay, 2.25);
        assert_eq!(particle(0).drift_x, -15.0);
        assert_eq!(particle(2).drift_x, 15.0);
    }

    #[test]
    fn shape_layout_is_deterministic() {
        assert_eq!(shape(5), shape(5));
        assert_eq!(shape(0).left, 0.0);
        assert_eq!(shape(4).drift_x, 20.0);
        assert_eq!(shape(3).duration, 10.5);
    }
}
