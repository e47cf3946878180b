use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

fn secs_to_ms(secs: f64) -> u32 {
    (secs.max(0.0) * 1000.0).round() as u32
}

/// First `n` characters of `text`, never splitting a multi-byte char.
pub fn reveal(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds before the first character appears.
    #[prop_or(0.0)]
    pub delay: f64,
    /// Seconds per character.
    #[prop_or(0.05)]
    pub speed: f64,
    #[prop_or(true)]
    pub cursor: bool,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterProps) -> Html {
    let revealed = use_state(|| 0usize);
    let started = use_state(|| false);
    let total = props.text.chars().count();

    // Restart whenever the text changes (new slide).
    {
        let revealed = revealed.clone();
        let started = started.clone();
        let delay_ms = secs_to_ms(props.delay);
        use_effect_with_deps(
            move |_| {
                revealed.set(0);
                started.set(false);
                let timeout = Timeout::new(delay_ms, move || started.set(true));
                move || drop(timeout)
            },
            props.text.clone(),
        );
    }

    {
        let revealed = revealed.clone();
        let tick = if *started && *revealed < total {
            secs_to_ms(props.speed).max(1)
        } else {
            0
        };
        use_interval(move || revealed.set(*revealed + 1), tick);
    }

    let typing = *revealed < total;
    html! {
        <span class={classes!("typewriter", props.class.clone())} aria-label={props.text.clone()}>
            { reveal(&props.text, *revealed).to_string() }
            if props.cursor && typing {
                <span class="typewriter-cursor" aria-hidden="true">{"|"}</span>
            }
        </span>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaggerAnimation {
    FadeUp,
    Scale,
}

impl StaggerAnimation {
    fn class(self) -> &'static str {
        match self {
            StaggerAnimation::FadeUp => "stagger-fade-up",
            StaggerAnimation::Scale => "stagger-scale",
        }
    }
}

/// Start time (seconds) of the `i`th item in a sequence that begins at
/// `initial` and spaces items `step` apart.
pub fn stagger_delay(initial: f64, step: f64, i: usize) -> f64 {
    initial + i as f64 * step
}

/// Each word with the delay (seconds) at which it starts animating.
pub fn word_delays(text: &str, delay: f64, stagger: f64) -> Vec<(&str, f64)> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| (word, stagger_delay(delay, stagger, i)))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct StaggeredProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.1)]
    pub stagger: f64,
    #[prop_or(StaggerAnimation::FadeUp)]
    pub animation: StaggerAnimation,
}

#[function_component(StaggeredText)]
pub fn staggered_text(props: &StaggeredProps) -> Html {
    let animation = props.animation.class();
    html! {
        <span class={classes!("staggered", props.class.clone())} aria-label={props.text.clone()}>
            { for word_delays(&props.text, props.delay, props.stagger).into_iter().map(|(word, at)| html! {
                <span class={classes!("stagger-word", animation)} style={format!("animation-delay: {:.2}s;", at)} aria-hidden="true">
                    { word.to_string() }
                </span>
            }) }
        </span>
    }
}

pub fn gradient_style(colors: &[&str], speed: f64) -> String {
    let mut stops: Vec<&str> = colors.to_vec();
    if let Some(first) = colors.first() {
        stops.push(*first);
    }
    let duration = if speed > 0.0 { 3.0 / speed } else { 3.0 };
    format!(
        "background-image: linear-gradient(90deg, {}); animation-duration: {:.2}s;",
        stops.join(", "),
        duration
    )
}

#[derive(Properties, PartialEq)]
pub struct GradientProps {
    pub text: AttrValue,
    pub colors: &'static [&'static str],
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(1.0)]
    pub speed: f64,
}

#[function_component(GradientText)]
pub fn gradient_text(props: &GradientProps) -> Html {
    html! {
        <span class={classes!("gradient-text", props.class.clone())} style={gradient_style(props.colors, props.speed)}>
            { props.text.clone() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Bob amplitude in pixels.
    #[prop_or(2.0)]
    pub intensity: f64,
}

#[function_component(FloatingText)]
pub fn floating_text(props: &FloatingProps) -> Html {
    html! {
        <span class={classes!("floating-text", props.class.clone())} style={format!("--float-amplitude: {}px;", props.intensity)}>
            { props.text.clone() }
        </span>
    }
}

/// Keyframes shared by the text effects; rendered once by the page.
pub const TEXT_EFFECTS_CSS: &str = r#"
    .typewriter-cursor {
        margin-left: 2px;
        animation: caret-blink 1s steps(1) infinite;
    }
    @keyframes caret-blink {
        50% { opacity: 0; }
    }
    .stagger-word {
        display: inline-block;
        margin-right: 0.25em;
        opacity: 0;
        animation-duration: 0.5s;
        animation-fill-mode: forwards;
        animation-timing-function: ease-out;
    }
    .stagger-fade-up { animation-name: stagger-fade-up; }
    .stagger-scale { animation-name: stagger-scale; }
    @keyframes stagger-fade-up {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes stagger-scale {
        from { opacity: 0; transform: scale(0.5); }
        to { opacity: 1; transform: scale(1); }
    }
    .gradient-text {
        background-size: 200% auto;
        background-clip: text;
        -webkit-background-clip: text;
        color: transparent;
        animation-name: gradient-shift;
        animation-iteration-count: infinite;
        animation-timing-function: linear;
    }
    @keyframes gradient-shift {
        to { background-position: 200% center; }
    }
    .floating-text {
        display: inline-block;
        animation: text-float 3s ease-in-out infinite;
    }
    @keyframes text-float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(calc(-1 * var(--float-amplitude))); }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_respects_char_boundaries() {
        let text = "set 🚀 go";
        assert_eq!(reveal(text, 0), "");
        assert_eq!(reveal(text, 4), "set ");
        assert_eq!(reveal(text, 5), "set 🚀");
        assert_eq!(reveal(text, 100), text);
    }

    #[test]
    fn words_are_delayed_by_the_stagger() {
        let words = word_delays("Ready to Learn?", 0.1, 0.1);
        let names: Vec<&str> = words.iter().map(|(w, _)| *w).collect();
        assert_eq!(names, vec!["Ready", "to", "Learn?"]);
        assert!((words[2].1 - 0.3).abs() < 1e-9);
    }

    #[test]
    fn sequence_delays_step_from_the_initial_offset() {
        let delays: Vec<f64> = (0..3).map(|i| stagger_delay(0.6, 0.1, i)).collect();
        for (got, want) in delays.iter().zip([0.6, 0.7, 0.8]) {
            assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
        }
        assert_eq!(stagger_delay(0.4, 0.0, 7), 0.4);
    }

    #[test]
    fn gradient_loops_back_to_first_color() {
        let style = gradient_style(&["#059669", "#10b981"], 2.0);
        assert_eq!(
            style,
            "background-image: linear-gradient(90deg, #059669, #10b981, #059669); animation-duration: 1.50s;"
        );
    }

    #[test]
    fn timings_convert_to_whole_milliseconds() {
        assert_eq!(secs_to_ms(0.8), 800);
        assert_eq!(secs_to_ms(0.02), 20);
        assert_eq!(secs_to_ms(-1.0), 0);
    }
}
