use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::carousel::{Carousel, CarouselAction, Direction, PrimaryAction, SlideId, SLIDE_COUNT};
use crate::components::background::FloatingBackground;
use crate::components::buttons::{MagneticButton, RippleButton, BUTTONS_CSS};
use crate::components::illustration::{self, SlideIllustration, ILLUSTRATION_CSS, LOGO};
use crate::components::text_effects::{
    stagger_delay, FloatingText, GradientText, StaggerAnimation, StaggeredText, TypewriterText,
    TEXT_EFFECTS_CSS,
};
use crate::config;
use crate::pointer::use_pointer_position;
use crate::timers::{BrowserTimers, TimerHost};
use crate::welcome_gate::use_welcome_gate;
use crate::Route;

const WELCOME_COLORS: &[&str] = &["#6a0dad", "#8B5CF6", "#A855F7", "#C084FC"];
const AI_COLORS: &[&str] = &["#2563eb", "#3b82f6", "#60a5fa"];
const SUCCESS_COLORS: &[&str] = &["#059669", "#10b981", "#34d399", "#6ee7b7"];

fn slide_title(slide: SlideId) -> Html {
    match slide {
        SlideId::Welcome => html! {
            <StaggeredText
                text={slide.slide().title}
                class="slide-title"
                delay={0.2}
                stagger={0.08}
                animation={StaggerAnimation::FadeUp}
            />
        },
        SlideId::AiLearning => html! {
            <div class="slide-title">
                <span>{"Dynamic "}</span>
                <GradientText text="AI" colors={AI_COLORS} speed={1.5} />
                <FloatingText text=" Learning Environments" intensity={3.0} />
            </div>
        },
        SlideId::ReadyToLearn => html! {
            <StaggeredText
                text={slide.slide().title}
                class="slide-title"
                delay={0.1}
                stagger={0.1}
                animation={StaggerAnimation::Scale}
            />
        },
        SlideId::Testimonials => html! {
            <GradientText text="Success Stories" class="slide-title" colors={SUCCESS_COLORS} speed={2.0} />
        },
    }
}

fn welcome_modal() -> Html {
    html! {
        <div class="welcome-overlay" role="dialog" aria-modal="true" aria-label="Welcome">
            <div class="welcome-card">
                <GradientText text="🎉 Welcome to Taru!" class="welcome-title" colors={WELCOME_COLORS} speed={2.0} />
                <TypewriterText
                    text="You're all set to begin your learning journey 🚀"
                    class="welcome-subtitle"
                    delay={0.5}
                    speed={0.03}
                />
            </div>
        </div>
    }
}

/// A 64px grid tucked into one corner of the card.
fn corner_grid(id: &'static str, class: &'static str, stroke: &'static str, width: &'static str) -> Html {
    html! {
        <div class={classes!("corner-grid", class)} aria-hidden="true">
            <svg viewBox="0 0 256 256" fill="none" xmlns="http://www.w3.org/2000/svg">
                <defs>
                    <pattern {id} x="0" y="0" width="64" height="64" patternUnits="userSpaceOnUse">
                        <path d="M 64 0 L 0 0 0 64" fill="none" stroke={stroke} stroke-width={width} />
                    </pattern>
                </defs>
                <rect width="320" height="320" fill={format!("url(#{})", id)} />
            </svg>
        </div>
    }
}

/// Still frame of a card that is sliding out. Not interactive.
fn exit_card(slide: SlideId, direction: Direction) -> Html {
    let content = slide.slide();
    html! {
        <div
            key={format!("exit-{}", slide.index())}
            class={classes!("card", "card-exit", direction.exit_class())}
            aria-hidden="true"
        >
            <div class="card-body">
                <div class="illustration-area">
                    <SlideIllustration illustration={content.illustration} />
                </div>
                <h1 class="title-area">{ content.title }</h1>
                <p class="description">{ content.description }</p>
            </div>
        </div>
    }
}

/// The slide that was just replaced, held for [`config::CARD_EXIT_MS`] so it
/// can animate out under the incoming card.
#[hook]
fn use_outgoing_slide(current: SlideId, direction: Direction) -> Option<(SlideId, Direction)> {
    let outgoing = use_state(|| None);
    let shown = use_mut_ref(|| current);

    {
        let outgoing = outgoing.clone();
        use_effect_with_deps(
            move |current: &SlideId| {
                let previous = std::mem::replace(&mut *shown.borrow_mut(), *current);
                let mut timer = None;
                if previous != *current {
                    outgoing.set(Some((previous, direction)));
                    let clear = outgoing.clone();
                    timer = Some(BrowserTimers.schedule(
                        config::CARD_EXIT_MS,
                        Box::new(move || clear.set(None)),
                    ));
                }
                move || {
                    if let Some(mut timer) = timer {
                        timer.cancel();
                    }
                }
            },
            current,
        );
    }

    *outgoing
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let carousel = use_reducer(Carousel::new);
    let show_welcome = use_welcome_gate();
    let pointer = use_pointer_position();
    let navigator = use_navigator();
    let outgoing = use_outgoing_slide(carousel.current(), carousel.direction());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_back = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Retreat))
    };

    let on_primary = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| match carousel.current().primary_action() {
            PrimaryAction::Advance => carousel.dispatch(CarouselAction::Advance),
            PrimaryAction::Register => match navigator.as_ref() {
                Some(navigator) => {
                    info!("Onboarding finished, heading to registration");
                    navigator.push(&Route::Register);
                }
                None => error!("No router in scope, cannot open registration"),
            },
        })
    };

    let jump_to = |index: usize| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::JumpTo(index)))
    };

    let current = carousel.current();
    let slide = current.slide();

    let mut actions = Vec::new();
    if slide.show_back {
        actions.push(html! {
            <MagneticButton onclick={on_back} class="back-button" strength={0.2}>
                {"Back"}
            </MagneticButton>
        });
    }
    actions.push(html! {
        <RippleButton onclick={on_primary} class="primary-button">
            <span class="primary-label">{ slide.primary_label }</span>
        </RippleButton>
    });

    html! {
        <main class="landing-page">
            <FloatingBackground pointer={pointer} />

            if show_welcome {
                { welcome_modal() }
            }

            <nav class="landing-nav">
                <Link<Route> to={Route::Login} classes="sign-in-link">
                    {"Sign In"}
                </Link<Route>>
            </nav>

            <section class="card-stage">
                if let Some((gone, direction)) = outgoing {
                    { exit_card(gone, direction) }
                }
                <div key={carousel.index()} class={classes!("card", carousel.direction().class())}>
                    { corner_grid("grid-left-bottom", "grid-bottom-left", "rgba(0,0,0,0.1)", "1") }
                    { corner_grid("grid-right-top", "grid-top-right", "rgba(0,0,0,0.25)", "0.5") }

                    <div class="card-logo">
                        { illustration::image(&LOGO) }
                    </div>

                    <div class="card-body">
                        <div class="illustration-area">
                            <SlideIllustration illustration={slide.illustration} />
                        </div>

                        <h1 class="title-area" aria-label={slide.title}>
                            { slide_title(current) }
                        </h1>

                        <p class="description">
                            <TypewriterText text={slide.description} delay={0.8} speed={0.02} cursor={false} />
                        </p>

                        <div class="card-actions">
                            { for actions.into_iter().enumerate().map(|(i, button)| html! {
                                <div
                                    class="stagger-item"
                                    style={format!("animation-delay: {:.2}s;", stagger_delay(0.6, 0.1, i))}
                                >
                                    { button }
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="card-indicators">
                        { for (0..SLIDE_COUNT).map(|index| html! {
                            <button
                                key={index}
                                class={classes!("indicator", (index == carousel.index()).then_some("active"))}
                                onclick={jump_to(index)}
                                aria-label={format!("Go to slide {}", index + 1)}
                            />
                        }) }
                    </div>

                    <div class="translate-widget">
                        <div id="google_translate_element"></div>
                    </div>
                </div>
            </section>

            <style>
                {TEXT_EFFECTS_CSS}
                {BUTTONS_CSS}
                {ILLUSTRATION_CSS}
                {r#"
                    .landing-page {
                        position: relative;
                        min-height: 100vh;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        overflow-x: hidden;
                        background: #1f2937;
                        animation: page-fade-in 0.6s ease-out;
                    }

                    @keyframes page-fade-in {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }

                    .welcome-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0.6);
                        animation: page-fade-in 0.3s ease-out;
                    }

                    .welcome-card {
                        max-width: 36rem;
                        width: 100%;
                        padding: 1.5rem 2rem;
                        text-align: center;
                        background: rgba(255, 255, 255, 0.9);
                        border: 1px solid #d8b4fe;
                        border-radius: 1.5rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        animation: welcome-pop 0.6s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }

                    @keyframes welcome-pop {
                        from { transform: scale(0.8) translateY(50px); opacity: 0; }
                        to { transform: scale(1) translateY(0); opacity: 1; }
                    }

                    .welcome-title {
                        display: block;
                        font-size: clamp(1.25rem, 4vw, 2.25rem);
                        font-weight: 800;
                        margin-bottom: 0.5rem;
                    }

                    .welcome-subtitle {
                        font-size: clamp(0.75rem, 2vw, 1.125rem);
                        font-weight: 500;
                        color: #1f2937;
                    }

                    .landing-nav {
                        position: absolute;
                        top: 0;
                        right: 0;
                        z-index: 40;
                        padding: 1rem 1.5rem;
                        animation: nav-drop-in 0.6s ease-out 0.4s backwards;
                    }

                    @keyframes nav-drop-in {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    .sign-in-link {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(0, 0, 0, 0.2);
                        backdrop-filter: blur(4px);
                        color: white;
                        font-weight: 600;
                        text-decoration: none;
                        transition: color 0.2s ease, transform 0.2s ease;
                    }

                    .sign-in-link:hover {
                        color: #93c5fd;
                        transform: scale(1.05);
                    }

                    .card-stage {
                        flex: 1;
                        position: relative;
                        overflow: hidden;
                        min-height: 100vh;
                    }

                    .card {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        background: white;
                        overflow-y: auto;
                        animation-duration: 0.5s;
                        animation-fill-mode: backwards;
                        transition: transform 0.3s ease;
                    }

                    .card:not(.card-exit):hover {
                        transform: scale(1.005);
                    }

                    .card-exit {
                        z-index: 0;
                        pointer-events: none;
                        animation-fill-mode: forwards;
                    }

                    .card-stage > .card:not(.card-exit) {
                        z-index: 1;
                    }

                    .slide-out-left { animation-name: slide-out-left; }
                    .slide-out-right { animation-name: slide-out-right; }

                    @keyframes slide-out-left {
                        from { opacity: 1; transform: translateX(0); }
                        to { opacity: 0; transform: translateX(-100px); }
                    }

                    @keyframes slide-out-right {
                        from { opacity: 1; transform: translateX(0); }
                        to { opacity: 0; transform: translateX(100px); }
                    }

                    .slide-forward { animation-name: slide-in-right; }
                    .slide-backward { animation-name: slide-in-left; }

                    @keyframes slide-in-right {
                        from { opacity: 0; transform: translateX(100px); }
                        to { opacity: 1; transform: translateX(0); }
                    }

                    @keyframes slide-in-left {
                        from { opacity: 0; transform: translateX(-100px); }
                        to { opacity: 1; transform: translateX(0); }
                    }

                    .corner-grid {
                        position: absolute;
                        width: clamp(8rem, 18vw, 16rem);
                        height: clamp(8rem, 18vw, 16rem);
                        pointer-events: none;
                        z-index: 10;
                    }

                    .corner-grid svg {
                        width: 100%;
                        height: 100%;
                    }

                    .grid-bottom-left { bottom: 0; left: 0; }
                    .grid-top-right { top: 0; right: 0; }

                    .card-logo {
                        position: absolute;
                        top: 1.5rem;
                        left: 1.5rem;
                        z-index: 30;
                        animation: logo-spin-in 0.8s ease-out 0.2s both, logo-wobble 4s ease-in-out 1s infinite;
                    }

                    .card-logo-image {
                        width: 3rem;
                        height: 3rem;
                        object-fit: contain;
                    }

                    @keyframes logo-spin-in {
                        from { transform: scale(0) rotate(-180deg); }
                        to { transform: scale(1) rotate(0); }
                    }

                    @keyframes logo-wobble {
                        0%, 100% { transform: rotate(0) scale(1); }
                        33% { transform: rotate(5deg) scale(1.05); }
                        66% { transform: rotate(-5deg) scale(1); }
                    }

                    .card-body {
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: flex-end;
                        text-align: center;
                        padding: 2rem 2rem 8rem;
                    }

                    .illustration-area {
                        position: relative;
                        width: 100%;
                        flex: 1;
                        min-height: 300px;
                        margin-bottom: 2rem;
                        animation: grow-in 0.5s ease-out 0.3s backwards;
                    }

                    @keyframes grow-in {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }

                    @keyframes rise-in {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }

                    .title-area {
                        margin: 0 0 1rem;
                        font-size: clamp(1.5rem, 5vw, 4.5rem);
                        font-weight: 900;
                        letter-spacing: 0.025em;
                        color: #111827;
                        animation: rise-in 0.5s ease-out 0.4s backwards;
                    }

                    .description {
                        max-width: 48rem;
                        margin: 0 0 2rem;
                        font-size: clamp(0.875rem, 2vw, 1.25rem);
                        line-height: 1.6;
                        color: #4b5563;
                        min-height: 4.8em;
                        animation: rise-in 0.5s ease-out 0.5s backwards;
                    }

                    .card-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                    }

                    .stagger-item {
                        animation: rise-in 0.4s ease-out backwards;
                    }

                    .back-button, .primary-button {
                        min-width: 140px;
                        padding: 1rem 2.5rem;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        font-weight: 600;
                        cursor: pointer;
                        touch-action: manipulation;
                    }

                    .back-button {
                        background: white;
                        color: #111827;
                        border: 2px solid #111827;
                    }

                    .primary-button {
                        background: linear-gradient(to right, #000, #1f2937);
                        color: white;
                        border: none;
                    }

                    .primary-label {
                        position: relative;
                        z-index: 10;
                    }

                    .card-indicators {
                        position: absolute;
                        bottom: 1.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 0.75rem;
                        z-index: 30;
                        animation: page-fade-in 0.5s ease-out 0.7s backwards;
                    }

                    .indicator {
                        width: 0.75rem;
                        height: 0.75rem;
                        padding: 0;
                        border: none;
                        border-radius: 50%;
                        background: #d1d5db;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .indicator.active {
                        background: #2563eb;
                        transform: scale(1.25);
                    }

                    .translate-widget {
                        position: absolute;
                        bottom: 1.5rem;
                        left: 1.5rem;
                        z-index: 30;
                        padding: 0.5rem 0.75rem;
                        background: rgba(255, 255, 255, 0.9);
                        border: 1px solid #e5e7eb;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        animation: widget-slide-in 0.5s ease-out 0.8s backwards;
                    }

                    @keyframes widget-slide-in {
                        from { opacity: 0; transform: translateX(-20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }

                    @media (max-width: 640px) {
                        .card-body {
                            padding: 1rem 1rem 5rem;
                        }

                        .back-button, .primary-button {
                            min-width: 120px;
                            padding: 0.75rem 1.5rem;
                            font-size: 0.875rem;
                        }
                    }
                "#}
            </style>
        </main>
    }
}
