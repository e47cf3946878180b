use yew::prelude::*;

use crate::carousel::Illustration;
use crate::config;

/// One image placed around a slide's text. `placement` is a CSS class from
/// [`ILLUSTRATION_CSS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Artwork {
    pub file: &'static str,
    pub alt: &'static str,
    pub size: u32,
    pub placement: &'static str,
}

const fn art(file: &'static str, alt: &'static str, size: u32, placement: &'static str) -> Artwork {
    Artwork { file, alt, size, placement }
}

pub const LOGO: Artwork = art("icons/logo.svg", "Logo", 50, "card-logo-image");

const LEARNING: [Artwork; 5] = [
    art("ai_landing.png", "AI Logo", 142, "art-top-left"),
    art("comcap_landing.png", "Computer Monitor", 164, "art-top-right tilt-right"),
    art("teacher_landing.png", "Teacher", 400, "art-top-center art-hero"),
    art("cap_landing.png", "Graduation Cap and Diploma", 196, "art-bottom-left"),
    art("robo_landing.png", "Robot Teaching", 158, "art-bottom-right tilt-left"),
];

const AI: [Artwork; 4] = [
    art("book_landing.png", "Books", 180, "art-top-left"),
    art("robot_star_landing.png", "Robot Star", 180, "art-top-right"),
    art("robo_class_landing.png", "Robot Class", 300, "art-center art-hero"),
    art("bulbook_landing.png", "Bulb Books", 180, "art-bottom-right"),
];

const READY: [Artwork; 4] = [
    art("landing3_comp.png", "Computer", 180, "art-middle-left"),
    art("landing3_tv.png", "TV/Monitor", 180, "art-top-right"),
    art("landing3_man.png", "Man with Laptop", 300, "art-top-center art-hero"),
    art("landing3_kid.png", "Kid with Laptop", 180, "art-bottom-right"),
];

const TESTIMONIALS: [Artwork; 4] = [
    art("landing4_bell.png", "Bell", 120, "art-top-right"),
    art("landing4_center.png", "Center Icon", 500, "art-top-center art-hero"),
    art("landing4_msg.png", "Message Icon", 200, "art-bottom-left"),
    art("landing4_avishkar.png", "Avishkar", 160, "art-bottom-center"),
];

pub fn artwork(illustration: Illustration) -> &'static [Artwork] {
    match illustration {
        Illustration::Learning => &LEARNING,
        Illustration::Ai => &AI,
        Illustration::Ready => &READY,
        Illustration::Testimonials => &TESTIMONIALS,
    }
}

pub fn image(art: &Artwork) -> Html {
    html! {
        <img
            src={config::asset_url(art.file)}
            alt={art.alt}
            width={art.size.to_string()}
            height={art.size.to_string()}
            class={classes!("art", art.placement)}
            loading="lazy"
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct IllustrationProps {
    pub illustration: Illustration,
}

#[function_component(SlideIllustration)]
pub fn slide_illustration(props: &IllustrationProps) -> Html {
    html! {
        <div class="illustration" aria-hidden="true">
            { for artwork(props.illustration).iter().map(image) }
        </div>
    }
}

pub const ILLUSTRATION_CSS: &str = r#"
    .illustration {
        position: absolute;
        inset: 0;
        pointer-events: none;
        overflow: hidden;
    }
    .art {
        position: absolute;
        object-fit: contain;
        width: clamp(4rem, 12vw, 10rem);
        height: auto;
    }
    .art-hero { width: clamp(8rem, 24vw, 25rem); }
    .art-top-left { top: 5rem; left: 6%; }
    .art-top-right { top: 5rem; right: 6%; }
    .art-top-center { top: 2rem; left: 50%; transform: translateX(-50%); }
    .art-center { top: 50%; left: 50%; transform: translate(-50%, -50%); }
    .art-middle-left { top: 50%; left: 6%; transform: translateY(-50%); }
    .art-bottom-left { bottom: 3rem; left: 6%; }
    .art-bottom-right { bottom: 5rem; right: 6%; }
    .art-bottom-center { bottom: 3rem; left: 50%; transform: translateX(-50%); }
    .tilt-right { transform: rotate(8.37deg); }
    .tilt-left { transform: rotate(-9.6deg); }
"#;
