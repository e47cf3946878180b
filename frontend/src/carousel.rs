use std::rc::Rc;

use log::error;
use thiserror::Error;
use yew::Reducible;

pub const SLIDE_COUNT: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("slide index {0} is out of range, expected 0..{}", SLIDE_COUNT)]
    InvalidIndex(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideId {
    Welcome,
    AiLearning,
    ReadyToLearn,
    Testimonials,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Illustration {
    Learning,
    Ai,
    Ready,
    Testimonials,
}

/// What the big button on a slide does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    Advance,
    Register,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub description: &'static str,
    pub primary_label: &'static str,
    pub show_back: bool,
    pub illustration: Illustration,
}

static SLIDES: [Slide; SLIDE_COUNT] = [
    Slide {
        title: "Welcome to the Future of Learning",
        description: "Empowering every child with personalized learning paths. Built for Bharat, made to unlock potential through smart education. Simple. Inclusive. Transformative.",
        primary_label: "Continue",
        show_back: false,
        illustration: Illustration::Learning,
    },
    Slide {
        title: "Dynamic AI Learning Environments",
        description: "Our intelligent system understands each learner's pace. Backed by AI, powered by diagnostics, ensuring no child is left behind. Learn in your own language, your own way.",
        primary_label: "Continue",
        show_back: true,
        illustration: Illustration::Ai,
    },
    Slide {
        title: "Ready to Learn?",
        description: "Start your journey with just one click. Choose your role and unlock a world of learning. Let's get started!",
        primary_label: "Continue",
        show_back: true,
        illustration: Illustration::Ready,
    },
    Slide {
        title: "Testimonials",
        description: "Embark on an exciting journey to discover how water moves through our planet! This interactive module combines stunning animations, fun experiments and engaging quizzes to help you understand the water cycle like never before.",
        primary_label: "Register",
        show_back: true,
        illustration: Illustration::Testimonials,
    },
];

impl SlideId {
    pub const ALL: [SlideId; SLIDE_COUNT] = [
        SlideId::Welcome,
        SlideId::AiLearning,
        SlideId::ReadyToLearn,
        SlideId::Testimonials,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn slide(self) -> &'static Slide {
        &SLIDES[self.index()]
    }

    pub fn primary_action(self) -> PrimaryAction {
        match self {
            SlideId::Testimonials => PrimaryAction::Register,
            _ => PrimaryAction::Advance,
        }
    }
}

/// Which way the last transition went; drives the slide-in animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn class(self) -> &'static str {
        match self {
            Direction::Forward => "slide-forward",
            Direction::Backward => "slide-backward",
        }
    }

    /// The card being replaced leaves on the side opposite the one the new
    /// card enters from.
    pub fn exit_class(self) -> &'static str {
        match self {
            Direction::Forward => "slide-out-left",
            Direction::Backward => "slide-out-right",
        }
    }
}

/// Current position in the onboarding cards. Always a valid index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    direction: Direction,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current(&self) -> SlideId {
        SlideId::ALL[self.index]
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % SLIDE_COUNT;
        self.direction = Direction::Forward;
    }

    pub fn retreat(&mut self) {
        self.index = (self.index + SLIDE_COUNT - 1) % SLIDE_COUNT;
        self.direction = Direction::Backward;
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= SLIDE_COUNT {
            return Err(CarouselError::InvalidIndex(index));
        }
        if index != self.index {
            self.direction = if index > self.index {
                Direction::Forward
            } else {
                Direction::Backward
            };
            self.index = index;
        }
        Ok(())
    }
}

pub enum CarouselAction {
    Advance,
    Retreat,
    JumpTo(usize),
}

/// Transitions always apply to the latest state, not the one a handler saw
/// when it was rendered.
impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Advance => next.advance(),
            CarouselAction::Retreat => next.retreat(),
            CarouselAction::JumpTo(index) => {
                if let Err(e) = next.jump_to(index) {
                    error!("Ignoring slide jump: {}", e);
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_advances_come_back_to_the_start() {
        let mut carousel = Carousel::new();
        let mut seen = Vec::new();
        for _ in 0..4 {
            carousel.advance();
            seen.push(carousel.index());
        }
        assert_eq!(seen, vec![1, 2, 3, 0]);
        assert_eq!(carousel.current(), SlideId::Welcome);
    }

    #[test]
    fn four_retreats_come_back_to_the_start() {
        let mut carousel = Carousel::new();
        let mut seen = Vec::new();
        for _ in 0..4 {
            carousel.retreat();
            seen.push(carousel.index());
        }
        assert_eq!(seen, vec![3, 2, 1, 0]);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn jump_sets_exact_index_and_is_idempotent() {
        for target in 0..SLIDE_COUNT {
            let mut carousel = Carousel::new();
            carousel.jump_to(target).unwrap();
            assert_eq!(carousel.index(), target);
            let snapshot = carousel;
            carousel.jump_to(target).unwrap();
            assert_eq!(carousel, snapshot);
        }
    }

    #[test]
    fn out_of_range_jump_is_rejected_without_moving() {
        let mut carousel = Carousel::new();
        carousel.advance();
        assert_eq!(carousel.jump_to(4), Err(CarouselError::InvalidIndex(4)));
        assert_eq!(carousel.jump_to(usize::MAX), Err(CarouselError::InvalidIndex(usize::MAX)));
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn jump_direction_follows_the_target() {
        let mut carousel = Carousel::new();
        carousel.jump_to(3).unwrap();
        assert_eq!(carousel.direction(), Direction::Forward);
        carousel.jump_to(1).unwrap();
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn outgoing_card_leaves_opposite_the_incoming_one() {
        assert_eq!(Direction::Forward.class(), "slide-forward");
        assert_eq!(Direction::Forward.exit_class(), "slide-out-left");
        assert_eq!(Direction::Backward.class(), "slide-backward");
        assert_eq!(Direction::Backward.exit_class(), "slide-out-right");
    }

    #[test]
    fn third_advance_lands_on_testimonials_with_register_action() {
        let mut carousel = Carousel::new();
        assert_eq!(carousel.current().slide().title, "Welcome to the Future of Learning");
        for _ in 0..3 {
            carousel.advance();
        }
        let slide = carousel.current();
        assert_eq!(carousel.index(), 3);
        assert_eq!(slide, SlideId::Testimonials);
        assert_eq!(slide.slide().title, "Testimonials");
        assert_eq!(slide.slide().primary_label, "Register");
        assert_eq!(slide.primary_action(), PrimaryAction::Register);
    }

    #[test]
    fn only_the_first_slide_hides_back() {
        let backs: Vec<bool> = SlideId::ALL.iter().map(|s| s.slide().show_back).collect();
        assert_eq!(backs, vec![false, true, true, true]);
        for slide in &SlideId::ALL[..3] {
            assert_eq!(slide.primary_action(), PrimaryAction::Advance);
        }
    }

    #[test]
    fn slide_ids_are_listed_in_index_order() {
        for (i, slide) in SlideId::ALL.iter().enumerate() {
            assert_eq!(slide.index(), i);
        }
    }

    #[test]
    fn queued_actions_each_see_the_previous_result() {
        let state = Rc::new(Carousel::new());
        let state = state.reduce(CarouselAction::Advance);
        let state = state.reduce(CarouselAction::Advance);
        assert_eq!(state.index(), 2);

        let state = state.reduce(CarouselAction::Retreat);
        let state = state.reduce(CarouselAction::Retreat);
        let state = state.reduce(CarouselAction::Retreat);
        assert_eq!(state.index(), 3);
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn rejected_jump_keeps_the_same_state() {
        let state = Rc::new(Carousel::new()).reduce(CarouselAction::JumpTo(2));
        let after = Rc::clone(&state).reduce(CarouselAction::JumpTo(7));
        assert!(Rc::ptr_eq(&state, &after));
        assert_eq!(after.index(), 2);
    }
}
