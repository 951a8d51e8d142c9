use std::rc::Rc;

use gloo::timers::callback::Interval;
use shared::Carousel;
use yew::prelude::*;

pub enum CarouselAction {
    Next,
    Prev,
    Resize(usize),
}

#[derive(PartialEq)]
struct CarouselState {
    carousel: Carousel,
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = self.carousel;
        match action {
            CarouselAction::Next => carousel.next(),
            CarouselAction::Prev => carousel.prev(),
            CarouselAction::Resize(len) => carousel.resize(len),
        }
        Rc::new(Self { carousel })
    }
}

pub struct UseCarouselResult {
    pub carousel: Carousel,
    pub next: Callback<MouseEvent>,
    pub prev: Callback<MouseEvent>,
}

/// Slide index over `len` items. `autoplay_ms` advances it on a timer;
/// `None` leaves it to the prev/next buttons.
#[hook]
pub fn use_carousel(len: usize, autoplay_ms: Option<u32>) -> UseCarouselResult {
    let state = use_reducer(|| CarouselState {
        carousel: Carousel::new(len),
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with(len, move |len| {
            dispatcher.dispatch(CarouselAction::Resize(*len));
            || ()
        });
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with(autoplay_ms, move |autoplay_ms| {
            let interval = autoplay_ms.map(|ms| {
                Interval::new(ms, move || dispatcher.dispatch(CarouselAction::Next))
            });
            move || drop(interval)
        });
    }

    let next = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Next))
    };

    let prev = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Prev))
    };

    UseCarouselResult {
        carousel: state.carousel,
        next,
        prev,
    }
}
