use dioxus::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

const DOT_COUNT: usize = 20;

// one decorative dot.  positions are percentages of the window so the layout
// doesn't depend on its size at mount time
#[derive(Clone, Debug, PartialEq)]
struct Dot {
    left: f32,
    top: f32,
    size: f32,
    opacity: f32,
    dx: f32,
    dy: f32,
    duration: f32,
}

impl Dot {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Dot {
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            size: rng.random_range(3.0..13.0),
            opacity: rng.random_range(0.1..0.6),
            dx: rng.random_range(-40.0..40.0),
            dy: rng.random_range(-40.0..40.0),
            duration: rng.random_range(20.0..50.0),
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; opacity: {:.2}; \
             --dx: {:.1}vw; --dy: {:.1}vh; animation-duration: {:.1}s;",
            self.left,
            self.top,
            self.size,
            self.size,
            self.opacity,
            self.dx,
            self.dy,
            self.duration
        )
    }
}

// Background
//
// a colour-cycling radial gradient with a handful of dots drifting over it.  all
// of the motion is css animation, so this only renders once
#[component]
pub fn Background() -> Element {
    let dots = use_hook(|| {
        let mut rng = SmallRng::seed_from_u64(chrono::Utc::now().timestamp_millis() as u64);
        (0..DOT_COUNT)
            .map(|_| Dot::random(&mut rng).style())
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "background-layer", "aria-hidden": "true",
            div { class: "background-gradient" }
            for (i , style) in dots.iter().enumerate() {
                div { key: "{i}", class: "floating-dot", style: "{style}" }
            }
        }
    }
}
