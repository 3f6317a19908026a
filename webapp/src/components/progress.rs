use dioxus::prelude::*;

// a circle of this radius has a circumference of 100, so the dash pattern can be
// given directly in percent
const RING_RADIUS: f32 = 15.9155;

#[derive(Clone, PartialEq, Props)]
pub struct ProgressRingProps {
    // 0-100
    value: f32,
    label: String,
    #[props(default = 56)]
    size: u32,
    #[props(default)]
    color: Option<String>,
}

#[component]
pub fn ProgressRing(props: ProgressRingProps) -> Element {
    let value = props.value.clamp(0.0, 100.0);
    let stroke = props.color.unwrap_or_else(|| String::from("var(--primary)"));

    rsx! {
        svg {
            class: "progress-ring",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 36 36",
            role: "img",
            "aria-label": "{props.label}",
            circle {
                class: "track",
                cx: "18",
                cy: "18",
                r: "{RING_RADIUS}",
                fill: "none",
                stroke_width: "3",
            }
            circle {
                class: "value",
                cx: "18",
                cy: "18",
                r: "{RING_RADIUS}",
                fill: "none",
                stroke: "{stroke}",
                stroke_width: "3",
                stroke_dasharray: "{value}, 100",
                transform: "rotate(-90 18 18)",
            }
            text {
                x: "18",
                y: "20.5",
                text_anchor: "middle",
                "{props.label}"
            }
        }
    }
}
