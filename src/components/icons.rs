use dioxus::prelude::*;

#[component]
pub fn Icon(name: String, class: String) -> Element {
    let svg_content = match name.as_str() {
        "play-circle" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                path { d: "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm-2 14.5v-9l6 4.5-6 4.5z" }
            }
        },
        "pause-circle" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                path { d: "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM9 8h2v8H9V8zm4 0h2v8h-2V8z" }
            }
        },
        "replay-5" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M3 12a9 9 0 1 0 3-6.7" }
                polyline { points: "3 3 3 8 8 8" }
                text {
                    x: "12",
                    y: "15.5",
                    text_anchor: "middle",
                    font_size: "8",
                    fill: "currentColor",
                    stroke: "none",
                    "5"
                }
            }
        },
        "forward-5" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                path { d: "M21 12a9 9 0 1 1-3-6.7" }
                polyline { points: "21 3 21 8 16 8" }
                text {
                    x: "12",
                    y: "15.5",
                    text_anchor: "middle",
                    font_size: "8",
                    fill: "currentColor",
                    stroke: "none",
                    "5"
                }
            }
        },
        "minus-square" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                path { d: "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zm2 8v2h10v-2H7z" }
            }
        },
        "plus-square" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                path { d: "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2zm6 4v4H7v2h4v4h2v-4h4v-2h-4V7h-2z" }
            }
        },
        "sliders" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                line {
                    x1: "4",
                    y1: "21",
                    x2: "4",
                    y2: "14",
                }
                line {
                    x1: "4",
                    y1: "10",
                    x2: "4",
                    y2: "3",
                }
                line {
                    x1: "12",
                    y1: "21",
                    x2: "12",
                    y2: "12",
                }
                line {
                    x1: "12",
                    y1: "8",
                    x2: "12",
                    y2: "3",
                }
                line {
                    x1: "20",
                    y1: "21",
                    x2: "20",
                    y2: "16",
                }
                line {
                    x1: "20",
                    y1: "12",
                    x2: "20",
                    y2: "3",
                }
                line {
                    x1: "1",
                    y1: "14",
                    x2: "7",
                    y2: "14",
                }
                line {
                    x1: "9",
                    y1: "8",
                    x2: "15",
                    y2: "8",
                }
                line {
                    x1: "17",
                    y1: "16",
                    x2: "23",
                    y2: "16",
                }
            }
        },
        "info" => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "currentColor",
                path { d: "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z" }
            }
        },
        _ => rsx! {
            svg {
                class: "{class}",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "12", cy: "12", r: "10" }
            }
        },
    };

    svg_content
}
