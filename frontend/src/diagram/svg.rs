use yew::prelude::*;

use super::flowchart;
use super::layout::{ArrowHead, Connector, Layout, PlacedNode, Point, Primitive, Shape, TextRole};
use crate::components::reveal::use_in_view;

/// Compact decimal for SVG attributes: at most three decimals, no trailing
/// zeros, never `-0`.
pub fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

pub fn path_data(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{} {} {}", if i == 0 { "M" } else { "L" }, num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn arrow_data(arrow: &ArrowHead) -> String {
    format!("{} Z", path_data(&arrow.points()))
}

pub fn diamond_data(node: &PlacedNode) -> String {
    format!("{} Z", path_data(&node.diamond_points()))
}

#[derive(Properties, PartialEq)]
pub struct FlowchartProps {
    /// Prefix for gradient/filter ids, unique per page.
    #[prop_or(AttrValue::from("flow"))]
    pub id_prefix: AttrValue,
}

#[function_component(Flowchart)]
pub fn flowchart_view(props: &FlowchartProps) -> Html {
    let container = use_node_ref();
    let revealed = use_in_view(container.clone(), 0.2, "0px");
    let layout = use_memo(|_| flowchart::lead_automation(), ());

    let layout = match layout.as_ref() {
        Ok(layout) => layout,
        Err(err) => {
            log::error!("Flowchart configuration is invalid: {}", err);
            return html! {};
        }
    };

    let grad_id = format!("{}-grad", props.id_prefix);
    let glow_id = format!("{}-glow", props.id_prefix);

    html! {
        <div
            id="process-flowchart"
            ref={container}
            class={classes!("flowchart", revealed.then(|| "revealed"))}
        >
            <svg
                width="100%"
                viewBox={format!("0 0 {} {}", num(layout.width), num(layout.height))}
                role="img"
                aria-label="Automation flowchart"
            >
                <defs>
                    <linearGradient id={grad_id.clone()} x1="0" y1="0" x2="1" y2="0">
                        <stop offset="0%" stop-color="#22d3ee" />
                        <stop offset="50%" stop-color="#8b5cf6" />
                        <stop offset="100%" stop-color="#ec4899" />
                    </linearGradient>
                    <filter id={glow_id.clone()} x="-20%" y="-20%" width="140%" height="140%">
                        <feGaussianBlur in="SourceGraphic" stdDeviation="0.6" result="b" />
                        <feColorMatrix in="b" type="matrix" values="1 0 0 0 0  0 1 0 0 0  0 0 1 0 0  0 0 0 0.85 0" />
                    </filter>
                </defs>
                { for layout.primitives().into_iter().map(|p| render_primitive(layout, p, &grad_id, &glow_id)) }
            </svg>
            <style>
                {r#"
                    .flowchart {
                        width: 620px;
                        max-width: 100%;
                        opacity: 0;
                        transform: perspective(900px) rotateY(-8deg) scale(0.98);
                        transition: opacity 0.55s ease-out, transform 0.55s ease-out;
                    }
                    .flowchart.revealed {
                        opacity: 1;
                        transform: none;
                    }
                    .flowchart .flow {
                        stroke-dasharray: 26 18;
                        animation: flow-travel 1.6s linear infinite;
                        opacity: 0.9;
                        stroke-linecap: round;
                    }
                    @keyframes flow-travel { to { stroke-dashoffset: -64; } }
                    .flowchart .draw {
                        stroke-dasharray: 1;
                        stroke-dashoffset: 1;
                    }
                    .flowchart .shaft {
                        transform-box: fill-box;
                        transform-origin: 50% 0;
                        transform: scaleY(0);
                    }
                    .flowchart .tip,
                    .flowchart .node {
                        opacity: 0;
                    }
                    .flowchart .node {
                        transform-box: fill-box;
                        transform-origin: 50% 50%;
                    }
                    .flowchart.revealed .draw { animation: flow-draw 0.9s ease-out forwards; }
                    .flowchart.revealed .shaft { animation: flow-grow 0.6s ease-out forwards; }
                    .flowchart.revealed .tip { animation: flow-fade 0.3s ease-out forwards; }
                    .flowchart.revealed .node { animation: flow-pop 0.35s ease-out forwards; }
                    @keyframes flow-draw { to { stroke-dashoffset: 0; } }
                    @keyframes flow-grow { to { transform: scaleY(1); } }
                    @keyframes flow-fade { to { opacity: 0.98; } }
                    @keyframes flow-pop {
                        from { opacity: 0; transform: scale(0.96); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .flowchart .flow { animation: none; }
                        .flowchart.revealed .draw,
                        .flowchart.revealed .shaft,
                        .flowchart.revealed .tip,
                        .flowchart.revealed .node { animation-duration: 0.01s; }
                    }
                "#}
            </style>
        </div>
    }
}

fn delay(seconds: f64) -> String {
    format!("animation-delay: {}s", num(seconds))
}

fn render_primitive(layout: &Layout, primitive: Primitive<'_>, grad_id: &str, glow_id: &str) -> Html {
    let paint = format!("url(#{})", grad_id);
    let glow = format!("url(#{})", glow_id);

    match primitive {
        Primitive::Connector(i, edge) => {
            let tip = html! {
                <path
                    class="tip"
                    style={delay(0.38 + i as f64 * 0.05)}
                    d={arrow_data(&edge.arrow)}
                    fill={paint.clone()}
                />
            };
            match &edge.connector {
                Connector::Shaft { x, y, width, height } => {
                    let cx = x + width / 2.0;
                    let guide = path_data(&[Point::new(cx, *y), Point::new(cx, y + height)]);
                    html! {
                        <g pointer-events="none">
                            <path class="flow" d={guide} stroke={paint.clone()} stroke-width={num(layout.stroke_width)} fill="none" filter={glow} />
                            <rect
                                class="shaft"
                                style={delay(0.22 + i as f64 * 0.05)}
                                x={num(*x)}
                                y={num(*y)}
                                width={num(*width)}
                                height={num(*height)}
                                rx={num(width / 2.0)}
                                fill={paint.clone()}
                            />
                            { tip }
                        </g>
                    }
                }
                Connector::Path { points } => {
                    let d = path_data(points);
                    html! {
                        <g
                            fill="none"
                            stroke={paint.clone()}
                            stroke-width={num(layout.stroke_width)}
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            pointer-events="none"
                        >
                            <path class="flow" d={d.clone()} filter={glow} />
                            <path class="draw" style={delay(0.12 + i as f64 * 0.06)} d={d} pathLength="1" vector-effect="non-scaling-stroke" />
                            { tip }
                        </g>
                    }
                }
            }
        }
        Primitive::Node(i, node) => {
            let shape = match node.shape {
                Shape::Diamond => html! {
                    <path d={diamond_data(node)} fill="rgba(17,17,17,.92)" stroke="#2a2a2a" stroke-width="1.25" vector-effect="non-scaling-stroke" />
                },
                Shape::Rect => html! {
                    <rect
                        x={num(node.center.x - node.w / 2.0)}
                        y={num(node.center.y - node.h / 2.0)}
                        width={num(node.w)}
                        height={num(node.h)}
                        rx={num(node.corner_radius)}
                        fill="rgba(17,17,17,.92)"
                        stroke="#2a2a2a"
                        stroke-width="1.25"
                        vector-effect="non-scaling-stroke"
                    />
                },
            };
            html! {
                <g class="node" style={delay(0.14 + i as f64 * 0.03)}>
                    { shape }
                    <g text-anchor="middle" pointer-events="none">
                        { for node.text.iter().map(|line| {
                            let (fill, weight) = match line.role {
                                TextRole::Title => ("#e5e7eb", "600"),
                                TextRole::Subtitle => ("#9ca3af", "400"),
                            };
                            html! {
                                <text
                                    x={num(line.at.x)}
                                    y={num(line.at.y)}
                                    font-size={num(line.font_size)}
                                    font-weight={weight}
                                    fill={fill}
                                >
                                    { line.text.clone() }
                                </text>
                            }
                        }) }
                    </g>
                </g>
            }
        }
        Primitive::Label(label) => html! {
            <text
                x={num(label.at.x)}
                y={num(label.at.y)}
                font-size="11"
                fill="#cbd5e1"
                text-anchor="middle"
                pointer-events="none"
            >
                { label.text.clone() }
            </text>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_numbers_compactly() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(0.3333333), "0.333");
        assert_eq!(num(-0.0001), "0");
        assert_eq!(num(-4.25), "-4.25");
    }

    #[test]
    fn builds_move_then_line_commands() {
        let d = path_data(&[Point::new(0.0, 1.5), Point::new(10.0, 1.5), Point::new(10.0, 20.0)]);
        assert_eq!(d, "M 0 1.5 L 10 1.5 L 10 20");
    }

    #[test]
    fn arrow_points_down_at_tip() {
        let arrow = ArrowHead { tip: Point::new(100.0, 50.0), half_width: 6.0, height: 8.0 };
        assert_eq!(arrow_data(&arrow), "M 94 42 L 106 42 L 100 50 Z");
    }
}
