//! Pointer-follow tilt for link cards. The angle math is separate from the
//! event wiring so it can be tested without a DOM.

use yew::prelude::*;

const MAX_TILT_DEG: f64 = 10.0;
const REST_TRANSFORM: &str = "perspective(900px) rotateX(0deg) rotateY(0deg)";

/// Rotation for a pointer at the given offset from the card centre,
/// normalised to [-1, 1] per axis. Out-of-range offsets are clamped so a
/// fast pointer exit cannot over-rotate the card.
pub fn tilt_angles(nx: f64, ny: f64) -> (f64, f64) {
    let nx = nx.clamp(-1.0, 1.0);
    let ny = ny.clamp(-1.0, 1.0);
    (-ny * MAX_TILT_DEG, nx * MAX_TILT_DEG)
}

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let node = use_node_ref();
    let transform = use_state(|| AttrValue::from(REST_TRANSFORM));

    let onmousemove = {
        let node = node.clone();
        let transform = transform.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(el) = node.cast::<web_sys::Element>() {
                let rect = el.get_bounding_client_rect();
                if rect.width() <= 0.0 || rect.height() <= 0.0 {
                    return;
                }
                let nx = (e.client_x() as f64 - rect.left()) / rect.width() * 2.0 - 1.0;
                let ny = (e.client_y() as f64 - rect.top()) / rect.height() * 2.0 - 1.0;
                let (rx, ry) = tilt_angles(nx, ny);
                transform.set(AttrValue::from(format!(
                    "perspective(900px) rotateX({rx:.2}deg) rotateY({ry:.2}deg)"
                )));
            }
        })
    };

    let onmouseleave = {
        let transform = transform.clone();
        Callback::from(move |_: MouseEvent| transform.set(AttrValue::from(REST_TRANSFORM)))
    };

    html! {
        <a
            ref={node}
            class={classes!("tilt-card", props.class.clone())}
            style={format!("transform: {};", *transform)}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_point_has_no_rotation() {
        assert_eq!(tilt_angles(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn pointer_edges_map_to_full_tilt() {
        assert_eq!(tilt_angles(1.0, 0.0), (0.0, MAX_TILT_DEG));
        assert_eq!(tilt_angles(0.0, 1.0), (-MAX_TILT_DEG, 0.0));
    }

    #[test]
    fn offsets_beyond_the_card_are_clamped() {
        assert_eq!(tilt_angles(5.0, -3.0), tilt_angles(1.0, -1.0));
    }
}
