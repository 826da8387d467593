use yew::prelude::*;

use crate::utils::reveal::use_in_view;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    /// Keep the content visible after the first sighting.
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades and lifts its children in when they scroll into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.once);
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));
    html! {
        <div
            ref={node}
            class={classes!("fade-in", visible.then(|| "visible"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
