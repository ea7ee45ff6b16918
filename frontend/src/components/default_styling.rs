use crate::components::theme;

use stylist::yew::Global;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    #[prop_or_default]
    pub dark: bool,
}

#[function_component(DefaultStyling)]
pub fn default_styling(props: &Props) -> Html {
    let palette = theme::palette(props.dark);
    let css = format!(
        "body {{ margin: 0; font-family: sans-serif; background: {}; color: {}; }}",
        palette.bg, palette.text
    );

    html! {
        <>
            <Global css={css} />
            { props.children.clone() }
        </>
    }
}
