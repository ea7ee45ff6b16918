use crate::components::imports::*;

#[derive(Properties, PartialEq)]
pub struct ErrorProps {
    pub msg: AttrValue,
    pub code: u16,
}

#[function_component(Error)]
pub fn error(props: &ErrorProps) -> Html {
    html! {
        <main>
            <h1>{ format!("{} {}", props.code, props.msg) }</h1>
        </main>
    }
}
