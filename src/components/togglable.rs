use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TogglableProps {
    pub button_label: AttrValue,
    /// Controlled by the parent so it can collapse the content itself,
    /// e.g. after a form submit.
    pub visible: bool,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Togglable)]
pub fn togglable(props: &TogglableProps) -> Html {
    let toggle = props.on_toggle.reform(|_: MouseEvent| ());

    if props.visible {
        html! {
            <div class="togglable-content">
                { for props.children.iter() }
                <button onclick={toggle}>{"cancel"}</button>
            </div>
        }
    } else {
        html! {
            <div>
                <button onclick={toggle}>{ props.button_label.clone() }</button>
            </div>
        }
    }
}
