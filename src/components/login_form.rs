use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Credentials;

#[derive(Properties, PartialEq, Clone)]
pub struct LoginFormProps {
    pub on_login: Callback<Credentials>,
}

/// Username/password form. Inputs keep their values when a login fails; the
/// form unmounts on success.
#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_login.emit(Credentials {
                username: (*username).clone(),
                password: (*password).clone(),
            });
        })
    };

    html! {
        <form onsubmit={on_submit}>
            <div>
                <label>
                    {"username"}
                    <input type="text" value={(*username).clone()} oninput={on_username} />
                </label>
            </div>
            <div>
                <label>
                    {"password"}
                    <input type="password" value={(*password).clone()} oninput={on_password} />
                </label>
            </div>
            <button type="submit">{"login"}</button>
        </form>
    }
}
