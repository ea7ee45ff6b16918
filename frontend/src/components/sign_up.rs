// Signup page, mirrors the login flow
//

use crate::components::imports::*;
use gloo_storage::{LocalStorage, Storage};
use interfacing::users::{SignupForm, User};

#[function_component(SignUp)]
pub fn sign_up() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let name = name_ref.cast::<HtmlInputElement>().unwrap().value();
            let email = email_ref.cast::<HtmlInputElement>().unwrap().value();
            let password = password_ref.cast::<HtmlInputElement>().unwrap().value();

            wasm_bindgen_futures::spawn_local(async move {
                let form = SignupForm {
                    name,
                    email,
                    password,
                };

                let request = match Request::static_post(routes().api.users.signup).json(&form) {
                    Ok(request) => request,
                    Err(e) => return console::error!(e.to_string()),
                };

                match request.send().await {
                    Ok(r) if r.ok() => {
                        r.log_status();
                        if let Ok(user) = r.json::<User>().await {
                            let _ = LocalStorage::set("session", &user);
                        }
                        let _ = gloo_utils::window()
                            .location()
                            .set_href(&routes().root.home.get().complete());
                    }
                    Ok(r) => r.log_status(),
                    Err(e) => console::error!(e.to_string()),
                }
            });
        })
    };

    html! {
        <main>
            <h2>{ "SignUp" }</h2>
            <form {onsubmit}>
                <input ref={name_ref} type="text" placeholder="Name" required=true />
                <input ref={email_ref} type="email" placeholder="Email" required=true />
                <input ref={password_ref} type="password" placeholder="Password" required=true />
                <button type="submit">{ "SignUp" }</button>
            </form>
        </main>
    }
}
