// Login page: posts the form, stores the session, returns home
//

use crate::components::imports::*;
use gloo_storage::{LocalStorage, Storage};
use interfacing::users::{LoginForm, User};

#[function_component(Login)]
pub fn login() -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let onsubmit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let email = email_ref.cast::<HtmlInputElement>().unwrap().value();
            let password = password_ref.cast::<HtmlInputElement>().unwrap().value();

            wasm_bindgen_futures::spawn_local(async move {
                let form = LoginForm { email, password };

                let request = match Request::static_post(routes().api.users.login).json(&form) {
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
            <h2>{ "Login" }</h2>
            <form {onsubmit}>
                <input ref={email_ref} type="email" placeholder="Email" required=true />
                <input ref={password_ref} type="password" placeholder="Password" required=true />
                <button type="submit">{ "Login" }</button>
            </form>
        </main>
    }
}
