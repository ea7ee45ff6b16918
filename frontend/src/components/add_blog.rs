// Add-blog page; the author comes from the stored session
//

use crate::components::imports::*;
use gloo_storage::{LocalStorage, Storage};
use interfacing::blogs::BlogPayload;
use interfacing::users::User;

fn session_author() -> String {
    LocalStorage::get::<User>("session")
        .map(|user| user.name)
        .unwrap_or_else(|_| "anonymous".into())
}

#[function_component(AddBlog)]
pub fn add_blog() -> Html {
    let title_ref = use_node_ref();
    let content_ref = use_node_ref();

    let onsubmit = {
        let title_ref = title_ref.clone();
        let content_ref = content_ref.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let title = title_ref.cast::<HtmlInputElement>().unwrap().value();
            let content = content_ref.cast::<HtmlTextAreaElement>().unwrap().value();

            wasm_bindgen_futures::spawn_local(async move {
                let payload = BlogPayload {
                    title,
                    content,
                    author: session_author(),
                };

                let request = match Request::static_post(routes().api.blogs.index).json(&payload) {
                    Ok(request) => request,
                    Err(e) => return console::error!(e.to_string()),
                };

                match request.send().await {
                    Ok(r) if r.ok() => {
                        r.log_status();
                        let _ = gloo_utils::window()
                            .location()
                            .set_href(&routes().root.blogs.get().complete());
                    }
                    Ok(r) => r.log_status(),
                    Err(e) => console::error!(e.to_string()),
                }
            });
        })
    };

    html! {
        <main>
            <h2>{ "Add Blog" }</h2>
            <form {onsubmit}>
                <input ref={title_ref} type="text" placeholder="Title" required=true />
                <textarea ref={content_ref} placeholder="Content" required=true />
                <button type="submit">{ "Publish" }</button>
            </form>
        </main>
    }
}
