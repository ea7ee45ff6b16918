// Blog list page
//

use crate::components::imports::*;
use interfacing::blogs::Blog;

#[function_component(BlogList)]
pub fn blog_list() -> Html {
    let blogs = use_state(|| None::<Vec<Blog>>);

    {
        let blogs = blogs.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    match Request::static_get(routes().api.blogs.index).send().await {
                        Ok(r) => {
                            r.log_status();
                            match r.json::<Vec<Blog>>().await {
                                Ok(list) => blogs.set(Some(list)),
                                Err(e) => console::error!(e.to_string()),
                            }
                        }
                        Err(e) => console::error!(e.to_string()),
                    }
                });
                || ()
            },
            (),
        );
    }

    match &*blogs {
        None => html! { <p>{ "Loading..." }</p> },
        Some(list) if list.is_empty() => html! { <p>{ "No blogs yet" }</p> },
        Some(list) => html! {
            <main>
                { for list.iter().map(|blog| html! {
                    <article key={blog.id.clone()}>
                        <h3>{ blog.title.clone() }</h3>
                        <p>{ blog.content.clone() }</p>
                        <small>{ format!("by {}", blog.author) }</small>
                    </article>
                }) }
            </main>
        },
    }
}
