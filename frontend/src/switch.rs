use crate::router::Route;

use yew::prelude::*;

pub fn switch(routes: Route) -> Html {
    use crate::components::*;

    match routes {
        Route::Home | Route::Blogs => html! { <BlogList/> },
        Route::AddBlog => html! { <AddBlog/> },
        Route::Login => html! { <Login/> },
        Route::SignUp => html! { <SignUp/> },
        Route::NotFound => html! { <Error msg={"Not Found"} code=404 /> },
    }
}
