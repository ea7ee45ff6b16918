// Top bar: a pure mapping from (is_logged_in, is_darkmode) to markup.
// Session and theme state are injected as props, never read from anywhere else.
//

use crate::components::theme;

use static_routes::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub is_logged_in: bool,
    pub is_darkmode: bool,
    #[prop_or_default]
    pub on_toggle_theme: Callback<()>,
    #[prop_or_default]
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let palette = theme::palette(props.is_darkmode);
    let paths = routes().root;

    let bar_style = format!(
        "display:flex;align-items:center;justify-content:space-between;\
         padding:0.5rem 1rem;background:{};color:{}",
        palette.bg, palette.text
    );
    let link_style = format!("margin-right:1rem;color:{}", palette.accent);

    let toggle = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let logout = {
        let cb = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <header style={bar_style}>
            <a href={paths.home.get().complete()} style={link_style.clone()}>
                <h2>{ "BlogsApp" }</h2>
            </a>
            <nav>
                if props.is_logged_in {
                    <a href={paths.blogs.get().complete()} style={link_style.clone()}>{ "All Blogs" }</a>
                    <a href={paths.add_blog.get().complete()} style={link_style.clone()}>{ "Add Blog" }</a>
                    <button onclick={logout}>{ "Logout" }</button>
                } else {
                    <a href={paths.login.get().complete()} style={link_style.clone()}>{ "Login" }</a>
                    <a href={paths.sign_up.get().complete()} style={link_style.clone()}>{ "SignUp" }</a>
                }
                <button onclick={toggle}>
                    { if props.is_darkmode { "Light" } else { "Dark" } }
                </button>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(props: HeaderProps) -> String {
        futures::executor::block_on(yew::LocalServerRenderer::<Header>::with_props(props).render())
    }

    fn logged_out() -> HeaderProps {
        HeaderProps {
            is_logged_in: false,
            is_darkmode: false,
            on_toggle_theme: Callback::noop(),
            on_logout: Callback::noop(),
        }
    }

    #[test]
    fn shows_the_title() {
        let html = render(logged_out());

        assert!(html.contains("BlogsApp"));
    }

    #[test]
    fn logged_out_shows_login_and_sign_up() {
        let html = render(logged_out());

        assert!(html.contains("Login"));
        assert!(html.contains("SignUp"));
    }

    #[test]
    fn logged_in_hides_login_and_sign_up() {
        let html = render(HeaderProps {
            is_logged_in: true,
            ..logged_out()
        });

        assert!(!html.contains("Login"));
        assert!(!html.contains("SignUp"));
        assert!(html.contains("Logout"));
    }

    #[test]
    fn theme_flag_changes_the_palette() {
        let light = render(logged_out());
        let dark = render(HeaderProps {
            is_darkmode: true,
            ..logged_out()
        });

        assert!(light.contains(crate::components::theme::LIGHT.bg));
        assert!(dark.contains(crate::components::theme::DARK.bg));
    }
}
