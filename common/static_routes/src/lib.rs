// Single route table shared by the backend router, the backend tests
// and the frontend links, so path literals never diverge
//

pub fn routes() -> Routes {
    Routes::default()
}

#[derive(Default, Clone, Copy)]
pub struct Routes {
    pub root: RootRoutes,
    pub api: ApiRoutes,
}

#[derive(Default, Clone, Copy)]
pub struct RootRoutes {
    pub home: Home,
    pub blogs: Blogs,
    pub add_blog: AddBlog,
    pub login: Login,
    pub sign_up: SignUp,
}

#[derive(Default, Clone, Copy)]
pub struct ApiRoutes {
    pub hello: Hello,
    pub health: Health,
    pub ready: Ready,
    pub users: UserRoutes,
    pub blogs: BlogRoutes,
}

#[derive(Default, Clone, Copy)]
pub struct UserRoutes {
    pub index: UsersIndex,
    pub signup: UsersSignup,
    pub login: UsersLogin,
}

#[derive(Default, Clone, Copy)]
pub struct BlogRoutes {
    pub index: BlogsIndex,
    pub entry: BlogsEntry,
}

/// A path split into the mount prefix and the within-group postfix.
/// `postfix()` feeds the router, `complete()` feeds clients.
pub struct PathSpec {
    prefix: &'static str,
    postfix: &'static str,
    base: Option<String>,
}

impl PathSpec {
    fn new(prefix: &'static str, postfix: &'static str) -> Self {
        Self {
            prefix,
            postfix,
            base: None,
        }
    }

    pub fn postfix(&self) -> &'static str {
        self.postfix
    }

    pub fn with_base(mut self, base: &str) -> Self {
        self.base = Some(base.trim_end_matches('/').to_owned());
        self
    }

    pub fn complete(&self) -> String {
        match &self.base {
            Some(base) => format!("{}{}{}", base, self.prefix, self.postfix),
            None => format!("{}{}", self.prefix, self.postfix),
        }
    }
}

pub trait Get {
    fn get(&self) -> PathSpec;
}

pub trait Post {
    fn post(&self) -> PathSpec;
}

pub trait Put {
    fn put(&self) -> PathSpec;
}

pub trait Delete {
    fn delete(&self) -> PathSpec;
}

macro_rules! impl_method {
    ($trait:ident, $method:ident, $type:ty, $prefix:literal, $postfix:literal) => {
        impl $trait for $type {
            fn $method(&self) -> PathSpec {
                PathSpec::new($prefix, $postfix)
            }
        }
    };
}

#[derive(Default, Clone, Copy)]
pub struct Home;
#[derive(Default, Clone, Copy)]
pub struct Blogs;
#[derive(Default, Clone, Copy)]
pub struct AddBlog;
#[derive(Default, Clone, Copy)]
pub struct Login;
#[derive(Default, Clone, Copy)]
pub struct SignUp;

impl_method!(Get, get, Home, "", "/");
impl_method!(Get, get, Blogs, "", "/blogs");
impl_method!(Get, get, AddBlog, "", "/blogs/add");
impl_method!(Get, get, Login, "", "/login");
impl_method!(Get, get, SignUp, "", "/signup");

#[derive(Default, Clone, Copy)]
pub struct Hello;
#[derive(Default, Clone, Copy)]
pub struct Health;
#[derive(Default, Clone, Copy)]
pub struct Ready;

impl_method!(Get, get, Hello, "", "/api");
impl_method!(Get, get, Health, "", "/health");
impl_method!(Get, get, Ready, "", "/health/ready");

#[derive(Default, Clone, Copy)]
pub struct UsersIndex;
#[derive(Default, Clone, Copy)]
pub struct UsersSignup;
#[derive(Default, Clone, Copy)]
pub struct UsersLogin;

impl_method!(Get, get, UsersIndex, "/api/users", "");
impl_method!(Post, post, UsersSignup, "/api/users", "/signup");
impl_method!(Post, post, UsersLogin, "/api/users", "/login");

#[derive(Default, Clone, Copy)]
pub struct BlogsIndex;
#[derive(Default, Clone, Copy)]
pub struct BlogsEntry;

impl_method!(Get, get, BlogsIndex, "/api/blogs", "");
impl_method!(Post, post, BlogsIndex, "/api/blogs", "");

// the `:id` segment is an axum capture, complete() is router/test facing here
impl_method!(Get, get, BlogsEntry, "/api/blogs", "/:id");
impl_method!(Put, put, BlogsEntry, "/api/blogs", "/:id");
impl_method!(Delete, delete, BlogsEntry, "/api/blogs", "/:id");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_joins_prefix_and_postfix() {
        assert_eq!(routes().api.users.signup.post().complete(), "/api/users/signup");
        assert_eq!(routes().api.health.get().complete(), "/health");
        assert_eq!(routes().api.blogs.index.get().complete(), "/api/blogs");
    }

    #[test]
    fn with_base_prepends_and_normalizes() {
        let path = routes().api.hello.get().with_base("http://127.0.0.1:5001/");
        assert_eq!(path.complete(), "http://127.0.0.1:5001/api");

        // a bare "/" base collapses to same-origin paths
        let path = routes().api.blogs.index.get().with_base("/");
        assert_eq!(path.complete(), "/api/blogs");
    }

    #[test]
    fn postfix_is_group_relative() {
        assert_eq!(routes().api.users.login.post().postfix(), "/login");
        assert_eq!(routes().api.users.index.get().postfix(), "");
        assert_eq!(routes().api.blogs.entry.put().postfix(), "/:id");
        assert_eq!(routes().api.blogs.entry.delete().postfix(), "/:id");
    }
}
