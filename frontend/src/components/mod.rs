pub mod imports;

mod add_blog;
mod blogs;
mod default_styling;
mod error;
mod header;
mod login;
mod sign_up;

pub mod theme;

pub use add_blog::AddBlog;
pub use blogs::BlogList;
pub use default_styling::DefaultStyling;
pub use error::Error;
pub use header::Header;
pub use login::Login;
pub use sign_up::SignUp;
