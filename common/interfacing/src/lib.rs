// Wire types shared between the backend handlers and the frontend client
//

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Hello {
    pub message: String,
}

pub mod users {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct SignupForm {
        pub name: String,
        pub email: String,
        pub password: String,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct LoginForm {
        pub email: String,
        pub password: String,
    }

    /// Public projection of a user. Never carries the password hash.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct User {
        pub id: String,
        pub name: String,
        pub email: String,
    }
}

pub mod blogs {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct BlogPayload {
        pub title: String,
        pub content: String,
        pub author: String,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct Blog {
        pub id: String,
        pub title: String,
        pub content: String,
        pub author: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_wire_shape() {
        let json = serde_json::to_string(&Hello {
            message: "hello".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"message":"hello"}"#);
    }
}
