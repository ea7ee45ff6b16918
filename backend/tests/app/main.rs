mod helpers;

mod api;
mod health;
