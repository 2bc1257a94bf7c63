use dioxus::prelude::*;
use crate::views::{ Header, Home, Results };

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Header)]
    #[route("/")]
    Home,
    #[route("/results")]
    Results,
}
