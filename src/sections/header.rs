use yew::prelude::*;

use crate::content::{Brand, Link};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: Brand,
    pub nav: Vec<Link>,
}

pub fn nav_links(links: &[Link]) -> Html {
    links
        .iter()
        .enumerate()
        .map(|(index, link)| {
            html! {
                <a key={index} href={link.href.clone()} class="nav-link">{ &link.label }</a>
            }
        })
        .collect()
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="site-header">
            <div class="header-content">
                <div class="brand">
                    <img src={props.brand.logo.clone()} alt={format!("{} Logo", props.brand.name)} class="brand-logo" />
                    <span class="brand-name">{ &props.brand.name }</span>
                </div>
                <nav class="header-nav">{ nav_links(&props.nav) }</nav>
                <div class="header-actions">
                    <button class="login-button">{"Log In"}</button>
                    <button class="neon-button neon-button--filled neon-button--small">{"Get Started"}</button>
                </div>
            </div>
        </header>
    }
}
