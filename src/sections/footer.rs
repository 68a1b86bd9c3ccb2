use chrono::Datelike;
use yew::prelude::*;

use crate::components::icons;
use crate::content::{Brand, Footer as FooterContent, LinkColumn};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: Brand,
    pub footer: FooterContent,
}

pub fn copyright(year: i32, brand: &str) -> String {
    format!("© {} {}. All rights reserved.", year, brand)
}

pub fn link_columns(columns: &[LinkColumn]) -> Html {
    columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            html! {
                <div key={index} class="footer-column">
                    <h4>{ &column.title }</h4>
                    <ul>
                        { for column.links.iter().map(|link| html! {
                            <li><a href={link.href.clone()} class="footer-link">{ &link.label }</a></li>
                        }) }
                    </ul>
                </div>
            }
        })
        .collect()
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-brand">
                            <img src={props.brand.logo.clone()} alt={format!("{} Logo", props.brand.name)} class="brand-logo" />
                            { &props.brand.name }
                        </h3>
                        <p class="footer-tagline">{ &props.brand.tagline }</p>
                        <div class="social-row">
                            { for props.footer.socials.iter().map(|social| html! {
                                <a href={social.href.clone()} class="social-link">{ icons::icon(social.icon, "social-icon social-icon--large") }</a>
                            }) }
                        </div>
                    </div>
                    { link_columns(&props.footer.columns) }
                </div>
                <div class="footer-bottom">
                    <p>{ copyright(year, &props.brand.name) }</p>
                </div>
            </div>
        </footer>
    }
}
