use axum::response::IntoResponse;

use crate::{
    page::{Page, Seo},
    template::Template,
};

#[derive(askama::Template)]
#[template(path = "terms.html")]
pub struct TermsTemplate {
    pub seo: Seo,
    pub back: &'static str,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(TermsTemplate {
        seo: template.seo(Page::Terms, &[]),
        back: Page::Terms.back().path(),
    })
}
