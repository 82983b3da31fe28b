use axum::response::IntoResponse;

use crate::{
    page::{Page, Seo},
    template::Template,
};

#[derive(askama::Template)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub seo: Seo,
    pub back: &'static str,
    pub contact_email: String,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(PrivacyTemplate {
        seo: template.seo(Page::Privacy, &[]),
        back: Page::Privacy.back().path(),
        contact_email: template.site().contact_email.clone(),
    })
}
