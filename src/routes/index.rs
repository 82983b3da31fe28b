use axum::response::IntoResponse;

use crate::{
    page::{Page, Seo},
    template::Template,
};

/// One half of the landing split screen.
pub struct Split {
    pub page: Page,
    pub title: &'static str,
    pub description: &'static str,
    pub button: &'static str,
    pub media: &'static str,
    pub is_video: bool,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub seo: Seo,
    pub splits: [Split; 2],
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(IndexTemplate {
        seo: template.seo(Page::Home, &[]),
        splits: [
            Split {
                page: Page::Marketing,
                title: "Marketing Digital & E-commerce",
                description: "Impulsamos tu crecimiento con estrategias de marketing y analítica web basadas en datos. Convertimos clics en clientes.",
                button: "Descubrir Estrategias",
                media: "https://images.pexels.com/photos/572056/pexels-photo-572056.jpeg",
                is_video: false,
            },
            Split {
                page: Page::Film,
                title: "Cine & Televisión",
                description: "Creamos contenido audiovisual de alto impacto que cuenta tu historia. Producción de calidad cinematográfica.",
                button: "Explorar Proyectos",
                media: "https://videos.pexels.com/video-files/3209828/3209828-hd_1920_1080_25fps.mp4",
                is_video: true,
            },
        ],
    })
}
