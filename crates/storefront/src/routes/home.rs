//! Landing page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

/// A selling point shown on the landing page.
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

/// A customer quote.
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Gastronomía Excepcional",
        body: "Nuestros chefs expertos crean platos innovadores utilizando los ingredientes \
               más frescos y de la más alta calidad.",
    },
    Highlight {
        title: "Ubicación Privilegiada",
        body: "Disfruta de vistas panorámicas al océano mientras saboreas nuestros exquisitos \
               platos en un ambiente acogedor y elegante.",
    },
    Highlight {
        title: "Servicio Impecable",
        body: "Nuestro equipo dedicado se asegura de que cada visita sea memorable, \
               brindándote una atención personalizada y eficiente.",
    },
];

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Una experiencia culinaria inolvidable. Los sabores son exquisitos y el \
                servicio es impecable.",
        author: "María González",
    },
    Testimonial {
        quote: "El ambiente es acogedor y elegante, perfecto para una cena romántica. La \
                paella marinera es simplemente espectacular.",
        author: "Juan Pérez",
    },
    Testimonial {
        quote: "Cada plato es una obra de arte. La frescura de los ingredientes hace que \
                cada visita sea una nueva aventura para el paladar.",
        author: "Ana López",
    },
];

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub highlights: &'static [Highlight],
    pub testimonials: &'static [Testimonial],
}

/// Display the landing page.
#[instrument]
pub async fn home() -> impl IntoResponse {
    HomeTemplate {
        highlights: HIGHLIGHTS,
        testimonials: TESTIMONIALS,
    }
}
