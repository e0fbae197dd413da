use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::form::contact::ContactForm;
use crate::ui::reveal::Reveal;
use crate::ui::scroll;

struct Service {
    title: &'static str,
    description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Asesoría contable",
        description: "Contabilidad mensual, declaraciones y reportes al día para tu pyme.",
    },
    Service {
        title: "Gestión tributaria",
        description: "Planificación y cumplimiento tributario sin sorpresas con el SII.",
    },
    Service {
        title: "Remuneraciones",
        description: "Liquidaciones, contratos y cotizaciones de tu equipo, todos los meses.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let year = Local::now().year();

    let cta_contacto = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        scroll::scroll_to_section("#contacto");
    });

    html! {
        <>
            <style>{ PAGE_CSS }</style>
            <main>
                <section id="inicio" class="hero">
                    <Reveal>
                        <h1>{ "Orden financiero para tu pyme" }</h1>
                        <p class="hero-lead">
                            { "Llevamos tu contabilidad, impuestos y remuneraciones para que tú te dediques a hacer crecer tu negocio." }
                        </p>
                        <a class="cta-button" href="#contacto" onclick={cta_contacto.clone()}>
                            { "Solicita una asesoría" }
                        </a>
                    </Reveal>
                </section>

                <section id="servicios" class="services">
                    <Reveal>
                        <h2>{ "Servicios" }</h2>
                        <div class="service-grid">
                            { for SERVICES.iter().map(|service| html! {
                                <article class="service-card">
                                    <h3>{ service.title }</h3>
                                    <p>{ service.description }</p>
                                </article>
                            }) }
                        </div>
                    </Reveal>
                </section>

                <section id="nosotros" class="about">
                    <Reveal>
                        <h2>{ "Nosotros" }</h2>
                        <p>
                            { "Somos un equipo de contadores y asesores con más de diez años acompañando a pymes chilenas. Trabajamos remoto, respondemos rápido y hablamos claro." }
                        </p>
                    </Reveal>
                </section>

                <section id="contacto" class="contact">
                    <Reveal>
                        <h2>{ "Conversemos" }</h2>
                        <p class="contact-lead">
                            { "Déjanos tus datos y te contactamos dentro del día hábil." }
                        </p>
                        <ContactForm />
                    </Reveal>
                </section>
            </main>

            <footer class="site-footer">
                <p>{ format!("© {year} Andina Asesorías. Todos los derechos reservados.") }</p>
            </footer>
        </>
    }
}

const PAGE_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: 'Segoe UI', system-ui, -apple-system, sans-serif;
    color: #1f2933;
    background: #f8fafc;
    line-height: 1.6;
}

.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    background: #ffffff;
    box-shadow: 0 1px 4px rgba(15, 23, 42, 0.08);
}

.header-inner {
    max-width: 1080px;
    margin: 0 auto;
    padding: 0.9rem 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.brand {
    font-size: 1.2rem;
    font-weight: 700;
    color: #0f4c81;
    text-decoration: none;
}

.main-nav {
    display: flex;
    gap: 1.5rem;
}

.nav-link {
    color: #334155;
    text-decoration: none;
    font-weight: 500;
}

.nav-link:hover {
    color: #0f4c81;
}

.menu-toggle {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    padding: 6px;
    cursor: pointer;
}

.menu-toggle span {
    width: 24px;
    height: 2px;
    background: #334155;
    transition: transform 0.25s ease, opacity 0.25s ease;
}

.menu-toggle.is-open span:nth-child(1) {
    transform: translateY(7px) rotate(45deg);
}

.menu-toggle.is-open span:nth-child(2) {
    opacity: 0;
}

.menu-toggle.is-open span:nth-child(3) {
    transform: translateY(-7px) rotate(-45deg);
}

main {
    max-width: 1080px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

section {
    padding: 5.5rem 0 2rem;
}

.hero h1 {
    font-size: 2.4rem;
    color: #0f4c81;
    margin-bottom: 1rem;
}

.hero-lead {
    max-width: 560px;
    margin-bottom: 1.5rem;
    color: #475569;
}

.cta-button {
    display: inline-block;
    background: #0f4c81;
    color: #ffffff;
    padding: 0.75rem 1.5rem;
    border-radius: 6px;
    text-decoration: none;
    font-weight: 600;
}

.cta-button:hover {
    background: #0c3d67;
}

h2 {
    font-size: 1.8rem;
    color: #0f4c81;
    margin-bottom: 1rem;
}

.service-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
    gap: 1.25rem;
}

.service-card {
    background: #ffffff;
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    padding: 1.5rem;
}

.service-card h3 {
    margin-bottom: 0.5rem;
    color: #1f2933;
}

.contact-lead {
    margin-bottom: 1.5rem;
    color: #475569;
}

.contact-form {
    max-width: 560px;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.form-field {
    display: flex;
    flex-direction: column;
    gap: 0.3rem;
}

.form-field label {
    font-weight: 600;
    color: #334155;
}

.form-field input,
.form-field textarea {
    padding: 0.6rem 0.75rem;
    border: 1px solid #cbd5e1;
    border-radius: 6px;
    font: inherit;
    background: #ffffff;
}

.form-field input:focus,
.form-field textarea:focus {
    outline: 2px solid #0f4c81;
    outline-offset: 1px;
}

.form-field input.error,
.form-field textarea.error {
    border-color: #b91c1c;
}

.field-error {
    min-height: 1.2em;
    font-size: 0.85rem;
    color: #b91c1c;
}

.form-status {
    min-height: 1.4em;
    font-weight: 500;
}

.form-status.error {
    color: #b91c1c;
}

.form-status.success {
    color: #15803d;
}

.submit-button {
    align-self: flex-start;
    background: #0f4c81;
    color: #ffffff;
    border: none;
    border-radius: 6px;
    padding: 0.75rem 1.75rem;
    font: inherit;
    font-weight: 600;
    cursor: pointer;
}

.submit-button:hover {
    background: #0c3d67;
}

.submit-button:disabled {
    background: #94a3b8;
    cursor: wait;
}

.reveal {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.is-visible {
    opacity: 1;
    transform: none;
}

.site-footer {
    margin-top: 3rem;
    padding: 1.5rem;
    text-align: center;
    color: #64748b;
    background: #eef2f7;
}

@media (max-width: 768px) {
    .menu-toggle {
        display: flex;
    }

    .main-nav {
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        gap: 0;
        background: #ffffff;
        border-top: 1px solid #e2e8f0;
        box-shadow: 0 8px 16px rgba(15, 23, 42, 0.08);
        max-height: 0;
        overflow: hidden;
        transition: max-height 0.3s ease;
    }

    .main-nav.is-open {
        max-height: 320px;
    }

    .nav-link {
        padding: 0.9rem 1.5rem;
        border-bottom: 1px solid #f1f5f9;
    }

    .hero h1 {
        font-size: 1.9rem;
    }
}
"#;
