use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::demo_modal::DemoModal;
use crate::components::testimonials::Testimonials;
use crate::content::{
    ABOUT_POINTS, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, HERO_IMAGE, HERO_SUBTITLE,
    HERO_TITLE, SERVICES, STATS, TEAM_IMAGE,
};
use crate::scroll_to_section;

#[function_component(Landing)]
pub fn landing() -> Html {
    let show_demo = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_demo = {
        let show_demo = show_demo.clone();
        Callback::from(move |_: MouseEvent| show_demo.set(true))
    };

    let close_demo = {
        let show_demo = show_demo.clone();
        Callback::from(move |_: ()| show_demo.set(false))
    };

    let get_started = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    let year = Utc::now().year();

    html! {
        <div class="landing-page">
            <header class="hero">
                <div class="hero-background" style={format!("background-image: url('{}');", HERO_IMAGE)}></div>
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <div class="hero-badge">{"🌐"}</div>
                    <h1 class="hero-title gradient-text">{HERO_TITLE}</h1>
                    <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={get_started.clone()}>
                            {"Get Started →"}
                        </button>
                        <button class="demo-cta" onclick={open_demo}>
                            {"▶ Watch Demo"}
                        </button>
                    </div>
                </div>
                <div class="hero-wave">
                    <svg viewBox="0 0 1200 120" preserveAspectRatio="none">
                        <path
                            d="M321.39,56.44c58-10.79,114.16-30.13,172-41.86,82.39-16.72,168.19-17.73,250.45-.39C823.78,31,906.67,72,985.66,92.83c70.05,18.48,146.53,26.09,214.34,3V0H0V27.35A600.21,600.21,0,0,0,321.39,56.44Z"
                            fill="rgba(17, 24, 39, 1)"
                        />
                    </svg>
                </div>
            </header>

            <section id="services" class="services-section">
                <div class="section-header">
                    <div class="section-badge">{"🏅"}</div>
                    <h2 class="gradient-text">{"Our Services"}</h2>
                    <p>{"Elevate your brand with our comprehensive suite of digital marketing solutions"}</p>
                </div>
                <div class="services-grid">
                    { SERVICES.iter().map(|service| {
                        html! {
                            <div class="service-card">
                                <div class="service-icon">{service.icon}</div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <ul class="feature-list">
                                    { service.features.iter().map(|feature| {
                                        html! { <li>{"✓ "}{feature}</li> }
                                    }).collect::<Html>() }
                                </ul>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>
            </section>

            <section id="about" class="about-section">
                <div class="about-grid">
                    <div class="about-text">
                        <h2 class="gradient-text">{"Driving Digital Success Through Innovation"}</h2>
                        <p class="about-lead">
                            {"We're not just another marketing agency. We're your strategic partner in navigating the digital landscape and achieving unprecedented growth."}
                        </p>
                        <div class="about-points">
                            { ABOUT_POINTS.iter().map(|point| {
                                html! {
                                    <div class="about-point">
                                        <div class="point-check">{"✓"}</div>
                                        <div>
                                            <h3>{point.title}</h3>
                                            <p>{point.detail}</p>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>() }
                        </div>
                    </div>
                    <div class="about-image">
                        <img src={TEAM_IMAGE} alt="Team collaboration" loading="lazy" />
                    </div>
                </div>
            </section>

            <section id="testimonials" class="testimonials-section">
                <div class="section-header">
                    <h2 class="gradient-text">{"Client Success Stories"}</h2>
                    <p>{"Real results from real clients who trusted us with their digital growth"}</p>
                </div>
                <Testimonials />
            </section>

            <section class="stats-section">
                <div class="stats-grid">
                    { STATS.iter().map(|stat| {
                        html! {
                            <div class="stat-tile">
                                <div class="stat-icon">{stat.icon}</div>
                                <div class="stat-number gradient-text">{stat.number}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }
                    }).collect::<Html>() }
                </div>
            </section>

            <section id="contact" class="contact-section">
                <h2 class="gradient-text">{"Let's Connect"}</h2>
                <div class="contact-grid">
                    <div class="contact-info">
                        <h3>{"Get in Touch"}</h3>
                        <div class="contact-row">
                            <div class="contact-row-icon">{"✉️"}</div>
                            <span>{CONTACT_EMAIL}</span>
                        </div>
                        <div class="contact-row">
                            <div class="contact-row-icon">{"📞"}</div>
                            <span>{CONTACT_PHONE}</span>
                        </div>
                        <div class="contact-row">
                            <div class="contact-row-icon">{"📍"}</div>
                            <span>{CONTACT_ADDRESS}</span>
                        </div>
                    </div>
                    <div class="contact-form-panel">
                        <ContactForm />
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <span class="logo-mark">{"⚡"}</span>
                            <span class="logo-name">{"FutureForward"}</span>
                        </div>
                        <p>{"Transforming brands through innovative digital solutions and cutting-edge marketing strategies."}</p>
                    </div>
                    <div class="footer-column">
                        <h4>{"Services"}</h4>
                        <ul>
                            <li>{"Digital Strategy"}</li>
                            <li>{"Brand Development"}</li>
                            <li>{"Growth Marketing"}</li>
                            <li>{"Content Creation"}</li>
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h4>{"Company"}</h4>
                        <ul>
                            <li>{"About Us"}</li>
                            <li>{"Careers"}</li>
                            <li>{"Blog"}</li>
                            <li>{"Contact"}</li>
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h4>{"Legal"}</h4>
                        <ul>
                            <li>{"Privacy Policy"}</li>
                            <li>{"Terms of Service"}</li>
                            <li>{"Cookie Policy"}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} Future Forward Marketing. All rights reserved.", year)}</p>
                </div>
            </footer>

            {
                if *show_demo {
                    html! { <DemoModal on_close={close_demo} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #0a0a0a;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
                        overflow-x: hidden;
                    }

                    .landing-page {
                        min-height: 100vh;
                    }

                    .gradient-text {
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }

                    section {
                        position: relative;
                        padding: 8rem 2rem;
                    }

                    .section-header {
                        text-align: center;
                        max-width: 700px;
                        margin: 0 auto 5rem;
                    }

                    .section-badge {
                        font-size: 3rem;
                        margin-bottom: 1.5rem;
                    }

                    .section-header h2 {
                        font-size: 3rem;
                        margin: 0 0 1.5rem;
                    }

                    .section-header p {
                        color: #999;
                        font-size: 1.2rem;
                        line-height: 1.6;
                    }

                    /* Hero */

                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }

                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        z-index: 0;
                    }

                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(
                            to right,
                            rgba(49, 16, 91, 0.8),
                            rgba(16, 35, 91, 0.8)
                        );
                        z-index: 1;
                    }

                    .hero-content {
                        position: relative;
                        z-index: 2;
                        text-align: center;
                        padding: 0 2rem;
                        max-width: 900px;
                    }

                    .hero-badge {
                        font-size: 5rem;
                        margin-bottom: 2rem;
                        animation: float 6s ease-in-out infinite;
                    }

                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-15px); }
                    }

                    .hero-title {
                        font-size: 4.5rem;
                        font-weight: 700;
                        margin: 0 0 2rem;
                        line-height: 1.1;
                    }

                    .hero-subtitle {
                        font-size: 1.4rem;
                        color: #ccc;
                        max-width: 700px;
                        margin: 0 auto 3rem;
                        line-height: 1.6;
                    }

                    .hero-cta-group {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        align-items: center;
                        flex-wrap: wrap;
                    }

                    .hero-cta {
                        background: linear-gradient(45deg, #1E90FF, #7E5FFF);
                        color: #fff;
                        border: none;
                        border-radius: 50px;
                        padding: 1rem 2.5rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }

                    .hero-cta:hover {
                        transform: scale(1.05);
                        box-shadow: 0 4px 20px rgba(30, 144, 255, 0.3);
                    }

                    .demo-cta {
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(10px);
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 50px;
                        padding: 1rem 2.5rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        cursor: pointer;
                        transition: transform 0.3s ease, background 0.3s ease;
                    }

                    .demo-cta:hover {
                        transform: scale(1.05);
                        background: rgba(255, 255, 255, 0.15);
                    }

                    .hero-wave {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        width: 100%;
                        z-index: 2;
                        line-height: 0;
                    }

                    .hero-wave svg {
                        display: block;
                        width: 100%;
                        height: 100px;
                    }

                    /* Services */

                    .services-section {
                        background: linear-gradient(to bottom, rgba(17, 24, 39, 1), #0a0a0a);
                    }

                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .service-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        padding: 2rem;
                        backdrop-filter: blur(10px);
                        transition: transform 0.5s cubic-bezier(0.4, 0, 0.2, 1),
                                    border-color 0.5s ease,
                                    box-shadow 0.5s ease;
                    }

                    .service-card:hover {
                        transform: translateY(-5px) scale(1.02);
                        border-color: rgba(30, 144, 255, 0.3);
                        box-shadow: 0 4px 20px rgba(30, 144, 255, 0.15);
                    }

                    .service-card .service-icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }

                    .service-card h3 {
                        font-size: 1.3rem;
                        margin: 0 0 1rem;
                    }

                    .service-card p {
                        color: #999;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }

                    .feature-list {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }

                    .feature-list li {
                        color: #ccc;
                    }

                    /* About */

                    .about-section {
                        background: linear-gradient(to bottom, #0a0a0a, rgba(17, 24, 39, 1));
                    }

                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                        max-width: 1200px;
                        margin: 0 auto;
                    }

                    .about-text h2 {
                        font-size: 2.8rem;
                        margin: 0 0 2rem;
                    }

                    .about-lead {
                        font-size: 1.2rem;
                        color: #ccc;
                        line-height: 1.7;
                        margin-bottom: 2.5rem;
                    }

                    .about-points {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .about-point {
                        display: flex;
                        gap: 1rem;
                    }

                    .point-check {
                        flex-shrink: 0;
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        background: rgba(30, 144, 255, 0.1);
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #7EB2FF;
                        font-weight: 700;
                    }

                    .about-point h3 {
                        margin: 0 0 0.5rem;
                        font-size: 1.2rem;
                    }

                    .about-point p {
                        margin: 0;
                        color: #999;
                        line-height: 1.6;
                    }

                    .about-image img {
                        width: 100%;
                        aspect-ratio: 1;
                        object-fit: cover;
                        border-radius: 16px;
                    }

                    /* Testimonials carousel */

                    .testimonials-section {
                        background: linear-gradient(
                            to bottom,
                            rgba(30, 144, 255, 0.05),
                            transparent
                        );
                        overflow: hidden;
                    }

                    .carousel {
                        max-width: 900px;
                        margin: 0 auto;
                        overflow: hidden;
                    }

                    .carousel-track {
                        display: flex;
                        transition: transform 0.5s ease;
                    }

                    .carousel-slide {
                        width: 100%;
                        flex-shrink: 0;
                        padding: 0 0.5rem;
                        box-sizing: border-box;
                    }

                    .testimonial-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        padding: 3rem;
                        backdrop-filter: blur(10px);
                        display: flex;
                        gap: 2rem;
                        align-items: center;
                        text-align: left;
                    }

                    .testimonial-avatar {
                        width: 96px;
                        height: 96px;
                        border-radius: 50%;
                        object-fit: cover;
                        flex-shrink: 0;
                    }

                    .testimonial-body blockquote {
                        margin: 0 0 1.5rem;
                        font-size: 1.3rem;
                        font-style: italic;
                        color: #e0e0e0;
                        line-height: 1.6;
                    }

                    .testimonial-meta {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }

                    .author-name {
                        margin: 0;
                        color: #7EB2FF;
                        font-weight: 600;
                        font-size: 1.1rem;
                    }

                    .author-role {
                        margin: 0.25rem 0 0;
                        color: #999;
                        font-size: 0.9rem;
                    }

                    .testimonial-stat {
                        background: rgba(30, 144, 255, 0.1);
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        border-radius: 50px;
                        padding: 0.75rem 1.5rem;
                        text-align: center;
                    }

                    .stat-growth {
                        margin: 0;
                        color: #7EB2FF;
                        font-weight: 700;
                        font-size: 1.2rem;
                    }

                    .stat-metric {
                        margin: 0;
                        color: #999;
                        font-size: 0.85rem;
                    }

                    .carousel-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 2rem;
                    }

                    .carousel-dot {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        border: none;
                        background: #444;
                        cursor: pointer;
                        padding: 0;
                        transition: width 0.3s ease, background 0.3s ease;
                    }

                    .carousel-dot.active {
                        width: 48px;
                        border-radius: 6px;
                        background: #7EB2FF;
                    }

                    /* Stats */

                    .stats-section {
                        background: linear-gradient(to bottom, transparent, rgba(17, 24, 39, 0.8));
                    }

                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }

                    .stat-tile {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        padding: 2rem;
                        text-align: center;
                        backdrop-filter: blur(10px);
                        transition: transform 0.3s ease;
                    }

                    .stat-tile:hover {
                        transform: scale(1.05);
                    }

                    .stat-icon {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }

                    .stat-number {
                        font-size: 2.5rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }

                    .stat-label {
                        color: #999;
                    }

                    /* Contact */

                    .contact-section {
                        background: linear-gradient(to bottom, rgba(17, 24, 39, 0.8), #0a0a0a);
                    }

                    .contact-section > h2 {
                        text-align: center;
                        font-size: 3rem;
                        margin: 0 0 4rem;
                    }

                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }

                    .contact-info,
                    .contact-form-panel {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        padding: 2.5rem;
                        backdrop-filter: blur(10px);
                    }

                    .contact-info h3 {
                        font-size: 1.5rem;
                        margin: 0 0 2rem;
                    }

                    .contact-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                        color: #ccc;
                    }

                    .contact-row-icon {
                        width: 48px;
                        height: 48px;
                        border-radius: 50%;
                        background: rgba(30, 144, 255, 0.1);
                        border: 1px solid rgba(30, 144, 255, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.2rem;
                        flex-shrink: 0;
                    }

                    /* Footer */

                    .footer {
                        background: #000;
                        border-top: 1px solid #222;
                        padding: 4rem 2rem 2rem;
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                        gap: 3rem;
                        max-width: 1200px;
                        margin: 0 auto 3rem;
                    }

                    .footer-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                    }

                    .footer-logo .logo-mark {
                        font-size: 1.8rem;
                    }

                    .footer-logo .logo-name {
                        font-size: 1.3rem;
                        font-weight: 700;
                    }

                    .footer-brand p {
                        color: #999;
                        line-height: 1.6;
                    }

                    .footer-column h4 {
                        font-size: 1.1rem;
                        margin: 0 0 1rem;
                    }

                    .footer-column ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }

                    .footer-column li {
                        color: #999;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }

                    .footer-column li:hover {
                        color: #fff;
                    }

                    .footer-bottom {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding-top: 2rem;
                        border-top: 1px solid #222;
                        text-align: center;
                        color: #999;
                    }

                    @media (max-width: 960px) {
                        .stats-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }

                        .footer-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }

                    @media (max-width: 768px) {
                        section {
                            padding: 5rem 1rem;
                        }

                        .hero-title {
                            font-size: 2.8rem;
                        }

                        .hero-subtitle {
                            font-size: 1.1rem;
                        }

                        .section-header h2 {
                            font-size: 2rem;
                        }

                        .about-grid,
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }

                        .testimonial-card {
                            flex-direction: column;
                            text-align: center;
                            padding: 2rem;
                        }

                        .testimonial-meta {
                            flex-direction: column;
                        }

                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
