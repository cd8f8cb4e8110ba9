//! The content-only parts of the page. Each block reveals itself on scroll.

use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::showcase::Showcase;
use crate::config;
use crate::content::catalog::{
    AGENT_PROJECTS, CASE_STUDIES, PRICING, SERVICES, TEAM_STATS, TESTIMONIALS, WORKFLOW,
};

#[function_component(Banner)]
pub fn banner() -> Html {
    html! {
        <Reveal tag="header" id="home" class="section banner">
            <div class="banner-inner">
                <div class="banner-media">
                    <img
                        src="/assets/app.png"
                        alt="Banner — App & AI design"
                        width="1600"
                        height="900"
                        class="banner-image"
                    />
                    <div class="banner-overlay" />
                </div>

                <div class="banner-text">
                    <h1 class="hero-title">{"App Idea? Let's Make It Real."}</h1>
                    <p class="lead">
                        {"Design • Web • AI Agents • Workflow • Automation • AI Mobile App. App design, website, AI agents, workflow and automation — all in one place."}
                    </p>
                    <div class="hero-ctas">
                        <a href="#contact" class="cta-primary">{"Get a Quote"}</a>
                        <a href="#portfolio" class="cta-ghost">{"See Work"}</a>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <Reveal id="services" class="section services">
            <h2 class="section-title">{"Services"}</h2>
            <p class="section-sub">
                {"AI Mobile App design, Website UI, AI Agent, Workflow & Automation"}
            </p>
            <div class="features-grid">
                {
                    SERVICES.iter().map(|service| html! {
                        <Reveal tag="div" class="feature-card">
                            <div class="feature-icon">{service.icon}</div>
                            <h4>{service.title}</h4>
                            <p>{service.blurb}</p>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </Reveal>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <Reveal id="portfolio" class="section portfolio">
            <h2 class="section-title">{"Portfolio"}</h2>
            <p class="section-sub">{"Selected projects — app, web and AI design."}</p>

            <Showcase />

            <h2 class="section-title">{"AI Agent"}</h2>
            <div class="projects-grid">
                {
                    AGENT_PROJECTS.iter().map(|project| html! {
                        <Reveal tag="article" class="project-card">
                            <div class="project-media">
                                <img
                                    src={project.image_path}
                                    alt={format!("Project {}", project.id)}
                                    width="1200"
                                    height="700"
                                    class="project-image"
                                    loading="lazy"
                                />
                            </div>
                            <div class="project-body">
                                <h3>{project.name}</h3>
                                <p>{project.alt}</p>
                            </div>
                        </Reveal>
                    }).collect::<Html>()
                }
            </div>
        </Reveal>
    }
}

#[function_component(Workflow)]
pub fn workflow() -> Html {
    html! {
        <Reveal id="workflow" class="section workflow">
            <h2 class="section-title">{"Workflow"}</h2>
            <p class="section-sub">{"How we deliver — concept to launch."}</p>
            <ol class="timeline">
                { for WORKFLOW.iter().map(|step| html! {
                    <li>
                        <strong>{step.title}</strong>
                        <p>{step.blurb}</p>
                    </li>
                }) }
            </ol>
        </Reveal>
    }
}

#[function_component(CaseStudies)]
pub fn case_studies() -> Html {
    html! {
        <Reveal id="case-studies" class="section cases">
            <h2 class="section-title">{"Case Studies"}</h2>
            <div class="case-grid">
                { for CASE_STUDIES.iter().map(|case| html! {
                    <div class="case-card">
                        <h4>{case.title}</h4>
                        <p>{case.blurb}</p>
                    </div>
                }) }
            </div>
        </Reveal>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <Reveal id="team" class="section team">
            <h2 class="section-title">{"Our Team"}</h2>
            <div class="team-content">
                <div class="team-image-container">
                    <div class="team-image">
                        <img
                            src="/assets/team.jpg"
                            alt="AbSolution Team"
                            width="500"
                            height="350"
                            class="team-photo"
                            loading="lazy"
                        />
                        <div class="team-badge">{"2.5+ Years Experience"}</div>
                    </div>
                    <div class="team-stats">
                        { for TEAM_STATS.iter().map(|stat| html! {
                            <div class="stat-item">
                                <span class="stat-number">{stat.value}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="team-info">
                    <h3>{"Who We Are"}</h3>
                    <div class="team-highlight">
                        {"Passionate mobile developers delivering high-performance applications"}
                    </div>
                    <p>
                        {"We are a team of passionate mobile app developers with 2.5+ years of experience delivering user-friendly, high-performance applications for iOS and Android. Having successfully completed 14+ projects across Arabic and Indian markets, we specialize in creating solutions that drive efficiency, engagement, and growth."}
                    </p>
                    <p>
                        {"Our expertise spans building feature-rich applications with real-time functionality, secure integrations, and smooth user journeys. Continuously evolving with new trends and innovations, we aim to provide businesses with modern, scalable apps that elevate user satisfaction and operational success."}
                    </p>
                    <div class="team-socials">
                        <a href={config::LINKEDIN_URL} target="_blank" rel="noreferrer" class="team-social-button">
                            <span class="social-icon"><i class="fab fa-linkedin"></i></span>
                            {"Connect on LinkedIn"}
                        </a>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <Reveal id="pricing" class="section pricing">
            <h2 class="section-title">{"Pricing"}</h2>
            <div class="pricing-grid">
                { for PRICING.iter().map(|tier| html! {
                    <div class="price-card">
                        <h3>{tier.name}</h3>
                        <p class="price">{tier.price}</p>
                        <p>{tier.blurb}</p>
                    </div>
                }) }
            </div>
        </Reveal>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <Reveal class="section testimonials">
            <h2 class="section-title">{"Testimonials"}</h2>
            <div class="test-grid">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <blockquote class="testimonial">
                        <p>{format!("\"{}\"", t.quote)}</p>
                        <cite>{format!("— {}", t.author)}</cite>
                    </blockquote>
                }) }
            </div>
        </Reveal>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Date::new_0().get_full_year();
    html! {
        <footer class="footer">
            <div class="footer-inner">
                <p>
                    {format!("© {} ", year)}
                    <a href={config::get_site_url()}>{"AbSolution"}</a>
                    {" — App & AI Design"}
                </p>
                <div class="socials">
                    <a href={config::LINKEDIN_URL} target="_blank" rel="noreferrer" aria-label="LinkedIn">
                        {"LinkedIn"}
                    </a>
                    <a href="#" aria-label="Twitter">{"Twitter"}</a>
                </div>
            </div>
        </footer>
    }
}
