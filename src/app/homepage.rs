use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::Contact;
use super::experience::{Certifications, Experience};
use super::projects::Projects;
use super::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="DevOps Portfolio" />
        <Hero />
        <About />
        <Experience />
        <Certifications />
        <Skills />
        <Projects />
        <Contact />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <p class="hero-greeting">"Hello, I'm"</p>
                <h1 class="hero-title">"Shikhar Raj"</h1>
                <h2 class="hero-subtitle">
                    <span id="typing-text"></span>
                    <span class="typing-cursor">"|"</span>
                </h2>
                <p class="hero-description">
                    "I automate the boring parts of shipping software: reproducible infrastructure, fast pipelines and services that page nobody at 3am."
                </p>
                <div class="hero-buttons">
                    <a href="#projects" class="btn btn-primary">
                        "View my work"
                    </a>
                    <a href="#contact" class="btn btn-secondary">
                        "Get in touch"
                    </a>
                </div>
            </div>
            <div class="hero-terminal">
                <div class="terminal-header">
                    <span class="terminal-dot red"></span>
                    <span class="terminal-dot yellow"></span>
                    <span class="terminal-dot green"></span>
                </div>
                <pre class="terminal-body">
                    <span class="text-green">"$ "</span>
                    "kubectl get deployments\n"
                    "NAME          READY   UP-TO-DATE   AVAILABLE\n"
                    "portfolio     3/3     3            3\n"
                    <span class="text-green">"$ "</span>
                    "terraform plan\n"
                    "No changes. Your infrastructure matches the configuration."
                </pre>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h2 class="section-title">"About Me"</h2>
            <div class="about-content">
                <p>
                    "I'm a DevOps engineer with a backend developer's habits. I like infrastructure that lives in git, deployments that are boring, and dashboards that tell you something before your users do."
                </p>
                <p>
                    "Day to day that means AWS, Terraform, Kubernetes and a lot of CI/CD plumbing, plus the Go, Python and Rust services running on top of it."
                </p>
                <div class="about-stats">
                    <div class="stat">
                        <span class="stat-number">"4+"</span>
                        <span class="stat-label">"Years in DevOps"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-number">"60%"</span>
                        <span class="stat-label">"Faster release cycles"</span>
                    </div>
                    <div class="stat">
                        <span class="stat-number">"99.9%"</span>
                        <span class="stat-label">"Uptime maintained"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
