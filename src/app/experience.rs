use leptos::prelude::*;

struct Role {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    highlights: &'static [&'static str],
}

const ROLES: [Role; 3] = [
    Role {
        title: "Senior DevOps Engineer",
        company: "Cloud Platform Team",
        period: "2023 - Present",
        highlights: &[
            "Moved 40+ services onto EKS with GitOps deployments through Argo CD",
            "Cut pipeline times from 25 to 8 minutes with cached, parallel builds",
            "Built Terraform modules the whole org now provisions from",
        ],
    },
    Role {
        title: "DevOps Engineer",
        company: "SaaS Product Company",
        period: "2021 - 2023",
        highlights: &[
            "Introduced Prometheus and Grafana alerting with on-call runbooks",
            "Automated blue/green releases for the customer-facing API",
        ],
    },
    Role {
        title: "Backend Developer",
        company: "Fintech Startup",
        period: "2020 - 2021",
        highlights: &[
            "Wrote payment reconciliation services in Python and Go",
            "Containerized the monolith and set up its first CI pipeline",
        ],
    },
];

const CERTIFICATIONS: [(&str, &str); 4] = [
    ("AWS Certified Solutions Architect - Associate", "Amazon Web Services"),
    ("Certified Kubernetes Administrator (CKA)", "Cloud Native Computing Foundation"),
    ("HashiCorp Certified: Terraform Associate", "HashiCorp"),
    ("AWS Certified Developer - Associate", "Amazon Web Services"),
];

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="experience">
            <h2 class="section-title">"Experience"</h2>
            <div class="timeline">
                {ROLES
                    .iter()
                    .map(|role| {
                        view! {
                            <div class="timeline-item">
                                <div class="timeline-marker"></div>
                                <div class="timeline-content">
                                    <h3>{role.title}</h3>
                                    <p class="timeline-company">{role.company}</p>
                                    <p class="timeline-period">{role.period}</p>
                                    <ul>
                                        {role
                                            .highlights
                                            .iter()
                                            .map(|h| view! { <li>{*h}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <section id="certifications" class="certifications">
            <h2 class="section-title">"Certifications"</h2>
            <div class="cert-grid">
                {CERTIFICATIONS
                    .iter()
                    .map(|(name, issuer)| {
                        view! {
                            <div class="cert-card">
                                <h3>{*name}</h3>
                                <p>{*issuer}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
