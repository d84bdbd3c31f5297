use leptos::prelude::*;

struct Project {
    name: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    link: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project {
        name: "EKS Platform Blueprint",
        description: "Terraform + Helm blueprint that stands up a production-ready EKS cluster with ingress, cert-manager, external-dns and Argo CD.",
        tags: &["Terraform", "Kubernetes", "AWS"],
        link: "https://github.com/shikharraj/eks-blueprint",
    },
    Project {
        name: "Pipeline Templates",
        description: "Reusable GitHub Actions workflows for build, scan, sign and deploy, shared across dozens of repositories.",
        tags: &["GitHub Actions", "Docker", "Security"],
        link: "https://github.com/shikharraj/pipeline-templates",
    },
    Project {
        name: "Observability Stack",
        description: "Prometheus, Loki and Grafana deployed as code with SLO dashboards and alert routing to on-call.",
        tags: &["Prometheus", "Grafana", "Helm"],
        link: "https://github.com/shikharraj/observability-stack",
    },
    Project {
        name: "Cost Watchdog",
        description: "Lambda that reports idle and oversized AWS resources to Slack every morning.",
        tags: &["Python", "AWS Lambda", "Boto3"],
        link: "https://github.com/shikharraj/cost-watchdog",
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="projects">
            <h2 class="section-title">"Projects"</h2>
            <div class="projects-grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <div class="project-card">
                                <h3>{project.name}</h3>
                                <p>{project.description}</p>
                                <div class="project-tags">
                                    {project
                                        .tags
                                        .iter()
                                        .map(|tag| view! { <span class="tag">{*tag}</span> })
                                        .collect_view()}
                                </div>
                                <a
                                    href=project.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="project-link"
                                >
                                    "View on GitHub →"
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
