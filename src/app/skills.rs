use leptos::prelude::*;

/// Category name and its `(skill, data-progress)` pairs.
const SKILL_CATEGORIES: [(&str, &[(&str, &str)]); 4] = [
    (
        "Cloud & Infrastructure",
        &[("AWS", "90"), ("Terraform", "88"), ("Ansible", "75")],
    ),
    (
        "Containers & Orchestration",
        &[("Docker", "92"), ("Kubernetes", "85"), ("Helm", "78")],
    ),
    (
        "CI/CD & Observability",
        &[("GitHub Actions", "90"), ("Jenkins", "80"), ("Prometheus & Grafana", "82")],
    ),
    (
        "Languages",
        &[("Python", "85"), ("Go", "75"), ("Bash", "88"), ("Rust", "60")],
    ),
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="skills">
            <h2 class="section-title">"Skills"</h2>
            <div class="skills-grid">
                {SKILL_CATEGORIES
                    .iter()
                    .map(|(category, skills)| {
                        view! {
                            <div class="skills-category">
                                <h3>{*category}</h3>
                                {skills
                                    .iter()
                                    .map(|(name, progress)| view! { <SkillBar name=*name progress=*progress /> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillBar(name: &'static str, progress: &'static str) -> impl IntoView {
    view! {
        <div class="skill-item">
            <div class="skill-info">
                <span>{name}</span>
                <span>{format!("{progress}%")}</span>
            </div>
            <div class="skill-bar">
                // starts empty; filled from data-progress once the section is seen
                <div class="skill-progress" data-progress=progress></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::Progress;

    #[test]
    fn test_every_skill_has_a_valid_progress() {
        for (_, skills) in SKILL_CATEGORIES {
            for (name, progress) in skills {
                assert!(Progress::try_from(*progress).is_ok(), "bad progress for {name}");
            }
        }
    }
}
