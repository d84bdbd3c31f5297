/// One `%c`-styled console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLine {
    pub text: String,
    pub css: &'static str,
}

/// Lines greeting visitors in the dev tools, built at `build_time`.
pub fn banner_lines(build_time: &str) -> Vec<BannerLine> {
    vec![
        BannerLine {
            text: "Shikhar Raj - DevOps Portfolio".to_string(),
            css: "color: #48bb78; font-size: 24px; font-weight: bold;",
        },
        BannerLine {
            text: format!("Built with passion for DevOps and clean code ({build_time})"),
            css: "color: #4299e1; font-size: 14px;",
        },
        BannerLine {
            text: "Interested in the code? Check out my GitHub!".to_string(),
            css: "color: #ed8936; font-size: 12px;",
        },
    ]
}

/// Banner for a page served from `host`; local development hosts stay quiet.
pub fn banner_for_host(
    host: &str,
    dev_hosts: &[String],
    build_time: &str,
) -> Option<Vec<BannerLine>> {
    if dev_hosts.iter().any(|h| h == host) {
        None
    } else {
        Some(banner_lines(build_time))
    }
}
