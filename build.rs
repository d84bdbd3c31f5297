fn main() {
    // SOURCE_DATE_EPOCH pins the stamp for reproducible builds
    let stamp = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|secs| secs.parse::<i64>().ok())
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
        .unwrap_or_else(chrono::Utc::now);

    // Shown in the browser console banner
    println!("cargo:rustc-env=BUILD_TIME={}", stamp.to_rfc3339());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
}
