use chrono::Datelike;

fn main() {
    // Year shown in the footer copyright line
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Relay settings are read with option_env! so a rebuild must pick up changes
    println!("cargo:rerun-if-env-changed=PORTFOLIO_RELAY_ENDPOINT");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_RELAY_ACCESS_KEY");

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
