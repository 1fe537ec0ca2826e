use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Footer copyright, read with env! macro
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
