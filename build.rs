fn main() {
    // 1. Explicit override (packaging scripts)
    println!("cargo:rerun-if-env-changed=VCONNECT_BUILD_VERSION");
    if let Ok(v) = std::env::var("VCONNECT_BUILD_VERSION") {
        if !v.is_empty() {
            println!("cargo:rustc-env=VCONNECT_BUILD_VERSION={v}");
            return;
        }
    }

    // 2. VERSION file written by CI
    println!("cargo:rerun-if-changed=VERSION");
    if let Ok(v) = std::fs::read_to_string("VERSION") {
        let v = v.trim();
        let v = v.strip_prefix('v').unwrap_or(v);
        if !v.is_empty() {
            println!("cargo:rustc-env=VCONNECT_BUILD_VERSION={v}");
            return;
        }
    }

    // 3. Fallback to Cargo.toml version
    println!(
        "cargo:rustc-env=VCONNECT_BUILD_VERSION={}",
        std::env::var("CARGO_PKG_VERSION").unwrap_or_default()
    );
}
