// File: crates/plotpoint-render-skia/build.rs
// Summary: Link the Windows registry API that Skia's font manager and ICU depend on.

fn main() {
    // cfg!(target_os) here would describe the build host, not the target.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
