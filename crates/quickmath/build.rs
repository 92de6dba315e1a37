fn main() {
    println!("cargo:rustc-check-cfg=cfg(quickmath_sse)");

    // The packed backend is SSE2 only; anything else takes the scalar path.
    let simd = std::env::var_os("CARGO_FEATURE_SIMD").is_some();
    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let features = std::env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();

    if simd && (arch == "x86" || arch == "x86_64") && features.split(',').any(|f| f == "sse2") {
        println!("cargo:rustc-cfg=quickmath_sse");
    }
}
