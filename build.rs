// esp-hal ships the memory layout as linkall.x; only the firmware binary
// needs it, and only when building for the chip.

fn main() {
    let target = std::env::var("TARGET").unwrap_or_default();
    if target.starts_with("riscv32") {
        println!("cargo:rustc-link-arg-bins=-Tlinkall.x");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
