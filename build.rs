//! Build script to compile the C ports of the exercises.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    println!("cargo:rerun-if-changed=build.rs");

    let probe = cc::Build::new();
    let compiler = match probe.try_get_compiler() {
        Ok(compiler) => compiler,
        Err(e) => {
            println!("cargo:warning=No C compiler found ({}). C variants disabled.", e);
            return;
        }
    };

    let compiler_name = if compiler.is_like_clang() {
        let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
        if target_os == "macos" {
            "Apple Clang"
        } else {
            "Clang"
        }
    } else if compiler.is_like_gnu() {
        "GCC"
    } else if compiler.is_like_msvc() {
        "MSVC"
    } else {
        println!("cargo:warning=C compiler is not compatible (needs GCC, Clang, or MSVC). C variants disabled.");
        return;
    };

    let mut build = cc::Build::new();

    // Every exercise keeps its C port next to its Rust variants
    let c_files: Vec<_> = match glob::glob("src/**/*.c") {
        Ok(paths) => paths.filter_map(|entry| entry.ok()).collect(),
        Err(e) => {
            println!("cargo:warning=Invalid glob pattern ({}). C variants disabled.", e);
            return;
        }
    };

    if c_files.is_empty() {
        return;
    }

    for file in &c_files {
        println!("cargo:rerun-if-changed={}", file.display());
        build.file(file);
    }

    build.opt_level(3).warnings(true);

    if let Err(e) = build.try_compile("toolbox_c") {
        println!("cargo:warning=Failed to compile C variants ({}). C variants disabled.", e);
        return;
    }

    println!("cargo:rustc-cfg=c_implementation_active");
    println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
}
