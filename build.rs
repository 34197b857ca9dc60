//! Build script for ncursesw-shim.
//!
//! Without the `native` feature nothing is generated. With it, bindgen runs
//! over the umbrella header and writes `$OUT_DIR/bindings.rs`, and the
//! ncursesw libraries are linked.
//!
//! Environment:
//! - `NCURSESW_INCLUDE_DIR`: resolve `assets/wrapper.h` against this
//!   directory instead of using the system-include `wrapper.h`
//! - `NCURSESW_LIB_DIR`: extra native library search path
//! - `NCURSESW_LIB`: core library name (default `ncursesw`)

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/generator.rs");
    println!("cargo:rerun-if-changed=src/naming.rs");
    println!("cargo:rerun-if-changed=wrapper.h");
    println!("cargo:rerun-if-changed=assets/wrapper.h");
    println!("cargo:rerun-if-env-changed=NCURSESW_INCLUDE_DIR");
    println!("cargo:rerun-if-env-changed=NCURSESW_LIB_DIR");
    println!("cargo:rerun-if-env-changed=NCURSESW_LIB");

    #[cfg(feature = "native")]
    native::generate();
}

#[cfg(feature = "native")]
#[allow(dead_code)]
#[path = "src/naming.rs"]
mod naming;

#[cfg(feature = "native")]
#[path = "build/generator.rs"]
mod generator;

#[cfg(feature = "native")]
mod native {
    use std::env;
    use std::fs;
    use std::path::{Path, PathBuf};

    use crate::{generator, naming};

    const DEFAULT_LIB: &str = "ncursesw";

    const EXTENSION_LIBS: [&str; 3] = ["panel", "menu", "form"];

    /// Pick the umbrella header, resolving the template when an include
    /// directory is configured.
    fn umbrella_header(manifest_dir: &Path, out_dir: &Path) -> PathBuf {
        match env::var("NCURSESW_INCLUDE_DIR") {
            Ok(dir) => {
                let normalized = naming::normalize_include_dir(&dir);
                if !Path::new(&normalized).join("ncurses.h").exists() {
                    println!("cargo:warning=NCURSESW_INCLUDE_DIR={dir} has no ncurses.h");
                }

                let template_path = manifest_dir.join("assets").join("wrapper.h");
                let template = fs::read_to_string(&template_path).unwrap_or_else(|err| {
                    panic!("unable to read {}: {err}", template_path.display())
                });

                let resolved = out_dir.join("wrapper.h");
                fs::write(&resolved, naming::substitute_include_dir(&template, &dir))
                    .unwrap_or_else(|err| panic!("unable to write {}: {err}", resolved.display()));
                resolved
            }
            Err(_) => manifest_dir.join("wrapper.h"),
        }
    }

    fn link_libraries() {
        if let Ok(dir) = env::var("NCURSESW_LIB_DIR") {
            println!("cargo:rustc-link-search=native={dir}");
        }

        let core = env::var("NCURSESW_LIB").unwrap_or_else(|_| DEFAULT_LIB.to_string());
        // Extension libraries follow the core library's wide/narrow naming
        let suffix = if core.ends_with('w') { "w" } else { "" };

        println!("cargo:rustc-link-lib={core}");
        for ext in EXTENSION_LIBS {
            println!("cargo:rustc-link-lib={ext}{suffix}");
        }
    }

    pub(super) fn generate() {
        let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
        let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));

        link_libraries();

        let header = umbrella_header(&manifest_dir, &out_dir);
        let text = fs::read_to_string(&header)
            .unwrap_or_else(|err| panic!("unable to read {}: {err}", header.display()));

        let mut builder = generator::builder(&header, &text);
        if let Ok(dir) = env::var("NCURSESW_INCLUDE_DIR") {
            builder = builder.clang_arg(format!("-I{}", naming::normalize_include_dir(&dir)));
        }

        // An attribute the installed ncurses lacks fails here, not later
        let bindings = builder
            .generate()
            .unwrap_or_else(|err| panic!("unable to generate bindings for {}: {err}", header.display()));

        let out_path = out_dir.join("bindings.rs");
        bindings
            .write_to_file(&out_path)
            .unwrap_or_else(|err| panic!("unable to write {}: {err}", out_path.display()));
    }
}
