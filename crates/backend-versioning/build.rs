//! ---
//! backend_section: "versioning"
//! backend_subsection: "build"
//! backend_type: "source"
//! backend_scope: "build"
//! backend_description: "Emits compile-time build metadata consumed by BuildInfo."
//! backend_version: "v0.1.0"
//! backend_owner: "tbd"
//! ---
use vergen::EmitBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Git metadata is optional: source tarballs build without a repository.
    EmitBuilder::builder()
        .build_timestamp()
        .cargo_target_triple()
        .git_sha(true)
        .rustc_semver()
        .emit()?;

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
