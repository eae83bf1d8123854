use std::{fs, path::PathBuf};

fn read_file(path: &str) -> String {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let path = manifest_dir.join(path);

    fs::read_to_string(&path)
        .unwrap_or_else(|error| panic!("failed to read file {}: {error}", path.display()))
}

#[test]
fn core_boundary_uses_thiserror_and_avoids_anyhow_miette() {
    let cargo_toml = read_file("Cargo.toml");
    let error_source = read_file("src/error.rs");

    assert!(
        cargo_toml.contains("thiserror"),
        "core crate must depend on `thiserror` for typed public errors",
    );
    assert!(
        !cargo_toml.contains("anyhow"),
        "core crate must not depend on `anyhow`",
    );
    assert!(
        !cargo_toml.contains("miette"),
        "core crate must not depend on `miette`",
    );

    assert!(
        error_source.contains("thiserror::Error"),
        "core error types must be declared with `thiserror::Error`",
    );

    for name in [
        "src/lib.rs",
        "src/dialect.rs",
        "src/statement.rs",
        "src/aggregate.rs",
        "src/task.rs",
    ] {
        let source = read_file(name);
        assert!(
            !source.contains("anyhow") && !source.contains("miette"),
            "{name} must not reach for anyhow/miette in the public boundary",
        );
    }
}
