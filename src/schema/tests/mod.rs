//! Unit tests for the schema module
//!
//! Covers value construction, member listing and package compilation
//! including imports.

#![allow(clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::DocError;
use crate::schema::{Kind, SchemaCompiler, Sources, TomlCompiler, Value};

#[test]
fn builder_reroots_member_paths() {
    let root = Value::new("", Kind::Struct).with_member(
        "#Run",
        Value::new("", Kind::Struct).with_member("image", Value::new("", Kind::String)),
    );

    let run = root.members()[0].value();
    assert!(run.is_definition());
    assert_eq!(run.path(), "#Run");
    assert_eq!(run.members()[0].value().path(), "#Run.image");
    assert!(!run.members()[0].is_definition());
}

#[test]
fn fields_can_exclude_definitions() {
    let root = Value::new("", Kind::Struct)
        .with_member("#Def", Value::new("", Kind::Struct))
        .with_member("plain", Value::new("", Kind::Int));

    let all: Vec<&str> = root.fields(true).unwrap().iter().map(|m| m.label()).collect();
    let plain: Vec<&str> = root.fields(false).unwrap().iter().map(|m| m.label()).collect();

    assert_eq!(all, vec!["#Def", "plain"]);
    assert_eq!(plain, vec!["plain"]);
}

#[test]
fn fields_of_scalar_root_fail() {
    let root = Value::new("", Kind::String);
    let err = root.fields(true).unwrap_err();

    assert!(matches!(err, DocError::FieldDiscovery { ref path, .. } if path == "<root>"));
}

#[test]
fn compile_str_preserves_declaration_order() {
    let root = TomlCompiler::new()
        .compile_str(
            r##"
            ["#Zeta"]
            ["#Alpha"]
            ["#Mid"]
            "##,
        )
        .unwrap();

    let labels: Vec<&str> = root.members().iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["#Zeta", "#Alpha", "#Mid"]);
}

#[test]
fn build_merges_imports() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.toml"),
        r##"
imports = ["@common"]
_doc = "Main package"

["#Run"]
_doc = "Run things"
"##,
    )
    .unwrap();
    fs::write(
        dir.path().join("common.toml"),
        r##"
["#Shared"]
_doc = "Shared definition"
"##,
    )
    .unwrap();

    let root = TomlCompiler::new()
        .build(&Sources::new(), dir.path().to_str().unwrap())
        .unwrap();

    let labels: Vec<&str> = root.members().iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["#Run", "#Shared"]);
    assert_eq!(root.doc(), ["Main package".to_string()]);
}

#[test]
fn build_detects_circular_imports() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.toml"), "imports = [\"@a\"]\n").unwrap();
    fs::write(dir.path().join("a.toml"), "imports = [\"@b\"]\n").unwrap();
    fs::write(dir.path().join("b.toml"), "imports = [\"@a\"]\n").unwrap();

    let err = TomlCompiler::new()
        .build(&Sources::new(), dir.path().to_str().unwrap())
        .unwrap_err();

    assert!(matches!(
        err,
        DocError::CircularImport { ref chain } if chain == "package.toml -> a.toml -> b.toml -> a.toml"
    ));
}

#[test]
fn build_reports_missing_import() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.toml"), "imports = [\"@missing\"]\n").unwrap();

    let err = TomlCompiler::new()
        .build(&Sources::new(), dir.path().to_str().unwrap())
        .unwrap_err();

    assert!(matches!(err, DocError::ImportError { .. }));
}

#[test]
fn build_reports_parse_errors() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.toml"), "[unterminated\n").unwrap();

    let err = TomlCompiler::new()
        .build(&Sources::new(), dir.path().to_str().unwrap())
        .unwrap_err();

    assert!(matches!(err, DocError::TomlParseError { .. }));
}
