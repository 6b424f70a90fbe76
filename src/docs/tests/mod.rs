//! Unit tests for the documentation pipeline
//!
//! Renders small in-memory packages in every format and checks that the
//! formats agree on content. No filesystem access.

#![allow(clippy::panic)]

use crate::DocError;
use crate::docs::{
    DocsGenerator, FixedWidth, IoClassifier, OutputFormat, PackageJson, ScanContext,
    ValueDescriber,
};
use crate::schema::{Kind, TomlCompiler, Value};

const PACKAGE: &str = r##"
_doc = "Container helpers"

version = "1.0"

["#Run"]
_doc = "Run a container"

["#Run".image]
_type = "string"
_doc = "Image to run"
_attrs = ["input"]

["#Run".args]
_kind = "list"
_type = "[...string]"
_attrs = ["input"]

["#Run".exit]
_kind = "int"
_type = "int"
_doc = "Exit | code"
_attrs = ["output"]

["#Pin"]
_kind = "string"
_doc = "Not a struct"

["#Noop"]
"##;

fn package() -> Value {
    TomlCompiler::new().compile_str(PACKAGE).unwrap()
}

fn render(format: OutputFormat, root: &Value) -> String {
    DocsGenerator::new(format)
        .with_width_provider(FixedWidth(None))
        .render_to_string("example", root)
        .unwrap()
}

fn field_names(format: OutputFormat, root: &Value) -> Vec<String> {
    let output = render(format, root);
    match format {
        OutputFormat::Text => output
            .lines()
            .filter(|line| line.starts_with('#'))
            .map(str::to_string)
            .collect(),
        OutputFormat::Markdown => output
            .lines()
            .filter_map(|line| line.strip_prefix("### "))
            .map(str::to_string)
            .collect(),
        OutputFormat::Json => serde_json::from_str::<PackageJson>(&output)
            .unwrap()
            .fields
            .into_iter()
            .map(|field| field.name)
            .collect(),
    }
}

#[test]
fn text_report_matches_expected_layout() {
    let expected = concat!(
        "Package example\n",
        "\n",
        "Container helpers\n",
        "\n",
        "#Run\n",
        "\n",
        "    Run a container\n",
        "\n",
        "    Inputs:\n",
        "        image    string         Image to run\n",
        "        args     [...string]    -\n",
        "\n",
        "    Outputs:\n",
        "        exit    int    Exit | code\n",
        "\n",
        "#Noop\n",
        "\n",
        "    -\n",
        "\n",
        "    Inputs: none\n",
        "\n",
        "    Outputs: none\n",
    );

    assert_eq!(render(OutputFormat::Text, &package()), expected);
}

#[test]
fn markdown_report_matches_expected_layout() {
    let expected = concat!(
        "## Package example\n",
        "\n",
        "Container helpers\n",
        "\n",
        "### #Run\n",
        "\n",
        "Run a container\n",
        "\n",
        "#### #Run Inputs\n",
        "\n",
        "| Name             | Type              | Description        |\n",
        "| -------------    |:-------------:    |:-------------:     |\n",
        "|*image*           |``string``         |Image to run        |\n",
        "|*args*            |``[...string]``    |-                   |\n",
        "\n",
        "#### #Run Outputs\n",
        "\n",
        "| Name             | Type              | Description        |\n",
        "| -------------    |:-------------:    |:-------------:     |\n",
        "|*exit*            |``int``            |Exit \\| code        |\n",
        "\n",
        "### #Noop\n",
        "\n",
        "#### #Noop Inputs\n",
        "\n",
        "_No input._\n",
        "\n",
        "#### #Noop Outputs\n",
        "\n",
        "_No output._\n",
        "\n",
    );

    assert_eq!(render(OutputFormat::Markdown, &package()), expected);
}

#[test]
fn json_report_uses_each_fields_own_description() {
    let output = render(OutputFormat::Json, &package());
    let document: PackageJson = serde_json::from_str(&output).unwrap();

    assert_eq!(document.name, "example");
    assert_eq!(document.description, "Container helpers");
    assert_eq!(document.fields.len(), 2);

    let run = &document.fields[0];
    assert_eq!(run.description, "Run a container");
    assert_eq!(run.inputs.len(), 2);
    assert_eq!(run.inputs[0].name, "image");
    assert_eq!(run.inputs[0].type_name, "string");
    assert_eq!(run.inputs[1].description, "-");
    assert_eq!(run.outputs.len(), 1);
    assert_eq!(run.outputs[0].description, "Exit | code");

    assert_eq!(document.fields[1].description, "-");
    assert!(output.starts_with("{\n    \"Name\": \"example\""));
}

#[test]
fn formats_agree_on_field_set() {
    let root = package();

    let text = field_names(OutputFormat::Text, &root);
    let markdown = field_names(OutputFormat::Markdown, &root);
    let json = field_names(OutputFormat::Json, &root);

    assert_eq!(text, vec!["#Run", "#Noop"]);
    assert_eq!(text, markdown);
    assert_eq!(text, json);
}

#[test]
fn non_struct_and_plain_members_are_never_rendered() {
    let root = package();

    for format in [OutputFormat::Text, OutputFormat::Markdown, OutputFormat::Json] {
        let output = render(format, &root);
        assert!(!output.contains("#Pin"), "{format} output mentions #Pin");
        assert!(!output.contains("Not a struct"), "{format} output has #Pin docs");
        assert!(!output.contains("version"), "{format} output mentions version");
    }
}

#[test]
fn sentinel_doc_is_literal_in_text_and_hidden_in_markdown() {
    let root = TomlCompiler::new()
        .compile_str("[\"#Bare\"]\n")
        .unwrap();

    let text = render(OutputFormat::Text, &root);
    let markdown = render(OutputFormat::Markdown, &root);

    assert!(text.contains("#Bare\n\n    -\n"));
    assert!(text.starts_with("Package example\n\n-\n"));
    assert!(markdown.starts_with("## Package example\n\n### #Bare\n\n#### #Bare Inputs"));
}

#[test]
fn two_inputs_and_no_outputs_round_trip_through_json() {
    let root = TomlCompiler::new()
        .compile_str(
            r##"
            ["#Copy"]
            ["#Copy".from]
            _attrs = ["input"]
            _kind = "string"
            ["#Copy".to]
            _attrs = ["input"]
            _kind = "string"
            "##,
        )
        .unwrap();

    let output = render(OutputFormat::Json, &root);
    let document: PackageJson = serde_json::from_str(&output).unwrap();

    assert_eq!(document.fields.len(), 1);
    assert_eq!(document.fields[0].inputs.len(), 2);
    assert!(document.fields[0].outputs.is_empty());

    let raw: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(raw["Fields"][0]["Outputs"], serde_json::json!([]));
}

#[test]
fn text_descriptions_truncate_to_half_the_width() {
    let root = TomlCompiler::new()
        .compile_str(
            r##"
            ["#T"]
            ["#T".v]
            _kind = "string"
            _attrs = ["input"]
            _doc = "abcdefghijklmnop"
            "##,
        )
        .unwrap();

    let narrow = DocsGenerator::new(OutputFormat::Text)
        .with_width_provider(FixedWidth(Some(20)))
        .render_to_string("example", &root)
        .unwrap();
    let markdown = DocsGenerator::new(OutputFormat::Markdown)
        .with_width_provider(FixedWidth(Some(20)))
        .render_to_string("example", &root)
        .unwrap();

    assert!(narrow.contains("abcdefghi…\n"));
    assert!(!narrow.contains("abcdefghijklmnop"));
    assert!(markdown.contains("abcdefghijklmnop"));
}

#[test]
fn discovery_failure_writes_nothing() {
    let root = Value::new("", Kind::String);
    let mut out = Vec::new();

    let err = DocsGenerator::new(OutputFormat::Text)
        .generate("example", &root, &mut out)
        .unwrap_err();

    assert!(matches!(err, DocError::FieldDiscovery { .. }));
    assert!(out.is_empty());
}

#[test]
fn empty_package_renders_header_only() {
    let root = Value::new("", Kind::Struct).with_doc("Nothing here");

    assert_eq!(
        render(OutputFormat::Text, &root),
        "Package example\n\nNothing here\n"
    );
    assert_eq!(
        render(OutputFormat::Json, &root),
        "{\n    \"Name\": \"example\",\n    \"Description\": \"Nothing here\",\n    \"Fields\": []\n}\n"
    );
}

struct EverythingIsInput;

impl IoClassifier for EverythingIsInput {
    fn scan_inputs<'v>(&self, _ctx: &ScanContext<'_>, value: &'v Value) -> Vec<&'v Value> {
        value.members().iter().map(|member| member.value()).collect()
    }

    fn scan_outputs<'v>(&self, _ctx: &ScanContext<'_>, _value: &'v Value) -> Vec<&'v Value> {
        Vec::new()
    }
}

#[test]
fn row_count_matches_classifier_output() {
    let root = TomlCompiler::new()
        .compile_str(
            r##"
            ["#Many"]
            a = 1
            b = "two"
            c = [3]
            "##,
        )
        .unwrap();

    let output = DocsGenerator::new(OutputFormat::Json)
        .with_classifier(EverythingIsInput)
        .render_to_string("example", &root)
        .unwrap();
    let document: PackageJson = serde_json::from_str(&output).unwrap();

    let inputs = &document.fields[0].inputs;
    assert_eq!(inputs.len(), 3);
    assert_eq!(inputs[1].name, "b");
    assert_eq!(inputs[1].type_name, "\"two\"");
    assert!(document.fields[0].outputs.is_empty());

    let text = DocsGenerator::new(OutputFormat::Text)
        .with_classifier(EverythingIsInput)
        .with_width_provider(FixedWidth(None))
        .render_to_string("example", &root)
        .unwrap();
    let rows = text.lines().filter(|line| line.starts_with("        ")).count();
    assert_eq!(rows, 3);
}

struct PathDescriber;

impl ValueDescriber for PathDescriber {
    fn format_value(&self, value: &Value) -> String {
        format!("<{}>", value.kind())
    }

    fn doc_string(&self, value: &Value) -> String {
        format!("doc of {}", value.path())
    }
}

#[test]
fn custom_describer_supplies_every_string() {
    let generator = DocsGenerator::new(OutputFormat::Json).with_describer(PathDescriber);
    assert_eq!(generator.format(), OutputFormat::Json);

    let output = generator.render_to_string("example", &package()).unwrap();
    let document: PackageJson = serde_json::from_str(&output).unwrap();

    assert_eq!(document.description, "doc of ");
    assert_eq!(document.fields[0].description, "doc of #Run");

    let image = &document.fields[0].inputs[0];
    assert_eq!(image.name, "image");
    assert_eq!(image.type_name, "<struct>");
    assert_eq!(image.description, "doc of #Run.image");
}
