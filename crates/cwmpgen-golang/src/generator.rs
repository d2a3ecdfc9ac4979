use std::collections::HashSet;

use cwmpgen_core::ir::DeviceModel;
use cwmpgen_core::transform::flat_lower;
use cwmpgen_core::{CodeGenerator, GeneratedFile};
use thiserror::Error;

use crate::emitters;

#[derive(Debug, Error)]
pub enum GolangError {
    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),
}

/// Configuration for the Go generator.
#[derive(Debug, Clone, Default)]
pub struct GolangConfig {
    /// Package name override; defaults to the flat-lowered model name.
    pub package: Option<String>,
}

/// Go struct generator.
///
/// Emits `common.go` (message interface and envelope) plus one message file
/// per top-level object carrying the flattened structs of that subtree. A
/// model with zero objects still yields `common.go`.
pub struct GolangGenerator;

impl CodeGenerator for GolangGenerator {
    type Config = GolangConfig;
    type Error = GolangError;

    fn generate(
        &self,
        model: &DeviceModel,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error> {
        let package = config
            .package
            .clone()
            .unwrap_or_else(|| flat_lower(&model.name.original));

        log::debug!(
            "generating Go package '{package}' for model '{}'",
            model.name.original
        );

        let mut files = vec![GeneratedFile {
            path: "common.go".to_string(),
            content: emitters::common::emit_common(model, &package)?,
        }];

        // Distinct object names can flat-lower to the same file name; a
        // numeric suffix keeps later files from overwriting earlier ones.
        let mut used: HashSet<String> = HashSet::new();
        used.insert("common.go".to_string());

        for obj in &model.objects {
            let stem = flat_lower(&obj.base_name);
            let mut path = format!("{stem}.go");
            let mut counter = 2;
            while !used.insert(path.clone()) {
                path = format!("{stem}{counter}.go");
                counter += 1;
            }
            if counter > 2 {
                log::warn!("object '{}' collides on {stem}.go; writing {path}", obj.path);
            }

            files.push(GeneratedFile {
                path,
                content: emitters::message::emit_message(model, obj, &package)?,
            });
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cwmpgen_core::{parse, transform};

    const TEST_MODEL: &str = r#"
<document>
  <model name="TestModel" version="1.0">
    <object name="TestObject" maxEntries="1">
      <description>A test object</description>
      <parameter name="TestParam">
        <syntax><string/></syntax>
      </parameter>
      <parameter name="NumberParam">
        <syntax><unsignedInt/></syntax>
      </parameter>
    </object>
  </model>
</document>
"#;

    fn test_model() -> DeviceModel {
        let document = parse::from_xml(TEST_MODEL).unwrap();
        transform::normalize(&document).unwrap()
    }

    #[test]
    fn generates_common_and_message_files() {
        let model = test_model();
        let files = GolangGenerator
            .generate(&model, &GolangConfig::default())
            .unwrap();

        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["common.go", "testobject.go"]);
    }

    #[test]
    fn message_file_declares_struct_and_fields() {
        let model = test_model();
        let files = GolangGenerator
            .generate(&model, &GolangConfig::default())
            .unwrap();

        let message = &files[1].content;
        assert!(message.contains("package testmodel"), "got:\n{message}");
        assert!(message.contains("type TestObject struct {"));
        assert!(message.contains("TestParam string"));
        assert!(message.contains("NumberParam int"));
        assert!(message.contains("func NewTestObject() *TestObject"));
        assert!(message.contains("func (m *TestObject) PathID() string"));
        assert!(message.contains("func (m *TestObject) MessageName() string"));
        assert!(message.contains("func (m *TestObject) Serialize() ([]byte, error)"));
        assert!(message.contains("func (m *TestObject) Parse(data []byte) error"));
    }

    #[test]
    fn common_file_declares_interface_and_envelope() {
        let model = test_model();
        let files = GolangGenerator
            .generate(&model, &GolangConfig::default())
            .unwrap();

        let common = &files[0].content;
        assert!(common.contains("package testmodel"));
        assert!(common.contains("type Message interface {"));
        assert!(common.contains("type Envelope struct {"));
    }

    #[test]
    fn package_override_applies() {
        let model = test_model();
        let config = GolangConfig {
            package: Some("tr181".to_string()),
        };
        let files = GolangGenerator.generate(&model, &config).unwrap();
        assert!(files[0].content.contains("package tr181"));
    }

    #[test]
    fn empty_model_still_emits_common() {
        let document = parse::from_xml(
            r#"<document><model name="Empty" version="1.0"/></document>"#,
        )
        .unwrap();
        let model = transform::normalize(&document).unwrap();

        let files = GolangGenerator
            .generate(&model, &GolangConfig::default())
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "common.go");
        assert!(files[0].content.contains("package empty"));
    }

    #[test]
    fn digit_first_names_emit_legal_identifiers() {
        let document = parse::from_xml(
            r#"
<document>
  <model name="TestModel" version="1.0">
    <object name="3GPP." maxEntries="1">
      <parameter name="2GFlag">
        <syntax><boolean/></syntax>
      </parameter>
    </object>
  </model>
</document>
"#,
        )
        .unwrap();
        let model = transform::normalize(&document).unwrap();

        let files = GolangGenerator
            .generate(&model, &GolangConfig::default())
            .unwrap();

        let message = &files[1].content;
        assert!(message.contains("type _3gpp struct {"), "got:\n{message}");
        assert!(message.contains("_2gFlag bool"));
        // No declaration may start with a bare digit.
        assert!(!message.contains("type 3gpp"));
    }

    #[test]
    fn colliding_file_names_get_suffixed() {
        let document = parse::from_xml(
            r#"
<document>
  <model name="TestModel" version="1.0">
    <object name="Device." maxEntries="1"/>
    <object name="DEVICE." maxEntries="1"/>
  </model>
</document>
"#,
        )
        .unwrap();
        let model = transform::normalize(&document).unwrap();

        let files = GolangGenerator
            .generate(&model, &GolangConfig::default())
            .unwrap();

        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["common.go", "device.go", "device2.go"]);
    }

    #[test]
    fn output_is_deterministic() {
        let model = test_model();
        let first = GolangGenerator
            .generate(&model, &GolangConfig::default())
            .unwrap();
        let second = GolangGenerator
            .generate(&model, &GolangConfig::default())
            .unwrap();

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.path, b.path);
            assert_eq!(a.content, b.content);
        }
    }
}
