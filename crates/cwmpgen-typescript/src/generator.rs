use cwmpgen_core::ir::DeviceModel;
use cwmpgen_core::{CodeGenerator, GeneratedFile};
use thiserror::Error;

use crate::emitters;

#[derive(Debug, Error)]
pub enum TypeScriptError {
    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),
}

/// Configuration for the TypeScript generator.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptConfig {
    /// Skip JSDoc comment blocks.
    pub no_jsdoc: bool,
}

/// TypeScript interface generator.
///
/// Emits one file per model. Every object, regardless of nesting depth,
/// becomes a flat top-level interface; properties are unconditionally
/// optional because the schema does not universally declare required-ness.
pub struct TypeScriptGenerator;

impl CodeGenerator for TypeScriptGenerator {
    type Config = TypeScriptConfig;
    type Error = TypeScriptError;

    fn generate(
        &self,
        model: &DeviceModel,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error> {
        log::debug!(
            "generating TypeScript interfaces for model '{}'",
            model.name.original
        );

        Ok(vec![GeneratedFile {
            path: format!("{}.ts", model.name.identifier),
            content: emitters::interfaces::emit_interfaces(model, config.no_jsdoc)?,
        }])
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
      <object name="Nested" maxEntries="1">
        <parameter name="Flag">
          <syntax><boolean/></syntax>
        </parameter>
      </object>
    </object>
  </model>
</document>
"#;

    fn test_model() -> DeviceModel {
        let document = parse::from_xml(TEST_MODEL).unwrap();
        transform::normalize(&document).unwrap()
    }

    #[test]
    fn generates_one_file_per_model() {
        let model = test_model();
        let files = TypeScriptGenerator
            .generate(&model, &TypeScriptConfig::default())
            .unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "TestModel.ts");
    }

    #[test]
    fn interfaces_declare_optional_properties() {
        let model = test_model();
        let files = TypeScriptGenerator
            .generate(&model, &TypeScriptConfig::default())
            .unwrap();

        let content = &files[0].content;
        assert!(content.contains("export interface TestObject {"), "got:\n{content}");
        assert!(content.contains("TestParam?: string;"));
        assert!(content.contains("NumberParam?: number;"));
    }

    #[test]
    fn nested_objects_emit_flat_interfaces() {
        let model = test_model();
        let files = TypeScriptGenerator
            .generate(&model, &TypeScriptConfig::default())
            .unwrap();

        let content = &files[0].content;
        // Flat projection: the nested object is a sibling interface, not an
        // inline composition.
        assert!(content.contains("export interface Nested {"));
        assert!(content.contains("Flag?: boolean;"));
        assert!(!content.contains("Nested?:"));
    }

    #[test]
    fn no_jsdoc_strips_comments() {
        let model = test_model();
        let files = TypeScriptGenerator
            .generate(&model, &TypeScriptConfig { no_jsdoc: true })
            .unwrap();

        assert!(!files[0].content.contains("/**"));
    }

    #[test]
    fn empty_model_emits_shell_file() {
        let document = parse::from_xml(
            r#"<document><model name="Empty" version="1.0"/></document>"#,
        )
        .unwrap();
        let model = transform::normalize(&document).unwrap();

        let files = TypeScriptGenerator
            .generate(&model, &TypeScriptConfig::default())
            .unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "Empty.ts");
        assert!(files[0].content.contains("Empty"));
        assert!(!files[0].content.contains("export interface"));
    }

    #[test]
    fn output_is_deterministic() {
        let model = test_model();
        let first = TypeScriptGenerator
            .generate(&model, &TypeScriptConfig::default())
            .unwrap();
        let second = TypeScriptGenerator
            .generate(&model, &TypeScriptConfig::default())
            .unwrap();
        assert_eq!(first[0].content, second[0].content);
    }
}
