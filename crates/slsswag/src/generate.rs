//! serverless.yml and handler scaffolding
//!
//! serverless.yml is rewritten on every run. Handler files are the user's
//! once they exist and are left alone unless the generator runs with
//! `force`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::config::GeneratorConfig;
use crate::openapi::{parse_api_document, ApiDocument, ParsedOperation};
use crate::template::{quoted, template_for, GeneratedFile, Renderer, Runtime, RuntimeTemplate};

pub const MANIFEST_FILE: &str = "serverless.yml";

const BASE_TEMPLATE: &str = r#"service: {service}

provider:
  name: aws
  runtime: {runtime}
  stage: {stage}
  region: {region}

{package}functions:
"#;

const FUNCTION_TEMPLATE: &str = r#"  {name}:
    handler: {handler}
{description}    events:
      - http:
          path: {path}
          method: {method}
          cors: true
"#;

/// What a generator run produced
#[derive(Debug, Default)]
pub struct GenerationSummary {
    pub manifest: PathBuf,
    pub functions: usize,
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

pub struct Generator {
    config: GeneratorConfig,
    runtime: Runtime,
    template: Box<dyn RuntimeTemplate>,
    renderer: Renderer,
}

impl Generator {
    pub fn new(config: GeneratorConfig, runtime: Runtime) -> Result<Self> {
        Ok(Self {
            template: template_for(runtime, &config),
            config,
            runtime,
            renderer: Renderer::new()?,
        })
    }

    /// Read `input` and generate everything for it
    pub fn run(&self, input: &Path) -> Result<GenerationSummary> {
        let content = fs::read_to_string(input)
            .with_context(|| format!("Failed to read API document {:?}", input))?;
        let document = parse_api_document(&content)
            .with_context(|| format!("Invalid API document {:?}", input))?;

        if let Some(title) = &document.title {
            tracing::info!("Generating {} functions for {} ({})", document.operations.len(), title, self.runtime);
        }

        self.generate(&document)
    }

    pub fn generate(&self, document: &ApiDocument) -> Result<GenerationSummary> {
        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;

        let manifest = output_dir.join(MANIFEST_FILE);
        fs::write(&manifest, self.render_manifest(document)?)
            .with_context(|| format!("Failed to write {:?}", manifest))?;
        tracing::info!("Wrote {:?}", manifest);

        let mut summary = GenerationSummary {
            manifest,
            functions: document.operations.len(),
            ..Default::default()
        };

        let mut files = self.template.shared_files(&self.renderer, &self.config.service_name, &document.operations);
        for operation in &document.operations {
            files.extend(self.template.function_files(&self.renderer, operation));
        }

        let mut seen = HashSet::new();
        for file in files {
            if !seen.insert(file.path.clone()) {
                bail!("{:?} would be generated twice", file.path);
            }
            let path = output_dir.join(&file.path);
            if self.write_file(&path, &file)? {
                summary.written.push(path);
            } else {
                summary.skipped.push(path);
            }
        }

        Ok(summary)
    }

    /// Render serverless.yml for `document`
    pub fn render_manifest(&self, document: &ApiDocument) -> Result<String> {
        let package = package_block(self.template.package_section());
        let service = quoted(&self.config.service_name);
        let stage = quoted(&self.config.stage);
        let region = quoted(&self.config.region);
        let mut manifest = self.renderer.render(BASE_TEMPLATE, &[
            ("service", service.as_str()),
            ("runtime", self.template.provider_runtime()),
            ("stage", stage.as_str()),
            ("region", region.as_str()),
            ("package", package.as_str()),
        ]);

        for operation in &document.operations {
            manifest.push('\n');
            manifest.push_str(&self.render_function(operation));
        }

        Ok(manifest)
    }

    /// Free-form values are quoted; names, methods and handler refs are
    /// sanitized already.
    fn render_function(&self, operation: &ParsedOperation) -> String {
        let description = match &operation.description {
            Some(text) => format!("    description: {}\n", quoted(text)),
            None => String::new(),
        };
        let handler = self.template.handler_ref(operation);
        let path = quoted(&operation.path);

        self.renderer.render(FUNCTION_TEMPLATE, &[
            ("name", operation.name.as_str()),
            ("handler", handler.as_str()),
            ("description", description.as_str()),
            ("path", path.as_str()),
            ("method", operation.method.as_str()),
        ])
    }

    /// Returns whether the file was written
    fn write_file(&self, path: &Path, file: &GeneratedFile) -> Result<bool> {
        if path.exists() && !file.overwrite && !self.config.force {
            tracing::debug!("Keeping existing {:?}", path);
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
        fs::write(path, &file.contents)
            .with_context(|| format!("Failed to write {:?}", path))?;

        tracing::info!("Wrote {:?}", path);
        Ok(true)
    }
}

fn package_block(section: Option<&str>) -> String {
    section.map(|s| format!("{}\n", s)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PETSTORE: &str = r#"
swagger: "2.0"
info:
  title: Petstore
paths:
  /pets:
    get:
      summary: "List pets: all of them"
  /pets/{petId}:
    delete: {}
"#;

    fn config(output_dir: &Path) -> GeneratorConfig {
        GeneratorConfig {
            output_dir: output_dir.to_path_buf(),
            service_name: "petstore".to_string(),
            stage: "dev".to_string(),
            region: "eu-west-1".to_string(),
            force: false,
            sdk_path: None,
        }
    }

    #[test]
    fn test_render_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(config(dir.path()), Runtime::Nodejs).unwrap();
        let document = parse_api_document(PETSTORE).unwrap();

        let manifest = generator.render_manifest(&document).unwrap();

        assert!(manifest.starts_with("service: \"petstore\"\n"));
        assert!(manifest.contains("  runtime: nodejs18.x\n"));
        assert!(manifest.contains("  region: \"eu-west-1\"\n"));
        assert!(manifest.contains("  petsget:\n    handler: functions/petsget.handler\n"));
        assert!(manifest.contains("    description: \"List pets: all of them\"\n"));
        assert!(manifest.contains("          path: \"/pets/{petId}\"\n          method: delete\n"));

        let parsed: serde_yaml::Value = serde_yaml::from_str(&manifest).unwrap();
        let functions = parsed["functions"].as_mapping().unwrap();
        assert_eq!(functions.len(), 2);
        assert_eq!(parsed["functions"]["pets-petId-delete"]["events"][0]["http"]["method"], "delete");
    }

    #[test]
    fn test_manifest_values_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(dir.path());
        config.service_name = "pets: v2".to_string();
        config.stage = "dev #1".to_string();
        let generator = Generator::new(config, Runtime::Nodejs).unwrap();
        let document = parse_api_document("paths:\n  \"/notes #1\":\n    get: {}\n").unwrap();

        let manifest = generator.render_manifest(&document).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&manifest).unwrap();

        assert_eq!(parsed["service"], "pets: v2");
        assert_eq!(parsed["provider"]["stage"], "dev #1");
        assert_eq!(parsed["functions"]["notes-1get"]["events"][0]["http"]["path"], "/notes #1");
    }

    #[test]
    fn test_colliding_identifiers_get_their_own_files() {
        let dir = tempfile::tempdir().unwrap();
        let document = parse_api_document("paths:\n  /a/{bC}:\n    get: {}\n  /a/{b_c}:\n    get: {}\n").unwrap();

        let summary = Generator::new(config(dir.path()), Runtime::Rust).unwrap().generate(&document).unwrap();
        assert!(summary.skipped.is_empty());

        let lib = fs::read_to_string(dir.path().join("src/lib.rs")).unwrap();
        assert!(lib.contains("pub mod a_b_c_get;\npub mod a_b_c_get_2;"));
        assert!(dir.path().join("src/a_b_c_get_2.rs").exists());

        let generator = Generator::new(config(dir.path()), Runtime::Csharp).unwrap();
        let manifest: serde_yaml::Value = serde_yaml::from_str(&generator.render_manifest(&document).unwrap()).unwrap();
        assert_eq!(
            manifest["functions"]["a-b-c-get-2"]["handler"],
            "CsharpHandlers::AwsDotnetCsharp.ABCGet2Handler::Base"
        );
    }

    #[test]
    fn test_csharp_manifest_has_package() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(config(dir.path()), Runtime::Csharp).unwrap();
        let document = parse_api_document(PETSTORE).unwrap();

        let manifest = generator.render_manifest(&document).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&manifest).unwrap();

        assert_eq!(parsed["provider"]["runtime"], "dotnet6");
        assert!(parsed["package"]["artifact"].as_str().is_some());
        assert_eq!(
            parsed["functions"]["petsget"]["handler"],
            "CsharpHandlers::AwsDotnetCsharp.PetsgetHandler::Base"
        );
    }

    #[test]
    fn test_run_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("api.yml");
        fs::write(&input, PETSTORE).unwrap();

        let out = dir.path().join("output");
        let generator = Generator::new(config(&out), Runtime::Nodejs).unwrap();
        let summary = generator.run(&input).unwrap();

        assert_eq!(summary.functions, 2);
        assert!(summary.skipped.is_empty());
        assert!(out.join(MANIFEST_FILE).exists());
        assert!(out.join("lib/response.js").exists());
        assert!(out.join("functions/petsget.js").exists());
        assert!(out.join("__tests__/pets-petId-delete.test.js").exists());
    }

    #[test]
    fn test_existing_handlers_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let document = parse_api_document(PETSTORE).unwrap();
        let generator = Generator::new(config(dir.path()), Runtime::Rust).unwrap();
        generator.generate(&document).unwrap();

        let handler = dir.path().join("src/petsget.rs");
        fs::write(&handler, "// user code").unwrap();

        let summary = generator.generate(&document).unwrap();
        assert_eq!(fs::read_to_string(&handler).unwrap(), "// user code");
        assert!(summary.skipped.contains(&handler));
        // the module index is always regenerated
        assert!(summary.written.contains(&dir.path().join("src/lib.rs")));

        let mut forced = config(dir.path());
        forced.force = true;
        Generator::new(forced, Runtime::Rust).unwrap().generate(&document).unwrap();
        assert!(fs::read_to_string(&handler).unwrap().contains("Response::not_implemented()"));
    }

    #[test]
    fn test_manifest_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(config(dir.path()), Runtime::Nodejs).unwrap();

        generator.generate(&parse_api_document(PETSTORE).unwrap()).unwrap();
        generator.generate(&parse_api_document("paths:\n  /health:\n    get: {}\n").unwrap()).unwrap();

        let manifest = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        assert!(manifest.contains("healthget"));
        assert!(!manifest.contains("petsget"));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let generator = Generator::new(config(dir.path()), Runtime::Nodejs).unwrap();

        let err = generator.run(&dir.path().join("missing.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read API document"));
    }
}
