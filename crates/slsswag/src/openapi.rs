//! Swagger 2.0 / OpenAPI 3.x import
//!
//! Only the `paths` mapping matters: every HTTP operation under it becomes
//! one function.

use std::collections::HashSet;

use anyhow::{anyhow, Context, Result};
use heck::{ToSnakeCase, ToUpperCamelCase};
use regex_lite::Regex;
use serde_yaml::Value;

/// Keys of a path item that describe an operation. Anything else
/// (`parameters`, `$ref`, `summary`, ...) is ignored.
const HTTP_METHODS: [&str; 8] = ["get", "put", "post", "delete", "options", "head", "patch", "trace"];

/// One `(path, method)` operation turned into a function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOperation {
    /// Function name, unique within the document
    pub name: String,
    pub path: String,
    /// Lower case HTTP method
    pub method: String,
    pub description: Option<String>,
}

/// Parsed API document
#[derive(Debug)]
pub struct ApiDocument {
    pub title: Option<String>,
    pub operations: Vec<ParsedOperation>,
}

/// Parse a Swagger/OpenAPI document from YAML or JSON
pub fn parse_api_document(content: &str) -> Result<ApiDocument> {
    // Try YAML first, then JSON
    let root: Value = serde_yaml::from_str(content)
        .or_else(|_| serde_json::from_str(content))
        .context("Failed to parse API document as YAML or JSON")?;

    let title = root.get("info")
        .and_then(|info| info.get("title"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let paths = root.get("paths")
        .and_then(Value::as_mapping)
        .ok_or_else(|| anyhow!("paths is not a mapping or malformed"))?;

    let namer = FunctionNamer::new()?;
    let mut operations = Vec::new();

    for (path, item) in paths {
        let Some(path) = path.as_str() else {
            tracing::warn!("Skipping non-string path key {:?}", path);
            continue;
        };
        let Some(item) = item.as_mapping() else {
            tracing::warn!("Skipping path {} with no operations", path);
            continue;
        };

        for (method, operation) in item {
            let Some(method) = method.as_str().map(str::to_ascii_lowercase) else {
                continue;
            };
            if !HTTP_METHODS.contains(&method.as_str()) {
                continue;
            }

            operations.push(ParsedOperation {
                name: namer.name(path, &method),
                path: path.to_string(),
                description: describe(operation),
                method,
            });
        }
    }

    dedupe_names(&mut operations);
    tracing::debug!("Parsed {} operations", operations.len());

    Ok(ApiDocument { title, operations })
}

fn describe(operation: &Value) -> Option<String> {
    operation.get("summary")
        .or_else(|| operation.get("operationId"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Derives function names from a path and a method.
///
/// Path and method are concatenated, slashes removed, and every run of
/// other non-alphanumeric characters becomes `-`: `/pets/{petId}` + `get`
/// gives `pets-petId-get`.
pub struct FunctionNamer {
    separators: Regex,
}

impl FunctionNamer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            separators: Regex::new(r"[^A-Za-z0-9]+")?,
        })
    }

    pub fn name(&self, path: &str, method: &str) -> String {
        let joined = format!("{}{}", path, method).replace('/', "");
        self.separators
            .replace_all(&joined, "-")
            .trim_matches('-')
            .to_string()
    }
}

/// `snake_case` form of a function name that is also a valid Rust module
/// name
pub fn module_name(name: &str) -> String {
    let name = name.to_snake_case();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("fn_{}", name)
    } else {
        name
    }
}

/// `PascalCase` form of a function name that is also a valid C# type name
pub fn type_name(name: &str) -> String {
    let name = name.to_upper_camel_case();
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("Fn{}", name)
    } else {
        name
    }
}

/// Everything a function name turns into in generated code. Compared case
/// insensitively since handler files are named after them.
fn identifiers(name: &str) -> [String; 3] {
    [
        format!("name:{}", name.to_lowercase()),
        format!("mod:{}", module_name(name)),
        format!("type:{}", type_name(name).to_lowercase()),
    ]
}

/// Distinct names can still sanitize, or derive module and type names, to
/// the same thing; later operations get a numeric suffix until all of them
/// are free.
fn dedupe_names(operations: &mut [ParsedOperation]) {
    let mut taken: HashSet<String> = HashSet::new();
    for op in operations.iter_mut() {
        let mut candidate = op.name.clone();
        let mut suffix = 1;
        while identifiers(&candidate).iter().any(|id| taken.contains(id)) {
            suffix += 1;
            candidate = format!("{}-{}", op.name, suffix);
        }

        if candidate != op.name {
            tracing::warn!("Function name {} already used, renaming to {}", op.name, candidate);
            op.name = candidate;
        }
        taken.extend(identifiers(&op.name));
    }
}
