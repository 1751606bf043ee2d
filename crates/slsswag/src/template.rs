//! Per-language handler templates
//!
//! Every runtime renders the same contract: a response helper that applies
//! the default headers and the body rules, a stub handler answering 501
//! `{"message":"not implemented!"}` through that helper, and a test checking
//! exactly that. The literal values come from `slsswag_sdk` so the
//! languages cannot drift apart, and the Node and C# helpers ship with a test
//! comparing their key casing and body serialization against values the SDK
//! computed at generation time.

use std::fmt;
use std::path::PathBuf;

use anyhow::Result;
use regex_lite::{Captures, Regex};
use serde_json::{json, Value};
use slsswag_sdk::normalize::camel_case_key;
use slsswag_sdk::response::{default_headers, NOT_IMPLEMENTED_MESSAGE};
use slsswag_sdk::Response;

use crate::config::GeneratorConfig;
use crate::openapi::{module_name, type_name, ParsedOperation};

/// Target language of the generated handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Runtime {
    Nodejs,
    Csharp,
    Rust,
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Runtime::Nodejs => "nodejs",
            Runtime::Csharp => "csharp",
            Runtime::Rust => "rust",
        };
        f.write_str(name)
    }
}

/// A file the generator should write, relative to the output directory
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
    /// Regenerated on every run. Everything else belongs to the user once
    /// written and is only replaced with `--force`.
    pub overwrite: bool,
}

impl GeneratedFile {
    fn scaffold(path: impl Into<PathBuf>, contents: String) -> Self {
        Self { path: path.into(), contents, overwrite: false }
    }

    fn index(path: impl Into<PathBuf>, contents: String) -> Self {
        Self { path: path.into(), contents, overwrite: true }
    }
}

/// Substitutes `{key}` placeholders in a single pass.
///
/// Unknown keys are left untouched, so braces in the generated code
/// survive, and substituted values are never rescanned.
pub struct Renderer {
    placeholder: Regex,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            placeholder: Regex::new(r"\{([a-z_]+)\}")?,
        })
    }

    pub fn render(&self, template: &str, vars: &[(&str, &str)]) -> String {
        self.placeholder
            .replace_all(template, |caps: &Captures| {
                vars.iter()
                    .find(|(key, _)| *key == &caps[1])
                    .map(|(_, value)| value.to_string())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

/// What every language target provides to the generator
pub trait RuntimeTemplate {
    /// `provider.runtime` in serverless.yml
    fn provider_runtime(&self) -> &'static str;

    /// Top-level serverless.yml section placed before `functions:`
    fn package_section(&self) -> Option<&'static str> {
        None
    }

    /// `handler:` value of a function entry
    fn handler_ref(&self, function: &ParsedOperation) -> String;

    /// Project files shared by all functions
    fn shared_files(&self, renderer: &Renderer, service: &str, functions: &[ParsedOperation]) -> Vec<GeneratedFile>;

    /// Stub and test for one function
    fn function_files(&self, renderer: &Renderer, function: &ParsedOperation) -> Vec<GeneratedFile>;
}

pub fn template_for(runtime: Runtime, config: &GeneratorConfig) -> Box<dyn RuntimeTemplate> {
    match runtime {
        Runtime::Nodejs => Box::new(NodeTemplate),
        Runtime::Csharp => Box::new(CsharpTemplate),
        Runtime::Rust => Box::new(RustTemplate {
            sdk_path: config.sdk_path.clone(),
        }),
    }
}

/// Double-quoted string literal. Valid as a YAML scalar, a JSON and
/// JavaScript string, and a TOML basic string.
pub fn quoted(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

/// Status code of the stub response, taken from the SDK
fn stub_status() -> String {
    Response::not_implemented().status_code.to_string()
}

/// Keys the generated helper tests check against the SDK's casing
const KEY_SAMPLES: &[&str] = &[
    "message",
    "snake_case_field",
    "alreadyCamel",
    "already_CAMEL",
    "PascalCase",
    "kebab-case",
    "userID",
    "HTTP_STATUS",
    "XMLHttpRequest",
    "field2Name",
    "__private_value",
];

/// `(key, expected)` pairs for [`KEY_SAMPLES`]
fn key_cases() -> Vec<(&'static str, String)> {
    KEY_SAMPLES.iter().map(|key| (*key, camel_case_key(key))).collect()
}

/// Payload the generated helper tests serialize
fn sample_payload() -> Value {
    json!({
        "userID": 1,
        "HTTP_STATUS": "ok",
        "nested-object": {
            "inner_value": "x",
            "dropped": null,
            "list_items": [{ "item_id": 1, "note": null }, null]
        },
        "missing": null
    })
}

/// Body the SDK renders for [`sample_payload`]
fn sample_body() -> String {
    Response::from_json(200, None, Some(sample_payload()))
        .body
        .unwrap_or_default()
}

/// Regular C# string literal
fn csharp_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

// ---------------------------------------------------------------------------
// Node.js
// ---------------------------------------------------------------------------

const NODE_RESPONSE_TEMPLATE: &str = r#"const DEFAULT_HEADERS = {
{headers}
};

const LOWER = /^[a-z]$/;
const UPPER = /^[A-Z]$/;
const SEPARATOR = /[^A-Za-z0-9]/;

const isPlainObject = (value) => Object.prototype.toString.call(value) === '[object Object]';

const byKey = ([a], [b]) => {
  if (a < b) {
    return -1;
  }
  return a > b ? 1 : 0;
};

// Splits on anything but ASCII letters and digits, before an upper case
// letter that follows a lower case one, and before the last capital of an
// acronym followed by lower case ("XMLHttp" is "XML" + "Http").
const words = (key) => {
  const found = [];
  key.split(SEPARATOR).forEach((part) => {
    const chars = Array.from(part);
    let start = 0;
    let mode = 'boundary';
    for (let i = 0; i < chars.length; i += 1) {
      const c = chars[i];
      const next = chars[i + 1];
      if (next === undefined) {
        found.push(chars.slice(start).join(''));
        break;
      }
      let nextMode = mode;
      if (LOWER.test(c)) {
        nextMode = 'lower';
      } else if (UPPER.test(c)) {
        nextMode = 'upper';
      }
      if (nextMode === 'lower' && UPPER.test(next)) {
        found.push(chars.slice(start, i + 1).join(''));
        start = i + 1;
        mode = 'boundary';
      } else if (mode === 'upper' && UPPER.test(c) && LOWER.test(next)) {
        found.push(chars.slice(start, i).join(''));
        start = i;
        mode = 'boundary';
      } else {
        mode = nextMode;
      }
    }
  });
  return found;
};

const capitalize = (word) => {
  const [head, ...rest] = Array.from(word);
  return head.toUpperCase() + rest.join('').toLowerCase();
};

const toLowerCamelCase = (key) => words(key)
  .map((word, index) => (index === 0 ? word.toLowerCase() : capitalize(word)))
  .join('');

// Keys come out sorted; when two keys collapse to one name the key sorting
// last wins.
const normalize = (value) => {
  if (Array.isArray(value)) {
    return value.map(normalize);
  }
  if (!isPlainObject(value)) {
    return value;
  }
  const fields = new Map();
  Object.entries(value)
    .filter(([, field]) => field !== null && field !== undefined)
    .sort(byKey)
    .forEach(([key, field]) => fields.set(toLowerCamelCase(key), normalize(field)));
  return Object.fromEntries([...fields].sort(byKey));
};

const response = (statusCode, headers, body) => {
  const envelope = {
    statusCode,
    headers: headers || { ...DEFAULT_HEADERS },
  };
  if (body !== undefined && body !== null) {
    envelope.body = JSON.stringify(normalize(body));
  }
  return envelope;
};

module.exports = response;
module.exports.toLowerCamelCase = toLowerCamelCase;
"#;

const NODE_PACKAGE_TEMPLATE: &str = r#"{
  "name": {service},
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "test": "jest"
  },
  "devDependencies": {
    "jest": "^29.7.0"
  }
}
"#;

const NODE_HANDLER_TEMPLATE: &str = r#"const response = require('../lib/response');

// {method} {path}
module.exports.handler = async (event, context) => response({status}, undefined, {
  message: '{message}',
});
"#;

const NODE_TEST_TEMPLATE: &str = r#"const { handler } = require('../functions/{name}');

test('{name} handler', async () => {
  const result = await Promise.resolve()
    .then(() => handler())
    .catch((invocationError) => ({ invocationError }));

  expect(result.invocationError).toBeUndefined();
  expect(result.statusCode).toBe({status});
  expect(JSON.parse(result.body).message).toBe('{message}');
});
"#;

const NODE_RESPONSE_TEST_TEMPLATE: &str = r#"const response = require('../lib/response');

// Expected values are rendered by the slsswag SDK.
const KEY_CASES = {key_cases};

test.each(KEY_CASES)('%s renders as %s', (key, expected) => {
  expect(response.toLowerCamelCase(key)).toBe(expected);
});

test('body matches the SDK serialization', () => {
  expect(response(200, undefined, {payload}).body).toBe({body});
});
"#;

pub struct NodeTemplate;

impl RuntimeTemplate for NodeTemplate {
    fn provider_runtime(&self) -> &'static str {
        "nodejs18.x"
    }

    fn handler_ref(&self, function: &ParsedOperation) -> String {
        format!("functions/{}.handler", function.name)
    }

    fn shared_files(&self, renderer: &Renderer, service: &str, _functions: &[ParsedOperation]) -> Vec<GeneratedFile> {
        let headers = default_headers()
            .iter()
            .map(|(name, value)| format!("  '{}': '{}',", name, value))
            .collect::<Vec<_>>()
            .join("\n");

        let service = quoted(service);
        let key_cases = Value::from(
            key_cases()
                .into_iter()
                .map(|(key, expected)| json!([key, expected]))
                .collect::<Vec<_>>(),
        )
        .to_string();
        let payload = sample_payload().to_string();
        let body = quoted(&sample_body());

        vec![
            GeneratedFile::scaffold(
                "lib/response.js",
                renderer.render(NODE_RESPONSE_TEMPLATE, &[("headers", headers.as_str())]),
            ),
            GeneratedFile::scaffold(
                "package.json",
                renderer.render(NODE_PACKAGE_TEMPLATE, &[("service", service.as_str())]),
            ),
            GeneratedFile::scaffold(
                "__tests__/response.test.js",
                renderer.render(NODE_RESPONSE_TEST_TEMPLATE, &[
                    ("key_cases", key_cases.as_str()),
                    ("payload", payload.as_str()),
                    ("body", body.as_str()),
                ]),
            ),
        ]
    }

    fn function_files(&self, renderer: &Renderer, function: &ParsedOperation) -> Vec<GeneratedFile> {
        let status = stub_status();
        let method = function.method.to_uppercase();
        let vars = [
            ("name", function.name.as_str()),
            ("method", method.as_str()),
            ("path", function.path.as_str()),
            ("status", status.as_str()),
            ("message", NOT_IMPLEMENTED_MESSAGE),
        ];

        vec![
            GeneratedFile::scaffold(
                format!("functions/{}.js", function.name),
                renderer.render(NODE_HANDLER_TEMPLATE, &vars),
            ),
            GeneratedFile::scaffold(
                format!("__tests__/{}.test.js", function.name),
                renderer.render(NODE_TEST_TEMPLATE, &vars),
            ),
        ]
    }
}

// ---------------------------------------------------------------------------
// C#
// ---------------------------------------------------------------------------

const CSHARP_HELPERS_TEMPLATE: &str = r#"using System;
using System.Collections.Generic;
using System.Linq;
using System.Text;
using System.Text.RegularExpressions;
using Amazon.Lambda.APIGatewayEvents;
using Amazon.Lambda.Core;
using Newtonsoft.Json;
using Newtonsoft.Json.Linq;

[assembly: LambdaSerializer(typeof(Amazon.Lambda.Serialization.SystemTextJson.DefaultLambdaJsonSerializer))]
namespace AwsDotnetCsharp
{
    public static class KeyCase
    {
        private enum Mode { Boundary, Lower, Upper }

        private static bool IsLower(char c) => c >= 'a' && c <= 'z';

        private static bool IsUpper(char c) => c >= 'A' && c <= 'Z';

        public static string ToLowerCamelCase(string key)
        {
            var words = Words(key);
            var result = new StringBuilder();
            for (var i = 0; i < words.Count; i++)
            {
                var word = words[i];
                if (i == 0)
                {
                    result.Append(word.ToLowerInvariant());
                }
                else
                {
                    result.Append(char.ToUpperInvariant(word[0]));
                    result.Append(word.Substring(1).ToLowerInvariant());
                }
            }
            return result.ToString();
        }

        // Splits on anything but ASCII letters and digits, before an upper
        // case letter that follows a lower case one, and before the last
        // capital of an acronym followed by lower case ("XMLHttp" is "XML" +
        // "Http").
        private static List<string> Words(string key)
        {
            var words = new List<string>();
            foreach (var part in Regex.Split(key, "[^A-Za-z0-9]"))
            {
                var start = 0;
                var mode = Mode.Boundary;
                for (var i = 0; i < part.Length; i++)
                {
                    var c = part[i];
                    if (i + 1 == part.Length)
                    {
                        words.Add(part.Substring(start));
                        break;
                    }
                    var next = part[i + 1];
                    var nextMode = IsLower(c) ? Mode.Lower : IsUpper(c) ? Mode.Upper : mode;
                    if (nextMode == Mode.Lower && IsUpper(next))
                    {
                        words.Add(part.Substring(start, i + 1 - start));
                        start = i + 1;
                        mode = Mode.Boundary;
                    }
                    else if (mode == Mode.Upper && IsUpper(c) && IsLower(next))
                    {
                        words.Add(part.Substring(start, i - start));
                        start = i;
                        mode = Mode.Boundary;
                    }
                    else
                    {
                        mode = nextMode;
                    }
                }
            }
            return words;
        }
    }

    public static class Helpers
    {
        private static readonly Dictionary<string, string> DefaultHeaders = new Dictionary<string, string>
        {
{headers}
        };

        public static APIGatewayProxyResponse Response(int statusCode, IDictionary<string, string> headers = null, object body = null)
        {
            return new APIGatewayProxyResponse
            {
                StatusCode = statusCode,
                Headers = headers ?? new Dictionary<string, string>(DefaultHeaders),
                Body = body != null ? Normalize(body as JToken ?? JToken.FromObject(body)).ToString(Formatting.None) : null
            };
        }

        // Null fields are dropped from objects and dictionaries alike. Keys
        // come out sorted; when two keys collapse to one name the key sorting
        // last wins.
        private static JToken Normalize(JToken token)
        {
            switch (token)
            {
                case JObject obj:
                    var fields = new SortedDictionary<string, JToken>(StringComparer.Ordinal);
                    foreach (var property in obj.Properties().OrderBy(p => p.Name, StringComparer.Ordinal))
                    {
                        if (property.Value.Type != JTokenType.Null)
                        {
                            fields[KeyCase.ToLowerCamelCase(property.Name)] = Normalize(property.Value);
                        }
                    }
                    return new JObject(fields.Select(field => new JProperty(field.Key, field.Value)));
                case JArray array:
                    return new JArray(array.Select(Normalize));
                default:
                    return token;
            }
        }
    }
}
"#;

const CSHARP_PROJECT_TEMPLATE: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net6.0</TargetFramework>
    <GenerateRuntimeConfigurationFiles>true</GenerateRuntimeConfigurationFiles>
    <AssemblyName>CsharpHandlers</AssemblyName>
  </PropertyGroup>
  <ItemGroup>
    <PackageReference Include="Amazon.Lambda.APIGatewayEvents" Version="2.7.0" />
    <PackageReference Include="Amazon.Lambda.Core" Version="2.2.0" />
    <PackageReference Include="Amazon.Lambda.Serialization.SystemTextJson" Version="2.4.0" />
    <PackageReference Include="Newtonsoft.Json" Version="13.0.3" />
  </ItemGroup>
</Project>
"#;

const CSHARP_TEST_PROJECT_TEMPLATE: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net6.0</TargetFramework>
    <IsPackable>false</IsPackable>
  </PropertyGroup>
  <ItemGroup>
    <PackageReference Include="Microsoft.NET.Test.Sdk" Version="17.8.0" />
    <PackageReference Include="xunit" Version="2.6.2" />
    <PackageReference Include="xunit.runner.visualstudio" Version="2.5.4" />
  </ItemGroup>
  <ItemGroup>
    <ProjectReference Include="../src/CsharpHandlers.csproj" />
  </ItemGroup>
</Project>
"#;

const CSHARP_HANDLER_TEMPLATE: &str = r#"using System.Threading.Tasks;
using Amazon.Lambda.APIGatewayEvents;
using Amazon.Lambda.Core;

namespace AwsDotnetCsharp
{
    // {method} {path}
    public class {type_name}Handler
    {
        public Task<APIGatewayProxyResponse> Base(APIGatewayProxyRequest request = null, ILambdaContext context = null)
        {
            return Task.FromResult(Helpers.Response({status}, null, new { message = "{message}" }));
        }
    }
}
"#;

const CSHARP_TEST_TEMPLATE: &str = r#"using System.Threading.Tasks;
using Amazon.Lambda.APIGatewayEvents;
using AwsDotnetCsharp;
using Newtonsoft.Json.Linq;
using Xunit;

public class {type_name}HandlerTest
{
    [Fact]
    public async Task ReturnsNotImplemented()
    {
        APIGatewayProxyResponse result = null;
        var invocationError = await Record.ExceptionAsync(async () => result = await new {type_name}Handler().Base());

        Assert.Null(invocationError);
        Assert.Equal({status}, result.StatusCode);
        Assert.Equal("{message}", (string)JObject.Parse(result.Body)["message"]);
    }
}
"#;

const CSHARP_HELPERS_TEST_TEMPLATE: &str = r#"using System.Collections.Generic;
using AwsDotnetCsharp;
using Newtonsoft.Json.Linq;
using Xunit;

// Expected values are rendered by the slsswag SDK.
public class HelpersTest
{
    [Theory]
{key_cases}
    public void KeysMatchSdk(string key, string expected)
    {
        Assert.Equal(expected, KeyCase.ToLowerCamelCase(key));
    }

    [Fact]
    public void BodyMatchesSdk()
    {
        var result = Helpers.Response(200, null, JToken.Parse({payload}));
        Assert.Equal({body}, result.Body);
    }

    [Fact]
    public void DictionaryNullsAreDropped()
    {
        var body = new Dictionary<string, object> { { "kept_value", 1 }, { "dropped", null } };
        Assert.Equal("{\"keptValue\":1}", Helpers.Response(200, null, body).Body);
    }
}
"#;

pub struct CsharpTemplate;

impl RuntimeTemplate for CsharpTemplate {
    fn provider_runtime(&self) -> &'static str {
        "dotnet6"
    }

    fn package_section(&self) -> Option<&'static str> {
        Some("package:\n  artifact: src/bin/Release/net6.0/deploy-package.zip\n")
    }

    fn handler_ref(&self, function: &ParsedOperation) -> String {
        format!("CsharpHandlers::AwsDotnetCsharp.{}Handler::Base", type_name(&function.name))
    }

    fn shared_files(&self, renderer: &Renderer, _service: &str, _functions: &[ParsedOperation]) -> Vec<GeneratedFile> {
        let headers = default_headers()
            .iter()
            .map(|(name, value)| format!("            {{ \"{}\", \"{}\" }},", name, value))
            .collect::<Vec<_>>()
            .join("\n");
        let key_cases = key_cases()
            .into_iter()
            .map(|(key, expected)| format!("    [InlineData({}, {})]", csharp_string(key), csharp_string(&expected)))
            .collect::<Vec<_>>()
            .join("\n");
        let payload = csharp_string(&sample_payload().to_string());
        let body = csharp_string(&sample_body());

        vec![
            GeneratedFile::scaffold(
                "src/Helpers.cs",
                renderer.render(CSHARP_HELPERS_TEMPLATE, &[("headers", headers.as_str())]),
            ),
            GeneratedFile::scaffold("src/CsharpHandlers.csproj", CSHARP_PROJECT_TEMPLATE.to_string()),
            GeneratedFile::scaffold("tests/CsharpHandlers.Tests.csproj", CSHARP_TEST_PROJECT_TEMPLATE.to_string()),
            GeneratedFile::scaffold(
                "tests/HelpersTest.cs",
                renderer.render(CSHARP_HELPERS_TEST_TEMPLATE, &[
                    ("key_cases", key_cases.as_str()),
                    ("payload", payload.as_str()),
                    ("body", body.as_str()),
                ]),
            ),
        ]
    }

    fn function_files(&self, renderer: &Renderer, function: &ParsedOperation) -> Vec<GeneratedFile> {
        let status = stub_status();
        let type_name = type_name(&function.name);
        let method = function.method.to_uppercase();
        let vars = [
            ("type_name", type_name.as_str()),
            ("method", method.as_str()),
            ("path", function.path.as_str()),
            ("status", status.as_str()),
            ("message", NOT_IMPLEMENTED_MESSAGE),
        ];

        vec![
            GeneratedFile::scaffold(
                format!("src/{}Handler.cs", type_name),
                renderer.render(CSHARP_HANDLER_TEMPLATE, &vars),
            ),
            GeneratedFile::scaffold(
                format!("tests/{}HandlerTest.cs", type_name),
                renderer.render(CSHARP_TEST_TEMPLATE, &vars),
            ),
        ]
    }
}

// ---------------------------------------------------------------------------
// Rust
// ---------------------------------------------------------------------------

const RUST_CARGO_TEMPLATE: &str = r#"[package]
name = {crate_name}
version = "0.1.0"
edition = "2021"

[dependencies]
{sdk_dependency}
serde = { version = "1", features = ["derive"] }
serde_json = "1"

[dev-dependencies]
tokio = { version = "1", features = ["rt", "macros"] }
"#;

const RUST_LIB_TEMPLATE: &str = r#"//! Function handlers. Regenerated by slsswag; edit the modules, not this file.

{modules}
"#;

const RUST_HANDLER_TEMPLATE: &str = r#"//! {method} {path}

use slsswag_sdk::prelude::*;

pub async fn handle(_req: Option<Request>, _ctx: Option<Context>) -> HandlerResult {
    Ok(Response::not_implemented())
}

#[cfg(test)]
mod tests {
    use slsswag_sdk::HandlerTestHarness;

    #[tokio::test]
    async fn conforms_to_stub_contract() {
        HandlerTestHarness::default().run(super::handle).await.assert_passed();
    }
}
"#;

pub struct RustTemplate {
    /// Local SDK checkout; the published version is used without it
    pub sdk_path: Option<PathBuf>,
}

impl RustTemplate {
    fn sdk_dependency(&self) -> String {
        match &self.sdk_path {
            Some(path) => format!("slsswag-sdk = {{ path = {} }}", quoted(&path.display().to_string())),
            None => format!("slsswag-sdk = {}", quoted(slsswag_sdk::VERSION)),
        }
    }
}

impl RuntimeTemplate for RustTemplate {
    fn provider_runtime(&self) -> &'static str {
        "provided.al2"
    }

    fn handler_ref(&self, function: &ParsedOperation) -> String {
        format!("{}.handle", module_name(&function.name))
    }

    fn shared_files(&self, renderer: &Renderer, service: &str, functions: &[ParsedOperation]) -> Vec<GeneratedFile> {
        let modules = functions
            .iter()
            .map(|function| format!("pub mod {};", module_name(&function.name)))
            .collect::<Vec<_>>()
            .join("\n");

        let crate_name = match module_name(service) {
            name if name.is_empty() => "handlers".to_string(),
            name => name,
        };
        let crate_name = quoted(&crate_name);
        let sdk_dependency = self.sdk_dependency();

        vec![
            GeneratedFile::scaffold(
                "Cargo.toml",
                renderer.render(RUST_CARGO_TEMPLATE, &[
                    ("crate_name", crate_name.as_str()),
                    ("sdk_dependency", sdk_dependency.as_str()),
                ]),
            ),
            GeneratedFile::index(
                "src/lib.rs",
                renderer.render(RUST_LIB_TEMPLATE, &[("modules", modules.as_str())]),
            ),
        ]
    }

    fn function_files(&self, renderer: &Renderer, function: &ParsedOperation) -> Vec<GeneratedFile> {
        let method = function.method.to_uppercase();
        let vars = [
            ("method", method.as_str()),
            ("path", function.path.as_str()),
        ];

        vec![GeneratedFile::scaffold(
            format!("src/{}.rs", module_name(&function.name)),
            renderer.render(RUST_HANDLER_TEMPLATE, &vars),
        )]
    }
}
