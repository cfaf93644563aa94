//! # Declaration Schema and Parsing
//!
//! This module defines the declarations a configuration file may contain and
//! turns YAML or XML sources into a validated [`Schema`]. Handlers consume the
//! schema; nothing here touches a registry.
//!
//! ## Formats
//!
//! YAML is the default. Each list item is a single-key mapping naming the
//! declaration:
//!
//! ```yaml
//! - selectorstring:
//!     cluster: docfolders
//!     value: /home/jeff/photos/
//!     label: Personal Photos
//! - selectorcluster:
//!     name: sitevids
//!     selectors:
//!       - value: /delta/
//!         label: Delta Path
//! - include: more-selectors.yaml
//! ```
//!
//! XML (`.xml` and `.zcml` files) uses one element per declaration under an
//! arbitrary root element:
//!
//! ```xml
//! <configure>
//!   <selectorstring cluster="docfolders" value="/home/jeff/photos/" label="Personal Photos"/>
//!   <selectorcluster name="sitevids">
//!     <selectorstring value="/delta/" label="Delta Path"/>
//!   </selectorcluster>
//!   <include file="more.zcml"/>
//! </configure>
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use xot::{NameId, Node, Xot};

use crate::error::{Error, Result};

/// A flat selector declaration naming its own cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorStringDirective {
    /// The cluster to group this selector under.
    #[serde(default)]
    pub cluster: Option<String>,
    /// The value used internally.
    pub value: String,
    /// Optional label shown to the user making the choice.
    #[serde(default)]
    pub label: Option<String>,
}

/// A selector nested inside a cluster declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NestedSelectorDirective {
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// A cluster declaration with its nested selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorClusterDirective {
    pub name: String,
    #[serde(default)]
    pub selectors: Vec<NestedSelectorDirective>,
}

/// All declarations a configuration source can contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    SelectorString(SelectorStringDirective),
    SelectorCluster(SelectorClusterDirective),
    /// Read another configuration file, relative to the including one.
    Include(String),
}

/// A configuration source as a list of declarations in document order.
pub type Schema = Vec<Declaration>;

/// Source format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Xml,
}

impl Format {
    /// `.xml` and `.zcml` files are XML, everything else is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("xml") | Some("zcml") => Format::Xml,
            _ => Format::Yaml,
        }
    }
}

/// Parse and validate a YAML configuration.
pub fn parse(yaml_content: &str) -> Result<Schema> {
    use serde_yaml::Value;

    let document: Value = serde_yaml::from_str(yaml_content)?;
    let items = match document {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(items) => items,
        _ => {
            return Err(Error::ConfigParse {
                message: "Expected a list of declarations".to_string(),
                hint: Some("Start each declaration with '- '".to_string()),
            })
        }
    };

    let mut schema = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Mapping(map) => schema.push(convert_yaml_mapping_to_declaration(map)?),
            _ => {
                return Err(Error::ConfigParse {
                    message: "Expected YAML mapping for declaration".to_string(),
                    hint: None,
                })
            }
        }
    }

    validate(&schema)?;
    Ok(schema)
}

/// Convert a single-key YAML mapping to a declaration
fn convert_yaml_mapping_to_declaration(map: serde_yaml::Mapping) -> Result<Declaration> {
    if map.len() != 1 {
        return Err(Error::ConfigParse {
            message: format!(
                "Declaration must have exactly one key, found {}",
                map.len()
            ),
            hint: Some("Put each declaration in its own list item".to_string()),
        });
    }

    let (key, value) = map.into_iter().next().ok_or_else(|| Error::ConfigParse {
        message: "Empty declaration mapping".to_string(),
        hint: None,
    })?;

    let kind = key.as_str().ok_or_else(|| Error::ConfigParse {
        message: "Declaration key must be a string".to_string(),
        hint: None,
    })?;

    match kind {
        "selectorstring" => Ok(Declaration::SelectorString(serde_yaml::from_value(value)?)),
        "selectorcluster" => Ok(Declaration::SelectorCluster(serde_yaml::from_value(value)?)),
        "include" => {
            let path = value.as_str().ok_or_else(|| Error::ConfigParse {
                message: "include expects a file path".to_string(),
                hint: None,
            })?;
            Ok(Declaration::Include(path.to_string()))
        }
        other => Err(Error::ConfigParse {
            message: format!("Unknown declaration type: {}", other),
            hint: Some("Expected selectorstring, selectorcluster or include".to_string()),
        }),
    }
}

/// Parse and validate an XML configuration.
pub fn parse_xml(xml_content: &str) -> Result<Schema> {
    let mut xot = Xot::new();
    let cluster_attr = xot.add_name("cluster");
    let value_attr = xot.add_name("value");
    let label_attr = xot.add_name("label");
    let name_attr = xot.add_name("name");
    let file_attr = xot.add_name("file");

    let document = xot.parse(xml_content).map_err(|e| Error::Xml {
        message: e.to_string(),
    })?;
    let root = xot
        .children(document)
        .find(|&child| xot.is_element(child))
        .ok_or_else(|| Error::Xml {
            message: "Document has no root element".to_string(),
        })?;

    let attr = |node: Node, name: NameId| xot.get_attribute(node, name).map(str::to_string);
    let required = |node: Node, name: NameId, what: &str| {
        attr(node, name).ok_or_else(|| Error::ConfigParse {
            message: format!(
                "<{}> is missing required attribute '{}'",
                element_name(&xot, node),
                what
            ),
            hint: None,
        })
    };

    let mut schema = Vec::new();
    for child in declaration_elements(&xot, root)? {
        let declaration = match element_name(&xot, child) {
            "selectorstring" => Declaration::SelectorString(SelectorStringDirective {
                cluster: attr(child, cluster_attr),
                value: required(child, value_attr, "value")?,
                label: attr(child, label_attr),
            }),
            "selectorcluster" => {
                let mut selectors = Vec::new();
                for nested in declaration_elements(&xot, child)? {
                    if element_name(&xot, nested) != "selectorstring" {
                        return Err(unknown_element(&xot, nested));
                    }
                    selectors.push(NestedSelectorDirective {
                        value: required(nested, value_attr, "value")?,
                        label: attr(nested, label_attr),
                    });
                }
                Declaration::SelectorCluster(SelectorClusterDirective {
                    name: required(child, name_attr, "name")?,
                    selectors,
                })
            }
            "include" => Declaration::Include(required(child, file_attr, "file")?),
            _ => return Err(unknown_element(&xot, child)),
        };
        schema.push(declaration);
    }

    validate(&schema)?;
    Ok(schema)
}

fn element_name(xot: &Xot, node: Node) -> &str {
    xot.element(node)
        .map(|element| xot.local_name_str(element.name()))
        .unwrap_or_default()
}

fn unknown_element(xot: &Xot, node: Node) -> Error {
    Error::ConfigParse {
        message: format!("Unknown declaration <{}>", element_name(xot, node)),
        hint: Some("Expected selectorstring, selectorcluster or include".to_string()),
    }
}

/// Child elements of `parent`, rejecting stray text.
fn declaration_elements(xot: &Xot, parent: Node) -> Result<Vec<Node>> {
    let mut elements = Vec::new();
    for child in xot.children(parent) {
        if xot.is_element(child) {
            elements.push(child);
        } else if let Some(text) = xot.text_str(child) {
            if !text.trim().is_empty() {
                return Err(Error::ConfigParse {
                    message: format!(
                        "Unexpected text {:?} in <{}>",
                        text.trim(),
                        element_name(xot, parent)
                    ),
                    hint: None,
                });
            }
        }
    }
    Ok(elements)
}

/// Check the field rules the parsers cannot express.
pub fn validate(schema: &Schema) -> Result<()> {
    for declaration in schema {
        match declaration {
            Declaration::SelectorString(directive) => {
                require_non_empty(&directive.value, "selectorstring", "value")?;
            }
            Declaration::SelectorCluster(directive) => {
                require_non_empty(&directive.name, "selectorcluster", "name")?;
                for selector in &directive.selectors {
                    require_non_empty(&selector.value, "selectorstring", "value")?;
                }
            }
            Declaration::Include(path) => {
                require_non_empty(path, "include", "file")?;
            }
        }
    }
    Ok(())
}

fn require_non_empty(field: &str, kind: &str, name: &str) -> Result<()> {
    if field.trim().is_empty() {
        return Err(Error::ConfigParse {
            message: format!("{} has an empty '{}'", kind, name),
            hint: Some(format!("Give every {} a non-empty {}", kind, name)),
        });
    }
    Ok(())
}

/// Parse content in the given format.
pub fn parse_as(content: &str, format: Format) -> Result<Schema> {
    match format {
        Format::Yaml => parse(content),
        Format::Xml => parse_xml(content),
    }
}

/// Parse a Schema from a file path, choosing the format by extension
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Schema> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    parse_as(&content, Format::from_path(path))
}
