//! Program snapshot adapter
//!
//! Serde model of the host's structural view: declared types with their
//! annotated field declarations. The host integration shim hands this
//! over as JSON (or constructs it in-process) and the adapter exposes it
//! through the `MemberSource` port.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::features::scanning::ports::{DeclaredMember, MemberSource, OwnerType};

/// One declared data member inside a type declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub name: String,
    /// Fully qualified display form of the declared type
    pub value_type: String,
    /// Raw annotation tokens, in source order
    #[serde(default)]
    pub annotations: Vec<String>,
}

impl FieldDeclaration {
    pub fn new(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
            annotations: Vec::new(),
        }
    }

    pub fn with_annotations(mut self, annotations: &[&str]) -> Self {
        self.annotations = annotations.iter().map(|a| a.to_string()).collect();
        self
    }
}

/// One named type declaration in the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Containing namespace; empty for the global namespace
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub generic_parameters: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,
}

impl TypeDeclaration {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            generic_parameters: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_generics(mut self, parameters: &[&str]) -> Self {
        self.generic_parameters = parameters.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    fn owner(&self) -> OwnerType {
        OwnerType {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
            generic_parameters: self.generic_parameters.clone(),
        }
    }
}

/// Structural snapshot of the program for one generation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSnapshot {
    #[serde(default)]
    pub types: Vec<TypeDeclaration>,
}

impl ProgramSnapshot {
    pub fn new(types: Vec<TypeDeclaration>) -> Self {
        Self { types }
    }

    /// Decode a snapshot from the host's JSON wire format
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl MemberSource for ProgramSnapshot {
    fn declared_members(&self) -> Box<dyn Iterator<Item = DeclaredMember> + '_> {
        Box::new(self.types.iter().flat_map(|ty| {
            ty.fields.iter().map(move |field| DeclaredMember {
                owner: Some(ty.owner()),
                name: field.name.clone(),
                value_type: field.value_type.clone(),
                annotations: field.annotations.clone(),
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_enumerates_all_fields() {
        let snapshot = ProgramSnapshot::new(vec![
            TypeDeclaration::new("Sample", "Entity")
                .with_field(FieldDeclaration::new("_id", "int"))
                .with_field(FieldDeclaration::new("_name", "string?")),
            TypeDeclaration::new("", "Global").with_field(FieldDeclaration::new("_x", "int")),
        ]);

        let members: Vec<_> = snapshot.declared_members().collect();
        assert_eq!(members.len(), 3);
        assert_eq!(members[0].owner.as_ref().unwrap().name, "Entity");
        assert_eq!(members[2].owner.as_ref().unwrap().namespace, "");
    }

    #[test]
    fn test_snapshot_from_json() {
        let json = r#"{
            "types": [
                {
                    "namespace": "Sample",
                    "name": "Entity",
                    "generic_parameters": ["T"],
                    "fields": [
                        {
                            "name": "_id",
                            "value_type": "int",
                            "annotations": ["GenerateReadOnly"]
                        }
                    ]
                }
            ]
        }"#;

        let snapshot = ProgramSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.types.len(), 1);
        assert_eq!(snapshot.types[0].generic_parameters, vec!["T".to_string()]);
        assert_eq!(snapshot.types[0].fields[0].annotations.len(), 1);
    }

    #[test]
    fn test_snapshot_from_json_rejects_garbage() {
        assert!(ProgramSnapshot::from_json("not json").is_err());
    }
}
