// ABOUTME: Minimal hardware description tree used to attach metadata to cells
// ABOUTME: Nodes carry named properties and children looked up by exact name

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

/// Property value types in the description tree
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Empty (boolean) property
    Empty,
    /// String value
    String(String),
    /// Multiple string values
    StringList(Vec<String>),
    /// 32-bit unsigned integer
    U32(u32),
}

/// Named property of a node
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name
    pub name: String,
    /// Property value
    pub value: PropertyValue,
}

/// Description tree node
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceTreeNode {
    /// Node name
    pub name: String,
    /// Node properties
    pub properties: Vec<Property>,
    /// Child nodes
    pub children: Vec<DeviceTreeNode>,
}

impl DeviceTreeNode {
    /// Create an empty node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`add_property`](Self::add_property)
    pub fn with_property(mut self, name: &str, value: PropertyValue) -> Self {
        self.add_property(Property {
            name: name.to_string(),
            value,
        });
        self
    }

    /// Builder form of [`add_child`](Self::add_child)
    pub fn with_child(mut self, child: DeviceTreeNode) -> Self {
        self.add_child(child);
        self
    }

    /// Add a property to the node
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    /// Add a child node
    pub fn add_child(&mut self, child: DeviceTreeNode) {
        self.children.push(child);
    }

    /// Find a property by name
    pub fn find_property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Find a direct child by exact name
    pub fn find_child(&self, name: &str) -> Option<&DeviceTreeNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Get property value as u32
    pub fn prop_u32(&self, name: &str) -> Option<u32> {
        self.find_property(name).and_then(|p| match &p.value {
            PropertyValue::U32(val) => Some(*val),
            _ => None,
        })
    }

    /// Get property value as string
    pub fn prop_string(&self, name: &str) -> Option<&str> {
        self.find_property(name).and_then(|p| match &p.value {
            PropertyValue::String(s) => Some(s.as_str()),
            PropertyValue::StringList(list) => list.first().map(String::as_str),
            _ => None,
        })
    }

    /// Check whether any `compatible` entry equals `compatible`
    pub fn is_compatible(&self, compatible: &str) -> bool {
        match self.find_property("compatible").map(|p| &p.value) {
            Some(PropertyValue::String(s)) => s == compatible,
            Some(PropertyValue::StringList(list)) => list.iter().any(|s| s == compatible),
            _ => false,
        }
    }

    /// Get iterator over child nodes
    pub fn iter_children(&self) -> core::slice::Iter<'_, DeviceTreeNode> {
        self.children.iter()
    }
}
