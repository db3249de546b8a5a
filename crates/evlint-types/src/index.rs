//! Class-hierarchy index.
//!
//! The host registers every class and interface the resolver may need to
//! walk: one `ClassDef` per type, with superclass and implemented-interface
//! edges by id. Cyclic and diamond-shaped graphs are legal inputs; the
//! resolver's visited set bounds its traversal.

use indexmap::IndexMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
    Annotation,
}

#[derive(Clone, Debug)]
pub struct ClassDef {
    pub qualified_name: String,
    pub kind: ClassKind,
    pub super_class: Option<ClassId>,
    pub interfaces: Vec<ClassId>,
}

/// Arena of class definitions plus a registration-ordered name table.
#[derive(Default, Debug)]
pub struct TypeIndex {
    classes: Vec<ClassDef>,
    by_name: IndexMap<String, ClassId>,
}

impl TypeIndex {
    pub fn new() -> Self {
        TypeIndex::default()
    }

    /// Register a class with no edges. Re-registering a qualified name
    /// returns the existing id.
    pub fn add_class(&mut self, qualified_name: &str, kind: ClassKind) -> ClassId {
        if let Some(&id) = self.by_name.get(qualified_name) {
            return id;
        }
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(ClassDef {
            qualified_name: qualified_name.to_string(),
            kind,
            super_class: None,
            interfaces: Vec::new(),
        });
        self.by_name.insert(qualified_name.to_string(), id);
        id
    }

    pub fn set_super_class(&mut self, id: ClassId, super_class: ClassId) {
        if let Some(def) = self.classes.get_mut(id.0 as usize) {
            def.super_class = Some(super_class);
        }
    }

    pub fn add_interface(&mut self, id: ClassId, interface: ClassId) {
        if let Some(def) = self.classes.get_mut(id.0 as usize) {
            if !def.interfaces.contains(&interface) {
                def.interfaces.push(interface);
            }
        }
    }

    pub fn get(&self, id: ClassId) -> Option<&ClassDef> {
        self.classes.get(id.0 as usize)
    }

    pub fn class_named(&self, qualified_name: &str) -> Option<ClassId> {
        self.by_name.get(qualified_name).copied()
    }

    pub fn qualified_name(&self, id: ClassId) -> Option<&str> {
        self.get(id).map(|def| def.qualified_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
