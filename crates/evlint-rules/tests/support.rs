#![allow(dead_code)]
//! Shared builders for rule tests.
//!
//! Declarations are built from real source text: each builder composes a
//! method snippet, recording the ranges a host syntax layer would have
//! recorded while it appends, and the fixture registers the event-library
//! hierarchy the resolver walks.

use evlint_common::TextRange;
use evlint_rules::RuleContext;
use evlint_syntax::{
    DeclFlags, Declaration, DocumentStore, Parameter, ReturnTypePosition, SourceDocument,
    SyntaxKind,
};
use evlint_types::{ClassKind, Ty, TypeIndex, well_known};
use smallvec::SmallVec;

pub struct Fixture {
    pub types: TypeIndex,
    pub docs: DocumentStore,
}

impl Fixture {
    /// Index with the hierarchy used across the rule tests:
    /// `demo.ClickEvent implements Event`, `java.io.IOException extends
    /// java.lang.Exception extends java.lang.Throwable`, and unrelated
    /// `java.lang.String`.
    pub fn new() -> Self {
        let mut types = TypeIndex::new();

        let event = types.add_class(well_known::EVENT_FQN, ClassKind::Interface);
        let click = types.add_class("demo.ClickEvent", ClassKind::Class);
        types.add_interface(click, event);

        let throwable = types.add_class(well_known::JAVA_THROWABLE_FQN, ClassKind::Class);
        let exception = types.add_class("java.lang.Exception", ClassKind::Class);
        let io_exception = types.add_class("java.io.IOException", ClassKind::Class);
        types.set_super_class(exception, throwable);
        types.set_super_class(io_exception, exception);

        types.add_class(well_known::KOTLIN_THROWABLE_FQN, ClassKind::Class);
        types.add_class("java.lang.String", ClassKind::Class);

        Fixture {
            types,
            docs: DocumentStore::new(),
        }
    }

    pub fn ctx(&self) -> RuleContext<'_> {
        RuleContext::new(&self.types, &self.docs)
    }

    pub fn ty(&self, canonical: &str) -> Ty {
        Ty::named(canonical, self.types.class_named(canonical))
    }
}

fn simple_name(fqn: &str) -> &str {
    fqn.rsplit('.').next().unwrap_or(fqn)
}

/// Builds a Java method declaration. Types are written fully qualified so
/// the source text and canonical text coincide.
pub struct JavaMethod {
    pub annotations: Vec<&'static str>,
    pub constructor: bool,
    pub return_ty: Option<&'static str>,
    pub name: &'static str,
    pub params: Vec<(&'static str, &'static str)>,
}

impl JavaMethod {
    pub fn handler(return_ty: &'static str, params: Vec<(&'static str, &'static str)>) -> Self {
        JavaMethod {
            annotations: vec![well_known::EVENT_HANDLER_FQN],
            constructor: false,
            return_ty: Some(return_ty),
            name: "onEvent",
            params,
        }
    }

    pub fn exception_handler(params: Vec<(&'static str, &'static str)>) -> Self {
        JavaMethod {
            annotations: vec![well_known::EXCEPTION_HANDLER_FQN],
            constructor: false,
            return_ty: Some("void"),
            name: "onDispatchFailure",
            params,
        }
    }

    pub fn ingest(&self, fx: &mut Fixture) -> Declaration {
        let mut text = String::new();
        for fqn in &self.annotations {
            text.push('@');
            text.push_str(simple_name(fqn));
            text.push('\n');
        }
        text.push_str("public ");

        let mut return_position = ReturnTypePosition::None;
        let mut return_ty = None;
        if let Some(rt) = self.return_ty {
            let start = text.len() as u32;
            text.push_str(rt);
            return_position = ReturnTypePosition::TypedNode(TextRange::new(start, text.len() as u32));
            return_ty = Some(fx.ty(rt));
            text.push(' ');
        }

        let name_start = text.len() as u32;
        text.push_str(self.name);
        let name_range = TextRange::new(name_start, text.len() as u32);

        let list_start = text.len() as u32;
        text.push('(');
        let mut params: SmallVec<[Parameter; 2]> = SmallVec::new();
        for (i, (ty_text, param_name)) in self.params.iter().enumerate() {
            if i > 0 {
                text.push_str(", ");
            }
            let param_start = text.len() as u32;
            text.push_str(ty_text);
            let type_range = TextRange::new(param_start, text.len() as u32);
            text.push(' ');
            text.push_str(param_name);
            params.push(Parameter {
                ty: fx.ty(ty_text),
                range: Some(TextRange::new(param_start, text.len() as u32)),
                type_range: Some(type_range),
            });
        }
        text.push(')');
        let param_list = TextRange::new(list_start, text.len() as u32);
        text.push_str(" { }\n");

        let range = TextRange::new(0, text.len() as u32);
        let doc = fx.docs.add(SourceDocument::new("Handlers.java", text));
        Declaration {
            doc,
            syntax: SyntaxKind::Java,
            flags: if self.constructor {
                DeclFlags::CONSTRUCTOR
            } else {
                DeclFlags::empty()
            },
            range,
            name_range: Some(name_range),
            annotations: self.annotations.iter().map(|s| s.to_string()).collect(),
            params,
            param_list: Some(param_list),
            return_ty,
            return_position,
        }
    }
}

/// How a Kotlin function spells its return type.
pub enum KotlinReturn {
    /// `: T` after the parameter list.
    Explicit(&'static str),
    /// Block body with no annotation; the return type is `Unit`.
    ImplicitUnit,
    /// Expression body with no annotation; the return type is inferred.
    Inferred(&'static str),
}

/// Builds a Kotlin function declaration.
pub struct KotlinFunction {
    pub annotations: Vec<&'static str>,
    pub name: &'static str,
    pub params: Vec<(&'static str, &'static str)>,
    pub return_spec: KotlinReturn,
}

impl KotlinFunction {
    pub fn handler(params: Vec<(&'static str, &'static str)>, return_spec: KotlinReturn) -> Self {
        KotlinFunction {
            annotations: vec![well_known::EVENT_HANDLER_FQN],
            name: "onEvent",
            params,
            return_spec,
        }
    }

    pub fn ingest(&self, fx: &mut Fixture) -> Declaration {
        let mut text = String::new();
        for fqn in &self.annotations {
            text.push('@');
            text.push_str(simple_name(fqn));
            text.push('\n');
        }
        text.push_str("fun ");

        let name_start = text.len() as u32;
        text.push_str(self.name);
        let name_range = TextRange::new(name_start, text.len() as u32);

        let list_start = text.len() as u32;
        text.push('(');
        let mut params: SmallVec<[Parameter; 2]> = SmallVec::new();
        for (i, (param_name, ty_text)) in self.params.iter().enumerate() {
            if i > 0 {
                text.push_str(", ");
            }
            let param_start = text.len() as u32;
            text.push_str(param_name);
            text.push_str(": ");
            let type_start = text.len() as u32;
            text.push_str(ty_text);
            let type_range = TextRange::new(type_start, text.len() as u32);
            params.push(Parameter {
                ty: fx.ty(ty_text),
                range: Some(TextRange::new(param_start, text.len() as u32)),
                type_range: Some(type_range),
            });
        }
        text.push(')');
        let param_list = TextRange::new(list_start, text.len() as u32);
        let after_list = text.len() as u32;

        let (return_ty, return_position) = match &self.return_spec {
            KotlinReturn::Explicit(rt) => {
                let colon_start = text.len() as u32;
                text.push(':');
                let colon = TextRange::new(colon_start, text.len() as u32);
                text.push(' ');
                let type_start = text.len() as u32;
                text.push_str(rt);
                let type_ref = TextRange::new(type_start, text.len() as u32);
                text.push_str(" { }\n");
                (
                    Some(fx.ty(rt)),
                    ReturnTypePosition::TrailingAnnotation { colon, type_ref },
                )
            }
            KotlinReturn::ImplicitUnit => {
                text.push_str(" { }\n");
                (
                    Some(fx.ty(well_known::KOTLIN_UNIT_FQN)),
                    ReturnTypePosition::ImplicitUnit {
                        insert_at: after_list,
                    },
                )
            }
            KotlinReturn::Inferred(rt) => {
                text.push_str(" = compute()\n");
                (
                    Some(fx.ty(rt)),
                    ReturnTypePosition::ImplicitUnit {
                        insert_at: after_list,
                    },
                )
            }
        };

        let range = TextRange::new(0, text.len() as u32);
        let doc = fx.docs.add(SourceDocument::new("Handlers.kt", text));
        Declaration {
            doc,
            syntax: SyntaxKind::Kotlin,
            flags: DeclFlags::empty(),
            range,
            name_range: Some(name_range),
            annotations: self.annotations.iter().map(|s| s.to_string()).collect(),
            params,
            param_list: Some(param_list),
            return_ty,
            return_position,
        }
    }
}

/// Builds a Scala function definition. Anchoring works on parameters, but
/// neither repair understands this syntax.
pub struct ScalaFunction {
    pub annotations: Vec<&'static str>,
    pub name: &'static str,
    pub params: Vec<(&'static str, &'static str)>,
    pub return_annotation: Option<&'static str>,
}

impl ScalaFunction {
    pub fn ingest(&self, fx: &mut Fixture) -> Declaration {
        let mut text = String::new();
        for fqn in &self.annotations {
            text.push('@');
            text.push_str(simple_name(fqn));
            text.push('\n');
        }
        text.push_str("def ");

        let name_start = text.len() as u32;
        text.push_str(self.name);
        let name_range = TextRange::new(name_start, text.len() as u32);

        let list_start = text.len() as u32;
        text.push('(');
        let mut params: SmallVec<[Parameter; 2]> = SmallVec::new();
        for (i, (param_name, ty_text)) in self.params.iter().enumerate() {
            if i > 0 {
                text.push_str(", ");
            }
            let param_start = text.len() as u32;
            text.push_str(param_name);
            text.push_str(": ");
            let type_start = text.len() as u32;
            text.push_str(ty_text);
            let type_range = TextRange::new(type_start, text.len() as u32);
            params.push(Parameter {
                ty: fx.ty(ty_text),
                range: Some(TextRange::new(param_start, text.len() as u32)),
                type_range: Some(type_range),
            });
        }
        text.push(')');
        let param_list = TextRange::new(list_start, text.len() as u32);

        let (return_ty, return_position) = match self.return_annotation {
            Some(rt) => {
                let colon_start = text.len() as u32;
                text.push(':');
                let colon = TextRange::new(colon_start, text.len() as u32);
                text.push(' ');
                let type_start = text.len() as u32;
                text.push_str(rt);
                let type_ref = TextRange::new(type_start, text.len() as u32);
                text.push_str(" = {}\n");
                (
                    Some(fx.ty(rt)),
                    ReturnTypePosition::TrailingAnnotation { colon, type_ref },
                )
            }
            None => {
                text.push_str(" = {}\n");
                (None, ReturnTypePosition::None)
            }
        };

        let range = TextRange::new(0, text.len() as u32);
        let doc = fx.docs.add(SourceDocument::new("Handlers.scala", text));
        Declaration {
            doc,
            syntax: SyntaxKind::Scala,
            flags: DeclFlags::empty(),
            range,
            name_range: Some(name_range),
            annotations: self.annotations.iter().map(|s| s.to_string()).collect(),
            params,
            param_list: Some(param_list),
            return_ty,
            return_position,
        }
    }
}

/// The source range a diagnostic covers, for assertions against the text the
/// declaration was built from.
pub fn diagnostic_text<'a>(fx: &'a Fixture, decl: &Declaration, start: u32, length: u32) -> &'a str {
    let doc = fx.docs.get(decl.doc).unwrap();
    doc.range_text(TextRange::new(start, start + length))
}
