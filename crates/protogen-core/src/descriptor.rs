//! Building proto files from compiled descriptors.
//!
//! A `FileDescriptorProto` (as produced by `protoc --descriptor_set_out`
//! or embedded in generated code) is mapped onto the element tree so it
//! can be rendered back to `.proto` source.
//!
//! Only elements with a counterpart in [`crate::proto`] are carried over.
//! Nested messages, enums and extensions are skipped, oneof members
//! become plain fields, and field options are dropped.

use crate::error::{Error, Result};
use crate::proto::{
    Field, FieldLabel, FieldParams, File, Import, ImportKind, Message, Method, MethodParams,
    ProtoOption, Service, Syntax,
};
use prost::Message as _;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileOptions,
    MethodDescriptorProto, ServiceDescriptorProto,
};
use std::collections::HashSet;
use tracing::{debug, trace};

impl File {
    /// Decodes a serialized `FileDescriptorProto` and builds a file from it
    pub fn decode_descriptor(data: &[u8]) -> Result<Self> {
        let proto = FileDescriptorProto::decode(data)?;
        Self::from_descriptor(&proto)
    }

    /// Builds a file from a `FileDescriptorProto`
    pub fn from_descriptor(proto: &FileDescriptorProto) -> Result<Self> {
        let syntax = Syntax::try_from(proto.syntax())?;
        debug!(
            "Converting descriptor {} ({} messages, {} services)",
            proto.name(),
            proto.message_type.len(),
            proto.service.len()
        );

        let mut file = File::new(proto.package()).with_syntax(syntax);
        file.add_imports(imports(proto));

        if let Some(opts) = &proto.options {
            file.add_options(file_options(opts));
        }

        for message in &proto.message_type {
            file.add_messages([convert_message(message, syntax)?]);
        }

        file.add_services(proto.service.iter().map(convert_service));

        if !proto.enum_type.is_empty() || !proto.extension.is_empty() {
            trace!(
                "Skipping {} enums and {} extensions in {}",
                proto.enum_type.len(),
                proto.extension.len(),
                proto.name()
            );
        }

        Ok(file)
    }
}

fn imports(proto: &FileDescriptorProto) -> Vec<Import> {
    let public_deps: HashSet<_> = proto.public_dependency.iter().map(|&i| i as usize).collect();
    let weak_deps: HashSet<_> = proto.weak_dependency.iter().map(|&i| i as usize).collect();

    proto
        .dependency
        .iter()
        .enumerate()
        .map(|(i, dep)| {
            let kind = if public_deps.contains(&i) {
                ImportKind::Public
            } else if weak_deps.contains(&i) {
                ImportKind::Weak
            } else {
                ImportKind::Default
            };
            Import::new(dep.as_str()).with_kind(kind)
        })
        .collect()
}

fn file_options(opts: &FileOptions) -> Vec<ProtoOption> {
    let mut options = Vec::new();

    macro_rules! string_option {
        ($name:expr, $value:expr) => {
            if let Some(v) = $value {
                if !v.is_empty() {
                    options.push(ProtoOption::new($name, v.as_str()));
                }
            }
        };
    }

    macro_rules! bool_option {
        ($name:expr, $value:expr) => {
            if let Some(v) = $value {
                options.push(ProtoOption::new($name, v));
            }
        };
    }

    string_option!("java_package", opts.java_package.as_ref());
    string_option!("java_outer_classname", opts.java_outer_classname.as_ref());
    bool_option!("java_multiple_files", opts.java_multiple_files);
    string_option!("go_package", opts.go_package.as_ref());
    bool_option!("cc_enable_arenas", opts.cc_enable_arenas);
    string_option!("objc_class_prefix", opts.objc_class_prefix.as_ref());
    string_option!("csharp_namespace", opts.csharp_namespace.as_ref());
    string_option!("swift_prefix", opts.swift_prefix.as_ref());
    string_option!("php_namespace", opts.php_namespace.as_ref());
    string_option!("ruby_package", opts.ruby_package.as_ref());

    options
}

fn convert_message(message: &DescriptorProto, syntax: Syntax) -> Result<Message> {
    let mut converted = Message::new(message.name());

    for field in &message.field {
        converted.add_fields([convert_field(field, message, syntax)?]);
    }

    let nested = message
        .nested_type
        .iter()
        .filter(|n| !is_map_entry(n))
        .count();
    if nested > 0 || !message.enum_type.is_empty() {
        trace!(
            "Skipping {} nested messages and {} enums in {}",
            nested,
            message.enum_type.len(),
            message.name()
        );
    }

    // Each proto3 optional field owns one synthetic oneof
    let synthetic = message.field.iter().filter(|f| f.proto3_optional()).count();
    let oneofs = message.oneof_decl.len().saturating_sub(synthetic);
    if oneofs > 0 {
        trace!(
            "Flattening {} oneofs in {} into plain fields",
            oneofs,
            message.name()
        );
    }

    for field in message.field.iter().filter(|f| f.options.is_some()) {
        trace!(
            "Skipping options of field {}.{}",
            message.name(),
            field.name()
        );
    }

    Ok(converted)
}

fn convert_field(
    field: &FieldDescriptorProto,
    message: &DescriptorProto,
    syntax: Syntax,
) -> Result<Field> {
    let mut params = FieldParams::new(field_type_name(field)?, field.number());

    let label = match field.label() {
        Label::Repeated => match map_entry_types(field, message)? {
            Some((key, value)) => {
                params.field_type = format!("map<{}, {}>", key, value);
                FieldLabel::None
            }
            None => FieldLabel::Repeated,
        },
        Label::Required => FieldLabel::Required,
        Label::Optional => match syntax {
            Syntax::Proto2 => FieldLabel::Optional,
            Syntax::Proto3 if field.proto3_optional() => FieldLabel::Optional,
            Syntax::Proto3 => FieldLabel::None,
        },
    };
    params.label = label;

    Ok(Field::new(field.name(), params))
}

fn is_map_entry(message: &DescriptorProto) -> bool {
    message
        .options
        .as_ref()
        .map_or(false, |o| o.map_entry.unwrap_or(false))
}

/// Key and value types when `field` refers to a synthetic map entry
fn map_entry_types(
    field: &FieldDescriptorProto,
    message: &DescriptorProto,
) -> Result<Option<(String, String)>> {
    if field.r#type() != Type::Message {
        return Ok(None);
    }

    let type_name = field.type_name();
    let entry = message.nested_type.iter().find(|nested| {
        let expected_name = format!(".{}", nested.name());
        type_name.ends_with(&expected_name) || type_name == nested.name()
    });

    let Some(entry) = entry.filter(|e| is_map_entry(e)) else {
        return Ok(None);
    };

    let key = entry.field.iter().find(|f| f.number() == 1);
    let value = entry.field.iter().find(|f| f.number() == 2);
    match (key, value) {
        (Some(key), Some(value)) => Ok(Some((field_type_name(key)?, field_type_name(value)?))),
        _ => Ok(None),
    }
}

fn field_type_name(field: &FieldDescriptorProto) -> Result<String> {
    // Unresolved descriptors may carry only a type name
    if field.r#type.is_none() {
        return match field.type_name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(Error::invalid_descriptor(format!(
                "field '{}' has no type",
                field.name()
            ))),
        };
    }

    let name = match field.r#type() {
        Type::Double => "double",
        Type::Float => "float",
        Type::Int64 => "int64",
        Type::Uint64 => "uint64",
        Type::Int32 => "int32",
        Type::Fixed64 => "fixed64",
        Type::Fixed32 => "fixed32",
        Type::Bool => "bool",
        Type::String => "string",
        Type::Bytes => "bytes",
        Type::Uint32 => "uint32",
        Type::Sfixed32 => "sfixed32",
        Type::Sfixed64 => "sfixed64",
        Type::Sint32 => "sint32",
        Type::Sint64 => "sint64",
        Type::Group => "group",
        Type::Message | Type::Enum => {
            if field.type_name().is_empty() {
                return Err(Error::invalid_descriptor(format!(
                    "field '{}' references a message or enum without a type name",
                    field.name()
                )));
            }
            return Ok(field.type_name().to_string());
        }
    };
    Ok(name.to_string())
}

fn convert_service(service: &ServiceDescriptorProto) -> Service {
    Service::new(service.name()).with_methods(service.method.iter().map(convert_method))
}

fn convert_method(method: &MethodDescriptorProto) -> Method {
    let mut params = MethodParams::new(method.input_type(), method.output_type());
    params.client_streaming = method.client_streaming();
    params.server_streaming = method.server_streaming();

    let mut converted = Method::new(method.name(), params);
    if method
        .options
        .as_ref()
        .map_or(false, |o| o.deprecated.unwrap_or(false))
    {
        converted.add_options([ProtoOption::new("deprecated", true)]);
    }
    converted
}
