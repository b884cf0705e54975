//! Fragment templates
//!
//! One pure template function per accessor variant, composed into a
//! full type-augmentation fragment. Emission is a pure function of
//! (descriptor, variant, guard symbol); the guard is never evaluated
//! here, only rendered into conditional-compilation directives.

use crate::features::resolution::Variant;
use crate::shared::models::MemberDescriptor;

use super::naming::derive_accessor_name;

/// Render the full augmentation fragment for one resolved member
pub fn render_fragment(descriptor: &MemberDescriptor, variant: Variant, guard: &str) -> String {
    let property = derive_accessor_name(&descriptor.member_name);
    let accessor = accessor_block(descriptor, variant, guard, &property);
    let owner = owner_block(descriptor, &accessor);

    let mut text = match variant {
        // The whole fragment disappears when the flag is absent.
        Variant::EditorProperty | Variant::EditorWritable => {
            format!("#if {}\n{}\n#endif", guard, owner)
        }
        Variant::ReadOnly | Variant::Hybrid => owner,
    };
    text.push('\n');
    text
}

/// Accessor body for one variant, unindented
fn accessor_block(
    descriptor: &MemberDescriptor,
    variant: Variant,
    guard: &str,
    property: &str,
) -> String {
    let value_type = &descriptor.value_type_display;
    let field = &descriptor.member_name;

    match variant {
        Variant::ReadOnly => read_only_accessor(value_type, property, field),
        Variant::EditorProperty => read_write_accessor(value_type, property, field),
        Variant::EditorWritable => {
            format!(
                "public {} {} {{ set => {} = value; }}",
                value_type, property, field
            )
        }
        Variant::Hybrid => format!(
            "#if {}\n{}\n#else\n{}\n#endif",
            guard,
            read_write_accessor(value_type, property, field),
            read_only_accessor(value_type, property, field),
        ),
    }
}

fn read_only_accessor(value_type: &str, property: &str, field: &str) -> String {
    format!("public {} {} => {};", value_type, property, field)
}

fn read_write_accessor(value_type: &str, property: &str, field: &str) -> String {
    format!(
        "public {} {}\n{{\n    get => {};\n    set => {} = value;\n}}",
        value_type, property, field, field
    )
}

/// Wrap an accessor block in the re-opened partial owner declaration,
/// nested in its namespace unless the owner sits in the global namespace
fn owner_block(descriptor: &MemberDescriptor, accessor: &str) -> String {
    let class_block = format!(
        "public partial class {}\n{{\n{}\n}}",
        descriptor.owner_type_display(),
        indent(accessor, 4),
    );

    if descriptor.owner_namespace.is_empty() {
        class_block
    } else {
        format!(
            "namespace {}\n{{\n{}\n}}",
            descriptor.owner_namespace,
            indent(&class_block, 4),
        )
    }
}

/// Indent every non-empty line by `width` spaces
fn indent(block: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                line.to_string()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
