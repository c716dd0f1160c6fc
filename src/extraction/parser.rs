use crate::core::{Dialect, ParamEntry};

/// Parse the captured parameter text into entries.
///
/// Segments are split on `,` and exactly-empty segments are dropped;
/// whitespace-only segments survive and trim to an empty name. Only the
/// TypeScript dialect treats `:` as a name/type separator.
pub fn parse_param_list(
    captured: &str,
    dialect: Option<Dialect>,
    include_types: bool,
) -> Vec<ParamEntry> {
    let typed = dialect.is_some_and(|d| d.splits_type_annotations());

    captured
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if typed {
                parse_typed_segment(segment, include_types)
            } else {
                ParamEntry::Name(segment.trim().to_string())
            }
        })
        .collect()
}

fn parse_typed_segment(segment: &str, include_types: bool) -> ParamEntry {
    let (name, annotation) = match segment.split_once(':') {
        Some((name, annotation)) => (name, Some(annotation.trim())),
        None => (segment, None),
    };
    let name = name.trim().to_string();

    if include_types {
        ParamEntry::Typed {
            name,
            type_annotation: annotation.map(str::to_string),
        }
    } else {
        ParamEntry::Name(name)
    }
}
