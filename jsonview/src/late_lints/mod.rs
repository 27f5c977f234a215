use rawjson::{Pair, Value, ValueKind};

mod duplicate_object_keys;
mod empty_object_keys;

pub(crate) use duplicate_object_keys::*;
pub(crate) use empty_object_keys::*;

/// Calls `f` with the members of every object in the tree, outermost first.
fn for_each_object<'a>(value: &Value<'a>, f: &mut impl FnMut(&[Pair<'a>])) {
    match value.kind {
        ValueKind::Array => {
            for member in &value.array_members {
                for_each_object(member, f);
            }
        }
        ValueKind::Object => {
            f(&value.object_members);
            for pair in &value.object_members {
                for_each_object(&pair.value, f);
            }
        }
        _ => {}
    }
}
