use super::value::{OptionRecord, OptionValue};

/// Folds `sources` into a copy of `target`, left to right.
///
/// Per field of each source:
/// - `Unset` values are skipped
/// - record over record merges recursively
/// - sequences replace the current value wholesale
/// - anything else replaces the current value
///
/// Inputs are never mutated.
#[must_use]
pub fn merge_records<'a, I>(target: &OptionRecord, sources: I) -> OptionRecord
where
    I: IntoIterator<Item = &'a OptionRecord>,
{
    let mut output = target.clone();
    for source in sources {
        merge_record_into(&mut output, source);
    }
    output
}

/// Applies one source record onto `output` in place.
pub fn merge_record_into(output: &mut OptionRecord, source: &OptionRecord) {
    for (key, value) in source {
        if value.is_unset() {
            continue;
        }
        if let (Some(OptionValue::Record(existing)), OptionValue::Record(incoming)) =
            (output.get_mut(key), value)
        {
            merge_record_into(existing, incoming);
            continue;
        }
        output.insert(key.clone(), value.clone());
    }
}

/// Per-value merge rule; returns the value the accumulator should hold.
#[must_use]
pub fn merge_values(current: &OptionValue, incoming: &OptionValue) -> OptionValue {
    match (current, incoming) {
        (_, OptionValue::Unset) => current.clone(),
        (OptionValue::Record(existing), OptionValue::Record(incoming)) => {
            OptionValue::Record(merge_records(existing, [incoming]))
        }
        _ => incoming.clone(),
    }
}

/// Merges any number of optional option bags; later entries win.
///
/// Returns `None` only when every entry is `None`.
#[must_use]
pub fn merge_option_sets(option_sets: &[Option<&OptionRecord>]) -> Option<OptionRecord> {
    let mut defined = option_sets.iter().flatten();
    let first = defined.next()?;
    Some(merge_records(first, defined.copied()))
}
