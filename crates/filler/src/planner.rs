use standing_intents_types::MAX_BATCH_SIZE;

/// Split `items` into consecutive batches the factory will accept.
///
/// `max_batch_size` is clamped to `1..=MAX_BATCH_SIZE`. Empty intent addresses are dropped
/// since the factory treats them as the end of a batch.
pub fn plan_batches<T, F>(items: Vec<T>, max_batch_size: usize, intent_of: F) -> Vec<Vec<T>>
where
    F: Fn(&T) -> &str,
{
    let size = max_batch_size.clamp(1, MAX_BATCH_SIZE);
    let mut batches: Vec<Vec<T>> = Vec::new();

    for item in items.into_iter().filter(|item| !intent_of(item).is_empty()) {
        match batches.last_mut() {
            Some(batch) if batch.len() < size => batch.push(item),
            _ => batches.push(vec![item]),
        }
    }

    batches
}
