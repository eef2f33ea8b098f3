// 📰 Activity Feed - collapse consecutive repeated activities into runs
//
// A creator who receives 15 likes in a row sees one ("like", 15) entry
// instead of 15 separate ones.

/// Collapse consecutive equal items into `(item, run_length)` pairs.
///
/// Runs keep their left-to-right order. Takes anything iterable, so owned
/// `Vec<String>`s move their values into the result without cloning.
pub fn run_length_encode<I, T>(activities: I) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: PartialEq,
{
    let mut runs: Vec<(T, usize)> = Vec::new();

    for activity in activities {
        if let Some((last, count)) = runs.last_mut() {
            if *last == activity {
                *count += 1;
                continue;
            }
        }
        runs.push((activity, 1));
    }

    runs
}

/// Expand runs back into the original sequence.
pub fn run_length_decode<T: Clone>(runs: &[(T, usize)]) -> Vec<T> {
    runs.iter()
        .flat_map(|(item, count)| std::iter::repeat(item.clone()).take(*count))
        .collect()
}
