// lexfreq-stats/src/hapax/mod.rs

/// Returns the percentage of hapax legomena (entries with count exactly 1)
/// among the given occurrence counts, floored to a whole percent.
///
/// An empty slice has no defined ratio and yields `None`; presentation
/// layers render that as "N/A".
pub fn hapax_percent(counts: &[u64]) -> Option<u8> {
    if counts.is_empty() {
        return None;
    }

    let hapax = counts.iter().filter(|&&count| count == 1).count();
    Some((hapax * 100 / counts.len()) as u8)
}
