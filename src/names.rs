use rand::seq::SliceRandom;
use rand::Rng;

pub const MAX_NAMES: usize = 200;

pub fn clean_names<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

pub fn slice_count<S: AsRef<str>>(raw: &[S]) -> usize {
    raw.iter()
        .filter(|name| !name.as_ref().trim().is_empty())
        .count()
}

pub fn push_name(list: &mut Vec<String>, input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() || list.len() >= MAX_NAMES {
        return false;
    }
    list.push(trimmed.to_owned());
    true
}

pub fn parse_bulk(text: &str) -> Vec<String> {
    let pieces: Vec<&str> = text
        .split(|c: char| c == '\n' || c == '\r' || c == ',' || c == ';')
        .collect();
    clean_names(&pieces)
}

pub fn ellipsize(text: &str, max: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max {
        return trimmed.to_owned();
    }
    let mut short: String = trimmed.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 name".to_owned()
    } else {
        format!("{count} names")
    }
}

pub fn readiness_label(count: usize) -> &'static str {
    match count {
        0 => "Add names",
        1 => "Add at least 2 names",
        _ => "Ready",
    }
}

pub fn shuffle_names<R: Rng + ?Sized>(list: &mut [String], rng: &mut R) {
    list.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn clean_names_drops_blanks_and_trims() {
        let raw = vec!["  Ana ", "", "   ", "Bo", "\tCy\n"];
        assert_eq!(clean_names(&raw), vec!["Ana", "Bo", "Cy"]);
        assert_eq!(slice_count(&raw), 3);
    }

    #[test]
    fn empty_list_counts_zero() {
        let raw: Vec<String> = Vec::new();
        assert_eq!(slice_count(&raw), 0);
        assert!(clean_names(&raw).is_empty());
    }

    #[test]
    fn push_name_rejects_blank_and_overflow() {
        let mut list = Vec::new();
        assert!(!push_name(&mut list, "   "));
        assert!(push_name(&mut list, "  Dee "));
        assert_eq!(list, vec!["Dee"]);

        let mut full = vec!["x".to_owned(); MAX_NAMES];
        assert!(!push_name(&mut full, "one more"));
        assert_eq!(full.len(), MAX_NAMES);
    }

    #[test]
    fn parse_bulk_splits_on_separators() {
        let parsed = parse_bulk("Ana, Bo;Cy\r\n\nDee ,");
        assert_eq!(parsed, vec!["Ana", "Bo", "Cy", "Dee"]);
    }

    #[test]
    fn ellipsize_counts_chars() {
        assert_eq!(ellipsize("  short  ", 16), "short");
        assert_eq!(ellipsize("Bartholomew the Great", 10), "Bartholom…");
        assert_eq!(ellipsize("éééééé", 4), "ééé…");
    }

    #[test]
    fn labels() {
        assert_eq!(count_label(1), "1 name");
        assert_eq!(count_label(3), "3 names");
        assert_eq!(readiness_label(0), "Add names");
        assert_eq!(readiness_label(1), "Add at least 2 names");
        assert_eq!(readiness_label(5), "Ready");
    }

    #[test]
    fn shuffle_keeps_entries() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut list: Vec<String> = (0..12).map(|i| format!("n{i}")).collect();
        let original = list.clone();
        shuffle_names(&mut list, &mut rng);
        let mut sorted = list.clone();
        sorted.sort();
        let mut expected = original;
        expected.sort();
        assert_eq!(sorted, expected);
    }
}
