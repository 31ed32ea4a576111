use std::collections::HashSet;

/// Candidates split into those to write and the names already present
#[derive(Debug, Clone, PartialEq)]
pub struct NewByName<T> {
    pub new: Vec<T>,
    pub existing: Vec<String>,
}

/// Keep candidates whose name is not in `present`.
///
/// A name repeated within `candidates` is only kept the first time.
/// Candidates with an empty name are dropped.
pub fn select_new_by_name<T, F>(candidates: Vec<T>, present: &HashSet<String>, name_of: F) -> NewByName<T>
where
    F: Fn(&T) -> &str,
{
    let mut seen = present.clone();
    let mut selection = NewByName {
        new: Vec::new(),
        existing: Vec::new(),
    };

    for candidate in candidates {
        let name = name_of(&candidate).to_string();
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.clone()) {
            selection.new.push(candidate);
        } else {
            selection.existing.push(name);
        }
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_and_repeated_names_skipped() {
        let present = HashSet::from(["Trevor".to_string()]);
        let candidates = vec![
            "Trevor".to_string(),
            "Kip".to_string(),
            "Kip".to_string(),
            "".to_string(),
            "Jack".to_string(),
        ];

        let selection = select_new_by_name(candidates, &present, |name| name.as_str());

        assert_eq!(selection.new, vec!["Kip", "Jack"]);
        assert_eq!(selection.existing, vec!["Trevor", "Kip"]);
    }
}
