use std::collections::BTreeSet;

/// Normalize a free-form tag: trim and lowercase. Returns None for tags
/// that are empty after trimming.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().to_lowercase();
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

/// Normalize a batch of tags into a set, dropping empties and duplicates
pub fn normalize_tags(raw: &[String]) -> BTreeSet<String> {
    raw.iter().filter_map(|tag| normalize_tag(tag)).collect()
}

/// Slugify a place name for comparison: lowercase, alphanumerics kept,
/// every other run of characters collapsed to a single hyphen.
/// "New Zealand" and "new  zealand" both become "new-zealand".
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut gap = false;
    for ch in raw.trim().chars() {
        if ch.is_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            gap = true;
        }
    }
    slug
}

/// Overlap ratio between two tag sets (0-1)
///
/// shared / max(|a|, |b|), so a destination with many tags is not rewarded
/// for covering one of them, and either side being empty yields 0.
#[inline]
pub fn overlap_ratio(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let shared = a.intersection(b).count() as f64;
    shared / a.len().max(b.len()) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("  Culture "), Some("culture".to_string()));
        assert_eq!(normalize_tag("ADVENTURE"), Some("adventure".to_string()));
        assert_eq!(normalize_tag("   "), None);
        assert_eq!(normalize_tag(""), None);
    }

    #[test]
    fn test_normalize_tags_dedupes() {
        let raw = vec![
            "Beach".to_string(),
            "beach".to_string(),
            " BEACH ".to_string(),
            "".to_string(),
        ];
        let tags = normalize_tags(&raw);
        assert_eq!(tags, set(&["beach"]));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("New Zealand"), "new-zealand");
        assert_eq!(slugify("  new  ZEALAND "), "new-zealand");
        assert_eq!(slugify("Japan"), "japan");
        assert_eq!(slugify("Bosnia & Herzegovina"), "bosnia-herzegovina");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_overlap_ratio_full_and_partial() {
        let dest = set(&["sightseeing", "temples"]);

        // Full coverage of a single-tag preference is still halved by the
        // larger destination set
        assert_eq!(overlap_ratio(&dest, &set(&["sightseeing"])), 0.5);

        // Identical sets overlap fully
        assert_eq!(overlap_ratio(&dest, &dest.clone()), 1.0);

        // Disjoint sets
        assert_eq!(overlap_ratio(&dest, &set(&["skiing"])), 0.0);
    }

    #[test]
    fn test_overlap_ratio_empty_sides() {
        let tags = set(&["hiking"]);
        let empty = BTreeSet::new();

        assert_eq!(overlap_ratio(&tags, &empty), 0.0);
        assert_eq!(overlap_ratio(&empty, &tags), 0.0);
        assert_eq!(overlap_ratio(&empty, &empty.clone()), 0.0);
    }

    #[test]
    fn test_overlap_ratio_uses_larger_set() {
        let small = set(&["hiking", "skiing"]);
        let large = set(&["hiking", "skiing", "surfing", "diving"]);

        // 2 shared / max(2, 4) = 0.5 regardless of argument order
        assert_eq!(overlap_ratio(&small, &large), 0.5);
        assert_eq!(overlap_ratio(&large, &small), 0.5);
    }
}
