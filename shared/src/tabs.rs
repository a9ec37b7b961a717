/// Panel id a tab link points at (`"#sales"` -> `"sales"`).
pub fn tab_target(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Active flag of every panel once `target` is shown.
///
/// Returns `None` if `target` is not among `panel_ids`, so callers can leave
/// the current selection alone instead of hiding everything.
pub fn panel_activation<'a>(panel_ids: &[&'a str], target: &str) -> Option<Vec<(&'a str, bool)>> {
    if !panel_ids.contains(&target) {
        return None;
    }
    Some(
        panel_ids
            .iter()
            .map(|id| (*id, *id == target))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_fragment_names_the_panel() {
        assert_eq!(tab_target("#inventory"), Some("inventory"));
        assert_eq!(tab_target(" #routes "), Some("routes"));
        assert_eq!(tab_target("#"), None);
        assert_eq!(tab_target("/logistics/"), None);
        assert_eq!(tab_target(""), None);
    }

    #[test]
    fn activating_b_leaves_only_b_active() {
        let states = panel_activation(&["a", "b", "c"], "b").expect("known panel");
        assert_eq!(states, vec![("a", false), ("b", true), ("c", false)]);
    }

    #[test]
    fn unknown_target_changes_nothing() {
        assert_eq!(panel_activation(&["a", "b"], "z"), None);
    }
}
