use quiz_core::model::AnchorId;

pub(super) fn scroll_into_view_script(anchor: &AnchorId) -> String {
    let id = anchor.as_str();
    format!(
        r#"document.getElementById({id:?})?.scrollIntoView({{ behavior: "smooth", block: "center" }});"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_targets_anchor_id() {
        let js = scroll_into_view_script(&AnchorId::new("para-c-3"));
        assert_eq!(
            js,
            r#"document.getElementById("para-c-3")?.scrollIntoView({ behavior: "smooth", block: "center" });"#
        );
    }
}
