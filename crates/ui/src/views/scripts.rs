pub(super) fn focus_show_root_script() -> String {
    let target = "show-root";
    format!("document.getElementById({target:?})?.focus();")
}
