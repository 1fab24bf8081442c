/// Treats missing, empty and whitespace-only strings the same way.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
