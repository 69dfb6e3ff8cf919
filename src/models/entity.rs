use serde::de::DeserializeOwned;

/// Backend resource managed through the generic CRUD + status operations
pub trait Entity: DeserializeOwned + Clone + 'static {
    /// Route segment, e.g. `gallery` for `/gallery/:id`
    const RESOURCE: &'static str;
    /// Lowercase name used in user-facing messages
    const LABEL: &'static str;

    fn id(&self) -> &str;
}

/// Capitalized label for success banners ("Gallery created successfully")
pub fn display_label<E: Entity>() -> String {
    let mut chars = E::LABEL.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
