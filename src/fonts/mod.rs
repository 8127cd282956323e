//! Font family enumeration for the font dialog.

/// Families that are always offered, since PDF export maps them to the
/// standard core fonts.
pub const CORE_FAMILIES: [&str; 4] = ["Arial", "Courier", "Helvetica", "Times"];

/// Family names known to the system font database, plus [`CORE_FAMILIES`].
///
/// Scans system fonts once. The list is deduplicated and sorted
/// case-insensitively.
pub fn system_families() -> Vec<String> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let families: Vec<String> = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
        .collect();
    tracing::debug!(
        faces = db.len(),
        families = families.len(),
        "scanned system fonts"
    );
    with_core_families(families)
}

/// Merge [`CORE_FAMILIES`] into `families`, dropping blanks and duplicates.
pub fn with_core_families(families: Vec<String>) -> Vec<String> {
    let mut all: Vec<String> = CORE_FAMILIES
        .iter()
        .map(ToString::to_string)
        .chain(
            families
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
        )
        .collect();
    all.sort_by_key(|name| name.to_lowercase());
    all.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
    all
}

/// Families containing `query` (case-insensitive). An empty query keeps all.
pub fn filter_families<'a>(families: &'a [String], query: &str) -> Vec<&'a String> {
    let query = query.trim().to_lowercase();
    families
        .iter()
        .filter(|name| query.is_empty() || name.to_lowercase().contains(&query))
        .collect()
}
