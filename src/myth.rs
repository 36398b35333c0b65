//! The fixed catalog of Greek mythological figures and the search-alias
//! expansion used to broaden recall against the collection API.

/// Figures the curator offers for selection.
pub const FIGURES: [&str; 36] = [
    "Zeus",
    "Hera",
    "Athena",
    "Apollo",
    "Artemis",
    "Aphrodite",
    "Hermes",
    "Dionysus",
    "Ares",
    "Hephaestus",
    "Poseidon",
    "Hades",
    "Demeter",
    "Persephone",
    "Hestia",
    "Heracles",
    "Perseus",
    "Achilles",
    "Odysseus",
    "Theseus",
    "Jason",
    "Medusa",
    "Minotaur",
    "Sirens",
    "Cyclops",
    "Centaur",
    "Prometheus",
    "Orpheus",
    "Eros",
    "Nike",
    "The Muses",
    "The Fates",
    "The Graces",
    "Hecate",
    "Atlas",
    "Pandora",
];

/// Roman and alternate names for figures that appear in collection
/// metadata under more than one name.
const ALTERNATE_NAMES: [(&str, &[&str]); 7] = [
    ("Athena", &["Pallas Athena", "Minerva"]),
    ("Zeus", &["Jupiter"]),
    ("Aphrodite", &["Venus"]),
    ("Hermes", &["Mercury"]),
    ("Medusa", &["Gorgon"]),
    ("Heracles", &["Hercules"]),
    ("Dionysus", &["Bacchus"]),
];

/// Expands a figure name into the search queries used against the
/// collection API: the name itself, its Roman/alternate names, then the
/// generic `"<name> Greek"` / `"<name> myth"` / `"<name> deity"` variants.
/// First-seen order is preserved and duplicates removed.
pub fn search_aliases(name: &str) -> Vec<String> {
    let mut aliases = vec![name.to_string()];

    if let Some((_, alternates)) = ALTERNATE_NAMES.iter().find(|(n, _)| *n == name) {
        aliases.extend(alternates.iter().map(|a| a.to_string()));
    }

    aliases.push(format!("{name} Greek"));
    aliases.push(format!("{name} myth"));
    aliases.push(format!("{name} deity"));

    let mut seen = Vec::with_capacity(aliases.len());
    for alias in aliases {
        if !seen.contains(&alias) {
            seen.push(alias);
        }
    }
    seen
}
