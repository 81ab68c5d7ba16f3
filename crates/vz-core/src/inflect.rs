//! Rule-based English noun singularization.

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("people", "person"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("dice", "die"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("viruses", "virus"),
    ("bonuses", "bonus"),
    ("campuses", "campus"),
    ("statuses", "status"),
    ("octopuses", "octopus"),
];

const UNCOUNTABLE: &[&str] = &[
    "news",
    "series",
    "species",
    "sheep",
    "fish",
    "deer",
    "moose",
    "aircraft",
    "information",
    "equipment",
    "rice",
    "money",
    "physics",
    "mathematics",
    "chess",
];

/// Stems of "-ves" plurals whose singular ends in "-f". Other "-ves" words
/// ("waves", "gloves") take the plain "-s" rule.
const F_STEMS: &[&str] = &[
    "wol", "lea", "hal", "cal", "shel", "thie", "loa", "sel", "el", "dwar", "scar", "whar",
    "hoo", "shea",
];

/// Stems of "-ves" plurals whose singular ends in "-fe".
const FE_STEMS: &[&str] = &["kni", "wi", "li"];

/// Stems of "-oes" plurals that drop "es". Other "-oes" words ("canoes",
/// "shoes") take the plain "-s" rule.
const O_STEMS: &[&str] = &[
    "hero", "potato", "tomato", "echo", "veto", "torpedo", "embargo", "volcano", "domino",
    "mosquito", "tornado",
];

/// Singular form of an English noun. Words already singular come back as-is.
/// Case of the first letter is preserved for irregular forms.
pub fn singular_noun(word: &str) -> String {
    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == lower) {
        return match_case(word, singular);
    }

    if let Some(stem) = word.strip_suffix("ies")
        && stem.len() > 1
    {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("ves") {
        let lower_stem = stem.to_lowercase();
        if F_STEMS.contains(&lower_stem.as_str()) {
            return format!("{stem}f");
        }
        if FE_STEMS.contains(&lower_stem.as_str()) {
            return format!("{stem}fe");
        }
    }
    if let Some(stem) = word.strip_suffix("es")
        && O_STEMS.contains(&stem.to_lowercase().as_str())
    {
        return stem.to_string();
    }
    for suffix in ["sses", "shes", "ches", "xes", "zzes"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            return format!("{stem}{}", &suffix[..suffix.len() - 2]);
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix('s')
        && !stem.is_empty()
    {
        return stem.to_string();
    }
    word.to_string()
}

fn match_case(original: &str, replacement: &str) -> String {
    let mut chars = replacement.chars();
    match (original.chars().next(), chars.next()) {
        (Some(o), Some(r)) if o.is_uppercase() => r.to_uppercase().chain(chars).collect(),
        _ => replacement.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        assert_eq!(singular_noun("cats"), "cat");
        assert_eq!(singular_noun("dogs"), "dog");
        assert_eq!(singular_noun("cities"), "city");
        assert_eq!(singular_noun("boxes"), "box");
        assert_eq!(singular_noun("churches"), "church");
        assert_eq!(singular_noun("classes"), "class");
        assert_eq!(singular_noun("heroes"), "hero");
    }

    #[test]
    fn test_ves() {
        assert_eq!(singular_noun("wolves"), "wolf");
        assert_eq!(singular_noun("knives"), "knife");
        assert_eq!(singular_noun("lives"), "life");
        assert_eq!(singular_noun("halves"), "half");
        assert_eq!(singular_noun("Shelves"), "Shelf");
    }

    #[test]
    fn test_ves_without_f_singular() {
        assert_eq!(singular_noun("waves"), "wave");
        assert_eq!(singular_noun("moves"), "move");
        assert_eq!(singular_noun("caves"), "cave");
        assert_eq!(singular_noun("gloves"), "glove");
        assert_eq!(singular_noun("drives"), "drive");
        assert_eq!(singular_noun("ves"), "ve");
    }

    #[test]
    fn test_es_plurals() {
        assert_eq!(singular_noun("buses"), "bus");
        assert_eq!(singular_noun("canoes"), "canoe");
        assert_eq!(singular_noun("shoes"), "shoe");
        assert_eq!(singular_noun("potatoes"), "potato");
        assert_eq!(singular_noun("houses"), "house");
    }

    #[test]
    fn test_irregular() {
        assert_eq!(singular_noun("children"), "child");
        assert_eq!(singular_noun("mice"), "mouse");
        assert_eq!(singular_noun("People"), "Person");
    }

    #[test]
    fn test_already_singular() {
        assert_eq!(singular_noun("cat"), "cat");
        assert_eq!(singular_noun("glass"), "glass");
        assert_eq!(singular_noun("bus"), "bus");
        assert_eq!(singular_noun("analysis"), "analysis");
        assert_eq!(singular_noun("s"), "s");
    }

    #[test]
    fn test_uncountable() {
        assert_eq!(singular_noun("sheep"), "sheep");
        assert_eq!(singular_noun("news"), "news");
        assert_eq!(singular_noun("series"), "series");
    }
}
