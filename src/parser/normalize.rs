/// ASCII drawing sequences and their box-drawing replacements.
/// Longer sequences come first so `|--` is never half-replaced by `|-`.
const ASCII_DIALECT: [(&str, &str); 5] = [
    ("|--", "├──"),
    ("'--", "└──"),
    ("|  ", "│  "),
    ("|-", "├─"),
    ("'-", "└─"),
];

/// Rewrites the ASCII tree dialect into box-drawing characters.
pub fn normalize_tree_symbols(input: &str) -> String {
    ASCII_DIALECT
        .iter()
        .fold(input.to_string(), |text, (ascii, unicode)| {
            text.replace(ascii, unicode)
        })
}
