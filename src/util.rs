use itertools::Itertools;

/// Letters of a word in sorted order, lowercased
pub fn sorted_letters(word: &str) -> Vec<char> {
    word.chars().flat_map(char::to_lowercase).sorted().collect()
}

pub fn is_anagram(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count() && sorted_letters(a) == sorted_letters(b)
}

pub fn has_duplicates<T: AsRef<str>>(words: &[T]) -> bool {
    !words.iter().map(AsRef::<str>::as_ref).all_unique()
}
