//! Built-in word list used when no words are supplied.

pub const BUILTIN_WORDS: &[&str] = &[
    "vase", "bat", "gods", "latte", "name", "apres", "spit", "joke", "ham", "dog", "act", "tale",
    "parse", "pits", "asper", "tab", "table", "mane", "late", "god", "cat", "table", "save",
    "spare",
];
