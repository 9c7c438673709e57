//! Special-character escaping for emitted documents
//!
//! Cell text is plain data; these tables make it safe to drop into LaTeX
//! and Typst markup.

use phf::phf_map;

/// LaTeX replacements for characters with special meaning in text mode
pub static LATEX_ESCAPES: phf::Map<char, &'static str> = phf_map! {
    '\\' => "\\textbackslash{}",
    '&' => "\\&",
    '%' => "\\%",
    '$' => "\\$",
    '#' => "\\#",
    '_' => "\\_",
    '{' => "\\{",
    '}' => "\\}",
    '~' => "\\textasciitilde{}",
    '^' => "\\textasciicircum{}",
    '<' => "\\textless{}",
    '>' => "\\textgreater{}",
    '|' => "\\textbar{}",
};

/// Typst markup replacements
pub static TYPST_ESCAPES: phf::Map<char, &'static str> = phf_map! {
    '\\' => "\\\\",
    '#' => "\\#",
    '[' => "\\[",
    ']' => "\\]",
    '*' => "\\*",
    '_' => "\\_",
    '`' => "\\`",
    '$' => "\\$",
    '<' => "\\<",
    '>' => "\\>",
    '@' => "\\@",
    '~' => "\\~",
    '/' => "\\/",
    '=' => "\\=",
    '-' => "\\-",
    '+' => "\\+",
};

/// Escape text for a LaTeX document body
pub fn escape_latex(text: &str) -> String {
    escape_with(text, &LATEX_ESCAPES)
}

/// Escape text for Typst content blocks
pub fn escape_typst(text: &str) -> String {
    escape_with(text, &TYPST_ESCAPES)
}

fn escape_with(text: &str, table: &phf::Map<char, &'static str>) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match table.get(&ch) {
            Some(rep) => out.push_str(rep),
            None => out.push(ch),
        }
    }
    out
}
