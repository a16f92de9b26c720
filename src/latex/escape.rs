//! Escaping of literal terminal text for the LaTeX body.

/// Makes `text` safe inside a LaTeX paragraph.
///
/// Special characters are replaced in a single pass, so the backslashes a
/// replacement introduces are never escaped again. Runs of spaces keep their
/// width: the first stays a normal space, the rest become forced `\ `.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut previous_space = false;

    for c in text.chars() {
        if c == ' ' {
            out.push_str(if previous_space { "\\ " } else { " " });
            previous_space = true;
            continue;
        }
        previous_space = false;

        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' | '}' | '$' | '#' | '%' | '_' | '&' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}
