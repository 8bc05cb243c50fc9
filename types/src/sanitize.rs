//! Terminal-safe display text.
//!
//! Catalog text may come from an operator-supplied data file, so it is treated
//! as untrusted before it reaches the terminal. Escape sequences can rewrite the
//! screen, set the clipboard (OSC 52) or forge hyperlinks (OSC 8); all of them
//! are dropped along with stray control characters.

use std::borrow::Cow;

const ESC: char = '\x1b';
const BEL: char = '\x07';
const C1_CSI: char = '\u{009b}';

/// Where the scanner is inside a (possible) escape sequence.
#[derive(Clone, Copy)]
enum Scan {
    Text,
    /// Just saw ESC.
    Escape,
    /// Control sequence: parameters until a final byte.
    Control,
    /// Operating system command: until BEL or ESC `\`.
    Command,
    CommandEscape,
    /// DCS/PM/APC/SOS string: until ESC `\`.
    Str,
    StrEscape,
    /// Charset designation: swallow exactly one more char.
    Designate,
}

/// Strip escape sequences and control characters, keeping `\n`, `\t` and `\r`.
///
/// Returns `Cow::Borrowed` when the input is already clean.
#[must_use]
pub fn sanitize_display_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_unsafe) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut scan = Scan::Text;
    for c in input.chars() {
        scan = match scan {
            Scan::Text => plain(c, &mut out),
            Scan::Escape => match c {
                '[' => Scan::Control,
                ']' => Scan::Command,
                'P' | 'X' | '^' | '_' => Scan::Str,
                '(' | ')' | '*' | '+' | '#' | '%' | ' ' => Scan::Designate,
                '\x30'..='\x7e' => Scan::Text,
                _ => plain(c, &mut out),
            },
            Scan::Control => match c {
                '\x40'..='\x7e' => Scan::Text,
                '\x20'..='\x3f' => Scan::Control,
                _ => plain(c, &mut out),
            },
            Scan::Command => match c {
                BEL => Scan::Text,
                ESC => Scan::CommandEscape,
                _ => Scan::Command,
            },
            Scan::CommandEscape => match c {
                '\\' => Scan::Text,
                _ => Scan::Command,
            },
            Scan::Str => match c {
                ESC => Scan::StrEscape,
                _ => Scan::Str,
            },
            Scan::StrEscape => match c {
                '\\' => Scan::Text,
                _ => Scan::Str,
            },
            Scan::Designate => Scan::Text,
        };
    }

    Cow::Owned(out)
}

fn plain(c: char, out: &mut String) -> Scan {
    match c {
        ESC => Scan::Escape,
        C1_CSI => Scan::Control,
        c if is_unsafe(c) => Scan::Text,
        c => {
            out.push(c);
            Scan::Text
        }
    }
}

fn is_unsafe(c: char) -> bool {
    match c {
        '\n' | '\t' | '\r' => false,
        '\0'..='\x1f' | '\x7f' | '\u{0080}'..='\u{009f}' => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::sanitize_display_text;

    #[test]
    fn clean_text_is_borrowed() {
        let input = "Saraswathi Printers – over a decade of quality";
        assert!(matches!(sanitize_display_text(input), Cow::Borrowed(_)));
    }

    #[test]
    fn keeps_whitespace_controls() {
        let input = "Line 1\nLine 2\tTabbed\r\n";
        assert_eq!(sanitize_display_text(input), input);
    }

    #[test]
    fn strips_colors_and_cursor_moves() {
        assert_eq!(
            sanitize_display_text("\x1b[31mRed\x1b[0m and \x1b[10;20Hmoved"),
            "Red and moved"
        );
    }

    #[test]
    fn strips_osc_clipboard_and_hyperlinks() {
        assert_eq!(
            sanitize_display_text("a\x1b]52;c;SGVsbG8=\x07b"),
            "ab"
        );
        assert_eq!(
            sanitize_display_text("\x1b]8;;http://evil.test\x1b\\Click\x1b]8;;\x1b\\"),
            "Click"
        );
    }

    #[test]
    fn strips_dcs_strings() {
        assert_eq!(sanitize_display_text("x\x1bPdata\x1b\\y"), "xy");
    }

    #[test]
    fn strips_c0_c1_and_del() {
        assert_eq!(
            sanitize_display_text("A\x00B\u{0085}C\x7fD\u{009b}31mE"),
            "ABCDE"
        );
    }

    #[test]
    fn tolerates_truncated_sequences() {
        assert_eq!(sanitize_display_text("Text\x1b"), "Text");
        assert_eq!(sanitize_display_text("Text\x1b[31"), "Text");
        assert_eq!(sanitize_display_text("Text\x1b]0;title"), "Text");
    }
}
